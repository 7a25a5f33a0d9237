//! Command-line interface for gateway-qa
//!
//! # Usage Examples
//!
//! ## Seeding
//! ```bash
//! # Build a seeds scenario over HTTP and save it to dumps/<scenario>_seeds.json
//! gateway-qa seeds build existing_user_get_operations \
//!   --gateway-http-url http://localhost:8003
//!
//! # Build over gRPC with reproducible fake data
//! gateway-qa seeds build existing_user_issue_virtual_card \
//!   --transport grpc --seed 42
//!
//! # Build a custom YAML plan under a new name
//! gateway-qa seeds build my_seeds --plan plans/my_seeds.yaml
//!
//! # Print entity counts of a saved dump
//! gateway-qa seeds show existing_user_get_operations
//! ```
//!
//! ## Load Testing
//! ```bash
//! # 100 new users over HTTP, 10 spawned per second, for five minutes
//! gateway-qa loadtest run http-get-accounts \
//!   --users 100 --spawn-rate 10 --run-time 300
//!
//! # Seeded users reading operations (needs `seeds build existing_user_get_operations`)
//! gateway-qa loadtest run http-existing-user-get-operations \
//!   --users 50 --wait-min 1 --wait-max 3
//! ```
//!
//! Gateway options also read `GATEWAY_HTTP_URL`, `GATEWAY_GRPC_URL`,
//! `GATEWAY_TIMEOUT_SECS` and `SEEDS_DUMPS_DIR`; logging is controlled by
//! `RUST_LOG`.

use clap::{Parser, Subcommand};
use gateway_qa::loadtest::{run_list, run_loadtest, LoadtestRunArgs};
use gateway_qa::seeding::{run_seeds_build, run_seeds_show, SeedsBuildArgs};
use gateway_qa::GatewayOpts;

#[derive(Parser)]
#[command(name = "gateway-qa")]
#[command(about = "Seed a banking API gateway with test data and run load scenarios against it")]
#[command(long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build and inspect seeds dumps
    Seeds {
        #[command(subcommand)]
        command: SeedsCommand,
    },

    /// Run load scenarios
    Loadtest {
        #[command(subcommand)]
        command: LoadtestCommand,
    },

    /// List seeds and load scenarios
    List,
}

#[derive(Subcommand)]
enum SeedsCommand {
    /// Create the entities of a seeds scenario and save the result
    Build {
        #[command(flatten)]
        args: SeedsBuildArgs,

        #[command(flatten)]
        gateway: GatewayOpts,
    },

    /// Print entity counts of a saved seeds dump
    Show {
        /// Seeds scenario name
        scenario: String,

        #[command(flatten)]
        gateway: GatewayOpts,
    },
}

#[derive(Subcommand)]
enum LoadtestCommand {
    /// Run a load scenario and print its report
    Run {
        #[command(flatten)]
        args: LoadtestRunArgs,

        #[command(flatten)]
        gateway: GatewayOpts,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    if let Err(e) = run().await {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
    Ok(())
}

async fn run() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Seeds { command } => match command {
            SeedsCommand::Build { args, gateway } => {
                run_seeds_build(args, gateway).await?;
            }
            SeedsCommand::Show { scenario, gateway } => {
                run_seeds_show(&scenario, gateway)?;
            }
        },
        Commands::Loadtest { command } => match command {
            LoadtestCommand::Run { args, gateway } => {
                run_loadtest(args, gateway).await?;
            }
        },
        Commands::List => run_list(),
    }

    Ok(())
}
