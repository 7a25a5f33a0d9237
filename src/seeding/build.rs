//! Seeds build command handler.

use crate::{GatewayOpts, TransportArg};
use anyhow::Context;
use clap::Args;
use gateway_fakers::Faker;
use gateway_grpc_client::GatewayGrpcClients;
use gateway_http_client::GatewayHttpClients;
use seeds::{
    find_seeds_scenario, GrpcSeedsGateway, HttpSeedsGateway, SeedsBuilder, SeedsGateway,
    SeedsPlan, SeedsResult,
};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

#[derive(Args, Clone, Debug)]
pub struct SeedsBuildArgs {
    /// Seeds scenario name (see `gateway-qa list`)
    pub scenario: String,

    /// Transport used to create entities
    #[arg(long, value_enum, default_value = "http")]
    pub transport: TransportArg,

    /// Build this YAML plan instead of the scenario's own and save it under the scenario name
    #[arg(long, value_name = "PATH")]
    pub plan: Option<PathBuf>,

    /// Seed for fake data (random if not set)
    #[arg(long)]
    pub seed: Option<u64>,
}

/// Run the seeds build command.
pub async fn run_seeds_build(args: SeedsBuildArgs, opts: GatewayOpts) -> anyhow::Result<()> {
    let faker = Arc::new(match args.seed {
        Some(seed) => Faker::seeded(seed),
        None => Faker::new(),
    });
    let gateway = seeds_gateway(args.transport, &opts, faker)?;
    let store = opts.dump_store();
    let start_time = Instant::now();

    let result = match &args.plan {
        Some(path) => {
            let plan = SeedsPlan::from_yaml_file(path)
                .with_context(|| format!("Failed to load seeds plan from {path:?}"))?;
            tracing::info!(
                "Building plan {:?} as '{}': {} gateway calls expected",
                path,
                args.scenario,
                plan.expected_calls()
            );
            let result = build_plan(gateway.as_ref(), &plan).await?;
            store
                .save(&args.scenario, &result)
                .with_context(|| format!("Failed to save seeds '{}'", args.scenario))?;
            result
        }
        None => {
            let scenario = find_seeds_scenario(&args.scenario).with_context(|| {
                format!(
                    "Unknown seeds scenario '{}' (see `gateway-qa list`)",
                    args.scenario
                )
            })?;
            scenario
                .build(gateway.as_ref(), &store)
                .await
                .with_context(|| format!("Failed to build seeds '{}'", args.scenario))?
        }
    };

    println!(
        "Seeds '{}' built over {:?} in {:.2?}: {} users, saved to {}",
        args.scenario,
        args.transport,
        start_time.elapsed(),
        result.users_count(),
        store.path_for(&args.scenario).display()
    );
    Ok(())
}

fn seeds_gateway(
    transport: TransportArg,
    opts: &GatewayOpts,
    faker: Arc<Faker>,
) -> anyhow::Result<Box<dyn SeedsGateway>> {
    Ok(match transport {
        TransportArg::Http => {
            let clients = GatewayHttpClients::new(&opts.http_config(), faker)
                .context("Failed to create HTTP gateway clients")?;
            Box::new(HttpSeedsGateway::new(clients))
        }
        TransportArg::Grpc => {
            let clients = GatewayGrpcClients::new(&opts.grpc_config(), faker)
                .context("Failed to create gRPC gateway clients")?;
            Box::new(GrpcSeedsGateway::new(clients))
        }
    })
}

async fn build_plan(gateway: &dyn SeedsGateway, plan: &SeedsPlan) -> anyhow::Result<SeedsResult> {
    let mut builder = SeedsBuilder::new(gateway);
    let result = builder.build(plan).await.context("Seeds build failed")?;
    let metrics = builder.metrics();
    tracing::info!(
        "Made {} gateway calls ({:.2} calls/sec)",
        metrics.calls(),
        metrics.calls_per_second()
    );
    Ok(result)
}
