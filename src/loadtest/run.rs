//! Loadtest run command handler.

use crate::GatewayOpts;
use anyhow::Context;
use clap::Args;
use gateway_fakers::Faker;
use loadtest_runner::{LoadArgs, LoadReport, LoadRunner};
use loadtest_scenarios::{run_load_scenario, LoadScenario, ScenarioContext};
use std::sync::Arc;

#[derive(Args, Clone, Debug)]
pub struct LoadtestRunArgs {
    /// Load scenario name (see `gateway-qa list`)
    pub scenario: String,

    #[command(flatten)]
    pub load: LoadArgs,

    /// Exit with an error if any request failed
    #[arg(long)]
    pub fail_on_errors: bool,
}

/// Run the loadtest run command.
pub async fn run_loadtest(args: LoadtestRunArgs, opts: GatewayOpts) -> anyhow::Result<()> {
    let scenario = LoadScenario::find(&args.scenario).with_context(|| {
        format!(
            "Unknown load scenario '{}' (see `gateway-qa list`)",
            args.scenario
        )
    })?;
    let settings = args.load.to_settings().context("Invalid load settings")?;

    let faker = Arc::new(match settings.seed {
        Some(seed) => Faker::seeded(seed),
        None => Faker::new(),
    });
    let context = ScenarioContext {
        http: opts.http_config(),
        grpc: opts.grpc_config(),
        dumps: opts.dump_store(),
        faker,
    };

    let runner = LoadRunner::new(settings.clone())?;
    let metrics = run_load_scenario(scenario, &runner, &context)
        .await
        .with_context(|| format!("Load scenario '{}' failed", scenario.name()))?;

    let report = LoadReport::new(scenario.name(), settings, metrics);
    println!("{}", report.summary());
    print!("{}", report.format_table());

    if args.fail_on_errors && !report.passed() {
        anyhow::bail!("{} requests failed", report.metrics.totals().failures);
    }
    Ok(())
}
