//! Command-line argument parsing tests.

use clap::Parser;
use gateway_qa::loadtest::LoadtestRunArgs;
use gateway_qa::seeding::SeedsBuildArgs;
use gateway_qa::{GatewayOpts, TransportArg};
use std::path::PathBuf;
use std::time::Duration;

#[derive(Parser)]
struct BuildCli {
    #[command(flatten)]
    args: SeedsBuildArgs,
    #[command(flatten)]
    gateway: GatewayOpts,
}

#[derive(Parser)]
struct RunCli {
    #[command(flatten)]
    args: LoadtestRunArgs,
}

#[test]
fn test_seeds_build_defaults() {
    let cli = BuildCli::try_parse_from(["gateway-qa", "existing_user_get_operations"]).unwrap();

    assert_eq!(cli.args.scenario, "existing_user_get_operations");
    assert_eq!(cli.args.transport, TransportArg::Http);
    assert!(cli.args.plan.is_none());
    assert_eq!(cli.gateway.dumps_dir, PathBuf::from("dumps"));
}

#[test]
fn test_seeds_build_over_grpc() {
    let cli = BuildCli::try_parse_from([
        "gateway-qa",
        "existing_user_issue_virtual_card",
        "--transport",
        "grpc",
        "--gateway-grpc-url",
        "http://gateway:9003",
        "--gateway-timeout-secs",
        "5",
        "--dumps-dir",
        "/tmp/dumps",
    ])
    .unwrap();

    assert_eq!(cli.args.transport, TransportArg::Grpc);
    let grpc = cli.gateway.grpc_config();
    assert_eq!(grpc.url, "http://gateway:9003");
    assert_eq!(grpc.timeout, Duration::from_secs(5));
    assert_eq!(cli.gateway.http_config().timeout, Duration::from_secs(5));
    assert_eq!(
        cli.gateway.dump_store().path_for("x"),
        PathBuf::from("/tmp/dumps/x_seeds.json")
    );
}

#[test]
fn test_unknown_transport_is_rejected() {
    assert!(BuildCli::try_parse_from(["gateway-qa", "s", "--transport", "soap"]).is_err());
}

#[test]
fn test_loadtest_run_settings() {
    let cli = RunCli::try_parse_from([
        "gateway-qa",
        "http-get-accounts",
        "-u",
        "20",
        "-r",
        "2",
        "-t",
        "30",
    ])
    .unwrap();

    assert_eq!(cli.args.scenario, "http-get-accounts");
    let settings = cli.args.load.to_settings().unwrap();
    assert_eq!(settings.users, 20);
    assert_eq!(settings.spawn_rate, 2.0);
    assert_eq!(settings.run_time, Duration::from_secs(30));
    assert!(!cli.args.fail_on_errors);
}
