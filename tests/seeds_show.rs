//! `seeds show` against dumps in a temporary directory.

use clap::Parser;
use gateway_qa::seeding::run_seeds_show;
use gateway_qa::GatewayOpts;
use gateway_types::AccountType;
use seeds::{SeedAccountResult, SeedUserResult, SeedsResult};

fn opts(dumps_dir: &std::path::Path) -> GatewayOpts {
    GatewayOpts::try_parse_from([
        "gateway-qa",
        "--dumps-dir",
        dumps_dir.to_str().unwrap(),
    ])
    .unwrap()
}

#[test]
fn test_show_reads_saved_dump() {
    let dir = tempfile::tempdir().unwrap();
    let opts = opts(dir.path());

    let mut user = SeedUserResult::new("user-1");
    user.accounts
        .push(SeedAccountResult::new("acc-1", AccountType::DebitCard));
    opts.dump_store()
        .save("existing_user_issue_virtual_card", &SeedsResult { users: vec![user] })
        .unwrap();

    run_seeds_show("existing_user_issue_virtual_card", opts).unwrap();
}

#[test]
fn test_show_missing_dump_fails_with_context() {
    let dir = tempfile::tempdir().unwrap();
    let err = run_seeds_show("existing_user_get_operations", opts(dir.path())).unwrap_err();

    let message = format!("{err:#}");
    assert!(message.contains("Failed to load seeds 'existing_user_get_operations'"));
}
