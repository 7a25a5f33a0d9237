//! Load scenarios against the banking gateway.
//!
//! Each scenario is a [`loadtest_runner::TaskSet`] built from the typed
//! gateway clients:
//!
//! | Scenario | Transport | Tasks |
//! |----------|-----------|-------|
//! | `http-get-accounts` | HTTP | create user 2, open deposit account 2, get accounts 6 |
//! | `grpc-new-user-get-accounts` | gRPC | same as above |
//! | `http-existing-user-get-operations` | HTTP | get accounts, operations, summary (in order) |
//!
//! Tasks that need a user skip themselves until the virtual user has one.
//! Scenarios over seeded users read a dump produced by `seeds build`.

pub mod grpc_new_user_get_accounts;
pub mod http_existing_user_get_operations;
pub mod http_get_accounts;
pub mod journey;
pub mod scenario;

pub use grpc_new_user_get_accounts::GrpcNewUserGetAccountsTaskSet;
pub use http_existing_user_get_operations::{
    HttpExistingUserGetOperationsTaskSet, OperationsTask,
};
pub use http_get_accounts::HttpGetAccountsTaskSet;
pub use journey::{AccountsTask, ACCOUNTS_JOURNEY};
pub use scenario::{load_seeds_cursor, run_load_scenario, LoadScenario, ScenarioContext, Transport};
