//! Registry of load scenarios and the dispatcher that runs one by name.

use crate::grpc_new_user_get_accounts::GrpcNewUserGetAccountsTaskSet;
use crate::http_existing_user_get_operations::{
    HttpExistingUserGetOperationsTaskSet, SEEDS_SCENARIO,
};
use crate::http_get_accounts::HttpGetAccountsTaskSet;
use gateway_fakers::Faker;
use gateway_grpc_client::{GatewayGrpcClients, GrpcClientConfig};
use gateway_http_client::{GatewayHttpClients, HttpClientConfig};
use loadtest_runner::{LoadRunner, LoadTestError, RunMetrics};
use seeds::{DumpStore, SeedsCursor};
use std::fmt;
use std::sync::Arc;
use tracing::info;

/// Transport a load scenario talks to the gateway with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transport {
    Http,
    Grpc,
}

impl fmt::Display for Transport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Transport::Http => write!(f, "http"),
            Transport::Grpc => write!(f, "grpc"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadScenario {
    HttpGetAccounts,
    GrpcNewUserGetAccounts,
    HttpExistingUserGetOperations,
}

impl LoadScenario {
    pub const ALL: [LoadScenario; 3] = [
        LoadScenario::HttpGetAccounts,
        LoadScenario::GrpcNewUserGetAccounts,
        LoadScenario::HttpExistingUserGetOperations,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            LoadScenario::HttpGetAccounts => "http-get-accounts",
            LoadScenario::GrpcNewUserGetAccounts => "grpc-new-user-get-accounts",
            LoadScenario::HttpExistingUserGetOperations => "http-existing-user-get-operations",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            LoadScenario::HttpGetAccounts => {
                "New users open deposit accounts and list their accounts"
            }
            LoadScenario::GrpcNewUserGetAccounts => {
                "New users open deposit accounts and list their accounts over gRPC"
            }
            LoadScenario::HttpExistingUserGetOperations => {
                "Seeded users read accounts, operations and operations summary"
            }
        }
    }

    pub fn transport(&self) -> Transport {
        match self {
            LoadScenario::GrpcNewUserGetAccounts => Transport::Grpc,
            _ => Transport::Http,
        }
    }

    /// Seeds scenario whose dump must exist before this scenario runs.
    pub fn seeds_scenario(&self) -> Option<&'static str> {
        match self {
            LoadScenario::HttpExistingUserGetOperations => Some(SEEDS_SCENARIO),
            _ => None,
        }
    }

    pub fn find(name: &str) -> Option<LoadScenario> {
        Self::ALL.into_iter().find(|scenario| scenario.name() == name)
    }
}

/// Everything a load scenario needs to build its clients.
#[derive(Debug, Clone)]
pub struct ScenarioContext {
    pub http: HttpClientConfig,
    pub grpc: GrpcClientConfig,
    pub dumps: DumpStore,
    pub faker: Arc<Faker>,
}

/// Run `scenario` with `runner`.
///
/// Clients are built once and cloned into every virtual user. Scenarios
/// reading seeded data load their dump before the first user starts.
pub async fn run_load_scenario(
    scenario: LoadScenario,
    runner: &LoadRunner,
    context: &ScenarioContext,
) -> Result<RunMetrics, LoadTestError> {
    info!(
        "Preparing load scenario '{}' over {}",
        scenario.name(),
        scenario.transport()
    );

    match scenario {
        LoadScenario::HttpGetAccounts => {
            let clients = http_clients(context)?;
            runner
                .run(scenario.name(), |_| {
                    HttpGetAccountsTaskSet::new(clients.clone())
                })
                .await
        }
        LoadScenario::GrpcNewUserGetAccounts => {
            let clients = GatewayGrpcClients::new(&context.grpc, context.faker.clone())
                .map_err(|e| LoadTestError::Setup(e.to_string()))?;
            runner
                .run(scenario.name(), |_| {
                    GrpcNewUserGetAccountsTaskSet::new(clients.clone())
                })
                .await
        }
        LoadScenario::HttpExistingUserGetOperations => {
            let cursor = Arc::new(load_seeds_cursor(&context.dumps, SEEDS_SCENARIO)?);
            let clients = http_clients(context)?;
            runner
                .run(scenario.name(), |_| {
                    HttpExistingUserGetOperationsTaskSet::new(clients.clone(), cursor.clone())
                })
                .await
        }
    }
}

fn http_clients(context: &ScenarioContext) -> Result<GatewayHttpClients, LoadTestError> {
    GatewayHttpClients::new(&context.http, context.faker.clone())
        .map_err(|e| LoadTestError::Setup(e.to_string()))
}

/// Load a seeds dump for round-robin use by virtual users.
pub fn load_seeds_cursor(dumps: &DumpStore, scenario: &str) -> Result<SeedsCursor, LoadTestError> {
    let result = dumps.load(scenario).map_err(|e| {
        LoadTestError::Setup(format!(
            "cannot load seeds '{scenario}' (run `seeds build {scenario}` first): {e}"
        ))
    })?;
    if result.users.is_empty() {
        return Err(LoadTestError::Setup(format!(
            "seeds '{scenario}' contain no users"
        )));
    }
    info!(
        "Loaded seeds '{}' with {} users",
        scenario,
        result.users_count()
    );
    Ok(SeedsCursor::new(Arc::new(result)))
}
