//! `http-existing-user-get-operations`: seeded users read their operations.
//!
//! Needs the `existing_user_get_operations` dump. Each virtual user takes
//! the next seeded user on start and then cycles through its accounts,
//! its credit-card account operations and their summary.

use async_trait::async_trait;
use gateway_http_client::GatewayHttpClients;
use gateway_types::{AccountType, TransportError};
use loadtest_runner::{TaskOrder, TaskOutcome, TaskSet, TaskSpec};
use seeds::SeedsCursor;
use std::sync::Arc;
use tracing::debug;

/// Seeds scenario whose dump this load scenario reads.
pub const SEEDS_SCENARIO: &str = "existing_user_get_operations";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperationsTask {
    GetAccounts,
    GetOperations,
    GetOperationsSummary,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct SeededUser {
    user_id: String,
    credit_card_account_id: Option<String>,
}

pub struct HttpExistingUserGetOperationsTaskSet {
    clients: GatewayHttpClients,
    cursor: Arc<SeedsCursor>,
    user: Option<SeededUser>,
}

impl HttpExistingUserGetOperationsTaskSet {
    pub fn new(clients: GatewayHttpClients, cursor: Arc<SeedsCursor>) -> Self {
        Self {
            clients,
            cursor,
            user: None,
        }
    }

    /// The seeded user picked in `on_start`.
    pub fn user_id(&self) -> Option<&str> {
        self.user.as_ref().map(|user| user.user_id.as_str())
    }
}

#[async_trait]
impl TaskSet for HttpExistingUserGetOperationsTaskSet {
    type Task = OperationsTask;

    fn tasks(&self) -> Vec<TaskSpec<OperationsTask>> {
        vec![
            TaskSpec::new(OperationsTask::GetAccounts, "get_accounts", 1),
            TaskSpec::new(OperationsTask::GetOperations, "get_operations", 1),
            TaskSpec::new(
                OperationsTask::GetOperationsSummary,
                "get_operations_summary",
                1,
            ),
        ]
    }

    fn order(&self) -> TaskOrder {
        TaskOrder::Sequential
    }

    async fn on_start(&mut self) -> Result<(), TransportError> {
        self.user = self.cursor.next_user().map(|user| SeededUser {
            user_id: user.user_id.clone(),
            credit_card_account_id: user
                .first_account_of(AccountType::CreditCard)
                .map(|account| account.account_id.clone()),
        });
        if let Some(user) = &self.user {
            debug!("Virtual user took seeded user {}", user.user_id);
        }
        Ok(())
    }

    async fn run(&mut self, task: OperationsTask) -> Result<TaskOutcome, TransportError> {
        let Some(user) = &self.user else {
            return Ok(TaskOutcome::Skipped);
        };

        match task {
            OperationsTask::GetAccounts => {
                self.clients.accounts.get_accounts(&user.user_id).await?;
            }
            OperationsTask::GetOperations => {
                let Some(account_id) = &user.credit_card_account_id else {
                    return Ok(TaskOutcome::Skipped);
                };
                self.clients.operations.get_operations(account_id).await?;
            }
            OperationsTask::GetOperationsSummary => {
                let Some(account_id) = &user.credit_card_account_id else {
                    return Ok(TaskOutcome::Skipped);
                };
                self.clients
                    .operations
                    .get_operations_summary(account_id)
                    .await?;
            }
        }
        Ok(TaskOutcome::Done)
    }
}
