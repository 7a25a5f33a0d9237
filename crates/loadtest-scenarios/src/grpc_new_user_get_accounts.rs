//! `grpc-new-user-get-accounts`: the accounts journey over the gRPC facade.

use crate::journey::{AccountsTask, ACCOUNTS_JOURNEY};
use async_trait::async_trait;
use gateway_grpc_client::GatewayGrpcClients;
use gateway_types::{TransportError, User};
use loadtest_runner::{TaskOutcome, TaskSet, TaskSpec};
use tracing::debug;

pub struct GrpcNewUserGetAccountsTaskSet {
    clients: GatewayGrpcClients,
    user: Option<User>,
}

impl GrpcNewUserGetAccountsTaskSet {
    pub fn new(clients: GatewayGrpcClients) -> Self {
        Self {
            clients,
            user: None,
        }
    }

    /// The last user this virtual user created, if any.
    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }
}

#[async_trait]
impl TaskSet for GrpcNewUserGetAccountsTaskSet {
    type Task = AccountsTask;

    fn tasks(&self) -> Vec<TaskSpec<AccountsTask>> {
        ACCOUNTS_JOURNEY.to_vec()
    }

    async fn run(&mut self, task: AccountsTask) -> Result<TaskOutcome, TransportError> {
        match task {
            AccountsTask::CreateUser => {
                // A failed CreateUser keeps the previous user.
                let user = self.clients.users.create_user().await?.user;
                debug!("Created user {} over gRPC", user.id);
                self.user = Some(user);
            }
            AccountsTask::OpenDepositAccount => {
                let Some(user) = &self.user else {
                    return Ok(TaskOutcome::Skipped);
                };
                self.clients.accounts.open_deposit_account(&user.id).await?;
            }
            AccountsTask::GetAccounts => {
                let Some(user) = &self.user else {
                    return Ok(TaskOutcome::Skipped);
                };
                self.clients.accounts.get_accounts(&user.id).await?;
            }
        }
        Ok(TaskOutcome::Done)
    }
}
