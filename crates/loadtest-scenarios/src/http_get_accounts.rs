//! `http-get-accounts`: new users open deposit accounts and list them over HTTP.

use crate::journey::{AccountsTask, ACCOUNTS_JOURNEY};
use async_trait::async_trait;
use gateway_http_client::GatewayHttpClients;
use gateway_types::{TransportError, User};
use loadtest_runner::{TaskOutcome, TaskSet, TaskSpec};
use tracing::debug;

pub struct HttpGetAccountsTaskSet {
    clients: GatewayHttpClients,
    user: Option<User>,
}

impl HttpGetAccountsTaskSet {
    pub fn new(clients: GatewayHttpClients) -> Self {
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
impl TaskSet for HttpGetAccountsTaskSet {
    type Task = AccountsTask;

    fn tasks(&self) -> Vec<TaskSpec<AccountsTask>> {
        ACCOUNTS_JOURNEY.to_vec()
    }

    async fn run(&mut self, task: AccountsTask) -> Result<TaskOutcome, TransportError> {
        match task {
            AccountsTask::CreateUser => {
                let user = self.clients.users.create_user().await?.user;
                debug!("Created user {}", user.id);
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
