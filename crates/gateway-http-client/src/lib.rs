//! Typed HTTP clients for the banking gateway.
//!
//! Each service client exposes one `*_api` method per endpoint, returning
//! the raw `reqwest::Response`, and a typed method that checks the status
//! and decodes the body. Failures of either kind surface as
//! [`gateway_types::TransportError`].
//!
//! # Example
//!
//! ```ignore
//! use gateway_http_client::{GatewayHttpClients, HttpClientConfig};
//!
//! let clients = GatewayHttpClients::new(&HttpClientConfig::new("http://localhost:8003"), faker)?;
//! let user = clients.users.create_user().await?.user;
//! let account = clients.accounts.open_deposit_account(&user.id).await?.account;
//! ```

pub mod accounts;
pub mod cards;
pub mod client;
pub mod operations;
pub mod users;

pub use accounts::AccountsGatewayHttpClient;
pub use cards::CardsGatewayHttpClient;
pub use client::{parse_response, HttpClient, HttpClientConfig};
pub use operations::OperationsGatewayHttpClient;
pub use users::UsersGatewayHttpClient;

use gateway_fakers::Faker;
use gateway_types::TransportError;
use std::sync::Arc;

/// All four service clients sharing one connection pool and one faker.
#[derive(Debug, Clone)]
pub struct GatewayHttpClients {
    pub users: UsersGatewayHttpClient,
    pub accounts: AccountsGatewayHttpClient,
    pub cards: CardsGatewayHttpClient,
    pub operations: OperationsGatewayHttpClient,
}

impl GatewayHttpClients {
    pub fn new(config: &HttpClientConfig, faker: Arc<Faker>) -> Result<Self, TransportError> {
        let http = HttpClient::new(config)?;
        Ok(Self {
            users: UsersGatewayHttpClient::new(http.clone(), faker.clone()),
            accounts: AccountsGatewayHttpClient::new(http.clone()),
            cards: CardsGatewayHttpClient::new(http.clone()),
            operations: OperationsGatewayHttpClient::new(http, faker),
        })
    }
}
