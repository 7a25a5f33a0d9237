//! Typed gRPC clients for the banking gateway.
//!
//! Mirrors `gateway-http-client` over the gateway's gRPC facade. Each
//! service client has raw `*_api` methods taking and returning protobuf
//! messages, and typed methods returning the same `gateway_types` responses
//! as the HTTP clients, so seeding and load scenarios work over either
//! transport.
//!
//! Protobuf messages live in [`proto`] and are declared with `prost`
//! derives directly, so building this crate needs no `protoc`.

pub mod accounts;
pub mod cards;
pub mod client;
pub mod convert;
pub mod operations;
pub mod proto;
pub mod users;

pub use accounts::AccountsGatewayGrpcClient;
pub use cards::CardsGatewayGrpcClient;
pub use client::{GrpcChannel, GrpcClientConfig};
pub use convert::ConversionError;
pub use operations::OperationsGatewayGrpcClient;
pub use users::UsersGatewayGrpcClient;

use gateway_fakers::Faker;
use gateway_types::TransportError;
use std::sync::Arc;

/// All four service clients sharing one channel and one faker.
#[derive(Debug, Clone)]
pub struct GatewayGrpcClients {
    pub users: UsersGatewayGrpcClient,
    pub accounts: AccountsGatewayGrpcClient,
    pub cards: CardsGatewayGrpcClient,
    pub operations: OperationsGatewayGrpcClient,
}

impl GatewayGrpcClients {
    /// Must be called inside a Tokio runtime.
    pub fn new(config: &GrpcClientConfig, faker: Arc<Faker>) -> Result<Self, TransportError> {
        let channel = GrpcChannel::new(config)?;
        Ok(Self {
            users: UsersGatewayGrpcClient::new(channel.clone(), faker.clone()),
            accounts: AccountsGatewayGrpcClient::new(channel.clone()),
            cards: CardsGatewayGrpcClient::new(channel.clone()),
            operations: OperationsGatewayGrpcClient::new(channel, faker),
        })
    }
}
