//! Gateway seam used by the seed builder.
//!
//! This trait abstracts the transport the builder creates entities over,
//! allowing the same build logic to work with:
//! - the HTTP gateway (`HttpSeedsGateway`)
//! - the gRPC gateway (`GrpcSeedsGateway`)
//! - in-memory fakes in tests

use async_trait::async_trait;
use gateway_grpc_client::GatewayGrpcClients;
use gateway_http_client::GatewayHttpClients;
use gateway_types::{
    Account, AccountType, Card, CardType, Operation, OperationType, TransportError, User,
};

#[async_trait]
pub trait SeedsGateway: Send + Sync {
    /// Create a user with fake personal data.
    async fn create_user(&self) -> Result<User, TransportError>;

    /// Open an account of `account_type`; the returned account lists the
    /// cards the gateway issued with it.
    async fn open_account(
        &self,
        account_type: AccountType,
        user_id: &str,
    ) -> Result<Account, TransportError>;

    async fn issue_card(
        &self,
        card_type: CardType,
        user_id: &str,
        account_id: &str,
    ) -> Result<Card, TransportError>;

    /// Make an operation with fake status, amount and category.
    async fn make_operation(
        &self,
        operation_type: OperationType,
        card_id: &str,
        account_id: &str,
    ) -> Result<Operation, TransportError>;
}

/// Seeds over the HTTP gateway.
#[derive(Debug, Clone)]
pub struct HttpSeedsGateway {
    clients: GatewayHttpClients,
}

impl HttpSeedsGateway {
    pub fn new(clients: GatewayHttpClients) -> Self {
        Self { clients }
    }
}

#[async_trait]
impl SeedsGateway for HttpSeedsGateway {
    async fn create_user(&self) -> Result<User, TransportError> {
        Ok(self.clients.users.create_user().await?.user)
    }

    async fn open_account(
        &self,
        account_type: AccountType,
        user_id: &str,
    ) -> Result<Account, TransportError> {
        Ok(self
            .clients
            .accounts
            .open_account(account_type, user_id)
            .await?
            .account)
    }

    async fn issue_card(
        &self,
        card_type: CardType,
        user_id: &str,
        account_id: &str,
    ) -> Result<Card, TransportError> {
        Ok(self
            .clients
            .cards
            .issue_card(card_type, user_id, account_id)
            .await?
            .card)
    }

    async fn make_operation(
        &self,
        operation_type: OperationType,
        card_id: &str,
        account_id: &str,
    ) -> Result<Operation, TransportError> {
        Ok(self
            .clients
            .operations
            .make_operation(operation_type, card_id, account_id)
            .await?
            .operation)
    }
}

/// Seeds over the gRPC gateway.
#[derive(Debug, Clone)]
pub struct GrpcSeedsGateway {
    clients: GatewayGrpcClients,
}

impl GrpcSeedsGateway {
    pub fn new(clients: GatewayGrpcClients) -> Self {
        Self { clients }
    }
}

#[async_trait]
impl SeedsGateway for GrpcSeedsGateway {
    async fn create_user(&self) -> Result<User, TransportError> {
        Ok(self.clients.users.create_user().await?.user)
    }

    async fn open_account(
        &self,
        account_type: AccountType,
        user_id: &str,
    ) -> Result<Account, TransportError> {
        Ok(self
            .clients
            .accounts
            .open_account(account_type, user_id)
            .await?
            .account)
    }

    async fn issue_card(
        &self,
        card_type: CardType,
        user_id: &str,
        account_id: &str,
    ) -> Result<Card, TransportError> {
        Ok(self
            .clients
            .cards
            .issue_card(card_type, user_id, account_id)
            .await?
            .card)
    }

    async fn make_operation(
        &self,
        operation_type: OperationType,
        card_id: &str,
        account_id: &str,
    ) -> Result<Operation, TransportError> {
        Ok(self
            .clients
            .operations
            .make_operation(operation_type, card_id, account_id)
            .await?
            .operation)
    }
}
