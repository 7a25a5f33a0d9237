//! In-process gRPC gateway for client tests.
//!
//! Serves the users, accounts, cards and operations services on an
//! ephemeral port with canned responses, and records every request path.

#![allow(dead_code)]

use gateway_grpc_client::proto::{accounts, cards, operations, users};
use std::convert::Infallible;
use std::marker::PhantomData;
use std::sync::{Arc, Mutex};
use tonic::codegen::{http, Body, BoxFuture, Context, Poll, Service, StdError};
use tonic::server::{NamedService, UnaryService};
use tonic::transport::Server;

pub const CREATE_USER: &str = "/contracts.services.gateway.users.UsersGatewayService/CreateUser";
pub const GET_ACCOUNTS: &str =
    "/contracts.services.gateway.accounts.AccountsGatewayService/GetAccounts";
pub const OPEN_DEPOSIT_ACCOUNT: &str =
    "/contracts.services.gateway.accounts.AccountsGatewayService/OpenDepositAccount";
pub const OPEN_CREDIT_CARD_ACCOUNT: &str =
    "/contracts.services.gateway.accounts.AccountsGatewayService/OpenCreditCardAccount";
pub const ISSUE_PHYSICAL_CARD: &str =
    "/contracts.services.gateway.cards.CardsGatewayService/IssuePhysicalCard";
pub const MAKE_PURCHASE_OPERATION: &str =
    "/contracts.services.gateway.operations.OperationsGatewayService/MakePurchaseOperation";
pub const MAKE_TOP_UP_OPERATION: &str =
    "/contracts.services.gateway.operations.OperationsGatewayService/MakeTopUpOperation";
pub const MAKE_CASH_WITHDRAWAL_OPERATION: &str =
    "/contracts.services.gateway.operations.OperationsGatewayService/MakeCashWithdrawalOperation";

pub const USER_ID: &str = "user-1";
pub const ACCOUNT_ID: &str = "acc-1";
pub const CARD_ID: &str = "card-1";

/// Request paths in arrival order.
pub type CallLog = Arc<Mutex<Vec<String>>>;

/// Start the gateway and return its URL with the shared call log.
pub async fn start_gateway() -> (String, CallLog) {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let calls = CallLog::default();

    let server = Server::builder()
        .add_service(FakeService::<UsersService>::new(calls.clone()))
        .add_service(FakeService::<AccountsService>::new(calls.clone()))
        .add_service(FakeService::<CardsService>::new(calls.clone()))
        .add_service(FakeService::<OperationsService>::new(calls.clone()))
        .serve_with_incoming(tokio_stream::wrappers::TcpListenerStream::new(listener));
    tokio::spawn(server);

    (format!("http://{addr}"), calls)
}

pub fn recorded(calls: &CallLog) -> Vec<String> {
    calls.lock().unwrap().clone()
}

pub fn count(calls: &CallLog, path: &str) -> usize {
    calls.lock().unwrap().iter().filter(|p| *p == path).count()
}

// ============================================================================
// Services
// ============================================================================

pub trait GatewayService: Send + Sync + 'static {
    const NAME: &'static str;
}

pub struct UsersService;
pub struct AccountsService;
pub struct CardsService;
pub struct OperationsService;

impl GatewayService for UsersService {
    const NAME: &'static str = "contracts.services.gateway.users.UsersGatewayService";
}

impl GatewayService for AccountsService {
    const NAME: &'static str = "contracts.services.gateway.accounts.AccountsGatewayService";
}

impl GatewayService for CardsService {
    const NAME: &'static str = "contracts.services.gateway.cards.CardsGatewayService";
}

impl GatewayService for OperationsService {
    const NAME: &'static str = "contracts.services.gateway.operations.OperationsGatewayService";
}

pub struct FakeService<S> {
    calls: CallLog,
    _service: PhantomData<fn() -> S>,
}

impl<S> FakeService<S> {
    fn new(calls: CallLog) -> Self {
        Self {
            calls,
            _service: PhantomData,
        }
    }
}

impl<S> Clone for FakeService<S> {
    fn clone(&self) -> Self {
        Self::new(self.calls.clone())
    }
}

impl<S: GatewayService> NamedService for FakeService<S> {
    const NAME: &'static str = S::NAME;
}

impl<S, B> Service<http::Request<B>> for FakeService<S>
where
    S: GatewayService,
    B: Body + Send + 'static,
    B::Error: Into<StdError> + Send + 'static,
{
    type Response = http::Response<tonic::body::Body>;
    type Error = Infallible;
    type Future = BoxFuture<Self::Response, Self::Error>;

    fn poll_ready(&mut self, _cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        Poll::Ready(Ok(()))
    }

    fn call(&mut self, req: http::Request<B>) -> Self::Future {
        let path = req.uri().path().to_string();
        self.calls.lock().unwrap().push(path.clone());

        Box::pin(async move {
            let response = match path.as_str() {
                CREATE_USER => serve(create_user, req).await,
                GET_ACCOUNTS => serve(get_accounts, req).await,
                OPEN_DEPOSIT_ACCOUNT => serve(open_deposit_account, req).await,
                OPEN_CREDIT_CARD_ACCOUNT => serve(open_credit_card_account, req).await,
                ISSUE_PHYSICAL_CARD => serve(issue_physical_card, req).await,
                MAKE_PURCHASE_OPERATION => serve(make_purchase_operation, req).await,
                MAKE_TOP_UP_OPERATION => serve(make_top_up_operation, req).await,
                MAKE_CASH_WITHDRAWAL_OPERATION => {
                    serve(make_cash_withdrawal_operation, req).await
                }
                _ => tonic::Status::unimplemented(path.clone()).into_http(),
            };
            Ok(response)
        })
    }
}

struct Handler<Req, Resp>(fn(Req) -> Resp);

impl<Req, Resp> UnaryService<Req> for Handler<Req, Resp>
where
    Resp: Send + 'static,
{
    type Response = Resp;
    type Future = std::future::Ready<Result<tonic::Response<Resp>, tonic::Status>>;

    fn call(&mut self, request: tonic::Request<Req>) -> Self::Future {
        std::future::ready(Ok(tonic::Response::new((self.0)(request.into_inner()))))
    }
}

async fn serve<Req, Resp, B>(
    handler: fn(Req) -> Resp,
    req: http::Request<B>,
) -> http::Response<tonic::body::Body>
where
    Req: prost::Message + Default + Send + 'static,
    Resp: prost::Message + Send + 'static,
    B: Body + Send + 'static,
    B::Error: Into<StdError> + Send + 'static,
{
    let codec = tonic::codec::ProstCodec::<Resp, Req>::default();
    tonic::server::Grpc::new(codec)
        .unary(Handler(handler), req)
        .await
}

// ============================================================================
// Canned responses
// ============================================================================

fn create_user(request: users::CreateUserRequest) -> users::CreateUserResponse {
    users::CreateUserResponse {
        user: Some(users::User {
            id: USER_ID.to_string(),
            email: request.email,
            last_name: request.last_name,
            first_name: request.first_name,
            middle_name: request.middle_name,
            phone_number: request.phone_number,
        }),
    }
}

fn physical_card(account_id: &str) -> cards::Card {
    cards::Card {
        id: CARD_ID.to_string(),
        pin: "1234".to_string(),
        cvv: "123".to_string(),
        r#type: cards::CardType::Physical as i32,
        status: cards::CardStatus::Active as i32,
        account_id: account_id.to_string(),
        card_number: "4111111111111111".to_string(),
        card_holder: "Ivan Ivanov".to_string(),
        expiry_date: "2030-01-01".to_string(),
        payment_system: cards::CardPaymentSystem::Visa as i32,
    }
}

fn account(account_type: accounts::AccountType) -> accounts::Account {
    accounts::Account {
        id: ACCOUNT_ID.to_string(),
        r#type: account_type as i32,
        cards: vec![physical_card(ACCOUNT_ID)],
        status: accounts::AccountStatus::Active as i32,
        balance: 100.0,
    }
}

fn get_accounts(request: accounts::GetAccountsRequest) -> accounts::GetAccountsResponse {
    let accounts = if request.user_id == USER_ID {
        vec![account(accounts::AccountType::CreditCard)]
    } else {
        Vec::new()
    };
    accounts::GetAccountsResponse { accounts }
}

fn open_deposit_account(_: accounts::OpenAccountRequest) -> accounts::OpenAccountResponse {
    accounts::OpenAccountResponse {
        account: Some(account(accounts::AccountType::Deposit)),
    }
}

fn open_credit_card_account(_: accounts::OpenAccountRequest) -> accounts::OpenAccountResponse {
    accounts::OpenAccountResponse {
        account: Some(account(accounts::AccountType::CreditCard)),
    }
}

fn issue_physical_card(request: cards::IssueCardRequest) -> cards::IssueCardResponse {
    cards::IssueCardResponse {
        card: Some(physical_card(&request.account_id)),
    }
}

fn operation(
    operation_type: operations::OperationType,
    request: operations::MakeOperationRequest,
) -> operations::MakeOperationResponse {
    operations::MakeOperationResponse {
        operation: Some(operations::Operation {
            id: format!("op-{}", request.card_id),
            r#type: operation_type as i32,
            status: request.status,
            amount: request.amount,
            card_id: request.card_id,
            category: request.category,
            created_at: "2024-01-01T00:00:00".to_string(),
            account_id: request.account_id,
        }),
    }
}

fn make_purchase_operation(
    request: operations::MakeOperationRequest,
) -> operations::MakeOperationResponse {
    operation(operations::OperationType::Purchase, request)
}

fn make_top_up_operation(
    request: operations::MakeOperationRequest,
) -> operations::MakeOperationResponse {
    operation(operations::OperationType::TopUp, request)
}

fn make_cash_withdrawal_operation(
    request: operations::MakeOperationRequest,
) -> operations::MakeOperationResponse {
    operation(operations::OperationType::CashWithdrawal, request)
}
