//! Core types for the gateway-qa harness.
//!
//! This crate provides the records exchanged with the banking gateway and
//! shared by every other crate in the workspace:
//!
//! - [`User`], [`Account`], [`Card`], [`Operation`] - domain records as the gateway returns them
//! - request/response DTOs, serialized camelCase on the wire
//! - [`TransportError`] - the single failure type every API client reports
//!
//! # Architecture
//!
//! ```text
//! gateway-types (this crate)
//!    │
//!    ├─── gateway-http-client  (serde DTOs as JSON bodies)
//!    ├─── gateway-grpc-client  (prost messages converted into these records)
//!    └─── seeds                (builder consumes records, keeps only ids)
//! ```
//!
//! Operation requests are one parameterized [`MakeOperationRequest`] with an
//! [`OperationType`] selecting the endpoint, instead of one request type per
//! operation kind.

pub mod account;
pub mod card;
pub mod error;
pub mod operation;
pub mod user;

pub use account::{
    Account, AccountStatus, AccountType, GetAccountsQuery, GetAccountsResponse,
    OpenAccountRequest, OpenAccountResponse,
};
pub use card::{
    Card, CardPaymentSystem, CardStatus, CardType, IssueCardRequest, IssueCardResponse,
};
pub use error::TransportError;
pub use operation::{
    GetOperationReceiptResponse, GetOperationResponse, GetOperationsQuery,
    GetOperationsResponse, GetOperationsSummaryResponse, MakeOperationRequest,
    MakeOperationResponse, Operation, OperationReceipt, OperationStatus, OperationType,
    OperationsSummary,
};
pub use user::{CreateUserRequest, CreateUserResponse, GetUserResponse, User};
