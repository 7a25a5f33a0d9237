//! `contracts.services.gateway.operations`

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum OperationType {
    Unspecified = 0,
    Fee = 1,
    TopUp = 2,
    Purchase = 3,
    Cashback = 4,
    Transfer = 5,
    BillPayment = 6,
    CashWithdrawal = 7,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum OperationStatus {
    Unspecified = 0,
    Failed = 1,
    Completed = 2,
    InProgress = 3,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Operation {
    #[prost(string, tag = "1")]
    pub id: ::prost::alloc::string::String,
    #[prost(enumeration = "OperationType", tag = "2")]
    pub r#type: i32,
    #[prost(enumeration = "OperationStatus", tag = "3")]
    pub status: i32,
    #[prost(double, tag = "4")]
    pub amount: f64,
    #[prost(string, tag = "5")]
    pub card_id: ::prost::alloc::string::String,
    #[prost(string, tag = "6")]
    pub category: ::prost::alloc::string::String,
    #[prost(string, tag = "7")]
    pub created_at: ::prost::alloc::string::String,
    #[prost(string, tag = "8")]
    pub account_id: ::prost::alloc::string::String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct OperationReceipt {
    #[prost(string, tag = "1")]
    pub url: ::prost::alloc::string::String,
    #[prost(string, tag = "2")]
    pub document: ::prost::alloc::string::String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct OperationsSummary {
    #[prost(double, tag = "1")]
    pub spent_amount: f64,
    #[prost(double, tag = "2")]
    pub received_amount: f64,
    #[prost(double, tag = "3")]
    pub cashback_amount: f64,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetOperationRequest {
    #[prost(string, tag = "1")]
    pub id: ::prost::alloc::string::String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetOperationResponse {
    #[prost(message, optional, tag = "1")]
    pub operation: ::core::option::Option<Operation>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetOperationReceiptRequest {
    #[prost(string, tag = "1")]
    pub operation_id: ::prost::alloc::string::String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetOperationReceiptResponse {
    #[prost(message, optional, tag = "1")]
    pub receipt: ::core::option::Option<OperationReceipt>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetOperationsRequest {
    #[prost(string, tag = "1")]
    pub account_id: ::prost::alloc::string::String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetOperationsResponse {
    #[prost(message, repeated, tag = "1")]
    pub operations: ::prost::alloc::vec::Vec<Operation>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetOperationsSummaryRequest {
    #[prost(string, tag = "1")]
    pub account_id: ::prost::alloc::string::String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetOperationsSummaryResponse {
    #[prost(message, optional, tag = "1")]
    pub summary: ::core::option::Option<OperationsSummary>,
}

/// Shared by every `Make*Operation` RPC; `category` is empty except for purchases.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct MakeOperationRequest {
    #[prost(enumeration = "OperationStatus", tag = "1")]
    pub status: i32,
    #[prost(double, tag = "2")]
    pub amount: f64,
    #[prost(string, tag = "3")]
    pub card_id: ::prost::alloc::string::String,
    #[prost(string, tag = "4")]
    pub account_id: ::prost::alloc::string::String,
    #[prost(string, tag = "5")]
    pub category: ::prost::alloc::string::String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct MakeOperationResponse {
    #[prost(message, optional, tag = "1")]
    pub operation: ::core::option::Option<Operation>,
}
