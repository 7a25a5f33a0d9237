//! `contracts.services.gateway.accounts`

use super::cards::Card;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum AccountType {
    Unspecified = 0,
    Deposit = 1,
    Savings = 2,
    DebitCard = 3,
    CreditCard = 4,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum AccountStatus {
    Unspecified = 0,
    Active = 1,
    Frozen = 2,
    Closed = 3,
    PendingClosure = 4,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Account {
    #[prost(string, tag = "1")]
    pub id: ::prost::alloc::string::String,
    #[prost(enumeration = "AccountType", tag = "2")]
    pub r#type: i32,
    #[prost(message, repeated, tag = "3")]
    pub cards: ::prost::alloc::vec::Vec<Card>,
    #[prost(enumeration = "AccountStatus", tag = "4")]
    pub status: i32,
    #[prost(double, tag = "5")]
    pub balance: f64,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetAccountsRequest {
    #[prost(string, tag = "1")]
    pub user_id: ::prost::alloc::string::String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetAccountsResponse {
    #[prost(message, repeated, tag = "1")]
    pub accounts: ::prost::alloc::vec::Vec<Account>,
}

/// Shared by every `Open*Account` RPC.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct OpenAccountRequest {
    #[prost(string, tag = "1")]
    pub user_id: ::prost::alloc::string::String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct OpenAccountResponse {
    #[prost(message, optional, tag = "1")]
    pub account: ::core::option::Option<Account>,
}
