//! `contracts.services.gateway.cards`

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum CardType {
    Unspecified = 0,
    Virtual = 1,
    Physical = 2,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum CardStatus {
    Unspecified = 0,
    Active = 1,
    Frozen = 2,
    Closed = 3,
    Blocked = 4,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum CardPaymentSystem {
    Unspecified = 0,
    Visa = 1,
    Mastercard = 2,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Card {
    #[prost(string, tag = "1")]
    pub id: ::prost::alloc::string::String,
    #[prost(string, tag = "2")]
    pub pin: ::prost::alloc::string::String,
    #[prost(string, tag = "3")]
    pub cvv: ::prost::alloc::string::String,
    #[prost(enumeration = "CardType", tag = "4")]
    pub r#type: i32,
    #[prost(enumeration = "CardStatus", tag = "5")]
    pub status: i32,
    #[prost(string, tag = "6")]
    pub account_id: ::prost::alloc::string::String,
    #[prost(string, tag = "7")]
    pub card_number: ::prost::alloc::string::String,
    #[prost(string, tag = "8")]
    pub card_holder: ::prost::alloc::string::String,
    #[prost(string, tag = "9")]
    pub expiry_date: ::prost::alloc::string::String,
    #[prost(enumeration = "CardPaymentSystem", tag = "10")]
    pub payment_system: i32,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct IssueCardRequest {
    #[prost(string, tag = "1")]
    pub user_id: ::prost::alloc::string::String,
    #[prost(string, tag = "2")]
    pub account_id: ::prost::alloc::string::String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct IssueCardResponse {
    #[prost(message, optional, tag = "1")]
    pub card: ::core::option::Option<Card>,
}
