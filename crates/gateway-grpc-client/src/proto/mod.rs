//! Protobuf messages of the gateway's gRPC facade.
//!
//! Messages mirror the HTTP DTOs field-for-field. Every enum reserves
//! `0` for `UNSPECIFIED`.

pub mod accounts;
pub mod cards;
pub mod operations;
pub mod users;
