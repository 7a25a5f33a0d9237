//! Fake field values for the gateway-qa harness.
//!
//! Every request the harness sends to the gateway is filled with values
//! produced here: personal data for new users, amounts and categories for
//! operations, and random picks from the gateway's enums.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────┐
//! │        Faker         │
//! │                      │
//! │  - rng (StdRng)      │  Mutex-guarded, so one Faker can be
//! │                      │  shared by every client and virtual user
//! └──────────┬───────────┘
//!            │
//!            ▼
//!   generators::{text, numeric, uuid}
//! ```
//!
//! # Example
//!
//! ```rust
//! use gateway_fakers::Faker;
//!
//! let faker = Faker::seeded(42);
//! let phone = faker.phone_number();
//! assert!(phone.starts_with("+7"));
//! assert_eq!(phone.len(), 12);
//!
//! let amount = faker.amount();
//! assert!((1.0..=100.0).contains(&amount));
//! ```

pub mod faker;
pub mod generators;

pub use faker::{FakeEnum, Faker};
