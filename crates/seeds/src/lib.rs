//! Seed data for gateway-qa.
//!
//! This crate turns a declarative [`SeedsPlan`] into real users, accounts,
//! cards and operations on the gateway, and persists the identifiers of
//! what it created so load scenarios can reuse them:
//!
//! ```text
//! SeedsPlan ──▶ SeedsBuilder ──(SeedsGateway: HTTP | gRPC)──▶ SeedsResult ──▶ DumpStore
//!                                                                                │
//!                                               load scenarios ◀── load() ───────┘
//! ```
//!
//! # Example
//!
//! ```ignore
//! use seeds::{DumpStore, HttpSeedsGateway, SeedsScenario, ExistingUserGetOperations};
//!
//! let gateway = HttpSeedsGateway::new(clients);
//! let store = DumpStore::new("dumps");
//! let result = ExistingUserGetOperations.build(&gateway, &store).await?;
//! println!("Seeded {} users", result.users_count());
//! ```

pub mod builder;
pub mod dumps;
pub mod error;
pub mod gateway;
pub mod plan;
pub mod result;
pub mod scenario;
pub mod scenarios;

pub use builder::{BuildMetrics, SeedsBuilder};
pub use dumps::{DumpStore, DEFAULT_DUMPS_DIR};
pub use error::SeedsError;
pub use gateway::{GrpcSeedsGateway, HttpSeedsGateway, SeedsGateway};
pub use plan::{SeedAccountsPlan, SeedCardsPlan, SeedOperationsPlan, SeedUsersPlan, SeedsPlan};
pub use result::{
    SeedAccountResult, SeedCardResult, SeedOperationResult, SeedUserResult, SeedsCursor,
    SeedsResult,
};
pub use scenario::{find_seeds_scenario, seeds_scenarios, SeedsScenario};
pub use scenarios::{ExistingUserGetOperations, ExistingUserIssueVirtualCard};
