//! Seeds command handlers.
//!
//! This module contains handlers for the `seeds build` and `seeds show` commands.

pub mod build;
pub mod show;

pub use build::{run_seeds_build, SeedsBuildArgs};
pub use show::{format_seeds_summary, run_seeds_show};
