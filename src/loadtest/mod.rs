//! Loadtest command handlers.
//!
//! This module contains handlers for the `loadtest run` and `list` commands.

pub mod list;
pub mod run;

pub use list::{format_scenario_list, run_list};
pub use run::{run_loadtest, LoadtestRunArgs};
