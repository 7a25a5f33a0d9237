//! Load engine for gateway-qa.
//!
//! A load scenario is a [`TaskSet`]: a list of named tasks picked either at
//! random by weight or in a fixed order. [`LoadRunner`] starts one task set
//! per virtual user, ramps users up at a fixed spawn rate, pauses a random
//! wait time between tasks, and stops every user when the run time is over.
//!
//! # Example
//!
//! ```ignore
//! use loadtest_runner::{LoadReport, LoadRunner, LoadSettings};
//!
//! let runner = LoadRunner::new(settings.clone())?;
//! let metrics = runner.run("http-get-accounts", |_| GetAccountsTaskSet::new(clients.clone())).await?;
//! println!("{}", LoadReport::new("http-get-accounts", settings, metrics).format_table());
//! ```

pub mod error;
pub mod metrics;
pub mod report;
pub mod runner;
pub mod settings;
pub mod task;

pub use error::LoadTestError;
pub use metrics::{RunMetrics, TaskStats};
pub use report::LoadReport;
pub use runner::{LoadRunner, ON_START};
pub use settings::{LoadArgs, LoadSettings};
pub use task::{TaskOrder, TaskOutcome, TaskPicker, TaskSet, TaskSpec};
