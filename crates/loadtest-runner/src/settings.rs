//! Run settings and their CLI arguments.

use crate::error::LoadTestError;
use clap::Args;
use std::time::{Duration, Instant};

/// Load run arguments shared by every load scenario.
#[derive(Args, Clone, Debug)]
pub struct LoadArgs {
    /// Number of concurrent virtual users
    #[arg(long, short = 'u', default_value = "10")]
    pub users: usize,

    /// Virtual users started per second
    #[arg(long, short = 'r', default_value = "1")]
    pub spawn_rate: f64,

    /// Run duration in seconds, including the ramp-up
    #[arg(long, short = 't', default_value = "60")]
    pub run_time: u64,

    /// Minimum pause between tasks of one virtual user, in seconds
    #[arg(long, default_value = "1")]
    pub wait_min: f64,

    /// Maximum pause between tasks of one virtual user, in seconds
    #[arg(long, default_value = "3")]
    pub wait_max: f64,

    /// Random seed for task selection and wait times (default: entropy)
    #[arg(long)]
    pub seed: Option<u64>,
}

impl LoadArgs {
    pub fn to_settings(&self) -> Result<LoadSettings, LoadTestError> {
        if !self.wait_min.is_finite() || !self.wait_max.is_finite() || self.wait_min < 0.0 {
            return Err(LoadTestError::Config(format!(
                "wait times must be non-negative numbers, got {}..{}",
                self.wait_min, self.wait_max
            )));
        }
        let settings = LoadSettings {
            users: self.users,
            spawn_rate: self.spawn_rate,
            run_time: Duration::from_secs(self.run_time),
            wait_min: wait_duration("wait min", self.wait_min)?,
            wait_max: wait_duration("wait max", self.wait_max)?,
            seed: self.seed,
        };
        settings.validate()?;
        Ok(settings)
    }
}

fn wait_duration(what: &str, secs: f64) -> Result<Duration, LoadTestError> {
    Duration::try_from_secs_f64(secs)
        .map_err(|e| LoadTestError::Config(format!("{what} {secs} is out of range: {e}")))
}

/// Validated settings of one load run.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadSettings {
    pub users: usize,
    pub spawn_rate: f64,
    pub run_time: Duration,
    pub wait_min: Duration,
    pub wait_max: Duration,
    pub seed: Option<u64>,
}

impl Default for LoadSettings {
    fn default() -> Self {
        Self {
            users: 10,
            spawn_rate: 1.0,
            run_time: Duration::from_secs(60),
            wait_min: Duration::from_secs(1),
            wait_max: Duration::from_secs(3),
            seed: None,
        }
    }
}

impl LoadSettings {
    pub fn validate(&self) -> Result<(), LoadTestError> {
        if self.users == 0 {
            return Err(LoadTestError::Config("users must be at least 1".to_string()));
        }
        if !(self.spawn_rate.is_finite() && self.spawn_rate > 0.0) {
            return Err(LoadTestError::Config(format!(
                "spawn rate must be positive, got {}",
                self.spawn_rate
            )));
        }
        if self.run_time.is_zero() {
            return Err(LoadTestError::Config("run time must be positive".to_string()));
        }
        if self.wait_min > self.wait_max {
            return Err(LoadTestError::Config(format!(
                "wait min {:?} exceeds wait max {:?}",
                self.wait_min, self.wait_max
            )));
        }
        if Duration::try_from_secs_f64(1.0 / self.spawn_rate).is_err() {
            return Err(LoadTestError::Config(format!(
                "spawn rate {} is too small",
                self.spawn_rate
            )));
        }
        // The runner adds each of these to the current instant.
        let horizon = self
            .run_time
            .checked_add(self.spawn_interval())
            .and_then(|d| d.checked_add(self.wait_max));
        if horizon.and_then(|d| Instant::now().checked_add(d)).is_none() {
            return Err(LoadTestError::Config(format!(
                "run time {:?} is out of range",
                self.run_time
            )));
        }
        Ok(())
    }

    /// Delay between starting two consecutive virtual users.
    ///
    /// `Duration::MAX` if the spawn rate is too small to represent.
    pub fn spawn_interval(&self) -> Duration {
        Duration::try_from_secs_f64(1.0 / self.spawn_rate).unwrap_or(Duration::MAX)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args() -> LoadArgs {
        LoadArgs {
            users: 5,
            spawn_rate: 2.0,
            run_time: 30,
            wait_min: 1.0,
            wait_max: 3.0,
            seed: Some(1),
        }
    }

    #[test]
    fn test_args_to_settings() {
        let settings = args().to_settings().unwrap();
        assert_eq!(settings.users, 5);
        assert_eq!(settings.run_time, Duration::from_secs(30));
        assert_eq!(settings.spawn_interval(), Duration::from_millis(500));
    }

    #[test]
    fn test_invalid_settings_are_rejected() {
        let mut bad = args();
        bad.users = 0;
        assert!(matches!(bad.to_settings(), Err(LoadTestError::Config(_))));

        let mut bad = args();
        bad.spawn_rate = 0.0;
        assert!(bad.to_settings().is_err());

        let mut bad = args();
        bad.wait_min = 5.0;
        assert!(bad.to_settings().is_err());

        let mut bad = args();
        bad.wait_min = -1.0;
        assert!(bad.to_settings().is_err());
    }

    #[test]
    fn test_out_of_range_settings_are_rejected() {
        let mut bad = args();
        bad.wait_max = 1e20;
        assert!(matches!(bad.to_settings(), Err(LoadTestError::Config(_))));

        let mut bad = args();
        bad.spawn_rate = 1e-20;
        assert!(matches!(bad.to_settings(), Err(LoadTestError::Config(_))));

        let mut bad = args();
        bad.run_time = u64::MAX;
        assert!(matches!(bad.to_settings(), Err(LoadTestError::Config(_))));

        let settings = LoadSettings {
            spawn_rate: 1e-20,
            ..LoadSettings::default()
        };
        assert_eq!(settings.spawn_interval(), Duration::MAX);
    }
}
