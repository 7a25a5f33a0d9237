//! Load runner: spawns virtual users and collects their metrics.

use crate::error::LoadTestError;
use crate::metrics::RunMetrics;
use crate::settings::LoadSettings;
use crate::task::{TaskOutcome, TaskPicker, TaskSet};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::time::Duration;
use tokio::task::JoinSet;
use tokio::time::{sleep, sleep_until, Instant};
use tracing::{debug, info, warn};

/// Metrics key for failures of [`TaskSet::on_start`].
pub const ON_START: &str = "on_start";

pub struct LoadRunner {
    settings: LoadSettings,
}

impl LoadRunner {
    pub fn new(settings: LoadSettings) -> Result<Self, LoadTestError> {
        settings.validate()?;
        Ok(Self { settings })
    }

    pub fn settings(&self) -> &LoadSettings {
        &self.settings
    }

    /// Run `scenario` until the run time elapses.
    ///
    /// `new_task_set` is called once per virtual user with its index.
    /// Users are started `1 / spawn_rate` seconds apart; spawning stops
    /// early if the run time is over before every user has started.
    pub async fn run<S, F>(
        &self,
        scenario: &str,
        mut new_task_set: F,
    ) -> Result<RunMetrics, LoadTestError>
    where
        S: TaskSet,
        F: FnMut(usize) -> S,
    {
        let start_time = Instant::now();
        let deadline = start_time
            .checked_add(self.settings.run_time)
            .ok_or_else(|| {
                LoadTestError::Config(format!("run time {:?} is out of range", self.settings.run_time))
            })?;
        let spawn_interval = self.settings.spawn_interval();

        info!(
            "Starting load scenario '{}': {} users at {}/s for {:?}",
            scenario, self.settings.users, self.settings.spawn_rate, self.settings.run_time
        );

        let mut join_set = JoinSet::new();
        let mut users_spawned = 0;
        for index in 0..self.settings.users {
            if index > 0 {
                if Instant::now() + spawn_interval >= deadline {
                    warn!(
                        "Run time elapsed after spawning {} of {} users",
                        users_spawned, self.settings.users
                    );
                    break;
                }
                sleep(spawn_interval).await;
            }

            let rng = match self.settings.seed {
                Some(seed) => StdRng::seed_from_u64(seed.wrapping_add(index as u64)),
                None => StdRng::from_os_rng(),
            };
            let user = VirtualUser {
                index,
                task_set: new_task_set(index),
                rng,
                wait_min: self.settings.wait_min,
                wait_max: self.settings.wait_max,
                deadline,
            };
            join_set.spawn(user.run());
            users_spawned += 1;
            debug!("Spawned virtual user {}", index);
        }

        let mut metrics = RunMetrics::default();
        while let Some(joined) = join_set.join_next().await {
            let user_metrics = joined.map_err(|e| LoadTestError::Worker(e.to_string()))?;
            metrics.merge(&user_metrics);
        }
        metrics.users_spawned = users_spawned;
        metrics.total_duration = start_time.elapsed();

        let totals = metrics.totals();
        info!(
            "Load scenario '{}' finished in {:?}: {} requests, {} failures, {} skips ({:.2} req/sec)",
            scenario,
            metrics.total_duration,
            totals.requests(),
            totals.failures,
            totals.skips,
            metrics.requests_per_second()
        );
        Ok(metrics)
    }
}

struct VirtualUser<S> {
    index: usize,
    task_set: S,
    rng: StdRng,
    wait_min: Duration,
    wait_max: Duration,
    deadline: Instant,
}

impl<S: TaskSet> VirtualUser<S> {
    async fn run(mut self) -> RunMetrics {
        let mut metrics = RunMetrics::default();

        let tasks = self.task_set.tasks();
        let Some(mut picker) = TaskPicker::new(self.task_set.order(), &tasks) else {
            warn!("Virtual user {} has no runnable tasks", self.index);
            return metrics;
        };

        let started = Instant::now();
        if let Err(e) = self.task_set.on_start().await {
            warn!("Virtual user {} failed to start: {e}", self.index);
            metrics.task_mut(ON_START).record_failure(started.elapsed());
            return metrics;
        }

        while Instant::now() < self.deadline {
            let spec = tasks[picker.pick(&mut self.rng)];

            let started = Instant::now();
            match self.task_set.run(spec.task).await {
                Ok(TaskOutcome::Done) => metrics.task_mut(spec.name).record_success(started.elapsed()),
                Ok(TaskOutcome::Skipped) => metrics.task_mut(spec.name).record_skip(),
                Err(e) => {
                    warn!("Virtual user {}: task '{}' failed: {e}", self.index, spec.name);
                    metrics.task_mut(spec.name).record_failure(started.elapsed());
                }
            }

            let wait = self.wait_time();
            sleep_until((Instant::now() + wait).min(self.deadline)).await;
        }

        metrics
    }

    fn wait_time(&mut self) -> Duration {
        if self.wait_min == self.wait_max {
            return self.wait_min;
        }
        let secs = self
            .rng
            .random_range(self.wait_min.as_secs_f64()..=self.wait_max.as_secs_f64());
        Duration::from_secs_f64(secs)
    }
}
