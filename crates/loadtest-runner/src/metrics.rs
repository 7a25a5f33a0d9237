//! Metrics collected during a load run.

use std::collections::BTreeMap;
use std::time::Duration;

/// Metrics for a single task.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TaskStats {
    /// Task runs that completed.
    pub successes: u64,
    /// Task runs that returned an error.
    pub failures: u64,
    /// Task runs that skipped themselves without sending anything.
    pub skips: u64,
    total_latency: Duration,
    min_latency: Option<Duration>,
    max_latency: Duration,
}

impl TaskStats {
    pub fn record_success(&mut self, latency: Duration) {
        self.successes += 1;
        self.record_latency(latency);
    }

    pub fn record_failure(&mut self, latency: Duration) {
        self.failures += 1;
        self.record_latency(latency);
    }

    pub fn record_skip(&mut self) {
        self.skips += 1;
    }

    fn record_latency(&mut self, latency: Duration) {
        self.total_latency += latency;
        self.min_latency = Some(self.min_latency.map_or(latency, |min| min.min(latency)));
        self.max_latency = self.max_latency.max(latency);
    }

    /// Task runs that reached the gateway.
    pub fn requests(&self) -> u64 {
        self.successes + self.failures
    }

    pub fn avg_latency(&self) -> Option<Duration> {
        let requests = u32::try_from(self.requests()).ok().filter(|n| *n > 0)?;
        Some(self.total_latency / requests)
    }

    pub fn min_latency(&self) -> Option<Duration> {
        self.min_latency
    }

    pub fn max_latency(&self) -> Option<Duration> {
        (self.requests() > 0).then_some(self.max_latency)
    }

    /// Fraction of requests that failed.
    pub fn failure_rate(&self) -> f64 {
        if self.requests() > 0 {
            self.failures as f64 / self.requests() as f64
        } else {
            0.0
        }
    }

    pub fn merge(&mut self, other: &TaskStats) {
        self.successes += other.successes;
        self.failures += other.failures;
        self.skips += other.skips;
        self.total_latency += other.total_latency;
        self.min_latency = match (self.min_latency, other.min_latency) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        };
        self.max_latency = self.max_latency.max(other.max_latency);
    }
}

/// Metrics of a whole run, keyed by task name.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RunMetrics {
    pub tasks: BTreeMap<&'static str, TaskStats>,
    /// Virtual users started.
    pub users_spawned: usize,
    /// Wall clock duration of the run.
    pub total_duration: Duration,
}

impl RunMetrics {
    pub fn task_mut(&mut self, name: &'static str) -> &mut TaskStats {
        self.tasks.entry(name).or_default()
    }

    pub fn task(&self, name: &str) -> Option<&TaskStats> {
        self.tasks.get(name)
    }

    /// Merge the metrics of one virtual user into the run totals.
    pub fn merge(&mut self, other: &RunMetrics) {
        for (name, stats) in &other.tasks {
            self.task_mut(*name).merge(stats);
        }
    }

    /// All tasks combined.
    pub fn totals(&self) -> TaskStats {
        let mut totals = TaskStats::default();
        for stats in self.tasks.values() {
            totals.merge(stats);
        }
        totals
    }

    /// Calculate requests per second.
    pub fn requests_per_second(&self) -> f64 {
        if self.total_duration.as_secs_f64() > 0.0 {
            self.totals().requests() as f64 / self.total_duration.as_secs_f64()
        } else {
            0.0
        }
    }
}
