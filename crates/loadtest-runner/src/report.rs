//! Load run report.

use crate::metrics::{RunMetrics, TaskStats};
use crate::settings::LoadSettings;
use comfy_table::{presets::UTF8_FULL, Cell, Color, Table};
use std::time::Duration;

/// Result of a load run.
#[derive(Debug, Clone)]
pub struct LoadReport {
    pub scenario: String,
    pub settings: LoadSettings,
    pub metrics: RunMetrics,
}

impl LoadReport {
    pub fn new(scenario: impl Into<String>, settings: LoadSettings, metrics: RunMetrics) -> Self {
        Self {
            scenario: scenario.into(),
            settings,
            metrics,
        }
    }

    /// True if no request failed.
    pub fn passed(&self) -> bool {
        self.metrics.totals().failures == 0
    }

    /// Generate a summary string.
    pub fn summary(&self) -> String {
        let totals = self.metrics.totals();
        format!(
            "Load Test Report: {}\n\
             ================\n\
             Scenario: {}\n\
             Users: {} spawned of {} ({}/s)\n\
             Duration: {:?}\n\
             Requests: {} ({:.2} req/sec)\n\
             Failures: {} ({:.2}%)\n\
             Skips: {}\n",
            if self.passed() { "PASSED" } else { "FAILED" },
            self.scenario,
            self.metrics.users_spawned,
            self.settings.users,
            self.settings.spawn_rate,
            self.metrics.total_duration,
            totals.requests(),
            self.metrics.requests_per_second(),
            totals.failures,
            totals.failure_rate() * 100.0,
            totals.skips,
        )
    }

    /// Format per-task metrics as a table.
    pub fn format_table(&self) -> String {
        let mut table = Table::new();
        table.load_preset(UTF8_FULL);
        table.set_header(vec![
            "Task", "Requests", "Failures", "Skips", "Min (ms)", "Avg (ms)", "Max (ms)",
        ]);

        for (name, stats) in &self.metrics.tasks {
            table.add_row(stats_row(Cell::new(name), stats));
        }
        table.add_row(stats_row(
            Cell::new("TOTAL").fg(Color::Cyan),
            &self.metrics.totals(),
        ));

        let mut output = table.to_string();
        output.push('\n');
        output
    }
}

fn stats_row(name: Cell, stats: &TaskStats) -> Vec<Cell> {
    let failures = if stats.failures > 0 {
        Cell::new(stats.failures).fg(Color::Red)
    } else {
        Cell::new(stats.failures)
    };
    vec![
        name,
        Cell::new(stats.requests()),
        failures,
        Cell::new(stats.skips),
        Cell::new(format_millis(stats.min_latency())),
        Cell::new(format_millis(stats.avg_latency())),
        Cell::new(format_millis(stats.max_latency())),
    ]
}

fn format_millis(latency: Option<Duration>) -> String {
    latency
        .map(|d| format!("{:.1}", d.as_secs_f64() * 1000.0))
        .unwrap_or_else(|| "-".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report() -> LoadReport {
        let mut metrics = RunMetrics {
            users_spawned: 2,
            total_duration: Duration::from_secs(10),
            ..Default::default()
        };
        metrics
            .task_mut("get_accounts")
            .record_success(Duration::from_millis(12));
        metrics.task_mut("open_deposit_account").record_skip();
        LoadReport::new("http-get-accounts", LoadSettings::default(), metrics)
    }

    #[test]
    fn test_table_lists_every_task() {
        let table = report().format_table();
        assert!(table.contains("get_accounts"));
        assert!(table.contains("open_deposit_account"));
        assert!(table.contains("TOTAL"));
        assert!(table.contains("12.0"));
    }

    #[test]
    fn test_summary_status() {
        let mut report = report();
        assert!(report.passed());
        assert!(report.summary().contains("PASSED"));

        report
            .metrics
            .task_mut("get_accounts")
            .record_failure(Duration::from_millis(1));
        assert!(!report.passed());
        assert!(report.summary().contains("Failures: 1"));
    }
}
