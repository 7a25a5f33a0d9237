//! Load runner tests with paused time and in-memory task sets.

use async_trait::async_trait;
use gateway_types::TransportError;
use loadtest_runner::{
    LoadReport, LoadRunner, LoadSettings, TaskOrder, TaskOutcome, TaskSet, TaskSpec, ON_START,
};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

#[derive(Clone, Copy)]
enum Step {
    Login,
    Read,
    Fail,
}

/// `Read` is skipped until `Login` ran; `Fail` always fails.
struct Journey {
    logged_in: bool,
    order: TaskOrder,
    fail_start: bool,
}

impl Journey {
    fn new(order: TaskOrder) -> Self {
        Self {
            logged_in: false,
            order,
            fail_start: false,
        }
    }
}

#[async_trait]
impl TaskSet for Journey {
    type Task = Step;

    fn tasks(&self) -> Vec<TaskSpec<Step>> {
        vec![
            TaskSpec::new(Step::Read, "read", 1),
            TaskSpec::new(Step::Login, "login", 1),
            TaskSpec::new(Step::Fail, "fail", 1),
        ]
    }

    fn order(&self) -> TaskOrder {
        self.order
    }

    async fn on_start(&mut self) -> Result<(), TransportError> {
        if self.fail_start {
            return Err(TransportError::Connection {
                endpoint: "on_start".to_string(),
                message: "refused".to_string(),
            });
        }
        Ok(())
    }

    async fn run(&mut self, task: Step) -> Result<TaskOutcome, TransportError> {
        match task {
            Step::Login => {
                self.logged_in = true;
                Ok(TaskOutcome::Done)
            }
            Step::Read if !self.logged_in => Ok(TaskOutcome::Skipped),
            Step::Read => Ok(TaskOutcome::Done),
            Step::Fail => Err(TransportError::Status {
                endpoint: "fail".to_string(),
                status: 503,
                body: String::new(),
            }),
        }
    }
}

fn settings(users: usize, run_time_secs: u64) -> LoadSettings {
    LoadSettings {
        users,
        spawn_rate: 1.0,
        run_time: Duration::from_secs(run_time_secs),
        wait_min: Duration::from_secs(1),
        wait_max: Duration::from_secs(1),
        seed: Some(7),
    }
}

#[tokio::test(start_paused = true)]
async fn test_sequential_run_counts_skips_and_failures() {
    let runner = LoadRunner::new(settings(1, 6)).unwrap();
    let metrics = runner
        .run("journey", |_| Journey::new(TaskOrder::Sequential))
        .await
        .unwrap();

    // Six one-second iterations: read, login, fail, read, login, fail.
    let read = metrics.task("read").unwrap();
    assert_eq!(read.skips, 1);
    assert_eq!(read.successes, 1);
    assert_eq!(metrics.task("login").unwrap().successes, 2);
    assert_eq!(metrics.task("fail").unwrap().failures, 2);
    assert_eq!(metrics.users_spawned, 1);

    let report = LoadReport::new("journey", runner.settings().clone(), metrics);
    assert!(!report.passed());
}

#[tokio::test(start_paused = true)]
async fn test_users_spawn_at_rate_and_stop_at_deadline() {
    let created = Arc::new(AtomicUsize::new(0));
    let runner = LoadRunner::new(settings(3, 10)).unwrap();

    let metrics = runner
        .run("journey", |_| {
            created.fetch_add(1, Ordering::SeqCst);
            Journey::new(TaskOrder::Weighted)
        })
        .await
        .unwrap();

    assert_eq!(created.load(Ordering::SeqCst), 3);
    assert_eq!(metrics.users_spawned, 3);
    // Users start at 0s, 1s and 2s and run one task per second until 10s.
    let runs: u64 = metrics
        .tasks
        .values()
        .map(|stats| stats.requests() + stats.skips)
        .sum();
    assert_eq!(runs, 10 + 9 + 8);
    assert!(metrics.total_duration >= Duration::from_secs(10));
}

#[tokio::test(start_paused = true)]
async fn test_spawning_stops_when_run_time_is_over() {
    let runner = LoadRunner::new(settings(100, 3)).unwrap();
    let metrics = runner
        .run("journey", |_| Journey::new(TaskOrder::Sequential))
        .await
        .unwrap();

    assert_eq!(metrics.users_spawned, 3);
}

#[tokio::test(start_paused = true)]
async fn test_failed_start_ends_user() {
    let runner = LoadRunner::new(settings(2, 5)).unwrap();
    let metrics = runner
        .run("journey", |index| Journey {
            fail_start: index == 0,
            ..Journey::new(TaskOrder::Sequential)
        })
        .await
        .unwrap();

    assert_eq!(metrics.task(ON_START).unwrap().failures, 1);
    // Only the second user ran tasks: started at 1s, four iterations.
    let runs: u64 = ["read", "login", "fail"]
        .iter()
        .filter_map(|name| metrics.task(name))
        .map(|stats| stats.requests() + stats.skips)
        .sum();
    assert_eq!(runs, 4);
}
