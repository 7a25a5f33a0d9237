//! Task sets: what one virtual user repeats.

use async_trait::async_trait;
use gateway_types::TransportError;
use rand::distr::weighted::WeightedIndex;
use rand::distr::Distribution;
use rand::Rng;

/// How a virtual user picks its next task.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskOrder {
    /// Random choice, proportional to each task's weight.
    Weighted,
    /// Every task in declaration order, then start over.
    Sequential,
}

/// A task with its display name and relative weight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaskSpec<T> {
    pub task: T,
    pub name: &'static str,
    pub weight: u32,
}

impl<T> TaskSpec<T> {
    pub const fn new(task: T, name: &'static str, weight: u32) -> Self {
        Self { task, name, weight }
    }
}

/// Result of a task that did not fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskOutcome {
    Done,
    /// A prerequisite from an earlier task is missing; nothing was sent.
    Skipped,
}

/// Steps one virtual user repeats until the run ends.
///
/// Each virtual user owns its own task set, so state such as "the user I
/// created" lives in `&mut self` and never crosses users.
#[async_trait]
pub trait TaskSet: Send + 'static {
    type Task: Copy + Send + Sync + 'static;

    fn tasks(&self) -> Vec<TaskSpec<Self::Task>>;

    fn order(&self) -> TaskOrder {
        TaskOrder::Weighted
    }

    /// Runs once before the first task. A failure ends this virtual user.
    async fn on_start(&mut self) -> Result<(), TransportError> {
        Ok(())
    }

    async fn run(&mut self, task: Self::Task) -> Result<TaskOutcome, TransportError>;
}

/// Picks task indices according to a [`TaskOrder`].
#[derive(Debug, Clone)]
pub enum TaskPicker {
    Weighted(WeightedIndex<u32>),
    Sequential { len: usize, next: usize },
}

impl TaskPicker {
    /// `None` if there are no tasks or every weight is zero.
    pub fn new<T>(order: TaskOrder, tasks: &[TaskSpec<T>]) -> Option<Self> {
        if tasks.is_empty() {
            return None;
        }
        match order {
            TaskOrder::Weighted => WeightedIndex::new(tasks.iter().map(|spec| spec.weight))
                .ok()
                .map(TaskPicker::Weighted),
            TaskOrder::Sequential => Some(TaskPicker::Sequential {
                len: tasks.len(),
                next: 0,
            }),
        }
    }

    pub fn pick<R: Rng + ?Sized>(&mut self, rng: &mut R) -> usize {
        match self {
            TaskPicker::Weighted(index) => index.sample(rng),
            TaskPicker::Sequential { len, next } => {
                let picked = *next;
                *next = (*next + 1) % *len;
                picked
            }
        }
    }
}
