//! Per-integration progress metrics.

use crate::ratio::ratio;
use crate::task::domain::{Task, TaskStatus};
use serde::{Deserialize, Serialize};

/// Completion summary of an integration's tasks, counted by lifecycle status.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IntegrationProgress {
    /// Number of tasks owned by the integration.
    pub total_tasks: usize,
    /// Tasks whose status is `completed`.
    pub completed_tasks: usize,
    /// Tasks whose status is `in_progress`.
    pub in_progress_tasks: usize,
    /// `completed_tasks / total_tasks`, or `0.0` without tasks.
    pub completion_ratio: f64,
}

impl IntegrationProgress {
    /// Computes progress over a task list.
    #[must_use]
    pub fn from_tasks(tasks: &[Task]) -> Self {
        let total_tasks = tasks.len();
        let completed_tasks = tasks.iter().filter(|task| task.is_completed()).count();
        let in_progress_tasks = tasks
            .iter()
            .filter(|task| task.status() == TaskStatus::InProgress)
            .count();

        Self {
            total_tasks,
            completed_tasks,
            in_progress_tasks,
            completion_ratio: ratio(completed_tasks, total_tasks),
        }
    }
}
