//! Suggested next actions for one integration.

use crate::integration::domain::{Integration, IntegrationId, WorkflowStage};
use crate::task::domain::{KanbanStatus, Task, TaskStatus};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Number of blocked task titles listed in the recommendations.
pub const BLOCKED_TITLES_SHOWN: usize = 3;

/// Guidance generated from an integration's tasks and stage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecommendedActions {
    /// Integration the guidance is for.
    pub integration_id: IntegrationId,
    /// Stage the checklist was chosen for.
    pub stage: WorkflowStage,
    /// Tasks that are blocked by status or by column.
    pub blocked_tasks: usize,
    /// Titles of the first blocked tasks, in creation order.
    pub blocked_titles: Vec<String>,
    /// High-priority tasks in progress.
    pub high_priority_in_progress: usize,
    /// High-priority tasks not yet started.
    pub high_priority_pending: usize,
    /// Stage-specific checklist items.
    pub stage_checklist: Vec<String>,
    /// When the guidance was generated.
    pub generated_at: DateTime<Utc>,
}

impl RecommendedActions {
    /// Derives guidance for `integration`.
    #[must_use]
    pub fn for_integration(integration: &Integration, now: DateTime<Utc>) -> Self {
        let tasks = integration.tasks();
        let blocked: Vec<&Task> = tasks.iter().filter(|task| is_blocked(task)).collect();
        let high_priority_with = |status: TaskStatus| {
            tasks
                .iter()
                .filter(|task| task.status() == status && task.priority().is_high())
                .count()
        };

        Self {
            integration_id: integration.id().clone(),
            stage: integration.stage(),
            blocked_tasks: blocked.len(),
            blocked_titles: blocked
                .iter()
                .take(BLOCKED_TITLES_SHOWN)
                .map(|task| task.title().to_owned())
                .collect(),
            high_priority_in_progress: high_priority_with(TaskStatus::InProgress),
            high_priority_pending: high_priority_with(TaskStatus::Pending),
            stage_checklist: stage_checklist(integration.stage())
                .iter()
                .map(|item| (*item).to_owned())
                .collect(),
            generated_at: now,
        }
    }

    /// Renders the guidance as display lines, most urgent first.
    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        let mut lines = Vec::new();
        if self.blocked_tasks > 0 {
            lines.push(format!("Resolve {} blocked task(s)", self.blocked_tasks));
            lines.extend(self.blocked_titles.iter().map(|title| format!("  - {title}")));
        }
        if self.high_priority_in_progress > 0 {
            lines.push(format!(
                "Focus on {} high-priority task(s) in progress",
                self.high_priority_in_progress
            ));
        }
        if self.high_priority_pending > 0 {
            lines.push(format!(
                "Start {} high-priority pending task(s)",
                self.high_priority_pending
            ));
        }
        lines.extend(self.stage_checklist.iter().cloned());
        lines
    }
}

fn is_blocked(task: &Task) -> bool {
    task.status() == TaskStatus::Blocked || task.kanban_status() == KanbanStatus::Blocked
}

/// Returns the standing checklist for a workflow stage.
#[must_use]
pub const fn stage_checklist(stage: WorkflowStage) -> &'static [&'static str] {
    match stage {
        WorkflowStage::Research => &[
            "Gather technical requirements",
            "Schedule kickoff meeting with stakeholders",
            "Define success criteria and timeline",
        ],
        WorkflowStage::Build => &[
            "Finalize API documentation",
            "Set up development environment",
            "Begin implementation of core features",
        ],
        WorkflowStage::Testing => &[
            "Execute test scenarios",
            "Validate API responses",
            "Coordinate with external team for testing",
        ],
        WorkflowStage::Launch => &[
            "Prepare production deployment",
            "Schedule go-live date",
            "Set up monitoring and alerts",
        ],
        WorkflowStage::Maintenance => &[],
    }
}
