//! Portfolio-wide dashboard metrics.

use crate::board::domain::COLUMN_ORDER;
use crate::integration::domain::{Integration, IntegrationId, WorkflowStage};
use crate::task::domain::{KanbanStatus, Priority, Task, TaskStatus};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Activity summary of one integration on the dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecentUpdate {
    /// Integration identifier.
    pub integration_id: IntegrationId,
    /// Integration display name.
    pub integration_name: String,
    /// Current workflow stage.
    pub stage: WorkflowStage,
    /// Most recent task update, or the integration's own timestamp without
    /// tasks.
    pub last_activity: DateTime<Utc>,
    /// Tasks outside the `done` and `blocked` columns.
    pub active_tasks: usize,
}

impl RecentUpdate {
    fn from_integration(integration: &Integration) -> Self {
        Self {
            integration_id: integration.id().clone(),
            integration_name: integration.name().to_owned(),
            stage: integration.stage(),
            last_activity: integration.last_activity(),
            active_tasks: integration
                .tasks()
                .iter()
                .filter(|task| task.kanban_status().is_active())
                .count(),
        }
    }
}

/// Aggregate counts across every integration and task.
///
/// Every distribution lists all variants, including those with no entries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dashboard {
    /// Number of integrations.
    pub total_integrations: usize,
    /// Number of tasks across all integrations.
    pub total_tasks: usize,
    /// Tasks outside the `done` and `blocked` columns.
    pub active_tasks: usize,
    /// Tasks with `high` or `critical` priority.
    pub high_priority_tasks: usize,
    /// Tasks past their due date that are not completed.
    pub overdue_tasks: usize,
    /// Sum of story points.
    pub total_story_points: u64,
    /// Story points of completed tasks.
    pub completed_story_points: u64,
    /// Story points not yet completed.
    pub remaining_story_points: u64,
    /// Integrations per workflow stage.
    pub stage_distribution: BTreeMap<WorkflowStage, usize>,
    /// Tasks per lifecycle status.
    pub status_distribution: BTreeMap<TaskStatus, usize>,
    /// Tasks per board column.
    pub kanban_distribution: BTreeMap<KanbanStatus, usize>,
    /// Tasks per priority.
    pub priority_distribution: BTreeMap<Priority, usize>,
    /// Most recently active integrations, newest first.
    pub recent_updates: Vec<RecentUpdate>,
    /// When the dashboard was computed.
    pub generated_at: DateTime<Utc>,
}

impl Dashboard {
    /// Computes the dashboard over a snapshot of integrations.
    ///
    /// `recent_limit` caps the number of [`RecentUpdate`] entries. Ties in
    /// activity are broken by integration identifier.
    #[must_use]
    pub fn compute(integrations: &[Integration], now: DateTime<Utc>, recent_limit: usize) -> Self {
        let tasks: Vec<&Task> = integrations
            .iter()
            .flat_map(|integration| integration.tasks())
            .collect();

        let total_story_points = story_points(tasks.iter().copied());
        let completed_story_points =
            story_points(tasks.iter().copied().filter(|task| task.is_completed()));

        let mut recent_updates: Vec<RecentUpdate> = integrations
            .iter()
            .map(RecentUpdate::from_integration)
            .collect();
        recent_updates.sort_by(|left, right| {
            right
                .last_activity
                .cmp(&left.last_activity)
                .then_with(|| left.integration_id.cmp(&right.integration_id))
        });
        recent_updates.truncate(recent_limit);

        Self {
            total_integrations: integrations.len(),
            total_tasks: tasks.len(),
            active_tasks: tasks
                .iter()
                .filter(|task| task.kanban_status().is_active())
                .count(),
            high_priority_tasks: tasks.iter().filter(|task| task.priority().is_high()).count(),
            overdue_tasks: tasks.iter().filter(|task| task.is_overdue(now)).count(),
            total_story_points,
            completed_story_points,
            remaining_story_points: total_story_points.saturating_sub(completed_story_points),
            stage_distribution: tally(
                &WorkflowStage::ALL,
                integrations.iter().map(Integration::stage),
            ),
            status_distribution: tally(&TaskStatus::ALL, tasks.iter().map(|task| task.status())),
            kanban_distribution: tally(
                &COLUMN_ORDER,
                tasks.iter().map(|task| task.kanban_status()),
            ),
            priority_distribution: tally(&Priority::ALL, tasks.iter().map(|task| task.priority())),
            recent_updates,
            generated_at: now,
        }
    }
}

fn story_points<'a>(tasks: impl Iterator<Item = &'a Task>) -> u64 {
    tasks.map(|task| u64::from(task.story_points())).sum()
}

/// Counts `values` per key, starting every key in `keys` at zero.
fn tally<K: Ord + Copy>(
    keys: &[K],
    values: impl Iterator<Item = K>,
) -> BTreeMap<K, usize> {
    let mut counts: BTreeMap<K, usize> = keys.iter().map(|key| (*key, 0)).collect();
    for value in values {
        let count = counts.entry(value).or_default();
        *count = count.saturating_add(1);
    }
    counts
}
