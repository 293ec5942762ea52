//! Per-sprint delivery summaries.

use crate::integration::domain::Integration;
use crate::ratio::ratio;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Delivery figures for one sprint label.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SprintSummary {
    /// Tasks carrying the label.
    pub total_tasks: usize,
    /// Of those, tasks whose status is `completed`.
    pub completed_tasks: usize,
    /// Sum of story points.
    pub total_story_points: u64,
    /// Story points of completed tasks.
    pub completed_story_points: u64,
    /// `completed_tasks / total_tasks`.
    pub completion_rate: f64,
}

/// Sprint summaries keyed by the exact, case-sensitive sprint label.
pub type SprintReport = BTreeMap<String, SprintSummary>;

/// Builds the sprint report over a snapshot of integrations.
///
/// Tasks without a sprint are left out.
#[must_use]
pub fn sprint_report(integrations: &[Integration]) -> SprintReport {
    let mut report = SprintReport::new();
    let sprint_tasks = integrations
        .iter()
        .flat_map(Integration::tasks)
        .filter_map(|task| task.sprint().map(|label| (label, task)));

    for (label, task) in sprint_tasks {
        let summary = report.entry(label.to_owned()).or_default();
        let points = u64::from(task.story_points());
        summary.total_tasks = summary.total_tasks.saturating_add(1);
        summary.total_story_points = summary.total_story_points.saturating_add(points);
        if task.is_completed() {
            summary.completed_tasks = summary.completed_tasks.saturating_add(1);
            summary.completed_story_points = summary.completed_story_points.saturating_add(points);
        }
    }

    for summary in report.values_mut() {
        summary.completion_rate = ratio(summary.completed_tasks, summary.total_tasks);
    }
    report
}
