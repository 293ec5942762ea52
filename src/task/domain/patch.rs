//! Partial task updates.

use super::{KanbanStatus, Priority, TaskStatus, TaskType};
use chrono::{DateTime, Utc};
use std::collections::BTreeSet;

/// Explicit optional-field patch for a task.
///
/// Only the fields that were set are applied. Text fields for assignee,
/// reporter and sprint clear the value when set to blank text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskPatch {
    pub(crate) title: Option<String>,
    pub(crate) description: Option<String>,
    pub(crate) status: Option<TaskStatus>,
    pub(crate) kanban_status: Option<KanbanStatus>,
    pub(crate) priority: Option<Priority>,
    pub(crate) task_type: Option<TaskType>,
    pub(crate) assigned_to: Option<String>,
    pub(crate) reporter: Option<String>,
    pub(crate) due_date: Option<DateTime<Utc>>,
    pub(crate) story_points: Option<i64>,
    pub(crate) sprint: Option<String>,
    pub(crate) tags: Option<BTreeSet<String>>,
}

impl TaskPatch {
    /// Creates an empty patch.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Replaces the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the lifecycle status.
    #[must_use]
    pub const fn with_status(mut self, status: TaskStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Sets the board column directly.
    #[must_use]
    pub const fn with_kanban_status(mut self, kanban_status: KanbanStatus) -> Self {
        self.kanban_status = Some(kanban_status);
        self
    }

    /// Sets the priority.
    #[must_use]
    pub const fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = Some(priority);
        self
    }

    /// Sets the task type.
    #[must_use]
    pub const fn with_task_type(mut self, task_type: TaskType) -> Self {
        self.task_type = Some(task_type);
        self
    }

    /// Sets or clears the assignee.
    #[must_use]
    pub fn with_assigned_to(mut self, assignee: impl Into<String>) -> Self {
        self.assigned_to = Some(assignee.into());
        self
    }

    /// Sets or clears the reporter.
    #[must_use]
    pub fn with_reporter(mut self, reporter: impl Into<String>) -> Self {
        self.reporter = Some(reporter.into());
        self
    }

    /// Sets the due date.
    #[must_use]
    pub const fn with_due_date(mut self, due_date: DateTime<Utc>) -> Self {
        self.due_date = Some(due_date);
        self
    }

    /// Sets the story point estimate, validated when applied.
    #[must_use]
    pub const fn with_story_points(mut self, story_points: i64) -> Self {
        self.story_points = Some(story_points);
        self
    }

    /// Sets or clears the sprint label.
    #[must_use]
    pub fn with_sprint(mut self, sprint: impl Into<String>) -> Self {
        self.sprint = Some(sprint.into());
        self
    }

    /// Replaces the tag set.
    #[must_use]
    pub fn with_tags(mut self, tags: impl IntoIterator<Item = String>) -> Self {
        self.tags = Some(tags.into_iter().collect());
        self
    }

    /// Whether the patch carries no changes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}
