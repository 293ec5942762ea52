//! Task entity and construction parameters.

use super::{
    Comment, KanbanStatus, Priority, StoryPoints, TaskDomainError, TaskId, TaskPatch, TaskStatus,
    TaskType,
};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// A unit of work tracked on an integration's board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    id: TaskId,
    title: String,
    description: String,
    status: TaskStatus,
    kanban_status: KanbanStatus,
    priority: Priority,
    task_type: TaskType,
    assigned_to: Option<String>,
    reporter: Option<String>,
    story_points: StoryPoints,
    sprint: Option<String>,
    tags: BTreeSet<String>,
    due_date: Option<DateTime<Utc>>,
    comments: Vec<Comment>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

/// Parameter object for creating a task.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewTask {
    /// Short summary, required.
    pub title: String,
    /// Longer explanation, required.
    pub description: String,
    /// Priority of the work.
    pub priority: Priority,
    /// Kind of work.
    pub task_type: TaskType,
    /// Person doing the work.
    pub assigned_to: Option<String>,
    /// Person who raised the work.
    pub reporter: Option<String>,
    /// Raw story point estimate, validated on construction.
    pub story_points: i64,
    /// Sprint label.
    pub sprint: Option<String>,
    /// Free-form tags.
    pub tags: BTreeSet<String>,
    /// Optional deadline.
    pub due_date: Option<DateTime<Utc>>,
}

impl Task {
    /// Creates a task in the `backlog` column with `pending` status.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError`] when the title or description is blank or
    /// the story point estimate is out of range.
    pub fn new(id: TaskId, draft: NewTask, clock: &impl Clock) -> Result<Self, TaskDomainError> {
        let title = required_text(draft.title, TaskDomainError::EmptyTitle)?;
        let description = required_text(draft.description, TaskDomainError::EmptyDescription)?;
        let story_points = StoryPoints::new(draft.story_points)?;
        let timestamp = clock.utc();

        Ok(Self {
            id,
            title,
            description,
            status: TaskStatus::Pending,
            kanban_status: KanbanStatus::Backlog,
            priority: draft.priority,
            task_type: draft.task_type,
            assigned_to: draft.assigned_to.and_then(optional_text),
            reporter: draft.reporter.and_then(optional_text),
            story_points,
            sprint: draft.sprint.and_then(optional_text),
            tags: draft.tags,
            due_date: draft.due_date,
            comments: Vec::new(),
            created_at: timestamp,
            updated_at: timestamp,
        })
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> &TaskId {
        &self.id
    }

    /// Returns the title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the legacy lifecycle status.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        self.status
    }

    /// Returns the board column.
    #[must_use]
    pub const fn kanban_status(&self) -> KanbanStatus {
        self.kanban_status
    }

    /// Returns the priority.
    #[must_use]
    pub const fn priority(&self) -> Priority {
        self.priority
    }

    /// Returns the task type.
    #[must_use]
    pub const fn task_type(&self) -> TaskType {
        self.task_type
    }

    /// Returns the assignee, if any.
    #[must_use]
    pub fn assigned_to(&self) -> Option<&str> {
        self.assigned_to.as_deref()
    }

    /// Returns the reporter, if any.
    #[must_use]
    pub fn reporter(&self) -> Option<&str> {
        self.reporter.as_deref()
    }

    /// Returns the story point estimate.
    #[must_use]
    pub const fn story_points(&self) -> StoryPoints {
        self.story_points
    }

    /// Returns the sprint label, if any.
    #[must_use]
    pub fn sprint(&self) -> Option<&str> {
        self.sprint.as_deref()
    }

    /// Returns the tags.
    #[must_use]
    pub const fn tags(&self) -> &BTreeSet<String> {
        &self.tags
    }

    /// Returns the due date, if any.
    #[must_use]
    pub const fn due_date(&self) -> Option<DateTime<Utc>> {
        self.due_date
    }

    /// Returns comments in the order they were added.
    #[must_use]
    pub fn comments(&self) -> &[Comment] {
        &self.comments
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the latest modification timestamp.
    #[must_use]
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Whether the lifecycle status is `completed`.
    #[must_use]
    pub fn is_completed(&self) -> bool {
        self.status == TaskStatus::Completed
    }

    /// Whether the task is past its due date and not completed.
    #[must_use]
    pub fn is_overdue(&self, now: DateTime<Utc>) -> bool {
        !self.is_completed() && self.due_date.is_some_and(|due| due < now)
    }

    /// Applies a partial update.
    ///
    /// The whole patch is validated before any field changes, so a rejected
    /// patch leaves the task untouched.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError`] when a provided title or description is
    /// blank or the story point estimate is out of range.
    pub fn apply_patch(&mut self, patch: TaskPatch, clock: &impl Clock) -> Result<(), TaskDomainError> {
        let title = patch
            .title
            .map(|text| required_text(text, TaskDomainError::EmptyTitle))
            .transpose()?;
        let description = patch
            .description
            .map(|text| required_text(text, TaskDomainError::EmptyDescription))
            .transpose()?;
        let story_points = patch.story_points.map(StoryPoints::new).transpose()?;

        if let Some(value) = title {
            self.title = value;
        }
        if let Some(value) = description {
            self.description = value;
        }
        if let Some(value) = story_points {
            self.story_points = value;
        }
        if let Some(value) = patch.status {
            self.status = value;
        }
        if let Some(value) = patch.kanban_status {
            self.kanban_status = value;
        }
        if let Some(value) = patch.priority {
            self.priority = value;
        }
        if let Some(value) = patch.task_type {
            self.task_type = value;
        }
        if let Some(value) = patch.assigned_to {
            self.assigned_to = optional_text(value);
        }
        if let Some(value) = patch.reporter {
            self.reporter = optional_text(value);
        }
        if let Some(value) = patch.sprint {
            self.sprint = optional_text(value);
        }
        if let Some(value) = patch.due_date {
            self.due_date = Some(value);
        }
        if let Some(value) = patch.tags {
            self.tags = value;
        }
        self.touch(clock);
        Ok(())
    }

    /// Places the task in a board column.
    pub fn set_kanban_status(&mut self, kanban_status: KanbanStatus, clock: &impl Clock) {
        self.kanban_status = kanban_status;
        self.touch(clock);
    }

    /// Sets the legacy lifecycle status.
    pub fn set_status(&mut self, status: TaskStatus, clock: &impl Clock) {
        self.status = status;
        self.touch(clock);
    }

    /// Appends a comment.
    pub fn add_comment(&mut self, comment: Comment, clock: &impl Clock) {
        self.comments.push(comment);
        self.touch(clock);
    }

    /// Updates the `updated_at` timestamp to the current clock time.
    fn touch(&mut self, clock: &impl Clock) {
        self.updated_at = clock.utc();
    }
}

/// Trims `value`, rejecting blank text with `error`.
fn required_text(value: String, error: TaskDomainError) -> Result<String, TaskDomainError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(error);
    }
    Ok(trimmed.to_owned())
}

/// Trims `value`, mapping blank text to `None`.
fn optional_text(value: String) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_owned())
}
