//! Service layer for task creation, update, commenting and deletion.

use crate::context::TrackerContext;
use crate::error::{TrackerError, TrackerResult};
use crate::integration::{domain::IntegrationId, ports::IntegrationRepository};
use crate::task::domain::{
    Comment, NewTask, Priority, Task, TaskId, TaskPatch, TaskType,
};
use chrono::{DateTime, Utc};
use mockable::Clock;
use std::collections::BTreeSet;
use tracing::instrument;

/// Request payload for creating a task inside an integration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateTaskRequest {
    integration_id: IntegrationId,
    title: String,
    description: String,
    priority: Priority,
    task_type: TaskType,
    assigned_to: Option<String>,
    reporter: Option<String>,
    story_points: i64,
    sprint: Option<String>,
    tags: BTreeSet<String>,
    due_date: Option<DateTime<Utc>>,
}

impl CreateTaskRequest {
    /// Creates a request with the required task fields.
    #[must_use]
    pub fn new(
        integration_id: IntegrationId,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            integration_id,
            title: title.into(),
            description: description.into(),
            priority: Priority::default(),
            task_type: TaskType::default(),
            assigned_to: None,
            reporter: None,
            story_points: 0,
            sprint: None,
            tags: BTreeSet::new(),
            due_date: None,
        }
    }

    /// Sets the priority.
    #[must_use]
    pub const fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }

    /// Sets the task type.
    #[must_use]
    pub const fn with_task_type(mut self, task_type: TaskType) -> Self {
        self.task_type = task_type;
        self
    }

    /// Sets the assignee.
    #[must_use]
    pub fn with_assigned_to(mut self, assignee: impl Into<String>) -> Self {
        self.assigned_to = Some(assignee.into());
        self
    }

    /// Sets the reporter.
    #[must_use]
    pub fn with_reporter(mut self, reporter: impl Into<String>) -> Self {
        self.reporter = Some(reporter.into());
        self
    }

    /// Sets the story point estimate, validated on creation.
    #[must_use]
    pub const fn with_story_points(mut self, story_points: i64) -> Self {
        self.story_points = story_points;
        self
    }

    /// Sets the sprint label.
    #[must_use]
    pub fn with_sprint(mut self, sprint: impl Into<String>) -> Self {
        self.sprint = Some(sprint.into());
        self
    }

    /// Sets the tags.
    #[must_use]
    pub fn with_tags(mut self, tags: impl IntoIterator<Item = String>) -> Self {
        self.tags = tags.into_iter().collect();
        self
    }

    /// Sets the due date.
    #[must_use]
    pub const fn with_due_date(mut self, due_date: DateTime<Utc>) -> Self {
        self.due_date = Some(due_date);
        self
    }

    fn into_parts(self) -> (IntegrationId, NewTask) {
        let draft = NewTask {
            title: self.title,
            description: self.description,
            priority: self.priority,
            task_type: self.task_type,
            assigned_to: self.assigned_to,
            reporter: self.reporter,
            story_points: self.story_points,
            sprint: self.sprint,
            tags: self.tags,
            due_date: self.due_date,
        };
        (self.integration_id, draft)
    }
}

/// Task lifecycle orchestration service.
#[derive(Clone)]
pub struct TaskLifecycleService<R, C>
where
    R: IntegrationRepository,
    C: Clock + Send + Sync,
{
    context: TrackerContext<R, C>,
}

impl<R, C> TaskLifecycleService<R, C>
where
    R: IntegrationRepository,
    C: Clock + Send + Sync,
{
    /// Creates a new task lifecycle service.
    #[must_use]
    pub const fn new(context: TrackerContext<R, C>) -> Self {
        Self { context }
    }

    /// Creates a task in the `backlog` column of its integration.
    ///
    /// # Errors
    ///
    /// Returns [`TrackerError`] when the integration does not
    /// exist, validation fails, or the repository rejects persistence.
    #[instrument(skip(self, request), fields(integration_id = %request.integration_id))]
    pub async fn create_task(&self, request: CreateTaskRequest) -> TrackerResult<Task> {
        let (integration_id, draft) = request.into_parts();
        let _guard = self.context.lock_writes().await;
        let mut integration = self.context.load(&integration_id).await?;
        let task = integration.add_task(draft, self.context.clock())?;
        self.context.repository().update(&integration).await?;

        tracing::info!(task_id = %task.id(), "created task");
        Ok(task)
    }

    /// Returns one task.
    ///
    /// # Errors
    ///
    /// Returns [`TrackerError`] when the integration or task
    /// does not exist.
    #[instrument(skip(self), fields(integration_id = %integration_id, task_id = %task_id))]
    pub async fn get_task(
        &self,
        integration_id: &IntegrationId,
        task_id: &TaskId,
    ) -> TrackerResult<Task> {
        let integration = self.context.load(integration_id).await?;
        Ok(integration.task(task_id)?.clone())
    }

    /// Applies a partial update to a task.
    ///
    /// # Errors
    ///
    /// Returns [`TrackerError`] when the task does not exist or
    /// the patch fails validation; the task is left unchanged in that case.
    #[instrument(skip(self, patch), fields(integration_id = %integration_id, task_id = %task_id))]
    pub async fn update_task(
        &self,
        integration_id: &IntegrationId,
        task_id: &TaskId,
        patch: TaskPatch,
    ) -> TrackerResult<Task> {
        let _guard = self.context.lock_writes().await;
        let mut integration = self.context.load(integration_id).await?;
        let clock = self.context.clock();
        let task = integration.modify_task(task_id, clock, |task| {
            task.apply_patch(patch, clock)?;
            Ok::<_, TrackerError>(task.clone())
        })?;
        self.context.repository().update(&integration).await?;

        tracing::info!("updated task");
        Ok(task)
    }

    /// Appends a comment to a task.
    ///
    /// # Errors
    ///
    /// Returns [`TrackerError`] when the task does not exist or
    /// the author or content is blank.
    #[instrument(skip(self, author, content), fields(integration_id = %integration_id, task_id = %task_id))]
    pub async fn add_comment(
        &self,
        integration_id: &IntegrationId,
        task_id: &TaskId,
        author: impl Into<String> + Send,
        content: impl Into<String> + Send,
    ) -> TrackerResult<Comment> {
        let clock = self.context.clock();
        let comment = Comment::new(author, content, clock)?;

        let _guard = self.context.lock_writes().await;
        let mut integration = self.context.load(integration_id).await?;
        integration.modify_task(task_id, clock, |task| {
            task.add_comment(comment.clone(), clock);
            Ok::<_, TrackerError>(())
        })?;
        self.context.repository().update(&integration).await?;

        tracing::info!(comment_id = %comment.id(), "added comment");
        Ok(comment)
    }

    /// Removes a task from its integration and returns it.
    ///
    /// # Errors
    ///
    /// Returns [`TrackerError`] when the integration or task
    /// does not exist.
    #[instrument(skip(self), fields(integration_id = %integration_id, task_id = %task_id))]
    pub async fn delete_task(
        &self,
        integration_id: &IntegrationId,
        task_id: &TaskId,
    ) -> TrackerResult<Task> {
        let _guard = self.context.lock_writes().await;
        let mut integration = self.context.load(integration_id).await?;
        let removed = integration.remove_task(task_id, self.context.clock())?;
        self.context.repository().update(&integration).await?;

        tracing::info!("deleted task");
        Ok(removed)
    }
}
