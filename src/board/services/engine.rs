//! Kanban board reads and task moves.

use crate::board::domain::{KanbanBoard, MoveDirection, MoveTarget};
use crate::context::TrackerContext;
use crate::error::{TrackerError, TrackerResult};
use crate::integration::{domain::IntegrationId, ports::IntegrationRepository};
use crate::task::domain::{KanbanStatus, TaskId};
use mockable::Clock;
use tracing::instrument;

#[derive(Debug, Clone, PartialEq, Eq)]
enum RequestedMove {
    Target(MoveTarget),
    ColumnText(String),
    DirectionText(String),
}

/// Request payload for moving a task on its integration's board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveTaskRequest {
    integration_id: IntegrationId,
    task_id: TaskId,
    requested: RequestedMove,
}

impl MoveTaskRequest {
    /// Creates a request for an already-typed target.
    #[must_use]
    pub const fn new(integration_id: IntegrationId, task_id: TaskId, target: MoveTarget) -> Self {
        Self {
            integration_id,
            task_id,
            requested: RequestedMove::Target(target),
        }
    }

    /// Creates a request for a one-column step.
    #[must_use]
    pub const fn step(
        integration_id: IntegrationId,
        task_id: TaskId,
        direction: MoveDirection,
    ) -> Self {
        Self::new(integration_id, task_id, MoveTarget::Relative(direction))
    }

    /// Creates a request for a one-column step named in text, `left` or
    /// `right`.
    #[must_use]
    pub fn step_named(
        integration_id: IntegrationId,
        task_id: TaskId,
        direction: impl Into<String>,
    ) -> Self {
        Self {
            integration_id,
            task_id,
            requested: RequestedMove::DirectionText(direction.into()),
        }
    }

    /// Creates a request for an explicit column named in text, e.g.
    /// `in_review`.
    #[must_use]
    pub fn to_column(
        integration_id: IntegrationId,
        task_id: TaskId,
        column: impl Into<String>,
    ) -> Self {
        Self {
            integration_id,
            task_id,
            requested: RequestedMove::ColumnText(column.into()),
        }
    }

    /// Returns the integration holding the task.
    #[must_use]
    pub const fn integration_id(&self) -> &IntegrationId {
        &self.integration_id
    }

    /// Returns the task to move.
    #[must_use]
    pub const fn task_id(&self) -> &TaskId {
        &self.task_id
    }

    fn into_parts(self) -> TrackerResult<(IntegrationId, TaskId, MoveTarget)> {
        let target = match self.requested {
            RequestedMove::Target(target) => target,
            RequestedMove::ColumnText(text) => {
                MoveTarget::Explicit(KanbanStatus::try_from(text.as_str())?)
            }
            RequestedMove::DirectionText(text) => {
                MoveTarget::Relative(MoveDirection::try_from(text.as_str())?)
            }
        };
        Ok((self.integration_id, self.task_id, target))
    }
}

/// Board view and move orchestration service.
#[derive(Clone)]
pub struct KanbanBoardService<R, C>
where
    R: IntegrationRepository,
    C: Clock + Send + Sync,
{
    context: TrackerContext<R, C>,
}

impl<R, C> KanbanBoardService<R, C>
where
    R: IntegrationRepository,
    C: Clock + Send + Sync,
{
    /// Creates a new board service.
    #[must_use]
    pub const fn new(context: TrackerContext<R, C>) -> Self {
        Self { context }
    }

    /// Returns the board for an integration, optionally limited to one
    /// sprint.
    ///
    /// # Errors
    ///
    /// Returns [`TrackerError`] when the integration does not exist.
    #[instrument(skip(self), fields(integration_id = %integration_id))]
    pub async fn get_board(
        &self,
        integration_id: &IntegrationId,
        sprint: Option<&str>,
    ) -> TrackerResult<KanbanBoard> {
        let integration = self.context.load(integration_id).await?;
        Ok(KanbanBoard::build(&integration, sprint))
    }

    /// Moves a task and returns its new column.
    ///
    /// A rejected move changes nothing, including timestamps.
    ///
    /// # Errors
    ///
    /// Returns [`TrackerError`] when the target text is unknown, the
    /// integration or task does not exist, or a relative move would pass the
    /// edge of the board.
    #[instrument(
        skip(self, request),
        fields(integration_id = %request.integration_id, task_id = %request.task_id)
    )]
    pub async fn move_task(&self, request: MoveTaskRequest) -> TrackerResult<KanbanStatus> {
        let (integration_id, task_id, target) = request.into_parts()?;
        let sync_status = self.context.config().sync_status_on_move;
        let clock = self.context.clock();

        let _guard = self.context.lock_writes().await;
        let mut integration = self.context.load(&integration_id).await?;
        let (from, to) = integration.modify_task(&task_id, clock, |task| {
            let current = task.kanban_status();
            let destination = target.resolve(task)?;
            task.set_kanban_status(destination, clock);
            if sync_status {
                task.set_status(destination.implied_status(), clock);
            }
            Ok::<_, TrackerError>((current, destination))
        })?;
        self.context.repository().update(&integration).await?;

        tracing::info!(%from, %to, "moved task");
        Ok(to)
    }
}
