//! Board view and move resolution.

use super::{BoardDomainError, COLUMN_ORDER, MoveDirection, neighbour};
use crate::integration::domain::{Integration, IntegrationId};
use crate::task::domain::{KanbanStatus, Task};
use serde::{Deserialize, Serialize};

/// Requested destination of a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum MoveTarget {
    /// One column left or right of the current one.
    Relative(MoveDirection),
    /// A specific column, reachable from any other.
    Explicit(KanbanStatus),
}

impl MoveTarget {
    /// Resolves the destination column for `task`.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::Boundary`] when a relative move would pass
    /// the first or last column.
    pub fn resolve(self, task: &Task) -> Result<KanbanStatus, BoardDomainError> {
        match self {
            Self::Explicit(status) => Ok(status),
            Self::Relative(direction) => neighbour(task.kanban_status(), direction).ok_or_else(
                || BoardDomainError::Boundary {
                    task_id: task.id().clone(),
                    status: task.kanban_status(),
                    direction,
                },
            ),
        }
    }
}

/// One board column with its tasks in creation order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardColumn {
    /// Column identity.
    pub status: KanbanStatus,
    /// Tasks currently in the column.
    pub tasks: Vec<Task>,
}

/// Kanban view of one integration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KanbanBoard {
    /// Integration shown.
    pub integration_id: IntegrationId,
    /// Integration display name.
    pub integration_name: String,
    /// Sprint filter applied, if any.
    pub sprint: Option<String>,
    /// All seven columns in board order.
    pub columns: Vec<BoardColumn>,
    /// Number of tasks on the board.
    pub total_tasks: usize,
    /// Sum of story points on the board.
    pub total_story_points: u64,
}

impl KanbanBoard {
    /// Builds the board for `integration`, keeping only tasks whose sprint
    /// equals `sprint` exactly when a filter is given.
    #[must_use]
    pub fn build(integration: &Integration, sprint: Option<&str>) -> Self {
        let visible: Vec<&Task> = integration
            .tasks()
            .iter()
            .filter(|task| sprint.is_none_or(|label| task.sprint() == Some(label)))
            .collect();

        let columns = COLUMN_ORDER
            .iter()
            .map(|status| BoardColumn {
                status: *status,
                tasks: visible
                    .iter()
                    .filter(|task| task.kanban_status() == *status)
                    .map(|task| (*task).clone())
                    .collect(),
            })
            .collect();

        Self {
            integration_id: integration.id().clone(),
            integration_name: integration.name().to_owned(),
            sprint: sprint.map(str::to_owned),
            columns,
            total_tasks: visible.len(),
            total_story_points: visible
                .iter()
                .map(|task| u64::from(task.story_points()))
                .sum(),
        }
    }

    /// Returns the column for `status`.
    #[must_use]
    pub fn column(&self, status: KanbanStatus) -> Option<&BoardColumn> {
        self.columns.iter().find(|column| column.status == status)
    }
}
