//! Error types for board moves.

use super::MoveDirection;
use crate::task::domain::{KanbanStatus, TaskId};
use thiserror::Error;

/// Errors returned while moving tasks across the board.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BoardDomainError {
    /// A relative move would leave the board.
    #[error("cannot move task {task_id} {direction} from {status}: already at the board edge")]
    Boundary {
        /// Task that was not moved.
        task_id: TaskId,
        /// Column the task remains in.
        status: KanbanStatus,
        /// Requested direction.
        direction: MoveDirection,
    },
}

/// Error returned while parsing a move direction from text.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown move direction: {0}")]
pub struct ParseMoveDirectionError(pub String);
