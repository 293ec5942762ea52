//! Domain model for the Kanban board.
//!
//! Column adjacency is plain data ([`COLUMN_ORDER`]); relative moves step
//! through it without wrapping and explicit moves may target any column.

mod board;
mod column;
mod error;

pub use board::{BoardColumn, KanbanBoard, MoveTarget};
pub use column::{COLUMN_ORDER, MoveDirection, column_index, neighbour};
pub use error::{BoardDomainError, ParseMoveDirectionError};
