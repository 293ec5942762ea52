//! Application services for the Kanban board.

mod engine;

pub use engine::{KanbanBoardService, MoveTaskRequest};
