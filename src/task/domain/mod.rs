//! Domain model for tasks.
//!
//! A task is always owned by an integration; this module defines the task
//! entity, its comments and enumerations, and the patch type used for partial
//! updates. Ownership and identifier assignment live in
//! [`crate::integration::domain`].

mod comment;
mod error;
mod ids;
mod patch;
mod status;
mod story_points;
mod task;

pub use comment::Comment;
pub use error::{ParseTaskEnumError, TaskDomainError};
pub use ids::{CommentId, TaskId};
pub use patch::TaskPatch;
pub use status::{KanbanStatus, Priority, TaskStatus, TaskType};
pub use story_points::StoryPoints;
pub use task::{NewTask, Task};
