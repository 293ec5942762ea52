//! Fixed column order and adjacency for relative moves.

use super::ParseMoveDirectionError;
use crate::task::domain::KanbanStatus;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Board columns in their fixed left-to-right order.
///
/// `blocked` sits last, so it is the right-hand neighbour of `done`; any
/// column can still reach it through an explicit move.
pub const COLUMN_ORDER: [KanbanStatus; 7] = [
    KanbanStatus::Backlog,
    KanbanStatus::Todo,
    KanbanStatus::InProgress,
    KanbanStatus::InReview,
    KanbanStatus::Testing,
    KanbanStatus::Done,
    KanbanStatus::Blocked,
];

/// Direction of a relative move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MoveDirection {
    /// Towards `backlog`.
    Left,
    /// Towards `blocked`.
    Right,
}

impl MoveDirection {
    /// Returns the canonical text representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Right => "right",
        }
    }
}

impl TryFrom<&str> for MoveDirection {
    type Error = ParseMoveDirectionError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim().to_ascii_lowercase().as_str() {
            "left" => Ok(Self::Left),
            "right" => Ok(Self::Right),
            _ => Err(ParseMoveDirectionError(value.to_owned())),
        }
    }
}

impl fmt::Display for MoveDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returns the position of `status` in [`COLUMN_ORDER`].
#[must_use]
pub fn column_index(status: KanbanStatus) -> usize {
    COLUMN_ORDER
        .iter()
        .position(|column| *column == status)
        .unwrap_or_default()
}

/// Returns the column adjacent to `status` in `direction`, or `None` at the
/// edge of the board. Never wraps.
#[must_use]
pub fn neighbour(status: KanbanStatus, direction: MoveDirection) -> Option<KanbanStatus> {
    let index = column_index(status);
    let target = match direction {
        MoveDirection::Left => index.checked_sub(1)?,
        MoveDirection::Right => index.checked_add(1)?,
    };
    COLUMN_ORDER.get(target).copied()
}
