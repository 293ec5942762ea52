//! Validated story point estimates.

use super::TaskDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Effort estimate attached to a task, always within `0..=20`.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(try_from = "i64", into = "u8")]
pub struct StoryPoints(u8);

impl StoryPoints {
    /// Largest accepted estimate.
    pub const MAX: u8 = 20;

    /// Creates a validated estimate.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::StoryPointsOutOfRange`] for negative values
    /// or values above [`Self::MAX`].
    pub fn new(value: i64) -> Result<Self, TaskDomainError> {
        u8::try_from(value)
            .ok()
            .filter(|points| *points <= Self::MAX)
            .map(Self)
            .ok_or(TaskDomainError::StoryPointsOutOfRange(value))
    }

    /// Returns the estimate.
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }
}

impl TryFrom<i64> for StoryPoints {
    type Error = TaskDomainError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<StoryPoints> for u8 {
    fn from(points: StoryPoints) -> Self {
        points.0
    }
}

impl From<StoryPoints> for u64 {
    fn from(points: StoryPoints) -> Self {
        Self::from(points.0)
    }
}

impl fmt::Display for StoryPoints {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
