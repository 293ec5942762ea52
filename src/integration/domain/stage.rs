//! Workflow stages an integration passes through.

use super::ParseWorkflowStageError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Delivery stage of an integration, ordered from first to last.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum WorkflowStage {
    /// Gathering requirements.
    #[default]
    Research,
    /// Implementation.
    Build,
    /// Verification with the partner.
    Testing,
    /// Going live.
    Launch,
    /// Live and supported.
    Maintenance,
}

impl WorkflowStage {
    /// Every stage in workflow order.
    pub const ALL: [Self; 5] = [
        Self::Research,
        Self::Build,
        Self::Testing,
        Self::Launch,
        Self::Maintenance,
    ];

    /// Returns the canonical text representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Research => "research",
            Self::Build => "build",
            Self::Testing => "testing",
            Self::Launch => "launch",
            Self::Maintenance => "maintenance",
        }
    }

    /// Whether moving to `target` goes backwards in the workflow.
    #[must_use]
    pub fn is_regression_to(self, target: Self) -> bool {
        target < self
    }
}

impl TryFrom<&str> for WorkflowStage {
    type Error = ParseWorkflowStageError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim().to_ascii_lowercase().as_str() {
            "research" => Ok(Self::Research),
            "build" => Ok(Self::Build),
            "testing" => Ok(Self::Testing),
            "launch" => Ok(Self::Launch),
            "maintenance" => Ok(Self::Maintenance),
            _ => Err(ParseWorkflowStageError(value.to_owned())),
        }
    }
}

impl fmt::Display for WorkflowStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
