//! Service-level error type and its coarse classification.

use crate::board::domain::{BoardDomainError, ParseMoveDirectionError};
use crate::integration::domain::{IntegrationDomainError, ParseWorkflowStageError};
use crate::integration::ports::IntegrationRepositoryError;
use crate::task::domain::{ParseTaskEnumError, TaskDomainError};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Coarse failure category, for callers that map errors to responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// Malformed or out-of-range input.
    Validation,
    /// A referenced integration or task does not exist.
    NotFound,
    /// An entity with the same identifier already exists.
    Conflict,
    /// A relative move would pass the first or last column.
    Boundary,
    /// The store failed.
    Persistence,
}

/// Errors returned by the tracker services.
#[derive(Debug, Error)]
pub enum TrackerError {
    /// Task validation failed.
    #[error(transparent)]
    Task(#[from] TaskDomainError),
    /// Integration validation failed or a task was not found in it.
    #[error(transparent)]
    Integration(#[from] IntegrationDomainError),
    /// A board move was rejected.
    #[error(transparent)]
    Board(#[from] BoardDomainError),
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] IntegrationRepositoryError),
}

/// Result type for tracker service operations.
pub type TrackerResult<T> = Result<T, TrackerError>;

impl TrackerError {
    /// Classifies the error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Task(_) => ErrorKind::Validation,
            Self::Integration(IntegrationDomainError::TaskNotFound { .. }) => ErrorKind::NotFound,
            Self::Integration(_) => ErrorKind::Validation,
            Self::Board(BoardDomainError::Boundary { .. }) => ErrorKind::Boundary,
            Self::Repository(IntegrationRepositoryError::NotFound(_)) => ErrorKind::NotFound,
            Self::Repository(IntegrationRepositoryError::DuplicateIntegration(_)) => {
                ErrorKind::Conflict
            }
            Self::Repository(IntegrationRepositoryError::Persistence(_)) => ErrorKind::Persistence,
        }
    }
}

impl From<ParseTaskEnumError> for TrackerError {
    fn from(err: ParseTaskEnumError) -> Self {
        Self::Task(TaskDomainError::UnknownValue(err))
    }
}

impl From<ParseWorkflowStageError> for TrackerError {
    fn from(err: ParseWorkflowStageError) -> Self {
        Self::Task(TaskDomainError::UnknownValue(ParseTaskEnumError {
            field: "workflow stage",
            value: err.0,
        }))
    }
}

impl From<ParseMoveDirectionError> for TrackerError {
    fn from(err: ParseMoveDirectionError) -> Self {
        Self::Task(TaskDomainError::UnknownValue(ParseTaskEnumError {
            field: "move direction",
            value: err.0,
        }))
    }
}
