//! Error types for integration domain validation and parsing.

use super::{IntegrationId, WorkflowStage};
use crate::task::domain::{TaskDomainError, TaskId};
use thiserror::Error;

/// Errors returned while constructing or mutating integrations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum IntegrationDomainError {
    /// The integration identifier is blank.
    #[error("integration identifier must not be empty")]
    EmptyIntegrationId,

    /// The integration identifier contains whitespace.
    #[error("invalid integration identifier '{0}', whitespace is not allowed")]
    InvalidIntegrationId(String),

    /// The integration name is blank.
    #[error("integration name must not be empty")]
    EmptyName,

    /// The company name is blank.
    #[error("integration company must not be empty")]
    EmptyCompany,

    /// The contact name is blank.
    #[error("contact name must not be empty")]
    EmptyContactName,

    /// The contact email is not of the form `local@domain`.
    #[error("invalid contact email '{0}'")]
    InvalidContactEmail(String),

    /// A stage change would move the integration backwards.
    #[error("stage regression from {from} to {to} requires an explicit override")]
    StageRegression {
        /// Current stage.
        from: WorkflowStage,
        /// Requested stage.
        to: WorkflowStage,
    },

    /// The task does not belong to the integration.
    #[error("task {task_id} not found in integration {integration_id}")]
    TaskNotFound {
        /// Integration searched.
        integration_id: IntegrationId,
        /// Missing task.
        task_id: TaskId,
    },

    /// The integration has issued every representable task sequence number.
    #[error("integration {0} has exhausted its task sequence")]
    TaskSequenceExhausted(IntegrationId),

    /// A task-level rule was violated.
    #[error(transparent)]
    Task(#[from] TaskDomainError),
}

/// Error returned while parsing workflow stages from text.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown workflow stage: {0}")]
pub struct ParseWorkflowStageError(pub String);
