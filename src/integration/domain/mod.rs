//! Domain model for integrations.
//!
//! An [`Integration`] is the aggregate root of the tracker: it owns its
//! contacts and tasks, assigns task identifiers from a per-integration
//! sequence, and is persisted and deleted as a unit.

mod contact;
mod error;
mod filter;
mod ids;
mod integration;
mod patch;
mod progress;
mod stage;

pub use contact::Contact;
pub use error::{IntegrationDomainError, ParseWorkflowStageError};
pub use filter::IntegrationFilter;
pub use ids::IntegrationId;
pub use integration::{Integration, NewIntegration};
pub use patch::IntegrationPatch;
pub use progress::IntegrationProgress;
pub use stage::WorkflowStage;
