//! Port contracts for integration storage.
//!
//! Ports define infrastructure-agnostic interfaces used by the tracker
//! services.

pub mod repository;

pub use repository::{
    IntegrationRepository, IntegrationRepositoryError, IntegrationRepositoryResult,
};
