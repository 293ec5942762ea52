//! Repository port for integration persistence.
//!
//! Integrations are the unit of storage: tasks, contacts and comments travel
//! inside their owning aggregate, so the store never holds a task without its
//! integration.

use crate::integration::domain::{Integration, IntegrationFilter, IntegrationId};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for integration repository operations.
pub type IntegrationRepositoryResult<T> = Result<T, IntegrationRepositoryError>;

/// Integration persistence contract.
///
/// Every operation is atomic at the granularity of one integration.
#[async_trait]
pub trait IntegrationRepository: Send + Sync {
    /// Stores a new integration.
    ///
    /// # Errors
    ///
    /// Returns [`IntegrationRepositoryError::DuplicateIntegration`] when the
    /// identifier is already taken.
    async fn store(&self, integration: &Integration) -> IntegrationRepositoryResult<()>;

    /// Replaces an existing integration with its updated state.
    ///
    /// # Errors
    ///
    /// Returns [`IntegrationRepositoryError::NotFound`] when the integration
    /// does not exist.
    async fn update(&self, integration: &Integration) -> IntegrationRepositoryResult<()>;

    /// Finds an integration by identifier.
    ///
    /// Returns `None` when the integration does not exist.
    async fn find_by_id(
        &self,
        id: &IntegrationId,
    ) -> IntegrationRepositoryResult<Option<Integration>>;

    /// Returns the integrations matching `filter` in insertion order.
    ///
    /// The result is a snapshot taken under a single read of the store.
    async fn list(&self, filter: &IntegrationFilter) -> IntegrationRepositoryResult<Vec<Integration>>;

    /// Deletes an integration together with everything it owns.
    ///
    /// # Errors
    ///
    /// Returns [`IntegrationRepositoryError::NotFound`] when the integration
    /// does not exist.
    async fn delete(&self, id: &IntegrationId) -> IntegrationRepositoryResult<()>;
}

/// Errors returned by integration repository implementations.
#[derive(Debug, Clone, Error)]
pub enum IntegrationRepositoryError {
    /// An integration with the same identifier already exists.
    #[error("duplicate integration identifier: {0}")]
    DuplicateIntegration(IntegrationId),

    /// The integration was not found.
    #[error("integration not found: {0}")]
    NotFound(IntegrationId),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl IntegrationRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
