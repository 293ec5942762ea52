//! Shared handle passed into every tracker service.

use crate::config::TrackerConfig;
use crate::error::{TrackerError, TrackerResult};
use crate::integration::domain::{Integration, IntegrationId};
use crate::integration::ports::{IntegrationRepository, IntegrationRepositoryError};
use mockable::Clock;
use std::sync::Arc;
use tokio::sync::{Mutex, MutexGuard};

/// Store, clock and configuration shared by the tracker services.
///
/// Mutating operations hold the write lock across their whole
/// read-modify-write cycle, so concurrent writes to the store are
/// serialised. Readers do not take the lock and rely on the repository
/// returning whole aggregates.
pub struct TrackerContext<R, C>
where
    R: IntegrationRepository,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    clock: Arc<C>,
    config: Arc<TrackerConfig>,
    write_lock: Arc<Mutex<()>>,
}

impl<R, C> Clone for TrackerContext<R, C>
where
    R: IntegrationRepository,
    C: Clock + Send + Sync,
{
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
            clock: Arc::clone(&self.clock),
            config: Arc::clone(&self.config),
            write_lock: Arc::clone(&self.write_lock),
        }
    }
}

impl<R, C> TrackerContext<R, C>
where
    R: IntegrationRepository,
    C: Clock + Send + Sync,
{
    /// Creates a context with the default configuration.
    #[must_use]
    pub fn new(repository: Arc<R>, clock: Arc<C>) -> Self {
        Self::with_config(repository, clock, TrackerConfig::default())
    }

    /// Creates a context with an explicit configuration.
    #[must_use]
    pub fn with_config(repository: Arc<R>, clock: Arc<C>, config: TrackerConfig) -> Self {
        Self {
            repository,
            clock,
            config: Arc::new(config),
            write_lock: Arc::new(Mutex::new(())),
        }
    }

    /// Returns the repository.
    #[must_use]
    pub fn repository(&self) -> &R {
        &self.repository
    }

    /// Returns the clock.
    #[must_use]
    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Returns the configuration.
    #[must_use]
    pub fn config(&self) -> &TrackerConfig {
        &self.config
    }

    /// Acquires the exclusive write lock.
    pub(crate) async fn lock_writes(&self) -> MutexGuard<'_, ()> {
        self.write_lock.lock().await
    }

    /// Loads an integration, failing when it does not exist.
    pub(crate) async fn load(&self, id: &IntegrationId) -> TrackerResult<Integration> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| TrackerError::Repository(IntegrationRepositoryError::NotFound(id.clone())))
    }
}
