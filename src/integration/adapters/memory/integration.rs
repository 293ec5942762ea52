//! In-memory integration repository.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::integration::{
    domain::{Integration, IntegrationFilter, IntegrationId},
    ports::{IntegrationRepository, IntegrationRepositoryError, IntegrationRepositoryResult},
};

/// Thread-safe in-memory integration repository.
///
/// Cloning shares the underlying state, so clones observe each other's
/// writes. State lives for as long as any clone does.
#[derive(Debug, Clone, Default)]
pub struct InMemoryIntegrationRepository {
    state: Arc<RwLock<InMemoryIntegrationState>>,
}

#[derive(Debug, Default)]
struct InMemoryIntegrationState {
    integrations: HashMap<IntegrationId, Integration>,
    insertion_order: Vec<IntegrationId>,
}

impl InMemoryIntegrationRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> IntegrationRepositoryResult<RwLockReadGuard<'_, InMemoryIntegrationState>> {
        self.state.read().map_err(|err| {
            IntegrationRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })
    }

    fn write(
        &self,
    ) -> IntegrationRepositoryResult<RwLockWriteGuard<'_, InMemoryIntegrationState>> {
        self.state.write().map_err(|err| {
            IntegrationRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })
    }
}

#[async_trait]
impl IntegrationRepository for InMemoryIntegrationRepository {
    async fn store(&self, integration: &Integration) -> IntegrationRepositoryResult<()> {
        let mut state = self.write()?;
        let id = integration.id().clone();
        if state.integrations.contains_key(&id) {
            return Err(IntegrationRepositoryError::DuplicateIntegration(id));
        }

        state.insertion_order.push(id.clone());
        state.integrations.insert(id, integration.clone());
        tracing::debug!(integration_id = %integration.id(), "stored integration");
        Ok(())
    }

    async fn update(&self, integration: &Integration) -> IntegrationRepositoryResult<()> {
        let mut state = self.write()?;
        let slot = state
            .integrations
            .get_mut(integration.id())
            .ok_or_else(|| IntegrationRepositoryError::NotFound(integration.id().clone()))?;
        *slot = integration.clone();
        tracing::debug!(integration_id = %integration.id(), "updated integration");
        Ok(())
    }

    async fn find_by_id(
        &self,
        id: &IntegrationId,
    ) -> IntegrationRepositoryResult<Option<Integration>> {
        let state = self.read()?;
        Ok(state.integrations.get(id).cloned())
    }

    async fn list(&self, filter: &IntegrationFilter) -> IntegrationRepositoryResult<Vec<Integration>> {
        let state = self.read()?;
        let integrations = state
            .insertion_order
            .iter()
            .filter_map(|id| state.integrations.get(id))
            .filter(|integration| filter.matches(integration))
            .cloned()
            .collect();
        Ok(integrations)
    }

    async fn delete(&self, id: &IntegrationId) -> IntegrationRepositoryResult<()> {
        let mut state = self.write()?;
        if state.integrations.remove(id).is_none() {
            return Err(IntegrationRepositoryError::NotFound(id.clone()));
        }
        state.insertion_order.retain(|candidate| candidate != id);
        tracing::debug!(integration_id = %id, "deleted integration");
        Ok(())
    }
}
