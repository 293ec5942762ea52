//! Service layer for creating, reading, updating and deleting integrations.

use crate::context::TrackerContext;
use crate::error::TrackerResult;
use crate::integration::{
    domain::{
        Contact, Integration, IntegrationFilter, IntegrationId, IntegrationPatch,
        IntegrationProgress, NewIntegration, WorkflowStage,
    },
    ports::IntegrationRepository,
};
use mockable::Clock;
use std::collections::BTreeMap;
use tracing::instrument;

/// Request payload for creating an integration.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateIntegrationRequest {
    id: Option<String>,
    name: String,
    company: String,
    description: String,
    stage: WorkflowStage,
    contacts: Vec<Contact>,
    next_steps: Vec<String>,
    blockers: Vec<String>,
    current_sprint: Option<String>,
    metadata: BTreeMap<String, serde_json::Value>,
}

impl CreateIntegrationRequest {
    /// Creates a request with the required fields. Without an explicit
    /// identifier, one is derived from `name`.
    #[must_use]
    pub fn new(name: impl Into<String>, company: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
            company: company.into(),
            description: String::new(),
            stage: WorkflowStage::default(),
            contacts: Vec::new(),
            next_steps: Vec::new(),
            blockers: Vec::new(),
            current_sprint: None,
            metadata: BTreeMap::new(),
        }
    }

    /// Uses an explicit identifier instead of the name-derived slug.
    #[must_use]
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Sets the initial workflow stage.
    #[must_use]
    pub const fn with_stage(mut self, stage: WorkflowStage) -> Self {
        self.stage = stage;
        self
    }

    /// Sets the partner contacts.
    #[must_use]
    pub fn with_contacts(mut self, contacts: impl IntoIterator<Item = Contact>) -> Self {
        self.contacts = contacts.into_iter().collect();
        self
    }

    /// Sets the planned next steps.
    #[must_use]
    pub fn with_next_steps(mut self, steps: impl IntoIterator<Item = String>) -> Self {
        self.next_steps = steps.into_iter().collect();
        self
    }

    /// Sets the known blockers.
    #[must_use]
    pub fn with_blockers(mut self, blockers: impl IntoIterator<Item = String>) -> Self {
        self.blockers = blockers.into_iter().collect();
        self
    }

    /// Sets the current sprint label.
    #[must_use]
    pub fn with_current_sprint(mut self, sprint: impl Into<String>) -> Self {
        self.current_sprint = Some(sprint.into());
        self
    }

    /// Sets the free-form metadata.
    #[must_use]
    pub fn with_metadata(mut self, metadata: BTreeMap<String, serde_json::Value>) -> Self {
        self.metadata = metadata;
        self
    }

    fn into_draft(self) -> TrackerResult<NewIntegration> {
        let id = match self.id {
            Some(explicit) => IntegrationId::new(explicit)?,
            None => IntegrationId::from_name(&self.name)?,
        };
        Ok(NewIntegration {
            id,
            name: self.name,
            company: self.company,
            description: self.description,
            stage: self.stage,
            contacts: self.contacts,
            next_steps: self.next_steps,
            blockers: self.blockers,
            current_sprint: self.current_sprint,
            metadata: self.metadata,
        })
    }
}

/// Request payload for changing an integration's workflow stage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateStageRequest {
    integration_id: IntegrationId,
    stage: WorkflowStage,
    allow_regression: bool,
}

impl UpdateStageRequest {
    /// Creates a forward-only stage change request.
    #[must_use]
    pub const fn new(integration_id: IntegrationId, stage: WorkflowStage) -> Self {
        Self {
            integration_id,
            stage,
            allow_regression: false,
        }
    }

    /// Permits moving to an earlier stage.
    #[must_use]
    pub const fn allow_regression(mut self) -> Self {
        self.allow_regression = true;
        self
    }
}

/// Integration catalogue orchestration service.
#[derive(Clone)]
pub struct IntegrationCatalogService<R, C>
where
    R: IntegrationRepository,
    C: Clock + Send + Sync,
{
    context: TrackerContext<R, C>,
}

impl<R, C> IntegrationCatalogService<R, C>
where
    R: IntegrationRepository,
    C: Clock + Send + Sync,
{
    /// Creates a new integration catalogue service.
    #[must_use]
    pub const fn new(context: TrackerContext<R, C>) -> Self {
        Self { context }
    }

    /// Creates and stores an integration.
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::TrackerError`] when validation fails or the
    /// identifier is already taken.
    #[instrument(skip(self, request), fields(name = %request.name))]
    pub async fn create_integration(
        &self,
        request: CreateIntegrationRequest,
    ) -> TrackerResult<Integration> {
        let integration = Integration::new(request.into_draft()?, self.context.clock())?;

        let _guard = self.context.lock_writes().await;
        self.context.repository().store(&integration).await?;

        tracing::info!(integration_id = %integration.id(), stage = %integration.stage(), "created integration");
        Ok(integration)
    }

    /// Returns one integration with its tasks.
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::TrackerError`] when the integration does not
    /// exist.
    #[instrument(skip(self), fields(integration_id = %id))]
    pub async fn get_integration(&self, id: &IntegrationId) -> TrackerResult<Integration> {
        self.context.load(id).await
    }

    /// Lists integrations matching `filter` in creation order.
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::TrackerError`] when the repository fails.
    #[instrument(skip(self, filter))]
    pub async fn list_integrations(
        &self,
        filter: &IntegrationFilter,
    ) -> TrackerResult<Vec<Integration>> {
        Ok(self.context.repository().list(filter).await?)
    }

    /// Applies a partial update to an integration's descriptive fields.
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::TrackerError`] when the integration does not
    /// exist or the patch fails validation.
    #[instrument(skip(self, patch), fields(integration_id = %id))]
    pub async fn update_integration(
        &self,
        id: &IntegrationId,
        patch: IntegrationPatch,
    ) -> TrackerResult<Integration> {
        let _guard = self.context.lock_writes().await;
        let mut integration = self.context.load(id).await?;
        integration.apply_patch(patch, self.context.clock())?;
        self.context.repository().update(&integration).await?;

        tracing::info!("updated integration");
        Ok(integration)
    }

    /// Moves an integration to another workflow stage.
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::TrackerError`] when the integration does not
    /// exist or the change is a regression that was not allowed.
    #[instrument(skip(self, request), fields(integration_id = %request.integration_id, stage = %request.stage))]
    pub async fn update_stage(&self, request: UpdateStageRequest) -> TrackerResult<Integration> {
        let UpdateStageRequest {
            integration_id,
            stage,
            allow_regression,
        } = request;
        let _guard = self.context.lock_writes().await;
        let mut integration = self.context.load(&integration_id).await?;
        let previous = integration.stage();
        integration.change_stage(stage, allow_regression, self.context.clock())?;
        self.context.repository().update(&integration).await?;

        tracing::info!(from = %previous, to = %stage, "changed integration stage");
        Ok(integration)
    }

    /// Appends a contact to an integration.
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::TrackerError`] when the integration does not
    /// exist.
    #[instrument(skip(self, contact), fields(integration_id = %id))]
    pub async fn add_contact(
        &self,
        id: &IntegrationId,
        contact: Contact,
    ) -> TrackerResult<Integration> {
        let _guard = self.context.lock_writes().await;
        let mut integration = self.context.load(id).await?;
        integration.add_contact(contact, self.context.clock());
        self.context.repository().update(&integration).await?;

        tracing::info!(contacts = integration.contacts().len(), "added contact");
        Ok(integration)
    }

    /// Deletes an integration together with all of its tasks.
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::TrackerError`] when the integration does not
    /// exist.
    #[instrument(skip(self), fields(integration_id = %id))]
    pub async fn delete_integration(&self, id: &IntegrationId) -> TrackerResult<()> {
        let _guard = self.context.lock_writes().await;
        self.context.repository().delete(id).await?;

        tracing::info!("deleted integration");
        Ok(())
    }

    /// Computes task progress for one integration.
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::TrackerError`] when the integration does not
    /// exist.
    #[instrument(skip(self), fields(integration_id = %id))]
    pub async fn progress(&self, id: &IntegrationId) -> TrackerResult<IntegrationProgress> {
        Ok(self.context.load(id).await?.progress())
    }
}
