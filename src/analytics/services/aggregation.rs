//! Service layer for dashboard, sprint and recommendation reads.

use crate::analytics::domain::{Dashboard, RecommendedActions, SprintReport, sprint_report};
use crate::context::TrackerContext;
use crate::error::TrackerResult;
use crate::integration::{
    domain::{IntegrationFilter, IntegrationId},
    ports::IntegrationRepository,
};
use mockable::Clock;
use tracing::instrument;

/// Aggregation service computing reports on read.
#[derive(Clone)]
pub struct AnalyticsService<R, C>
where
    R: IntegrationRepository,
    C: Clock + Send + Sync,
{
    context: TrackerContext<R, C>,
}

impl<R, C> AnalyticsService<R, C>
where
    R: IntegrationRepository,
    C: Clock + Send + Sync,
{
    /// Creates a new analytics service.
    #[must_use]
    pub const fn new(context: TrackerContext<R, C>) -> Self {
        Self { context }
    }

    /// Computes the portfolio dashboard from one snapshot of the store.
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::TrackerError`] when the repository fails.
    #[instrument(skip(self))]
    pub async fn dashboard(&self) -> TrackerResult<Dashboard> {
        let snapshot = self.context.repository().list(&IntegrationFilter::new()).await?;
        let dashboard = Dashboard::compute(
            &snapshot,
            self.context.clock().utc(),
            self.context.config().recent_updates_limit,
        );

        tracing::debug!(
            integrations = dashboard.total_integrations,
            tasks = dashboard.total_tasks,
            "computed dashboard"
        );
        Ok(dashboard)
    }

    /// Summarises every sprint label seen across all tasks.
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::TrackerError`] when the repository fails.
    #[instrument(skip(self))]
    pub async fn sprint_report(&self) -> TrackerResult<SprintReport> {
        let snapshot = self.context.repository().list(&IntegrationFilter::new()).await?;
        Ok(sprint_report(&snapshot))
    }

    /// Generates recommended actions for one integration.
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::TrackerError`] when the integration does not
    /// exist.
    #[instrument(skip(self), fields(integration_id = %integration_id))]
    pub async fn recommended_actions(
        &self,
        integration_id: &IntegrationId,
    ) -> TrackerResult<RecommendedActions> {
        let integration = self.context.load(integration_id).await?;
        Ok(RecommendedActions::for_integration(
            &integration,
            self.context.clock().utc(),
        ))
    }
}
