//! Facade bundling every tracker service over one shared context.

use crate::analytics::services::AnalyticsService;
use crate::board::services::KanbanBoardService;
use crate::config::TrackerConfig;
use crate::context::TrackerContext;
use crate::integration::adapters::memory::InMemoryIntegrationRepository;
use crate::integration::ports::IntegrationRepository;
use crate::integration::services::IntegrationCatalogService;
use crate::task::services::TaskLifecycleService;
use mockable::{Clock, DefaultClock};
use std::sync::Arc;

/// Entry point owning one instance of each service.
///
/// All services share the same store, clock, configuration and write lock.
///
/// # Examples
///
/// ```
/// use integration_tracker::config::TrackerConfig;
/// use integration_tracker::tracker::Tracker;
///
/// let tracker = Tracker::in_memory(TrackerConfig::default());
/// assert_eq!(tracker.context().config().recent_updates_limit, 5);
/// ```
pub struct Tracker<R, C>
where
    R: IntegrationRepository,
    C: Clock + Send + Sync,
{
    context: TrackerContext<R, C>,
    integrations: IntegrationCatalogService<R, C>,
    tasks: TaskLifecycleService<R, C>,
    board: KanbanBoardService<R, C>,
    analytics: AnalyticsService<R, C>,
}

impl<R, C> Tracker<R, C>
where
    R: IntegrationRepository,
    C: Clock + Send + Sync,
{
    /// Builds every service over `context`.
    #[must_use]
    pub fn new(context: TrackerContext<R, C>) -> Self {
        Self {
            integrations: IntegrationCatalogService::new(context.clone()),
            tasks: TaskLifecycleService::new(context.clone()),
            board: KanbanBoardService::new(context.clone()),
            analytics: AnalyticsService::new(context.clone()),
            context,
        }
    }

    /// Returns the shared context.
    #[must_use]
    pub const fn context(&self) -> &TrackerContext<R, C> {
        &self.context
    }

    /// Returns the integration catalogue service.
    #[must_use]
    pub const fn integrations(&self) -> &IntegrationCatalogService<R, C> {
        &self.integrations
    }

    /// Returns the task lifecycle service.
    #[must_use]
    pub const fn tasks(&self) -> &TaskLifecycleService<R, C> {
        &self.tasks
    }

    /// Returns the board service.
    #[must_use]
    pub const fn board(&self) -> &KanbanBoardService<R, C> {
        &self.board
    }

    /// Returns the analytics service.
    #[must_use]
    pub const fn analytics(&self) -> &AnalyticsService<R, C> {
        &self.analytics
    }
}

impl Tracker<InMemoryIntegrationRepository, DefaultClock> {
    /// Creates a tracker over a fresh in-memory store and the system clock.
    #[must_use]
    pub fn in_memory(config: TrackerConfig) -> Self {
        Self::new(TrackerContext::with_config(
            Arc::new(InMemoryIntegrationRepository::new()),
            Arc::new(DefaultClock),
            config,
        ))
    }
}
