//! Shared world state for Kanban move BDD scenarios.

use integration_tracker::{
    config::TrackerConfig,
    error::TrackerError,
    integration::{adapters::memory::InMemoryIntegrationRepository, domain::IntegrationId},
    task::domain::{KanbanStatus, Task},
    tracker::Tracker,
};
use mockable::DefaultClock;
use rstest::fixture;

/// Tracker type used by the BDD world.
pub type TestTracker = Tracker<InMemoryIntegrationRepository, DefaultClock>;

/// Scenario world for Kanban move behaviour tests.
pub struct KanbanMoveWorld {
    pub tracker: TestTracker,
    pub integration_id: Option<IntegrationId>,
    pub task: Option<Task>,
    pub last_move_result: Option<Result<KanbanStatus, TrackerError>>,
}

impl KanbanMoveWorld {
    /// Creates a world over an empty in-memory tracker.
    #[must_use]
    pub fn new() -> Self {
        Self {
            tracker: Tracker::in_memory(TrackerConfig::default()),
            integration_id: None,
            task: None,
            last_move_result: None,
        }
    }

    /// Returns the integration and task under test.
    ///
    /// # Errors
    ///
    /// Returns an error when an earlier step did not create them.
    pub fn subject(&self) -> Result<(IntegrationId, Task), eyre::Report> {
        let integration_id = self
            .integration_id
            .clone()
            .ok_or_else(|| eyre::eyre!("missing integration in scenario world"))?;
        let task = self
            .task
            .clone()
            .ok_or_else(|| eyre::eyre!("missing task in scenario world"))?;
        Ok((integration_id, task))
    }
}

impl Default for KanbanMoveWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> KanbanMoveWorld {
    KanbanMoveWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
