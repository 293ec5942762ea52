//! Shared fixtures for in-memory tracker integration tests.

use chrono::{DateTime, Duration, Local, TimeZone, Utc};
use integration_tracker::{
    config::TrackerConfig,
    context::TrackerContext,
    integration::{
        adapters::memory::InMemoryIntegrationRepository, domain::IntegrationId,
        services::CreateIntegrationRequest,
    },
    task::{domain::Task, services::CreateTaskRequest},
    tracker::Tracker,
};
use mockable::Clock;
use rstest::fixture;
use std::sync::Arc;
use std::sync::atomic::{AtomicI64, Ordering};

/// Clock that advances by one second every time it is read.
#[derive(Debug, Default)]
pub struct SteppingClock {
    ticks: AtomicI64,
}

impl Clock for SteppingClock {
    fn local(&self) -> DateTime<Local> {
        self.utc().with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        let tick = self.ticks.fetch_add(1, Ordering::SeqCst);
        let start = Utc
            .with_ymd_and_hms(2026, 3, 2, 8, 0, 0)
            .single()
            .unwrap_or_default();
        start + Duration::seconds(tick)
    }
}

/// Tracker type used by the in-memory tests.
pub type TestTracker = Tracker<InMemoryIntegrationRepository, SteppingClock>;

/// Builds a tracker over a fresh store with the given configuration.
#[must_use]
pub fn tracker_with(config: TrackerConfig) -> TestTracker {
    Tracker::new(TrackerContext::with_config(
        Arc::new(InMemoryIntegrationRepository::new()),
        Arc::new(SteppingClock::default()),
        config,
    ))
}

/// Provides a tracker with the default configuration.
#[fixture]
pub fn tracker() -> TestTracker {
    tracker_with(TrackerConfig::default())
}

/// Creates an integration with an explicit identifier.
///
/// # Errors
///
/// Returns an error if the integration cannot be created.
pub async fn create_integration(
    tracker: &TestTracker,
    id: &str,
) -> Result<IntegrationId, eyre::Report> {
    let created = tracker
        .integrations()
        .create_integration(
            CreateIntegrationRequest::new(format!("{id} integration"), "Acme").with_id(id),
        )
        .await?;
    Ok(created.id().clone())
}

/// Creates a task with the given title and story points.
///
/// # Errors
///
/// Returns an error if the task cannot be created.
pub async fn create_task(
    tracker: &TestTracker,
    integration_id: &IntegrationId,
    title: &str,
    story_points: i64,
) -> Result<Task, eyre::Report> {
    let created = tracker
        .tasks()
        .create_task(
            CreateTaskRequest::new(integration_id.clone(), title, format!("{title} details"))
                .with_story_points(story_points),
        )
        .await?;
    Ok(created)
}
