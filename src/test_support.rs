//! Shared helpers for unit tests.

use crate::config::TrackerConfig;
use crate::context::TrackerContext;
use crate::integration::adapters::memory::InMemoryIntegrationRepository;
use crate::integration::domain::{Integration, IntegrationId};
use crate::integration::services::{CreateIntegrationRequest, IntegrationCatalogService};
use chrono::{DateTime, Duration, Local, TimeZone, Utc};
use mockable::Clock;
use std::sync::{Arc, Mutex};

/// Context over an in-memory store and a manual clock.
pub type TestContext = TrackerContext<InMemoryIntegrationRepository, ManualClock>;

/// Builds a fresh in-memory context and returns the clock driving it.
pub fn in_memory_context(config: TrackerConfig) -> (TestContext, Arc<ManualClock>) {
    let clock = Arc::new(ManualClock::new());
    let context = TrackerContext::with_config(
        Arc::new(InMemoryIntegrationRepository::new()),
        Arc::clone(&clock),
        config,
    );
    (context, clock)
}

/// Creates an integration with the given identifier.
pub async fn seed_integration(context: &TestContext, id: &str) -> IntegrationId {
    let created: Integration = IntegrationCatalogService::new(context.clone())
        .create_integration(CreateIntegrationRequest::new(format!("{id} project"), "Acme").with_id(id))
        .await
        .expect("integration is created");
    created.id().clone()
}

/// Clock that only moves when told to.
#[derive(Debug)]
pub struct ManualClock {
    now: Mutex<DateTime<Utc>>,
}

impl ManualClock {
    /// Starts the clock at 2026-01-05 09:00 UTC.
    pub fn new() -> Self {
        Self::starting_at(
            Utc.with_ymd_and_hms(2026, 1, 5, 9, 0, 0)
                .single()
                .expect("valid start time"),
        )
    }

    /// Starts the clock at `now`.
    pub fn starting_at(now: DateTime<Utc>) -> Self {
        Self {
            now: Mutex::new(now),
        }
    }

    /// Moves the clock forward.
    pub fn advance(&self, by: Duration) {
        let mut now = self.now.lock().expect("clock lock");
        *now += by;
    }
}

impl Clock for ManualClock {
    fn local(&self) -> DateTime<Local> {
        self.utc().with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        *self.now.lock().expect("clock lock")
    }
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::new()
    }
}
