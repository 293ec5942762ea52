//! In-memory adapters for integration storage.

mod integration;

pub use integration::InMemoryIntegrationRepository;
