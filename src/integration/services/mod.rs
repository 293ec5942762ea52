//! Application services for the integration catalogue.

mod catalog;

pub use catalog::{CreateIntegrationRequest, IntegrationCatalogService, UpdateStageRequest};
