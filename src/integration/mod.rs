//! Integration catalogue for the tracker.
//!
//! Integrations are the aggregate roots of the tracker. They own their
//! contacts and tasks and are persisted as one unit through the
//! [`ports::IntegrationRepository`] contract:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
