//! Reporting over the whole tracker.
//!
//! Dashboards, sprint reports and recommended actions are computed on read
//! from a single snapshot of the store and never mutate it.
//!
//! - Pure computations in [`domain`]
//! - Orchestration services in [`services`]

pub mod domain;
pub mod services;

#[cfg(test)]
mod tests;
