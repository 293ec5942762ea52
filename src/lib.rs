//! Integration tracker: a Kanban state engine for partner integrations.
//!
//! The crate keeps a catalogue of integrations, each owning an ordered set
//! of tasks placed on a seven-column Kanban board, and computes dashboard,
//! sprint and recommendation reports over them.
//!
//! # Architecture
//!
//! Each bounded context follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports
//! - **Services**: Orchestration over a shared [`context::TrackerContext`]
//!
//! # Modules
//!
//! - [`integration`]: Integration catalogue and the storage port
//! - [`task`]: Task entity and lifecycle operations
//! - [`board`]: Kanban board views and task moves
//! - [`analytics`]: Dashboard, sprint report and recommended actions
//! - [`tracker`]: Facade bundling all services

pub mod analytics;
pub mod board;
pub mod config;
pub mod context;
pub mod error;
pub mod integration;
pub mod task;
pub mod tracker;

mod ratio;

#[cfg(test)]
mod test_support;
