//! Kanban board views and task moves.
//!
//! Every integration has a board of seven fixed columns. Tasks move one
//! column at a time with relative moves or jump to any column with explicit
//! moves:
//!
//! - Domain types in [`domain`]
//! - Orchestration services in [`services`]

pub mod domain;
pub mod services;

#[cfg(test)]
mod tests;
