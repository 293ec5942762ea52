//! Task management inside integrations.
//!
//! Tasks never exist on their own: every task is owned by exactly one
//! integration and is persisted as part of that aggregate. This module holds
//! the task entity with its enumerations and value objects in [`domain`], and
//! the create, update, comment and delete flows in [`services`].

pub mod domain;
pub mod services;

#[cfg(test)]
mod tests;
