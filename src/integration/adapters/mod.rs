//! Adapter implementations of the integration ports.

pub mod memory;
