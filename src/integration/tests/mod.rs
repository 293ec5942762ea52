//! Unit tests for the integration bounded context.
