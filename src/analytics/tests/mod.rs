//! Unit tests for the analytics bounded context.
