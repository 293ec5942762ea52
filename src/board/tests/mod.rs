//! Unit tests for the board bounded context.
