//! In-crate helpers for exercising the session core in tests.
//!
//! Kept in the library (not `tests/`) so both unit and integration suites
//! share one capture hub and one set of deterministic strategies.

pub mod events;
pub mod strategies;
