//! Error types for the session core.

pub mod domain;

pub use domain::{DomainError, ValidationKind};
