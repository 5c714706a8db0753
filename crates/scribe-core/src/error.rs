//! Domain-level error types.

use thiserror::Error;

/// Domain errors - business logic failures.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Validation failed: {0}")]
    Validation(String),
}

/// Repository-level errors.
///
/// The in-memory store reports absence as `None`/`false`, so the only
/// failure is a violated uniqueness rule.
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Constraint violation: {0}")]
    Constraint(String),
}
