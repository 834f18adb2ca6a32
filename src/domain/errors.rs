// src/domain/errors.rs
use thiserror::Error;

pub type DomainResult<T> = Result<T, DomainError>;

/// Failures the domain can express on its own. Store adapters translate
/// backend faults into `Persistence`; the other variants are raised by
/// value objects and services directly.
#[derive(Debug, Error)]
pub enum DomainError {
    /// A value object or command input failed validation (empty title,
    /// malformed cursor token, blank id).
    #[error("invalid input: {0}")]
    Validation(String),
    /// The operation contradicts the current state of a document.
    #[error("conflicting state: {0}")]
    Conflict(String),
    /// A post or category the operation requires does not exist.
    #[error("no such document: {0}")]
    NotFound(String),
    /// The backing document store failed or returned something unreadable.
    #[error("store failure: {0}")]
    Persistence(String),
}
