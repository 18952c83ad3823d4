//! Domain error model.

use std::collections::BTreeMap;
use std::fmt;

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Validation messages keyed by field name.
pub type FieldsErrors = BTreeMap<String, Vec<String>>;

/// Domain-level error.
///
/// Keep this focused on deterministic domain failures (malformed ids,
/// validation rejections, lookup misses, id collisions). Infrastructure
/// concerns belong elsewhere.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// An identifier was not a well-formed UUID.
    #[error("id must be a valid UUID: {0}")]
    InvalidId(String),

    /// The entity field map was rejected by its validator.
    #[error("entity validation failed: {}", fields_errors_summary(.0))]
    Validation(FieldsErrors),

    /// An id-keyed lookup missed. Soft-deleted records miss too.
    #[error("entity not found using id: {0}")]
    NotFound(String),

    /// An insert collided with an id already in storage.
    #[error("entity already exists using id: {0}")]
    AlreadyExists(String),
}

impl DomainError {
    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }

    pub fn validation(errors: FieldsErrors) -> Self {
        Self::Validation(errors)
    }

    pub fn not_found(id: impl fmt::Display) -> Self {
        Self::NotFound(id.to_string())
    }

    pub fn already_exists(id: impl fmt::Display) -> Self {
        Self::AlreadyExists(id.to_string())
    }
}

fn fields_errors_summary(errors: &FieldsErrors) -> String {
    errors
        .iter()
        .map(|(field, messages)| format!("{field}: {}", messages.join(", ")))
        .collect::<Vec<_>>()
        .join("; ")
}
