//! Value object trait: equality by value, not identity.

/// Marker trait for immutable domain values compared by their attributes.
///
/// A value object has no identity of its own; two instances with the same
/// attribute values are interchangeable. Entities, by contrast, are the
/// same record exactly when their ids match.
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
