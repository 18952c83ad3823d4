//! `vodlib-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no infrastructure
//! concerns): identity, the entity base, the error model, the field
//! validation contract, search parameter normalization and the repository
//! contracts.

pub mod entity;
pub mod error;
pub mod id;
pub mod repository;
pub mod search;
pub mod validation;
pub mod value_object;

pub use entity::{Entity, EntityBase, FieldValue, Record};
pub use error::{DomainError, DomainResult, FieldsErrors};
pub use id::EntityId;
pub use repository::{Repository, SearchableRepository};
pub use search::{
    DEFAULT_PAGE, DEFAULT_PER_PAGE, RawSearchParams, SearchParams, SearchResult, SortDir,
};
pub use validation::{FieldsValidator, push_field_error};
pub use value_object::ValueObject;
