//! Repository contracts implemented by storage engines.

use crate::entity::Entity;
use crate::error::DomainResult;
use crate::id::EntityId;
use crate::search::{SearchParams, SearchResult};

/// CRUD contract every storage engine exposes.
///
/// Mutating operations take `&mut self`; an engine shared across threads
/// gets its locking from the caller, not from the engine.
pub trait Repository<E: Entity> {
    /// Store a copy of `entity`. Fails with `AlreadyExists` when the id is
    /// taken, including by a deactivated record.
    fn insert(&mut self, entity: &E) -> DomainResult<()>;

    /// Replace the stored record with a copy of `entity`, keeping its
    /// position. Fails with `NotFound` when no active record has the id.
    fn update(&mut self, entity: &E) -> DomainResult<()>;

    /// Soft-delete: deactivate the record in place. Fails with `NotFound`
    /// when no active record has the id.
    fn delete(&mut self, id: &EntityId) -> DomainResult<()>;

    /// Copy of the active record with this id; soft-deleted records are
    /// invisible here.
    fn find_by_id(&self, id: &EntityId) -> DomainResult<E>;

    /// Copies of all active records in storage order.
    fn find_all(&self) -> Vec<E>;
}

/// Repository with a filter → sort → paginate search pipeline.
pub trait SearchableRepository<E: Entity>: Repository<E> {
    /// Field names accepted as sort keys; anything else is ignored by the
    /// sort stage.
    fn sortable_fields(&self) -> &'static [&'static str] {
        &[]
    }

    fn search(&self, params: &SearchParams) -> SearchResult<E>;
}
