//! Generic in-memory storage engine.

use tracing::debug;

use vodlib_core::{
    DomainError, DomainResult, Entity, EntityId, SearchParams, SearchResult, SortDir,
};

/// Ordered in-memory collection of entities.
///
/// Insertion order is preserved and doubles as the pre-sort baseline.
/// Records are soft-deleted: `delete` deactivates in place and every read
/// path skips inactive records. Entities are cloned at each boundary so a
/// caller's in-hand value never aliases stored state.
#[derive(Debug)]
pub struct MemoryStore<E> {
    entries: Vec<E>,
}

impl<E> MemoryStore<E> {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Raw number of stored records, soft-deleted ones included.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<E> Default for MemoryStore<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: Entity + Clone> MemoryStore<E> {
    pub fn insert(&mut self, entity: &E) -> DomainResult<()> {
        if self.position_of(entity.id()).is_some() {
            return Err(DomainError::already_exists(entity.id()));
        }
        self.entries.push(entity.clone());
        Ok(())
    }

    pub fn update(&mut self, entity: &E) -> DomainResult<()> {
        let index = self
            .position_of_active(entity.id())
            .ok_or_else(|| DomainError::not_found(entity.id()))?;
        self.entries[index] = entity.clone();
        Ok(())
    }

    pub fn delete(&mut self, id: &EntityId) -> DomainResult<()> {
        let index = self
            .position_of_active(id)
            .ok_or_else(|| DomainError::not_found(id))?;
        self.entries[index].deactivate();
        debug!(%id, "entity soft-deleted");
        Ok(())
    }

    pub fn find_by_id(&self, id: &EntityId) -> DomainResult<E> {
        self.position_of_active(id)
            .map(|index| self.entries[index].clone())
            .ok_or_else(|| DomainError::not_found(id))
    }

    pub fn find_all(&self) -> Vec<E> {
        self.entries
            .iter()
            .filter(|entity| entity.is_active())
            .cloned()
            .collect()
    }

    fn position_of(&self, id: &EntityId) -> Option<usize> {
        self.entries.iter().position(|entity| entity.id() == id)
    }

    fn position_of_active(&self, id: &EntityId) -> Option<usize> {
        self.entries
            .iter()
            .position(|entity| entity.id() == id && entity.is_active())
    }
}

/// Filter → sort → paginate pipeline over a [`MemoryStore`].
///
/// Implementors supply the type-specific filter predicate and the sortable
/// field allow-list; the pipeline itself is provided.
pub trait MemorySearch<E: Entity + Clone> {
    fn store(&self) -> &MemoryStore<E>;

    /// Field names accepted as sort keys.
    fn sortable_fields(&self) -> &'static [&'static str] {
        &[]
    }

    /// Type-specific filter predicate. A `None` filter must leave the items
    /// untouched.
    fn apply_filter(&self, items: Vec<E>, filter: Option<&str>) -> Vec<E>;

    /// Sort by an allow-listed field; anything else keeps the input order.
    fn apply_sort(&self, items: Vec<E>, sort_by: Option<&str>, sort_dir: Option<SortDir>) -> Vec<E> {
        sort_entries(items, sort_by, sort_dir, self.sortable_fields())
    }

    fn search(&self, params: &SearchParams) -> SearchResult<E> {
        let filtered = self.apply_filter(self.store().find_all(), params.filter());
        let total = filtered.len();
        let sorted = self.apply_sort(filtered, params.sort_by(), params.sort_dir());
        let items = paginate(sorted, params.page(), params.per_page());
        SearchResult::new(items, total, params)
    }
}

/// Stable sort by a projected field.
///
/// Absent or unlisted fields are a no-op. Text keys compare
/// case-insensitively. `Desc` reverses the key comparison inside the one
/// stable sort, so equal keys keep their insertion-relative order in both
/// directions.
pub fn sort_entries<E: Entity>(
    mut items: Vec<E>,
    sort_by: Option<&str>,
    sort_dir: Option<SortDir>,
    sortable_fields: &[&str],
) -> Vec<E> {
    let Some(sort_by) = sort_by else {
        return items;
    };
    if !sortable_fields.contains(&sort_by) {
        return items;
    }
    items.sort_by(|a, b| {
        let ordering = a.field(sort_by).sort_cmp(&b.field(sort_by));
        match sort_dir {
            Some(SortDir::Desc) => ordering.reverse(),
            _ => ordering,
        }
    });
    items
}

/// Zero-based page slice; pages past the end come back empty.
pub fn paginate<E>(items: Vec<E>, page: usize, per_page: usize) -> Vec<E> {
    let start = page.saturating_sub(1).saturating_mul(per_page);
    items.into_iter().skip(start).take(per_page).collect()
}
