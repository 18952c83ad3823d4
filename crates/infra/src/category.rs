//! In-memory category repository.

use vodlib_catalog::Category;
use vodlib_core::{
    DomainResult, EntityId, Repository, SearchParams, SearchResult, SearchableRepository, SortDir,
};

use crate::memory::{MemorySearch, MemoryStore, sort_entries};

/// Fields a category search may sort on.
pub const SORTABLE_FIELDS: &[&str] = &["name", "description", "created_at", "updated_at", "is_active"];

/// Category storage backed by a [`MemoryStore`].
///
/// Filtering is a case-insensitive substring match on the category name.
/// An absent or unlisted sort field falls back to `created_at`, so the
/// default listing follows creation order.
#[derive(Debug, Default)]
pub struct CategoryInMemoryRepository {
    store: MemoryStore<Category>,
}

impl CategoryInMemoryRepository {
    pub fn new() -> Self {
        Self {
            store: MemoryStore::new(),
        }
    }

    /// Raw stored record count, soft-deleted ones included.
    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }
}

impl MemorySearch<Category> for CategoryInMemoryRepository {
    fn store(&self) -> &MemoryStore<Category> {
        &self.store
    }

    fn sortable_fields(&self) -> &'static [&'static str] {
        SORTABLE_FIELDS
    }

    fn apply_filter(&self, items: Vec<Category>, filter: Option<&str>) -> Vec<Category> {
        let Some(filter) = filter else {
            return items;
        };
        let needle = filter.to_lowercase();
        items
            .into_iter()
            .filter(|category| category.name().to_lowercase().contains(&needle))
            .collect()
    }

    fn apply_sort(
        &self,
        items: Vec<Category>,
        sort_by: Option<&str>,
        sort_dir: Option<SortDir>,
    ) -> Vec<Category> {
        let sort_by = sort_by
            .filter(|field| SORTABLE_FIELDS.contains(field))
            .unwrap_or("created_at");
        sort_entries(items, Some(sort_by), sort_dir, SORTABLE_FIELDS)
    }
}

impl Repository<Category> for CategoryInMemoryRepository {
    fn insert(&mut self, entity: &Category) -> DomainResult<()> {
        self.store.insert(entity)
    }

    fn update(&mut self, entity: &Category) -> DomainResult<()> {
        self.store.update(entity)
    }

    fn delete(&mut self, id: &EntityId) -> DomainResult<()> {
        self.store.delete(id)
    }

    fn find_by_id(&self, id: &EntityId) -> DomainResult<Category> {
        self.store.find_by_id(id)
    }

    fn find_all(&self) -> Vec<Category> {
        self.store.find_all()
    }
}

impl SearchableRepository<Category> for CategoryInMemoryRepository {
    fn sortable_fields(&self) -> &'static [&'static str] {
        SORTABLE_FIELDS
    }

    fn search(&self, params: &SearchParams) -> SearchResult<Category> {
        MemorySearch::search(self, params)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};
    use serde_json::json;
    use vodlib_core::{DomainError, Entity, RawSearchParams};

    fn category(name: &str, minutes_ago: i64) -> Category {
        Category::builder(name)
            .description(format!("{name} titles"))
            .created_at(Utc::now() - Duration::minutes(minutes_ago))
            .build()
            .unwrap()
    }

    fn search_params(raw: RawSearchParams) -> SearchParams {
        raw.normalize()
    }

    #[test]
    fn exposes_the_category_sortable_fields() {
        let repo = CategoryInMemoryRepository::new();
        assert_eq!(
            <CategoryInMemoryRepository as SearchableRepository<Category>>::sortable_fields(&repo),
            &["name", "description", "created_at", "updated_at", "is_active"]
        );
    }

    #[test]
    fn filter_is_a_case_insensitive_match_on_name() {
        let repo = CategoryInMemoryRepository::new();
        let items: Vec<Category> = (0..15).map(|i| category(&format!("cat_{i}"), 0)).collect();

        assert_eq!(repo.apply_filter(items.clone(), None).len(), 15);
        assert_eq!(repo.apply_filter(items.clone(), Some("fake")).len(), 0);
        // cat_1 plus cat_10..cat_14.
        assert_eq!(repo.apply_filter(items.clone(), Some("t_1")).len(), 6);
        assert_eq!(repo.apply_filter(items, Some("CAT")).len(), 15);
    }

    #[test]
    fn default_sort_is_creation_order() {
        let repo = CategoryInMemoryRepository::new();
        let oldest = category("banana", 30);
        let middle = category("apple", 20);
        let newest = category("cherry", 10);
        let shuffled = vec![newest.clone(), oldest.clone(), middle.clone()];

        let sorted = repo.apply_sort(shuffled.clone(), None, None);
        assert_eq!(sorted, vec![oldest.clone(), middle.clone(), newest.clone()]);

        let sorted = repo.apply_sort(shuffled, Some("fake_field"), None);
        assert_eq!(sorted, vec![oldest, middle, newest]);
    }

    #[test]
    fn sort_by_name_folds_case_and_is_stable() {
        let mut repo = CategoryInMemoryRepository::new();
        for (i, name) in ["bbb", "AAA", "aaa", "BBB"].iter().enumerate() {
            repo.insert(&category(name, 10 - i as i64)).unwrap();
        }

        let params = search_params(RawSearchParams {
            sort_by: Some(json!("name")),
            ..RawSearchParams::default()
        });
        let result = SearchableRepository::search(&repo, &params);
        let names: Vec<&str> = result.items().iter().map(Category::name).collect();
        assert_eq!(names, vec!["AAA", "aaa", "bbb", "BBB"]);

        let params = search_params(RawSearchParams {
            sort_by: Some(json!("name")),
            sort_dir: Some(json!("desc")),
            ..RawSearchParams::default()
        });
        let result = SearchableRepository::search(&repo, &params);
        let names: Vec<&str> = result.items().iter().map(Category::name).collect();
        assert_eq!(names, vec!["bbb", "BBB", "AAA", "aaa"]);
    }

    #[test]
    fn search_paginates_the_filtered_sorted_items() {
        let mut repo = CategoryInMemoryRepository::new();
        for i in 0..10 {
            // Later names get older timestamps, so name order and creation
            // order disagree.
            repo.insert(&category(&format!("cat_{i}"), i64::from(i)))
                .unwrap();
        }

        let params = search_params(RawSearchParams {
            page: Some(json!(2)),
            per_page: Some(json!(3)),
            sort_by: Some(json!("name")),
            ..RawSearchParams::default()
        });
        let result = SearchableRepository::search(&repo, &params);

        let names: Vec<&str> = result.items().iter().map(Category::name).collect();
        assert_eq!(names, vec!["cat_3", "cat_4", "cat_5"]);
        assert_eq!(result.total(), 10);
        assert_eq!(result.current_page(), 2);
        assert_eq!(result.per_page(), 3);
        assert_eq!(result.last_page(), 4);

        let params = search_params(RawSearchParams {
            page: Some(json!(5)),
            per_page: Some(json!(3)),
            ..RawSearchParams::default()
        });
        assert!(SearchableRepository::search(&repo, &params).items().is_empty());
    }

    #[test]
    fn search_pipeline_filters_sorts_and_echoes_params() {
        let mut repo = CategoryInMemoryRepository::new();
        for (name, minutes_ago) in [
            ("test", 50),
            ("axx", 40),
            ("TEST", 30),
            ("exx", 20),
            ("TeSt", 10),
        ] {
            let built = Category::builder(name)
                .created_at(Utc::now() - Duration::minutes(minutes_ago))
                .build()
                .unwrap();
            repo.insert(&built).unwrap();
        }

        let params = search_params(RawSearchParams {
            page: Some(json!(1)),
            per_page: Some(json!(2)),
            sort_by: Some(json!("created_at")),
            sort_dir: Some(json!("desc")),
            filter: Some(json!("TEST")),
            ..RawSearchParams::default()
        });
        let result = SearchableRepository::search(&repo, &params);

        let names: Vec<&str> = result.items().iter().map(Category::name).collect();
        assert_eq!(names, vec!["TeSt", "TEST"]);
        assert_eq!(result.total(), 3);
        assert_eq!(result.last_page(), 2);
        assert_eq!(result.sort_by(), Some("created_at"));
        assert_eq!(result.sort_dir(), Some(SortDir::Desc));
        assert_eq!(result.filter(), Some("TEST"));
    }

    #[test]
    fn soft_deleted_categories_are_invisible_but_still_stored() {
        let mut repo = CategoryInMemoryRepository::new();
        let movies = category("Movies", 0);
        let series = category("Series", 0);
        repo.insert(&movies).unwrap();
        repo.insert(&series).unwrap();

        repo.delete(movies.id()).unwrap();

        match repo.find_by_id(movies.id()).unwrap_err() {
            DomainError::NotFound(_) => {}
            other => panic!("Expected NotFound error, got {other:?}"),
        }
        assert_eq!(repo.find_all().len(), 1);
        assert_eq!(SearchableRepository::search(&repo, &SearchParams::default()).total(), 1);
        assert_eq!(repo.len(), 2);
    }

    #[test]
    fn reinserting_a_soft_deleted_category_is_a_conflict() {
        let mut repo = CategoryInMemoryRepository::new();
        let movies = category("Movies", 0);
        repo.insert(&movies).unwrap();
        repo.delete(movies.id()).unwrap();

        match repo.insert(&movies).unwrap_err() {
            DomainError::AlreadyExists(_) => {}
            other => panic!("Expected AlreadyExists error, got {other:?}"),
        }
    }

    #[test]
    fn inserted_categories_round_trip_field_for_field() {
        let mut repo = CategoryInMemoryRepository::new();
        let movies = category("Movies", 5);
        repo.insert(&movies).unwrap();
        assert_eq!(repo.find_by_id(movies.id()).unwrap(), movies);
    }

    #[test]
    fn update_persists_changed_fields() {
        let mut repo = CategoryInMemoryRepository::new();
        let mut movies = category("Movies", 5);
        repo.insert(&movies).unwrap();

        movies.update("Documentaries", None).unwrap();
        repo.update(&movies).unwrap();

        let stored = repo.find_by_id(movies.id()).unwrap();
        assert_eq!(stored.name(), "Documentaries");
        assert!(stored.description().is_none());
    }
}
