//! Use-case input/output shapes.

use chrono::{DateTime, Utc};
use serde::Serialize;

use vodlib_catalog::Category;
use vodlib_core::{Entity, SearchResult};

/// Category as presented to callers of the application layer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryOutput {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl From<&Category> for CategoryOutput {
    fn from(category: &Category) -> Self {
        Self {
            id: category.id().to_string(),
            name: category.name().to_string(),
            description: category.description().map(ToOwned::to_owned),
            is_active: category.is_active(),
            created_at: category.created_at(),
            updated_at: category.updated_at(),
        }
    }
}

/// Paginated listing of category outputs.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ListCategoriesOutput {
    pub items: Vec<CategoryOutput>,
    pub total: usize,
    pub current_page: usize,
    pub per_page: usize,
    pub last_page: usize,
}

impl From<&SearchResult<Category>> for ListCategoriesOutput {
    fn from(result: &SearchResult<Category>) -> Self {
        Self {
            items: result.items().iter().map(CategoryOutput::from).collect(),
            total: result.total(),
            current_page: result.current_page(),
            per_page: result.per_page(),
            last_page: result.last_page(),
        }
    }
}
