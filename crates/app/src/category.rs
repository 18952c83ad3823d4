//! Category use cases: thin orchestration over the repository.

use tracing::debug;

use vodlib_catalog::{Category, CategoryRepository};
use vodlib_core::{DomainResult, Entity, EntityId, RawSearchParams};

use crate::dto::{CategoryOutput, ListCategoriesOutput};

/// Input for [`CreateCategory`].
#[derive(Debug, Clone)]
pub struct CreateCategoryInput {
    pub name: String,
    pub description: Option<String>,
    pub is_active: bool,
}

impl CreateCategoryInput {
    /// Input with the entity defaults: no description, active.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            is_active: true,
        }
    }
}

/// Create a category and store it.
pub struct CreateCategory<'a, R: CategoryRepository> {
    repo: &'a mut R,
}

impl<'a, R: CategoryRepository> CreateCategory<'a, R> {
    pub fn new(repo: &'a mut R) -> Self {
        Self { repo }
    }

    pub fn execute(&mut self, input: CreateCategoryInput) -> DomainResult<CategoryOutput> {
        let mut builder = Category::builder(input.name).is_active(input.is_active);
        if let Some(description) = input.description {
            builder = builder.description(description);
        }
        let category = builder.build()?;
        self.repo.insert(&category)?;
        debug!(id = %category.id(), "category created");
        Ok(CategoryOutput::from(&category))
    }
}

/// Input for [`GetCategory`].
#[derive(Debug, Clone)]
pub struct GetCategoryInput {
    pub id: String,
}

/// Fetch one category by id.
pub struct GetCategory<'a, R: CategoryRepository> {
    repo: &'a R,
}

impl<'a, R: CategoryRepository> GetCategory<'a, R> {
    pub fn new(repo: &'a R) -> Self {
        Self { repo }
    }

    pub fn execute(&self, input: GetCategoryInput) -> DomainResult<CategoryOutput> {
        let id = EntityId::parse(&input.id)?;
        let category = self.repo.find_by_id(&id)?;
        Ok(CategoryOutput::from(&category))
    }
}

/// List categories through the search pipeline.
///
/// The input is the caller's loosely typed search arguments; normalization
/// never fails, so neither does listing.
pub struct ListCategories<'a, R: CategoryRepository> {
    repo: &'a R,
}

impl<'a, R: CategoryRepository> ListCategories<'a, R> {
    pub fn new(repo: &'a R) -> Self {
        Self { repo }
    }

    pub fn execute(&self, input: RawSearchParams) -> ListCategoriesOutput {
        let params = input.normalize();
        let result = self.repo.search(&params);
        ListCategoriesOutput::from(&result)
    }
}

/// Input for [`UpdateCategory`].
#[derive(Debug, Clone)]
pub struct UpdateCategoryInput {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
}

/// Re-validate and persist changed category fields.
pub struct UpdateCategory<'a, R: CategoryRepository> {
    repo: &'a mut R,
}

impl<'a, R: CategoryRepository> UpdateCategory<'a, R> {
    pub fn new(repo: &'a mut R) -> Self {
        Self { repo }
    }

    pub fn execute(&mut self, input: UpdateCategoryInput) -> DomainResult<CategoryOutput> {
        let id = EntityId::parse(&input.id)?;
        let mut category = self.repo.find_by_id(&id)?;
        category.update(input.name, input.description)?;
        self.repo.update(&category)?;
        debug!(id = %category.id(), "category updated");
        Ok(CategoryOutput::from(&category))
    }
}

/// Input for [`DeleteCategory`].
#[derive(Debug, Clone)]
pub struct DeleteCategoryInput {
    pub id: String,
}

/// Soft-delete a category.
pub struct DeleteCategory<'a, R: CategoryRepository> {
    repo: &'a mut R,
}

impl<'a, R: CategoryRepository> DeleteCategory<'a, R> {
    pub fn new(repo: &'a mut R) -> Self {
        Self { repo }
    }

    pub fn execute(&mut self, input: DeleteCategoryInput) -> DomainResult<()> {
        let id = EntityId::parse(&input.id)?;
        self.repo.delete(&id)?;
        debug!(%id, "category deleted");
        Ok(())
    }
}
