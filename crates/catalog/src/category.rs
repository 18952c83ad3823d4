//! Category entity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use vodlib_core::{
    DomainError, DomainResult, Entity, EntityBase, EntityId, FieldsValidator, Record,
};

use crate::validator::CategoryValidator;

/// A catalog category: a named grouping for library titles.
///
/// Construction goes through [`CategoryBuilder`]; the field map is run
/// through [`CategoryValidator`] before any instance exists, and again on
/// every [`Category::update`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    #[serde(flatten)]
    base: EntityBase,
    name: String,
    description: Option<String>,
}

impl Category {
    /// Start building a category with the given name.
    pub fn builder(name: impl Into<String>) -> CategoryBuilder {
        CategoryBuilder {
            id: None,
            name: name.into(),
            description: None,
            is_active: true,
            created_at: None,
            updated_at: None,
        }
    }

    /// Create an active category with generated identity and timestamps.
    pub fn new(name: impl Into<String>, description: Option<String>) -> DomainResult<Self> {
        let mut builder = Self::builder(name);
        builder.description = description;
        builder.build()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Rename and re-describe the category.
    ///
    /// Re-validates against a candidate first; the entity is untouched when
    /// validation fails. A committed change refreshes `updated_at`.
    pub fn update(
        &mut self,
        name: impl Into<String>,
        description: Option<String>,
    ) -> DomainResult<()> {
        let mut candidate = self.clone();
        candidate.name = name.into();
        candidate.description = description;
        validate_record(&candidate.to_record())?;
        self.name = candidate.name;
        self.description = candidate.description;
        self.base.touch();
        Ok(())
    }
}

impl Entity for Category {
    fn id(&self) -> &EntityId {
        self.base.id()
    }

    fn is_active(&self) -> bool {
        self.base.is_active()
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.base.created_at()
    }

    fn updated_at(&self) -> Option<DateTime<Utc>> {
        self.base.updated_at()
    }

    fn activate(&mut self) {
        self.base.activate();
    }

    fn deactivate(&mut self) {
        self.base.deactivate();
    }

    fn to_record(&self) -> Record {
        let mut record = self.base.record();
        record.insert("name".to_string(), self.name.as_str().into());
        record.insert("description".to_string(), self.description.clone().into());
        record
    }
}

/// Builder for [`Category`]; validation runs once at [`CategoryBuilder::build`].
///
/// Identity, activity and timestamps are optional so stored records can be
/// rehydrated and tests can pin values; they default to a fresh id, active,
/// and `created_at` now.
#[derive(Debug, Clone)]
pub struct CategoryBuilder {
    id: Option<EntityId>,
    name: String,
    description: Option<String>,
    is_active: bool,
    created_at: Option<DateTime<Utc>>,
    updated_at: Option<DateTime<Utc>>,
}

impl CategoryBuilder {
    pub fn id(mut self, id: EntityId) -> Self {
        self.id = Some(id);
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn is_active(mut self, is_active: bool) -> Self {
        self.is_active = is_active;
        self
    }

    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = Some(created_at);
        self
    }

    pub fn updated_at(mut self, updated_at: DateTime<Utc>) -> Self {
        self.updated_at = Some(updated_at);
        self
    }

    pub fn build(self) -> DomainResult<Category> {
        let base = EntityBase::restore(
            self.id.unwrap_or_else(EntityId::new),
            self.is_active,
            self.created_at.unwrap_or_else(Utc::now),
            self.updated_at,
        );
        let category = Category {
            base,
            name: self.name,
            description: self.description,
        };
        validate_record(&category.to_record())?;
        Ok(category)
    }
}

fn validate_record(record: &Record) -> DomainResult<()> {
    let mut validator = CategoryValidator::new();
    if validator.validate(record) {
        Ok(())
    } else {
        Err(DomainError::validation(validator.into_fields_errors()))
    }
}
