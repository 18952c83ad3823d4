//! Entity base: identity, activity flag, audit timestamps, projection.

use std::cmp::Ordering;
use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::id::EntityId;

/// Plain projection of an entity's fields, keyed by field name.
pub type Record = BTreeMap<String, FieldValue>;

/// A single projected field value.
///
/// Covers every field type catalog entities expose. The storage engine
/// sorts on these via [`FieldValue::sort_cmp`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum FieldValue {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
    Timestamp(DateTime<Utc>),
}

impl FieldValue {
    pub fn is_null(&self) -> bool {
        matches!(self, FieldValue::Null)
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            FieldValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Total ordering used by the sort stage.
    ///
    /// Text folds case before comparing; numbers compare across the
    /// `Int`/`Float` divide; mixed variants fall back to a fixed rank with
    /// null first.
    pub fn sort_cmp(&self, other: &FieldValue) -> Ordering {
        use FieldValue::*;
        match (self, other) {
            (Bool(a), Bool(b)) => a.cmp(b),
            (Int(a), Int(b)) => a.cmp(b),
            (Float(a), Float(b)) => a.total_cmp(b),
            (Int(a), Float(b)) => (*a as f64).total_cmp(b),
            (Float(a), Int(b)) => a.total_cmp(&(*b as f64)),
            (Text(a), Text(b)) => a.to_lowercase().cmp(&b.to_lowercase()),
            (Timestamp(a), Timestamp(b)) => a.cmp(b),
            _ => self.rank().cmp(&other.rank()),
        }
    }

    fn rank(&self) -> u8 {
        match self {
            FieldValue::Null => 0,
            FieldValue::Bool(_) => 1,
            FieldValue::Int(_) | FieldValue::Float(_) => 2,
            FieldValue::Timestamp(_) => 3,
            FieldValue::Text(_) => 4,
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Text(value)
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        FieldValue::Bool(value)
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        FieldValue::Int(value)
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        FieldValue::Float(value)
    }
}

impl From<DateTime<Utc>> for FieldValue {
    fn from(value: DateTime<Utc>) -> Self {
        FieldValue::Timestamp(value)
    }
}

impl<T> From<Option<T>> for FieldValue
where
    T: Into<FieldValue>,
{
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(FieldValue::Null)
    }
}

/// Identity and audit state shared by every entity.
///
/// Concrete entities embed this and delegate their [`Entity`] accessors to
/// it. Every field mutation must go through [`EntityBase::touch`] (or the
/// activate/deactivate helpers) so `updated_at` stays accurate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntityBase {
    id: EntityId,
    is_active: bool,
    created_at: DateTime<Utc>,
    updated_at: Option<DateTime<Utc>>,
}

impl EntityBase {
    /// Fresh state: generated id, active, `created_at` now, never updated.
    pub fn new() -> Self {
        Self {
            id: EntityId::new(),
            is_active: true,
            created_at: Utc::now(),
            updated_at: None,
        }
    }

    /// Restore state from known values, e.g. when rehydrating a record.
    pub fn restore(
        id: EntityId,
        is_active: bool,
        created_at: DateTime<Utc>,
        updated_at: Option<DateTime<Utc>>,
    ) -> Self {
        Self {
            id,
            is_active,
            created_at,
            updated_at,
        }
    }

    pub fn id(&self) -> &EntityId {
        &self.id
    }

    pub fn is_active(&self) -> bool {
        self.is_active
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> Option<DateTime<Utc>> {
        self.updated_at
    }

    /// Record that the entity just changed.
    pub fn touch(&mut self) {
        self.updated_at = Some(Utc::now());
    }

    pub fn activate(&mut self) {
        self.is_active = true;
        self.touch();
    }

    pub fn deactivate(&mut self) {
        self.is_active = false;
        self.touch();
    }

    /// Projection entries shared by every entity record. The identity is
    /// rendered as a plain `id` string.
    pub fn record(&self) -> Record {
        let mut record = Record::new();
        record.insert("id".to_string(), FieldValue::Text(self.id.to_string()));
        record.insert("is_active".to_string(), FieldValue::Bool(self.is_active));
        record.insert(
            "created_at".to_string(),
            FieldValue::Timestamp(self.created_at),
        );
        record.insert("updated_at".to_string(), self.updated_at.into());
        record
    }
}

impl Default for EntityBase {
    fn default() -> Self {
        Self::new()
    }
}

/// Common interface of identity-bearing, softly-deletable records.
pub trait Entity {
    fn id(&self) -> &EntityId;

    fn is_active(&self) -> bool;

    fn created_at(&self) -> DateTime<Utc>;

    fn updated_at(&self) -> Option<DateTime<Utc>>;

    /// Flip the activity flag on; refreshes `updated_at`.
    fn activate(&mut self);

    /// Flip the activity flag off; refreshes `updated_at`. The record stays
    /// stored and only becomes invisible to lookups.
    fn deactivate(&mut self);

    /// Project all fields into a [`Record`].
    fn to_record(&self) -> Record;

    /// Look up a single projected field by name. Unknown fields read null.
    fn field(&self, name: &str) -> FieldValue {
        self.to_record().remove(name).unwrap_or(FieldValue::Null)
    }
}
