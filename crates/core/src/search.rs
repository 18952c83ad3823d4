//! Search parameter normalization and result pagination math.

use core::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Page number used when the caller's input is unusable.
pub const DEFAULT_PAGE: usize = 1;
/// Page size used when the caller's input is unusable.
pub const DEFAULT_PER_PAGE: usize = 10;

/// Sort direction of a search.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDir {
    Asc,
    Desc,
}

impl SortDir {
    fn parse(raw: &str) -> Option<Self> {
        match raw.to_lowercase().as_str() {
            "asc" => Some(SortDir::Asc),
            "desc" => Some(SortDir::Desc),
            _ => None,
        }
    }
}

impl fmt::Display for SortDir {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortDir::Asc => f.write_str("asc"),
            SortDir::Desc => f.write_str("desc"),
        }
    }
}

/// Loosely typed search arguments as a caller hands them over, e.g. decoded
/// from an HTTP query string. [`RawSearchParams::normalize`] turns them into
/// well-formed [`SearchParams`] without ever failing.
#[derive(Debug, Clone, Default)]
pub struct RawSearchParams {
    pub page: Option<Value>,
    pub per_page: Option<Value>,
    pub sort_by: Option<Value>,
    pub sort_dir: Option<Value>,
    pub filter: Option<Value>,
}

impl RawSearchParams {
    pub fn normalize(self) -> SearchParams {
        SearchParams::from(self)
    }
}

/// Normalized query description handed to the storage engine.
///
/// Field-by-field policy, applied once at construction:
/// - `page`/`per_page`: integer coercion — booleans coerce to 0/1, floats
///   truncate, numeric strings parse after trimming. Coercion failures and
///   values below 1 fall back to the defaults (1 and 10).
/// - `sort_by`/`filter`: empty or absent become `None`; anything else is
///   stringified.
/// - `sort_dir`: forced to `None` when `sort_by` is `None`; otherwise
///   defaults to ascending unless the input case-folds to `desc`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchParams {
    page: usize,
    per_page: usize,
    sort_by: Option<String>,
    sort_dir: Option<SortDir>,
    filter: Option<String>,
}

impl SearchParams {
    pub fn page(&self) -> usize {
        self.page
    }

    pub fn per_page(&self) -> usize {
        self.per_page
    }

    pub fn sort_by(&self) -> Option<&str> {
        self.sort_by.as_deref()
    }

    pub fn sort_dir(&self) -> Option<SortDir> {
        self.sort_dir
    }

    pub fn filter(&self) -> Option<&str> {
        self.filter.as_deref()
    }
}

impl Default for SearchParams {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            per_page: DEFAULT_PER_PAGE,
            sort_by: None,
            sort_dir: None,
            filter: None,
        }
    }
}

impl From<RawSearchParams> for SearchParams {
    fn from(raw: RawSearchParams) -> Self {
        let sort_by = normalize_text(raw.sort_by);
        let sort_dir = normalize_sort_dir(raw.sort_dir, sort_by.is_some());
        Self {
            page: normalize_positive(raw.page, DEFAULT_PAGE),
            per_page: normalize_positive(raw.per_page, DEFAULT_PER_PAGE),
            sort_by,
            sort_dir,
            filter: normalize_text(raw.filter),
        }
    }
}

fn normalize_positive(value: Option<Value>, default: usize) -> usize {
    match value.as_ref().and_then(coerce_int) {
        Some(n) if n >= 1 => n as usize,
        _ => default,
    }
}

fn coerce_int(value: &Value) -> Option<i64> {
    match value {
        Value::Bool(b) => Some(i64::from(*b)),
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().map(|f| f.trunc() as i64)),
        Value::String(s) => s.trim().parse::<i64>().ok(),
        _ => None,
    }
}

fn normalize_text(value: Option<Value>) -> Option<String> {
    match value? {
        Value::Null => None,
        Value::String(s) if s.is_empty() => None,
        Value::String(s) => Some(s),
        other => Some(other.to_string()),
    }
}

fn normalize_sort_dir(value: Option<Value>, has_sort_by: bool) -> Option<SortDir> {
    if !has_sort_by {
        return None;
    }
    match normalize_text(value) {
        Some(raw) => Some(SortDir::parse(&raw).unwrap_or(SortDir::Asc)),
        None => Some(SortDir::Asc),
    }
}

/// Paginated search output plus derived pagination metadata.
///
/// `last_page` is `ceil(total / per_page)`; an empty result set therefore
/// reports `last_page = 0` rather than flooring at 1.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchResult<E> {
    items: Vec<E>,
    total: usize,
    current_page: usize,
    per_page: usize,
    last_page: usize,
    sort_by: Option<String>,
    sort_dir: Option<SortDir>,
    filter: Option<String>,
}

impl<E> SearchResult<E> {
    pub fn new(items: Vec<E>, total: usize, params: &SearchParams) -> Self {
        Self {
            items,
            total,
            current_page: params.page(),
            per_page: params.per_page(),
            last_page: total.div_ceil(params.per_page()),
            sort_by: params.sort_by().map(ToOwned::to_owned),
            sort_dir: params.sort_dir(),
            filter: params.filter().map(ToOwned::to_owned),
        }
    }

    pub fn items(&self) -> &[E] {
        &self.items
    }

    pub fn into_items(self) -> Vec<E> {
        self.items
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn per_page(&self) -> usize {
        self.per_page
    }

    pub fn last_page(&self) -> usize {
        self.last_page
    }

    pub fn sort_by(&self) -> Option<&str> {
        self.sort_by.as_deref()
    }

    pub fn sort_dir(&self) -> Option<SortDir> {
        self.sort_dir
    }

    pub fn filter(&self) -> Option<&str> {
        self.filter.as_deref()
    }
}
