//! `vodlib-infra` — storage engines.
//!
//! Memory-resident implementations of the repository contracts: the
//! generic [`memory::MemoryStore`] engine with its search pipeline, and the
//! concrete category repository.

pub mod category;
pub mod memory;

pub use category::{CategoryInMemoryRepository, SORTABLE_FIELDS};
pub use memory::{MemorySearch, MemoryStore, paginate, sort_entries};
