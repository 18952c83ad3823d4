//! Category repository contract.

use vodlib_core::SearchableRepository;

use crate::category::Category;

/// Storage contract for categories: the generic searchable repository,
/// fixed to the [`Category`] entity.
pub trait CategoryRepository: SearchableRepository<Category> {}

impl<T> CategoryRepository for T where T: SearchableRepository<Category> {}
