//! `vodlib-app` — application layer.
//!
//! Thin use cases orchestrating the category repository and entity, plus
//! the input/output shapes they speak. Transport and presentation live
//! above this crate.

pub mod category;
pub mod dto;

pub use category::{
    CreateCategory, CreateCategoryInput, DeleteCategory, DeleteCategoryInput, GetCategory,
    GetCategoryInput, ListCategories, UpdateCategory, UpdateCategoryInput,
};
pub use dto::{CategoryOutput, ListCategoriesOutput};
