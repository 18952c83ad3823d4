//! `vodlib-catalog` — the Category bounded context.
//!
//! The entity, its field validator and the repository contract. Storage
//! engines live in `vodlib-infra`; orchestration lives in `vodlib-app`.

pub mod category;
pub mod repository;
pub mod validator;

pub use category::{Category, CategoryBuilder};
pub use repository::CategoryRepository;
pub use validator::CategoryValidator;
