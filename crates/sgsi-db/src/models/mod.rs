//! Database entity models for sgsi-db.
//!
//! These models represent the CSF reference tables and provide
//! type-safe interactions with PostgreSQL. They are passive records:
//! every field is store-provided and all constraints (non-null,
//! foreign-key existence, uniqueness) are enforced by the store.

pub mod category;
pub mod function;
pub mod subcategory;

pub use category::{Category, CreateCategory, UpdateCategory};
pub use function::{CreateFunction, Function, UpdateFunction};
pub use subcategory::{
    CreateSubcategory, Subcategory, SubcategoryView, UpdateSubcategory,
};
