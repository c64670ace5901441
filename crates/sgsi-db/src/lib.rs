//! Data access for the SGSI compliance tracker.
//!
//! Maps the NIST CSF reference hierarchy (functions, categories,
//! subcategories) held in an external PostgreSQL store, and builds the
//! two pure transforms on top of it: the wire projection of a function
//! and the canonical subcategory display code.
//!
//! The surrounding application owns HTTP routing, rendering, and
//! configuration loading; this crate exposes row types, lookup queries,
//! a pooled connection handle, and nothing else.
//!
//! # Modules
//!
//! - [`models`] - Passive row types and their lookup/CRUD queries
//! - [`codes`] - Canonical display-code formatting
//! - [`transfer`] - Serialization-stable function projection
//! - [`schema`] - Store binding (fixed table/column identifiers)
//! - [`pool`] - Connection pool handle
//! - [`config`] - Connection-string entry
//! - [`error`] - Unified error type

pub mod codes;
pub mod config;
pub mod error;
pub mod models;
pub mod pool;
pub mod schema;
pub mod transfer;

// Re-export main types for convenient access
pub use codes::display_code;
pub use error::DbError;
pub use models::{
    Category, CreateCategory, CreateFunction, CreateSubcategory, Function, Subcategory,
    SubcategoryView, UpdateCategory, UpdateFunction, UpdateSubcategory,
};
pub use pool::DbPool;
pub use transfer::FunctionTransfer;
