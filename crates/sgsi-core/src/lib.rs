//! SGSI Core Library
//!
//! Shared types for the SGSI compliance tracker.
//!
//! # Modules
//!
//! - [`ids`] - Strongly typed identifiers (`FunctionId`, `CategoryId`,
//!   `SubcategoryId`)
//!
//! # Example
//!
//! ```
//! use sgsi_core::{FunctionId, SubcategoryId};
//!
//! let function_id = FunctionId::from_i32(1);
//! let subcategory_id: SubcategoryId = "42".parse().unwrap();
//! assert_eq!(subcategory_id.as_i32(), 42);
//! let _ = function_id;
//! ```

pub mod ids;

// Re-export main types for convenient access
pub use ids::{CategoryId, FunctionId, ParseIdError, SubcategoryId};
