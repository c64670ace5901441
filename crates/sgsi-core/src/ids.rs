//! Strongly Typed Identifiers
//!
//! Type-safe identifier types for the CSF reference hierarchy. Using the
//! newtype pattern, these types prevent accidental misuse of different ID
//! types at compile time.
//!
//! Keys are assigned by the external store, so there is no constructor
//! that invents a fresh identifier; values only enter the program by
//! wrapping a store-provided integer.
//!
//! # Example
//!
//! ```
//! use sgsi_core::{CategoryId, FunctionId};
//!
//! let function = FunctionId::from_i32(1);
//! let category = CategoryId::from_i32(1);
//!
//! // Type safety: cannot pass CategoryId where FunctionId is expected
//! fn requires_function(id: FunctionId) -> String {
//!     id.to_string()
//! }
//!
//! let result = requires_function(function);
//! // requires_function(category); // This would not compile!
//! ```

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Error type for ID parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseIdError {
    /// The type of ID that failed to parse
    pub id_type: &'static str,
    /// The underlying integer parse error message
    pub message: String,
}

impl Display for ParseIdError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Failed to parse {}: {}", self.id_type, self.message)
    }
}

impl std::error::Error for ParseIdError {}

/// Macro to define a strongly-typed ID type over a store-assigned key
macro_rules! define_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(i32);

        impl $name {
            /// Wraps a key assigned by the store.
            #[must_use]
            pub fn from_i32(raw: i32) -> Self {
                Self(raw)
            }

            /// Returns the raw integer key.
            #[must_use]
            pub fn as_i32(&self) -> i32 {
                self.0
            }
        }

        impl From<i32> for $name {
            fn from(raw: i32) -> Self {
                Self(raw)
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl FromStr for $name {
            type Err = ParseIdError;

            fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
                s.parse::<i32>().map(Self).map_err(|e| ParseIdError {
                    id_type: stringify!($name),
                    message: e.to_string(),
                })
            }
        }
    };
}

define_id!(
    /// Strongly typed identifier for a CSF Function (e.g. Identify, Protect).
    ///
    /// # Example
    ///
    /// ```
    /// use sgsi_core::FunctionId;
    ///
    /// let id = FunctionId::from_i32(7);
    /// assert_eq!(id.as_i32(), 7);
    /// assert_eq!(id.to_string(), "7");
    /// ```
    FunctionId
);

define_id!(
    /// Strongly typed identifier for a Category within a Function.
    CategoryId
);

define_id!(
    /// Strongly typed identifier for a Subcategory within a Category.
    SubcategoryId
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip_raw_key() {
        let id = FunctionId::from_i32(42);
        assert_eq!(id.as_i32(), 42);
        assert_eq!(FunctionId::from(42), id);
    }

    #[test]
    fn test_display_and_from_str() {
        let id = SubcategoryId::from_i32(13);
        assert_eq!(id.to_string(), "13");
        let parsed: SubcategoryId = "13".parse().expect("should parse");
        assert_eq!(parsed, id);
    }

    #[test]
    fn test_from_str_rejects_garbage() {
        let err = "abc".parse::<CategoryId>().unwrap_err();
        assert_eq!(err.id_type, "CategoryId");
        assert!(err.to_string().contains("CategoryId"));
    }

    #[test]
    fn test_serde_is_transparent() {
        let id = FunctionId::from_i32(5);
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "5");
        let back: FunctionId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }
}
