//! Canonical display codes for subcategories.
//!
//! A subcategory's human-readable code is derived from its ancestor
//! chain: `<function code>.<category number>-<subcategory number>`,
//! e.g. `"ID.1-1"`.

use crate::models::SubcategoryView;

/// Prefix of the degraded-mode output used when the ancestor chain is
/// not available.
const FALLBACK_PREFIX: &str = "ID: ";

/// Formats the canonical display code for a subcategory.
///
/// Pure and side-effect free; the same input always yields the same
/// output. Absent input is a defined degraded mode, never an error:
///
/// - `None` → `"ID: "`
/// - function navigation unpopulated → `"ID: <subcategory id>"`
/// - otherwise → `<function code>.<category number>-<subcategory number>`
///   with no padding or validation of the numeric parts.
///
/// Known edge case: a function whose code is absent or empty is
/// concatenated as an empty segment, so the output starts with a bare
/// separator (e.g. `".1-1"`). The store is not expected to hold such
/// rows and the intended behavior was never pinned down, so the output
/// is kept as-is and covered by a test rather than second-guessed.
///
/// # Example
///
/// ```
/// use sgsi_db::codes::display_code;
///
/// assert_eq!(display_code(None), "ID: ");
/// ```
#[must_use]
pub fn display_code(view: Option<&SubcategoryView>) -> String {
    let Some(view) = view else {
        return FALLBACK_PREFIX.to_string();
    };

    match &view.function {
        Some(function) => format!(
            "{}.{}-{}",
            function.code.as_deref().unwrap_or_default(),
            view.subcategory.category_number,
            view.subcategory.subcategory_number
        ),
        None => format!("{FALLBACK_PREFIX}{}", view.subcategory.id),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Function, Subcategory};

    fn view(function: Option<Function>) -> SubcategoryView {
        SubcategoryView {
            subcategory: Subcategory {
                id: 42,
                category_id: 7,
                category_number: 1,
                subcategory_number: 1,
            },
            function,
        }
    }

    fn identify() -> Function {
        Function {
            id: 1,
            code: Some("ID".to_string()),
            name: Some("Identify".to_string()),
            description: None,
        }
    }

    #[test]
    fn test_full_chain_formats_composite_code() {
        let view = view(Some(identify()));
        assert_eq!(display_code(Some(&view)), "ID.1-1");
    }

    #[test]
    fn test_numbers_are_not_padded() {
        let mut view = view(Some(identify()));
        view.subcategory.category_number = 3;
        view.subcategory.subcategory_number = 12;
        assert_eq!(display_code(Some(&view)), "ID.3-12");
    }

    #[test]
    fn test_absent_view_falls_back_to_bare_prefix() {
        assert_eq!(display_code(None), "ID: ");
    }

    #[test]
    fn test_unpopulated_function_falls_back_to_identity() {
        let view = view(None);
        assert_eq!(display_code(Some(&view)), "ID: 42");
    }

    #[test]
    fn test_missing_function_code_yields_leading_separator() {
        let mut function = identify();
        function.code = None;
        let view = view(Some(function));
        assert_eq!(display_code(Some(&view)), ".1-1");
    }

    #[test]
    fn test_empty_function_code_yields_leading_separator() {
        let mut function = identify();
        function.code = Some(String::new());
        let view = view(Some(function));
        assert_eq!(display_code(Some(&view)), ".1-1");
    }

    #[test]
    fn test_formatting_is_idempotent() {
        let view = view(Some(identify()));
        assert_eq!(display_code(Some(&view)), display_code(Some(&view)));
    }

    #[test]
    fn test_view_method_delegates_to_formatter() {
        let view = view(Some(identify()));
        assert_eq!(view.display_code(), display_code(Some(&view)));
    }
}
