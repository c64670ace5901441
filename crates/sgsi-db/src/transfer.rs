//! Wire projection of a function for external consumers.

use serde::{Deserialize, Serialize};

use crate::models::Function;

/// A narrowed, serialization-stable view of a [`Function`].
///
/// The serialized field names (`id`, `codigo`, `nome`) are the published
/// contract for API consumers; renaming any of them is a breaking change
/// that requires a version bump. `description` and all relationship data
/// are excluded on purpose — this is a narrowing projection, and there
/// is no reverse mapping back to a [`Function`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FunctionTransfer {
    /// Store-assigned identifier, unchanged from the source row.
    pub id: i32,

    /// The function's short code, published as `codigo`.
    pub codigo: Option<String>,

    /// The function's display name, published as `nome`.
    pub nome: Option<String>,
}

impl From<&Function> for FunctionTransfer {
    fn from(function: &Function) -> Self {
        Self {
            id: function.id,
            codigo: function.code.clone(),
            nome: function.name.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn protect() -> Function {
        Function {
            id: 2,
            code: Some("PR".to_string()),
            name: Some("Protect".to_string()),
            description: Some("Safeguards for critical services".to_string()),
        }
    }

    #[test]
    fn test_projection_selects_without_altering() {
        let function = protect();
        let transfer = FunctionTransfer::from(&function);

        assert_eq!(transfer.id, function.id);
        assert_eq!(transfer.codigo, function.code);
        assert_eq!(transfer.nome, function.name);
    }

    #[test]
    fn test_projection_is_idempotent() {
        let function = protect();
        assert_eq!(
            FunctionTransfer::from(&function),
            FunctionTransfer::from(&function)
        );
    }

    #[test]
    fn test_wire_shape_drops_description() {
        let transfer = FunctionTransfer::from(&protect());
        let value = serde_json::to_value(&transfer).unwrap();

        let object = value.as_object().unwrap();
        assert_eq!(object.len(), 3);
        assert_eq!(object["id"], 2);
        assert_eq!(object["codigo"], "PR");
        assert_eq!(object["nome"], "Protect");
        assert!(!object.contains_key("description"));
    }

    #[test]
    fn test_absent_code_serializes_as_null() {
        let function = Function {
            id: 9,
            code: None,
            name: None,
            description: None,
        };
        let value = serde_json::to_value(FunctionTransfer::from(&function)).unwrap();
        assert!(value["codigo"].is_null());
        assert!(value["nome"].is_null());
    }
}
