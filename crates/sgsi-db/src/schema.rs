//! Store binding for the SGSI reference schema.
//!
//! The external store owns the schema. Table and column names are fixed
//! uppercase identifiers and must match exactly for row mapping to bind,
//! so every binding string lives here and the model types stay free of
//! store metadata. Queries quote all identifiers; PostgreSQL would
//! otherwise fold them to lowercase.

/// Schema namespace that owns the three reference tables.
pub const SCHEMA: &str = "SGSI";

/// Column bindings for the functions table.
pub mod functions {
    pub const TABLE: &str = "FUNCOES";
    pub const ID: &str = "ID";
    pub const CODE: &str = "CODIGO";
    pub const NAME: &str = "NOME";
    pub const DESCRIPTION: &str = "DESCRICAO";
}

/// Column bindings for the categories table.
pub mod categories {
    pub const TABLE: &str = "CATEGORIAS";
    pub const ID: &str = "ID";
    pub const CODE: &str = "CODIGO";
    pub const NAME: &str = "NOME";
    pub const DESCRIPTION: &str = "DESCRICAO";
    /// Foreign key to the owning function.
    pub const FUNCTION: &str = "FUNCAO";
}

/// Column bindings for the subcategories table.
pub mod subcategories {
    pub const TABLE: &str = "SUBCATEGORIAS";
    pub const ID: &str = "ID";
    /// Foreign key to the owning category.
    pub const CATEGORY: &str = "CATEGORIA";
    pub const CATEGORY_NUMBER: &str = "NUM_CATEGORIA";
    pub const SUBCATEGORY_NUMBER: &str = "NUM_SUBCATEGORIA";
}

/// Schema-qualified, quoted table reference, e.g. `"SGSI"."FUNCOES"`.
#[must_use]
pub fn qualified(table: &str) -> String {
    format!("\"{SCHEMA}\".\"{table}\"")
}

/// One quoted `<column> AS "<field>"` select item, aliasing a store
/// column to the Rust field name row mapping expects.
#[must_use]
pub fn select_as(column: &str, field: &str) -> String {
    format!("\"{column}\" AS \"{field}\"")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_qualified_quotes_schema_and_table() {
        assert_eq!(qualified(functions::TABLE), "\"SGSI\".\"FUNCOES\"");
    }

    #[test]
    fn test_select_as_aliases_to_field_name() {
        assert_eq!(
            select_as(functions::CODE, "code"),
            "\"CODIGO\" AS \"code\""
        );
    }

    #[test]
    fn test_column_names_are_the_fixed_store_identifiers() {
        assert_eq!(functions::ID, "ID");
        assert_eq!(functions::CODE, "CODIGO");
        assert_eq!(functions::NAME, "NOME");
        assert_eq!(functions::DESCRIPTION, "DESCRICAO");
        assert_eq!(categories::FUNCTION, "FUNCAO");
    }
}
