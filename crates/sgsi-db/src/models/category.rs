//! Category model: groupings within a CSF function.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use sgsi_core::{CategoryId, FunctionId};

use crate::schema;

/// A category row. Belongs to exactly one function.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize, Deserialize)]
pub struct Category {
    /// Store-assigned identifier.
    pub id: i32,

    /// Category code, e.g. `"ID.AM"` for Asset Management.
    pub code: Option<String>,

    /// Display name.
    pub name: Option<String>,

    /// Long description.
    pub description: Option<String>,

    /// Foreign key to the owning function.
    pub function_id: i32,
}

/// Request to create a new category under a function.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateCategory {
    /// Owning function.
    pub function_id: FunctionId,

    /// Category code.
    pub code: Option<String>,

    /// Display name.
    pub name: Option<String>,

    /// Long description.
    pub description: Option<String>,
}

/// Request to update a category. `None` fields are left unchanged.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateCategory {
    /// New category code.
    pub code: Option<String>,

    /// New display name.
    pub name: Option<String>,

    /// New description.
    pub description: Option<String>,
}

fn select_columns() -> String {
    use crate::schema::categories as cols;
    [
        schema::select_as(cols::ID, "id"),
        schema::select_as(cols::CODE, "code"),
        schema::select_as(cols::NAME, "name"),
        schema::select_as(cols::DESCRIPTION, "description"),
        schema::select_as(cols::FUNCTION, "function_id"),
    ]
    .join(", ")
}

impl Category {
    /// Find a category by ID.
    pub async fn find_by_id(
        pool: &sqlx::PgPool,
        id: CategoryId,
    ) -> Result<Option<Self>, sqlx::Error> {
        let sql = format!(
            "SELECT {cols} FROM {table} WHERE \"{id_col}\" = $1",
            cols = select_columns(),
            table = schema::qualified(schema::categories::TABLE),
            id_col = schema::categories::ID,
        );
        sqlx::query_as(&sql)
            .bind(id.as_i32())
            .fetch_optional(pool)
            .await
    }

    /// List the categories owned by a function, ordered by code.
    ///
    /// This is the Function → Categories navigation, resolved at read time.
    pub async fn list_by_function(
        pool: &sqlx::PgPool,
        function_id: FunctionId,
    ) -> Result<Vec<Self>, sqlx::Error> {
        use crate::schema::categories as cols;
        let sql = format!(
            "SELECT {columns} FROM {table} WHERE \"{fk}\" = $1 ORDER BY \"{code}\"",
            columns = select_columns(),
            table = schema::qualified(cols::TABLE),
            fk = cols::FUNCTION,
            code = cols::CODE,
        );
        sqlx::query_as(&sql)
            .bind(function_id.as_i32())
            .fetch_all(pool)
            .await
    }

    /// Create a new category. The store enforces that the owning function
    /// exists; a dangling `function_id` surfaces as a constraint error.
    pub async fn create(
        pool: &sqlx::PgPool,
        input: CreateCategory,
    ) -> Result<Self, sqlx::Error> {
        use crate::schema::categories as cols;
        let sql = format!(
            "INSERT INTO {table} (\"{code}\", \"{name}\", \"{desc}\", \"{fk}\") \
             VALUES ($1, $2, $3, $4) RETURNING {ret}",
            table = schema::qualified(cols::TABLE),
            code = cols::CODE,
            name = cols::NAME,
            desc = cols::DESCRIPTION,
            fk = cols::FUNCTION,
            ret = select_columns(),
        );
        sqlx::query_as(&sql)
            .bind(&input.code)
            .bind(&input.name)
            .bind(&input.description)
            .bind(input.function_id.as_i32())
            .fetch_one(pool)
            .await
    }

    /// Update a category. Returns the updated row, or `None` if absent.
    pub async fn update(
        pool: &sqlx::PgPool,
        id: CategoryId,
        input: UpdateCategory,
    ) -> Result<Option<Self>, sqlx::Error> {
        use crate::schema::categories as cols;

        let mut updates = Vec::new();
        let mut param_idx = 2;

        if input.code.is_some() {
            updates.push(format!("\"{}\" = ${param_idx}", cols::CODE));
            param_idx += 1;
        }
        if input.name.is_some() {
            updates.push(format!("\"{}\" = ${param_idx}", cols::NAME));
            param_idx += 1;
        }
        if input.description.is_some() {
            updates.push(format!("\"{}\" = ${param_idx}", cols::DESCRIPTION));
            // param_idx += 1;
        }

        if updates.is_empty() {
            return Self::find_by_id(pool, id).await;
        }

        let sql = format!(
            "UPDATE {table} SET {updates} WHERE \"{id_col}\" = $1 RETURNING {ret}",
            table = schema::qualified(cols::TABLE),
            updates = updates.join(", "),
            id_col = cols::ID,
            ret = select_columns(),
        );

        let mut q = sqlx::query_as::<_, Category>(&sql).bind(id.as_i32());

        if let Some(ref code) = input.code {
            q = q.bind(code);
        }
        if let Some(ref name) = input.name {
            q = q.bind(name);
        }
        if let Some(ref description) = input.description {
            q = q.bind(description);
        }

        q.fetch_optional(pool).await
    }

    /// Delete a category. Returns `true` if a row was removed.
    pub async fn delete(pool: &sqlx::PgPool, id: CategoryId) -> Result<bool, sqlx::Error> {
        let sql = format!(
            "DELETE FROM {table} WHERE \"{id_col}\" = $1",
            table = schema::qualified(schema::categories::TABLE),
            id_col = schema::categories::ID,
        );
        let result = sqlx::query(&sql).bind(id.as_i32()).execute(pool).await?;
        Ok(result.rows_affected() > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_category_input() {
        let input = CreateCategory {
            function_id: FunctionId::from_i32(1),
            code: Some("ID.AM".to_string()),
            name: Some("Asset Management".to_string()),
            description: None,
        };

        assert_eq!(input.function_id.as_i32(), 1);
        assert_eq!(input.code.as_deref(), Some("ID.AM"));
    }

    #[test]
    fn test_select_columns_include_function_fk() {
        assert!(select_columns().contains("\"FUNCAO\" AS \"function_id\""));
    }
}
