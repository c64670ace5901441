//! Function model: the top level of the CSF reference hierarchy.
//!
//! Functions (Identify, Protect, Detect, Respond, Recover) own categories.
//! Rows are passive records; every field is store-provided and all
//! constraints are enforced by the store, not here.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use sgsi_core::FunctionId;

use crate::schema;

/// A CSF function row.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize, Deserialize)]
pub struct Function {
    /// Store-assigned identifier.
    pub id: i32,

    /// Short function code, e.g. `"ID"` for Identify.
    pub code: Option<String>,

    /// Display name.
    pub name: Option<String>,

    /// Long description.
    pub description: Option<String>,
}

/// Request to create a new function.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateFunction {
    /// Short function code, e.g. `"PR"`.
    pub code: Option<String>,

    /// Display name.
    pub name: Option<String>,

    /// Long description.
    pub description: Option<String>,
}

/// Request to update a function. `None` fields are left unchanged.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateFunction {
    /// New function code.
    pub code: Option<String>,

    /// New display name.
    pub name: Option<String>,

    /// New description.
    pub description: Option<String>,
}

fn select_columns() -> String {
    use crate::schema::functions as cols;
    [
        schema::select_as(cols::ID, "id"),
        schema::select_as(cols::CODE, "code"),
        schema::select_as(cols::NAME, "name"),
        schema::select_as(cols::DESCRIPTION, "description"),
    ]
    .join(", ")
}

impl Function {
    /// Find a function by ID.
    pub async fn find_by_id(
        pool: &sqlx::PgPool,
        id: FunctionId,
    ) -> Result<Option<Self>, sqlx::Error> {
        let sql = format!(
            "SELECT {cols} FROM {table} WHERE \"{id_col}\" = $1",
            cols = select_columns(),
            table = schema::qualified(schema::functions::TABLE),
            id_col = schema::functions::ID,
        );
        sqlx::query_as(&sql)
            .bind(id.as_i32())
            .fetch_optional(pool)
            .await
    }

    /// Find a function by its short code.
    pub async fn find_by_code(
        pool: &sqlx::PgPool,
        code: &str,
    ) -> Result<Option<Self>, sqlx::Error> {
        let sql = format!(
            "SELECT {cols} FROM {table} WHERE \"{code_col}\" = $1",
            cols = select_columns(),
            table = schema::qualified(schema::functions::TABLE),
            code_col = schema::functions::CODE,
        );
        sqlx::query_as(&sql).bind(code).fetch_optional(pool).await
    }

    /// List all functions ordered by code.
    pub async fn list(pool: &sqlx::PgPool) -> Result<Vec<Self>, sqlx::Error> {
        let sql = format!(
            "SELECT {cols} FROM {table} ORDER BY \"{code_col}\"",
            cols = select_columns(),
            table = schema::qualified(schema::functions::TABLE),
            code_col = schema::functions::CODE,
        );
        sqlx::query_as(&sql).fetch_all(pool).await
    }

    /// Create a new function. The store assigns the identifier.
    pub async fn create(
        pool: &sqlx::PgPool,
        input: CreateFunction,
    ) -> Result<Self, sqlx::Error> {
        use crate::schema::functions as cols;
        let sql = format!(
            "INSERT INTO {table} (\"{code}\", \"{name}\", \"{desc}\") \
             VALUES ($1, $2, $3) RETURNING {ret}",
            table = schema::qualified(cols::TABLE),
            code = cols::CODE,
            name = cols::NAME,
            desc = cols::DESCRIPTION,
            ret = select_columns(),
        );
        sqlx::query_as(&sql)
            .bind(&input.code)
            .bind(&input.name)
            .bind(&input.description)
            .fetch_one(pool)
            .await
    }

    /// Update a function. Returns the updated row, or `None` if absent.
    pub async fn update(
        pool: &sqlx::PgPool,
        id: FunctionId,
        input: UpdateFunction,
    ) -> Result<Option<Self>, sqlx::Error> {
        use crate::schema::functions as cols;

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

        let mut q = sqlx::query_as::<_, Function>(&sql).bind(id.as_i32());

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

    /// Delete a function. Returns `true` if a row was removed.
    pub async fn delete(pool: &sqlx::PgPool, id: FunctionId) -> Result<bool, sqlx::Error> {
        let sql = format!(
            "DELETE FROM {table} WHERE \"{id_col}\" = $1",
            table = schema::qualified(schema::functions::TABLE),
            id_col = schema::functions::ID,
        );
        let result = sqlx::query(&sql).bind(id.as_i32()).execute(pool).await?;
        Ok(result.rows_affected() > 0)
    }
}
