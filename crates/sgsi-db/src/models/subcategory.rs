//! Subcategory model: specific controls/outcomes within a category.
//!
//! A subcategory stores the two numbers that make up its display code.
//! The function it rolls up to is never stored on the row; it is resolved
//! by an explicit read-time join ([`Subcategory::with_ancestors`]) so the
//! navigation can never go stale.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use sgsi_core::{CategoryId, SubcategoryId};

use crate::models::function::Function;
use crate::schema;

/// A subcategory row. Belongs to exactly one category.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize, Deserialize)]
pub struct Subcategory {
    /// Store-assigned identifier.
    pub id: i32,

    /// Foreign key to the owning category.
    pub category_id: i32,

    /// Number of the owning category within its function.
    pub category_number: i32,

    /// Number of this subcategory within its category.
    pub subcategory_number: i32,
}

/// A subcategory joined with its ancestor chain at read time.
///
/// `function` is resolved through the owning category when the row is
/// fetched with [`Subcategory::with_ancestors`]; it is `None` when the
/// ancestors cannot be resolved or when the view was built without them.
/// Callers formatting display codes must tolerate the unpopulated state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubcategoryView {
    /// The subcategory row itself.
    pub subcategory: Subcategory,

    /// The function the subcategory rolls up to, if resolved.
    pub function: Option<Function>,
}

impl SubcategoryView {
    /// Canonical display code for this view. See [`crate::codes::display_code`].
    #[must_use]
    pub fn display_code(&self) -> String {
        crate::codes::display_code(Some(self))
    }
}

/// Request to create a new subcategory under a category.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateSubcategory {
    /// Owning category.
    pub category_id: CategoryId,

    /// Number of the owning category within its function.
    pub category_number: i32,

    /// Number of this subcategory within its category.
    pub subcategory_number: i32,
}

/// Request to update a subcategory's numbers. `None` fields are left unchanged.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateSubcategory {
    /// New category number.
    pub category_number: Option<i32>,

    /// New subcategory number.
    pub subcategory_number: Option<i32>,
}

/// Flat row shape produced by the ancestor join.
#[derive(Debug, FromRow)]
struct AncestorRow {
    id: i32,
    category_id: i32,
    category_number: i32,
    subcategory_number: i32,
    function_id: Option<i32>,
    function_code: Option<String>,
    function_name: Option<String>,
    function_description: Option<String>,
}

impl From<AncestorRow> for SubcategoryView {
    fn from(row: AncestorRow) -> Self {
        let function = row.function_id.map(|id| Function {
            id,
            code: row.function_code,
            name: row.function_name,
            description: row.function_description,
        });
        Self {
            subcategory: Subcategory {
                id: row.id,
                category_id: row.category_id,
                category_number: row.category_number,
                subcategory_number: row.subcategory_number,
            },
            function,
        }
    }
}

fn select_columns() -> String {
    use crate::schema::subcategories as cols;
    [
        schema::select_as(cols::ID, "id"),
        schema::select_as(cols::CATEGORY, "category_id"),
        schema::select_as(cols::CATEGORY_NUMBER, "category_number"),
        schema::select_as(cols::SUBCATEGORY_NUMBER, "subcategory_number"),
    ]
    .join(", ")
}

impl Subcategory {
    /// Find a subcategory by ID.
    pub async fn find_by_id(
        pool: &sqlx::PgPool,
        id: SubcategoryId,
    ) -> Result<Option<Self>, sqlx::Error> {
        let sql = format!(
            "SELECT {cols} FROM {table} WHERE \"{id_col}\" = $1",
            cols = select_columns(),
            table = schema::qualified(schema::subcategories::TABLE),
            id_col = schema::subcategories::ID,
        );
        sqlx::query_as(&sql)
            .bind(id.as_i32())
            .fetch_optional(pool)
            .await
    }

    /// List the subcategories owned by a category, ordered by number.
    ///
    /// This is the Category → Subcategories navigation, resolved at read time.
    pub async fn list_by_category(
        pool: &sqlx::PgPool,
        category_id: CategoryId,
    ) -> Result<Vec<Self>, sqlx::Error> {
        use crate::schema::subcategories as cols;
        let sql = format!(
            "SELECT {columns} FROM {table} WHERE \"{fk}\" = $1 ORDER BY \"{num}\"",
            columns = select_columns(),
            table = schema::qualified(cols::TABLE),
            fk = cols::CATEGORY,
            num = cols::SUBCATEGORY_NUMBER,
        );
        sqlx::query_as(&sql)
            .bind(category_id.as_i32())
            .fetch_all(pool)
            .await
    }

    /// Fetch a subcategory together with its ancestor chain.
    ///
    /// Joins through the owning category up to the function in a single
    /// query. The join is outer on purpose: a subcategory whose ancestors
    /// cannot be resolved still comes back, with `function` unpopulated,
    /// so display-code formatting can degrade instead of failing.
    pub async fn with_ancestors(
        pool: &sqlx::PgPool,
        id: SubcategoryId,
    ) -> Result<Option<SubcategoryView>, sqlx::Error> {
        use crate::schema::{categories, functions, subcategories};
        let sql = format!(
            "SELECT \
               s.\"{s_id}\" AS \"id\", \
               s.\"{s_cat}\" AS \"category_id\", \
               s.\"{s_catnum}\" AS \"category_number\", \
               s.\"{s_subnum}\" AS \"subcategory_number\", \
               f.\"{f_id}\" AS \"function_id\", \
               f.\"{f_code}\" AS \"function_code\", \
               f.\"{f_name}\" AS \"function_name\", \
               f.\"{f_desc}\" AS \"function_description\" \
             FROM {s_table} s \
             LEFT JOIN {c_table} c ON c.\"{c_id}\" = s.\"{s_cat}\" \
             LEFT JOIN {f_table} f ON f.\"{f_id}\" = c.\"{c_fk}\" \
             WHERE s.\"{s_id}\" = $1",
            s_table = schema::qualified(subcategories::TABLE),
            c_table = schema::qualified(categories::TABLE),
            f_table = schema::qualified(functions::TABLE),
            s_id = subcategories::ID,
            s_cat = subcategories::CATEGORY,
            s_catnum = subcategories::CATEGORY_NUMBER,
            s_subnum = subcategories::SUBCATEGORY_NUMBER,
            c_id = categories::ID,
            c_fk = categories::FUNCTION,
            f_id = functions::ID,
            f_code = functions::CODE,
            f_name = functions::NAME,
            f_desc = functions::DESCRIPTION,
        );
        let row: Option<AncestorRow> = sqlx::query_as(&sql)
            .bind(id.as_i32())
            .fetch_optional(pool)
            .await?;
        Ok(row.map(SubcategoryView::from))
    }

    /// Create a new subcategory. The store enforces that the owning
    /// category exists; a dangling `category_id` surfaces as a constraint
    /// error.
    pub async fn create(
        pool: &sqlx::PgPool,
        input: CreateSubcategory,
    ) -> Result<Self, sqlx::Error> {
        use crate::schema::subcategories as cols;
        let sql = format!(
            "INSERT INTO {table} (\"{fk}\", \"{catnum}\", \"{subnum}\") \
             VALUES ($1, $2, $3) RETURNING {ret}",
            table = schema::qualified(cols::TABLE),
            fk = cols::CATEGORY,
            catnum = cols::CATEGORY_NUMBER,
            subnum = cols::SUBCATEGORY_NUMBER,
            ret = select_columns(),
        );
        sqlx::query_as(&sql)
            .bind(input.category_id.as_i32())
            .bind(input.category_number)
            .bind(input.subcategory_number)
            .fetch_one(pool)
            .await
    }

    /// Update a subcategory's numbers. Returns the updated row, or `None`
    /// if absent.
    pub async fn update(
        pool: &sqlx::PgPool,
        id: SubcategoryId,
        input: UpdateSubcategory,
    ) -> Result<Option<Self>, sqlx::Error> {
        use crate::schema::subcategories as cols;

        let mut updates = Vec::new();
        let mut param_idx = 2;

        if input.category_number.is_some() {
            updates.push(format!("\"{}\" = ${param_idx}", cols::CATEGORY_NUMBER));
            param_idx += 1;
        }
        if input.subcategory_number.is_some() {
            updates.push(format!("\"{}\" = ${param_idx}", cols::SUBCATEGORY_NUMBER));
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

        let mut q = sqlx::query_as::<_, Subcategory>(&sql).bind(id.as_i32());

        if let Some(category_number) = input.category_number {
            q = q.bind(category_number);
        }
        if let Some(subcategory_number) = input.subcategory_number {
            q = q.bind(subcategory_number);
        }

        q.fetch_optional(pool).await
    }

    /// Delete a subcategory. Returns `true` if a row was removed.
    pub async fn delete(pool: &sqlx::PgPool, id: SubcategoryId) -> Result<bool, sqlx::Error> {
        let sql = format!(
            "DELETE FROM {table} WHERE \"{id_col}\" = $1",
            table = schema::qualified(schema::subcategories::TABLE),
            id_col = schema::subcategories::ID,
        );
        let result = sqlx::query(&sql).bind(id.as_i32()).execute(pool).await?;
        Ok(result.rows_affected() > 0)
    }
}
