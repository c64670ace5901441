//! Store connectivity smoke test.
//!
//! Verifies that the configured connection string can open a live session
//! against the store. This is a binary check: unreachable store, bad
//! credentials, or a missing schema all fail the test outright, with no
//! retry.
//!
//! Requires a running PostgreSQL instance provisioned via
//! docker/postgres/init.sql. Run with:
//! `cargo test -p sgsi-db --features integration`

#![cfg(feature = "integration")]

mod common;

use sgsi_db::DbPool;

#[tokio::test]
async fn probe_opens_and_closes_a_session() {
    common::init_test_logging();

    let pool = DbPool::connect(&common::database_url())
        .await
        .expect("Failed to open a session against the store");

    assert!(!pool.is_closed(), "session should report open after connect");

    let row: (i32,) = sqlx::query_as("SELECT 1")
        .fetch_one(pool.inner())
        .await
        .expect("Failed to execute probe query");
    assert_eq!(row.0, 1);

    pool.close().await;
    assert!(pool.is_closed(), "session should report closed after close");
}

#[tokio::test]
async fn reference_schema_is_provisioned() {
    let ctx = common::TestContext::new().await;

    // All three reference tables must exist and be readable.
    for table in ["FUNCOES", "CATEGORIAS", "SUBCATEGORIAS"] {
        let sql = format!("SELECT COUNT(*) FROM \"SGSI\".\"{table}\"");
        let result: Result<(i64,), _> = sqlx::query_as(&sql).fetch_one(ctx.pool.inner()).await;
        assert!(result.is_ok(), "{table} table should exist");
    }
}
