//! Connection pooling for the external store.
//!
//! Wraps the `SQLx` PostgreSQL pool behind a small handle so callers
//! acquire, use, and release sessions without touching pool internals.

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

use crate::error::DbError;

/// Default maximum number of sessions held by the pool.
const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// A handle to the store connection pool.
///
/// Cloning is cheap; clones share the same underlying pool.
///
/// # Example
///
/// ```rust,ignore
/// use sgsi_db::DbPool;
///
/// let pool = DbPool::connect("postgres://localhost/sgsi").await?;
/// let row: (i32,) = sqlx::query_as("SELECT 1").fetch_one(pool.inner()).await?;
/// pool.close().await;
/// ```
#[derive(Debug, Clone)]
pub struct DbPool {
    inner: PgPool,
}

impl DbPool {
    /// Opens a pool against the given connection string.
    ///
    /// # Errors
    ///
    /// Returns [`DbError::ConnectionFailed`] when the store is unreachable,
    /// the credentials are rejected, or the connection string is malformed.
    pub async fn connect(url: &str) -> Result<Self, DbError> {
        tracing::debug!("opening connection pool against the SGSI store");

        let inner = PgPoolOptions::new()
            .max_connections(DEFAULT_MAX_CONNECTIONS)
            .connect(url)
            .await
            .map_err(DbError::ConnectionFailed)?;

        tracing::info!("store connection pool ready");
        Ok(Self { inner })
    }

    /// Returns the underlying `SQLx` pool for query execution.
    #[must_use]
    pub fn inner(&self) -> &PgPool {
        &self.inner
    }

    /// Whether the pool has been closed.
    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.inner.is_closed()
    }

    /// Closes the pool, releasing every session.
    pub async fn close(&self) {
        self.inner.close().await;
        tracing::info!("store connection pool closed");
    }
}

#[cfg(test)]
mod tests {
    // Pool behavior requires a real database; covered by the
    // connectivity integration test.
}
