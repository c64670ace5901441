//! Error types for the sgsi-db crate.
//!
//! Provides a unified error type that wraps `SQLx` errors with additional context.

use thiserror::Error;

/// Database operation errors.
///
/// Model queries return raw [`sqlx::Error`] so that store-side mapping and
/// constraint violations reach the caller untranslated; this enum covers the
/// crate's own failure points (opening a session, reading configuration) and
/// gives downstream consumers a place to classify lookups.
///
/// # Example
///
/// ```rust
/// use sgsi_db::DbError;
///
/// fn handle_error(err: DbError) {
///     match err {
///         DbError::ConnectionFailed(e) => eprintln!("Cannot connect: {}", e),
///         DbError::QueryFailed(e) => eprintln!("Query error: {}", e),
///         DbError::NotFound(msg) => eprintln!("Not found: {}", msg),
///         DbError::MissingConfiguration(entry) => eprintln!("Missing config: {}", entry),
///     }
/// }
/// ```
#[derive(Debug, Error)]
pub enum DbError {
    /// Failed to establish or acquire a database session.
    ///
    /// This typically indicates network issues, invalid credentials,
    /// or the database server being unavailable.
    #[error("Database connection failed: {0}")]
    ConnectionFailed(#[source] sqlx::Error),

    /// A database query failed to execute.
    ///
    /// This can indicate SQL syntax errors, constraint violations,
    /// or issues with the query parameters.
    #[error("Query failed: {0}")]
    QueryFailed(#[source] sqlx::Error),

    /// Resource not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// A required configuration entry was absent at startup.
    ///
    /// Provide the named connection-string entry before opening a session.
    #[error("Missing configuration entry: {0}")]
    MissingConfiguration(&'static str),
}

impl DbError {
    /// Check if this error indicates a connection problem.
    #[must_use]
    pub fn is_connection_error(&self) -> bool {
        matches!(self, DbError::ConnectionFailed(_))
    }

    /// Check if this error indicates a query problem.
    #[must_use]
    pub fn is_query_error(&self) -> bool {
        matches!(self, DbError::QueryFailed(_))
    }

    /// Check if this error indicates a not found error.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, DbError::NotFound(_))
    }

    /// Check if this error indicates missing configuration.
    #[must_use]
    pub fn is_missing_configuration(&self) -> bool {
        matches!(self, DbError::MissingConfiguration(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_missing_configuration() {
        let err = DbError::MissingConfiguration("SGSI_DATABASE_URL");
        assert_eq!(
            err.to_string(),
            "Missing configuration entry: SGSI_DATABASE_URL"
        );
    }

    #[test]
    fn test_error_display_not_found() {
        let err = DbError::NotFound("function 99".to_string());
        assert_eq!(err.to_string(), "Not found: function 99");
    }

    #[test]
    fn test_is_missing_configuration() {
        let err = DbError::MissingConfiguration("SGSI_DATABASE_URL");
        assert!(err.is_missing_configuration());
        assert!(!err.is_connection_error());
        assert!(!err.is_query_error());
        assert!(!err.is_not_found());
    }

    #[test]
    fn test_is_not_found() {
        let err = DbError::NotFound("subcategory 42".to_string());
        assert!(err.is_not_found());
        assert!(!err.is_missing_configuration());
    }
}
