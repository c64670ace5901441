//! Connection-string configuration.
//!
//! The surrounding application owns configuration loading; this crate only
//! consumes one named connection-string entry at startup. The entry is
//! conventionally keyed `SgsiDbContext` in the application's configuration
//! and reaches this crate through the `SGSI_DATABASE_URL` environment
//! variable.

use crate::error::DbError;

/// Name of the connection-string entry in the surrounding application's
/// configuration source.
pub const CONNECTION_STRING_NAME: &str = "SgsiDbContext";

/// Environment variable carrying the `SgsiDbContext` connection string.
pub const DATABASE_URL_VAR: &str = "SGSI_DATABASE_URL";

/// Reads the store connection string from the environment.
///
/// # Errors
///
/// Returns [`DbError::MissingConfiguration`] when the variable is unset or
/// not valid Unicode.
pub fn database_url() -> Result<String, DbError> {
    std::env::var(DATABASE_URL_VAR).map_err(|_| DbError::MissingConfiguration(DATABASE_URL_VAR))
}

#[cfg(test)]
mod tests {
    use super::*;

    // Single test: set/remove on the same variable must not run in
    // parallel with itself.
    #[test]
    fn test_database_url_comes_from_environment() {
        std::env::remove_var(DATABASE_URL_VAR);
        let err = database_url().unwrap_err();
        assert!(err.is_missing_configuration());

        std::env::set_var(DATABASE_URL_VAR, "postgres://localhost/sgsi");
        assert_eq!(database_url().unwrap(), "postgres://localhost/sgsi");
        std::env::remove_var(DATABASE_URL_VAR);
    }
}
