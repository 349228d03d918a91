//! Store error types
//!
//! Error codes:
//! - APPT_STORE_SQL_ERROR
//! - APPT_STORE_UNSUPPORTED_URL

use thiserror::Error;

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Record store errors
#[derive(Debug, Error)]
pub enum StoreError {
    /// The driver rejected a statement or the connection failed
    #[error("SQL error: {0}")]
    Sql(#[from] sqlx::Error),

    /// The connection string names a backend this build cannot open
    #[error("Unsupported database url: {0}")]
    UnsupportedUrl(String),
}

impl StoreError {
    /// Stable error code string
    pub fn code(&self) -> &'static str {
        match self {
            StoreError::Sql(_) => "APPT_STORE_SQL_ERROR",
            StoreError::UnsupportedUrl(_) => "APPT_STORE_UNSUPPORTED_URL",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(
            StoreError::UnsupportedUrl("mysql://x".into()).code(),
            "APPT_STORE_UNSUPPORTED_URL"
        );
        let sql = StoreError::from(sqlx::Error::RowNotFound);
        assert_eq!(sql.code(), "APPT_STORE_SQL_ERROR");
    }

    #[test]
    fn test_display_includes_url() {
        let err = StoreError::UnsupportedUrl("mysql://db".into());
        assert!(err.to_string().contains("mysql://db"));
    }
}
