//! Common error types for gigbook

use thiserror::Error;

/// Common result type for gigbook operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error taxonomy shared by every store operation
#[derive(Error, Debug)]
pub enum Error {
    /// Missing or malformed required field
    #[error("Validation error: {0}")]
    Validation(String),

    /// Referenced id does not exist
    #[error("Not found: {0}")]
    NotFound(String),

    /// Foreign-key, uniqueness, NOT NULL or CHECK failure reported by the store
    #[error("Constraint violation: {0}")]
    ConstraintViolation(String),

    /// Connection or transaction infrastructure failure
    #[error("Storage fault: {0}")]
    StorageFault(sqlx::Error),

    /// I/O operation error (wraps std::io::Error)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration loading or validation error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    /// Short machine-readable code for API responses
    pub fn code(&self) -> &'static str {
        match self {
            Error::Validation(_) => "VALIDATION",
            Error::NotFound(_) => "NOT_FOUND",
            Error::ConstraintViolation(_) => "CONSTRAINT_VIOLATION",
            Error::StorageFault(_) => "STORAGE_FAULT",
            Error::Io(_) => "IO_ERROR",
            Error::Config(_) => "CONFIG_ERROR",
        }
    }
}

impl From<sqlx::Error> for Error {
    fn from(err: sqlx::Error) -> Self {
        use sqlx::error::ErrorKind;

        if let sqlx::Error::Database(db_err) = &err {
            match db_err.kind() {
                ErrorKind::ForeignKeyViolation
                | ErrorKind::UniqueViolation
                | ErrorKind::NotNullViolation
                | ErrorKind::CheckViolation => {
                    return Error::ConstraintViolation(db_err.message().to_string());
                }
                _ => {}
            }
        }

        match err {
            sqlx::Error::RowNotFound => Error::NotFound("no matching row".to_string()),
            other => Error::StorageFault(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_not_found_maps_to_not_found() {
        let err: Error = sqlx::Error::RowNotFound.into();
        assert!(matches!(err, Error::NotFound(_)));
        assert_eq!(err.code(), "NOT_FOUND");
    }

    #[test]
    fn test_pool_failure_maps_to_storage_fault() {
        let err: Error = sqlx::Error::PoolTimedOut.into();
        assert!(matches!(err, Error::StorageFault(_)));
        assert_eq!(err.code(), "STORAGE_FAULT");
    }

    #[test]
    fn test_display_includes_detail() {
        let err = Error::Validation("name is required".to_string());
        assert_eq!(err.to_string(), "Validation error: name is required");
    }
}
