use thiserror::Error;

/// Result type for store operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for message store operations
#[derive(Debug, Error)]
pub enum Error {
    /// Record submitted without the required `id` field
    #[error("message id is required")]
    MissingId,

    /// Status update submitted without a status value
    #[error("status is required")]
    MissingStatus,

    /// A record with the same id already exists
    #[error("message id already exists: {0}")]
    DuplicateId(String),

    /// No record matches the target id
    #[error("message not found: {0}")]
    NotFound(String),

    /// Store unreachable or authentication failure
    #[error("connection error: {0}")]
    Connection(String),

    /// Connection pool failure
    #[error("pool error: {0}")]
    Pool(String),

    /// SQL or constraint failure
    #[error("database error: {0}")]
    Database(String),

    /// Stored document failed to encode or decode
    #[error("serialization error: {0}")]
    Serialization(String),

    /// Invalid input data (connection string, port, ...)
    #[error("validation error: {0}")]
    Validation(String),
}

impl From<tokio_postgres::Error> for Error {
    fn from(err: tokio_postgres::Error) -> Self {
        if let Some(db_error) = err.as_db_error() {
            return Error::Database(format!(
                "{}: {}",
                db_error.code().code(),
                db_error.message()
            ));
        }

        // Non-database errors (I/O, protocol) carry no SQLSTATE
        Error::Database(err.to_string())
    }
}

impl From<deadpool_postgres::PoolError> for Error {
    fn from(err: deadpool_postgres::PoolError) -> Self {
        Error::Pool(err.to_string())
    }
}

impl From<deadpool_postgres::BuildError> for Error {
    fn from(err: deadpool_postgres::BuildError) -> Self {
        Error::Connection(err.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Serialization(err.to_string())
    }
}
