//! Storage error kinds
//!
//! Every repository call returns `Result<_, DbError>`; nothing is swallowed.
//! The variants are coarse enough for the HTTP layer to pick 503 / 409 /
//! 404 / 500 without inspecting driver internals.

use sqlx::error::ErrorKind;

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    /// Pool exhausted or closed, connection dropped, TLS failure
    #[error("database unavailable: {0}")]
    Unavailable(#[source] sqlx::Error),

    /// Unique, foreign-key, not-null or check constraint rejected the write
    #[error("constraint '{constraint}' violated: {message}")]
    Constraint { constraint: String, message: String },

    #[error("not found: {resource} '{id}'")]
    NotFound { resource: &'static str, id: String },

    #[error("database error: {0}")]
    Query(#[source] sqlx::Error),
}

impl From<sqlx::Error> for DbError {
    fn from(e: sqlx::Error) -> Self {
        if is_connection_failure(&e) {
            return Self::Unavailable(e);
        }

        if let Some(db) = e.as_database_error() {
            if matches!(
                db.kind(),
                ErrorKind::UniqueViolation
                    | ErrorKind::ForeignKeyViolation
                    | ErrorKind::NotNullViolation
                    | ErrorKind::CheckViolation
            ) {
                return Self::Constraint {
                    constraint: db.constraint().unwrap_or("unknown").to_owned(),
                    message: db.message().to_owned(),
                };
            }
        }

        Self::Query(e)
    }
}

fn is_connection_failure(e: &sqlx::Error) -> bool {
    matches!(
        e,
        sqlx::Error::PoolTimedOut
            | sqlx::Error::PoolClosed
            | sqlx::Error::Io(_)
            | sqlx::Error::Tls(_)
            | sqlx::Error::WorkerCrashed
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pool_timeout_is_unavailable() {
        let err = DbError::from(sqlx::Error::PoolTimedOut);
        assert!(matches!(err, DbError::Unavailable(_)));
    }

    #[test]
    fn io_error_is_unavailable() {
        let io = std::io::Error::new(std::io::ErrorKind::ConnectionRefused, "refused");
        let err = DbError::from(sqlx::Error::Io(io));
        assert!(matches!(err, DbError::Unavailable(_)));
    }

    #[test]
    fn other_errors_are_query_errors() {
        let err = DbError::from(sqlx::Error::RowNotFound);
        assert!(matches!(err, DbError::Query(_)));
    }
}
