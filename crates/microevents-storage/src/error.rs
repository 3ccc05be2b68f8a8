// sqlx error classification

use microevents_core::StoreError;

// Postgres query_canceled, raised when statement_timeout fires
const QUERY_CANCELED: &str = "57014";

/// Translate a sqlx error into a `StoreError`.
pub fn map_sqlx_error(err: sqlx::Error) -> StoreError {
    match err {
        sqlx::Error::Database(db) => {
            if db.is_unique_violation() || db.is_check_violation() || db.is_foreign_key_violation()
            {
                StoreError::Constraint(db.message().to_string())
            } else if db.code().as_deref() == Some(QUERY_CANCELED) {
                StoreError::Timeout(db.message().to_string())
            } else {
                StoreError::Database(db.message().to_string())
            }
        }
        sqlx::Error::PoolTimedOut => StoreError::Timeout(err.to_string()),
        sqlx::Error::Io(_)
        | sqlx::Error::Tls(_)
        | sqlx::Error::PoolClosed
        | sqlx::Error::WorkerCrashed => StoreError::Unavailable(err.to_string()),
        other => StoreError::Database(other.to_string()),
    }
}
