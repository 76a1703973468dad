//! Postgres error mapping.
//!
//! Maps `sqlx::Error` to `RepositoryError` from `tada_core::storage`. The
//! repository uses `fetch_optional` and decides not-found itself, so
//! `RowNotFound` carries no id here.

use tada_core::storage::RepositoryError;

/// Maps a sqlx error to a RepositoryError.
pub fn map_sqlx_error(err: sqlx::Error) -> RepositoryError {
    match err {
        sqlx::Error::RowNotFound => RepositoryError::NotFound {
            entity_type: "Todo",
            id: "unknown".to_string(),
        },

        sqlx::Error::Configuration(_) | sqlx::Error::Io(_) | sqlx::Error::PoolTimedOut => {
            RepositoryError::ConnectionFailed(err.to_string())
        }

        sqlx::Error::ColumnDecode { .. } | sqlx::Error::Decode(_) => {
            RepositoryError::InvalidData(err.to_string())
        }

        sqlx::Error::Database(db_err) => RepositoryError::QueryFailed(db_err.to_string()),

        _ => RepositoryError::QueryFailed(err.to_string()),
    }
}
