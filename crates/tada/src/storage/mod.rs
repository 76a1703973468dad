//! Storage backend implementations.
//!
//! This module provides concrete implementations of the
//! `tada_core::storage::TodoRepository` trait plus the selector that picks
//! a backend from the connection descriptor at startup.
//!
//! Both backends are always compiled in; which one runs is decided once,
//! at process start, from the configured connection descriptor. Handlers
//! only ever see the trait object.

pub mod postgres;
pub mod sqlite;

use std::sync::Arc;

use tada_core::storage::{Result, TodoRepository};

use crate::config::Config;

pub use postgres::PostgresRepository;
pub use sqlite::SqliteRepository;

/// The storage engine selected by a connection descriptor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineKind {
    /// Networked Postgres engine, reached via a connection string.
    Postgres,
    /// Embedded file-based SQLite engine.
    Sqlite,
}

impl EngineKind {
    /// Selects an engine from a connection descriptor.
    ///
    /// Pure function: a descriptor starting with `postgres` (which covers
    /// both the `postgres://` and `postgresql://` URL schemes) selects the
    /// Postgres engine. Anything else, including the empty string, falls
    /// back to SQLite without raising an error.
    pub fn from_descriptor(descriptor: &str) -> Self {
        if descriptor.starts_with("postgres") {
            EngineKind::Postgres
        } else {
            EngineKind::Sqlite
        }
    }
}

/// Builds the repository selected by the configuration.
///
/// Runs the engine's schema initialization before returning, so the todos
/// table exists by the time the first request arrives.
pub async fn connect(config: &Config) -> Result<Arc<dyn TodoRepository>> {
    match EngineKind::from_descriptor(&config.database_url) {
        EngineKind::Postgres => {
            tracing::info!("using Postgres storage backend");
            let repo = PostgresRepository::connect(&config.database_url).await?;
            Ok(Arc::new(repo))
        }
        EngineKind::Sqlite => {
            tracing::info!(path = %config.sqlite_path, "using SQLite storage backend");
            let repo = SqliteRepository::new(&config.sqlite_path).await?;
            Ok(Arc::new(repo))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_postgresql_scheme_selects_postgres() {
        assert_eq!(
            EngineKind::from_descriptor("postgresql://user:pw@localhost/todos"),
            EngineKind::Postgres
        );
    }

    #[test]
    fn test_postgres_scheme_selects_postgres() {
        assert_eq!(
            EngineKind::from_descriptor("postgres://localhost/todos"),
            EngineKind::Postgres
        );
    }

    #[test]
    fn test_empty_descriptor_falls_back_to_sqlite() {
        assert_eq!(EngineKind::from_descriptor(""), EngineKind::Sqlite);
    }

    #[test]
    fn test_unrecognized_descriptor_falls_back_to_sqlite() {
        assert_eq!(
            EngineKind::from_descriptor("mysql://localhost/todos"),
            EngineKind::Sqlite
        );
        assert_eq!(
            EngineKind::from_descriptor("not a url at all"),
            EngineKind::Sqlite
        );
    }

    #[test]
    fn test_selection_is_case_sensitive_like_the_scheme() {
        // Descriptors are matched verbatim; an upper-cased scheme is not
        // recognized and falls back to SQLite.
        assert_eq!(
            EngineKind::from_descriptor("POSTGRESQL://localhost/todos"),
            EngineKind::Sqlite
        );
    }
}
