use std::env;

/// Application configuration loaded from environment variables.
///
/// The configuration is passed explicitly into the storage factory rather
/// than read ambiently by the backends.
#[derive(Debug, Clone)]
pub struct Config {
    /// Storage connection descriptor (default: empty).
    ///
    /// A descriptor starting with `postgres` selects the Postgres backend;
    /// anything else falls back to the embedded SQLite backend.
    pub database_url: String,
    /// Path to the SQLite database file (default: "todos.db").
    pub sqlite_path: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `DATABASE_URL` - Storage connection descriptor (default: empty)
    /// - `SQLITE_PATH` - SQLite database path (default: "todos.db")
    pub fn from_env() -> Self {
        Self {
            database_url: env::var("DATABASE_URL").unwrap_or_default(),
            sqlite_path: env::var("SQLITE_PATH").unwrap_or_else(|_| "todos.db".to_string()),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
