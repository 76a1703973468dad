//! Application state with repository-based storage.
//!
//! This module defines the shared application state that is passed to all
//! request handlers. It holds the repository trait object selected at
//! startup by the storage module.

use std::sync::Arc;

use tada_core::storage::TodoRepository;

/// Shared application state.
///
/// Cloned for each request handler. The backend behind `todo_repo` is
/// chosen once at startup; handlers never branch on the engine.
#[derive(Clone)]
pub struct AppState {
    /// Todo repository (SQLite or Postgres, selected at startup).
    pub todo_repo: Arc<dyn TodoRepository>,
}

impl AppState {
    /// Creates a new AppState with the given repository.
    pub fn new(todo_repo: Arc<dyn TodoRepository>) -> Self {
        Self { todo_repo }
    }
}

#[cfg(test)]
impl AppState {
    /// Creates an AppState backed by an in-memory SQLite database.
    ///
    /// Data is lost when the state is dropped.
    pub async fn in_memory() -> Self {
        use crate::storage::sqlite::SqliteRepository;

        let repo = SqliteRepository::new_in_memory()
            .await
            .expect("in-memory SQLite repository should open");
        Self::new(Arc::new(repo))
    }
}
