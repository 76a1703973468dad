use async_trait::async_trait;

use crate::todo::Todo;

use super::Result;

/// Repository for todo operations.
///
/// Implemented once per storage engine. Each method acquires whatever
/// connection scope the engine needs and releases it before returning,
/// on both success and failure paths.
#[async_trait]
pub trait TodoRepository: Send + Sync {
    /// Lists all todos, newest first (ordered by `created_at` descending).
    async fn list_todos(&self) -> Result<Vec<Todo>>;

    /// Creates a new todo with the given title.
    ///
    /// The repository generates the id and creation timestamp and returns
    /// the persisted row. Callers are expected to have validated the title.
    async fn create_todo(&self, title: &str) -> Result<Todo>;

    /// Flips the `completed` flag of the todo with the given id and
    /// returns the updated row.
    ///
    /// Returns [`RepositoryError::NotFound`] when no row matches. Note
    /// that the check-then-act sequence is not atomic against a concurrent
    /// delete of the same id.
    ///
    /// [`RepositoryError::NotFound`]: super::RepositoryError::NotFound
    async fn toggle_todo(&self, id: &str) -> Result<Todo>;

    /// Deletes the todo with the given id and returns the id.
    ///
    /// Returns [`RepositoryError::NotFound`] when no row existed prior to
    /// the delete.
    ///
    /// [`RepositoryError::NotFound`]: super::RepositoryError::NotFound
    async fn delete_todo(&self, id: &str) -> Result<String>;
}
