//! SQLite repository implementation.
//!
//! Implements `tada_core::storage::TodoRepository` using an embedded
//! SQLite database. One process-wide connection is reused across requests;
//! `tokio-rusqlite` serializes access to it on a dedicated thread.

use async_trait::async_trait;
use chrono::{SecondsFormat, Utc};
use tokio_rusqlite::Connection;
use uuid::Uuid;

use tada_core::storage::{RepositoryError, Result, TodoRepository};
use tada_core::todo::Todo;

use super::conversions::row_to_todo;
use super::error::map_tokio_rusqlite_error;
use super::schema;

/// Helper to wrap rusqlite errors for tokio_rusqlite closures.
fn wrap_err(e: rusqlite::Error) -> tokio_rusqlite::Error {
    tokio_rusqlite::Error::Rusqlite(e)
}

/// SQLite-based repository implementation.
pub struct SqliteRepository {
    conn: Connection,
}

impl SqliteRepository {
    /// Creates a new repository with a file-based database.
    ///
    /// The database file will be created if it doesn't exist. The schema
    /// is created automatically and tolerates an existing table.
    pub async fn new(path: &str) -> Result<Self> {
        let conn = Connection::open(path)
            .await
            .map_err(|e| RepositoryError::ConnectionFailed(e.to_string()))?;

        Self::init_schema(&conn).await?;

        Ok(Self { conn })
    }

    /// Creates a new repository with an in-memory database.
    ///
    /// Useful for testing - data is lost when the connection is dropped.
    pub async fn new_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()
            .await
            .map_err(|e| RepositoryError::ConnectionFailed(e.to_string()))?;

        Self::init_schema(&conn).await?;

        Ok(Self { conn })
    }

    /// Initialize the database schema.
    async fn init_schema(conn: &Connection) -> Result<()> {
        conn.call(|conn| {
            conn.execute_batch(schema::CREATE_TABLES).map_err(wrap_err)?;
            Ok(())
        })
        .await
        .map_err(|e| RepositoryError::QueryFailed(e.to_string()))
    }
}

#[async_trait]
impl TodoRepository for SqliteRepository {
    async fn list_todos(&self) -> Result<Vec<Todo>> {
        self.conn
            .call(move |conn| {
                let mut stmt = conn.prepare(schema::SELECT_ALL_TODOS).map_err(wrap_err)?;
                let rows = stmt.query_map([], row_to_todo).map_err(wrap_err)?;

                let mut todos = Vec::new();
                for row_result in rows {
                    todos.push(row_result.map_err(wrap_err)?);
                }
                Ok(todos)
            })
            .await
            .map_err(|e| RepositoryError::QueryFailed(e.to_string()))
    }

    async fn create_todo(&self, title: &str) -> Result<Todo> {
        let id = Uuid::new_v4().to_string();
        let title = title.to_string();
        // Microsecond precision keeps `created_at` ordering in step with
        // insertion order even for back-to-back creates.
        let created_at = Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true);
        let todo_id = id.clone();

        self.conn
            .call(move |conn| {
                conn.execute(schema::INSERT_TODO, rusqlite::params![id, title, created_at])
                    .map_err(wrap_err)?;

                // Read the row back so the returned value is exactly what
                // was persisted, column defaults included.
                let mut stmt = conn.prepare(schema::SELECT_TODO_BY_ID).map_err(wrap_err)?;
                stmt.query_row([&id], row_to_todo).map_err(wrap_err)
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, todo_id))
    }

    async fn toggle_todo(&self, id: &str) -> Result<Todo> {
        let id_str = id.to_string();
        let todo_id = id.to_string();

        self.conn
            .call(move |conn| {
                conn.execute(schema::TOGGLE_TODO, [&id_str]).map_err(wrap_err)?;

                // An UPDATE matching zero rows is indistinguishable from
                // success, so re-read to detect a missing todo.
                let mut stmt = conn.prepare(schema::SELECT_TODO_BY_ID).map_err(wrap_err)?;
                stmt.query_row([&id_str], row_to_todo).map_err(wrap_err)
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, todo_id))
    }

    async fn delete_todo(&self, id: &str) -> Result<String> {
        let id_str = id.to_string();
        let todo_id = id.to_string();

        self.conn
            .call(move |conn| {
                // DELETE alone does not report whether the row existed, so
                // check existence first.
                let mut stmt = conn.prepare(schema::SELECT_TODO_BY_ID).map_err(wrap_err)?;
                let todo = stmt.query_row([&id_str], row_to_todo).map_err(wrap_err)?;

                conn.execute(schema::DELETE_TODO, [&id_str]).map_err(wrap_err)?;
                Ok(todo.id)
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, todo_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    async fn repo() -> SqliteRepository {
        SqliteRepository::new_in_memory().await.unwrap()
    }

    /// Creates a todo and waits long enough that the next create gets a
    /// strictly later `created_at`.
    async fn create_spaced(repo: &SqliteRepository, title: &str) -> Todo {
        let todo = repo.create_todo(title).await.unwrap();
        tokio::time::sleep(Duration::from_millis(2)).await;
        todo
    }

    #[tokio::test]
    async fn test_create_returns_fully_populated_todo() {
        let repo = repo().await;

        let todo = repo.create_todo("Buy milk").await.unwrap();

        assert!(!todo.id.is_empty());
        assert_eq!(todo.title, "Buy milk");
        assert!(!todo.completed);
        assert!(!todo.created_at.is_empty());
    }

    #[tokio::test]
    async fn test_created_ids_are_unique() {
        let repo = repo().await;

        let first = repo.create_todo("one").await.unwrap();
        let second = repo.create_todo("two").await.unwrap();

        assert_ne!(first.id, second.id);
    }

    #[tokio::test]
    async fn test_list_returns_newest_first() {
        let repo = repo().await;
        create_spaced(&repo, "first").await;
        create_spaced(&repo, "second").await;
        create_spaced(&repo, "third").await;

        let todos = repo.list_todos().await.unwrap();

        let titles: Vec<&str> = todos.iter().map(|t| t.title.as_str()).collect();
        assert_eq!(titles, vec!["third", "second", "first"]);
    }

    #[tokio::test]
    async fn test_create_then_list_round_trip() {
        let repo = repo().await;
        let created = repo.create_todo("Call the plumber").await.unwrap();

        let todos = repo.list_todos().await.unwrap();

        let matching: Vec<&Todo> = todos
            .iter()
            .filter(|t| t.title == "Call the plumber")
            .collect();
        assert_eq!(matching.len(), 1);
        assert_eq!(*matching[0], created);
    }

    #[tokio::test]
    async fn test_toggle_flips_completed_both_ways() {
        let repo = repo().await;
        let created = repo.create_todo("Buy milk").await.unwrap();

        let toggled = repo.toggle_todo(&created.id).await.unwrap();
        assert!(toggled.completed);

        let toggled_back = repo.toggle_todo(&created.id).await.unwrap();
        assert!(!toggled_back.completed);
    }

    #[tokio::test]
    async fn test_toggle_missing_todo_is_not_found() {
        let repo = repo().await;

        let result = repo.toggle_todo("no-such-id").await;

        assert_eq!(result, Err(RepositoryError::todo_not_found("no-such-id")));
    }

    #[tokio::test]
    async fn test_delete_removes_todo_and_returns_id() {
        let repo = repo().await;
        let created = repo.create_todo("Buy milk").await.unwrap();

        let deleted_id = repo.delete_todo(&created.id).await.unwrap();

        assert_eq!(deleted_id, created.id);
        assert!(repo.list_todos().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_second_delete_is_not_found() {
        let repo = repo().await;
        let created = repo.create_todo("Buy milk").await.unwrap();

        repo.delete_todo(&created.id).await.unwrap();
        let result = repo.delete_todo(&created.id).await;

        assert_eq!(result, Err(RepositoryError::todo_not_found(created.id)));
    }

    #[tokio::test]
    async fn test_schema_init_is_idempotent() {
        // Opening a second repository over the same connection path must
        // not fail on the existing table.
        let repo = repo().await;
        SqliteRepository::init_schema(&repo.conn).await.unwrap();
    }
}
