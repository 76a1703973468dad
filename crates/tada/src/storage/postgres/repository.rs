//! Postgres repository implementation.
//!
//! Implements `tada_core::storage::TodoRepository` against a networked
//! Postgres server. Every operation opens a fresh connection and closes
//! it before returning, on success and failure alike - no pooling.

use sqlx::{Connection, PgConnection};
use uuid::Uuid;

use tada_core::storage::{RepositoryError, Result, TodoRepository};
use tada_core::todo::Todo;

use super::conversions::row_to_todo;
use super::error::map_sqlx_error;
use super::schema;

use async_trait::async_trait;

/// Postgres-based repository implementation.
pub struct PostgresRepository {
    url: String,
}

impl PostgresRepository {
    /// Creates a new repository for the given connection string.
    ///
    /// Connects once to run schema initialization, which tolerates an
    /// already-initialized database, then drops the connection.
    pub async fn connect(url: &str) -> Result<Self> {
        let repo = Self {
            url: url.to_string(),
        };

        let mut conn = repo.acquire().await?;
        let result = sqlx::query(schema::CREATE_TABLES).execute(&mut conn).await;
        conn.close().await.ok();
        result.map_err(map_sqlx_error)?;

        Ok(repo)
    }

    /// Opens a fresh connection for a single operation.
    async fn acquire(&self) -> Result<PgConnection> {
        PgConnection::connect(&self.url)
            .await
            .map_err(|e| RepositoryError::ConnectionFailed(e.to_string()))
    }
}

#[async_trait]
impl TodoRepository for PostgresRepository {
    async fn list_todos(&self) -> Result<Vec<Todo>> {
        let mut conn = self.acquire().await?;
        let result = sqlx::query(schema::SELECT_ALL_TODOS)
            .fetch_all(&mut conn)
            .await;
        conn.close().await.ok();

        let rows = result.map_err(map_sqlx_error)?;
        rows.iter()
            .map(row_to_todo)
            .collect::<sqlx::Result<Vec<_>>>()
            .map_err(map_sqlx_error)
    }

    async fn create_todo(&self, title: &str) -> Result<Todo> {
        let id = Uuid::new_v4().to_string();

        let mut conn = self.acquire().await?;
        // `created_at` comes from the column default (NOW()); RETURNING
        // hands back the row exactly as persisted.
        let result = sqlx::query(schema::INSERT_TODO)
            .bind(&id)
            .bind(title)
            .fetch_one(&mut conn)
            .await;
        conn.close().await.ok();

        let row = result.map_err(map_sqlx_error)?;
        row_to_todo(&row).map_err(map_sqlx_error)
    }

    async fn toggle_todo(&self, id: &str) -> Result<Todo> {
        let mut conn = self.acquire().await?;
        let result = sqlx::query(schema::TOGGLE_TODO)
            .bind(id)
            .fetch_optional(&mut conn)
            .await;
        conn.close().await.ok();

        // An empty RETURNING set means the update matched no row.
        match result.map_err(map_sqlx_error)? {
            Some(row) => row_to_todo(&row).map_err(map_sqlx_error),
            None => Err(RepositoryError::todo_not_found(id)),
        }
    }

    async fn delete_todo(&self, id: &str) -> Result<String> {
        let mut conn = self.acquire().await?;
        let result = sqlx::query(schema::DELETE_TODO)
            .bind(id)
            .fetch_optional(&mut conn)
            .await;
        conn.close().await.ok();

        match result.map_err(map_sqlx_error)? {
            Some(row) => {
                use sqlx::Row;
                row.try_get("id").map_err(map_sqlx_error)
            }
            None => Err(RepositoryError::todo_not_found(id)),
        }
    }
}
