//! Postgres row conversion functions.

use sqlx::postgres::PgRow;
use sqlx::Row;

use tada_core::todo::Todo;

/// Convert a Postgres row to a Todo.
///
/// Expected columns: id, title, completed, created_at. The queries cast
/// `id` and `created_at` to text server-side, so the engine's own textual
/// representations arrive here as opaque strings. They are passed through
/// without reparsing, which means Postgres and SQLite emit differently
/// formatted timestamps for equivalent todos.
pub fn row_to_todo(row: &PgRow) -> sqlx::Result<Todo> {
    Ok(Todo {
        id: row.try_get("id")?,
        title: row.try_get("title")?,
        completed: row.try_get("completed")?,
        created_at: row.try_get("created_at")?,
    })
}
