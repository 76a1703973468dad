//! SQLite schema definitions and SQL query constants.
//!
//! Pure data, no I/O. The column definitions deliberately differ from the
//! Postgres schema: ids are plain text and `created_at` is a naive
//! timestamp string. The conversions module papers over the difference.

/// SQL statements run once at startup. `CREATE TABLE IF NOT EXISTS` keeps
/// initialization idempotent against an already-initialized database file.
pub const CREATE_TABLES: &str = r#"
PRAGMA journal_mode=WAL;

-- Todos table
CREATE TABLE IF NOT EXISTS todos (
    id TEXT PRIMARY KEY,
    title TEXT NOT NULL,
    completed INTEGER DEFAULT 0,
    created_at TEXT DEFAULT (datetime('now'))
);
"#;

pub const INSERT_TODO: &str = r#"
INSERT INTO todos (id, title, completed, created_at)
VALUES (?1, ?2, 0, ?3)
"#;

pub const SELECT_TODO_BY_ID: &str = r#"
SELECT id, title, completed, created_at
FROM todos
WHERE id = ?1
"#;

pub const SELECT_ALL_TODOS: &str = r#"
SELECT id, title, completed, created_at
FROM todos
ORDER BY created_at DESC
"#;

pub const TOGGLE_TODO: &str = r#"
UPDATE todos
SET completed = NOT completed
WHERE id = ?1
"#;

pub const DELETE_TODO: &str = r#"
DELETE FROM todos
WHERE id = ?1
"#;
