//! Postgres schema definitions and SQL query constants.
//!
//! Pure data, no I/O. Unlike the SQLite schema, ids are a native UUID
//! column and `created_at` is a timezone-aware timestamp; every SELECT
//! casts both to text so the rest of the system only ever sees strings.

/// SQL statement run once at startup. `CREATE TABLE IF NOT EXISTS` keeps
/// initialization idempotent against an already-initialized database.
pub const CREATE_TABLES: &str = r#"
CREATE TABLE IF NOT EXISTS todos (
    id UUID DEFAULT gen_random_uuid() PRIMARY KEY,
    title TEXT NOT NULL,
    completed BOOLEAN DEFAULT FALSE,
    created_at TIMESTAMPTZ DEFAULT NOW()
)
"#;

pub const INSERT_TODO: &str = r#"
INSERT INTO todos (id, title, completed)
VALUES ($1::uuid, $2, FALSE)
RETURNING id::text AS id, title, completed, created_at::text AS created_at
"#;

pub const SELECT_ALL_TODOS: &str = r#"
SELECT id::text AS id, title, completed, created_at::text AS created_at
FROM todos
ORDER BY created_at DESC
"#;

pub const TOGGLE_TODO: &str = r#"
UPDATE todos
SET completed = NOT completed
WHERE id::text = $1
RETURNING id::text AS id, title, completed, created_at::text AS created_at
"#;

pub const DELETE_TODO: &str = r#"
DELETE FROM todos
WHERE id::text = $1
RETURNING id::text AS id
"#;
