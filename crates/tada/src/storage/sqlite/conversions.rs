//! SQLite row conversion functions.
//!
//! Pure functions for converting SQLite rows into the uniform `Todo`
//! shape, testable in isolation with an in-memory database.

use rusqlite::Row;

use tada_core::todo::Todo;

/// Convert a SQLite row to a Todo.
///
/// Expected columns: id, title, completed, created_at.
///
/// `completed` is stored as an INTEGER (0/1) and coerced to bool here;
/// `created_at` is passed through as the opaque string the engine stored,
/// without reparsing or reformatting.
pub fn row_to_todo(row: &Row) -> rusqlite::Result<Todo> {
    let id: String = row.get(0)?;
    let title: String = row.get(1)?;
    let completed: i64 = row.get(2)?;
    let created_at: String = row.get(3)?;

    Ok(Todo {
        id,
        title,
        completed: completed != 0,
        created_at,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rusqlite::Connection;

    fn row_from(sql: &str) -> Todo {
        let conn = Connection::open_in_memory().unwrap();
        conn.query_row(sql, [], row_to_todo).unwrap()
    }

    #[test]
    fn test_zero_coerces_to_false() {
        let todo = row_from("SELECT 'id-1', 'Buy milk', 0, '2024-01-01 00:00:00'");

        assert_eq!(todo.id, "id-1");
        assert_eq!(todo.title, "Buy milk");
        assert!(!todo.completed);
        assert_eq!(todo.created_at, "2024-01-01 00:00:00");
    }

    #[test]
    fn test_one_coerces_to_true() {
        let todo = row_from("SELECT 'id-2', 'Walk the dog', 1, '2024-01-02 00:00:00'");

        assert!(todo.completed);
    }

    #[test]
    fn test_timestamp_is_kept_verbatim() {
        // The RFC 3339 string written by the repository comes back untouched.
        let todo = row_from("SELECT 'id-3', 't', 0, '2024-06-15T12:30:00.123456+00:00'");

        assert_eq!(todo.created_at, "2024-06-15T12:30:00.123456+00:00");
    }
}
