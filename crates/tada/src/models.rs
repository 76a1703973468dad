//! Request and response payloads for the todo API.

use serde::{Deserialize, Serialize};

/// Request payload for creating a new todo (POST /todos).
#[derive(Debug, Deserialize)]
pub struct CreateTodo {
    pub title: String,
}

/// Response payload for a successful delete (DELETE /todos/{id}).
#[derive(Debug, Serialize)]
pub struct DeletedTodo {
    pub id: String,
}
