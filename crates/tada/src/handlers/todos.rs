//! Todo CRUD handlers.
//!
//! Thin adapters from HTTP verbs/paths to repository calls. Title
//! validation happens here before anything reaches the repository.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use tada_core::todo::{validate_title, Todo};

use crate::{
    handlers::ApiError,
    models::{CreateTodo, DeletedTodo},
    state::AppState,
};

/// List all todos, newest first (GET /todos).
#[axum::debug_handler]
pub async fn list_todos(State(state): State<AppState>) -> Result<Json<Vec<Todo>>, ApiError> {
    let todos = state.todo_repo.list_todos().await?;
    Ok(Json(todos))
}

/// Create a new todo (POST /todos).
#[axum::debug_handler]
pub async fn create_todo(
    State(state): State<AppState>,
    Json(body): Json<CreateTodo>,
) -> Result<(StatusCode, Json<Todo>), ApiError> {
    validate_title(&body.title)?;

    let todo = state.todo_repo.create_todo(&body.title).await?;

    tracing::debug!(id = %todo.id, "created todo");
    Ok((StatusCode::CREATED, Json(todo)))
}

/// Toggle a todo's completed status (PATCH /todos/{id}).
#[axum::debug_handler]
pub async fn toggle_todo(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Todo>, ApiError> {
    let todo = state.todo_repo.toggle_todo(&id).await?;
    Ok(Json(todo))
}

/// Delete a todo (DELETE /todos/{id}).
#[axum::debug_handler]
pub async fn delete_todo(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<DeletedTodo>, ApiError> {
    let id = state.todo_repo.delete_todo(&id).await?;

    tracing::debug!(id = %id, "deleted todo");
    Ok(Json(DeletedTodo { id }))
}
