//! Handlers for the todo endpoints.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use todo_core::todo::NewTodo;
use todo_db::models::todo::{CreateTodo, Todo};
use todo_db::repositories::TodoRepo;

use crate::error::{AppError, AppResult};
use crate::response::{ApiResponse, SUCCESSFUL};
use crate::state::AppState;

/// POST /api/todos
///
/// A missing, null or empty `text` is an incomplete request; text that is
/// only whitespace fails validation. Both are 400.
pub async fn create_todo(
    State(state): State<AppState>,
    payload: Result<Json<CreateTodo>, JsonRejection>,
) -> AppResult<ApiResponse<Todo>> {
    let Json(input) = payload?;

    let text = input
        .text
        .filter(|t| !t.is_empty())
        .ok_or(AppError::IncompleteRequest)?;
    let new_todo = NewTodo::parse(&text)?;

    let todo = TodoRepo::create(&state.pool, &new_todo).await?;

    tracing::info!(todo_id = todo.id, "Todo created");

    Ok(ApiResponse::success(&SUCCESSFUL, todo))
}

/// GET /api/todos, GET /api/
pub async fn list_todos(State(state): State<AppState>) -> AppResult<ApiResponse<Vec<Todo>>> {
    let todos = TodoRepo::list_all(&state.pool).await?;

    tracing::debug!(count = todos.len(), "Listed todos");

    Ok(ApiResponse::success(&SUCCESSFUL, todos))
}
