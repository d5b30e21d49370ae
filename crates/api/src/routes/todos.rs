//! Route definitions for todos, mounted at `/api`.

use axum::routing::get;
use axum::Router;

use crate::handlers::todos;
use crate::state::AppState;

/// ```text
/// GET  /        -> list_todos
/// GET  /todos   -> list_todos
/// POST /todos   -> create_todo
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(todos::list_todos))
        .route("/todos", get(todos::list_todos).post(todos::create_todo))
}
