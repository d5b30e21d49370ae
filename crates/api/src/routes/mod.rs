pub mod health;
pub mod todos;

use axum::routing::get;
use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Prefix every API route is mounted under.
pub const API_PREFIX: &str = "/api";

/// Build the `/api` route tree.
///
/// ```text
/// GET  /api            list todos
/// GET  /api/           list todos (the path clients use for the full list)
/// GET  /api/todos      list todos
/// POST /api/todos      create a todo
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest(API_PREFIX, todos::router())
        // `nest` maps a nested "/" to "/api" only.
        .route("/api/", get(handlers::todos::list_todos))
}
