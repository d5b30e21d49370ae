//! Repository for the `todos` table.

use sqlx::PgPool;
use todo_core::todo::NewTodo;

use crate::models::todo::Todo;

/// Column list for `todos` queries. `version` is never selected.
const COLUMNS: &str = "id, text, created_at, updated_at";

/// Provides data access for todos.
pub struct TodoRepo;

impl TodoRepo {
    /// Insert a todo, returning the stored row.
    pub async fn create(pool: &PgPool, input: &NewTodo) -> Result<Todo, sqlx::Error> {
        let query = format!("INSERT INTO todos (text) VALUES ($1) RETURNING {COLUMNS}");
        sqlx::query_as::<_, Todo>(&query)
            .bind(input.text())
            .fetch_one(pool)
            .await
    }

    /// List every todo, oldest first.
    pub async fn list_all(pool: &PgPool) -> Result<Vec<Todo>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM todos ORDER BY created_at, id");
        sqlx::query_as::<_, Todo>(&query).fetch_all(pool).await
    }

    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM todos")
            .fetch_one(pool)
            .await
    }
}
