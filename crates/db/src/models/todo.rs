//! Todo entity and request DTO.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use todo_core::types::{DbId, Timestamp};

/// A row from the `todos` table.
///
/// The internal `version` column is deliberately absent.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Todo {
    pub id: DbId,
    pub text: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Request body for `POST /api/todos`.
///
/// `text` stays optional so a missing field reaches the handler instead of
/// failing deserialization.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateTodo {
    pub text: Option<String>,
}
