//! View state for a todo list.

use todo_core::todo::normalize_text;

use crate::api::{Todo, TodoApiClient};

/// The list a user is looking at.
///
/// Failures never reach the caller: they are logged and the state is left
/// as it was. Nothing is retried.
pub struct TodoView {
    client: TodoApiClient,
    todos: Vec<Todo>,
}

impl TodoView {
    pub fn new(client: TodoApiClient) -> Self {
        Self {
            client,
            todos: Vec::new(),
        }
    }

    pub fn todos(&self) -> &[Todo] {
        &self.todos
    }

    /// Replace the state with the server's full list.
    pub async fn mount(&mut self) {
        match self.client.list().await {
            Ok(todos) => {
                tracing::debug!(count = todos.len(), "Loaded todos");
                self.todos = todos;
            }
            Err(e) => {
                tracing::warn!(error = %e, api_root = self.client.api_root(), "Failed to load todos");
            }
        }
    }

    /// Create a todo from user input and append it.
    ///
    /// Blank input is ignored without contacting the server.
    pub async fn submit(&mut self, raw: &str) {
        let Some(text) = normalize_text(raw) else {
            tracing::debug!("Ignoring blank todo");
            return;
        };

        match self.client.create(&text).await {
            Ok(todo) => {
                tracing::debug!(todo_id = todo.id, "Added todo");
                self.todos.push(todo);
            }
            Err(e) => {
                tracing::warn!(error = %e, "Failed to add todo");
            }
        }
    }
}
