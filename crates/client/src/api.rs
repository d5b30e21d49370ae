//! HTTP calls against the todo API.

use std::time::Duration;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use todo_core::types::{DbId, Timestamp};

use crate::config::ClientConfig;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// A todo as returned by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    pub id: DbId,
    pub text: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// The server's response envelope.
#[derive(Debug, Deserialize)]
pub struct Envelope<T> {
    pub code: u16,
    pub success: bool,
    #[serde(default)]
    pub message: String,
    pub data: Option<T>,
}

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error {code}: {message}")]
    Api { code: u16, message: String },

    #[error("Response envelope carried no data")]
    MissingData,
}

#[derive(Serialize)]
struct CreateTodoBody<'a> {
    text: &'a str,
}

/// Thin wrapper over `reqwest` for the two todo endpoints.
#[derive(Debug, Clone)]
pub struct TodoApiClient {
    http: reqwest::Client,
    api_root: String,
}

impl TodoApiClient {
    pub fn new(config: &ClientConfig) -> Result<Self, ClientError> {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        Ok(Self {
            http,
            api_root: config.api_root(),
        })
    }

    pub fn api_root(&self) -> &str {
        &self.api_root
    }

    /// GET the API root: every todo.
    pub async fn list(&self) -> Result<Vec<Todo>, ClientError> {
        let response = self.http.get(&self.api_root).send().await?;
        decode(response).await
    }

    /// POST a new todo and return what the server stored.
    pub async fn create(&self, text: &str) -> Result<Todo, ClientError> {
        let response = self
            .http
            .post(format!("{}/todos", self.api_root))
            .json(&CreateTodoBody { text })
            .send()
            .await?;
        decode(response).await
    }
}

/// Unwrap the envelope regardless of the HTTP status; the body says
/// whether the call worked.
async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, ClientError> {
    let envelope: Envelope<T> = response.json().await?;

    if !envelope.success {
        return Err(ClientError::Api {
            code: envelope.code,
            message: envelope.message,
        });
    }

    envelope.data.ok_or(ClientError::MissingData)
}
