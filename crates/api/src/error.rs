use axum::extract::rejection::JsonRejection;
use axum::response::{IntoResponse, Response};
use todo_core::error::CoreError;

use crate::response::{
    ApiResponse, ResponseMessage, BAD_REQUEST, INCOMPLETE_REQUEST, INTERNAL_SERVER_ERROR,
};

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds HTTP-specific variants.
/// Every variant renders as the standard error envelope.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `todo_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A database error from sqlx.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Required input was missing or the body could not be read.
    #[error("Incomplete request")]
    IncompleteRequest,

    /// A bad request with a human-readable message.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// An internal error with a human-readable message.
    #[error("Internal error: {0}")]
    InternalError(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        tracing::debug!(reason = %rejection.body_text(), "Rejected request body");
        AppError::IncompleteRequest
    }
}

impl AppError {
    /// The envelope descriptor this error renders as.
    pub fn response_message(&self) -> ResponseMessage {
        match self {
            AppError::Core(CoreError::Validation(msg)) => {
                ResponseMessage::with_message(400, msg.clone())
            }
            AppError::Core(CoreError::Internal(msg)) => {
                tracing::error!(error = %msg, "Internal core error");
                INTERNAL_SERVER_ERROR
            }
            AppError::Database(err) => classify_sqlx_error(err),
            AppError::IncompleteRequest => INCOMPLETE_REQUEST,
            AppError::BadRequest(msg) => ResponseMessage::with_message(400, msg.clone()),
            AppError::InternalError(msg) => {
                tracing::error!(error = %msg, "Internal error");
                INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        ApiResponse::error(&self.response_message()).into_response()
    }
}

/// Classify a sqlx error into an envelope descriptor.
///
/// - Data exceptions (SQLSTATE class `22`, e.g. over-long values or a NUL
///   byte in text) and integrity violations (class `23`, e.g. a failed
///   `CHECK`) are caused by the request and map to 400.
/// - Everything else maps to 500 with a sanitized message.
fn classify_sqlx_error(err: &sqlx::Error) -> ResponseMessage {
    if let sqlx::Error::Database(db_err) = err {
        if let Some(code) = db_err.code() {
            if is_input_error_code(&code) {
                tracing::warn!(code = %code, error = %db_err, "Rejected by database");
                return BAD_REQUEST;
            }
        }
    }

    tracing::error!(error = %err, "Database error");
    INTERNAL_SERVER_ERROR
}

/// SQLSTATE classes that blame the submitted data rather than the server.
fn is_input_error_code(code: &str) -> bool {
    code.starts_with("22") || code.starts_with("23")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn data_and_integrity_classes_are_input_errors() {
        for code in ["22001", "22021", "22P02", "23502", "23505", "23514"] {
            assert!(is_input_error_code(code), "{code}");
        }
    }

    #[test]
    fn other_classes_are_server_errors() {
        for code in ["08006", "40001", "42P01", "53300", "57014"] {
            assert!(!is_input_error_code(code), "{code}");
        }
    }
}
