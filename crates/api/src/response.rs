//! Uniform JSON envelope for every API response.
//!
//! Success: `{ "code", "success": true, "message", "data"? }`.
//! Error: `{ "code", "success": false, "message" }`.
//!
//! The HTTP status always equals `code`. Handlers describe the outcome with
//! a [`ResponseMessage`]; the constants below cover the common cases.

use std::borrow::Cow;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

const DEFAULT_SUCCESS_MESSAGE: &str = "Success";
const DEFAULT_ERROR_MESSAGE: &str = "Something unexpected happened";

/// Status code and message for a response. Either may be left unset to
/// take the default for success (200) or error (500).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResponseMessage {
    pub code: Option<u16>,
    pub message: Option<Cow<'static, str>>,
}

impl ResponseMessage {
    pub const fn new(code: u16, message: &'static str) -> Self {
        Self {
            code: Some(code),
            message: Some(Cow::Borrowed(message)),
        }
    }

    pub fn with_message(code: u16, message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            code: Some(code),
            message: Some(message.into()),
        }
    }

    /// Neither code nor message: both fall back to defaults.
    pub const fn empty() -> Self {
        Self {
            code: None,
            message: None,
        }
    }
}

pub const SUCCESSFUL: ResponseMessage = ResponseMessage::new(200, "Successfully completed");
pub const INCOMPLETE_REQUEST: ResponseMessage = ResponseMessage::new(400, "Incomplete request");
pub const BAD_REQUEST: ResponseMessage = ResponseMessage::new(400, "Bad request");
pub const NOT_FOUND: ResponseMessage = ResponseMessage::new(404, "Not found");
pub const INTERNAL_SERVER_ERROR: ResponseMessage =
    ResponseMessage::new(500, DEFAULT_ERROR_MESSAGE);

/// The response envelope.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub code: u16,
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T: Serialize> ApiResponse<T> {
    /// Success envelope carrying `data`.
    pub fn success(descriptor: &ResponseMessage, data: T) -> Self {
        Self::build(descriptor, true, Some(data))
    }

    fn build(descriptor: &ResponseMessage, success: bool, data: Option<T>) -> Self {
        let (default_status, default_message) = if success {
            (StatusCode::OK, DEFAULT_SUCCESS_MESSAGE)
        } else {
            (StatusCode::INTERNAL_SERVER_ERROR, DEFAULT_ERROR_MESSAGE)
        };

        let status = descriptor
            .code
            .and_then(|c| StatusCode::from_u16(c).ok())
            .unwrap_or(default_status);

        let message = descriptor
            .message
            .as_deref()
            .filter(|m| !m.is_empty())
            .unwrap_or(default_message)
            .to_string();

        Self {
            code: status.as_u16(),
            success,
            message,
            data,
        }
    }
}

impl ApiResponse<()> {
    /// Success envelope without a `data` field.
    pub fn success_empty(descriptor: &ResponseMessage) -> Self {
        Self::build(descriptor, true, None)
    }

    /// Error envelope. Never carries `data`.
    pub fn error(descriptor: &ResponseMessage) -> Self {
        Self::build(descriptor, false, None)
    }
}

impl<T: Serialize> IntoResponse for ApiResponse<T> {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, Json(self)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn to_json<T: Serialize>(response: &ApiResponse<T>) -> serde_json::Value {
        serde_json::to_value(response).unwrap()
    }

    #[test]
    fn success_includes_data() {
        let response = ApiResponse::success(&SUCCESSFUL, vec!["a", "b"]);
        assert_eq!(
            to_json(&response),
            json!({
                "code": 200,
                "success": true,
                "message": "Successfully completed",
                "data": ["a", "b"],
            })
        );
    }

    #[test]
    fn success_keeps_empty_list() {
        let response = ApiResponse::success(&SUCCESSFUL, Vec::<i32>::new());
        assert_eq!(to_json(&response)["data"], json!([]));
    }

    #[test]
    fn success_empty_omits_data() {
        let json = to_json(&ApiResponse::success_empty(&SUCCESSFUL));
        assert!(json.get("data").is_none());
        assert_eq!(json["success"], true);
    }

    #[test]
    fn success_defaults_to_200() {
        let response = ApiResponse::success(&ResponseMessage::empty(), 1);
        assert_eq!(response.code, 200);
        assert_eq!(response.message, "Success");
    }

    #[test]
    fn error_defaults_to_500_and_generic_message() {
        let response = ApiResponse::error(&ResponseMessage::empty());
        assert_eq!(
            to_json(&response),
            json!({
                "code": 500,
                "success": false,
                "message": "Something unexpected happened",
            })
        );
    }

    #[test]
    fn error_code_is_overridable() {
        let response = ApiResponse::error(&INCOMPLETE_REQUEST);
        assert_eq!(response.code, 400);
        assert!(!response.success);
        assert_eq!(response.message, "Incomplete request");
    }

    #[test]
    fn invalid_code_falls_back_to_default() {
        let response = ApiResponse::error(&ResponseMessage::with_message(42, "odd"));
        assert_eq!(response.code, 500);
        assert_eq!(response.message, "odd");

        let response = ApiResponse::success(&ResponseMessage::with_message(1000, "odd"), ());
        assert_eq!(response.code, 200);
    }

    #[test]
    fn http_status_matches_code() {
        let response = ApiResponse::error(&BAD_REQUEST).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
