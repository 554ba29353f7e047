//! HTTP mapping for `WebUiError`.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use vectorshield_core::error::WebUiError;

/// Generic body for 500s; internal detail never leaves the process.
pub const INTERNAL_MESSAGE: &str = "internal server error";

#[derive(Debug)]
pub struct HttpError(pub WebUiError);

impl From<WebUiError> for HttpError {
    fn from(e: WebUiError) -> Self {
        Self(e)
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let status = match self.0 {
            WebUiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            WebUiError::NotFound(_) => StatusCode::NOT_FOUND,
            WebUiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        let message = match &self.0 {
            WebUiError::Internal(_) => INTERNAL_MESSAGE.to_string(),
            other => other.to_string(),
        };
        let body = Json(json!({
            "error": self.0.client_code().as_str(),
            "message": message,
        }));
        (status, body).into_response()
    }
}
