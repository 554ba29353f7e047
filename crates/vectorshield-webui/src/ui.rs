//! Page, favicon and not-found handlers.

use std::io::ErrorKind;

use axum::{
    extract::State,
    http::header,
    response::{Html, IntoResponse, Response},
};
use vectorshield_core::error::WebUiError;

use crate::app_state::AppState;
use crate::error::HttpError;
use crate::middleware::instrument::mark_unmatched;

pub const FAVICON_FILE: &str = "favicon.ico";
pub const FAVICON_CACHE_CONTROL: &str = "public, max-age=86400";

pub async fn index(State(state): State<AppState>) -> Html<String> {
    Html(state.index().html().to_owned())
}

pub async fn favicon(State(state): State<AppState>) -> Result<Response, HttpError> {
    let path = state.cfg().static_dir.join(FAVICON_FILE);
    match tokio::fs::read(&path).await {
        Ok(bytes) => Ok((
            [
                (header::CONTENT_TYPE, "image/x-icon"),
                (header::CACHE_CONTROL, FAVICON_CACHE_CONTROL),
            ],
            bytes,
        )
            .into_response()),
        Err(e) if e.kind() == ErrorKind::NotFound => {
            Err(WebUiError::NotFound(FAVICON_FILE.into()).into())
        }
        Err(e) => {
            tracing::error!(path = %path.display(), error = %e, "favicon read failed");
            Err(WebUiError::Internal(format!("read favicon failed: {e}")).into())
        }
    }
}

/// Fallback for paths no route or static file answers.
pub async fn not_found() -> Response {
    mark_unmatched(HttpError(WebUiError::NotFound("no such resource".into())).into_response())
}
