//! Request instrumentation.
//!
//! Wraps every request: times it, records the outcome into the shared
//! `HttpMetrics`, and stamps security headers on the response. A panic in
//! any inner stage is caught here, recorded as a 500 and turned into an
//! opaque 500 response.
//!
//! Label sets stay bounded: responses carrying [`UnmatchedRoute`] are
//! recorded under [`UNMATCHED_ROUTE`], and non-standard methods under
//! `OTHER`.

use std::any::Any;
use std::panic::AssertUnwindSafe;
use std::time::Instant;

use axum::{
    extract::{Request, State},
    http::{Method, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
};
use futures_util::FutureExt;
use vectorshield_core::error::WebUiError;
use vectorshield_core::Observation;

use crate::app_state::AppState;
use crate::error::HttpError;
use crate::middleware::security;

/// Route label shared by every request that did not reach a real route.
pub const UNMATCHED_ROUTE: &str = "<unmatched>";

/// Response extension set by fallbacks and rejections.
#[derive(Debug, Clone, Copy)]
pub struct UnmatchedRoute;

pub fn mark_unmatched(mut resp: Response) -> Response {
    resp.extensions_mut().insert(UnmatchedRoute);
    resp
}

/// Metrics label for a request path: trailing `/` dropped except on the root.
pub fn normalize_route(path: &str) -> String {
    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() {
        "/".to_string()
    } else {
        trimmed.to_string()
    }
}

pub fn method_label(method: &Method) -> &'static str {
    match *method {
        Method::GET => "GET",
        Method::HEAD => "HEAD",
        Method::POST => "POST",
        Method::PUT => "PUT",
        Method::DELETE => "DELETE",
        Method::PATCH => "PATCH",
        Method::OPTIONS => "OPTIONS",
        Method::CONNECT => "CONNECT",
        Method::TRACE => "TRACE",
        _ => "OTHER",
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "non-string panic payload".to_string()
    }
}

pub async fn instrument(State(state): State<AppState>, req: Request, next: Next) -> Response {
    let method = req.method().clone();
    let path = req.uri().path().to_owned();
    let metrics = state.metrics();

    let start = Instant::now();
    let outcome = AssertUnwindSafe(next.run(req)).catch_unwind().await;
    let elapsed = start.elapsed();

    let mut resp = match outcome {
        Ok(resp) => {
            let route = if resp.extensions().get::<UnmatchedRoute>().is_some() {
                UNMATCHED_ROUTE.to_string()
            } else {
                normalize_route(&path)
            };
            let obs = Observation {
                method: method_label(&method).to_string(),
                route,
                status: resp.status().as_u16(),
                duration: elapsed,
            };
            tracing::debug!(
                method = %method,
                route = %obs.route,
                status = obs.status,
                elapsed_ms = elapsed.as_secs_f64() * 1000.0,
                "request completed"
            );
            metrics.observe(&obs);
            resp
        }
        Err(payload) => {
            let reason = panic_message(payload.as_ref());
            tracing::error!(method = %method, path = %path, error = %reason, "unhandled error while serving request");
            metrics.observe(&Observation {
                method: method_label(&method).to_string(),
                route: normalize_route(&path),
                status: StatusCode::INTERNAL_SERVER_ERROR.as_u16(),
                duration: elapsed,
            });
            HttpError(WebUiError::Internal(reason)).into_response()
        }
    };

    security::apply(resp.headers_mut(), state.csp());
    resp
}
