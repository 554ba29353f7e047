//! Host header allow-list (`ALLOWED_HOSTS`).
//!
//! Entries match exactly (case-insensitive, port ignored) or as a `*.suffix`
//! wildcard. A bare `*` disables the check.

use axum::{
    extract::{Request, State},
    http::{header, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
};

use crate::app_state::AppState;
use crate::middleware::instrument::mark_unmatched;

#[derive(Debug, Clone, Default)]
pub struct TrustedHosts {
    any: bool,
    exact: Vec<String>,
    suffixes: Vec<String>,
}

impl TrustedHosts {
    pub fn new<I, S>(hosts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut out = Self::default();
        for h in hosts {
            let h = h.as_ref().trim().to_ascii_lowercase();
            if h == "*" {
                out.any = true;
            } else if let Some(suffix) = h.strip_prefix('*') {
                // keep the leading dot: "*.example.com" -> ".example.com"
                out.suffixes.push(suffix.to_string());
            } else if !h.is_empty() {
                out.exact.push(h);
            }
        }
        out
    }

    pub fn allows_any(&self) -> bool {
        self.any
    }

    /// `host` may carry a port.
    pub fn allows(&self, host: &str) -> bool {
        if self.any {
            return true;
        }
        let name = strip_port(host).to_ascii_lowercase();
        self.exact.iter().any(|h| *h == name) || self.suffixes.iter().any(|s| name.ends_with(s))
    }
}

fn strip_port(host: &str) -> &str {
    let host = host.trim();
    if host.starts_with('[') {
        // IPv6 literal: "[::1]:8080"
        return match host.find(']') {
            Some(end) => &host[..=end],
            None => host,
        };
    }
    host.split(':').next().unwrap_or(host)
}

pub async fn enforce(State(state): State<AppState>, req: Request, next: Next) -> Response {
    let hosts = state.trusted_hosts();
    if hosts.allows_any() {
        return next.run(req).await;
    }

    let host = req
        .headers()
        .get(header::HOST)
        .and_then(|v| v.to_str().ok())
        .or_else(|| req.uri().host())
        .unwrap_or("");

    if hosts.allows(host) {
        next.run(req).await
    } else {
        tracing::warn!(host = %host, "rejected request with untrusted host header");
        mark_unmatched((StatusCode::BAD_REQUEST, "Invalid host header").into_response())
    }
}
