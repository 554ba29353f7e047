//! Fixed response security headers.

use axum::http::{header, HeaderMap, HeaderValue};
use vectorshield_core::error::{Result, WebUiError};

const FIXED_HEADERS: [(header::HeaderName, &str); 4] = [
    (header::X_CONTENT_TYPE_OPTIONS, "nosniff"),
    (header::X_FRAME_OPTIONS, "DENY"),
    (header::X_XSS_PROTECTION, "1; mode=block"),
    (header::REFERRER_POLICY, "strict-origin-when-cross-origin"),
];

/// CSP source expression for the API base URL. A source with a path only
/// matches that exact path unless it ends in `/`, so path-bearing URLs get one;
/// query and fragment are not part of a source expression.
pub fn connect_source(api_base_url: &str) -> String {
    let url = api_base_url.trim();
    let url = url.split(['?', '#']).next().unwrap_or(url);
    let authority_start = url.find("://").map(|i| i + 3).unwrap_or(0);
    match url[authority_start..].find('/') {
        None => url.to_string(),
        Some(_) if url.ends_with('/') => url.to_string(),
        Some(_) => format!("{url}/"),
    }
}

/// Build the CSP for HTML responses. `connect-src` admits the API base URL so
/// the page can call the detection API.
pub fn content_security_policy(api_base_url: &str) -> Result<HeaderValue> {
    let policy = format!(
        "default-src 'self'; script-src 'self'; style-src 'self' 'unsafe-inline'; \
         img-src 'self' data:; connect-src 'self' {}; frame-ancestors 'none'",
        connect_source(api_base_url)
    );
    HeaderValue::from_str(&policy)
        .map_err(|e| WebUiError::BadRequest(format!("api_base_url not usable in CSP: {e}")))
}

pub fn is_html(headers: &HeaderMap) -> bool {
    headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(|ct| ct.trim_start().to_ascii_lowercase().starts_with("text/html"))
        .unwrap_or(false)
}

/// Attach the fixed headers, plus `csp` when the response is HTML.
pub fn apply(headers: &mut HeaderMap, csp: &HeaderValue) {
    for (name, value) in FIXED_HEADERS {
        headers.insert(name, HeaderValue::from_static(value));
    }
    if is_html(headers) {
        headers.insert(header::CONTENT_SECURITY_POLICY, csp.clone());
    }
}
