//! Index page rendering.
//!
//! The template is read and rendered once at startup; requests only clone the
//! finished HTML.

use std::fs;
use std::path::Path;

use vectorshield_core::error::{Result, WebUiError};

/// Placeholder spellings substituted with the API base URL.
const PLACEHOLDERS: [&str; 2] = ["{{ api_base_url }}", "{{api_base_url}}"];

/// Substitute the HTML-escaped `api_base_url` into `template`.
pub fn render_index(template: &str, api_base_url: &str) -> String {
    let escaped = escape_html(api_base_url);
    PLACEHOLDERS
        .iter()
        .fold(template.to_owned(), |html, p| html.replace(p, &escaped))
}

fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(c),
        }
    }
    out
}

#[derive(Debug, Clone)]
pub struct IndexPage {
    html: String,
}

impl IndexPage {
    /// Read the template from disk and render it. A missing template is a
    /// startup error.
    pub fn load(template_path: &Path, api_base_url: &str) -> Result<Self> {
        let template = fs::read_to_string(template_path).map_err(|e| {
            WebUiError::Internal(format!(
                "read template failed ({}): {e}",
                template_path.display()
            ))
        })?;
        Ok(Self::from_template(&template, api_base_url))
    }

    pub fn from_template(template: &str, api_base_url: &str) -> Self {
        Self { html: render_index(template, api_base_url) }
    }

    pub fn html(&self) -> &str {
        &self.html
    }
}
