use std::collections::BTreeSet;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use vectorshield_core::error::{Result, WebUiError};

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WebUiConfig {
    /// Base URL of the detection API the page talks to.
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,

    /// Host header values accepted by the server. `*` accepts any host.
    #[serde(default = "default_allowed_hosts")]
    pub allowed_hosts: BTreeSet<String>,

    #[serde(default)]
    pub environment: Environment,

    #[serde(default = "default_listen")]
    pub listen: String,

    #[serde(default = "default_static_dir")]
    pub static_dir: PathBuf,

    #[serde(default = "default_template_path")]
    pub template_path: PathBuf,
}

impl Default for WebUiConfig {
    fn default() -> Self {
        Self {
            api_base_url: default_api_base_url(),
            allowed_hosts: default_allowed_hosts(),
            environment: Environment::default(),
            listen: default_listen(),
            static_dir: default_static_dir(),
            template_path: default_template_path(),
        }
    }
}

impl WebUiConfig {
    pub fn validate(&self) -> Result<()> {
        let url = self.api_base_url.trim();
        if url.is_empty() {
            return Err(WebUiError::BadRequest("api_base_url must not be empty".into()));
        }
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(WebUiError::BadRequest(
                "api_base_url must start with http:// or https://".into(),
            ));
        }
        // The URL ends up inside a response header.
        if self.api_base_url.chars().any(|c| c.is_control() || c.is_whitespace() || c == ';') {
            return Err(WebUiError::BadRequest(
                "api_base_url must not contain whitespace, control characters or ';'".into(),
            ));
        }

        if self.allowed_hosts.is_empty() {
            return Err(WebUiError::BadRequest("allowed_hosts must not be empty".into()));
        }

        self.listen_addr()?;
        Ok(())
    }

    pub fn listen_addr(&self) -> Result<SocketAddr> {
        self.listen.parse().map_err(|e| {
            WebUiError::BadRequest(format!("listen must be a valid socket address: {e}"))
        })
    }
}

/// Deployment environment. Only `development` changes behavior.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(from = "String")]
pub enum Environment {
    Development,
    #[default]
    Other,
}

impl Environment {
    pub fn is_development(self) -> bool {
        self == Environment::Development
    }
}

impl From<String> for Environment {
    fn from(s: String) -> Self {
        if s.trim().eq_ignore_ascii_case("development") {
            Environment::Development
        } else {
            Environment::Other
        }
    }
}

/// Parse a comma-separated host list, dropping blanks.
pub fn parse_host_list(s: &str) -> BTreeSet<String> {
    s.split(',')
        .map(str::trim)
        .filter(|h| !h.is_empty())
        .map(str::to_ascii_lowercase)
        .collect()
}

fn default_api_base_url() -> String {
    "http://localhost:5000".into()
}
fn default_allowed_hosts() -> BTreeSet<String> {
    BTreeSet::from(["*".to_string()])
}
fn default_listen() -> String {
    "0.0.0.0:8080".into()
}
// Assets ship next to the crate, so defaults do not depend on the working
// directory.
fn default_static_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("static")
}
fn default_template_path() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("templates").join("index.html")
}
