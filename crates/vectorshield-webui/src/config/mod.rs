//! Web UI config loader.
//!
//! Values come from an optional strict YAML file (`WEBUI_CONFIG`) with
//! environment variables layered on top. The result is validated once and
//! never mutated afterwards.

pub mod schema;

use std::fs;

use vectorshield_core::error::{Result, WebUiError};

pub use schema::{Environment, WebUiConfig};

/// Optional path to a YAML config file.
pub const ENV_CONFIG_FILE: &str = "WEBUI_CONFIG";
pub const ENV_API_BASE_URL: &str = "API_BASE_URL";
pub const ENV_ALLOWED_HOSTS: &str = "ALLOWED_HOSTS";
pub const ENV_ENVIRONMENT: &str = "ENVIRONMENT";
pub const ENV_LISTEN_ADDR: &str = "LISTEN_ADDR";
pub const ENV_STATIC_DIR: &str = "STATIC_DIR";
pub const ENV_TEMPLATE_PATH: &str = "TEMPLATE_PATH";

pub fn load_from_file(path: &str) -> Result<WebUiConfig> {
    let cfg = parse_file(path)?;
    cfg.validate()?;
    Ok(cfg)
}

pub fn load_from_str(s: &str) -> Result<WebUiConfig> {
    let cfg = parse_str(s)?;
    cfg.validate()?;
    Ok(cfg)
}

/// Load from the process environment.
pub fn load_from_env() -> Result<WebUiConfig> {
    load_with(|key| std::env::var(key).ok())
}

/// Load using an arbitrary variable lookup (the process environment in
/// production, a map in tests).
pub fn load_with<F>(lookup: F) -> Result<WebUiConfig>
where
    F: Fn(&str) -> Option<String>,
{
    let mut cfg = match lookup(ENV_CONFIG_FILE) {
        Some(path) => parse_file(&path)?,
        None => WebUiConfig::default(),
    };

    if let Some(v) = lookup(ENV_API_BASE_URL) {
        cfg.api_base_url = v;
    }
    if let Some(v) = lookup(ENV_ALLOWED_HOSTS) {
        cfg.allowed_hosts = schema::parse_host_list(&v);
    }
    if let Some(v) = lookup(ENV_ENVIRONMENT) {
        cfg.environment = Environment::from(v);
    }
    if let Some(v) = lookup(ENV_LISTEN_ADDR) {
        cfg.listen = v;
    }
    if let Some(v) = lookup(ENV_STATIC_DIR) {
        cfg.static_dir = v.into();
    }
    if let Some(v) = lookup(ENV_TEMPLATE_PATH) {
        cfg.template_path = v.into();
    }

    cfg.validate()?;
    Ok(cfg)
}

fn parse_file(path: &str) -> Result<WebUiConfig> {
    let s = fs::read_to_string(path)
        .map_err(|e| WebUiError::Internal(format!("read config failed ({path}): {e}")))?;
    parse_str(&s)
}

fn parse_str(s: &str) -> Result<WebUiConfig> {
    serde_yaml::from_str(s).map_err(|e| WebUiError::BadRequest(format!("invalid yaml: {e}")))
}
