//! Shared application state for the web UI.
//!
//! Everything here is built once at startup: the rendered index page, the
//! Content-Security-Policy header, the host allow-list and the metrics
//! registry. Handlers and middleware receive it through axum state.

use std::sync::Arc;

use axum::http::HeaderValue;
use vectorshield_core::error::Result;
use vectorshield_core::HttpMetrics;

use crate::config::WebUiConfig;
use crate::middleware::security;
use crate::middleware::trusted_host::TrustedHosts;
use crate::page::IndexPage;

#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
    metrics: Arc<HttpMetrics>,
}

struct AppStateInner {
    cfg: WebUiConfig,
    index: IndexPage,
    csp: HeaderValue,
    trusted_hosts: TrustedHosts,
}

impl AppState {
    /// Build application state with a fresh metrics registry.
    pub fn new(cfg: WebUiConfig) -> Result<Self> {
        Self::with_metrics(cfg, Arc::new(HttpMetrics::new()))
    }

    /// Build application state around an existing registry.
    pub fn with_metrics(cfg: WebUiConfig, metrics: Arc<HttpMetrics>) -> Result<Self> {
        let index = IndexPage::load(&cfg.template_path, &cfg.api_base_url)?;
        let csp = security::content_security_policy(&cfg.api_base_url)?;
        let trusted_hosts = TrustedHosts::new(&cfg.allowed_hosts);

        tracing::debug!(
            template = %cfg.template_path.display(),
            hosts = ?cfg.allowed_hosts,
            "app state ready"
        );

        Ok(Self {
            inner: Arc::new(AppStateInner { cfg, index, csp, trusted_hosts }),
            metrics,
        })
    }

    pub fn cfg(&self) -> &WebUiConfig {
        &self.inner.cfg
    }

    pub fn index(&self) -> &IndexPage {
        &self.inner.index
    }

    pub fn csp(&self) -> &HeaderValue {
        &self.inner.csp
    }

    pub fn trusted_hosts(&self) -> &TrustedHosts {
        &self.inner.trusted_hosts
    }

    pub fn metrics(&self) -> Arc<HttpMetrics> {
        Arc::clone(&self.metrics)
    }
}
