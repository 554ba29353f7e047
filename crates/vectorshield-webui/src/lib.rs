//! VectorShield web UI library entry.
//!
//! Serves the detection UI page, its static assets and favicon, and a
//! Prometheus `/metrics` endpoint. Every request passes through the
//! instrumentation middleware, which feeds the shared `HttpMetrics` registry
//! and attaches security headers. Consumed by the binary (`main.rs`) and by
//! integration tests.

pub mod app_state;
pub mod config;
pub mod error;
pub mod middleware;
pub mod ops;
pub mod page;
pub mod router;
pub mod ui;
