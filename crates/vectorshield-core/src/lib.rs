//! VectorShield core: error surface and the in-process HTTP metrics registry.
//!
//! Nothing here depends on a runtime or an HTTP stack, so the registry can be
//! exercised directly from unit tests and shared by any server front-end.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here.
//! All fallible paths surface as `WebUiError`/`Result`.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod error;
pub mod metrics;

/// Shared result type.
pub use error::{Result, WebUiError};
pub use metrics::{HttpMetrics, Observation};
