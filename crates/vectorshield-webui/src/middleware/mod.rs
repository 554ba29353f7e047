//! Request pipeline stages.
//!
//! Outermost first: `instrument` (metrics + security headers), optional CORS,
//! then `trusted_host`.

pub mod instrument;
pub mod security;
pub mod trusted_host;
