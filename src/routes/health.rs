//! Liveness endpoint at `/`.
//!
//! Only confirms the process can answer HTTP; it touches no other state.

use crate::config::HEALTH_BODY;

/// Health check handler.
///
/// Returns a fixed plain-text body, served as `text/plain; charset=utf-8`.
pub async fn index() -> &'static str {
    HEALTH_BODY
}
