//! Shared application state for request handlers.

use std::sync::Arc;

use crate::env::{EnvSource, ProcessEnv};

/// Shared application state, cloneable across handlers via Arc-wrapped fields.
///
/// Holds the environment the message handler resolves its value from.
#[derive(Clone)]
pub struct AppState {
    pub env: Arc<dyn EnvSource>,
}

impl AppState {
    /// Creates application state reading from the given environment source.
    pub fn new(env: impl EnvSource + 'static) -> Self {
        Self { env: Arc::new(env) }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(ProcessEnv)
    }
}
