//! Request-time environment lookups.
//!
//! The message endpoint reads its value on every request rather than at
//! startup, so an operator can change it without restarting the process.
//! Lookups go through [`EnvSource`] so the router can be driven by a fixed,
//! in-memory environment in tests.

use std::collections::HashMap;

use crate::config::{DEFAULT_MESSAGE, MESSAGE_ENV_VAR};

/// Source of environment variables.
pub trait EnvSource: Send + Sync {
    /// Value of `key`, or `None` when unset.
    fn var(&self, key: &str) -> Option<String>;
}

/// The real process environment, read fresh on every call.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    fn var(&self, key: &str) -> Option<String> {
        // A set-but-non-UTF-8 value still counts as set.
        std::env::var_os(key).map(|value| value.to_string_lossy().into_owned())
    }
}

/// Fixed in-memory environment.
#[derive(Debug, Clone, Default)]
pub struct StaticEnv {
    vars: HashMap<String, String>,
}

impl StaticEnv {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_var(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.vars.insert(key.into(), value.into());
        self
    }
}

impl EnvSource for StaticEnv {
    fn var(&self, key: &str) -> Option<String> {
        self.vars.get(key).cloned()
    }
}

/// Resolve the message served by `/api/message`.
///
/// Returns the value of `MESSAGE_FROM_CONFIG` if set (including the empty
/// string), otherwise [`DEFAULT_MESSAGE`].
pub fn resolve_message(env: &dyn EnvSource) -> String {
    env.var(MESSAGE_ENV_VAR)
        .unwrap_or_else(|| DEFAULT_MESSAGE.to_string())
}
