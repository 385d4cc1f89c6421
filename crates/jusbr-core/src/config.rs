//! Provider credentials and endpoint resolution.

use std::collections::BTreeMap;
use std::fmt::{Debug, Formatter};

use crate::error::AccessError;

pub const TOKEN_VAR: &str = "ESCAVADOR_TOKEN";
pub const TOKEN_VAR_FALLBACK: &str = "escavadorToken";
pub const BASE_URL_VAR: &str = "ESCAVADOR_BASE_URL";
pub const DEFAULT_BASE_URL: &str = "https://api.escavador.com/api/v2";

/// Key-value reader for host-provided settings.
pub trait Environment: Send + Sync {
    fn var(&self, key: &str) -> Option<String>;
}

/// Reads from the process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnvironment;

impl Environment for ProcessEnvironment {
    fn var(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }
}

/// Map-backed environment for embedding and tests.
#[derive(Debug, Clone, Default)]
pub struct StaticEnvironment {
    values: BTreeMap<String, String>,
}

impl StaticEnvironment {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_var(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.values.insert(key.into(), value.into());
        self
    }
}

impl Environment for StaticEnvironment {
    fn var(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }
}

/// Resolved access settings for one invocation.
#[derive(Clone, PartialEq, Eq)]
pub struct ProviderConfig {
    token: String,
    base_url: String,
}

impl ProviderConfig {
    pub fn new(token: impl Into<String>, base_url: impl AsRef<str>) -> Self {
        Self {
            token: token.into(),
            base_url: strip_trailing_slash(base_url.as_ref()),
        }
    }

    /// Resolve token and base URL. A missing token is a configuration failure.
    pub fn from_env(env: &dyn Environment) -> Result<Self, AccessError> {
        let token = non_empty_var(env, TOKEN_VAR)
            .or_else(|| non_empty_var(env, TOKEN_VAR_FALLBACK))
            .ok_or_else(AccessError::missing_credential)?;
        let base_url =
            non_empty_var(env, BASE_URL_VAR).unwrap_or_else(|| DEFAULT_BASE_URL.to_owned());

        Ok(Self::new(token, base_url))
    }

    /// Replace the base URL, e.g. from a command-line override.
    pub fn with_base_url(self, base_url: impl AsRef<str>) -> Self {
        Self::new(self.token, base_url)
    }

    pub fn token(&self) -> &str {
        &self.token
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl Debug for ProviderConfig {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProviderConfig")
            .field("token", &"<redacted>")
            .field("base_url", &self.base_url)
            .finish()
    }
}

fn non_empty_var(env: &dyn Environment, key: &str) -> Option<String> {
    env.var(key).filter(|value| !value.is_empty())
}

fn strip_trailing_slash(url: &str) -> String {
    url.strip_suffix('/').unwrap_or(url).to_owned()
}
