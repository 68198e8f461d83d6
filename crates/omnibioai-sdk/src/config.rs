//! Client configuration: explicit values, then environment, then defaults.

use crate::error::{Error, Result};
use std::fmt;
use std::time::Duration;
use url::Url;

/// Environment variable holding the registry base URL.
pub const BASE_URL_ENV: &str = "OMNIBIOAI_BASE_URL";

/// Environment variable holding the bearer token.
pub const TOKEN_ENV: &str = "OMNIBIOAI_TOKEN";

/// Base URL used when neither an explicit value nor the environment sets one.
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8001";

/// Development token accepted by a local registry.
pub const DEFAULT_TOKEN: &str = "dev";

/// Per-request timeout used when none is given explicitly.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

/// Explicit construction arguments. Unset fields fall back to the
/// environment, then to the built-in defaults.
#[derive(Debug, Clone, Default)]
pub struct ClientOptions {
    pub base_url: Option<String>,
    pub token: Option<String>,
    pub timeout: Option<Duration>,
}

impl ClientOptions {
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    pub fn token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}

/// Resolved, immutable client configuration.
#[derive(Clone, PartialEq, Eq)]
pub struct ClientConfig {
    base_url: String,
    token: String,
    timeout: Duration,
}

impl ClientConfig {
    /// Resolve against the process environment.
    pub fn from_env(options: ClientOptions) -> Result<Self> {
        Self::resolve(options, |key| std::env::var(key).ok())
    }

    /// Resolve each field as explicit value, then `env(key)`, then default.
    ///
    /// Trailing slashes are stripped from the base URL so paths can be
    /// appended with a single `/`.
    pub fn resolve<F>(options: ClientOptions, env: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let raw = resolve_field(
            options.base_url.as_deref(),
            &env,
            BASE_URL_ENV,
            DEFAULT_BASE_URL,
        );
        let base_url = normalize_base_url(&raw)?;
        let token = resolve_field(options.token.as_deref(), &env, TOKEN_ENV, DEFAULT_TOKEN);

        Ok(Self {
            base_url,
            token,
            timeout: options.timeout.unwrap_or(DEFAULT_TIMEOUT),
        })
    }

    /// Base URL without a trailing slash, e.g. `http://127.0.0.1:8001`.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn token(&self) -> &str {
        &self.token
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Value of the `Authorization` header sent with every request.
    pub fn authorization(&self) -> String {
        format!("Bearer {}", self.token)
    }
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("base_url", &self.base_url)
            .field("token", &"<redacted>")
            .field("timeout", &self.timeout)
            .finish()
    }
}

/// Pick the first usable value among `explicit`, `env(key)` and `default`.
///
/// Empty explicit values and blank environment values count as unset.
pub fn resolve_field<F>(explicit: Option<&str>, env: &F, key: &str, default: &str) -> String
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(v) = explicit.filter(|v| !v.is_empty()) {
        return v.to_string();
    }
    if let Some(v) = env(key).filter(|v| !v.trim().is_empty()) {
        return v;
    }
    default.to_string()
}

fn normalize_base_url(raw: &str) -> Result<String> {
    let trimmed = raw.trim_end_matches('/');
    let invalid = |reason: String| Error::InvalidBaseUrl {
        url: raw.to_string(),
        reason,
    };

    let url = Url::parse(trimmed).map_err(|e| invalid(e.to_string()))?;
    if url.cannot_be_a_base() {
        return Err(invalid("expected an http(s) base URL".to_string()));
    }
    // Request paths are appended to the base as text.
    if url.query().is_some() || url.fragment().is_some() {
        return Err(invalid(
            "registry URL must not contain a query or fragment".to_string(),
        ));
    }
    Ok(trimmed.to_string())
}
