//! Portal configuration.
//!
//! Defaults, then environment, then command-line overrides. The backend
//! address is injected into the API client from here; there is no global.

use std::time::Duration;

use thiserror::Error;

use crate::models::DEFAULT_VIEWER_EMAIL;

pub const DEFAULT_BACKEND_URL: &str = "http://localhost:8000";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_LOG_FILTER: &str = "info";

pub const ENV_BACKEND_URL: &str = "LITTLEYEARS_BACKEND_URL";
pub const ENV_VIEWER: &str = "LITTLEYEARS_VIEWER";
pub const ENV_LOG: &str = "LITTLEYEARS_LOG";
pub const ENV_TIMEOUT: &str = "LITTLEYEARS_TIMEOUT_SECS";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("Backend URL cannot be empty")]
    EmptyBackendUrl,
    #[error("Backend URL must start with http:// or https:// (got {0})")]
    UnsupportedScheme(String),
    #[error("Viewer email cannot be empty")]
    EmptyViewer,
    #[error("Request timeout must be at least one second")]
    ZeroTimeout,
    #[error("Invalid value for {name}: {value}")]
    InvalidValue { name: &'static str, value: String },
}

/// Configuration for the portal client.
///
/// Use the builder methods to customize it.
///
/// # Example
///
/// ```
/// use littleyears::config::PortalConfig;
///
/// let config = PortalConfig::default()
///     .with_backend_url("http://portal.local:9000")
///     .with_viewer("grandpa@family.demo");
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PortalConfig {
    /// Base address of the portal backend
    pub backend_url: String,
    /// Viewer applied at startup
    pub default_viewer: String,
    /// Per-request timeout for the HTTP client
    pub request_timeout_secs: u64,
    /// `EnvFilter` directive for the log file
    pub log_filter: String,
}

impl Default for PortalConfig {
    fn default() -> Self {
        Self {
            backend_url: DEFAULT_BACKEND_URL.to_string(),
            default_viewer: DEFAULT_VIEWER_EMAIL.to_string(),
            request_timeout_secs: DEFAULT_TIMEOUT_SECS,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl PortalConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_backend_url(mut self, url: impl Into<String>) -> Self {
        self.backend_url = url.into();
        self
    }

    pub fn with_viewer(mut self, email: impl Into<String>) -> Self {
        self.default_viewer = email.into();
        self
    }

    pub fn with_request_timeout_secs(mut self, secs: u64) -> Self {
        self.request_timeout_secs = secs;
        self
    }

    pub fn with_log_filter(mut self, filter: impl Into<String>) -> Self {
        self.log_filter = filter.into();
        self
    }

    /// Create config from the `LITTLEYEARS_*` environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Same as [`from_env`](Self::from_env) with an injectable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(url) = lookup(ENV_BACKEND_URL) {
            config = config.with_backend_url(url);
        }
        if let Some(viewer) = lookup(ENV_VIEWER) {
            config = config.with_viewer(viewer);
        }
        if let Some(filter) = lookup(ENV_LOG).filter(|f| !f.trim().is_empty()) {
            config = config.with_log_filter(filter);
        }
        if let Some(raw) = lookup(ENV_TIMEOUT) {
            let secs = raw
                .trim()
                .parse::<u64>()
                .map_err(|_| ConfigError::InvalidValue {
                    name: ENV_TIMEOUT,
                    value: raw.clone(),
                })?;
            config = config.with_request_timeout_secs(secs);
        }

        Ok(config)
    }

    /// Check the values and normalize whitespace.
    pub fn validate(mut self) -> Result<Self, ConfigError> {
        self.backend_url = self.backend_url.trim().to_string();
        self.default_viewer = self.default_viewer.trim().to_string();

        if self.backend_url.is_empty() {
            return Err(ConfigError::EmptyBackendUrl);
        }
        if !(self.backend_url.starts_with("http://") || self.backend_url.starts_with("https://")) {
            return Err(ConfigError::UnsupportedScheme(self.backend_url));
        }
        if self.default_viewer.is_empty() {
            return Err(ConfigError::EmptyViewer);
        }
        if self.request_timeout_secs == 0 {
            return Err(ConfigError::ZeroTimeout);
        }
        Ok(self)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}
