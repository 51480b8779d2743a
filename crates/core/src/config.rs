//! Client configuration

use crate::error::{CoreError, CoreResult};
use std::time::Duration;

/// API base URL used when `JOBBOARD_API_URL` is not set at build time
pub const DEFAULT_API_URL: &str = "http://localhost:8000/api";

/// Runtime configuration shared by the HTTP client and the session manager
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    api_url: String,
    request_timeout: Option<Duration>,
}

impl AppConfig {
    /// Create a configuration for the given API base URL
    pub fn new(api_url: impl Into<String>) -> CoreResult<Self> {
        let api_url = api_url.into();
        let api_url = api_url.trim().trim_end_matches('/');
        if api_url.is_empty() {
            return Err(CoreError::invalid_config("api_url must not be empty"));
        }
        url::Url::parse(api_url)
            .map_err(|e| CoreError::invalid_config(format!("api_url '{api_url}': {e}")))?;

        Ok(Self {
            api_url: api_url.to_string(),
            request_timeout: None,
        })
    }

    /// Load the configuration baked in at build time.
    ///
    /// The WASM target has no process environment, so the base URL is read
    /// with `option_env!` and falls back to [`DEFAULT_API_URL`].
    pub fn from_build_env() -> CoreResult<Self> {
        Self::new(option_env!("JOBBOARD_API_URL").unwrap_or(DEFAULT_API_URL))
    }

    /// Apply a per-request timeout (ignored on wasm32, where fetch has none)
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = Some(timeout);
        self
    }

    /// API base URL without a trailing slash
    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    /// Per-request timeout; `None` means requests never time out
    pub const fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout
    }
}
