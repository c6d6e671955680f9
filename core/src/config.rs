//! Client configuration.
//!
//! Defaults point at a locally running backend. `from_env` lets deployments
//! override them without code changes.

use std::time::Duration;

use crate::error::ApiError;

pub const DEFAULT_BASE_URL: &str = "http://localhost:8080/gestiondestock/v1";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

pub const BASE_URL_ENV: &str = "GESTOCK_BASE_URL";
pub const TIMEOUT_ENV: &str = "GESTOCK_TIMEOUT_SECS";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GatewayConfig {
    pub base_url: String,
    /// Whole-request timeout applied by the HTTP transport.
    pub timeout: Duration,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl GatewayConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Read `GESTOCK_BASE_URL` and `GESTOCK_TIMEOUT_SECS`, falling back to the
    /// defaults for unset variables.
    pub fn from_env() -> Result<Self, ApiError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ApiError> {
        let mut config = Self::default();
        if let Some(base_url) = lookup(BASE_URL_ENV) {
            config.base_url = base_url;
        }
        if let Some(raw) = lookup(TIMEOUT_ENV) {
            let secs = raw
                .trim()
                .parse::<u64>()
                .map_err(|e| ApiError::Config(format!("{TIMEOUT_ENV} must be a whole number of seconds, got '{raw}': {e}")))?;
            config.timeout = Duration::from_secs(secs);
        }
        Ok(config)
    }
}
