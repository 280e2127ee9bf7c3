//! Client configuration: endpoint, optional API key, and request timeout.

use std::time::Duration;

use crate::Error;

/// Production CVE API 2.0 endpoint.
pub const DEFAULT_BASE_URL: &str = "https://services.nvd.nist.gov/rest/json/cves/2.0";

/// Default request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Environment variable holding the API key.
pub const API_KEY_VAR: &str = "NVD_API_KEY";
/// Environment variable overriding the endpoint.
pub const BASE_URL_VAR: &str = "NVD_BASE_URL";
/// Environment variable overriding the timeout, in whole seconds.
pub const TIMEOUT_VAR: &str = "NVD_TIMEOUT_SECS";

/// Settings consumed once by [`crate::Client::from_config`].
#[derive(Clone)]
pub struct ClientConfig {
    /// Endpoint the query string is appended to.
    pub base_url: String,
    /// Sent as the `apiKey` header when present, never on the query string.
    pub api_key: Option<String>,
    pub timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: None,
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl std::fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientConfig")
            .field("base_url", &self.base_url)
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl ClientConfig {
    /// Sets the API key.
    ///
    /// Leading and trailing whitespace is trimmed before the key is stored,
    /// so a key pasted with a stray newline still works. A key that is blank
    /// after trimming is treated as no key. Control characters inside the key
    /// are kept and rejected by [`crate::Client::from_config`].
    pub fn with_api_key(mut self, api_key: &str) -> Self {
        let trimmed = api_key.trim();
        self.api_key = if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        };
        self
    }

    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.to_string();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Builds a configuration from the process environment.
    ///
    /// A `.env` file in the working directory is loaded first if present.
    /// Reads [`API_KEY_VAR`], [`BASE_URL_VAR`] and [`TIMEOUT_VAR`]; unset
    /// variables keep their defaults.
    pub fn from_env() -> Result<Self, Error> {
        if let Err(e) = dotenvy::dotenv() {
            if !e.not_found() {
                tracing::warn!("Failed to load .env file: {}", e);
            }
        }
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, Error> {
        let mut config = Self::default();
        if let Some(api_key) = lookup(API_KEY_VAR) {
            config = config.with_api_key(&api_key);
        }
        if let Some(base_url) = lookup(BASE_URL_VAR) {
            config = config.with_base_url(base_url.trim());
        }
        if let Some(timeout) = lookup(TIMEOUT_VAR) {
            let secs = timeout.trim().parse::<u64>().map_err(|_| {
                Error::InvalidConfig(format!(
                    "{} must be a whole number of seconds, got '{}'",
                    TIMEOUT_VAR, timeout
                ))
            })?;
            config = config.with_timeout(Duration::from_secs(secs));
        }
        Ok(config)
    }
}
