//! Forwarder configuration.
//!
//! Resolved from the process environment once per invocation and
//! handed to the [`Forwarder`](crate::forwarder::Forwarder), so the
//! handler itself never touches global state.

use std::fmt;

/// Environment variable holding the Gemini API key.
pub const API_KEY_ENV: &str = "GEMINI_API_KEY";

/// Environment variable that overrides the upstream endpoint.
pub const API_URL_ENV: &str = "GEMINI_API_URL";

/// Default `generateContent` endpoint.
pub const DEFAULT_ENDPOINT: &str = "https://generativelanguage.googleapis.com/v1beta/models/gemini-2.5-flash-preview-05-20:generateContent";

/// Read-only settings for one forwarding invocation.
#[derive(Clone)]
pub struct ForwarderConfig {
    /// Secret key passed to the upstream API. `None` means not configured.
    pub api_key: Option<String>,
    /// Full URL of the upstream `generateContent` endpoint.
    pub endpoint: String,
}

impl ForwarderConfig {
    /// Creates a configuration with no key and the default endpoint.
    pub fn new() -> Self {
        ForwarderConfig {
            api_key: None,
            endpoint: DEFAULT_ENDPOINT.to_string(),
        }
    }

    /// Loads the configuration from `GEMINI_API_KEY` and `GEMINI_API_URL`.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let api_key = lookup(API_KEY_ENV).filter(|key| !key.is_empty());
        let endpoint = lookup(API_URL_ENV)
            .filter(|url| !url.is_empty())
            .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());

        ForwarderConfig { api_key, endpoint }
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Returns true if an API key is available.
    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }
}

impl Default for ForwarderConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ForwarderConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ForwarderConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("endpoint", &self.endpoint)
            .finish()
    }
}
