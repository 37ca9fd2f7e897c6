//! Client configuration.

use std::time::Duration;

/// Public FinMind API endpoint.
pub const DEFAULT_BASE_URL: &str = "https://api.finmindtrade.com";

/// Configuration for [`FinMindClient`](crate::FinMindClient).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FinMindConfig {
    /// Base URL without a trailing slash.
    pub base_url: String,
    /// HTTP request timeout.
    pub timeout: Duration,
}

impl FinMindConfig {
    /// Configuration for a base URL with the default 30 s timeout.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            timeout: Duration::from_secs(30),
        }
    }

    /// Set the HTTP timeout.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

impl Default for FinMindConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}
