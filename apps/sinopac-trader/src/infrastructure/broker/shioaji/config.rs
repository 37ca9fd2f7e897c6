//! Gateway adapter configuration.

use std::time::Duration;

use crate::config::GatewaySettings;

/// Configuration for the Shioaji gateway adapter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GatewayConfig {
    /// Base URL of the bridge, without a trailing slash.
    pub base_url: String,
    /// HTTP request timeout.
    pub timeout: Duration,
}

impl GatewayConfig {
    /// Create a new configuration with the default 30 s timeout.
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

impl Default for GatewayConfig {
    fn default() -> Self {
        Self::from(&GatewaySettings::default())
    }
}

impl From<&GatewaySettings> for GatewayConfig {
    fn from(settings: &GatewaySettings) -> Self {
        Self::new(settings.base_url.as_str()).with_timeout(settings.timeout())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_points_at_local_bridge() {
        let config = GatewayConfig::default();
        assert_eq!(config.base_url, "http://127.0.0.1:8370");
        assert_eq!(config.timeout, Duration::from_secs(30));
    }

    #[test]
    fn trailing_slash_is_trimmed() {
        let config = GatewayConfig::new("http://localhost:9000/");
        assert_eq!(config.base_url, "http://localhost:9000");
    }

    #[test]
    fn from_settings_copies_timeout() {
        let settings = GatewaySettings {
            base_url: "https://bridge:8443".to_string(),
            timeout_secs: 5,
        };
        let config = GatewayConfig::from(&settings);
        assert_eq!(config.base_url, "https://bridge:8443");
        assert_eq!(config.timeout, Duration::from_secs(5));
    }
}
