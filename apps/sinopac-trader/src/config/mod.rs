//! Configuration for the trader binary.
//!
//! Loaded from `sinopac.yaml` (or the file named by `SINOPAC_CONFIG`) with
//! environment variable interpolation, then validated. Every section is
//! optional.
//!
//! # Usage
//!
//! ```rust,ignore
//! use sinopac_trader::config::load_config;
//!
//! // Default path, falling back to built-in defaults when absent
//! let config = load_config(None)?;
//!
//! println!("gateway: {}", config.gateway.base_url);
//! ```
//!
//! ```yaml
//! mode: ${SINOPAC_ENV:-SIMULATION}
//! gateway:
//!   base_url: http://127.0.0.1:8370
//!   timeout_secs: 30
//! credentials:
//!   path: ~/.sinorc
//! logging:
//!   level: info
//!   file: sino_trader.log
//! ```

pub mod credentials;
mod gateway;
mod logging;

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::application::ports::TradingMode;

pub use credentials::{default_credential_path, load_credentials};
pub use gateway::GatewaySettings;
pub use logging::LoggingConfig;

/// Environment variable naming the config file.
pub const CONFIG_PATH_ENV: &str = "SINOPAC_CONFIG";

/// Environment variable overriding the trading mode.
pub const TRADING_MODE_ENV: &str = "SINOPAC_ENV";

/// Config file used when neither an explicit path nor `SINOPAC_CONFIG` is given.
pub const DEFAULT_CONFIG_PATH: &str = "sinopac.yaml";

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read configuration file.
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        /// Path to the config file.
        path: String,
        /// The underlying IO error.
        source: std::io::Error,
    },

    /// Failed to parse YAML configuration.
    #[error("Failed to parse config YAML: {0}")]
    ParseError(#[from] serde_yaml_bw::Error),

    /// Configuration validation failed.
    #[error("Config validation failed: {0}")]
    ValidationError(String),
}

/// Root configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Vendor environment.
    #[serde(default)]
    pub mode: TradingMode,
    /// Shioaji gateway connection.
    #[serde(default)]
    pub gateway: GatewaySettings,
    /// Credential file location.
    #[serde(default)]
    pub credentials: CredentialsConfig,
    /// Logging sinks and level.
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Where the credential file lives.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CredentialsConfig {
    /// Explicit path; `~/.sinorc` when unset. A leading `~/` is expanded.
    #[serde(default)]
    pub path: Option<PathBuf>,
}

impl CredentialsConfig {
    /// Resolve the credential file path.
    pub fn resolve(&self) -> Result<PathBuf, crate::domain::CredentialError> {
        match &self.path {
            Some(path) => expand_home(path),
            None => default_credential_path(),
        }
    }
}

// ============================================
// Configuration Loading
// ============================================

/// Load configuration.
///
/// With an explicit `path`, or with `SINOPAC_CONFIG` set, the file must
/// exist. Otherwise `sinopac.yaml` in the working directory is used when
/// present and built-in defaults when not. `SINOPAC_ENV` is applied last.
///
/// # Errors
///
/// Returns a `ConfigError` if the file cannot be read, parsed, or validated.
pub fn load_config(path: Option<&Path>) -> Result<AppConfig, ConfigError> {
    let explicit = path
        .map(Path::to_path_buf)
        .or_else(|| std::env::var_os(CONFIG_PATH_ENV).map(PathBuf::from));

    let mut config = match explicit {
        Some(path) => load_config_file(&path)?,
        None => {
            let default_path = Path::new(DEFAULT_CONFIG_PATH);
            if default_path.exists() {
                load_config_file(default_path)?
            } else {
                AppConfig::default()
            }
        }
    };

    if let Some(mode) = parse_mode_override(std::env::var(TRADING_MODE_ENV).ok().as_deref())? {
        config.mode = mode;
    }

    Ok(config)
}

/// Load configuration from a YAML string (useful for testing).
///
/// # Errors
///
/// Returns a `ConfigError` if the YAML cannot be parsed or validated.
pub fn load_config_from_string(yaml: &str) -> Result<AppConfig, ConfigError> {
    let interpolated = interpolate_env_vars(yaml);
    // An empty document means "all defaults".
    if interpolated.trim().is_empty() {
        return Ok(AppConfig::default());
    }
    let config: AppConfig = serde_yaml_bw::from_str(&interpolated)?;
    validate_config(&config)?;
    Ok(config)
}

fn load_config_file(path: &Path) -> Result<AppConfig, ConfigError> {
    let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
        path: path.display().to_string(),
        source: e,
    })?;
    load_config_from_string(&contents)
}

/// Parse a `SINOPAC_ENV` value. Unset or empty means no override.
fn parse_mode_override(value: Option<&str>) -> Result<Option<TradingMode>, ConfigError> {
    match value.map(str::trim) {
        None | Some("") => Ok(None),
        Some(v) if v.eq_ignore_ascii_case("LIVE") => Ok(Some(TradingMode::Live)),
        Some(v) if v.eq_ignore_ascii_case("SIMULATION") => Ok(Some(TradingMode::Simulation)),
        Some(v) => Err(ConfigError::ValidationError(format!(
            "{TRADING_MODE_ENV} must be LIVE or SIMULATION, got '{v}'"
        ))),
    }
}

/// Interpolate environment variables in a string.
///
/// Supports both `${VAR}` and `${VAR:-default}` syntax.
#[allow(clippy::expect_used)] // Regex is compile-time constant
fn interpolate_env_vars(input: &str) -> String {
    use std::sync::OnceLock;

    static ENV_VAR_REGEX: OnceLock<regex::Regex> = OnceLock::new();

    let re = ENV_VAR_REGEX.get_or_init(|| {
        regex::Regex::new(r"\$\{([A-Za-z_][A-Za-z0-9_]*)(?::-([^}]*))?\}")
            .expect("env var regex is valid")
    });

    re.replace_all(input, |cap: &regex::Captures<'_>| {
        let var_name = &cap[1];
        let default_value = cap.get(2).map_or("", |m| m.as_str());
        match std::env::var(var_name) {
            Ok(v) if !v.is_empty() => v,
            _ => default_value.to_string(),
        }
    })
    .into_owned()
}

/// Validate configuration values.
fn validate_config(config: &AppConfig) -> Result<(), ConfigError> {
    let base_url = &config.gateway.base_url;
    if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
        return Err(ConfigError::ValidationError(format!(
            "gateway.base_url must start with http:// or https://, got '{base_url}'"
        )));
    }

    if config.gateway.timeout_secs == 0 {
        return Err(ConfigError::ValidationError(
            "gateway.timeout_secs must be positive".to_string(),
        ));
    }

    let valid_levels = ["trace", "debug", "info", "warn", "error", "off"];
    let level = config.logging.level.to_ascii_lowercase();
    if !valid_levels.contains(&level.as_str()) {
        return Err(ConfigError::ValidationError(format!(
            "logging.level must be one of: {valid_levels:?}"
        )));
    }

    if !config.logging.console && config.logging.file.is_none() {
        return Err(ConfigError::ValidationError(
            "logging needs at least one sink: enable console or set a file".to_string(),
        ));
    }

    Ok(())
}

/// Expand a leading `~/` to the home directory.
fn expand_home(path: &Path) -> Result<PathBuf, crate::domain::CredentialError> {
    match path.strip_prefix("~") {
        Ok(rest) => dirs::home_dir()
            .map(|home| home.join(rest))
            .ok_or(crate::domain::CredentialError::NoHomeDir),
        Err(_) => Ok(path.to_path_buf()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();

        assert_eq!(config.mode, TradingMode::Simulation);
        assert_eq!(config.gateway.base_url, "http://127.0.0.1:8370");
        assert_eq!(config.gateway.timeout_secs, 30);
        assert_eq!(config.logging.level, "info");
        assert_eq!(
            config.logging.file.as_deref(),
            Some(Path::new("sino_trader.log"))
        );
        assert!(config.credentials.path.is_none());
    }

    #[test]
    fn test_empty_document_is_default() {
        let config = match load_config_from_string("") {
            Ok(c) => c,
            Err(e) => panic!("empty config should load: {e}"),
        };
        assert_eq!(config.mode, TradingMode::Simulation);
    }

    #[test]
    fn test_load_minimal_config() {
        let yaml = r"
mode: LIVE
";

        let config = match load_config_from_string(yaml) {
            Ok(c) => c,
            Err(e) => panic!("should load minimal config: {e}"),
        };
        assert!(config.mode.is_live());
        assert_eq!(config.gateway.timeout_secs, 30); // Default value
    }

    #[test]
    fn test_env_var_with_default_when_missing() {
        let input = "mode: ${SINOPAC_CONFIG_TEST_NONEXISTENT_VAR:-SIMULATION}";
        let result = interpolate_env_vars(input);

        assert_eq!(result, "mode: SIMULATION");
    }

    #[test]
    #[expect(clippy::literal_string_with_formatting_args)] // ${...} is env var syntax
    fn test_env_var_with_default_uses_existing() {
        let input = "path: ${PATH:-default}";
        let result = interpolate_env_vars(input);

        assert_ne!(result, "path: default");
        assert!(result.starts_with("path: "));
    }

    #[test]
    fn test_env_var_without_default_becomes_empty() {
        let input = "base_url: ${SINOPAC_CONFIG_TEST_UNLIKELY_TO_EXIST}";
        let result = interpolate_env_vars(input);

        assert_eq!(result, "base_url: ");
    }

    #[test]
    fn test_validation_bad_base_url() {
        let yaml = r"
gateway:
  base_url: 127.0.0.1:8370
";

        let Err(err) = load_config_from_string(yaml) else {
            panic!("expected error for base_url without scheme");
        };
        assert!(err.to_string().contains("base_url"));
    }

    #[test]
    fn test_validation_zero_timeout() {
        let yaml = r"
gateway:
  timeout_secs: 0
";

        let Err(err) = load_config_from_string(yaml) else {
            panic!("expected error for zero timeout");
        };
        assert!(err.to_string().contains("timeout_secs"));
    }

    #[test]
    fn test_validation_invalid_log_level() {
        let yaml = r"
logging:
  level: loud
";

        let Err(err) = load_config_from_string(yaml) else {
            panic!("expected error for invalid level");
        };
        assert!(err.to_string().contains("logging.level"));
    }

    #[test]
    fn test_validation_no_sinks() {
        let yaml = r"
logging:
  console: false
  file: null
";

        let Err(err) = load_config_from_string(yaml) else {
            panic!("expected error when every sink is off");
        };
        assert!(err.to_string().contains("sink"));
    }

    #[test]
    fn test_invalid_mode_is_parse_error() {
        let result = load_config_from_string("mode: PAPER\n");
        assert!(matches!(result, Err(ConfigError::ParseError(_))));
    }

    #[test]
    fn test_mode_override() {
        assert!(matches!(parse_mode_override(None), Ok(None)));
        assert!(matches!(parse_mode_override(Some("")), Ok(None)));
        assert!(matches!(
            parse_mode_override(Some("live")),
            Ok(Some(TradingMode::Live))
        ));
        assert!(matches!(
            parse_mode_override(Some("SIMULATION")),
            Ok(Some(TradingMode::Simulation))
        ));
        assert!(matches!(
            parse_mode_override(Some("PAPER")),
            Err(ConfigError::ValidationError(_))
        ));
    }

    #[test]
    fn test_full_config_parse() {
        let yaml = r#"
mode: LIVE
gateway:
  base_url: "https://bridge.internal:9000"
  timeout_secs: 10
credentials:
  path: /etc/sinopac/credentials.json
logging:
  level: debug
  file: /var/log/sino_trader.log
  console: false
"#;

        let config = match load_config_from_string(yaml) {
            Ok(c) => c,
            Err(e) => panic!("should load full config: {e}"),
        };

        assert!(config.mode.is_live());
        assert_eq!(config.gateway.base_url, "https://bridge.internal:9000");
        assert_eq!(config.gateway.timeout_secs, 10);
        assert_eq!(
            config.credentials.resolve().ok(),
            Some(PathBuf::from("/etc/sinopac/credentials.json"))
        );
        assert_eq!(config.logging.level, "debug");
        assert!(!config.logging.console);
    }

    #[test]
    fn test_tilde_expansion() {
        let Some(home) = dirs::home_dir() else {
            return;
        };
        let config = CredentialsConfig {
            path: Some(PathBuf::from("~/secrets/.sinorc")),
        };
        assert_eq!(
            config.resolve().ok(),
            Some(home.join("secrets").join(".sinorc"))
        );
    }
}
