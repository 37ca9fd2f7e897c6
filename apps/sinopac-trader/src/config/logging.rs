//! Logging configuration.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Default level; `RUST_LOG` takes precedence when set.
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Log file, appended to and never rotated. `None` disables file output.
    #[serde(default = "default_log_file")]
    pub file: Option<PathBuf>,
    /// Also log to stdout.
    #[serde(default = "default_true")]
    pub console: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file: default_log_file(),
            console: true,
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

#[allow(clippy::unnecessary_wraps)] // serde default must match the field type
fn default_log_file() -> Option<PathBuf> {
    Some(PathBuf::from("sino_trader.log"))
}

const fn default_true() -> bool {
    true
}
