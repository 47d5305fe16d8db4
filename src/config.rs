//! Configuration loading

/// Environment variable holding the log filter
pub const LOG_ENV: &str = "HOTKEY_RECORDER_LOG";

const DEFAULT_LOG_FILTER: &str = "info";

/// Runtime configuration for the `hotkey-recorder` binary
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// `tracing_subscriber::EnvFilter` directive, used when `RUST_LOG` is unset
    pub log_filter: String,
}

impl Config {
    /// Load configuration from environment and defaults
    pub fn load() -> Self {
        Self::from_log_var(std::env::var(LOG_ENV).ok())
    }

    fn from_log_var(value: Option<String>) -> Self {
        let log_filter = value
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());

        Self { log_filter }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_log_var(None)
    }
}
