//! Application configuration management.

use std::path::PathBuf;

use serde::Deserialize;

/// Application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Account export configuration.
    #[serde(default)]
    pub export: ExportConfig,
    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
    /// Random sampling configuration.
    #[serde(default)]
    pub sampling: SamplingConfig,
}

/// Account export configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ExportConfig {
    /// File the pipe-delimited account rows are written to.
    #[serde(default = "default_export_path")]
    pub path: PathBuf,
}

fn default_export_path() -> PathBuf {
    PathBuf::from("accounts.txt")
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            path: default_export_path(),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// `tracing_subscriber::EnvFilter` directive used when `RUST_LOG` is unset.
    #[serde(default = "default_log_filter")]
    pub filter: String,
    /// Emit JSON lines instead of human-readable output.
    #[serde(default)]
    pub json: bool,
}

fn default_log_filter() -> String {
    "workshop=info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: default_log_filter(),
            json: false,
        }
    }
}

/// Random sampling configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SamplingConfig {
    /// Fixed seed for reproducible sampling; entropy-seeded when absent.
    #[serde(default)]
    pub seed: Option<u64>,
}

impl AppConfig {
    /// Loads configuration from environment and config files.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(
                config::Environment::with_prefix("WORKSHOP")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }
}
