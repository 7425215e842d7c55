//! Configuration module for cardbrowse
//!
//! Manages the catalog endpoint, UI, and logging settings. Settings are
//! layered: built-in defaults, then the optional config file in the user's
//! config directory, then `CARDBROWSE__*` environment variables
//! (e.g. `CARDBROWSE__API__BASE_URL`).

use config::{Config, ConfigError, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Default catalog endpoint
pub const DEFAULT_BASE_URL: &str = "https://api.pokemontcg.io/v2/cards";

/// Catalog endpoint settings
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct ApiConfig {
    /// Cards endpoint; listing and search parameters are appended to it
    pub base_url: String,
    /// Client identification sent as `User-Agent`
    pub client_id: String,
    /// Request timeout in seconds (0 disables the timeout)
    pub timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            client_id: concat!("cardbrowse/", env!("CARGO_PKG_VERSION")).to_string(),
            timeout_secs: 15,
        }
    }
}

/// Terminal UI settings
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct UiConfig {
    /// Heading shown above the browser
    pub title: String,
    /// Cards per grid row
    pub columns: u16,
    /// Event poll interval in milliseconds
    pub tick_rate_ms: u64,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            title: "Pokemon Cards".to_string(),
            columns: 3,
            tick_rate_ms: 50,
        }
    }
}

/// Log file settings
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct LoggingConfig {
    /// Directory for log files (defaults to the local data directory)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub directory: Option<PathBuf>,
    /// Default log level when `RUST_LOG` is unset
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            directory: None,
            level: "info".to_string(),
        }
    }
}

/// Application configuration structure
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, Default)]
#[serde(default)]
pub struct BrowserConfig {
    /// Catalog endpoint settings
    pub api: ApiConfig,
    /// Terminal UI settings
    pub ui: UiConfig,
    /// Log file settings
    pub logging: LoggingConfig,
}

impl BrowserConfig {
    /// Get the path to the config file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the system config directory cannot be determined.
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| ConfigError::Message("Could not determine config directory".to_string()))?;

        Ok(config_dir.join("cardbrowse").join("config.toml"))
    }

    /// Load configuration from the default location
    ///
    /// A missing config file is not an error; defaults apply.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the config file cannot be parsed or holds invalid values.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load configuration layered over the file at `path`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file cannot be parsed or holds invalid values.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(Config::try_from(&Self::default())?)
            .add_source(
                File::from(path.to_path_buf())
                    .format(FileFormat::Toml)
                    .required(false),
            )
            .add_source(
                Environment::with_prefix("CARDBROWSE")
                    .prefix_separator("__")
                    .separator("__"),
            )
            .build()?;

        let config: Self = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Check values the deserializer cannot
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Message` describing the first invalid value.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.api.base_url.trim().is_empty() {
            return Err(ConfigError::Message("api.base_url must not be empty".to_string()));
        }
        if self.ui.columns == 0 {
            return Err(ConfigError::Message("ui.columns must be at least 1".to_string()));
        }
        if self.ui.tick_rate_ms == 0 {
            return Err(ConfigError::Message("ui.tick_rate_ms must be at least 1".to_string()));
        }
        Ok(())
    }

    /// Save configuration to the default location
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the config directory cannot be determined or
    /// the file cannot be written.
    pub fn save(&self) -> Result<PathBuf, ConfigError> {
        let config_path = Self::config_path()?;
        self.save_to(&config_path)?;
        Ok(config_path)
    }

    /// Save configuration as TOML at `path`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the parent directory cannot be created, the configuration
    /// cannot be serialized to TOML, or the file cannot be written.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| ConfigError::Message(format!("Failed to create config directory: {e}")))?;
        }

        fs::write(path, self.to_toml()?)
            .map_err(|e| ConfigError::Message(format!("Failed to write config file: {e}")))?;

        Ok(())
    }

    /// Render the configuration as pretty TOML
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if serialization fails.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self)
            .map_err(|e| ConfigError::Message(format!("Failed to serialize config: {e}")))
    }

    /// Directory log files are written to
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if no directory is configured and the local data
    /// directory cannot be determined.
    pub fn log_directory(&self) -> Result<PathBuf, ConfigError> {
        if let Some(dir) = &self.logging.directory {
            return Ok(dir.clone());
        }
        let data_dir = dirs::data_local_dir()
            .ok_or_else(|| ConfigError::Message("Could not determine data directory".to_string()))?;
        Ok(data_dir.join("cardbrowse").join("logs"))
    }
}
