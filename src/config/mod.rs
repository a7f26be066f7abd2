//! Configuration management for taginput.
//!
//! Settings are read from a TOML file in the user's configuration directory
//! (or the path in `TAGINPUT_CONFIG`) and can be overridden on the command line.

mod settings;

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

pub use settings::{ValueEncoding, WidgetSettings};

/// Environment variable that overrides the configuration file location.
pub const CONFIG_ENV_VAR: &str = "TAGINPUT_CONFIG";

/// Errors that can occur while loading or saving configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The platform configuration directory could not be determined.
    #[error("Could not determine configuration directory")]
    NoConfigDir,

    /// Reading the configuration file failed.
    #[error("Failed to read configuration: {0}")]
    ReadError(#[source] std::io::Error),

    /// Writing the configuration file failed.
    #[error("Failed to write configuration: {0}")]
    WriteError(#[source] std::io::Error),

    /// The configuration file is not valid TOML for this schema.
    #[error("Failed to parse configuration: {0}")]
    ParseError(#[from] toml::de::Error),

    /// The configuration could not be serialized.
    #[error("Failed to serialize configuration: {0}")]
    SerializeError(#[from] toml::ser::Error),

    /// A value is out of range.
    #[error("Invalid configuration: {0}")]
    ValidationError(String),
}

/// Result type for configuration operations.
pub type Result<T> = std::result::Result<T, ConfigError>;

/// Where the demo host gets its candidates.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CandidateSettings {
    /// Candidate file (JSON array, or one candidate per line).
    pub file: Option<PathBuf>,
    /// Candidates listed directly in the configuration.
    pub inline: Vec<String>,
    /// Simulated provider latency; zero means candidates are served synchronously.
    pub latency_ms: u64,
}

/// Top-level configuration file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Widget options.
    pub widget: WidgetSettings,
    /// Candidate source for the terminal host.
    pub candidates: CandidateSettings,
}

impl Config {
    /// Load configuration from the default location.
    ///
    /// A missing file is not an error: defaults are returned.
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;
        if !path.exists() {
            debug!(path = %path.display(), "No configuration file, using defaults");
            return Ok(Self::default());
        }
        Self::load_from(&path)
    }

    /// Load and validate configuration from a specific file.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::ReadError)?;
        let config: Config = toml::from_str(&content)?;
        config.validate()?;
        debug!(path = %path.display(), "Loaded configuration");
        Ok(config)
    }

    /// Save configuration to a specific file, creating parent directories.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(ConfigError::WriteError)?;
        }
        let content = self.to_toml()?;
        std::fs::write(path, content).map_err(ConfigError::WriteError)
    }

    /// Render the configuration as TOML.
    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Validate all sections.
    pub fn validate(&self) -> Result<()> {
        self.widget.validate()
    }

    /// Path of the configuration file.
    ///
    /// `TAGINPUT_CONFIG` wins over the platform configuration directory.
    pub fn config_path() -> Result<PathBuf> {
        if let Some(path) = std::env::var_os(CONFIG_ENV_VAR) {
            return Ok(PathBuf::from(path));
        }
        let base = dirs::config_dir().ok_or(ConfigError::NoConfigDir)?;
        Ok(base.join("taginput").join("config.toml"))
    }
}
