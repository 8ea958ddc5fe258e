use crate::domain::{config::Config, error::{CliError, CliResult}};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Configuration file location relative to the home directory
pub const DEFAULT_CONFIG: &str = "~/.config/uhppote-cli/config.toml";

/// Configuration manager
pub struct ConfigManager {
    default_path: Option<PathBuf>,
}

impl ConfigManager {
    /// Create new configuration manager using the per-user default location
    pub fn new() -> Self {
        Self {
            default_path: Self::get_default_config_path(),
        }
    }

    /// Create a configuration manager with an explicit default location
    pub fn with_default_path(path: impl Into<PathBuf>) -> Self {
        Self {
            default_path: Some(path.into()),
        }
    }

    fn get_default_config_path() -> Option<PathBuf> {
        dirs::home_dir().map(|home| home.join(".config").join("uhppote-cli").join("config.toml"))
    }

    /// Default configuration path, if a home directory could be determined
    pub fn default_path(&self) -> Option<&Path> {
        self.default_path.as_deref()
    }

    /// Resolve the configuration for this invocation.
    ///
    /// Returns `None` when no configuration file exists. A file that exists
    /// but cannot be read or parsed is an error.
    pub fn resolve(&self, explicit: Option<&Path>) -> CliResult<Option<Config>> {
        let path = match explicit.or(self.default_path()) {
            Some(path) => path,
            None => {
                debug!("No configuration path available");
                return Ok(None);
            }
        };

        if !path.exists() {
            debug!("No configuration file at {}", path.display());
            return Ok(None);
        }

        let config = self.load_config_from_path(path)?;
        debug!(
            "Loaded configuration from {} ({} controllers)",
            path.display(),
            config.controllers.len()
        );
        Ok(Some(config))
    }

    /// Load configuration from specific path
    pub fn load_config_from_path(&self, path: &Path) -> CliResult<Config> {
        let content = fs::read_to_string(path).map_err(|e| CliError::Config {
            message: format!("Failed to read config file {}: {}", path.display(), e),
        })?;

        toml::from_str(&content).map_err(|e| CliError::Config {
            message: format!("Failed to parse config file {}: {}", path.display(), e),
        })
    }
}

impl Default for ConfigManager {
    fn default() -> Self {
        Self::new()
    }
}
