use serde::{Deserialize, Serialize};

use super::errors::ConfigError;
use super::logging::LoggingConfig;
use super::profile::ProfileConfig;

const LOCAL_CONFIG_PATH: &str = "tunnel-profile.toml";
const SYSTEM_CONFIG_PATH: &str = "/etc/tunnel-profile/config.toml";

/// Process settings for the tunnel-profile service
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct AppConfig {
    /// Which profile to load and where its relative references resolve
    #[serde(default)]
    pub profile: ProfileConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from file or use defaults
    ///
    /// Priority order:
    /// 1. Explicitly provided path
    /// 2. tunnel-profile.toml in current directory
    /// 3. /etc/tunnel-profile/config.toml
    /// 4. Default configuration
    pub fn load(path: Option<&str>, cli_overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = path {
            Self::from_file(path)?
        } else if let Some(path) = Self::get_config_path() {
            Self::from_file(&path)?
        } else {
            Self::default()
        };

        config.apply_cli_overrides(cli_overrides);
        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileRead(path.to_string(), e.to_string()))?;
        Self::from_toml(&contents)
    }

    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        toml::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Apply command-line overrides to configuration
    fn apply_cli_overrides(&mut self, overrides: CliOverrides) {
        if let Some(path) = overrides.profile_path {
            self.profile.path = Some(path);
        }
        if let Some(base_dir) = overrides.base_dir {
            self.profile.base_dir = Some(base_dir);
        }
        if let Some(home_dir) = overrides.home_dir {
            self.profile.home_dir = home_dir;
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.profile.home_dir.trim().is_empty() {
            return Err(ConfigError::Validation(
                "profile.home_dir cannot be empty".to_string(),
            ));
        }

        if matches!(&self.profile.path, Some(p) if p.trim().is_empty()) {
            return Err(ConfigError::Validation(
                "profile.path cannot be empty when set".to_string(),
            ));
        }

        if !self.logging.has_known_level() {
            return Err(ConfigError::Validation(format!(
                "Unknown log level '{}'",
                self.logging.level
            )));
        }

        if !self.logging.has_known_format() {
            return Err(ConfigError::Validation(format!(
                "Unknown log format '{}' (expected 'pretty' or 'json')",
                self.logging.format
            )));
        }

        Ok(())
    }

    /// Get the path to the configuration file being used
    pub fn get_config_path() -> Option<String> {
        if std::path::Path::new(LOCAL_CONFIG_PATH).exists() {
            Some(LOCAL_CONFIG_PATH.to_string())
        } else if std::path::Path::new(SYSTEM_CONFIG_PATH).exists() {
            Some(SYSTEM_CONFIG_PATH.to_string())
        } else {
            None
        }
    }
}

/// Command-line overrides for configuration
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub profile_path: Option<String>,
    pub base_dir: Option<String>,
    pub home_dir: Option<String>,
    pub log_level: Option<String>,
}
