use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::config::types::Config;
use crate::modules::Location;

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Config validation failed: {message}")]
    ValidationError { message: String },
}

impl Config {
    /// Returns the path to the configuration file.
    ///
    /// Uses `~/.config/privacy-central/config.toml` on Unix/macOS,
    /// or equivalent on other platforms via `dirs::config_dir()`.
    /// Falls back to current directory if config_dir is unavailable.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("privacy-central").join("config.toml")
    }

    /// Loads configuration from the default config file.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path())
    }

    /// Loads configuration from `path`.
    ///
    /// - If the file doesn't exist, returns `Config::default()`.
    /// - If the file exists, parses it as TOML and validates.
    /// - Returns an error if reading, parsing, or validation fails.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration.
    ///
    /// Checks:
    /// - App packages and uids are unique
    /// - Permissions, trackers and the whitelist only name known packages
    /// - Every coordinate is in range and there is at least one random city
    pub fn validate(&self) -> Result<(), ConfigError> {
        let fixtures = &self.fixtures;

        let mut known = HashSet::new();
        let mut uids = HashSet::new();
        for app in &fixtures.apps {
            if !known.insert(app.package_name.as_str()) {
                return Err(invalid(format!("Duplicate app '{}'", app.package_name)));
            }
            if !uids.insert(app.uid) {
                return Err(invalid(format!("Duplicate uid {}", app.uid)));
            }
        }

        let check_package = |owner: &str, package: &String| {
            if known.contains(package.as_str()) {
                Ok(())
            } else {
                Err(invalid(format!("{} references unknown app '{}'", owner, package)))
            }
        };

        for permission in &fixtures.permissions {
            for package in permission.allowed.iter().chain(&permission.ignored) {
                check_package(&format!("Permission '{}'", permission.id), package)?;
            }
        }

        for tracker in &fixtures.trackers {
            let owner = format!("Tracker '{}'", tracker.id);
            for package in &tracker.apps {
                check_package(&owner, package)?;
            }
            for package in &tracker.blocked {
                if !tracker.apps.contains(package) {
                    return Err(invalid(format!(
                        "{} blocks '{}' which does not use it",
                        owner, package
                    )));
                }
            }
            if tracker.blocked_calls > tracker.calls {
                return Err(invalid(format!("{} has more blocked calls than calls", owner)));
            }
        }

        for package in &fixtures.whitelisted {
            check_package("Whitelist", package)?;
        }

        if let Some(fake) = &fixtures.fake_location {
            if !Location::new(fake.latitude, fake.longitude).is_valid() {
                return Err(invalid("Fake location coordinates out of range".to_string()));
            }
        }

        if self.location.random_cities.is_empty() {
            return Err(invalid("At least one random city must be configured".to_string()));
        }
        for city in &self.location.random_cities {
            if !city.location().is_valid() {
                return Err(invalid(format!("City '{}' coordinates out of range", city.name)));
            }
        }

        Ok(())
    }
}

fn invalid(message: String) -> ConfigError {
    ConfigError::ValidationError { message }
}
