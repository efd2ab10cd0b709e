//! TOML-based application configuration.
//!
//! Stores the active profile name and the defaults applied when a task is
//! entered without explicit classification. Stored at
//! `<data_dir>/config.toml`.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use super::data_dir;
use crate::error::ConfigError;

/// Profile configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileConfig {
    #[serde(default = "default_profile_name")]
    pub name: String,
}

/// Defaults applied to newly entered tasks.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DefaultsConfig {
    #[serde(default = "default_duration_minutes")]
    pub duration_minutes: i64,
    #[serde(default = "default_priority")]
    pub priority: String,
    #[serde(default = "default_cognitive_load")]
    pub cognitive_load: String,
}

/// Application configuration.
///
/// Serialized to/from TOML at `<data_dir>/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub profile: ProfileConfig,
    #[serde(default)]
    pub defaults: DefaultsConfig,
}

// Default functions
fn default_profile_name() -> String {
    "default".into()
}
fn default_duration_minutes() -> i64 {
    30
}
fn default_priority() -> String {
    "medium".into()
}
fn default_cognitive_load() -> String {
    "moderate".into()
}

impl Default for ProfileConfig {
    fn default() -> Self {
        Self {
            name: default_profile_name(),
        }
    }
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            duration_minutes: default_duration_minutes(),
            priority: default_priority(),
            cognitive_load: default_cognitive_load(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            profile: ProfileConfig::default(),
            defaults: DefaultsConfig::default(),
        }
    }
}

impl Config {
    fn path() -> Result<PathBuf, ConfigError> {
        let dir = data_dir().map_err(|e| ConfigError::LoadFailed {
            path: PathBuf::from("<data_dir>"),
            message: e.to_string(),
        })?;
        Ok(dir.join("config.toml"))
    }

    /// Load the configuration, falling back to defaults when no file exists.
    pub fn load() -> Result<Self, ConfigError> {
        let path = Self::path()?;
        if !path.exists() {
            return Ok(Config::default());
        }
        let raw = std::fs::read_to_string(&path).map_err(|e| ConfigError::LoadFailed {
            path: path.clone(),
            message: e.to_string(),
        })?;
        toml::from_str(&raw).map_err(|e| ConfigError::LoadFailed {
            path,
            message: e.to_string(),
        })
    }

    /// Save the configuration.
    pub fn save(&self) -> Result<(), ConfigError> {
        let path = Self::path()?;
        let raw = toml::to_string_pretty(self).map_err(|e| ConfigError::SaveFailed {
            path: path.clone(),
            message: e.to_string(),
        })?;
        std::fs::write(&path, raw).map_err(|e| ConfigError::SaveFailed {
            path,
            message: e.to_string(),
        })
    }

    /// Get a value by dotted key.
    pub fn get(&self, key: &str) -> Result<String, ConfigError> {
        match key {
            "profile.name" => Ok(self.profile.name.clone()),
            "defaults.duration_minutes" => Ok(self.defaults.duration_minutes.to_string()),
            "defaults.priority" => Ok(self.defaults.priority.clone()),
            "defaults.cognitive_load" => Ok(self.defaults.cognitive_load.clone()),
            _ => Err(ConfigError::UnknownKey(key.to_string())),
        }
    }

    /// Set a value by dotted key.
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        match key {
            "profile.name" => {
                if value.trim().is_empty() {
                    return Err(ConfigError::InvalidValue {
                        key: key.to_string(),
                        message: "profile name must not be empty".to_string(),
                    });
                }
                self.profile.name = value.to_string();
            }
            "defaults.duration_minutes" => {
                let minutes: i64 = value.parse().map_err(|_| ConfigError::InvalidValue {
                    key: key.to_string(),
                    message: format!("expected an integer, got '{value}'"),
                })?;
                if minutes < 0 {
                    return Err(ConfigError::InvalidValue {
                        key: key.to_string(),
                        message: "duration must be non-negative".to_string(),
                    });
                }
                self.defaults.duration_minutes = minutes;
            }
            "defaults.priority" => self.defaults.priority = value.to_string(),
            "defaults.cognitive_load" => self.defaults.cognitive_load = value.to_string(),
            _ => return Err(ConfigError::UnknownKey(key.to_string())),
        }
        Ok(())
    }

    /// All known keys and their current values.
    pub fn list(&self) -> Vec<(&'static str, String)> {
        vec![
            ("profile.name", self.profile.name.clone()),
            (
                "defaults.duration_minutes",
                self.defaults.duration_minutes.to_string(),
            ),
            ("defaults.priority", self.defaults.priority.clone()),
            (
                "defaults.cognitive_load",
                self.defaults.cognitive_load.clone(),
            ),
        ]
    }
}
