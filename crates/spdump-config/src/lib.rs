//! Configuration for the spdump CLI
//!
//! Settings live in a small TOML file. The location is taken from
//! `SPDUMP_CONFIG` when set, otherwise the platform config directory.

use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use which::which;

/// Environment variable overriding the config file location
pub const CONFIG_ENV: &str = "SPDUMP_CONFIG";

/// Keys accepted by [`Config::get`] and [`Config::set`]
pub const KEYS: &[&str] = &["swift-path", "log-file"];

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("Could not determine the config directory")]
    NoConfigDir,

    #[error("Unknown config key '{0}' (expected one of: swift-path, log-file)")]
    UnknownKey(String),

    #[error("swift executable not found: {0}")]
    SwiftNotFound(String),
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub struct Config {
    /// Path to the `swift` executable; looked up on PATH when unset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub swift_path: Option<String>,
    /// File that receives a copy of log output
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_file: Option<String>,
}

impl Config {
    /// Location of the config file
    pub fn path() -> Result<PathBuf, ConfigError> {
        if let Ok(env_path) = std::env::var(CONFIG_ENV) {
            let trimmed = env_path.trim();
            if !trimmed.is_empty() {
                return Ok(PathBuf::from(trimmed));
            }
        }

        #[cfg(not(target_os = "windows"))]
        let base = dirs::home_dir().map(|home| home.join(".config"));

        #[cfg(target_os = "windows")]
        let base = dirs::config_dir();

        base.map(|dir| dir.join("spdump").join("spdump.toml"))
            .ok_or(ConfigError::NoConfigDir)
    }

    /// Load from the default location, returning defaults if the file doesn't exist
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from_path(&Self::path()?)
    }

    pub fn load_from_path(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Config::default());
        }
        let content = fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    pub fn save(&self) -> Result<(), ConfigError> {
        self.save_to_path(&Self::path()?)
    }

    pub fn save_to_path(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    pub fn get(&self, key: &str) -> Result<Option<String>, ConfigError> {
        match key {
            "swift-path" => Ok(self.swift_path.clone()),
            "log-file" => Ok(self.log_file.clone()),
            _ => Err(ConfigError::UnknownKey(key.to_string())),
        }
    }

    pub fn set(&mut self, key: &str, value: String) -> Result<(), ConfigError> {
        match key {
            "swift-path" => self.swift_path = Some(value),
            "log-file" => self.log_file = Some(value),
            _ => return Err(ConfigError::UnknownKey(key.to_string())),
        }
        Ok(())
    }

    pub fn is_empty(&self) -> bool {
        self.swift_path.is_none() && self.log_file.is_none()
    }

    pub fn values_iter(&self) -> Vec<(&'static str, String)> {
        let mut values = Vec::new();
        if let Some(ref val) = self.swift_path {
            values.push(("swift-path", val.clone()));
        }
        if let Some(ref val) = self.log_file {
            values.push(("log-file", val.clone()));
        }
        values
    }

    /// Resolve the swift executable: the configured path, else `swift` on PATH
    pub fn resolve_swift(&self) -> Result<PathBuf, ConfigError> {
        match self.swift_path {
            Some(ref configured) => {
                let path = PathBuf::from(configured);
                if path.exists() {
                    Ok(path)
                } else {
                    Err(ConfigError::SwiftNotFound(configured.clone()))
                }
            }
            None => which("swift").map_err(|e| ConfigError::SwiftNotFound(e.to_string())),
        }
    }
}
