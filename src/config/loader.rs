// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Configuration loading.

use crate::error::{CometError, ConfigError, Result};
use std::path::{Path, PathBuf};

use super::schema::Config;
use super::validate::validate;

/// The configuration file name.
pub const CONFIG_FILE_NAME: &str = ".cometrc";

/// Find the configuration file in the current directory, its parents, or the
/// user's home directory.
pub fn find_config_file() -> Option<PathBuf> {
    let current_dir = std::env::current_dir().ok()?;
    find_config_file_from(&current_dir)
}

/// Find the configuration file starting from a specific directory.
pub fn find_config_file_from(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }

        if !current.pop() {
            break;
        }
    }

    if let Some(home) = dirs::home_dir() {
        let config_path = home.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
    }

    None
}

/// Load configuration from the default locations.
pub fn load_config() -> Result<Config> {
    match find_config_file() {
        Some(path) => load_config_from(&path),
        None => {
            tracing::debug!("No configuration file found, using defaults");
            Ok(Config::default())
        }
    }
}

/// Load configuration from a specific path.
pub fn load_config_from(path: &Path) -> Result<Config> {
    tracing::debug!("Loading configuration from: {:?}", path);

    if !path.exists() {
        return Err(CometError::Config(ConfigError::NotFound {
            path: path.to_path_buf(),
        }));
    }

    let content = std::fs::read_to_string(path).map_err(|e| {
        CometError::Config(ConfigError::ParseError {
            message: format!("Failed to read config file: {}", e),
        })
    })?;

    parse_config(&content)
}

/// Parse and validate configuration from a JSON string.
pub fn parse_config(content: &str) -> Result<Config> {
    let config: Config = serde_json::from_str(content).map_err(|e| {
        CometError::Config(ConfigError::ParseError {
            message: format!("Failed to parse JSON: {}", e),
        })
    })?;

    validate(&config).map_err(CometError::Config)?;

    Ok(config)
}
