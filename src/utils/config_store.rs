//! ConfigStore - Local Configuration Storage
//!
//! TOML files under the platform config directory, e.g.
//! `~/.config/dealdesk/config.toml` on Linux.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Serialize, de::DeserializeOwned};
use tracing::{debug, info};

use crate::constants::APP_DIR_NAME;
use crate::error::{Error, Result};

/// Get (and create) the application config directory
pub fn app_config_dir() -> Result<PathBuf> {
    let dir = dirs::config_dir()
        .ok_or(Error::MissingDir { kind: "config" })?
        .join(APP_DIR_NAME);

    if !dir.exists() {
        fs::create_dir_all(&dir)?;
    }

    Ok(dir)
}

/// Get (and create) the application data directory, used for log files
pub fn app_data_dir() -> Result<PathBuf> {
    let dir = dirs::data_local_dir()
        .ok_or(Error::MissingDir { kind: "local data" })?
        .join(APP_DIR_NAME);

    if !dir.exists() {
        fs::create_dir_all(&dir)?;
    }

    Ok(dir)
}

/// Load a TOML config file from the config directory
pub fn load_config<T: DeserializeOwned + Default>(filename: &str) -> Result<T> {
    load_config_from(&app_config_dir()?.join(filename))
}

/// Save a TOML config file into the config directory
pub fn save_config<T: Serialize>(filename: &str, config: &T) -> Result<()> {
    save_config_to(&app_config_dir()?.join(filename), config)
}

/// Load a TOML file; a missing or blank file yields the default value
pub fn load_config_from<T: DeserializeOwned + Default>(path: &Path) -> Result<T> {
    if !path.exists() {
        debug!(path = ?path, "Config file missing, using defaults");
        return Ok(T::default());
    }

    let content = fs::read_to_string(path)?;
    if content.trim().is_empty() {
        return Ok(T::default());
    }

    info!(path = ?path, "Loading config file");
    Ok(toml::from_str(&content)?)
}

/// Write a value as pretty TOML
pub fn save_config_to<T: Serialize>(path: &Path, config: &T) -> Result<()> {
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    info!(path = ?path, "Saved config file");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::config::AppConfig;

    fn scratch_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("dealdesk-{}-{name}", uuid::Uuid::new_v4()))
    }

    #[test]
    fn test_missing_file_is_default() {
        let path = scratch_path("missing.toml");
        let config: AppConfig = load_config_from(&path).expect("defaults");
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_save_then_load() {
        let path = scratch_path("config.toml");
        let mut config = AppConfig::default();
        config.tables.show_clear_button = false;
        config.notices.capacity = 5;

        save_config_to(&path, &config).expect("save");
        let loaded: AppConfig = load_config_from(&path).expect("load");
        let _ = fs::remove_file(&path);

        assert_eq!(loaded, config);
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let path = scratch_path("broken.toml");
        fs::write(&path, "tables = [").expect("write");
        let result: Result<AppConfig> = load_config_from(&path);
        let _ = fs::remove_file(&path);

        assert!(matches!(result, Err(Error::TomlDe { .. })));
    }
}
