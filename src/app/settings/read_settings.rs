use std::fs;
use std::io;
use std::path::Path;

use super::config_dirs::default_settings_path;
use super::write_settings::{Settings, SettingsError};

/// Load settings from the default location. A missing file, or a platform
/// without a config directory, yields the defaults.
pub fn load_settings() -> Result<Settings, SettingsError> {
    match default_settings_path() {
        Some(path) => load_settings_from(&path),
        None => Ok(Settings::default()),
    }
}

/// Load settings from `path`; returns the defaults when the file does not
/// exist.
pub fn load_settings_from(path: &Path) -> Result<Settings, SettingsError> {
    let content = match fs::read_to_string(path) {
        Ok(c) => c,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            tracing::debug!("no settings file at {}, using defaults", path.display());
            return Ok(Settings::default());
        }
        Err(source) => {
            return Err(SettingsError::Io {
                path: path.to_path_buf(),
                source,
            })
        }
    };
    toml::from_str(&content).map_err(|source| SettingsError::Parse {
        path: path.to_path_buf(),
        source,
    })
}
