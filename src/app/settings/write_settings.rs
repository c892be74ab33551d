use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

use super::config_dirs::default_settings_path;
use crate::app::types::{Category, TodoIcon, TodoItem};

/// Errors from reading or writing the settings file.
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("settings I/O error on `{}`: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid settings file `{}`: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("could not serialise settings: {0}")]
    Serialize(#[from] toml::ser::Error),

    /// No platform config directory could be resolved.
    #[error("no configuration directory available on this platform")]
    NoConfigDir,
}

/// User-tunable settings for the `todo` driver.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Category given to items added without `--category`.
    pub default_category: Category,
    /// Icon given to items added without `--icon`. Falls back to the
    /// category's own icon when unset.
    pub default_icon: Option<TodoIcon>,
    /// `tracing` filter directive, e.g. `todo_state=debug`.
    pub log_filter: Option<String>,
    /// When set, logs are also written to a daily file in this directory.
    pub log_dir: Option<PathBuf>,
    /// Print list views as JSON instead of plain text.
    pub json_output: bool,
    /// Show item ids in plain-text listings.
    pub show_ids: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            default_category: Category::Other,
            default_icon: None,
            log_filter: None,
            log_dir: None,
            json_output: false,
            show_ids: true,
        }
    }
}

impl Settings {
    /// Create an item using these defaults for anything not given.
    pub fn new_item(
        &self,
        task: impl Into<String>,
        category: Option<Category>,
        icon: Option<TodoIcon>,
    ) -> TodoItem {
        // An explicit category without an explicit icon uses that category's icon.
        let icon = match category {
            Some(_) => icon,
            None => icon.or(self.default_icon),
        };
        TodoItem::with_details(task, category.unwrap_or(self.default_category), icon)
    }
}

/// Save `settings` to the default location.
pub fn save_settings(settings: &Settings) -> Result<PathBuf, SettingsError> {
    let path = default_settings_path().ok_or(SettingsError::NoConfigDir)?;
    save_settings_to(settings, &path)?;
    Ok(path)
}

/// Write `settings` as pretty TOML to `path`, creating parent directories.
pub fn save_settings_to(settings: &Settings, path: &Path) -> Result<(), SettingsError> {
    let io_err = |source: io::Error| SettingsError::Io {
        path: path.to_path_buf(),
        source,
    };
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(io_err)?;
    }
    let content = toml::to_string_pretty(settings)?;
    fs::write(path, content).map_err(io_err)?;
    tracing::debug!("wrote settings to {}", path.display());
    Ok(())
}
