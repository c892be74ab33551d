use directories_next::ProjectDirs;
use std::path::PathBuf;

/// File name of the settings file inside the project config directory.
pub const SETTINGS_FILE_NAME: &str = "settings.toml";

/// Platform config directory for this application, e.g.
/// `~/.config/todo_state` on Linux. `None` when no home directory can be
/// determined.
pub fn project_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "todo_state").map(|d| d.config_dir().to_path_buf())
}

/// Location `load_settings`/`save_settings` use when no explicit path is
/// given.
pub fn default_settings_path() -> Option<PathBuf> {
    project_config_dir().map(|d| d.join(SETTINGS_FILE_NAME))
}
