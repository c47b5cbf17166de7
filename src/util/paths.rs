//! Locations of Spotlight's per-user files.

use std::path::PathBuf;

use super::constants;

/// Resolve the per-user application data directory.
///
/// Prefers `%LOCALAPPDATA%\Spotlight` on Windows, then
/// `$XDG_CONFIG_HOME/spotlight`, then `$HOME/.config/spotlight`.
/// Returns `None` when none of these variables is set.
pub fn app_data_dir() -> Option<PathBuf> {
    if let Some(local) = non_empty_var("LOCALAPPDATA") {
        return Some(PathBuf::from(local).join(constants::APP_DATA_DIR));
    }
    if let Some(xdg) = non_empty_var("XDG_CONFIG_HOME") {
        return Some(PathBuf::from(xdg).join(constants::XDG_APP_DIR));
    }
    non_empty_var("HOME").map(|home| {
        PathBuf::from(home)
            .join(".config")
            .join(constants::XDG_APP_DIR)
    })
}

/// Path of the user configuration file.
pub fn config_file() -> Option<PathBuf> {
    app_data_dir().map(|dir| dir.join(constants::CONFIG_FILE_NAME))
}

/// Path of the computer list, honouring the environment override.
pub fn computers_file() -> Option<PathBuf> {
    if let Some(path) = non_empty_var(constants::COMPUTERS_ENV_VAR) {
        return Some(PathBuf::from(path));
    }
    app_data_dir().map(|dir| dir.join(constants::COMPUTERS_FILE_NAME))
}

/// Path of the log directory.
pub fn log_dir() -> Option<PathBuf> {
    app_data_dir().map(|dir| dir.join(constants::LOG_DIR))
}

fn non_empty_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.is_empty())
}
