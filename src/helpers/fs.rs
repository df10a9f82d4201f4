//! File System Utilities
//!
//! Platform directories for the settings file and log output.

use crate::error::{Error, Result};
use directories::ProjectDirs;
use std::fs;
use std::path::PathBuf;

fn project_dirs() -> Result<ProjectDirs> {
    ProjectDirs::from("com", "hello", "hello-gui").ok_or(Error::NoProjectDirs { app: "hello-gui" })
}

/// Get or create the application's configuration directory
///
/// Platform-specific locations:
/// - **Linux**: `~/.config/hello-gui/` or `$XDG_CONFIG_HOME/hello-gui/`
/// - **macOS**: `~/Library/Application Support/com.hello.hello-gui/`
/// - **Windows**: `C:\Users\<User>\AppData\Roaming\hello\hello-gui\config\`
pub fn get_or_create_config_dir() -> Result<PathBuf> {
    let project_dirs = project_dirs()?;
    let config_dir = project_dirs.config_dir();

    if !config_dir.exists() {
        fs::create_dir_all(config_dir)?;
    }

    Ok(config_dir.to_path_buf())
}

/// Get or create the directory holding rolling log files
///
/// Lives under the platform data directory, e.g. `~/.local/share/hello-gui/logs/` on Linux.
pub fn get_or_create_log_dir() -> Result<PathBuf> {
    let project_dirs = project_dirs()?;
    let log_dir = project_dirs.data_dir().join("logs");

    if !log_dir.exists() {
        fs::create_dir_all(&log_dir)?;
    }

    Ok(log_dir)
}

/// Check if running in development mode
pub fn is_development() -> bool {
    cfg!(debug_assertions)
}
