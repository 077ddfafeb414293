//! Default file locations.

use directories::ProjectDirs;
use std::path::PathBuf;

/// Name of the configuration file inside the config directory.
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Returns the default project directories for gnfd.
pub fn default_project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("org", "gnfd", "gnfd")
}

/// Returns the default configuration file path, if a home directory is known.
pub fn default_config_file() -> Option<PathBuf> {
    default_project_dirs().map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
}
