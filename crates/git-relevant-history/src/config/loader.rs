//! Configuration loader.

use std::path::{Path, PathBuf};

use tracing::debug;

use super::{Config, ConfigError, ConfigResult};

/// Default configuration file name.
pub const CONFIG_FILE_NAME: &str = ".git-relevant-history.toml";

/// Loads configuration from the given path.
///
/// # Errors
///
/// Returns an error if the file does not exist, cannot be read or cannot be parsed.
pub fn load_config(path: impl AsRef<Path>) -> ConfigResult<Config> {
    let path = path.as_ref();
    debug!(?path, "loading configuration");

    if !path.exists() {
        return Err(ConfigError::NotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;

    Ok(config)
}

/// Finds the configuration file starting from the given directory.
///
/// Walks up the directory tree and returns the first `.git-relevant-history.toml`
/// found, or `None` when no ancestor has one.
pub fn find_config_from(start_dir: impl AsRef<Path>) -> Option<PathBuf> {
    let mut dir = start_dir.as_ref();

    loop {
        let config_path = dir.join(CONFIG_FILE_NAME);
        if config_path.is_file() {
            return Some(config_path);
        }

        match dir.parent() {
            Some(parent) => dir = parent,
            None => return None,
        }
    }
}
