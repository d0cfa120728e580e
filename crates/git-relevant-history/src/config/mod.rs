//! Configuration management.
//!
//! Handles loading the optional `.git-relevant-history.toml` file.

mod error;
mod loader;
mod schema;

pub use error::{ConfigError, ConfigResult};
pub use loader::{CONFIG_FILE_NAME, find_config_from, load_config};
pub use schema::{Config, LogConfig};
