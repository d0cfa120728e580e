//! Extract subproject with just the relevant history.
//!
//! This crate provides:
//! - The package descriptor mirroring the crate manifest
//! - Console-script entry point resolution
//! - The `main` entry callable invoked by the `git-relevant-history` command

pub mod cli;
pub mod config;
pub mod descriptor;
mod logging;
pub mod main;

pub use config::{CONFIG_FILE_NAME, Config, ConfigError, ConfigResult};
pub use descriptor::{DescriptorError, DescriptorResult, EntryPoint, PackageDescriptor};
