//! Entry callable behind the `git-relevant-history` command.
//!
//! The console shim calls [`main`] with no arguments; everything from
//! argument parsing onward happens here.

use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{debug, info};

use crate::cli::Cli;
use crate::config::{self, Config};
use crate::descriptor::PackageDescriptor;
use crate::logging;

/// Parses the process arguments and runs the command.
///
/// # Errors
///
/// Returns an error if configuration cannot be loaded, the package
/// descriptor is invalid, or output cannot be written.
pub fn main() -> Result<()> {
    let cli = Cli::parse();
    run(&cli, &mut io::stdout().lock())
}

/// Runs the command for already parsed arguments, writing to `out`.
///
/// # Errors
///
/// See [`main`].
pub fn run(cli: &Cli, out: &mut impl Write) -> Result<()> {
    let (config, config_path) = load_config(cli)?;
    logging::init(cli.verbose, &config.log);
    if let Some(path) = &config_path {
        debug!(path = %path.display(), "configuration loaded");
    }

    let descriptor = PackageDescriptor::current();
    descriptor
        .validate()
        .context("package descriptor is invalid")?;
    info!(
        name = descriptor.name,
        version = descriptor.version,
        "starting"
    );

    if cli.metadata {
        write!(out, "{}", descriptor.to_toml()?)?;
    } else {
        writeln!(out, "{}", descriptor.summary())?;
    }

    Ok(())
}

/// Loads the explicit or nearest configuration file, falling back to defaults.
fn load_config(cli: &Cli) -> Result<(Config, Option<PathBuf>)> {
    let path = match &cli.config {
        Some(path) => Some(path.clone()),
        None => config::find_config_from(std::env::current_dir()?),
    };

    let Some(path) = path else {
        return Ok((Config::default(), None));
    };
    let config = config::load_config(&path)
        .with_context(|| format!("failed to load {}", path.display()))?;
    Ok((config, Some(path)))
}
