//! CLI definition.

use std::path::PathBuf;

use clap::Parser;

/// Extract subproject with just the relevant history.
#[derive(Debug, Parser)]
#[command(name = "git-relevant-history")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Configuration file (default: nearest .git-relevant-history.toml)
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Print the package metadata and exit
    #[arg(long)]
    pub metadata: bool,
}
