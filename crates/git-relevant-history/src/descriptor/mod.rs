//! Package descriptor.
//!
//! A typed, immutable mirror of the crate manifest: the metadata a package
//! registry shows, the console scripts the package installs and the runtime
//! dependency it declares. Built once from compile-time values.

mod discovery;
mod entry_point;
mod error;

use std::collections::HashSet;

use serde::Serialize;
use tracing::debug;

pub use discovery::PackageDiscovery;
pub use entry_point::{Callable, EntryPoint, resolve};
pub use error::{DescriptorError, DescriptorResult};

/// Console scripts installed by this package.
pub const CONSOLE_SCRIPTS: &[&str] = &["git-relevant-history = gitrelevanthistory.main:main"];

/// Runtime dependencies declared by this package.
pub const REQUIRES: &[&str] = &["clap"];

/// Trove-style classifiers shown by package indexes.
pub const CLASSIFIERS: &[&str] = &[
    "License :: OSI Approved :: Apache Software License",
    "Programming Language :: Rust",
];

/// Where the long description comes from and how it is formatted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LongDescription {
    /// Path of the long description, relative to the package root.
    pub source: &'static str,

    /// Media type of the long description.
    pub content_type: &'static str,
}

/// Static metadata describing how the package is built and installed.
#[derive(Debug, Clone, Serialize)]
pub struct PackageDescriptor {
    /// Package name.
    pub name: &'static str,

    /// Semantic version string.
    pub version: &'static str,

    /// One-line description.
    pub description: &'static str,

    /// Homepage URL.
    pub homepage: &'static str,

    /// Author name.
    pub author: &'static str,

    /// Author email.
    pub author_email: &'static str,

    /// SPDX license identifier.
    pub license: &'static str,

    /// Classifier list.
    pub classifiers: &'static [&'static str],

    /// Whether non-code package data ships with the package.
    pub include_package_data: bool,

    /// Runtime dependency list.
    pub requires: &'static [&'static str],

    /// Console-script entry points.
    pub console_scripts: Vec<EntryPoint>,

    /// Long description source and format.
    pub long_description: LongDescription,

    /// Which files make up the package.
    pub packages: PackageDiscovery,
}

impl PackageDescriptor {
    /// Returns the descriptor of this build.
    ///
    /// Entries of [`CONSOLE_SCRIPTS`] that fail to parse are left out, so
    /// looking their command up reports [`DescriptorError::ScriptNotFound`].
    pub fn current() -> Self {
        let (author, author_email) = split_author(env!("CARGO_PKG_AUTHORS"));

        Self {
            name: env!("CARGO_PKG_NAME"),
            version: env!("CARGO_PKG_VERSION"),
            description: env!("CARGO_PKG_DESCRIPTION"),
            homepage: env!("CARGO_PKG_HOMEPAGE"),
            author,
            author_email,
            license: env!("CARGO_PKG_LICENSE"),
            classifiers: CLASSIFIERS,
            include_package_data: true,
            requires: REQUIRES,
            console_scripts: CONSOLE_SCRIPTS
                .iter()
                .filter_map(|spec| spec.parse().ok())
                .collect(),
            long_description: LongDescription {
                source: env!("CARGO_PKG_README"),
                content_type: "text/markdown",
            },
            packages: PackageDiscovery::default(),
        }
    }

    /// Checks the descriptor invariants.
    ///
    /// # Errors
    ///
    /// Returns the first violation found: empty name, non-semver version,
    /// a duplicated or unresolvable console script, or a duplicated
    /// dependency.
    pub fn validate(&self) -> DescriptorResult<()> {
        if self.name.trim().is_empty() {
            return Err(DescriptorError::Invalid("package name is empty".to_string()));
        }
        if self.version.trim().is_empty() {
            return Err(DescriptorError::Invalid(
                "package version is empty".to_string(),
            ));
        }
        semver::Version::parse(self.version)?;

        let mut names = HashSet::new();
        for entry_point in &self.console_scripts {
            if !names.insert(entry_point.name.as_str()) {
                return Err(DescriptorError::Invalid(format!(
                    "console script {} declared twice",
                    entry_point.name
                )));
            }
            resolve(entry_point)?;
        }

        let mut seen = HashSet::new();
        for requirement in self.requires {
            if requirement.trim().is_empty() {
                return Err(DescriptorError::Resolution(
                    "empty dependency name".to_string(),
                ));
            }
            if !seen.insert(*requirement) {
                return Err(DescriptorError::Resolution(format!(
                    "{requirement} declared twice"
                )));
            }
        }

        debug!(name = self.name, version = self.version, "descriptor is valid");
        Ok(())
    }

    /// Looks up a console script by command name.
    ///
    /// # Errors
    ///
    /// Returns [`DescriptorError::ScriptNotFound`] if no script has that name.
    pub fn console_script(&self, name: &str) -> DescriptorResult<&EntryPoint> {
        self.console_scripts
            .iter()
            .find(|ep| ep.name == name)
            .ok_or_else(|| DescriptorError::ScriptNotFound(name.to_string()))
    }

    /// Returns `"<name> <version>: <description>"`.
    pub fn summary(&self) -> String {
        format!("{} {}: {}", self.name, self.version, self.description)
    }

    /// Renders the distribution metadata as TOML.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_toml(&self) -> DescriptorResult<String> {
        Ok(toml::to_string(self)?)
    }
}

/// Splits the first `Name <email>` entry of a Cargo authors string.
fn split_author(authors: &'static str) -> (&'static str, &'static str) {
    let first = authors.split(':').next().unwrap_or_default();
    match first.split_once('<') {
        Some((name, email)) => (name.trim(), email.trim().trim_end_matches('>')),
        None => (first.trim(), ""),
    }
}
