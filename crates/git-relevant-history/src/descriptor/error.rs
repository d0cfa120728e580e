//! Descriptor error types.

use thiserror::Error;

/// Package descriptor errors.
#[derive(Debug, Error)]
pub enum DescriptorError {
    /// Required metadata is missing or malformed.
    #[error("invalid package metadata: {0}")]
    Invalid(String),

    /// Version string is not a semantic version.
    #[error("invalid version: {0}")]
    Version(#[from] semver::Error),

    /// Entry-point string could not be parsed.
    #[error("invalid entry point `{spec}`: {reason}")]
    InvalidEntryPoint {
        /// The offending entry-point string.
        spec: String,
        /// What is wrong with it.
        reason: &'static str,
    },

    /// No console script is declared under the given command name.
    #[error("no console script named {0}")]
    ScriptNotFound(String),

    /// Entry point references a callable that does not exist.
    #[error("cannot resolve entry point target {0}")]
    UnresolvedEntryPoint(String),

    /// A declared dependency cannot be resolved.
    #[error("dependency resolution failed: {0}")]
    Resolution(String),

    /// Metadata could not be rendered.
    #[error("failed to render metadata: {0}")]
    Render(#[from] toml::ser::Error),

    /// Directory traversal error.
    #[error("walk error: {0}")]
    Walk(#[from] walkdir::Error),
}

/// Result type for descriptor operations.
pub type DescriptorResult<T> = Result<T, DescriptorError>;
