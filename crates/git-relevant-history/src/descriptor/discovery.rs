//! Package file discovery.

use std::path::{Component, Path, PathBuf};

use serde::Serialize;
use tracing::trace;
use walkdir::WalkDir;

use super::DescriptorResult;

/// Selects the files that belong in the distributed package.
///
/// Everything under the package root is included except directories whose
/// name appears in `exclude`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PackageDiscovery {
    /// Directory names left out of the package.
    pub exclude: Vec<String>,
}

impl PackageDiscovery {
    /// Creates a discovery rule excluding the given directory names.
    pub fn excluding<I, S>(exclude: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            exclude: exclude.into_iter().map(Into::into).collect(),
        }
    }

    /// Returns true if the relative `path` is part of the package.
    pub fn includes(&self, path: impl AsRef<Path>) -> bool {
        !path.as_ref().components().any(|component| match component {
            Component::Normal(name) => self.exclude.iter().any(|ex| name == ex.as_str()),
            _ => false,
        })
    }

    /// Collects the package files under `root`, as sorted relative paths.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory tree cannot be read.
    pub fn collect(&self, root: impl AsRef<Path>) -> DescriptorResult<Vec<PathBuf>> {
        let root = root.as_ref();
        let mut files = Vec::new();

        for entry in WalkDir::new(root)
            .follow_links(false)
            .into_iter()
            .filter_entry(|e| e.depth() == 0 || self.includes(e.file_name()))
        {
            let entry = entry?;
            if !entry.file_type().is_file() {
                continue;
            }

            if let Ok(relative) = entry.path().strip_prefix(root) {
                trace!(path = %relative.display(), "including file");
                files.push(relative.to_path_buf());
            }
        }

        files.sort();
        Ok(files)
    }
}

impl Default for PackageDiscovery {
    fn default() -> Self {
        Self::excluding(["tests"])
    }
}
