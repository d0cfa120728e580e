//! Console-script entry points.

use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};
use tracing::debug;

use super::{DescriptorError, DescriptorResult};

/// A callable reachable from a console script.
pub type Callable = fn() -> anyhow::Result<()>;

/// Callables compiled into this crate, keyed by qualified path.
const CALLABLES: &[(&str, Callable)] = &[("gitrelevanthistory::main::main", crate::main::main)];

/// A console-script entry point: `name = module.path:callable`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryPoint {
    /// The command name installed on the command path.
    pub name: String,

    /// Module path segments.
    pub module: Vec<String>,

    /// Callable inside the module.
    pub callable: String,
}

impl EntryPoint {
    /// Returns the fully qualified Rust path of the target callable.
    #[must_use]
    pub fn target(&self) -> String {
        format!("{}::{}", self.module.join("::"), self.callable)
    }
}

impl FromStr for EntryPoint {
    type Err = DescriptorError;

    fn from_str(spec: &str) -> DescriptorResult<Self> {
        let invalid = |reason| DescriptorError::InvalidEntryPoint {
            spec: spec.to_string(),
            reason,
        };

        let (name, target) = spec.split_once('=').ok_or_else(|| invalid("missing `=`"))?;
        let (module, callable) = target
            .trim()
            .rsplit_once(':')
            .ok_or_else(|| invalid("missing `:`"))?;

        let name = name.trim();
        let module = module.trim();
        let callable = callable.trim();
        if name.is_empty() {
            return Err(invalid("empty command name"));
        }
        if callable.is_empty() {
            return Err(invalid("empty callable"));
        }
        if module.is_empty() {
            return Err(invalid("empty module"));
        }

        let module: Vec<String> = module
            .replace("::", ".")
            .split('.')
            .map(str::to_string)
            .collect();
        if module.iter().any(String::is_empty) {
            return Err(invalid("empty module segment"));
        }
        // a stray `:` survives only when the callable separator was doubled
        if module.iter().any(|segment| segment.contains(':')) {
            return Err(invalid("malformed module path"));
        }

        Ok(Self {
            name: name.to_string(),
            module,
            callable: callable.to_string(),
        })
    }
}

impl fmt::Display for EntryPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} = {}:{}",
            self.name,
            self.module.join("."),
            self.callable
        )
    }
}

impl Serialize for EntryPoint {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Resolves an entry point to the callable it names.
///
/// # Errors
///
/// Returns [`DescriptorError::UnresolvedEntryPoint`] if no such callable exists.
pub fn resolve(entry_point: &EntryPoint) -> DescriptorResult<Callable> {
    let target = entry_point.target();
    debug!(%entry_point, %target, "resolving entry point");

    CALLABLES
        .iter()
        .find(|(path, _)| *path == target)
        .map(|(_, callable)| *callable)
        .ok_or(DescriptorError::UnresolvedEntryPoint(target))
}
