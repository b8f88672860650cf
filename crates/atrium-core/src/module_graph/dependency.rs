use std::fmt;

use semver::Version;
use serde::Serialize;

use crate::module_graph::version::VersionRange;

/// Represents an import of another module
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ModuleImport {
    /// The name of the imported module
    pub module_name: String,

    /// The version range that is acceptable, if constrained
    pub version_range: Option<VersionRange>,
}

impl ModuleImport {
    /// Create an import accepting any version of the module
    pub fn any(module_name: &str) -> Self {
        Self {
            module_name: module_name.to_string(),
            version_range: None,
        }
    }

    /// Create an import with a specific version range
    pub fn versioned(module_name: &str, version_range: VersionRange) -> Self {
        Self {
            module_name: module_name.to_string(),
            version_range: Some(version_range),
        }
    }

    /// Check whether the given module version satisfies this import
    pub fn is_satisfied_by(&self, version: &Version) -> bool {
        match &self.version_range {
            Some(range) => range.includes(version),
            // No version range means any version is acceptable
            None => true,
        }
    }
}

impl fmt::Display for ModuleImport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.version_range {
            Some(range) => write!(
                f,
                "import: {} (version: {})",
                self.module_name,
                range.constraint_string()
            ),
            None => write!(f, "import: {} (any version)", self.module_name),
        }
    }
}
