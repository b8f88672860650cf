use std::fmt;

use serde::Serialize;

/// Association between a URL path and a view unit, owned by the module
/// that declares it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RouteDescriptor {
    /// Normalized route path
    pub path: String,
    /// Id of the view unit the path resolves to
    pub unit_id: String,
}

impl RouteDescriptor {
    /// Create a route descriptor. The path is normalized on construction.
    pub fn new(path: &str, unit_id: &str) -> Self {
        Self {
            path: normalize_path(path),
            unit_id: unit_id.to_string(),
        }
    }
}

impl fmt::Display for RouteDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.path, self.unit_id)
    }
}

/// Normalize a route path: a leading slash is guaranteed, a trailing slash
/// is stripped, and the empty path collapses to "/".
pub fn normalize_path(path: &str) -> String {
    let trimmed = path.trim();
    let trimmed = trimmed.trim_end_matches('/');
    if trimmed.is_empty() {
        return "/".to_string();
    }
    if trimmed.starts_with('/') {
        trimmed.to_string()
    } else {
        format!("/{}", trimmed)
    }
}
