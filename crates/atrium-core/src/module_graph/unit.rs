use std::fmt;
use std::sync::Arc;

use serde::Serialize;

use crate::view::{ValueTransform, ViewUnit};

/// The kind of a declared unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum UnitKind {
    /// Renders a node tree.
    View,
    /// Pure string-to-string value transform.
    Transform,
}

impl fmt::Display for UnitKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UnitKind::View => write!(f, "view"),
            UnitKind::Transform => write!(f, "transform"),
        }
    }
}

/// Declarative record naming a unit owned by a module.
///
/// Unit ids are application-global: the registry rejects a graph in which
/// two modules declare the same id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UnitDescriptor {
    /// Unique identifier for the unit
    pub id: String,
    /// What the unit is
    pub kind: UnitKind,
}

impl UnitDescriptor {
    /// Create a descriptor for a view unit
    pub fn view(id: &str) -> Self {
        Self {
            id: id.to_string(),
            kind: UnitKind::View,
        }
    }

    /// Create a descriptor for a transform unit
    pub fn transform(id: &str) -> Self {
        Self {
            id: id.to_string(),
            kind: UnitKind::Transform,
        }
    }
}

impl fmt::Display for UnitDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} '{}'", self.kind, self.id)
    }
}

/// A materialized unit, constructed by its owning module during graph
/// validation and shared for the rest of the mount.
#[derive(Clone)]
pub enum UnitInstance {
    View(Arc<dyn ViewUnit>),
    Transform(Arc<dyn ValueTransform>),
}

impl UnitInstance {
    pub fn kind(&self) -> UnitKind {
        match self {
            UnitInstance::View(_) => UnitKind::View,
            UnitInstance::Transform(_) => UnitKind::Transform,
        }
    }

    pub fn id(&self) -> &str {
        match self {
            UnitInstance::View(view) => view.id(),
            UnitInstance::Transform(transform) => transform.id(),
        }
    }
}

impl fmt::Debug for UnitInstance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "UnitInstance({} '{}')", self.kind(), self.id())
    }
}
