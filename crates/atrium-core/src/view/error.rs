use thiserror::Error;

use crate::module_graph::unit::UnitKind;

/// Errors raised while rendering views or attaching the document.
#[derive(Debug, Error)]
pub enum ViewError {
    /// The unit exists but is not visible to the rendering module.
    #[error("unit '{unit}' is not visible to module '{module}'")]
    UnitNotVisible { module: String, unit: String },

    /// The unit id is not present in the module graph at all.
    #[error("unit '{unit}' is not registered in the module graph")]
    UnknownUnit { unit: String },

    /// A view was requested where a transform was needed, or vice versa.
    #[error("unit '{unit}' is a {kind}, which cannot be used here")]
    WrongUnitKind { unit: String, kind: UnitKind },

    /// `render_outlet` was called but no route was resolved for this scope.
    #[error("no routed view is available for this scope")]
    NoOutlet,

    /// A unit's own render logic failed.
    #[error("render failed in unit '{unit}': {message}")]
    RenderFailed { unit: String, message: String },

    /// The document host rejected an attach or detach.
    #[error("document host error: {0}")]
    Host(String),
}
