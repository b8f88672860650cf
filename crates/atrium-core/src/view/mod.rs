//! # Atrium View Layer
//!
//! Everything between the validated module graph and the document host:
//!
//! - [`Node`](node::Node)/[`Element`](node::Element): the minimal render tree
//!   and its HTML writer.
//! - [`ViewUnit`] and [`ValueTransform`]: the two unit contracts modules
//!   declare and the registry materializes.
//! - [`RenderScope`](scope::RenderScope): per-module render context with
//!   visibility-checked lookups and the routed outlet.
//! - [`DocumentHost`](host::DocumentHost): attach target for the rendered
//!   document, with the console host as built-in provider.
//! - [`AlertCenter`](alerts::AlertCenter): severity-tagged alert buffer the
//!   alert views read from.

pub mod alerts;
pub mod error;
pub mod host;
pub mod node;
pub mod scope;

pub use alerts::{Alert, AlertCenter, AlertSeverity, DefaultAlertCenter};
pub use error::ViewError;
pub use host::{ConsoleDocumentHost, DefaultDocumentManager, DocumentHost, RenderedDocument};
pub use node::{Element, Node};
pub use scope::RenderScope;

/// A renderable unit declared by a module.
pub trait ViewUnit: Send + Sync {
    /// The unit id, matching the owning module's declaration
    fn id(&self) -> &'static str;

    /// Render into the given scope
    fn render(&self, scope: &RenderScope<'_>) -> Result<Node, ViewError>;
}

/// A pure value transform declared by a module.
pub trait ValueTransform: Send + Sync {
    /// The unit id, matching the owning module's declaration
    fn id(&self) -> &'static str;

    /// Transform the input value
    fn transform(&self, input: &str) -> String;
}

#[cfg(test)]
mod tests;
