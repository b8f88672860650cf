pub mod config;
pub mod kernel;
pub mod module_graph;
pub mod routing;
pub mod view;

// Re-export key public types for the binary and feature modules
pub use kernel::bootstrap::{MountOptions, MountedApp, Shell};
pub use kernel::error::Error as KernelError;
pub use module_graph::{AppModule, ModuleHostContext, ModuleImport, UnitDescriptor, UnitInstance};
pub use routing::RouteDescriptor;
pub use view::{AlertCenter, DocumentHost, Node, RenderScope, ValueTransform, ViewUnit};

#[cfg(test)]
mod tests;
