//! # Atrium Module Graph
//!
//! The module system of the shell. A module is a declarative record naming
//! its imports (other modules), its declarations (the view and transform
//! units it owns), the subset it exports to importers, and the routes it
//! contributes.
//!
//! ## Key Components:
//!
//! - **Module Contract**: the [`AppModule`](traits::AppModule) trait and the
//!   [`ModuleHostContext`](traits::ModuleHostContext) handed to lifecycle hooks.
//! - **Registry & Validation**: [`ModuleRegistry`](registry::ModuleRegistry)
//!   collects modules and validates the whole graph once, producing the
//!   immutable [`ModuleGraph`](registry::ModuleGraph) (initialization order,
//!   unit ownership, visibility sets, materialized units).
//! - **Records**: [`UnitDescriptor`](unit::UnitDescriptor),
//!   [`ModuleImport`](dependency::ModuleImport), and the
//!   [`VersionRange`](version::VersionRange) constraint wrapper.
//! - **Manager**: [`DefaultModuleManager`](manager::DefaultModuleManager), the
//!   kernel service that drives validation and module lifecycle hooks.
//!
//! All graph violations are configuration-time errors surfaced while the
//! shell mounts, never during later rendering.

pub mod dependency;
pub mod error;
pub mod manager;
pub mod registry;
pub mod traits;
pub mod unit;
pub mod version;

pub use dependency::ModuleImport;
pub use error::ModuleSystemError;
pub use manager::DefaultModuleManager;
pub use registry::{ModuleGraph, ModuleRegistry};
pub use traits::{AppModule, ModuleHostContext};
pub use unit::{UnitDescriptor, UnitInstance, UnitKind};
pub use version::{VersionError, VersionRange};

#[cfg(test)]
mod tests;
