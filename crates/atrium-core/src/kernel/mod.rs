//! # Atrium Kernel
//!
//! The kernel ties the subsystems together and owns the mount lifecycle.
//!
//! ## Key Responsibilities & Components:
//!
//! - **Bootstrap & Mount**: [`Shell`](bootstrap::Shell) wires the kernel
//!   services and is consumed by `mount`, which validates the module graph,
//!   runs module hooks, renders the root view, attaches the document, and
//!   returns the owned [`MountedApp`](bootstrap::MountedApp) handle.
//! - **Service Lifecycle**: the [`KernelService`](service::KernelService)
//!   trait and [`ServiceRegistry`](service::ServiceRegistry) for shared
//!   service access, both in the `service` submodule.
//! - **Core Constants**: system-wide constants in the `constants` submodule.
//! - **Error Handling**: the aggregate [`Error`](error::Error) type and the
//!   kernel `Result` alias in the `error` submodule.

pub mod bootstrap;
pub mod constants;
pub mod error;
pub mod service;

pub use bootstrap::{MountOptions, MountedApp, Shell};
pub use error::{Error, LifecyclePhase, Result};
pub use service::{KernelService, ServiceRegistry};
