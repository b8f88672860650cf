//! # Atrium Kernel Errors
//!
//! Defines [`Error`], the aggregate error type of the shell kernel. Each
//! subsystem keeps its own typed error enum; the kernel wraps them with
//! `#[from]` conversions and adds lifecycle and service-registry failures
//! of its own.

use std::fmt;
use std::result::Result as StdResult;

use thiserror::Error as ThisError;

use crate::config::error::ConfigError;
use crate::module_graph::error::ModuleSystemError;
use crate::routing::error::RoutingError;
use crate::view::error::ViewError;

/// Aggregate error type for the Atrium shell
#[derive(Debug, ThisError)]
pub enum Error {
    /// Module graph error (registration, validation, lifecycle hooks)
    #[error("module system error: {0}")]
    ModuleSystem(#[from] ModuleSystemError),

    /// Routing error (table construction, resolution)
    #[error("routing error: {0}")]
    Routing(#[from] RoutingError),

    /// View error (rendering, visibility, document host)
    #[error("view error: {0}")]
    View(#[from] ViewError),

    /// Configuration error (loading, parsing)
    #[error("config error: {0}")]
    Config(#[from] ConfigError),

    /// Error occurring during a specific kernel lifecycle phase.
    #[error("lifecycle error during {phase}: {message}")]
    Lifecycle {
        phase: LifecyclePhase,
        service: Option<String>,
        message: String,
        #[source]
        source: Option<Box<Error>>,
    },

    /// Error related to service registry operations or service lookup.
    #[error("service registry error during '{operation}': {message}")]
    ServiceRegistry {
        operation: String,
        service: Option<String>,
        message: String,
    },

    /// Generic error with message
    #[error("{0}")]
    Other(String),
}

/// Represents a specific phase in the kernel's lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifecyclePhase {
    Bootstrap,
    Initialize,
    Start,
    Render,
    Attach,
    Unmount,
}

impl fmt::Display for LifecyclePhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LifecyclePhase::Bootstrap => write!(f, "bootstrap"),
            LifecyclePhase::Initialize => write!(f, "initialize"),
            LifecyclePhase::Start => write!(f, "start"),
            LifecyclePhase::Render => write!(f, "render"),
            LifecyclePhase::Attach => write!(f, "attach"),
            LifecyclePhase::Unmount => write!(f, "unmount"),
        }
    }
}

/// Shorthand for Result with our Error type
pub type Result<T> = StdResult<T, Error>;

impl From<&str> for Error {
    fn from(msg: &str) -> Self {
        Error::Other(msg.to_string())
    }
}

impl From<String> for Error {
    fn from(msg: String) -> Self {
        Error::Other(msg)
    }
}

impl Error {
    /// Wrap another kernel error as a lifecycle failure in the given phase.
    pub fn lifecycle(phase: LifecyclePhase, service: Option<&str>, source: Error) -> Self {
        Error::Lifecycle {
            phase,
            service: service.map(str::to_string),
            message: source.to_string(),
            source: Some(Box::new(source)),
        }
    }
}
