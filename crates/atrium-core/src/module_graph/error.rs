use thiserror::Error;

use crate::module_graph::unit::UnitKind;
use crate::module_graph::version::VersionError;

/// Errors raised while registering modules or validating the module graph.
///
/// All of these are configuration-time failures: they surface while the
/// shell mounts, never during later rendering.
#[derive(Debug, Error)]
pub enum ModuleSystemError {
    /// A module with the same name is already registered.
    #[error("module already registered: {0}")]
    DuplicateModule(String),

    /// The module reports a version string that is not valid semver.
    #[error("module '{module}' declares an invalid version: {source}")]
    InvalidModuleVersion {
        module: String,
        #[source]
        source: VersionError,
    },

    /// None of the module's accepted shell version ranges match the shell.
    #[error("module '{module}' is not compatible with shell API version {shell_version}")]
    IncompatibleShellVersion { module: String, shell_version: String },

    /// An import names a module that was never registered.
    #[error("module '{module}' imports unknown module '{import}'")]
    MissingImport { module: String, import: String },

    /// The imported module exists but its version is outside the range.
    #[error("module '{module}' requires '{import}' version '{required}' but found '{found}'")]
    IncompatibleImport {
        module: String,
        import: String,
        required: String,
        found: String,
    },

    /// The import graph contains a cycle.
    #[error("circular module imports involving: {}", .0.join(", "))]
    CyclicImports(Vec<String>),

    /// Two modules declare the same unit id.
    #[error("unit '{unit}' is declared by both '{first}' and '{second}'")]
    DuplicateUnit {
        unit: String,
        first: String,
        second: String,
    },

    /// A module exports a unit it neither declares nor receives from an import.
    #[error("module '{module}' exports '{unit}', which it neither declares nor imports")]
    UndeclaredExport { module: String, unit: String },

    /// A declared unit could not be materialized by its owner.
    #[error("module '{module}' declares '{unit}' but cannot construct it")]
    UnitNotConstructible { module: String, unit: String },

    /// The constructed instance disagrees with the declared kind.
    #[error("unit '{unit}' in module '{module}' is declared as a {declared} but constructed as a {constructed}")]
    UnitKindMismatch {
        module: String,
        unit: String,
        declared: UnitKind,
        constructed: UnitKind,
    },

    /// A route targets a unit outside the declaring module.
    #[error("route '{path}' in module '{module}' targets '{unit}', which the module does not declare")]
    RouteToForeignUnit {
        module: String,
        path: String,
        unit: String,
    },

    /// The named bootstrap unit is not among the module's declarations.
    #[error("module '{module}' names bootstrap unit '{unit}', which it does not declare")]
    BootstrapUnitMissing { module: String, unit: String },

    /// The module asked to bootstrap declares no bootstrap unit at all.
    #[error("module '{0}' does not declare a bootstrap unit")]
    NoBootstrapUnit(String),

    /// Lookup of a module that is not registered.
    #[error("module not found: {0}")]
    ModuleNotFound(String),

    /// The graph was used before `validate` ran (or after it failed).
    #[error("module graph has not been validated")]
    GraphNotValidated,

    /// A module lifecycle hook returned an error.
    #[error("module '{module}' failed during {hook}: {message}")]
    LifecycleHookFailed {
        module: String,
        hook: &'static str,
        message: String,
    },
}
