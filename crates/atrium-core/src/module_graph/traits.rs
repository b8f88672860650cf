use std::sync::Arc;

use async_trait::async_trait;

use crate::config::AppConfig;
use crate::module_graph::dependency::ModuleImport;
use crate::module_graph::error::ModuleSystemError;
use crate::module_graph::unit::{UnitDescriptor, UnitInstance};
use crate::module_graph::version::VersionRange;
use crate::routing::RouteDescriptor;
use crate::view::AlertCenter;

/// Shared facilities handed to module lifecycle hooks.
pub struct ModuleHostContext {
    /// Application-wide alert center.
    pub alerts: Arc<AlertCenter>,
    /// The configuration the shell was built with.
    pub config: AppConfig,
}

impl ModuleHostContext {
    pub fn new(alerts: Arc<AlertCenter>, config: AppConfig) -> Self {
        Self { alerts, config }
    }
}

/// Core trait every application module implements.
///
/// A module is a declarative record: it names the modules it imports, the
/// units it owns, the subset it re-exports, and the routes it contributes.
/// The registry reads these lists once at registration and validation;
/// modules are immutable afterwards.
#[async_trait]
pub trait AppModule: Send + Sync {
    /// The unique module name
    fn name(&self) -> &'static str;

    /// The module version (semver string)
    fn version(&self) -> &str;

    /// Shell API versions this module accepts
    fn compatible_shell_versions(&self) -> Vec<VersionRange>;

    /// Modules this module consumes
    fn imports(&self) -> Vec<ModuleImport>;

    /// Units owned by this module
    fn declarations(&self) -> Vec<UnitDescriptor>;

    /// Subset of units re-exposed to importers.
    ///
    /// An entry must be one of this module's declarations or a unit
    /// exported by one of its direct imports (a re-export).
    fn exports(&self) -> Vec<String>;

    /// Routes contributed by this module
    fn routes(&self) -> Vec<RouteDescriptor> {
        Vec::new()
    }

    /// Unit rendered as the document root when this module is mounted as
    /// the root module. Only the root module sets this.
    fn bootstrap_unit(&self) -> Option<String> {
        None
    }

    /// Construct the instance for one of this module's declared units.
    ///
    /// Called once per declaration during graph validation. Returning
    /// `None` for a declared id fails validation.
    fn instantiate(&self, unit_id: &str) -> Option<UnitInstance>;

    /// Hook run after graph validation, in dependency order.
    async fn on_mount(&self, context: &ModuleHostContext) -> Result<(), ModuleSystemError> {
        let _ = context;
        Ok(())
    }

    /// Hook run at unmount, in reverse dependency order.
    async fn on_unmount(&self) -> Result<(), ModuleSystemError> {
        Ok(())
    }
}
