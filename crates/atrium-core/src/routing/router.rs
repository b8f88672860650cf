use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::kernel::error::Result as KernelResult;
use crate::kernel::service::KernelService;
use crate::module_graph::manager::DefaultModuleManager;
use crate::routing::error::RoutingError;
use crate::routing::table::{RouteEntry, RouteTable};

/// Kernel service owning the route table.
///
/// The table is built on `initialize` from the module manager's validated
/// graph, so the router must be initialized after the module manager.
pub struct DefaultRouter {
    modules: Arc<DefaultModuleManager>,
    table: Mutex<Option<Arc<RouteTable>>>,
}

impl DefaultRouter {
    /// Create a new router backed by the given module manager
    pub fn new(modules: Arc<DefaultModuleManager>) -> Self {
        Self {
            modules,
            table: Mutex::new(None),
        }
    }

    /// The built route table. Fails before `initialize` has run.
    pub async fn table(&self) -> Result<Arc<RouteTable>, RoutingError> {
        self.table
            .lock()
            .await
            .as_ref()
            .map(Arc::clone)
            .ok_or(RoutingError::TableNotBuilt)
    }

    /// Resolve a path to a route entry
    pub async fn resolve(&self, path: &str) -> Result<RouteEntry, RoutingError> {
        let table = self.table().await?;
        table
            .resolve(path)
            .cloned()
            .ok_or_else(|| RoutingError::NoMatch(path.to_string()))
    }
}

impl fmt::Debug for DefaultRouter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DefaultRouter").finish_non_exhaustive()
    }
}

#[async_trait]
impl KernelService for DefaultRouter {
    fn name(&self) -> &'static str {
        "router"
    }

    async fn initialize(&self) -> KernelResult<()> {
        let registry_arc = self.modules.registry();
        let registry = registry_arc.lock().await;
        let graph = registry.graph()?;
        let table = RouteTable::build(&registry, &graph)?;
        log::info!("route table built: {} routes", table.len());
        *self.table.lock().await = Some(Arc::new(table));
        Ok(())
    }

    async fn start(&self) -> KernelResult<()> {
        Ok(())
    }

    async fn stop(&self) -> KernelResult<()> {
        *self.table.lock().await = None;
        Ok(())
    }
}
