use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use semver::Version;
use tokio::sync::Mutex;

use crate::kernel::error::Result as KernelResult;
use crate::kernel::service::KernelService;
use crate::module_graph::error::ModuleSystemError;
use crate::module_graph::registry::{ModuleGraph, ModuleRegistry};
use crate::module_graph::traits::{AppModule, ModuleHostContext};

/// Kernel service owning the module registry.
///
/// Validation happens on `initialize`, module `on_mount` hooks run in graph
/// order on `start`, and `on_unmount` hooks run in reverse order on `stop`.
pub struct DefaultModuleManager {
    registry: Arc<Mutex<ModuleRegistry>>,
    context: ModuleHostContext,
    /// Modules whose `on_mount` hook has run, in execution order
    started: Mutex<Vec<String>>,
}

impl DefaultModuleManager {
    /// Create a new module manager for the given shell API version
    pub fn new(shell_version: Version, context: ModuleHostContext) -> Self {
        Self {
            registry: Arc::new(Mutex::new(ModuleRegistry::new(shell_version))),
            context,
            started: Mutex::new(Vec::new()),
        }
    }

    /// Get the registry Arc for direct access
    pub fn registry(&self) -> Arc<Mutex<ModuleRegistry>> {
        Arc::clone(&self.registry)
    }

    /// Register a module with the underlying registry
    pub async fn register_module(&self, module: Arc<dyn AppModule>) -> Result<(), ModuleSystemError> {
        let mut registry = self.registry.lock().await;
        registry.register_module(module)
    }

    /// The validated module graph. Fails before `initialize` has run.
    pub async fn graph(&self) -> Result<Arc<ModuleGraph>, ModuleSystemError> {
        let registry = self.registry.lock().await;
        registry.graph()
    }

    /// Names of the registered modules, in registration order
    pub async fn module_names(&self) -> Vec<String> {
        let registry = self.registry.lock().await;
        registry.module_names().to_vec()
    }
}

impl fmt::Debug for DefaultModuleManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DefaultModuleManager").finish_non_exhaustive()
    }
}

#[async_trait]
impl KernelService for DefaultModuleManager {
    fn name(&self) -> &'static str {
        "module-manager"
    }

    async fn initialize(&self) -> KernelResult<()> {
        let mut registry = self.registry.lock().await;
        let graph = registry.validate()?;
        log::info!(
            "module graph validated: {} modules, {} units",
            graph.init_order().len(),
            graph.unit_count()
        );
        Ok(())
    }

    async fn start(&self) -> KernelResult<()> {
        let graph = {
            let registry = self.registry.lock().await;
            registry.graph()?
        };

        for name in graph.init_order() {
            let module = {
                let registry = self.registry.lock().await;
                registry
                    .get_module(name)
                    .ok_or_else(|| ModuleSystemError::ModuleNotFound(name.clone()))?
            };
            log::debug!("running on_mount for module '{}'", name);
            module.on_mount(&self.context).await.map_err(|e| {
                ModuleSystemError::LifecycleHookFailed {
                    module: name.clone(),
                    hook: "on_mount",
                    message: e.to_string(),
                }
            })?;
            self.started.lock().await.push(name.clone());
        }
        Ok(())
    }

    async fn stop(&self) -> KernelResult<()> {
        // Unwind only the hooks that actually ran, newest first
        let started: Vec<String> = {
            let mut guard = self.started.lock().await;
            guard.drain(..).collect()
        };

        for name in started.iter().rev() {
            let module = {
                let registry = self.registry.lock().await;
                registry.get_module(name)
            };
            let Some(module) = module else {
                log::warn!("module '{}' disappeared before on_unmount", name);
                continue;
            };
            log::debug!("running on_unmount for module '{}'", name);
            if let Err(e) = module.on_unmount().await {
                log::error!("module '{}' failed to unmount: {}", name, e);
                return Err(ModuleSystemError::LifecycleHookFailed {
                    module: name.clone(),
                    hook: "on_unmount",
                    message: e.to_string(),
                }
                .into());
            }
        }
        Ok(())
    }
}
