use std::any::TypeId;
use std::sync::Arc;

use tokio::sync::Mutex;

use crate::config::{profile, AppConfig, RuntimeProfile};
use crate::kernel::constants;
use crate::kernel::error::{Error, LifecyclePhase, Result};
use crate::kernel::service::{KernelService, ServiceRegistry};
use crate::module_graph::error::ModuleSystemError;
use crate::module_graph::manager::DefaultModuleManager;
use crate::module_graph::traits::{AppModule, ModuleHostContext};
use crate::module_graph::version::parse_version;
use crate::routing::error::RoutingError;
use crate::routing::router::DefaultRouter;
use crate::routing::table::RouteEntry;
use crate::view::alerts::{AlertCenter, DefaultAlertCenter};
use crate::view::host::{
    ConsoleDocumentHost, DefaultDocumentManager, DocumentHost, RenderedDocument,
};
use crate::view::scope::RenderScope;

/// Options for a single mount operation.
#[derive(Debug, Clone)]
pub struct MountOptions {
    /// Keep whitespace between sibling nodes in the serialized document
    pub preserve_whitespace: bool,
    /// Route path rendered into the outlet at mount; falls back to the
    /// configured initial path
    pub initial_path: Option<String>,
}

impl Default for MountOptions {
    fn default() -> Self {
        Self {
            preserve_whitespace: false,
            initial_path: None,
        }
    }
}

/// The shell bootstrap builder.
///
/// A `Shell` wires the kernel services, collects module registrations, and
/// is consumed by [`mount`](Shell::mount), which either returns the owned
/// [`MountedApp`] handle or the failure that stopped the mount. Consuming
/// the builder makes a second mount of the same shell unrepresentable.
pub struct Shell {
    config: AppConfig,
    services: Arc<Mutex<ServiceRegistry>>,
    /// Service initialization order (stop runs in reverse)
    service_order: Vec<TypeId>,
    module_manager: Arc<DefaultModuleManager>,
    router: Arc<DefaultRouter>,
    alerts: Arc<DefaultAlertCenter>,
    document: Arc<DefaultDocumentManager>,
}

impl Shell {
    /// Creates a new shell writing its document to the console host.
    pub fn new(config: AppConfig) -> Result<Self> {
        Self::with_host(config, Arc::new(ConsoleDocumentHost))
    }

    /// Creates a new shell attached to the given document host.
    pub fn with_host(config: AppConfig, host: Arc<dyn DocumentHost>) -> Result<Self> {
        log::info!("Initializing {} v{}", constants::APP_NAME, constants::APP_VERSION);

        let shell_version = parse_version(constants::SHELL_API_VERSION).map_err(|e| {
            Error::Lifecycle {
                phase: LifecyclePhase::Bootstrap,
                service: None,
                message: format!("invalid shell API version: {}", e),
                source: None,
            }
        })?;

        let mut registry = ServiceRegistry::new();
        let mut init_order = Vec::new();

        // The alert center comes first so module hooks can post into it,
        // and goes down last for the same reason.
        let alerts = Arc::new(DefaultAlertCenter::new());
        registry.register(Arc::clone(&alerts));
        init_order.push(TypeId::of::<DefaultAlertCenter>());

        let context = ModuleHostContext::new(alerts.center(), config.clone());
        let module_manager = Arc::new(DefaultModuleManager::new(shell_version, context));
        registry.register(Arc::clone(&module_manager));
        init_order.push(TypeId::of::<DefaultModuleManager>());

        // The router reads the validated graph, so it initializes after
        // the module manager.
        let router = Arc::new(DefaultRouter::new(Arc::clone(&module_manager)));
        registry.register(Arc::clone(&router));
        init_order.push(TypeId::of::<DefaultRouter>());

        let document = Arc::new(DefaultDocumentManager::new(host));
        registry.register(Arc::clone(&document));
        init_order.push(TypeId::of::<DefaultDocumentManager>());

        Ok(Shell {
            config,
            services: Arc::new(Mutex::new(registry)),
            service_order: init_order,
            module_manager,
            router,
            alerts,
            document,
        })
    }

    /// Register an application module. All modules must be registered
    /// before mounting.
    pub async fn register_module(&self, module: Arc<dyn AppModule>) -> Result<()> {
        let name = module.name();
        self.module_manager.register_module(module).await?;
        log::debug!("registered module '{}'", name);
        Ok(())
    }

    /// Gets a specific service instance by its concrete type T.
    pub async fn get_service<T: KernelService + 'static>(&self) -> Option<Arc<T>> {
        let services = self.services.lock().await;
        services.get::<T>()
    }

    /// The configuration this shell was built with
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Mount the application: validate the module graph, start services
    /// and module hooks, render the root module's bootstrap unit, and
    /// attach the document.
    ///
    /// The single asynchronous operation of the shell. Exactly one of two
    /// outcomes is logged: a success line, or an error line with the
    /// failure detail. Failures are not retried; the caller decides what a
    /// degraded, unmounted process does next.
    pub async fn mount(self, root_module: &str, options: MountOptions) -> Result<MountedApp> {
        // Configuration must be pinned before anything initializes. If the
        // caller never activated a profile, development is pinned here.
        let active = profile::activate(RuntimeProfile::Development);
        log::info!(
            "Mounting {} v{} ({} profile)",
            constants::APP_NAME,
            constants::APP_VERSION,
            active
        );

        match self.mount_inner(root_module, &options).await {
            Ok(app) => {
                log::info!("Application started");
                Ok(app)
            }
            Err(e) => {
                log::error!("Application failed to mount: {}", e);
                Err(e)
            }
        }
    }

    async fn mount_inner(self, root_module: &str, options: &MountOptions) -> Result<MountedApp> {
        // Initialize, then start, every service in the predefined order
        {
            let services = self.services.lock().await;
            for type_id in &self.service_order {
                let service = services.get_by_type_id(type_id).ok_or_else(|| {
                    Error::ServiceRegistry {
                        operation: "RetrieveForInitialize".to_string(),
                        service: None,
                        message: format!("service instance missing for {:?}", type_id),
                    }
                })?;
                log::debug!("initializing service: {}", service.name());
                service
                    .initialize()
                    .await
                    .map_err(|e| Error::lifecycle(LifecyclePhase::Initialize, Some(service.name()), e))?;
            }

            for type_id in &self.service_order {
                let service = services.get_by_type_id(type_id).ok_or_else(|| {
                    Error::ServiceRegistry {
                        operation: "RetrieveForStart".to_string(),
                        service: None,
                        message: format!("service instance missing for {:?}", type_id),
                    }
                })?;
                log::debug!("starting service: {}", service.name());
                service
                    .start()
                    .await
                    .map_err(|e| Error::lifecycle(LifecyclePhase::Start, Some(service.name()), e))?;
            }
        }

        // Resolve the root module and its bootstrap unit
        let graph = self.module_manager.graph().await?;
        let root = {
            let registry_arc = self.module_manager.registry();
            let registry = registry_arc.lock().await;
            registry
                .get_module(root_module)
                .ok_or_else(|| ModuleSystemError::ModuleNotFound(root_module.to_string()))?
        };
        let bootstrap_unit = root
            .bootstrap_unit()
            .ok_or_else(|| ModuleSystemError::NoBootstrapUnit(root_module.to_string()))?;

        // Resolve the initial route for the outlet. A missing route leaves
        // the outlet empty rather than failing the mount.
        let initial_path = options
            .initial_path
            .clone()
            .unwrap_or_else(|| self.config.initial_path.clone());
        let outlet = match self.router.resolve(&initial_path).await {
            Ok(entry) => Some(entry),
            Err(RoutingError::NoMatch(path)) => {
                log::warn!("no route matches initial path '{}'", path);
                None
            }
            Err(e) => return Err(e.into()),
        };

        // Render the bootstrap unit and attach the document
        let alerts = self.alerts.center();
        let scope = RenderScope::new(
            root.name(),
            graph.as_ref(),
            alerts.as_ref(),
            &self.config,
            outlet.as_ref(),
        );
        let body = scope
            .render_unit(&bootstrap_unit)
            .map_err(|e| Error::lifecycle(LifecyclePhase::Render, None, e.into()))?;
        let html = body.to_html(options.preserve_whitespace);
        let document = RenderedDocument {
            title: self.config.title.clone(),
            body,
            html,
        };
        self.document
            .attach(document)
            .map_err(|e| Error::lifecycle(LifecyclePhase::Attach, Some(self.document.name()), e.into()))?;
        log::debug!("document attached to '{}' host", self.document.host_name());

        Ok(MountedApp {
            config: self.config,
            services: self.services,
            service_order: self.service_order,
            router: self.router,
            alerts: self.alerts,
            document: self.document,
        })
    }
}

/// The mounted application.
///
/// An explicitly owned handle to the single mounted instance. Dropping it
/// abandons the services without running their stop hooks; call
/// [`unmount`](MountedApp::unmount) for deterministic teardown.
#[derive(Debug)]
pub struct MountedApp {
    config: AppConfig,
    services: Arc<Mutex<ServiceRegistry>>,
    service_order: Vec<TypeId>,
    router: Arc<DefaultRouter>,
    alerts: Arc<DefaultAlertCenter>,
    document: Arc<DefaultDocumentManager>,
}

impl MountedApp {
    /// Whether the document is currently attached
    pub fn is_mounted(&self) -> bool {
        self.document.is_attached()
    }

    /// Snapshot of the attached document
    pub fn document(&self) -> Option<RenderedDocument> {
        self.document.current()
    }

    /// The configuration the application mounted with
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// The application alert center
    pub fn alerts(&self) -> Arc<AlertCenter> {
        self.alerts.center()
    }

    /// Resolve a path against the application route table
    pub async fn resolve_route(&self, path: &str) -> std::result::Result<RouteEntry, RoutingError> {
        self.router.resolve(path).await
    }

    /// Gets a specific service instance by its concrete type T.
    pub async fn get_service<T: KernelService + 'static>(&self) -> Option<Arc<T>> {
        let services = self.services.lock().await;
        services.get::<T>()
    }

    /// Unmount the application: stop all services in reverse
    /// initialization order and detach the document.
    pub async fn unmount(self) -> Result<()> {
        log::info!("Unmounting application...");
        let services = self.services.lock().await;

        for type_id in self.service_order.iter().rev() {
            if let Some(service) = services.get_by_type_id(type_id) {
                log::debug!("stopping service: {}", service.name());
                if let Err(e) = service.stop().await {
                    log::error!("error stopping service {}: {}", service.name(), e);
                    // Propagate the first error encountered during teardown
                    return Err(Error::lifecycle(
                        LifecyclePhase::Unmount,
                        Some(service.name()),
                        e,
                    ));
                }
            } else {
                log::warn!("service instance missing for {:?} during unmount", type_id);
            }
        }
        log::info!("Application unmounted");
        Ok(())
    }
}
