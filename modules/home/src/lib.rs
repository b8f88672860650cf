//! Atrium home module.
//!
//! Declares the home view and registers the root route for it. The view is
//! deliberately not exported: only the router reaches it.

use std::sync::Arc;

use async_trait::async_trait;

use atrium_core::module_graph::{ModuleSystemError, VersionRange};
use atrium_core::view::{Element, ViewError};
use atrium_core::{
    AppModule, ModuleHostContext, ModuleImport, Node, RenderScope, RouteDescriptor,
    UnitDescriptor, UnitInstance, ViewUnit,
};

/// Unit id of [`HomeView`]
pub const HOME_VIEW: &str = "home";

/// Route path the home module contributes
pub const HOME_ROUTE: &str = "/";

/// The home screen: a greeting plus the display name of the active locale,
/// resolved through the shared language-name transform.
pub struct HomeView;

impl ViewUnit for HomeView {
    fn id(&self) -> &'static str {
        HOME_VIEW
    }

    fn render(&self, scope: &RenderScope<'_>) -> Result<Node, ViewError> {
        let language = scope.apply_transform("language-name", scope.locale())?;
        Ok(Element::new("section")
            .attr("class", "home")
            .child(Element::new("h2").text("Welcome to Atrium").into_node())
            .child(
                Element::new("p")
                    .attr("class", "locale")
                    .text(&format!("Language: {}", language))
                    .into_node(),
            )
            .into_node())
    }
}

/// The home module.
#[derive(Default)]
pub struct HomeModule;

#[async_trait]
impl AppModule for HomeModule {
    fn name(&self) -> &'static str {
        "home"
    }

    fn version(&self) -> &str {
        "0.1.0"
    }

    fn compatible_shell_versions(&self) -> Vec<VersionRange> {
        const COMPATIBLE_SHELL_REQ: &str = "^0.1";
        match VersionRange::from_constraint(COMPATIBLE_SHELL_REQ) {
            Ok(range) => vec![range],
            Err(e) => {
                log::error!(
                    "Failed to parse shell version requirement ('{}') for {}: {}",
                    COMPATIBLE_SHELL_REQ,
                    self.name(),
                    e
                );
                vec![]
            }
        }
    }

    fn imports(&self) -> Vec<ModuleImport> {
        vec![ModuleImport::any("shared-common")]
    }

    fn declarations(&self) -> Vec<UnitDescriptor> {
        vec![UnitDescriptor::view(HOME_VIEW)]
    }

    fn exports(&self) -> Vec<String> {
        // The home view is module-local; nothing is re-exported
        vec![]
    }

    fn routes(&self) -> Vec<RouteDescriptor> {
        vec![RouteDescriptor::new(HOME_ROUTE, HOME_VIEW)]
    }

    fn instantiate(&self, unit_id: &str) -> Option<UnitInstance> {
        match unit_id {
            HOME_VIEW => Some(UnitInstance::View(Arc::new(HomeView))),
            _ => None,
        }
    }

    async fn on_mount(&self, context: &ModuleHostContext) -> Result<(), ModuleSystemError> {
        log::debug!("home module mounted (locale '{}')", context.config.locale);
        context.alerts.info(self.name(), "Welcome back");
        Ok(())
    }
}
