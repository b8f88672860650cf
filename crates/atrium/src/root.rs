//! The root application module: owns the document frame and names the
//! bootstrap unit the shell renders at mount.

use std::sync::Arc;

use atrium_core::module_graph::VersionRange;
use atrium_core::view::{Element, ViewError};
use atrium_core::{
    AppModule, ModuleImport, Node, RenderScope, UnitDescriptor, UnitInstance, ViewUnit,
};

/// Unit id of [`ShellView`]
pub const APP_SHELL: &str = "app-shell";

/// The document frame: title header, shared alert list, routed outlet.
pub struct ShellView;

impl ViewUnit for ShellView {
    fn id(&self) -> &'static str {
        APP_SHELL
    }

    fn render(&self, scope: &RenderScope<'_>) -> Result<Node, ViewError> {
        let outlet = match scope.render_outlet() {
            Ok(node) => node,
            // An unroutable initial path leaves the outlet empty
            Err(ViewError::NoOutlet) => Element::new("main").attr("class", "empty").into_node(),
            Err(e) => return Err(e),
        };

        Ok(Element::new("div")
            .attr("class", "app")
            .child(
                Element::new("header")
                    .child(Element::new("h1").text(scope.title()).into_node())
                    .into_node(),
            )
            .child(scope.render_unit(shared_ui::ALERT_LIST)?)
            .child(Element::new("main").child(outlet).into_node())
            .into_node())
    }
}

/// The root module wiring the application together.
#[derive(Default)]
pub struct RootModule;

impl AppModule for RootModule {
    fn name(&self) -> &'static str {
        "root"
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
        vec![
            ModuleImport::any("shared-common"),
            ModuleImport::any("home"),
        ]
    }

    fn declarations(&self) -> Vec<UnitDescriptor> {
        vec![UnitDescriptor::view(APP_SHELL)]
    }

    fn exports(&self) -> Vec<String> {
        vec![]
    }

    fn bootstrap_unit(&self) -> Option<String> {
        Some(APP_SHELL.to_string())
    }

    fn instantiate(&self, unit_id: &str) -> Option<UnitInstance> {
        match unit_id {
            APP_SHELL => Some(UnitInstance::View(Arc::new(ShellView))),
            _ => None,
        }
    }
}
