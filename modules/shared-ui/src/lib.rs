//! Atrium shared module.
//!
//! Aggregates the cross-cutting presentational helpers (the language-name
//! transform and the alert views) so feature modules depend on one module
//! instead of each helper individually. Everything declared here is also
//! exported: the module exists purely to pass its declarations through.

mod alert_views;
mod transforms;

use std::sync::Arc;

use atrium_core::module_graph::VersionRange;
use atrium_core::{AppModule, ModuleImport, UnitDescriptor, UnitInstance};

pub use alert_views::{AlertListView, ErrorAlertListView};
pub use transforms::LanguageNameTransform;

/// Unit id of [`LanguageNameTransform`]
pub const LANGUAGE_NAME: &str = "language-name";
/// Unit id of [`AlertListView`]
pub const ALERT_LIST: &str = "alert-list";
/// Unit id of [`ErrorAlertListView`]
pub const ALERT_ERRORS: &str = "alert-errors";

/// The shared common module.
#[derive(Default)]
pub struct SharedCommonModule;

impl AppModule for SharedCommonModule {
    fn name(&self) -> &'static str {
        "shared-common"
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
                // Empty means incompatible with every shell
                vec![]
            }
        }
    }

    fn imports(&self) -> Vec<ModuleImport> {
        vec![]
    }

    fn declarations(&self) -> Vec<UnitDescriptor> {
        vec![
            UnitDescriptor::transform(LANGUAGE_NAME),
            UnitDescriptor::view(ALERT_LIST),
            UnitDescriptor::view(ALERT_ERRORS),
        ]
    }

    fn exports(&self) -> Vec<String> {
        // Pass-through aggregation: every declaration is re-exported
        self.declarations().into_iter().map(|d| d.id).collect()
    }

    fn instantiate(&self, unit_id: &str) -> Option<UnitInstance> {
        match unit_id {
            LANGUAGE_NAME => Some(UnitInstance::Transform(Arc::new(LanguageNameTransform))),
            ALERT_LIST => Some(UnitInstance::View(Arc::new(AlertListView))),
            ALERT_ERRORS => Some(UnitInstance::View(Arc::new(ErrorAlertListView))),
            _ => None,
        }
    }
}
