use crate::config::AppConfig;
use crate::module_graph::registry::ModuleGraph;
use crate::module_graph::unit::UnitInstance;
use crate::routing::table::RouteEntry;
use crate::view::alerts::AlertCenter;
use crate::view::error::ViewError;
use crate::view::node::Node;

/// Per-module render context.
///
/// A scope is pinned to the module whose view is currently rendering.
/// Lookups of transforms and embedded views are checked against that
/// module's visibility: its own declarations plus whatever its imports
/// export. The routed outlet is the one deliberate exception, because the
/// router, not the embedding module, picked that view.
pub struct RenderScope<'a> {
    module: &'a str,
    graph: &'a ModuleGraph,
    alerts: &'a AlertCenter,
    config: &'a AppConfig,
    outlet: Option<&'a RouteEntry>,
}

impl<'a> RenderScope<'a> {
    pub fn new(
        module: &'a str,
        graph: &'a ModuleGraph,
        alerts: &'a AlertCenter,
        config: &'a AppConfig,
        outlet: Option<&'a RouteEntry>,
    ) -> Self {
        Self {
            module,
            graph,
            alerts,
            config,
            outlet,
        }
    }

    /// The module this scope renders for
    pub fn module(&self) -> &str {
        self.module
    }

    /// The configured language key
    pub fn locale(&self) -> &str {
        &self.config.locale
    }

    /// The configured document title
    pub fn title(&self) -> &str {
        &self.config.title
    }

    /// The application alert center
    pub fn alerts(&self) -> &AlertCenter {
        self.alerts
    }

    fn lookup_visible(&self, unit_id: &str) -> Result<&'a UnitInstance, ViewError> {
        if !self.graph.is_visible_to(self.module, unit_id) {
            // Distinguish "not registered anywhere" from "exists but hidden"
            return Err(match self.graph.unit(unit_id) {
                Some(_) => ViewError::UnitNotVisible {
                    module: self.module.to_string(),
                    unit: unit_id.to_string(),
                },
                None => ViewError::UnknownUnit {
                    unit: unit_id.to_string(),
                },
            });
        }
        self.graph.unit(unit_id).ok_or_else(|| ViewError::UnknownUnit {
            unit: unit_id.to_string(),
        })
    }

    /// Apply a visible transform unit to the input
    pub fn apply_transform(&self, unit_id: &str, input: &str) -> Result<String, ViewError> {
        match self.lookup_visible(unit_id)? {
            UnitInstance::Transform(transform) => Ok(transform.transform(input)),
            other => Err(ViewError::WrongUnitKind {
                unit: unit_id.to_string(),
                kind: other.kind(),
            }),
        }
    }

    /// Render a visible view unit into this scope's output.
    ///
    /// The embedded view renders in a scope pinned to its own module, so
    /// its lookups use its own visibility, not the embedder's.
    pub fn render_unit(&self, unit_id: &str) -> Result<Node, ViewError> {
        match self.lookup_visible(unit_id)? {
            UnitInstance::View(view) => {
                let owner = self.graph.owner_of(unit_id).unwrap_or(self.module);
                let child = self.scoped_to(owner);
                view.render(&child)
            }
            other => Err(ViewError::WrongUnitKind {
                unit: unit_id.to_string(),
                kind: other.kind(),
            }),
        }
    }

    /// Render the routed view for this scope's outlet.
    ///
    /// Bypasses the visibility check: routed views stay module-local and
    /// are dispatched by the router rather than referenced by name.
    pub fn render_outlet(&self) -> Result<Node, ViewError> {
        let entry = self.outlet.ok_or(ViewError::NoOutlet)?;
        let instance = self.graph.unit(&entry.unit_id).ok_or_else(|| ViewError::UnknownUnit {
            unit: entry.unit_id.clone(),
        })?;
        match instance {
            UnitInstance::View(view) => {
                let child = self.scoped_to(&entry.module);
                view.render(&child)
            }
            other => Err(ViewError::WrongUnitKind {
                unit: entry.unit_id.clone(),
                kind: other.kind(),
            }),
        }
    }

    fn scoped_to(&self, module: &'a str) -> RenderScope<'a> {
        RenderScope {
            module,
            graph: self.graph,
            alerts: self.alerts,
            config: self.config,
            outlet: self.outlet,
        }
    }
}
