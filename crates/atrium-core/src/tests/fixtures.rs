//! Shared test fixtures: a configurable stub module, stub units, and a
//! recording document host.

use std::collections::HashSet;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::module_graph::error::ModuleSystemError;
use crate::module_graph::traits::{AppModule, ModuleHostContext};
use crate::module_graph::unit::{UnitDescriptor, UnitInstance};
use crate::module_graph::version::VersionRange;
use crate::module_graph::ModuleImport;
use crate::routing::RouteDescriptor;
use crate::view::error::ViewError;
use crate::view::host::{DocumentHost, RenderedDocument};
use crate::view::node::{Element, Node};
use crate::view::scope::RenderScope;
use crate::view::{ValueTransform, ViewUnit};

/// View stub rendering `<div id="{id}"/>`.
pub struct StubView {
    pub id: &'static str,
}

impl ViewUnit for StubView {
    fn id(&self) -> &'static str {
        self.id
    }

    fn render(&self, _scope: &RenderScope<'_>) -> Result<Node, ViewError> {
        Ok(Element::new("div").attr("id", self.id).into_node())
    }
}

/// Transform stub producing `{id}:{input}`.
pub struct StubTransform {
    pub id: &'static str,
}

impl ValueTransform for StubTransform {
    fn id(&self) -> &'static str {
        self.id
    }

    fn transform(&self, input: &str) -> String {
        format!("{}:{}", self.id, input)
    }
}

/// Configurable stub module for graph and bootstrap tests.
pub struct TestModule {
    name: &'static str,
    version: &'static str,
    compatible: Vec<VersionRange>,
    imports: Vec<ModuleImport>,
    views: Vec<&'static str>,
    transforms: Vec<&'static str>,
    exports: Vec<String>,
    routes: Vec<RouteDescriptor>,
    bootstrap: Option<String>,
    /// Unit ids `instantiate` refuses to construct
    broken_units: HashSet<&'static str>,
    /// Unit ids constructed with the opposite kind
    wrong_kind_units: HashSet<&'static str>,
    fail_on_mount: bool,
    /// Shared log receiving `name` on mount and `~name` on unmount
    mount_log: Option<Arc<Mutex<Vec<String>>>>,
}

impl TestModule {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            version: "0.1.0",
            compatible: vec![VersionRange::from_constraint("^0.1").expect("valid constraint")],
            imports: Vec::new(),
            views: Vec::new(),
            transforms: Vec::new(),
            exports: Vec::new(),
            routes: Vec::new(),
            bootstrap: None,
            broken_units: HashSet::new(),
            wrong_kind_units: HashSet::new(),
            fail_on_mount: false,
            mount_log: None,
        }
    }

    pub fn version(mut self, version: &'static str) -> Self {
        self.version = version;
        self
    }

    pub fn compatible_with(mut self, ranges: Vec<VersionRange>) -> Self {
        self.compatible = ranges;
        self
    }

    pub fn import(mut self, import: ModuleImport) -> Self {
        self.imports.push(import);
        self
    }

    pub fn view(mut self, id: &'static str) -> Self {
        self.views.push(id);
        self
    }

    pub fn transform(mut self, id: &'static str) -> Self {
        self.transforms.push(id);
        self
    }

    pub fn export(mut self, id: &str) -> Self {
        self.exports.push(id.to_string());
        self
    }

    pub fn route(mut self, path: &str, unit_id: &str) -> Self {
        self.routes.push(RouteDescriptor::new(path, unit_id));
        self
    }

    pub fn bootstrap(mut self, unit_id: &str) -> Self {
        self.bootstrap = Some(unit_id.to_string());
        self
    }

    pub fn broken_unit(mut self, id: &'static str) -> Self {
        self.broken_units.insert(id);
        self
    }

    pub fn wrong_kind_unit(mut self, id: &'static str) -> Self {
        self.wrong_kind_units.insert(id);
        self
    }

    pub fn failing_on_mount(mut self) -> Self {
        self.fail_on_mount = true;
        self
    }

    pub fn with_mount_log(mut self, mount_log: Arc<Mutex<Vec<String>>>) -> Self {
        self.mount_log = Some(mount_log);
        self
    }

    pub fn arc(self) -> Arc<dyn AppModule> {
        Arc::new(self)
    }
}

#[async_trait]
impl AppModule for TestModule {
    fn name(&self) -> &'static str {
        self.name
    }

    fn version(&self) -> &str {
        self.version
    }

    fn compatible_shell_versions(&self) -> Vec<VersionRange> {
        self.compatible.clone()
    }

    fn imports(&self) -> Vec<ModuleImport> {
        self.imports.clone()
    }

    fn declarations(&self) -> Vec<UnitDescriptor> {
        let mut declarations: Vec<UnitDescriptor> =
            self.views.iter().map(|id| UnitDescriptor::view(id)).collect();
        declarations.extend(self.transforms.iter().map(|id| UnitDescriptor::transform(id)));
        declarations
    }

    fn exports(&self) -> Vec<String> {
        self.exports.clone()
    }

    fn routes(&self) -> Vec<RouteDescriptor> {
        self.routes.clone()
    }

    fn bootstrap_unit(&self) -> Option<String> {
        self.bootstrap.clone()
    }

    fn instantiate(&self, unit_id: &str) -> Option<UnitInstance> {
        if self.broken_units.contains(unit_id) {
            return None;
        }
        let wrong = self.wrong_kind_units.contains(unit_id);
        if let Some(&id) = self.views.iter().find(|&&id| id == unit_id) {
            return Some(if wrong {
                UnitInstance::Transform(Arc::new(StubTransform { id }))
            } else {
                UnitInstance::View(Arc::new(StubView { id }))
            });
        }
        if let Some(&id) = self.transforms.iter().find(|&&id| id == unit_id) {
            return Some(if wrong {
                UnitInstance::View(Arc::new(StubView { id }))
            } else {
                UnitInstance::Transform(Arc::new(StubTransform { id }))
            });
        }
        None
    }

    async fn on_mount(&self, _context: &ModuleHostContext) -> Result<(), ModuleSystemError> {
        if self.fail_on_mount {
            return Err(ModuleSystemError::LifecycleHookFailed {
                module: self.name.to_string(),
                hook: "on_mount",
                message: "induced failure".to_string(),
            });
        }
        if let Some(mount_log) = &self.mount_log {
            mount_log.lock().expect("mount log lock").push(self.name.to_string());
        }
        Ok(())
    }

    async fn on_unmount(&self) -> Result<(), ModuleSystemError> {
        if let Some(mount_log) = &self.mount_log {
            mount_log
                .lock()
                .expect("mount log lock")
                .push(format!("~{}", self.name));
        }
        Ok(())
    }
}

/// Document host recording attach and detach events.
#[derive(Default)]
pub struct RecordingDocumentHost {
    events: Mutex<Vec<String>>,
    last: Mutex<Option<RenderedDocument>>,
}

impl RecordingDocumentHost {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<String> {
        self.events.lock().expect("events lock").clone()
    }

    pub fn last_document(&self) -> Option<RenderedDocument> {
        self.last.lock().expect("document lock").clone()
    }
}

impl DocumentHost for RecordingDocumentHost {
    fn name(&self) -> &'static str {
        "recording"
    }

    fn attach(&self, document: &RenderedDocument) -> Result<(), ViewError> {
        self.events
            .lock()
            .expect("events lock")
            .push(format!("attach:{}", document.title));
        *self.last.lock().expect("document lock") = Some(document.clone());
        Ok(())
    }

    fn detach(&self) -> Result<(), ViewError> {
        self.events.lock().expect("events lock").push("detach".to_string());
        Ok(())
    }
}
