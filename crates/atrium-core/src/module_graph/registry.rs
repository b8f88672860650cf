use std::collections::{HashMap, HashSet, VecDeque};
use std::sync::Arc;

use semver::Version;
use serde::Serialize;

use crate::config::profile;
use crate::module_graph::dependency::ModuleImport;
use crate::module_graph::error::ModuleSystemError;
use crate::module_graph::traits::AppModule;
use crate::module_graph::unit::{UnitDescriptor, UnitInstance, UnitKind};
use crate::module_graph::version::parse_version;
use crate::routing::RouteDescriptor;

/// Registry collecting application modules before the shell mounts.
///
/// Registration performs the per-module checks (duplicate name, version,
/// shell compatibility); [`validate`](ModuleRegistry::validate) runs the
/// whole-graph checks once and produces the immutable [`ModuleGraph`] every
/// later lookup goes through.
pub struct ModuleRegistry {
    /// Registered modules (using Arc for shared ownership)
    modules: HashMap<String, Arc<dyn AppModule>>,
    /// Names in registration order, for deterministic validation output
    registration_order: Vec<String>,
    /// Shell API version modules are checked against
    shell_version: Version,
    /// Cached result of the last successful validation
    graph: Option<Arc<ModuleGraph>>,
}

impl ModuleRegistry {
    /// Create a new module registry for the given shell API version
    pub fn new(shell_version: Version) -> Self {
        Self {
            modules: HashMap::new(),
            registration_order: Vec::new(),
            shell_version,
            graph: None,
        }
    }

    /// Register a module
    pub fn register_module(&mut self, module: Arc<dyn AppModule>) -> Result<(), ModuleSystemError> {
        let name = module.name().to_string();

        if self.modules.contains_key(&name) {
            return Err(ModuleSystemError::DuplicateModule(name));
        }

        // The version must parse even when no import constrains it, so a
        // bad string fails here and not at some later import check.
        parse_version(module.version()).map_err(|source| ModuleSystemError::InvalidModuleVersion {
            module: name.clone(),
            source,
        })?;

        // Check shell API compatibility
        let compatible = module
            .compatible_shell_versions()
            .iter()
            .any(|range| range.includes(&self.shell_version));
        if !compatible {
            return Err(ModuleSystemError::IncompatibleShellVersion {
                module: name,
                shell_version: self.shell_version.to_string(),
            });
        }

        // Any cached graph is stale from this point on
        self.graph = None;
        self.registration_order.push(name.clone());
        self.modules.insert(name, module);
        Ok(())
    }

    /// Check if a module is registered by name
    pub fn has_module(&self, name: &str) -> bool {
        self.modules.contains_key(name)
    }

    /// Get a module Arc by name
    pub fn get_module(&self, name: &str) -> Option<Arc<dyn AppModule>> {
        self.modules.get(name).cloned()
    }

    /// Module names in registration order
    pub fn module_names(&self) -> &[String] {
        &self.registration_order
    }

    pub fn len(&self) -> usize {
        self.modules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }

    /// The shell API version this registry checks modules against
    pub fn shell_version(&self) -> &Version {
        &self.shell_version
    }

    /// Validate the whole module graph and cache the result.
    ///
    /// Runs import resolution, the cycle check, duplicate-ownership and
    /// export-visibility checks, materializes every declared unit, and
    /// verifies route and bootstrap-unit ownership. Idempotent until the
    /// next registration.
    pub fn validate(&mut self) -> Result<Arc<ModuleGraph>, ModuleSystemError> {
        if let Some(graph) = &self.graph {
            return Ok(Arc::clone(graph));
        }
        let graph = Arc::new(self.build_graph()?);
        self.graph = Some(Arc::clone(&graph));
        Ok(graph)
    }

    /// The validated graph, if `validate` has run since the last registration
    pub fn graph(&self) -> Result<Arc<ModuleGraph>, ModuleSystemError> {
        self.graph
            .as_ref()
            .map(Arc::clone)
            .ok_or(ModuleSystemError::GraphNotValidated)
    }

    fn build_graph(&self) -> Result<ModuleGraph, ModuleSystemError> {
        // Unit ownership and materialization. First declarer wins the id;
        // a second declarer is the reported offender.
        let mut ownership: HashMap<String, String> = HashMap::new();
        let mut kinds: HashMap<String, UnitKind> = HashMap::new();
        let mut units: HashMap<String, UnitInstance> = HashMap::new();

        for name in &self.registration_order {
            let module = &self.modules[name];
            for descriptor in module.declarations() {
                if let Some(first) = ownership.get(&descriptor.id) {
                    return Err(ModuleSystemError::DuplicateUnit {
                        unit: descriptor.id.clone(),
                        first: first.clone(),
                        second: name.clone(),
                    });
                }
                let instance = module.instantiate(&descriptor.id).ok_or_else(|| {
                    ModuleSystemError::UnitNotConstructible {
                        module: name.clone(),
                        unit: descriptor.id.clone(),
                    }
                })?;
                if instance.kind() != descriptor.kind {
                    return Err(ModuleSystemError::UnitKindMismatch {
                        module: name.clone(),
                        unit: descriptor.id.clone(),
                        declared: descriptor.kind,
                        constructed: instance.kind(),
                    });
                }
                ownership.insert(descriptor.id.clone(), name.clone());
                kinds.insert(descriptor.id.clone(), descriptor.kind);
                units.insert(descriptor.id.clone(), instance);
            }
        }

        // Import resolution: every import names a registered module whose
        // version satisfies the declared range.
        for name in &self.registration_order {
            let module = &self.modules[name];
            for import in module.imports() {
                let dep = self.modules.get(&import.module_name).ok_or_else(|| {
                    ModuleSystemError::MissingImport {
                        module: name.clone(),
                        import: import.module_name.clone(),
                    }
                })?;
                let dep_version = parse_version(dep.version()).map_err(|source| {
                    ModuleSystemError::InvalidModuleVersion {
                        module: import.module_name.clone(),
                        source,
                    }
                })?;
                if !import.is_satisfied_by(&dep_version) {
                    return Err(ModuleSystemError::IncompatibleImport {
                        module: name.clone(),
                        import: import.module_name.clone(),
                        required: import
                            .version_range
                            .as_ref()
                            .map(|range| range.constraint_string().to_string())
                            .unwrap_or_else(|| "*".to_string()),
                        found: dep.version().to_string(),
                    });
                }
            }
        }

        let init_order = self.topological_sort()?;

        // Exports and visibility, walked dependencies-first so the exported
        // set of every import is known when a module is processed.
        let mut exported: HashMap<String, HashSet<String>> = HashMap::new();
        let mut visible: HashMap<String, HashSet<String>> = HashMap::new();

        for name in &init_order {
            let module = &self.modules[name];
            let own: HashSet<String> =
                module.declarations().into_iter().map(|d| d.id).collect();

            let mut importable: HashSet<String> = HashSet::new();
            for import in module.imports() {
                if let Some(exports) = exported.get(&import.module_name) {
                    importable.extend(exports.iter().cloned());
                }
            }

            let mut export_set: HashSet<String> = HashSet::new();
            for unit in module.exports() {
                if own.contains(&unit) || importable.contains(&unit) {
                    export_set.insert(unit);
                } else {
                    return Err(ModuleSystemError::UndeclaredExport {
                        module: name.clone(),
                        unit,
                    });
                }
            }

            let mut visible_set = own;
            visible_set.extend(importable);
            exported.insert(name.clone(), export_set);
            visible.insert(name.clone(), visible_set);
        }

        // Route and bootstrap targets stay module-local
        for name in &self.registration_order {
            let module = &self.modules[name];
            for route in module.routes() {
                if ownership.get(&route.unit_id).map(String::as_str) != Some(name.as_str()) {
                    return Err(ModuleSystemError::RouteToForeignUnit {
                        module: name.clone(),
                        path: route.path.clone(),
                        unit: route.unit_id.clone(),
                    });
                }
            }
            if let Some(unit) = module.bootstrap_unit() {
                if ownership.get(&unit).map(String::as_str) != Some(name.as_str()) {
                    return Err(ModuleSystemError::BootstrapUnitMissing {
                        module: name.clone(),
                        unit,
                    });
                }
            }
        }

        if profile::active().is_development() {
            self.log_graph_summary(&init_order);
        }

        Ok(ModuleGraph {
            init_order,
            ownership,
            exported,
            visible,
            units,
            kinds,
        })
    }

    /// Builds the import adjacency for the registered modules.
    /// Returns the adjacency list (module -> imports) and the reverse
    /// adjacency list (module -> dependents).
    fn build_import_graph(&self) -> (HashMap<String, Vec<String>>, HashMap<String, Vec<String>>) {
        let mut adj: HashMap<String, Vec<String>> = HashMap::new();
        let mut reverse_adj: HashMap<String, Vec<String>> = HashMap::new();

        for name in &self.registration_order {
            adj.entry(name.clone()).or_default();
            reverse_adj.entry(name.clone()).or_default();

            for import in self.modules[name].imports() {
                // Unresolved imports were already rejected; skip them here
                // so the sort only sees real edges.
                if self.modules.contains_key(&import.module_name) {
                    adj.entry(name.clone()).or_default().push(import.module_name.clone());
                    reverse_adj
                        .entry(import.module_name.clone())
                        .or_default()
                        .push(name.clone());
                }
            }
        }
        (adj, reverse_adj)
    }

    /// Kahn's algorithm over the import graph.
    /// Produces initialization order (imports before importers) or the set
    /// of modules stuck in a cycle.
    fn topological_sort(&self) -> Result<Vec<String>, ModuleSystemError> {
        let (adj, reverse_adj) = self.build_import_graph();

        // In-degree of a module = number of imports still unprocessed
        let mut in_degree: HashMap<String, usize> = HashMap::new();
        for name in &self.registration_order {
            in_degree.insert(name.clone(), adj.get(name).map_or(0, Vec::len));
        }

        let mut queue: VecDeque<String> = VecDeque::new();
        for name in &self.registration_order {
            if in_degree[name] == 0 {
                queue.push_back(name.clone());
            }
        }

        let mut sorted = Vec::with_capacity(self.registration_order.len());
        while let Some(name) = queue.pop_front() {
            sorted.push(name.clone());
            if let Some(dependents) = reverse_adj.get(&name) {
                for dependent in dependents {
                    if let Some(degree) = in_degree.get_mut(dependent) {
                        *degree -= 1;
                        if *degree == 0 {
                            queue.push_back(dependent.clone());
                        }
                    }
                }
            }
        }

        if sorted.len() == self.registration_order.len() {
            Ok(sorted)
        } else {
            // Everything not sorted sits on or behind a cycle
            let mut cycle: Vec<String> = self
                .registration_order
                .iter()
                .filter(|name| !sorted.contains(name))
                .cloned()
                .collect();
            cycle.sort();
            Err(ModuleSystemError::CyclicImports(cycle))
        }
    }

    fn log_graph_summary(&self, init_order: &[String]) {
        #[derive(Serialize)]
        struct ModuleSummary {
            name: String,
            version: String,
            imports: Vec<ModuleImport>,
            declarations: Vec<UnitDescriptor>,
            exports: Vec<String>,
            routes: Vec<RouteDescriptor>,
        }

        let summary: Vec<ModuleSummary> = init_order
            .iter()
            .map(|name| {
                let module = &self.modules[name];
                ModuleSummary {
                    name: name.clone(),
                    version: module.version().to_string(),
                    imports: module.imports(),
                    declarations: module.declarations(),
                    exports: module.exports(),
                    routes: module.routes(),
                }
            })
            .collect();

        match serde_json::to_string(&summary) {
            Ok(json) => log::debug!("validated module graph: {}", json),
            Err(e) => log::warn!("could not serialize module graph summary: {}", e),
        }
    }
}

/// Immutable result of a successful graph validation.
///
/// Records initialization order, unit ownership, per-module export and
/// visibility sets, and the materialized unit instances.
#[derive(Debug)]
pub struct ModuleGraph {
    init_order: Vec<String>,
    ownership: HashMap<String, String>,
    exported: HashMap<String, HashSet<String>>,
    visible: HashMap<String, HashSet<String>>,
    units: HashMap<String, UnitInstance>,
    kinds: HashMap<String, UnitKind>,
}

impl ModuleGraph {
    /// Module names, imports before importers
    pub fn init_order(&self) -> &[String] {
        &self.init_order
    }

    /// The module that declares the given unit
    pub fn owner_of(&self, unit_id: &str) -> Option<&str> {
        self.ownership.get(unit_id).map(String::as_str)
    }

    /// Whether `unit_id` is usable from `module` (own declaration or an
    /// export of one of its imports)
    pub fn is_visible_to(&self, module: &str, unit_id: &str) -> bool {
        self.visible
            .get(module)
            .is_some_and(|units| units.contains(unit_id))
    }

    /// Units the given module re-exposes to importers
    pub fn exported_units(&self, module: &str) -> Option<&HashSet<String>> {
        self.exported.get(module)
    }

    /// Units usable from the given module
    pub fn visible_units(&self, module: &str) -> Option<&HashSet<String>> {
        self.visible.get(module)
    }

    /// The materialized instance for a unit id
    pub fn unit(&self, unit_id: &str) -> Option<&UnitInstance> {
        self.units.get(unit_id)
    }

    /// The declared kind of a unit id
    pub fn unit_kind(&self, unit_id: &str) -> Option<UnitKind> {
        self.kinds.get(unit_id).copied()
    }

    /// Number of units in the graph
    pub fn unit_count(&self) -> usize {
        self.units.len()
    }
}
