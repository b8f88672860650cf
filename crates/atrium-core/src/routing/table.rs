use std::collections::HashMap;

use crate::module_graph::registry::{ModuleGraph, ModuleRegistry};
use crate::routing::error::RoutingError;
use crate::routing::route::normalize_path;

/// One resolved row of the application route table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteEntry {
    /// Normalized route path
    pub path: String,
    /// Module that contributed the route
    pub module: String,
    /// View unit the path resolves to
    pub unit_id: String,
}

/// Application-wide route table.
///
/// Built once from the validated module graph; immutable afterwards.
/// Matching is exact on normalized paths.
#[derive(Debug, Default)]
pub struct RouteTable {
    entries: Vec<RouteEntry>,
    by_path: HashMap<String, usize>,
}

impl RouteTable {
    /// Collect the routes of every module, in initialization order.
    ///
    /// Route-to-unit ownership was already checked during graph validation;
    /// the only failure left here is two modules claiming one path.
    pub fn build(registry: &ModuleRegistry, graph: &ModuleGraph) -> Result<Self, RoutingError> {
        let mut table = RouteTable::default();

        for name in graph.init_order() {
            let Some(module) = registry.get_module(name) else {
                continue;
            };
            for route in module.routes() {
                if let Some(&existing) = table.by_path.get(&route.path) {
                    return Err(RoutingError::DuplicatePath {
                        path: route.path.clone(),
                        first: table.entries[existing].module.clone(),
                        second: name.clone(),
                    });
                }
                table.by_path.insert(route.path.clone(), table.entries.len());
                table.entries.push(RouteEntry {
                    path: route.path,
                    module: name.clone(),
                    unit_id: route.unit_id,
                });
            }
        }

        Ok(table)
    }

    /// Resolve a path to its route entry
    pub fn resolve(&self, path: &str) -> Option<&RouteEntry> {
        self.by_path
            .get(&normalize_path(path))
            .map(|&index| &self.entries[index])
    }

    /// Iterate over all entries in build order
    pub fn iter(&self) -> impl Iterator<Item = &RouteEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
