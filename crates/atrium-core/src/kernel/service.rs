use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::fmt::Debug;
use std::sync::Arc;

use async_trait::async_trait;

use crate::kernel::error::Result;

/// Lifecycle trait for all kernel services.
///
/// Services are initialized and started in a fixed order during mount and
/// stopped in reverse order at unmount.
#[async_trait]
pub trait KernelService: Any + Send + Sync + Debug {
    fn name(&self) -> &'static str;
    async fn initialize(&self) -> Result<()>;
    async fn start(&self) -> Result<()>;
    async fn stop(&self) -> Result<()>;
}

/// Registry storing services as `Arc<dyn KernelService>`, keyed by the
/// concrete type's `TypeId`.
#[derive(Default, Debug)]
pub struct ServiceRegistry {
    instances: HashMap<TypeId, Arc<dyn KernelService>>,
}

impl ServiceRegistry {
    /// Create a new empty service registry
    pub fn new() -> Self {
        Self {
            instances: HashMap::new(),
        }
    }

    /// Register a service instance under the TypeId of its concrete type V.
    pub fn register<V>(&mut self, instance: Arc<V>)
    where
        V: KernelService + 'static,
    {
        self.instances.insert(TypeId::of::<V>(), instance);
    }

    /// Get a service by the TypeId of its concrete type.
    pub fn get_by_type_id(&self, type_id: &TypeId) -> Option<Arc<dyn KernelService>> {
        self.instances.get(type_id).cloned()
    }

    /// Get a service by concrete type T, downcasting the stored trait object.
    pub fn get<T: KernelService + 'static>(&self) -> Option<Arc<T>> {
        self.instances.get(&TypeId::of::<T>()).and_then(|service| {
            // KernelService: Any, so the trait object upcasts to Any
            let arc_any: Arc<dyn Any + Send + Sync> = service.clone();
            Arc::downcast::<T>(arc_any).ok()
        })
    }

    /// Get all registered service trait objects.
    pub fn all(&self) -> Vec<Arc<dyn KernelService>> {
        self.instances.values().cloned().collect()
    }

    /// Get TypeIds of all registered services.
    pub fn registered_ids(&self) -> Vec<TypeId> {
        self.instances.keys().cloned().collect()
    }

    /// Number of registered services
    pub fn len(&self) -> usize {
        self.instances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instances.is_empty()
    }

    /// Clear all instances.
    pub fn clear(&mut self) {
        self.instances.clear();
    }
}
