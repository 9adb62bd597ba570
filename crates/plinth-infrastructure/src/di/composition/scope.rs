//! Lifetime scopes

use std::any::TypeId;
use std::cell::RefCell;
use std::collections::HashMap;
use std::sync::Arc;

use plinth_domain::error::Result;
use uuid::Uuid;

use super::registry::{Instance, Registry, downcast};
use super::resolver::Resolution;

/// One unit of work: a request, or a top-level operation outside requests
///
/// Scoped services are created at most once per scope and never shared with
/// another scope. A scope is owned by the code handling its unit of work; it
/// can move between threads but is not shared between them.
pub struct LifetimeScope {
    id: Uuid,
    registry: Arc<Registry>,
    cache: RefCell<HashMap<usize, Instance>>,
    locals: HashMap<TypeId, Instance>,
}

impl std::fmt::Debug for LifetimeScope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LifetimeScope")
            .field("id", &self.id)
            .field("cached", &self.cache.borrow().len())
            .field("locals", &self.locals.len())
            .finish()
    }
}

impl LifetimeScope {
    pub(crate) fn new(registry: Arc<Registry>) -> Self {
        Self {
            id: Uuid::new_v4(),
            registry,
            cache: RefCell::new(HashMap::new()),
            locals: HashMap::new(),
        }
    }

    /// Unique identifier of this scope
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Attach a value that factories of scoped services can read through
    /// [`Resolution::scope_local`]
    #[must_use]
    pub fn with_instance<T>(mut self, instance: Arc<T>) -> Self
    where
        T: ?Sized + Send + Sync + 'static,
    {
        self.locals.insert(TypeId::of::<T>(), Arc::new(instance));
        self
    }

    /// Resolve the single registration for `T` within this scope
    pub fn resolve_one<T>(&self) -> Result<Arc<T>>
    where
        T: ?Sized + Send + Sync + 'static,
    {
        self.resolution().resolve_one::<T>()
    }

    /// Resolve every registration for `T` within this scope
    pub fn resolve_all<T>(&self) -> Result<Vec<Arc<T>>>
    where
        T: ?Sized + Send + Sync + 'static,
    {
        self.resolution().resolve_all::<T>()
    }

    /// Resolve `T` within this scope if it has exactly one registration
    pub fn try_resolve<T>(&self) -> Result<Option<Arc<T>>>
    where
        T: ?Sized + Send + Sync + 'static,
    {
        self.resolution().try_resolve::<T>()
    }

    fn resolution(&self) -> Resolution<'_> {
        Resolution::new(&self.registry, Some(self), Vec::new())
    }

    pub(crate) fn local<T>(&self) -> Option<Arc<T>>
    where
        T: ?Sized + Send + Sync + 'static,
    {
        let instance = self.locals.get(&TypeId::of::<T>())?;
        downcast::<T>(instance, std::any::type_name::<T>()).ok()
    }

    pub(crate) fn cached_or_create<F>(&self, id: usize, create: F) -> Result<Instance>
    where
        F: FnOnce() -> Result<Instance>,
    {
        if let Some(instance) = self.cache.borrow().get(&id) {
            return Ok(Arc::clone(instance));
        }
        // No borrow is held while the factory runs; it may resolve other
        // scoped services from this same cache
        let instance = create()?;
        self.cache.borrow_mut().insert(id, Arc::clone(&instance));
        Ok(instance)
    }
}
