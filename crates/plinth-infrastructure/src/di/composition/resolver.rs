//! Finalized resolver and the resolution context handed to factories

use std::any::{TypeId, type_name};
use std::sync::Arc;

use plinth_domain::error::{Error, Result};

use super::registry::{Registry, downcast};
use super::scope::LifetimeScope;

/// Immutable, finalized view of the composition graph
///
/// Cheap to clone and safe to share between threads. There is no way to add
/// registrations once a resolver exists.
#[derive(Clone)]
pub struct Resolver {
    registry: Arc<Registry>,
}

impl std::fmt::Debug for Resolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Resolver")
            .field("registrations", &self.registry.len())
            .finish()
    }
}

impl Resolver {
    pub(crate) fn new(registry: Registry) -> Self {
        Self {
            registry: Arc::new(registry),
        }
    }

    /// Resolve the single registration for `T`
    ///
    /// Fails with a resolution error when `T` has no registration or more
    /// than one.
    pub fn resolve_one<T>(&self) -> Result<Arc<T>>
    where
        T: ?Sized + Send + Sync + 'static,
    {
        self.root().resolve_one::<T>()
    }

    /// Resolve every registration for `T`, in registration order
    pub fn resolve_all<T>(&self) -> Result<Vec<Arc<T>>>
    where
        T: ?Sized + Send + Sync + 'static,
    {
        self.root().resolve_all::<T>()
    }

    /// Resolve `T` if it has exactly one registration, `None` if it has none
    pub fn try_resolve<T>(&self) -> Result<Option<Arc<T>>>
    where
        T: ?Sized + Send + Sync + 'static,
    {
        self.root().try_resolve::<T>()
    }

    /// Whether `T` has at least one registration
    pub fn is_registered<T>(&self) -> bool
    where
        T: ?Sized + 'static,
    {
        !self.registry.ids_for(TypeId::of::<T>()).is_empty()
    }

    /// Number of registrations
    pub fn len(&self) -> usize {
        self.registry.len()
    }

    /// Whether the graph is empty
    pub fn is_empty(&self) -> bool {
        self.registry.len() == 0
    }

    /// Open a new lifetime scope for one unit of work
    pub fn begin_scope(&self) -> LifetimeScope {
        LifetimeScope::new(Arc::clone(&self.registry))
    }

    fn root(&self) -> Resolution<'_> {
        Resolution::new(&self.registry, None, Vec::new())
    }
}

/// Resolution context passed to factories
///
/// Resolves dependencies within the same scope as the service being built
/// and tracks the dependency chain to detect cycles.
pub struct Resolution<'a> {
    registry: &'a Registry,
    scope: Option<&'a LifetimeScope>,
    chain: Vec<usize>,
}

impl<'a> Resolution<'a> {
    pub(crate) fn new(
        registry: &'a Registry,
        scope: Option<&'a LifetimeScope>,
        chain: Vec<usize>,
    ) -> Self {
        Self {
            registry,
            scope,
            chain,
        }
    }

    /// Resolve the single registration for `T`
    pub fn resolve_one<T>(&self) -> Result<Arc<T>>
    where
        T: ?Sized + Send + Sync + 'static,
    {
        match self.try_resolve::<T>()? {
            Some(service) => Ok(service),
            None => Err(Error::resolution(type_name::<T>(), "no registration")),
        }
    }

    /// Resolve `T` if it has exactly one registration
    pub fn try_resolve<T>(&self) -> Result<Option<Arc<T>>>
    where
        T: ?Sized + Send + Sync + 'static,
    {
        let service_name = type_name::<T>();
        match self.registry.ids_for(TypeId::of::<T>()) {
            [] => Ok(None),
            [id] => {
                let instance = self.registry.instantiate(*id, self.scope, &self.chain)?;
                downcast::<T>(&instance, service_name).map(Some)
            }
            ids => Err(Error::resolution(
                service_name,
                format!("ambiguous: {} registrations", ids.len()),
            )),
        }
    }

    /// Resolve every registration for `T`, in registration order
    pub fn resolve_all<T>(&self) -> Result<Vec<Arc<T>>>
    where
        T: ?Sized + Send + Sync + 'static,
    {
        let service_name = type_name::<T>();
        self.registry
            .ids_for(TypeId::of::<T>())
            .iter()
            .map(|id| {
                let instance = self.registry.instantiate(*id, self.scope, &self.chain)?;
                downcast::<T>(&instance, service_name)
            })
            .collect()
    }

    /// Value attached to the current scope with [`LifetimeScope::with_instance`]
    ///
    /// Always `None` when resolving outside a scope or for a singleton.
    pub fn scope_local<T>(&self) -> Option<Arc<T>>
    where
        T: ?Sized + Send + Sync + 'static,
    {
        self.scope.and_then(|scope| scope.local::<T>())
    }

    /// Whether resolution happens inside a lifetime scope
    pub fn in_scope(&self) -> bool {
        self.scope.is_some()
    }
}
