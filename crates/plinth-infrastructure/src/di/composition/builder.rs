//! Mutable registration accumulator used during bootstrap

use std::any::{TypeId, type_name};
use std::sync::Arc;

use once_cell::sync::OnceCell;
use plinth_domain::error::Result;
use tracing::trace;

use super::registry::{Factory, Instance, Registration, RegistrationInfo, Registry};
use super::resolver::{Resolution, Resolver};
use super::Lifetime;

/// Accumulates registrations until [`build`](Self::build) seals them into a
/// [`Resolver`]
///
/// Registering the same service type more than once is allowed; all
/// registrations are returned by `resolve_all` in the order they were added,
/// while `resolve_one` reports the ambiguity.
#[derive(Default)]
pub struct CompositionBuilder {
    registrations: Vec<Registration>,
}

impl std::fmt::Debug for CompositionBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CompositionBuilder")
            .field("registrations", &self.registrations.len())
            .finish()
    }
}

impl CompositionBuilder {
    /// Create an empty builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an existing instance as a singleton
    pub fn register_instance<T>(&mut self, instance: Arc<T>) -> &mut Self
    where
        T: ?Sized + Send + Sync + 'static,
    {
        let erased: Instance = Arc::new(Arc::clone(&instance));
        let factory: Factory = Box::new(move |_: &Resolution<'_>| -> Result<Instance> {
            Ok(Arc::new(Arc::clone(&instance)))
        });
        self.push::<T>(Lifetime::Singleton, factory, OnceCell::with_value(erased))
    }

    /// Register a factory with the given lifetime
    pub fn register<T, F>(&mut self, lifetime: Lifetime, factory: F) -> &mut Self
    where
        T: ?Sized + Send + Sync + 'static,
        F: Fn(&Resolution<'_>) -> Result<Arc<T>> + Send + Sync + 'static,
    {
        let factory: Factory = Box::new(move |resolution: &Resolution<'_>| {
            factory(resolution).map(|service| Arc::new(service) as Instance)
        });
        self.push::<T>(lifetime, factory, OnceCell::new())
    }

    /// Register a factory creating one instance for the whole resolver
    pub fn register_singleton<T, F>(&mut self, factory: F) -> &mut Self
    where
        T: ?Sized + Send + Sync + 'static,
        F: Fn(&Resolution<'_>) -> Result<Arc<T>> + Send + Sync + 'static,
    {
        self.register(Lifetime::Singleton, factory)
    }

    /// Register a factory creating one instance per [`LifetimeScope`](super::LifetimeScope)
    pub fn register_scoped<T, F>(&mut self, factory: F) -> &mut Self
    where
        T: ?Sized + Send + Sync + 'static,
        F: Fn(&Resolution<'_>) -> Result<Arc<T>> + Send + Sync + 'static,
    {
        self.register(Lifetime::Scoped, factory)
    }

    /// Register a factory invoked on every resolution
    pub fn register_transient<T, F>(&mut self, factory: F) -> &mut Self
    where
        T: ?Sized + Send + Sync + 'static,
        F: Fn(&Resolution<'_>) -> Result<Arc<T>> + Send + Sync + 'static,
    {
        self.register(Lifetime::Transient, factory)
    }

    /// Whether `T` has at least one registration
    pub fn is_registered<T>(&self) -> bool
    where
        T: ?Sized + 'static,
    {
        let service = TypeId::of::<T>();
        self.registrations.iter().any(|r| r.service == service)
    }

    /// Registrations for `T`, in the order `resolve_all` will return them
    pub fn registrations_for<T>(&self) -> Vec<RegistrationInfo>
    where
        T: ?Sized + 'static,
    {
        let service = TypeId::of::<T>();
        self.registrations
            .iter()
            .enumerate()
            .filter(|(_, r)| r.service == service)
            .map(|(id, r)| r.info(id))
            .collect()
    }

    /// Number of registrations
    pub fn len(&self) -> usize {
        self.registrations.len()
    }

    /// Whether nothing has been registered
    pub fn is_empty(&self) -> bool {
        self.registrations.is_empty()
    }

    /// Seal the registrations into an immutable resolver
    pub fn build(self) -> Resolver {
        trace!(registrations = self.registrations.len(), "Sealing composition");
        Resolver::new(Registry::new(self.registrations))
    }

    fn push<T>(
        &mut self,
        lifetime: Lifetime,
        factory: Factory,
        root: OnceCell<Instance>,
    ) -> &mut Self
    where
        T: ?Sized + 'static,
    {
        let service_name = type_name::<T>();
        trace!(service = service_name, %lifetime, "Registering service");
        self.registrations.push(Registration {
            service: TypeId::of::<T>(),
            service_name,
            lifetime,
            factory,
            root_instance: root,
        });
        self
    }
}
