//! Finalized registration table shared by the resolver and its scopes

use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::sync::Arc;

use once_cell::sync::OnceCell;
use plinth_domain::error::{Error, Result};

use super::Lifetime;
use super::resolver::Resolution;
use super::scope::LifetimeScope;

/// Type-erased service: always an `Arc<T>` boxed as `dyn Any`
pub(crate) type Instance = Arc<dyn Any + Send + Sync>;

pub(crate) type Factory = Box<dyn Fn(&Resolution<'_>) -> Result<Instance> + Send + Sync>;

pub(crate) struct Registration {
    pub(crate) service: TypeId,
    pub(crate) service_name: &'static str,
    pub(crate) lifetime: Lifetime,
    pub(crate) factory: Factory,
    /// Singleton instance, or the root scope's instance of a scoped service
    pub(crate) root_instance: OnceCell<Instance>,
}

impl Registration {
    pub(crate) fn info(&self, id: usize) -> RegistrationInfo {
        RegistrationInfo {
            id,
            service_name: self.service_name,
            lifetime: self.lifetime,
        }
    }
}

/// Read-only description of one registration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistrationInfo {
    /// Position in registration order
    pub id: usize,
    /// Type name of the service the registration provides
    pub service_name: &'static str,
    /// Lifetime of resolved instances
    pub lifetime: Lifetime,
}

pub(crate) struct Registry {
    registrations: Vec<Registration>,
    by_service: HashMap<TypeId, Vec<usize>>,
}

impl Registry {
    pub(crate) fn new(registrations: Vec<Registration>) -> Self {
        let mut by_service: HashMap<TypeId, Vec<usize>> = HashMap::new();
        for (id, registration) in registrations.iter().enumerate() {
            by_service.entry(registration.service).or_default().push(id);
        }
        Self {
            registrations,
            by_service,
        }
    }

    /// Registration ids for a service, in registration order
    pub(crate) fn ids_for(&self, service: TypeId) -> &[usize] {
        self.by_service.get(&service).map_or(&[], Vec::as_slice)
    }

    pub(crate) fn len(&self) -> usize {
        self.registrations.len()
    }

    /// Produce the instance for one registration, honouring its lifetime
    pub(crate) fn instantiate(
        &self,
        id: usize,
        scope: Option<&LifetimeScope>,
        chain: &[usize],
    ) -> Result<Instance> {
        let registration = &self.registrations[id];
        if chain.contains(&id) {
            return Err(Error::resolution(
                registration.service_name,
                "dependency cycle detected",
            ));
        }
        let mut path = chain.to_vec();
        path.push(id);

        match (registration.lifetime, scope) {
            (Lifetime::Transient, _) => {
                (registration.factory)(&Resolution::new(self, scope, path))
            }
            (Lifetime::Scoped, Some(scope)) => scope.cached_or_create(id, || {
                (registration.factory)(&Resolution::new(self, Some(scope), path))
            }),
            // Singletons never see a scope, so they cannot capture scoped state
            (Lifetime::Singleton, _) | (Lifetime::Scoped, None) => registration
                .root_instance
                .get_or_try_init(|| (registration.factory)(&Resolution::new(self, None, path)))
                .cloned(),
        }
    }
}

/// Recover `Arc<T>` from a type-erased instance
pub(crate) fn downcast<T>(instance: &Instance, service_name: &'static str) -> Result<Arc<T>>
where
    T: ?Sized + Send + Sync + 'static,
{
    (**instance)
        .downcast_ref::<Arc<T>>()
        .cloned()
        .ok_or_else(|| Error::resolution(service_name, "instance has an unexpected type"))
}
