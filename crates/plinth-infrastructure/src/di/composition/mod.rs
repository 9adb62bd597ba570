//! Composition Container
//!
//! The dependency graph the engine assembles during bootstrap.
//!
//! ```text
//! CompositionBuilder  (mutable, owned by the engine during registration)
//!        │ build()
//!        ↓
//!     Resolver         (immutable, Clone + Send + Sync, shared process-wide)
//!        │ begin_scope()
//!        ↓
//!   LifetimeScope      (one per unit of work, caches scoped instances)
//! ```
//!
//! Factories receive a [`Resolution`] through which they resolve their own
//! dependencies. Services are stored type-erased as `Arc<Arc<T>>` behind
//! `Arc<dyn Any + Send + Sync>`, which lets trait objects (`dyn Trait`) be
//! registered and resolved the same way as concrete types.

mod builder;
mod lifetime;
mod registry;
mod resolver;
mod scope;

pub use builder::CompositionBuilder;
pub use lifetime::Lifetime;
pub use registry::RegistrationInfo;
pub use resolver::{Resolution, Resolver};
pub use scope::LifetimeScope;
