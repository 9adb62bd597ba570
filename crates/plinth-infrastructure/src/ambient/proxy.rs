//! Per-scope ambient context accessors
//!
//! The live context travels explicitly: the host hands it to
//! [`begin_request_scope`], which attaches it to the new lifetime scope.
//! The scoped `dyn HttpContext` registration installed by
//! [`AmbientContextRegistrar`](crate::di::registrars::AmbientContextRegistrar)
//! returns it, or a fresh fallback when the scope carries none.
//!
//! ```ignore
//! let scope = begin_request_scope(&resolver, Some(live_context));
//! let proxy = AmbientContextProxy::new(&scope);
//! let request = proxy.get_request()?;
//! assert!(Arc::ptr_eq(&request, &proxy.get_request()?));
//! ```

use std::sync::Arc;

use plinth_domain::error::Result;
use plinth_domain::ports::{HttpContext, HttpRequest, HttpResponse, HttpSession, ServerUtility};

use crate::di::composition::{LifetimeScope, Resolver};

/// Live context supplied by the host for one scope
#[derive(Clone)]
pub struct LiveHttpContext(Arc<dyn HttpContext>);

impl LiveHttpContext {
    /// Wrap the host's context
    pub fn new(context: Arc<dyn HttpContext>) -> Self {
        Self(context)
    }

    /// The wrapped context
    pub fn context(&self) -> Arc<dyn HttpContext> {
        Arc::clone(&self.0)
    }
}

impl std::fmt::Debug for LiveHttpContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("LiveHttpContext")
            .field(&self.0.request().raw_url())
            .finish()
    }
}

/// Open the lifetime scope for one unit of request handling
///
/// Pass `None` outside request handling; the scope then resolves the
/// fallback context.
pub fn begin_request_scope(
    resolver: &Resolver,
    live: Option<Arc<dyn HttpContext>>,
) -> LifetimeScope {
    let scope = resolver.begin_scope();
    match live {
        Some(context) => scope.with_instance(Arc::new(LiveHttpContext::new(context))),
        None => scope,
    }
}

/// Accessors for the ambient roles of one scope
///
/// The first access in a scope resolves the role; later accesses in the same
/// scope return the same instance.
#[derive(Debug, Clone, Copy)]
pub struct AmbientContextProxy<'s> {
    scope: &'s LifetimeScope,
}

impl<'s> AmbientContextProxy<'s> {
    /// Proxy over a lifetime scope
    pub fn new(scope: &'s LifetimeScope) -> Self {
        Self { scope }
    }

    /// Current context, live or fallback
    pub fn get_context(&self) -> Result<Arc<dyn HttpContext>> {
        self.scope.resolve_one::<dyn HttpContext>()
    }

    /// Current request
    pub fn get_request(&self) -> Result<Arc<dyn HttpRequest>> {
        self.scope.resolve_one::<dyn HttpRequest>()
    }

    /// Current response
    pub fn get_response(&self) -> Result<Arc<dyn HttpResponse>> {
        self.scope.resolve_one::<dyn HttpResponse>()
    }

    /// Current session
    pub fn get_session(&self) -> Result<Arc<dyn HttpSession>> {
        self.scope.resolve_one::<dyn HttpSession>()
    }

    /// Server utility
    pub fn get_server(&self) -> Result<Arc<dyn ServerUtility>> {
        self.scope.resolve_one::<dyn ServerUtility>()
    }
}
