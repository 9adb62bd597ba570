//! Ambient context registrations

use std::sync::Arc;

use plinth_domain::error::Result;
use plinth_domain::ports::{HttpContext, HttpRequest, HttpResponse, HttpSession, ServerUtility};
use tracing::debug;

use crate::ambient::{FakeHttpContext, LiveHttpContext};
use crate::config::AppConfig;
use crate::di::composition::CompositionBuilder;
use crate::di::plugin::DependencyRegistrar;
use crate::discovery::TypeScanner;
use crate::web_helper::WebHelper;

/// Registers the ambient roles as per-scope services
///
/// `dyn HttpContext` resolves to the scope's live context when the host
/// attached one, otherwise to a new [`FakeHttpContext`] rooted at
/// `web.virtual_root`. Request, response, session and server utility are
/// projections of that context.
#[derive(Debug, Default)]
pub struct AmbientContextRegistrar;

impl DependencyRegistrar for AmbientContextRegistrar {
    fn register(
        &self,
        builder: &mut CompositionBuilder,
        _scanner: &TypeScanner,
        config: &AppConfig,
    ) -> Result<()> {
        let web = config.web.clone();
        debug!(virtual_root = %web.virtual_root, "Registering ambient context");

        builder.register_scoped::<dyn HttpContext, _>(move |resolution| {
            if let Some(live) = resolution.scope_local::<LiveHttpContext>() {
                return Ok(live.context());
            }
            let fallback = FakeHttpContext::new(&web.virtual_root, web.physical_root.clone());
            Ok(Arc::new(fallback) as Arc<dyn HttpContext>)
        });
        builder.register_scoped::<dyn HttpRequest, _>(|resolution| {
            Ok(resolution.resolve_one::<dyn HttpContext>()?.request())
        });
        builder.register_scoped::<dyn HttpResponse, _>(|resolution| {
            Ok(resolution.resolve_one::<dyn HttpContext>()?.response())
        });
        builder.register_scoped::<dyn HttpSession, _>(|resolution| {
            Ok(resolution.resolve_one::<dyn HttpContext>()?.session())
        });
        builder.register_scoped::<dyn ServerUtility, _>(|resolution| {
            Ok(resolution.resolve_one::<dyn HttpContext>()?.server())
        });

        builder.register_scoped::<WebHelper, _>(|resolution| {
            Ok(Arc::new(WebHelper::new(
                resolution.resolve_one::<dyn HttpContext>()?,
            )))
        });
        Ok(())
    }
}
