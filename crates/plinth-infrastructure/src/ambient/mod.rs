//! Ambient Context Proxy
//!
//! Request-scoped access to the ambient execution context. A host handling a
//! request passes its live [`HttpContext`](plinth_domain::ports::HttpContext)
//! into the request's lifetime scope; everywhere else the scope falls back to
//! a [`FakeHttpContext`] rooted at the configured virtual root.
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`fallback`] | In-memory context used when no live context exists |
//! | [`proxy`] | Per-scope accessors and request scope creation |

pub mod fallback;
pub mod proxy;

pub use fallback::{
    FakeHttpContext, FakeHttpRequest, FakeHttpResponse, FakeHttpSession, FakeServerUtility,
};
pub use proxy::{AmbientContextProxy, LiveHttpContext, begin_request_scope};
