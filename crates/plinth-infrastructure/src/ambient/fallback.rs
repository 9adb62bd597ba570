//! Fallback ambient context
//!
//! Deterministic in-memory implementations of the ambient roles. The request
//! is a `GET` of the virtual root; response and session state live in
//! concurrent maps owned by the context instance, so two fallback contexts
//! never share state.

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::sync::atomic::{AtomicU16, Ordering};

use dashmap::DashMap;
use plinth_domain::constants::{FALLBACK_HTTP_METHOD, FALLBACK_STATUS_CODE, VIRTUAL_PATH_PREFIX};
use plinth_domain::ports::{HttpContext, HttpRequest, HttpResponse, HttpSession, ServerUtility};
use url::form_urlencoded;
use uuid::Uuid;

/// Fallback request: a `GET` of a fixed URL
#[derive(Debug)]
pub struct FakeHttpRequest {
    method: String,
    raw_url: String,
    host: Option<String>,
    secure: bool,
    user_host_address: Option<String>,
    headers: DashMap<String, String>,
}

impl FakeHttpRequest {
    /// Request for the given URL
    pub fn new(raw_url: impl Into<String>) -> Self {
        Self {
            method: FALLBACK_HTTP_METHOD.to_string(),
            raw_url: raw_url.into(),
            host: None,
            secure: false,
            user_host_address: None,
            headers: DashMap::new(),
        }
    }

    /// Override the HTTP method
    #[must_use]
    pub fn with_method(mut self, method: impl Into<String>) -> Self {
        self.method = method.into();
        self
    }

    /// Set the host
    #[must_use]
    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = Some(host.into());
        self
    }

    /// Mark the connection as secured
    #[must_use]
    pub fn with_secure(mut self, secure: bool) -> Self {
        self.secure = secure;
        self
    }

    /// Set the remote client address
    #[must_use]
    pub fn with_user_host_address(mut self, address: impl Into<String>) -> Self {
        self.user_host_address = Some(address.into());
        self
    }

    /// Add a header
    #[must_use]
    pub fn with_header(self, name: &str, value: impl Into<String>) -> Self {
        self.headers.insert(name.to_ascii_lowercase(), value.into());
        self
    }
}

impl HttpRequest for FakeHttpRequest {
    fn http_method(&self) -> &str {
        &self.method
    }

    fn raw_url(&self) -> &str {
        &self.raw_url
    }

    fn host(&self) -> Option<&str> {
        self.host.as_deref()
    }

    fn is_secure(&self) -> bool {
        self.secure
    }

    fn header(&self, name: &str) -> Option<String> {
        self.headers
            .get(&name.to_ascii_lowercase())
            .map(|value| value.clone())
    }

    fn user_host_address(&self) -> Option<String> {
        self.user_host_address.clone()
    }
}

/// Fallback response
#[derive(Debug)]
pub struct FakeHttpResponse {
    status: AtomicU16,
    headers: DashMap<String, String>,
}

impl FakeHttpResponse {
    /// Fresh `200` response without headers
    pub fn new() -> Self {
        Self {
            status: AtomicU16::new(FALLBACK_STATUS_CODE),
            headers: DashMap::new(),
        }
    }
}

impl Default for FakeHttpResponse {
    fn default() -> Self {
        Self::new()
    }
}

impl HttpResponse for FakeHttpResponse {
    fn status_code(&self) -> u16 {
        self.status.load(Ordering::Acquire)
    }

    fn set_status_code(&self, code: u16) {
        self.status.store(code, Ordering::Release);
    }

    fn header(&self, name: &str) -> Option<String> {
        self.headers
            .get(&name.to_ascii_lowercase())
            .map(|value| value.clone())
    }

    fn set_header(&self, name: &str, value: &str) {
        self.headers
            .insert(name.to_ascii_lowercase(), value.to_string());
    }
}

/// Fallback session with a random identifier
#[derive(Debug)]
pub struct FakeHttpSession {
    id: String,
    values: DashMap<String, String>,
}

impl FakeHttpSession {
    /// Empty session
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            values: DashMap::new(),
        }
    }
}

impl Default for FakeHttpSession {
    fn default() -> Self {
        Self::new()
    }
}

impl HttpSession for FakeHttpSession {
    fn session_id(&self) -> &str {
        &self.id
    }

    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).map(|value| value.clone())
    }

    fn set(&self, key: &str, value: String) {
        self.values.insert(key.to_string(), value);
    }

    fn remove(&self, key: &str) -> Option<String> {
        self.values.remove(key).map(|(_, value)| value)
    }

    fn len(&self) -> usize {
        self.values.len()
    }
}

/// Fallback server utility mapping `~/` onto a physical directory
#[derive(Debug, Clone)]
pub struct FakeServerUtility {
    physical_root: PathBuf,
}

impl FakeServerUtility {
    /// Utility rooted at the given directory
    pub fn new(physical_root: impl Into<PathBuf>) -> Self {
        Self {
            physical_root: physical_root.into(),
        }
    }

    /// Directory the virtual root maps to
    pub fn physical_root(&self) -> &Path {
        &self.physical_root
    }
}

impl ServerUtility for FakeServerUtility {
    fn map_path(&self, virtual_path: &str) -> PathBuf {
        let relative = virtual_path
            .strip_prefix(VIRTUAL_PATH_PREFIX)
            .or_else(|| virtual_path.strip_prefix('/'))
            .unwrap_or(virtual_path);
        if relative.is_empty() {
            return self.physical_root.clone();
        }
        relative
            .split('/')
            .filter(|segment| !segment.is_empty())
            .fold(self.physical_root.clone(), |path, segment| path.join(segment))
    }

    fn url_encode(&self, value: &str) -> String {
        form_urlencoded::byte_serialize(value.as_bytes()).collect()
    }
}

/// Fallback context substituted when no live context exists
#[derive(Clone)]
pub struct FakeHttpContext {
    request: Arc<FakeHttpRequest>,
    response: Arc<FakeHttpResponse>,
    session: Arc<FakeHttpSession>,
    server: Arc<FakeServerUtility>,
}

impl std::fmt::Debug for FakeHttpContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FakeHttpContext")
            .field("raw_url", &self.request.raw_url())
            .field("session_id", &self.session.session_id())
            .finish_non_exhaustive()
    }
}

impl FakeHttpContext {
    /// Context for a request to `virtual_root`, mapping it to `physical_root`
    pub fn new(virtual_root: &str, physical_root: impl Into<PathBuf>) -> Self {
        Self::with_request(FakeHttpRequest::new(virtual_root), physical_root)
    }

    /// Context around a prepared request
    pub fn with_request(request: FakeHttpRequest, physical_root: impl Into<PathBuf>) -> Self {
        Self {
            request: Arc::new(request),
            response: Arc::new(FakeHttpResponse::new()),
            session: Arc::new(FakeHttpSession::new()),
            server: Arc::new(FakeServerUtility::new(physical_root)),
        }
    }
}

impl HttpContext for FakeHttpContext {
    fn request(&self) -> Arc<dyn HttpRequest> {
        self.request.clone()
    }

    fn response(&self) -> Arc<dyn HttpResponse> {
        self.response.clone()
    }

    fn session(&self) -> Arc<dyn HttpSession> {
        self.session.clone()
    }

    fn server(&self) -> Arc<dyn ServerUtility> {
        self.server.clone()
    }

    fn is_fallback(&self) -> bool {
        true
    }
}
