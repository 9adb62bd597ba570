//! Ambient Execution Context Ports
//!
//! Request-scoped state that application code would otherwise reach through
//! a global "current context". A live host supplies an [`HttpContext`] per
//! unit of request handling; outside request handling a fallback context is
//! substituted, so every accessor always yields a usable handle.
//!
//! Implementations use interior mutability where a role is writable
//! (response status, session values), because handles are shared as
//! `Arc<dyn Role>` within one scope.

use std::path::PathBuf;
use std::sync::Arc;

use url::form_urlencoded;

/// Incoming request role
pub trait HttpRequest: Send + Sync {
    /// HTTP method (e.g. "GET")
    fn http_method(&self) -> &str;

    /// Raw URL: path plus optional query string
    fn raw_url(&self) -> &str;

    /// Host name the request was addressed to
    fn host(&self) -> Option<&str>;

    /// Whether the request arrived over a secured connection
    fn is_secure(&self) -> bool;

    /// Header value (case-insensitive name)
    fn header(&self, name: &str) -> Option<String>;

    /// Address of the remote client
    fn user_host_address(&self) -> Option<String>;

    /// Path component of the raw URL
    fn path(&self) -> &str {
        let raw = self.raw_url();
        raw.split_once('?').map_or(raw, |(path, _)| path)
    }

    /// Query string component of the raw URL, without the `?`
    fn query(&self) -> Option<&str> {
        self.raw_url().split_once('?').map(|(_, query)| query)
    }

    /// First value of a query string parameter, percent-decoded
    fn query_value(&self, name: &str) -> Option<String> {
        form_urlencoded::parse(self.query()?.as_bytes())
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.into_owned())
    }
}

/// Outgoing response role
pub trait HttpResponse: Send + Sync {
    /// Current status code
    fn status_code(&self) -> u16;

    /// Set the status code
    fn set_status_code(&self, code: u16);

    /// Header value (case-insensitive name)
    fn header(&self, name: &str) -> Option<String>;

    /// Set a header, replacing any previous value
    fn set_header(&self, name: &str, value: &str);

    /// Whether the response is a redirect with a target location
    fn is_request_being_redirected(&self) -> bool {
        (300..400).contains(&self.status_code()) && self.header("Location").is_some()
    }
}

/// Per-client session role
pub trait HttpSession: Send + Sync {
    /// Session identifier
    fn session_id(&self) -> &str;

    /// Read a value
    fn get(&self, key: &str) -> Option<String>;

    /// Store a value
    fn set(&self, key: &str, value: String);

    /// Remove a value, returning it
    fn remove(&self, key: &str) -> Option<String>;

    /// Number of stored values
    fn len(&self) -> usize;

    /// Whether the session holds no values
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Server utility role
pub trait ServerUtility: Send + Sync {
    /// Map an application-relative virtual path (`~/...`) to a physical path
    fn map_path(&self, virtual_path: &str) -> PathBuf;

    /// Percent-encode a value for use in a URL
    fn url_encode(&self, value: &str) -> String;
}

/// Ambient execution context: the four roles of one unit of work
pub trait HttpContext: Send + Sync {
    /// Current request
    fn request(&self) -> Arc<dyn HttpRequest>;

    /// Current response
    fn response(&self) -> Arc<dyn HttpResponse>;

    /// Current session
    fn session(&self) -> Arc<dyn HttpSession>;

    /// Server utility
    fn server(&self) -> Arc<dyn ServerUtility>;

    /// Whether this is the fallback substituted for a missing live context
    fn is_fallback(&self) -> bool {
        false
    }
}
