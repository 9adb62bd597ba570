//! Web helper
//!
//! Request-derived conveniences over the ambient context of the current
//! scope: client address, page URL, host location and query string
//! manipulation. Registered as a scoped service, so it always sees the
//! context of the scope it was resolved in.

use std::str::FromStr;
use std::sync::Arc;

use plinth_domain::ports::HttpContext;
use url::form_urlencoded;

use crate::constants::{FORWARDED_FOR_HEADER, REFERRER_HEADER, STATIC_RESOURCE_EXTENSIONS};

/// Helper over the ambient context of one scope
#[derive(Clone)]
pub struct WebHelper {
    context: Arc<dyn HttpContext>,
}

impl std::fmt::Debug for WebHelper {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WebHelper")
            .field("raw_url", &self.context.request().raw_url())
            .field("fallback", &self.context.is_fallback())
            .finish()
    }
}

impl WebHelper {
    /// Helper over a context
    pub fn new(context: Arc<dyn HttpContext>) -> Self {
        Self { context }
    }

    /// Referring page, if the client sent one
    pub fn url_referrer(&self) -> Option<String> {
        self.context.request().header(REFERRER_HEADER)
    }

    /// Client address, preferring the first `X-Forwarded-For` entry
    ///
    /// IPv6 loopback is reported as `127.0.0.1`. Empty when unknown.
    pub fn current_ip_address(&self) -> String {
        let request = self.context.request();
        let forwarded = request.header(FORWARDED_FOR_HEADER).and_then(|value| {
            value
                .split(',')
                .map(str::trim)
                .find(|entry| !entry.is_empty())
                .map(str::to_string)
        });
        let address = forwarded
            .or_else(|| request.user_host_address())
            .unwrap_or_default();
        if address == "::1" {
            "127.0.0.1".to_string()
        } else {
            address
        }
    }

    /// URL of the current page
    pub fn this_page_url(&self, include_query_string: bool) -> String {
        self.this_page_url_with_ssl(include_query_string, self.is_current_connection_secured())
    }

    /// URL of the current page with an explicit scheme choice
    pub fn this_page_url_with_ssl(&self, include_query_string: bool, use_ssl: bool) -> String {
        let request = self.context.request();
        let target = if include_query_string {
            request.raw_url()
        } else {
            request.path()
        };
        match request.host() {
            Some(host) => format!("{}{}", origin(host, use_ssl), ensure_leading_slash(target)),
            None => target.to_string(),
        }
    }

    /// Whether the current connection is secured
    pub fn is_current_connection_secured(&self) -> bool {
        self.context.request().is_secure()
    }

    /// Scheme and host, with a trailing slash; empty without a host
    pub fn host(&self, use_ssl: bool) -> String {
        self.context
            .request()
            .host()
            .map(|host| format!("{}/", origin(host, use_ssl)))
            .unwrap_or_default()
    }

    /// Application location using the scheme of the current connection
    pub fn location(&self) -> String {
        self.host(self.is_current_connection_secured())
    }

    /// Whether the current request targets a static file
    pub fn is_static_resource(&self) -> bool {
        let request = self.context.request();
        let path = request.path();
        let file = path.rsplit('/').next().unwrap_or(path);
        file.rsplit_once('.').is_some_and(|(_, extension)| {
            STATIC_RESOURCE_EXTENSIONS
                .iter()
                .any(|known| known.eq_ignore_ascii_case(extension))
        })
    }

    /// Whether the response is redirecting the client
    pub fn is_request_being_redirected(&self) -> bool {
        self.context.response().is_request_being_redirected()
    }

    /// Typed query string value; `None` when absent or unparsable
    pub fn query_string<T: FromStr>(&self, name: &str) -> Option<T> {
        self.context.request().query_value(name)?.parse().ok()
    }

    /// Merge `modification` (`a=1&b=2`) into the query string of `url`
    ///
    /// Existing keys are replaced in place, new keys are appended, and any
    /// fragment is replaced by `anchor`. Both query strings are decoded
    /// before merging and the result is re-encoded.
    pub fn modify_query_string(
        &self,
        url: &str,
        modification: &str,
        anchor: Option<&str>,
    ) -> String {
        let (base, query) = split_url(url);
        let mut pairs = parse_pairs(query);
        for (key, value) in parse_pairs(Some(modification)) {
            match pairs
                .iter_mut()
                .find(|(existing, _)| existing.eq_ignore_ascii_case(&key))
            {
                Some(slot) => slot.1 = value,
                None => pairs.push((key, value)),
            }
        }
        let mut result = join_url(base, &pairs);
        if let Some(anchor) = anchor.filter(|a| !a.is_empty()) {
            result.push('#');
            result.push_str(anchor.trim_start_matches('#'));
        }
        result
    }

    /// Remove one key from the query string of `url`, keeping its fragment
    pub fn remove_query_string(&self, url: &str, key: &str) -> String {
        let (without_fragment, fragment) = match url.split_once('#') {
            Some((rest, fragment)) => (rest, Some(fragment)),
            None => (url, None),
        };
        let (base, query) = split_url(without_fragment);
        let pairs: Vec<_> = parse_pairs(query)
            .into_iter()
            .filter(|(existing, _)| !existing.eq_ignore_ascii_case(key))
            .collect();
        let mut result = join_url(base, &pairs);
        if let Some(fragment) = fragment {
            result.push('#');
            result.push_str(fragment);
        }
        result
    }
}

fn origin(host: &str, use_ssl: bool) -> String {
    let scheme = if use_ssl { "https" } else { "http" };
    format!("{scheme}://{}", host.trim_end_matches('/'))
}

fn ensure_leading_slash(path: &str) -> String {
    let path = path.trim_start_matches('~');
    if path.starts_with('/') {
        path.to_string()
    } else {
        format!("/{path}")
    }
}

/// Split `url` into the part before `?` and the query, dropping any fragment
fn split_url(url: &str) -> (&str, Option<&str>) {
    let url = url.split_once('#').map_or(url, |(rest, _)| rest);
    match url.split_once('?') {
        Some((base, query)) => (base, Some(query)),
        None => (url, None),
    }
}

/// Decoded key/value pairs of a query string
fn parse_pairs(query: Option<&str>) -> Vec<(String, String)> {
    let query = query.unwrap_or_default().trim_start_matches('?');
    form_urlencoded::parse(query.as_bytes()).into_owned().collect()
}

fn join_url(base: &str, pairs: &[(String, String)]) -> String {
    if pairs.is_empty() {
        return base.to_string();
    }
    let query = form_urlencoded::Serializer::new(String::new())
        .extend_pairs(pairs)
        .finish();
    format!("{base}?{query}")
}
