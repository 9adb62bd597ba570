//! Web helper tests

use std::sync::Arc;

use plinth_domain::ports::HttpContext;
use plinth_infrastructure::ambient::{FakeHttpContext, FakeHttpRequest};
use plinth_infrastructure::web_helper::WebHelper;

fn helper(request: FakeHttpRequest) -> WebHelper {
    let context: Arc<dyn HttpContext> = Arc::new(FakeHttpContext::with_request(request, "."));
    WebHelper::new(context)
}

#[test]
fn test_current_ip_prefers_forwarded_for() {
    let web = helper(
        FakeHttpRequest::new("/")
            .with_user_host_address("10.0.0.1")
            .with_header("X-Forwarded-For", " 203.0.113.9, 10.0.0.1"),
    );
    assert_eq!(web.current_ip_address(), "203.0.113.9");

    let direct = helper(FakeHttpRequest::new("/").with_user_host_address("::1"));
    assert_eq!(direct.current_ip_address(), "127.0.0.1");

    assert_eq!(helper(FakeHttpRequest::new("/")).current_ip_address(), "");
}

#[test]
fn test_this_page_url() {
    let web = helper(
        FakeHttpRequest::new("/products/list?sort=price")
            .with_host("shop.example")
            .with_secure(true),
    );
    assert_eq!(
        web.this_page_url(true),
        "https://shop.example/products/list?sort=price"
    );
    assert_eq!(web.this_page_url(false), "https://shop.example/products/list");
    assert_eq!(
        web.this_page_url_with_ssl(false, false),
        "http://shop.example/products/list"
    );
    assert!(web.is_current_connection_secured());
}

#[test]
fn test_host_and_location() {
    let web = helper(FakeHttpRequest::new("/").with_host("shop.example"));
    assert_eq!(web.host(false), "http://shop.example/");
    assert_eq!(web.host(true), "https://shop.example/");
    assert_eq!(web.location(), "http://shop.example/");

    assert_eq!(helper(FakeHttpRequest::new("~/")).host(false), "");
}

#[test]
fn test_url_referrer() {
    let web = helper(FakeHttpRequest::new("/").with_header("Referer", "https://search.example/"));
    assert_eq!(web.url_referrer().as_deref(), Some("https://search.example/"));
    assert!(helper(FakeHttpRequest::new("/")).url_referrer().is_none());
}

#[test]
fn test_static_resource_detection() {
    assert!(helper(FakeHttpRequest::new("/content/site.CSS")).is_static_resource());
    assert!(helper(FakeHttpRequest::new("/scripts/app.js?v=3")).is_static_resource());
    assert!(!helper(FakeHttpRequest::new("/catalog/item")).is_static_resource());
    assert!(!helper(FakeHttpRequest::new("/v1.2/catalog")).is_static_resource());
}

#[test]
fn test_typed_query_string() {
    let web = helper(FakeHttpRequest::new("/search?q=lamp&page=3&flag"));
    assert_eq!(web.query_string::<u32>("page"), Some(3));
    assert_eq!(web.query_string::<String>("Q").as_deref(), Some("lamp"));
    assert_eq!(web.query_string::<u32>("q"), None);
    assert_eq!(web.query_string::<u32>("missing"), None);
}

#[test]
fn test_modify_query_string() {
    let web = helper(FakeHttpRequest::new("/"));
    assert_eq!(
        web.modify_query_string("/list?page=1&sort=name#top", "page=2&size=20", None),
        "/list?page=2&sort=name&size=20"
    );
    assert_eq!(
        web.modify_query_string("/list", "page=2", Some("results")),
        "/list?page=2#results"
    );
}

#[test]
fn test_remove_query_string() {
    let web = helper(FakeHttpRequest::new("/"));
    assert_eq!(
        web.remove_query_string("/list?page=2&sort=name#top", "PAGE"),
        "/list?sort=name#top"
    );
    assert_eq!(web.remove_query_string("/list?page=2", "page"), "/list");
}

#[test]
fn test_query_string_values_are_decoded() {
    let web = helper(FakeHttpRequest::new("/search?q=hello%20world&city=S%C3%A3o+Paulo"));
    assert_eq!(web.query_string::<String>("q").as_deref(), Some("hello world"));
    assert_eq!(web.query_string::<String>("city").as_deref(), Some("São Paulo"));
}

#[test]
fn test_modified_query_string_is_encoded() {
    let web = helper(FakeHttpRequest::new("/"));
    assert_eq!(
        web.modify_query_string("/p?name=a%26b", "tag=x y", None),
        "/p?name=a%26b&tag=x+y"
    );
    assert_eq!(
        web.remove_query_string("/p?city=S%C3%A3o+Paulo&page=2", "page"),
        "/p?city=S%C3%A3o+Paulo"
    );
}
