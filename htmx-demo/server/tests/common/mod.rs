#![allow(dead_code)]

use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use axum::response::Response;
use htmx_demo_server::todo::InMemoryTodoRepository;
use htmx_demo_server::todo::web::TodoState;
use serde::Serialize;
use std::collections::BTreeMap;
use std::sync::Arc;

/// HTTP response snapshot for testing endpoints.
#[derive(Debug, Serialize)]
pub struct HttpResponseSnapshot {
    test_context: String,
    status: u16,
    headers: BTreeMap<String, String>,
    html_body: Vec<String>,
}

impl HttpResponseSnapshot {
    /// Create a new HTTP response snapshot.
    pub fn new(
        body_text: &str,
        status: StatusCode,
        headers: &axum::http::HeaderMap,
        test_context: &str,
    ) -> Self {
        Self {
            test_context: test_context.to_string(),
            status: status.as_u16(),
            headers: filter_variable_headers(headers),
            html_body: body_text.lines().map(|line| line.to_string()).collect(),
        }
    }
}

/// Filter out variable headers from response headers for snapshot testing.
fn filter_variable_headers(headers: &axum::http::HeaderMap) -> BTreeMap<String, String> {
    let variable_headers = ["date", "server", "x-request-id", "content-length"];

    headers
        .iter()
        .filter_map(|(name, value)| {
            let name_str = name.as_str().to_lowercase();
            if variable_headers.contains(&name_str.as_str()) {
                None
            } else {
                value.to_str().ok().map(|v| (name_str, v.to_string()))
            }
        })
        .collect()
}

/// Fresh to-do state backed by a seeded in-memory repository.
pub fn setup() -> Arc<TodoState> {
    // Allow multiple calls to init for tests.
    let _ = tracing_subscriber::fmt().try_init();
    Arc::new(TodoState::new(Arc::new(InMemoryTodoRepository::new())))
}

pub fn empty_request(method: Method, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub fn form_request(method: Method, uri: &str, form_body: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/x-www-form-urlencoded")
        .body(Body::from(form_body.to_string()))
        .unwrap()
}

pub async fn body_text(response: Response) -> String {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    String::from_utf8(body.to_vec()).unwrap()
}

/// Extracts the element ids of every rendered `<li>` in document order.
pub fn rendered_ids(html: &str) -> Vec<String> {
    let pattern = regex::Regex::new(r#"<li id="([^"]+)""#).unwrap();
    pattern
        .captures_iter(html)
        .map(|captures| captures[1].to_string())
        .collect()
}
