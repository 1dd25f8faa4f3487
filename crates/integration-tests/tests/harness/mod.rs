//! Shared helpers for driving the assembled router in-process
#![allow(dead_code)]

use axum::Router;
use axum::body::Body;
use daymemory_config::Config;
use daymemory_server::Server;
use http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use tower::ServiceExt;

/// Assemble the full router with the given application routes mounted
pub fn app(routes: Router) -> Router {
    app_with(&Config::default(), routes)
}

/// Assemble the full router from an explicit configuration
pub fn app_with(config: &Config, routes: Router) -> Router {
    Server::new(config).merge(routes).into_router()
}

/// Send a request and return the status plus raw body text
pub async fn send(router: Router, request: Request<Body>) -> (StatusCode, String) {
    let response = router.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}

/// Send a request and return the status plus parsed JSON body
pub async fn send_json(router: Router, request: Request<Body>) -> (StatusCode, serde_json::Value) {
    let (status, text) = send(router, request).await;
    let value = serde_json::from_str(&text).unwrap();
    (status, value)
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

pub fn post_json(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_owned()))
        .unwrap()
}
