#![allow(dead_code, reason = "not every test binary uses every helper")]

use std::net::{IpAddr, Ipv4Addr};

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use brandmaska_api_rest::{RestServer, RestServerConfig, SEND_MAIL_ROUTE};
use brandmaska_core_contact_contracts::ContactService;
use brandmaska_core_health_contracts::HealthService;
use http_body_util::BodyExt;
use tower::ServiceExt;

pub fn router(health: impl HealthService, contact: impl ContactService) -> Router {
    let config = RestServerConfig {
        host: IpAddr::V4(Ipv4Addr::LOCALHOST),
        port: 0,
    };
    RestServer::new(health, contact, config).router()
}

pub struct TestResponse {
    pub status: StatusCode,
    pub request_id: Option<String>,
    pub body: Vec<u8>,
}

impl TestResponse {
    pub fn json(&self) -> serde_json::Value {
        serde_json::from_slice(&self.body).unwrap()
    }
}

pub async fn send(
    router: Router,
    method: Method,
    uri: &str,
    body: impl Into<Body>,
) -> TestResponse {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(body.into())
        .unwrap();

    let response = router.oneshot(request).await.unwrap();
    let status = response.status();
    let request_id = response
        .headers()
        .get("x-request-id")
        .map(|value| value.to_str().unwrap().to_owned());
    let body = response
        .into_body()
        .collect()
        .await
        .unwrap()
        .to_bytes()
        .to_vec();

    TestResponse {
        status,
        request_id,
        body,
    }
}

pub async fn post_json(router: Router, body: &serde_json::Value) -> TestResponse {
    send(router, Method::POST, SEND_MAIL_ROUTE, body.to_string()).await
}
