//! Tag every request with an id that shows up in logs and in the
//! `X-Request-Id` response header.

use std::sync::Arc;

use axum::{
    extract::Request,
    http::HeaderValue,
    middleware::{from_fn, Next},
    response::Response,
    Router,
};
use base64::{engine::general_purpose::STANDARD_NO_PAD, Engine};
use uuid::Uuid;

pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Ids forwarded by a proxy are kept if they look like a plain token.
const MAX_FORWARDED_LEN: usize = 64;

pub fn add<S: Clone + Send + Sync + 'static>(router: Router<S>) -> Router<S> {
    router.layer(from_fn(assign_request_id))
}

async fn assign_request_id(mut request: Request, next: Next) -> Response {
    let request_id = request
        .headers()
        .get(REQUEST_ID_HEADER)
        .and_then(RequestId::forwarded)
        .unwrap_or_else(RequestId::generate);
    request.extensions_mut().insert(request_id.clone());

    let mut response = next.run(request).await;
    if let Ok(value) = HeaderValue::from_str(&request_id.0) {
        response.headers_mut().insert(REQUEST_ID_HEADER, value);
    }
    response
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RequestId(Arc<str>);

impl RequestId {
    fn generate() -> Self {
        Self(STANDARD_NO_PAD.encode(Uuid::now_v7().as_bytes()).into())
    }

    fn forwarded(value: &HeaderValue) -> Option<Self> {
        let value = value.to_str().ok()?;
        let valid = !value.is_empty()
            && value.len() <= MAX_FORWARDED_LEN
            && value
                .bytes()
                .all(|b| b.is_ascii_alphanumeric() || matches!(b, b'-' | b'_' | b'+' | b'/'));
        valid.then(|| Self(value.into()))
    }
}

impl std::fmt::Display for RequestId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
