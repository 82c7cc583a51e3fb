use axum::Router;

mod panic_handler;
mod request_id;
mod trace;

/// Wrap the router in the middlewares shared by every route.
///
/// Layers added later run first, so the request id is assigned before the
/// request span is created and panics are caught inside that span.
pub fn add<S: Clone + Send + Sync + 'static>(router: Router<S>) -> Router<S> {
    let router = panic_handler::add(router);
    let router = trace::add(router);
    request_id::add(router)
}
