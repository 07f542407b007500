use axum::Router;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::TraceLayer;

/// Wrap the app router with request ids and HTTP tracing spans.
///
/// An incoming `x-request-id` is kept; otherwise a UUID is assigned. Either
/// way the id is echoed on the response.
pub fn with_request_layers(router: Router) -> Router {
    router
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(TraceLayer::new_for_http())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
}
