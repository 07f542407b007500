use axum::{
    body::Body,
    http::{Request, Response},
    Router,
};
use tower::ServiceExt;

/// Minimal router wrapped the same way the portal server is.
pub fn layered_app() -> Router {
    let app = Router::new().route("/ping", axum::routing::get(|| async { "pong" }));
    server::router::with_request_layers(app)
}

/// Send a GET, optionally carrying an `x-request-id`.
pub async fn get(app: Router, uri: &str, request_id: Option<&str>) -> Response<Body> {
    let mut builder = Request::builder().uri(uri);
    if let Some(id) = request_id {
        builder = builder.header("x-request-id", id);
    }
    let request = builder.body(Body::empty()).unwrap();
    app.oneshot(request).await.unwrap()
}
