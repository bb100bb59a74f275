// ============================================================================
// Request ID Middleware
// ============================================================================
//
// Tags every request with a UUID so the request and response log lines (and
// anything a handler logs) can be correlated. A valid `X-Request-ID` sent by
// the client or an upstream proxy is reused; anything else is replaced with a
// fresh v4 UUID. The ID is echoed back in the response headers, stored in
// the request extensions, and attached as a span field to everything logged
// while the request is handled.
//
// ============================================================================

use std::time::Instant;

use axum::{
    extract::Request,
    http::{HeaderName, HeaderValue},
    middleware::Next,
    response::Response,
};
use tracing::Instrument;
use uuid::Uuid;

pub const REQUEST_ID_HEADER: &str = "x-request-id";

pub async fn request_id_middleware(mut request: Request, next: Next) -> Response {
    let request_id = request
        .headers()
        .get(REQUEST_ID_HEADER)
        .and_then(|v| v.to_str().ok())
        .and_then(|s| Uuid::parse_str(s).ok())
        .unwrap_or_else(Uuid::new_v4);

    request.extensions_mut().insert(request_id);

    tracing::info!(
        request_id = %request_id,
        method = %request.method(),
        uri = %request.uri(),
        "request"
    );

    let started = Instant::now();
    let span = tracing::info_span!("http_request", request_id = %request_id);
    let mut response = next.run(request).instrument(span).await;

    if let Ok(value) = HeaderValue::from_str(&request_id.to_string()) {
        response
            .headers_mut()
            .insert(HeaderName::from_static(REQUEST_ID_HEADER), value);
    }

    tracing::info!(
        request_id = %request_id,
        status = %response.status(),
        elapsed_ms = started.elapsed().as_millis() as u64,
        "response"
    );

    response
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{body::Body, http::Request, routing::get, Extension, Router};
    use tower::ServiceExt;

    fn app() -> Router {
        Router::new()
            .route(
                "/",
                get(|Extension(id): Extension<Uuid>| async move { id.to_string() }),
            )
            .layer(axum::middleware::from_fn(request_id_middleware))
    }

    fn header_of(response: &Response) -> String {
        response
            .headers()
            .get(REQUEST_ID_HEADER)
            .unwrap()
            .to_str()
            .unwrap()
            .to_string()
    }

    #[tokio::test]
    async fn test_request_id_generated() {
        let response = app()
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert!(Uuid::parse_str(&header_of(&response)).is_ok());
    }

    #[tokio::test]
    async fn test_client_request_id_reused_and_visible_to_handler() {
        let client_id = Uuid::new_v4();

        let response = app()
            .oneshot(
                Request::builder()
                    .uri("/")
                    .header(REQUEST_ID_HEADER, client_id.to_string())
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(header_of(&response), client_id.to_string());
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert_eq!(&body[..], client_id.to_string().as_bytes());
    }

    #[tokio::test]
    async fn test_malformed_request_id_replaced() {
        let response = app()
            .oneshot(
                Request::builder()
                    .uri("/")
                    .header(REQUEST_ID_HEADER, "order-42")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        let id = header_of(&response);
        assert_ne!(id, "order-42");
        assert!(Uuid::parse_str(&id).is_ok());
    }
}
