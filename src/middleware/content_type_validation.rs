// ============================================================================
// Content-Type Validation Middleware
// ============================================================================
//
// Every write endpoint of this API takes a JSON body. Requests that carry a
// body with any other declared type (form posts, XML, plain text) are
// rejected before routing, so handlers only ever see JSON.
//
// - GET, HEAD, OPTIONS, DELETE: not checked
// - POST, PUT, PATCH: Content-Type must be application/json (parameters such
//   as charset are allowed)
//
// ============================================================================

use axum::{
    extract::Request,
    http::{header, Method, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::utils::log_sanitizer::sanitize_for_log;

pub async fn content_type_validation_middleware(request: Request, next: Next) -> Response {
    if !matches!(*request.method(), Method::POST | Method::PUT | Method::PATCH) {
        return next.run(request).await;
    }

    let content_type = request
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(str::to_owned);

    match content_type.as_deref() {
        Some(ct) if is_json_content_type(ct) => next.run(request).await,
        Some(ct) => {
            tracing::warn!(
                method = %request.method(),
                path = %sanitize_for_log(request.uri().path()),
                content_type = %sanitize_for_log(ct),
                "Unsupported Content-Type"
            );
            reject(
                StatusCode::UNSUPPORTED_MEDIA_TYPE,
                "Unsupported Content-Type, expected application/json",
            )
        }
        None => {
            tracing::warn!(
                method = %request.method(),
                path = %sanitize_for_log(request.uri().path()),
                "Missing Content-Type"
            );
            reject(StatusCode::BAD_REQUEST, "Content-Type header required")
        }
    }
}

fn reject(status: StatusCode, message: &str) -> Response {
    let body = json!({
        "success": false,
        "error": message,
        "status": status.as_u16()
    });
    (status, Json(body)).into_response()
}

fn is_json_content_type(content_type: &str) -> bool {
    content_type
        .split(';')
        .next()
        .map(|base| base.trim().eq_ignore_ascii_case("application/json"))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{body::Body, http::Request, routing::post, Router};
    use tower::ServiceExt;

    #[test]
    fn test_json_content_types() {
        assert!(is_json_content_type("application/json"));
        assert!(is_json_content_type("application/json; charset=utf-8"));
        assert!(is_json_content_type("Application/JSON"));
    }

    #[test]
    fn test_non_json_content_types() {
        assert!(!is_json_content_type("application/x-www-form-urlencoded"));
        assert!(!is_json_content_type("multipart/form-data; boundary=----"));
        assert!(!is_json_content_type("text/plain"));
        assert!(!is_json_content_type(""));
    }

    fn app() -> Router {
        Router::new()
            .route("/submit", post(|| async { "accepted" }))
            .layer(axum::middleware::from_fn(content_type_validation_middleware))
    }

    #[tokio::test]
    async fn test_form_post_rejected() {
        let response = app()
            .oneshot(
                Request::builder()
                    .method(Method::POST)
                    .uri("/submit")
                    .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                    .body(Body::from("name=Raj"))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNSUPPORTED_MEDIA_TYPE);
    }

    #[tokio::test]
    async fn test_missing_content_type_rejected() {
        let response = app()
            .oneshot(
                Request::builder()
                    .method(Method::POST)
                    .uri("/submit")
                    .body(Body::from("{}"))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_json_post_passes_through() {
        let response = app()
            .oneshot(
                Request::builder()
                    .method(Method::POST)
                    .uri("/submit")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from("{}"))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }
}
