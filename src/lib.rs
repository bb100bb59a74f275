pub mod config;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod repositories;
pub mod state;
pub mod utils;

use axum::{
    extract::OriginalUri,
    http::{header, HeaderName, HeaderValue, Method, Uri},
    routing::{get, post},
    Router,
};
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};

use crate::config::AppConfig;
use crate::handlers::{catalog, health, inquiries};
use crate::middleware::{
    content_type_validation_middleware, request_id_middleware, AppError, REQUEST_ID_HEADER,
};
pub use crate::state::AppState;

pub fn create_app(state: AppState, config: &AppConfig) -> Router {
    let api = Router::new()
        .route("/health", get(health::health))
        .route("/health/ready", get(health::readiness))
        .route("/company", get(catalog::company_profile))
        .route("/products", get(catalog::products))
        .route("/inquiries", post(inquiries::create_inquiry))
        .method_not_allowed_fallback(method_not_allowed);

    Router::new()
        .route("/", get(catalog::root))
        .method_not_allowed_fallback(method_not_allowed)
        .nest("/api", api)
        .fallback(not_found)
        .layer(
            ServiceBuilder::new()
                .layer(cors_layer(config))
                .layer(axum::middleware::from_fn(request_id_middleware))
                .layer(axum::middleware::from_fn(content_type_validation_middleware)),
        )
        .with_state(state)
}

async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(format!("No route for {}", uri.path()))
}

async fn method_not_allowed(method: Method, OriginalUri(uri): OriginalUri) -> AppError {
    AppError::MethodNotAllowed(format!("{} is not supported on {}", method, uri.path()))
}

fn cors_layer(config: &AppConfig) -> CorsLayer {
    if config.allows_any_origin() {
        return CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
            .expose_headers([HeaderName::from_static(REQUEST_ID_HEADER)]);
    }

    let origins: Vec<HeaderValue> = config
        .cors_origins
        .iter()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(e) => {
                tracing::error!("Invalid CORS origin '{}': {}", origin, e);
                None
            }
        })
        .collect();

    tracing::info!("CORS configured with {} allowed origins", origins.len());

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_credentials(true)
        .allow_headers([
            header::CONTENT_TYPE,
            header::ACCEPT,
            HeaderName::from_static(REQUEST_ID_HEADER),
        ])
        .expose_headers([HeaderName::from_static(REQUEST_ID_HEADER)])
}
