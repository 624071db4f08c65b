//! HTTP adapters - REST API implementations.
//!
//! Each domain module has its own HTTP adapter for endpoint exposure;
//! [`app_router`] assembles them with the shared middleware stack.

pub mod session;

pub use session::{session_routes, SessionHandlers};

use axum::http::{header, HeaderValue, Method};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;

/// Full application router: every endpoint plus tracing, CORS, timeout and
/// `x-request-id` handling.
pub fn app_router(handlers: SessionHandlers, server: &ServerConfig) -> Router {
    session_routes(handlers)
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(TimeoutLayer::new(server.request_timeout()))
        .layer(cors_layer(server))
        .layer(TraceLayer::new_for_http())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
}

fn cors_layer(server: &ServerConfig) -> CorsLayer {
    let configured = server.cors_origins_list();

    if configured.is_empty() {
        return if server.is_development() {
            CorsLayer::permissive()
        } else {
            CorsLayer::new()
        };
    }

    let origins: Vec<HeaderValue> = configured
        .iter()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %origin, "Ignoring unparseable CORS origin");
                None
            }
        })
        .collect();

    tracing::info!(origins = ?configured, "CORS allowed origins");

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::PATCH, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE])
}
