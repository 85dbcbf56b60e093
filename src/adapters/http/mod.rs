//! HTTP adapters - REST API implementations.
//!
//! Each domain module has its own HTTP adapter for endpoint exposure.
//! [`build_app`] mounts them and applies the shared middleware stack.

pub mod membership;

use std::time::Duration;

use axum::http::header::CONTENT_TYPE;
use axum::http::{HeaderValue, Method};
use axum::Router;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing::warn;

use crate::config::ServerConfig;

// Re-export key types for convenience
pub use membership::{membership_router, MembershipAppState};

/// Build the application router with CORS, timeout and request tracing.
pub fn build_app(state: MembershipAppState, server: &ServerConfig) -> Router {
    membership_router(state)
        .layer(TimeoutLayer::new(Duration::from_secs(
            server.request_timeout_secs,
        )))
        .layer(cors_layer(server))
        .layer(TraceLayer::new_for_http())
}

/// CORS policy: the configured origins, or any origin outside production
/// when none are configured.
fn cors_layer(server: &ServerConfig) -> CorsLayer {
    let base = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([CONTENT_TYPE]);

    let origins: Vec<HeaderValue> = server
        .cors_origins_list()
        .into_iter()
        .filter_map(|origin| match HeaderValue::from_str(&origin) {
            Ok(value) => Some(value),
            Err(_) => {
                warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    if !origins.is_empty() {
        base.allow_origin(AllowOrigin::list(origins))
    } else if server.is_production() {
        base
    } else {
        base.allow_origin(Any)
    }
}
