//! HTTP adapters - REST API implementations.
//!
//! Each domain module has its own HTTP adapter for endpoint exposure; they
//! share one [`SchoolAppState`] because cycle deletion and propagation touch
//! institutions too.

pub mod academic;
pub mod establishment;

mod error;
mod state;

pub use academic::academic_router;
pub use error::{ApiError, ErrorResponse};
pub use establishment::establishment_router;
pub use state::SchoolAppState;

use axum::http::HeaderValue;
use axum::Router;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;

/// All API routes with request tracing, bound to `state`.
pub fn api_router(state: SchoolAppState) -> Router {
    Router::new()
        .merge(academic_router())
        .merge(establishment_router())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// The API router wrapped in the server-level CORS and timeout policy.
pub fn application(state: SchoolAppState, config: &ServerConfig) -> Router {
    api_router(state)
        .layer(TimeoutLayer::new(config.request_timeout()))
        .layer(cors_layer(config))
}

fn cors_layer(config: &ServerConfig) -> CorsLayer {
    let origins: Vec<HeaderValue> = config
        .cors_origins_list()
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    if origins.is_empty() {
        CorsLayer::permissive()
    } else {
        CorsLayer::new()
            .allow_origin(AllowOrigin::list(origins))
            .allow_methods(tower_http::cors::Any)
            .allow_headers(tower_http::cors::Any)
    }
}
