//! Top-level API router assembly.

use std::time::Duration;

use axum::{http::HeaderValue, Router};
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::config::ServerConfig;

use super::admin::admin_routes;
use super::card::card_routes;
use super::certification::certification_routes;
use super::purchase::purchase_routes;
use super::review::review_routes;
use super::state::AppState;

/// Assembles the full marketplace API under `/api`.
pub fn api_router(state: AppState, config: &ServerConfig) -> Router {
    let api = Router::new()
        .nest("/cards", card_routes())
        .nest("/purchases", purchase_routes())
        .nest("/reviews", review_routes())
        .nest("/certifications", certification_routes())
        .nest("/admin", admin_routes())
        .with_state(state);

    Router::new()
        .nest("/api", api)
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(config))
        .layer(TimeoutLayer::new(Duration::from_secs(
            config.request_timeout_secs,
        )))
}

fn cors_layer(config: &ServerConfig) -> CorsLayer {
    let origins: Vec<HeaderValue> = config
        .cors_origins_list()
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    if origins.is_empty() {
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        CorsLayer::new()
            .allow_origin(AllowOrigin::list(origins))
            .allow_methods(Any)
            .allow_headers(Any)
    }
}
