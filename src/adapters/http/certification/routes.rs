//! HTTP routes for certification endpoints.

use axum::{routing::post, Router};

use crate::adapters::http::state::AppState;

use super::handlers::submit_certification;

/// Creates the certification router.
pub fn certification_routes() -> Router<AppState> {
    Router::new().route("/", post(submit_certification))
}
