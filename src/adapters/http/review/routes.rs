//! HTTP routes for review endpoints.

use axum::{routing::post, Router};

use crate::adapters::http::state::AppState;

use super::handlers::submit_review;

/// Creates the review router.
pub fn review_routes() -> Router<AppState> {
    Router::new().route("/", post(submit_review))
}
