//! HTTP routes for admin moderation endpoints.

use axum::{
    routing::{get, post},
    Router,
};

use crate::adapters::http::state::AppState;

use super::handlers::{
    list_pending_sellers, list_unverified_certifications, moderate_certification, moderate_seller,
};

/// Creates the admin router. Role enforcement happens in the handlers.
pub fn admin_routes() -> Router<AppState> {
    Router::new()
        .route("/certifications", post(moderate_certification))
        .route("/certifications", get(list_unverified_certifications))
        .route("/sellers", post(moderate_seller))
        .route("/sellers", get(list_pending_sellers))
}
