//! HTTP routes for purchase endpoints.

use axum::{
    routing::{get, post},
    Router,
};

use crate::adapters::http::state::AppState;

use super::handlers::{acquire_card, list_acquisitions};

/// Creates the purchase router.
pub fn purchase_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_acquisitions))
        .route("/:card_id", post(acquire_card))
}
