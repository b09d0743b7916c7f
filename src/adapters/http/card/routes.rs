//! HTTP routes for card endpoints.

use axum::{
    routing::{delete, get, post, put},
    Router,
};

use crate::adapters::http::state::AppState;

use super::handlers::{browse_cards, create_card, delete_card, get_card, update_card};

/// Creates the card router: catalog, detail, and seller CRUD.
pub fn card_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(create_card))
        .route("/", get(browse_cards))
        .route("/:id", get(get_card))
        .route("/:id", put(update_card))
        .route("/:id", delete(delete_card))
}
