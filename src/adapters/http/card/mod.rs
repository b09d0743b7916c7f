//! HTTP adapter for card endpoints.
//!
//! - `POST /api/cards` - Create a card (approved sellers)
//! - `GET /api/cards` - Browse the catalog, or own cards with `?mine=true`
//! - `GET /api/cards/:id` - Card detail view
//! - `PUT /api/cards/:id` - Replace a card's fields (owner)
//! - `DELETE /api/cards/:id` - Delete a card (owner)

pub mod dto;
pub mod handlers;
pub mod routes;

pub use dto::{CardDetailResponse, CardResponse, CardUpdateResponse};
pub use routes::card_routes;
