//! HTTP adapter for review endpoints.
//!
//! - `POST /api/reviews` - Review an acquired card (one per user and card)

pub mod dto;
pub mod handlers;
pub mod routes;

pub use dto::ReviewResponse;
pub use routes::review_routes;
