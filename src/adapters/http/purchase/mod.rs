//! HTTP adapter for purchase endpoints.
//!
//! - `POST /api/purchases/:card_id` - Acquire a card (free, idempotent)
//! - `GET /api/purchases` - List the caller's acquisitions

pub mod dto;
pub mod handlers;
pub mod routes;

pub use dto::{AcquireCardResponse, LibraryEntryResponse, PurchaseResponse};
pub use routes::purchase_routes;
