//! HTTP adapters - the REST surface of the marketplace.
//!
//! Each area has its own directory with DTOs, handlers, and routes;
//! `router` assembles them under `/api` with tracing, CORS, and timeout
//! layers. Identity arrives as headers resolved by an upstream gateway
//! (see `middleware`).

pub mod admin;
pub mod card;
pub mod certification;
pub mod error;
pub mod middleware;
pub mod purchase;
pub mod review;
pub mod router;
pub mod state;

pub use router::api_router;
pub use state::AppState;
