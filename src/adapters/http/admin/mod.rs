//! HTTP adapter for admin moderation endpoints.
//!
//! - `POST /api/admin/certifications` - Verify or reject a claim
//! - `GET /api/admin/certifications` - Unverified claims, oldest first
//! - `POST /api/admin/sellers` - Approve or reject a seller application
//! - `GET /api/admin/sellers` - Applications awaiting review

pub mod dto;
pub mod handlers;
pub mod routes;

pub use dto::AccountResponse;
pub use routes::admin_routes;
