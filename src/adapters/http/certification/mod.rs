//! HTTP adapter for certification endpoints.
//!
//! - `POST /api/certifications` - Submit a claim (starts unverified)

pub mod dto;
pub mod handlers;
pub mod routes;

pub use dto::CertificationResponse;
pub use routes::certification_routes;
