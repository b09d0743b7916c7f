//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.
//! Following CQRS, command handlers mutate state and query handlers read it;
//! both take `CommandMetadata` so the acting identity is always explicit.

pub mod admin;
pub mod card;
pub mod certification;
pub mod purchase;
pub mod review;
