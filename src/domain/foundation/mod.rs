//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers, enums, and error types
//! that form the vocabulary of the CardMarket domain.

mod command;
mod errors;
mod identity;
mod ids;
mod ownership;
mod role;
mod timestamp;

pub use command::CommandMetadata;
pub use errors::{DomainError, ErrorCode, ValidationError};
pub use identity::{Identity, IdentityError};
pub use ids::{CardId, CardUpdateId, CertificationId, PurchaseId, ReviewId, UserId};
pub use ownership::OwnedByUser;
pub use role::UserRole;
pub use timestamp::Timestamp;
