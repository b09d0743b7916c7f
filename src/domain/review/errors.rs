//! Review operation errors.

use thiserror::Error;

use crate::domain::foundation::{CardId, DomainError, ValidationError};

/// Errors raised by review submission.
#[derive(Debug, Clone, Error)]
pub enum ReviewError {
    /// The reviewed card does not exist.
    #[error("Card not found: {0}")]
    CardNotFound(CardId),

    /// The caller never acquired the card.
    #[error("You must purchase this card before reviewing it")]
    NotPurchased,

    /// The caller already reviewed the card.
    #[error("You have already reviewed this card")]
    AlreadyReviewed,

    /// A field failed validation.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The persistence layer failed.
    #[error(transparent)]
    Storage(#[from] DomainError),
}
