//! Certification operation errors.

use thiserror::Error;

use crate::domain::foundation::{CardId, CertificationId, DomainError, ValidationError};

/// Errors raised by certification submission and moderation.
#[derive(Debug, Clone, Error)]
pub enum CertificationError {
    /// The certified card does not exist.
    #[error("Card not found: {0}")]
    CardNotFound(CardId),

    /// The claim to moderate does not exist.
    #[error("Certification not found: {0}")]
    NotFound(CertificationId),

    /// The caller never acquired the card.
    #[error("You must purchase this card before certifying it")]
    NotPurchased,

    /// The caller already has a claim on this card.
    #[error("You have already submitted a certification for this card")]
    AlreadyCertified,

    /// The caller's identity does not permit the operation.
    #[error("{0}")]
    Forbidden(String),

    /// A claim field failed validation.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The persistence layer failed.
    #[error(transparent)]
    Storage(#[from] DomainError),
}
