//! Purchase operation errors.

use thiserror::Error;

use crate::domain::foundation::{CardId, DomainError};

/// Errors raised by card acquisition.
#[derive(Debug, Clone, Error)]
pub enum PurchaseError {
    /// The card to acquire does not exist.
    #[error("Card not found: {0}")]
    CardNotFound(CardId),

    /// The persistence layer failed.
    #[error(transparent)]
    Storage(#[from] DomainError),
}
