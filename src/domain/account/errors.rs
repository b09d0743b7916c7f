//! Account moderation errors.

use thiserror::Error;

use crate::domain::foundation::{DomainError, UserId};

/// Errors raised by seller moderation.
#[derive(Debug, Clone, Error)]
pub enum AccountError {
    /// No account exists for this user.
    #[error("Account not found: {0}")]
    NotFound(UserId),

    /// The caller's identity does not permit the operation.
    #[error("{0}")]
    Forbidden(String),

    /// The persistence layer failed.
    #[error(transparent)]
    Storage(#[from] DomainError),
}
