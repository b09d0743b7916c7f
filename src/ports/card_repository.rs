//! Card repository port (write side plus card-scoped queries).
//!
//! # Design
//!
//! - **Atomic transitions**: `update` is a single conditional write keyed on
//!   the version the caller observed. Either every field plus the optional
//!   update-log entry lands, or nothing does. Two concurrent publishers can
//!   never both observe the same previous version and both increment it.
//! - **Append-only log**: update-log entries are written exactly once,
//!   inside `update`, and only ever read back.

use async_trait::async_trait;

use crate::domain::card::{Card, CardType, CardUpdate, CardVersion};
use crate::domain::foundation::{CardId, DomainError, UserId};

/// Filter for the published-card catalog.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogFilter {
    /// Restrict to one category (exact match).
    pub category: Option<String>,
    /// Restrict to one card type.
    pub card_type: Option<CardType>,
}

/// Repository port for Card aggregate persistence.
#[async_trait]
pub trait CardRepository: Send + Sync {
    /// Save a new card at version 1.
    ///
    /// # Errors
    ///
    /// - `DatabaseError` on persistence failure
    async fn save(&self, card: &Card) -> Result<(), DomainError>;

    /// Atomically update a card, conditional on the expected version.
    ///
    /// Appends `update_entry` in the same write when present. The write must
    /// apply only if the stored version still equals `expected_version`.
    ///
    /// # Errors
    ///
    /// - `CardNotFound` if the card doesn't exist
    /// - `ConcurrencyConflict` if another write advanced the card first
    /// - `DatabaseError` on persistence failure
    async fn update(
        &self,
        card: &Card,
        expected_version: CardVersion,
        update_entry: Option<&CardUpdate>,
    ) -> Result<(), DomainError>;

    /// Find a card by its ID.
    ///
    /// Returns `None` if not found.
    async fn find_by_id(&self, id: &CardId) -> Result<Option<Card>, DomainError>;

    /// Find all cards belonging to a seller, newest first.
    async fn find_by_seller(&self, seller_id: &UserId) -> Result<Vec<Card>, DomainError>;

    /// Find published cards matching the catalog filter, newest first.
    async fn find_published(&self, filter: &CatalogFilter) -> Result<Vec<Card>, DomainError>;

    /// List a card's update-log entries, newest first.
    async fn list_updates(&self, card_id: &CardId) -> Result<Vec<CardUpdate>, DomainError>;

    /// Delete a card and its owned records.
    ///
    /// # Errors
    ///
    /// - `CardNotFound` if the card doesn't exist
    /// - `DatabaseError` on persistence failure
    async fn delete(&self, id: &CardId) -> Result<(), DomainError>;
}
