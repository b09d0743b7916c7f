//! Certification repository port.

use async_trait::async_trait;

use crate::domain::certification::Certification;
use crate::domain::foundation::{CardId, CertificationId, DomainError, UserId};

/// Repository port for certification claims.
///
/// Implementations must enforce at most one claim per user and card.
#[async_trait]
pub trait CertificationRepository: Send + Sync {
    /// Save a new certification claim.
    ///
    /// # Errors
    ///
    /// - `DatabaseError` on persistence failure or duplicate user+card pair
    async fn save(&self, certification: &Certification) -> Result<(), DomainError>;

    /// Update an existing claim (verification flag).
    ///
    /// # Errors
    ///
    /// - `CertificationNotFound` if the claim doesn't exist
    /// - `DatabaseError` on persistence failure
    async fn update(&self, certification: &Certification) -> Result<(), DomainError>;

    /// Find a claim by its ID.
    async fn find_by_id(
        &self,
        id: &CertificationId,
    ) -> Result<Option<Certification>, DomainError>;

    /// Find a user's claim on a card, if any.
    async fn find_by_user_and_card(
        &self,
        user_id: &UserId,
        card_id: &CardId,
    ) -> Result<Option<Certification>, DomainError>;

    /// Find claims awaiting admin review, oldest first.
    async fn find_unverified(&self) -> Result<Vec<Certification>, DomainError>;

    /// Count verified claims for a card.
    async fn count_verified_for_card(&self, card_id: &CardId) -> Result<u32, DomainError>;

    /// Delete a claim (admin rejection).
    ///
    /// # Errors
    ///
    /// - `CertificationNotFound` if the claim doesn't exist
    /// - `DatabaseError` on persistence failure
    async fn delete(&self, id: &CertificationId) -> Result<(), DomainError>;
}
