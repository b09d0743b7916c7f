//! Purchase repository port.

use async_trait::async_trait;

use crate::domain::foundation::{CardId, DomainError, UserId};
use crate::domain::purchase::Purchase;

/// Repository port for purchase records.
///
/// Implementations must enforce at most one purchase per user and card.
#[async_trait]
pub trait PurchaseRepository: Send + Sync {
    /// Save a new purchase.
    ///
    /// # Errors
    ///
    /// - `DatabaseError` on persistence failure or duplicate user+card pair
    async fn save(&self, purchase: &Purchase) -> Result<(), DomainError>;

    /// Find a user's purchase of a card, if any.
    async fn find_by_user_and_card(
        &self,
        user_id: &UserId,
        card_id: &CardId,
    ) -> Result<Option<Purchase>, DomainError>;

    /// Find all of a user's purchases (their library), newest first.
    async fn find_by_user(&self, user_id: &UserId) -> Result<Vec<Purchase>, DomainError>;
}
