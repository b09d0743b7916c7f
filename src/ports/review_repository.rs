//! Review repository port.

use async_trait::async_trait;

use crate::domain::foundation::{CardId, DomainError, UserId};
use crate::domain::review::Review;

/// Repository port for reviews.
///
/// Implementations must enforce at most one review per user and card.
#[async_trait]
pub trait ReviewRepository: Send + Sync {
    /// Save a new review.
    ///
    /// # Errors
    ///
    /// - `DatabaseError` on persistence failure or duplicate user+card pair
    async fn save(&self, review: &Review) -> Result<(), DomainError>;

    /// Find a user's review of a card, if any.
    async fn find_by_user_and_card(
        &self,
        user_id: &UserId,
        card_id: &CardId,
    ) -> Result<Option<Review>, DomainError>;

    /// Find all reviews of a card, newest first.
    async fn find_by_card(&self, card_id: &CardId) -> Result<Vec<Review>, DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    // Trait object safety test
    #[test]
    fn review_repository_is_object_safe() {
        fn _accepts_dyn(_repo: &dyn ReviewRepository) {}
    }
}
