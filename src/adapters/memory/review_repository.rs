//! In-memory implementation of ReviewRepository.

use async_trait::async_trait;
use std::sync::Mutex;

use crate::domain::foundation::{CardId, DomainError, ErrorCode, UserId};
use crate::domain::review::Review;
use crate::ports::ReviewRepository;

/// In-memory review store with the one-review-per-user-and-card constraint.
#[derive(Default)]
pub struct InMemoryReviewRepository {
    reviews: Mutex<Vec<Review>>,
}

impl InMemoryReviewRepository {
    /// Creates an empty repository.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ReviewRepository for InMemoryReviewRepository {
    async fn save(&self, review: &Review) -> Result<(), DomainError> {
        let mut reviews = self.reviews.lock().expect("review store lock poisoned");
        let duplicate = reviews
            .iter()
            .any(|r| r.user_id() == review.user_id() && r.card_id() == review.card_id());
        if duplicate {
            return Err(DomainError::new(
                ErrorCode::DatabaseError,
                "Duplicate review for user and card",
            ));
        }
        reviews.push(review.clone());
        Ok(())
    }

    async fn find_by_user_and_card(
        &self,
        user_id: &UserId,
        card_id: &CardId,
    ) -> Result<Option<Review>, DomainError> {
        let reviews = self.reviews.lock().expect("review store lock poisoned");
        Ok(reviews
            .iter()
            .find(|r| r.user_id() == user_id && r.card_id() == *card_id)
            .cloned())
    }

    async fn find_by_card(&self, card_id: &CardId) -> Result<Vec<Review>, DomainError> {
        let reviews = self.reviews.lock().expect("review store lock poisoned");
        let mut for_card: Vec<Review> = reviews
            .iter()
            .filter(|r| r.card_id() == *card_id)
            .cloned()
            .collect();
        for_card.sort_by(|a, b| b.created_at().cmp(&a.created_at()));
        Ok(for_card)
    }
}
