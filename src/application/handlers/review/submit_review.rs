//! SubmitReviewHandler - Command handler for reviewing acquired cards.

use std::sync::Arc;

use crate::domain::foundation::{CardId, CommandMetadata};
use crate::domain::review::{Rating, Review, ReviewError};
use crate::ports::{CardRepository, PurchaseRepository, ReviewRepository};

/// Command to review a card.
#[derive(Debug, Clone)]
pub struct SubmitReviewCommand {
    pub card_id: CardId,
    pub rating: u8,
    pub title: Option<String>,
    pub content: String,
}

/// Result of a successful review submission.
#[derive(Debug, Clone)]
pub struct SubmitReviewResult {
    pub review: Review,
}

/// Handler for submitting reviews.
///
/// A review requires a purchase of the card and is accepted at most once
/// per user and card.
pub struct SubmitReviewHandler {
    cards: Arc<dyn CardRepository>,
    purchases: Arc<dyn PurchaseRepository>,
    reviews: Arc<dyn ReviewRepository>,
}

impl SubmitReviewHandler {
    pub fn new(
        cards: Arc<dyn CardRepository>,
        purchases: Arc<dyn PurchaseRepository>,
        reviews: Arc<dyn ReviewRepository>,
    ) -> Self {
        Self {
            cards,
            purchases,
            reviews,
        }
    }

    pub async fn handle(
        &self,
        cmd: SubmitReviewCommand,
        metadata: CommandMetadata,
    ) -> Result<SubmitReviewResult, ReviewError> {
        let user_id = &metadata.identity.user_id;

        if self.cards.find_by_id(&cmd.card_id).await?.is_none() {
            return Err(ReviewError::CardNotFound(cmd.card_id));
        }

        // Purchase gate
        if self
            .purchases
            .find_by_user_and_card(user_id, &cmd.card_id)
            .await?
            .is_none()
        {
            return Err(ReviewError::NotPurchased);
        }

        // One review per user and card
        if self
            .reviews
            .find_by_user_and_card(user_id, &cmd.card_id)
            .await?
            .is_some()
        {
            return Err(ReviewError::AlreadyReviewed);
        }

        let rating = Rating::try_from_u8(cmd.rating)?;
        let review = Review::new(cmd.card_id, user_id.clone(), rating, cmd.title, cmd.content)?;

        self.reviews.save(&review).await?;

        tracing::info!(
            review_id = %review.id(),
            card_id = %cmd.card_id,
            rating = review.rating().value(),
            "review submitted"
        );

        Ok(SubmitReviewResult { review })
    }
}
