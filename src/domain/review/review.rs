//! Review aggregate - a buyer's rating of an acquired card.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{CardId, ReviewId, Timestamp, UserId, ValidationError};

use super::Rating;

/// A buyer's review of a card they acquired.
///
/// Invariant enforced by the submit handler: the reviewer holds a purchase
/// of the card, and reviews at most once per card.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Review {
    id: ReviewId,
    card_id: CardId,
    user_id: UserId,
    rating: Rating,
    title: Option<String>,
    content: String,
    created_at: Timestamp,
}

impl Review {
    /// Creates a new review, validating the body is non-empty.
    pub fn new(
        card_id: CardId,
        user_id: UserId,
        rating: Rating,
        title: Option<String>,
        content: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let content = content.into();
        if content.trim().is_empty() {
            return Err(ValidationError::empty_field("content"));
        }

        Ok(Self {
            id: ReviewId::new(),
            card_id,
            user_id,
            rating,
            title: title.filter(|t| !t.trim().is_empty()),
            content,
            created_at: Timestamp::now(),
        })
    }

    /// Reconstitutes a review from persistence.
    pub fn reconstitute(
        id: ReviewId,
        card_id: CardId,
        user_id: UserId,
        rating: Rating,
        title: Option<String>,
        content: String,
        created_at: Timestamp,
    ) -> Self {
        Self {
            id,
            card_id,
            user_id,
            rating,
            title,
            content,
            created_at,
        }
    }

    /// Returns the review ID.
    pub fn id(&self) -> ReviewId {
        self.id
    }

    /// Returns the reviewed card's ID.
    pub fn card_id(&self) -> CardId {
        self.card_id
    }

    /// Returns the reviewer's user ID.
    pub fn user_id(&self) -> &UserId {
        &self.user_id
    }

    /// Returns the star rating.
    pub fn rating(&self) -> Rating {
        self.rating
    }

    /// Returns the optional title.
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// Returns the review body.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Returns when the review was submitted.
    pub fn created_at(&self) -> Timestamp {
        self.created_at
    }
}
