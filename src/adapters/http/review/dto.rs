//! HTTP DTOs for review endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::review::Review;

/// Request to review an acquired card.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitReviewRequest {
    pub card_id: String,
    pub rating: u8,
    #[serde(default)]
    pub title: Option<String>,
    pub content: String,
}

/// A review as returned by the API.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewResponse {
    pub id: String,
    pub card_id: String,
    pub user_id: String,
    pub rating: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

impl From<&Review> for ReviewResponse {
    fn from(review: &Review) -> Self {
        Self {
            id: review.id().to_string(),
            card_id: review.card_id().to_string(),
            user_id: review.user_id().to_string(),
            rating: review.rating().value(),
            title: review.title().map(str::to_string),
            content: review.content().to_string(),
            created_at: *review.created_at().as_datetime(),
        }
    }
}
