//! HTTP DTOs for card endpoints.
//!
//! Wire field names are camelCase; enum values travel as their
//! SCREAMING_SNAKE wire strings and are parsed in the handlers.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::application::CardDetail;
use crate::domain::card::{Card, CardUpdate};

use super::super::review::ReviewResponse;

// ════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Body for creating or replacing a card. All fields are replaced on update.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardPayloadRequest {
    pub title: String,
    pub summary: String,
    pub markdown_content: String,
    pub category: String,
    #[serde(rename = "type")]
    pub card_type: String,
    pub license_type: String,
    #[serde(default = "default_status")]
    pub status: String,
}

fn default_status() -> String {
    "DRAFT".to_string()
}

/// Query parameters for card listings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BrowseCardsParams {
    /// When true, list the caller's own cards, drafts included.
    #[serde(default)]
    pub mine: bool,
    pub category: Option<String>,
    #[serde(rename = "type")]
    pub card_type: Option<String>,
}

// ════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════

/// A card as returned by the API.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CardResponse {
    pub id: String,
    pub seller_id: String,
    pub title: String,
    pub summary: String,
    pub markdown_content: String,
    pub category: String,
    #[serde(rename = "type")]
    pub card_type: String,
    pub license_type: String,
    pub status: String,
    pub version: u32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<&Card> for CardResponse {
    fn from(card: &Card) -> Self {
        Self {
            id: card.id().to_string(),
            seller_id: card.seller_id().to_string(),
            title: card.title().to_string(),
            summary: card.summary().to_string(),
            markdown_content: card.raw_content().to_string(),
            category: card.category().to_string(),
            card_type: card.card_type().as_str().to_string(),
            license_type: card.license().as_str().to_string(),
            status: card.status().as_str().to_string(),
            version: card.version().as_u32(),
            created_at: *card.created_at().as_datetime(),
            updated_at: *card.updated_at().as_datetime(),
        }
    }
}

/// One entry in a card's update log.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CardUpdateResponse {
    pub id: String,
    pub version: u32,
    pub title: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

impl From<&CardUpdate> for CardUpdateResponse {
    fn from(update: &CardUpdate) -> Self {
        Self {
            id: update.id().to_string(),
            version: update.version().as_u32(),
            title: update.title().to_string(),
            content: update.content().to_string(),
            created_at: *update.created_at().as_datetime(),
        }
    }
}

/// The card detail view.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CardDetailResponse {
    #[serde(flatten)]
    pub card: CardResponse,
    pub table_of_contents: Vec<String>,
    pub updates: Vec<CardUpdateResponse>,
    pub reviews: Vec<ReviewResponse>,
    pub average_rating: Option<f64>,
    pub verified_certifications: u32,
    pub owned: bool,
}

impl From<CardDetail> for CardDetailResponse {
    fn from(detail: CardDetail) -> Self {
        Self {
            card: CardResponse::from(&detail.card),
            table_of_contents: detail.table_of_contents,
            updates: detail.updates.iter().map(CardUpdateResponse::from).collect(),
            reviews: detail.reviews.iter().map(ReviewResponse::from).collect(),
            average_rating: detail.average_rating,
            verified_certifications: detail.verified_certifications,
            owned: detail.owned,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn card_payload_deserializes_from_camel_case() {
        let json = r##"{
            "title": "Pricing Playbook",
            "summary": "How we price",
            "markdownContent": "# Problem Definition",
            "category": "pricing",
            "type": "PLAYBOOK",
            "licenseType": "TEAM",
            "status": "PUBLISHED"
        }"##;
        let req: CardPayloadRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.card_type, "PLAYBOOK");
        assert_eq!(req.license_type, "TEAM");
        assert_eq!(req.status, "PUBLISHED");
    }

    #[test]
    fn card_payload_status_defaults_to_draft() {
        let json = r#"{
            "title": "t", "summary": "s", "markdownContent": "c",
            "category": "misc", "type": "GUIDE", "licenseType": "PERSONAL"
        }"#;
        let req: CardPayloadRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.status, "DRAFT");
    }

    #[test]
    fn browse_params_parse_type_alias() {
        let json = r#"{"mine": true, "type": "GUIDE", "category": "pricing"}"#;
        let params: BrowseCardsParams = serde_json::from_str(json).unwrap();
        assert!(params.mine);
        assert_eq!(params.card_type.as_deref(), Some("GUIDE"));
    }
}
