//! HTTP DTOs for purchase endpoints.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::application::AcquisitionEntry;
use crate::domain::purchase::Purchase;

use super::super::card::CardResponse;

/// A purchase record as returned by the API.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PurchaseResponse {
    pub id: String,
    pub user_id: String,
    pub card_id: String,
    pub price_cents: i64,
    pub created_at: DateTime<Utc>,
}

impl From<&Purchase> for PurchaseResponse {
    fn from(purchase: &Purchase) -> Self {
        Self {
            id: purchase.id().to_string(),
            user_id: purchase.user_id().to_string(),
            card_id: purchase.card_id().to_string(),
            price_cents: purchase.price_cents(),
            created_at: *purchase.created_at().as_datetime(),
        }
    }
}

/// Acquisition result. `alreadyOwned` is true when the call was a repeat.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AcquireCardResponse {
    pub purchase: PurchaseResponse,
    pub already_owned: bool,
}

/// One entry in the caller's library.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LibraryEntryResponse {
    pub purchase: PurchaseResponse,
    /// Absent when the seller deleted the card after the acquisition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub card: Option<CardResponse>,
}

impl From<&AcquisitionEntry> for LibraryEntryResponse {
    fn from(entry: &AcquisitionEntry) -> Self {
        Self {
            purchase: PurchaseResponse::from(&entry.purchase),
            card: entry.card.as_ref().map(CardResponse::from),
        }
    }
}
