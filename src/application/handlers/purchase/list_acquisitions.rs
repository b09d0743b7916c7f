//! ListAcquisitionsHandler - Query handler for the caller's library.

use std::sync::Arc;

use crate::domain::card::Card;
use crate::domain::foundation::CommandMetadata;
use crate::domain::purchase::{Purchase, PurchaseError};
use crate::ports::{CardRepository, PurchaseRepository};

/// Query for the caller's acquired cards.
#[derive(Debug, Clone)]
pub struct ListAcquisitionsQuery;

/// One library entry: the purchase plus the card, if it still exists.
#[derive(Debug, Clone)]
pub struct AcquisitionEntry {
    pub purchase: Purchase,
    /// None when the seller deleted the card after the acquisition.
    pub card: Option<Card>,
}

/// Result of the library query, newest acquisition first.
#[derive(Debug, Clone)]
pub struct ListAcquisitionsResult {
    pub entries: Vec<AcquisitionEntry>,
}

/// Handler for listing the caller's acquisitions.
pub struct ListAcquisitionsHandler {
    cards: Arc<dyn CardRepository>,
    purchases: Arc<dyn PurchaseRepository>,
}

impl ListAcquisitionsHandler {
    pub fn new(cards: Arc<dyn CardRepository>, purchases: Arc<dyn PurchaseRepository>) -> Self {
        Self { cards, purchases }
    }

    pub async fn handle(
        &self,
        _query: ListAcquisitionsQuery,
        metadata: CommandMetadata,
    ) -> Result<ListAcquisitionsResult, PurchaseError> {
        let purchases = self
            .purchases
            .find_by_user(&metadata.identity.user_id)
            .await?;

        let mut entries = Vec::with_capacity(purchases.len());
        for purchase in purchases {
            let card = self.cards.find_by_id(&purchase.card_id()).await?;
            entries.push(AcquisitionEntry { purchase, card });
        }

        Ok(ListAcquisitionsResult { entries })
    }
}
