//! AcquireCardHandler - Command handler for acquiring cards.

use std::sync::Arc;

use crate::domain::foundation::{CardId, CommandMetadata};
use crate::domain::purchase::{Purchase, PurchaseError};
use crate::ports::{CardRepository, PurchaseRepository};

/// Command to acquire a card.
#[derive(Debug, Clone)]
pub struct AcquireCardCommand {
    pub card_id: CardId,
}

/// Result of acquisition.
#[derive(Debug, Clone)]
pub struct AcquireCardResult {
    pub purchase: Purchase,
    /// True when the caller already owned the card and the existing record
    /// was returned instead of a new one.
    pub already_owned: bool,
}

/// Handler for acquiring cards.
///
/// Acquisition is free and idempotent: acquiring a card the caller already
/// owns succeeds and returns the original purchase record.
pub struct AcquireCardHandler {
    cards: Arc<dyn CardRepository>,
    purchases: Arc<dyn PurchaseRepository>,
}

impl AcquireCardHandler {
    pub fn new(cards: Arc<dyn CardRepository>, purchases: Arc<dyn PurchaseRepository>) -> Self {
        Self { cards, purchases }
    }

    pub async fn handle(
        &self,
        cmd: AcquireCardCommand,
        metadata: CommandMetadata,
    ) -> Result<AcquireCardResult, PurchaseError> {
        let user_id = &metadata.identity.user_id;

        if self.cards.find_by_id(&cmd.card_id).await?.is_none() {
            return Err(PurchaseError::CardNotFound(cmd.card_id));
        }

        if let Some(existing) = self
            .purchases
            .find_by_user_and_card(user_id, &cmd.card_id)
            .await?
        {
            return Ok(AcquireCardResult {
                purchase: existing,
                already_owned: true,
            });
        }

        let purchase = Purchase::free(user_id.clone(), cmd.card_id);
        self.purchases.save(&purchase).await?;

        tracing::info!(
            purchase_id = %purchase.id(),
            card_id = %cmd.card_id,
            "card acquired"
        );

        Ok(AcquireCardResult {
            purchase,
            already_owned: false,
        })
    }
}
