//! DeleteCardHandler - Command handler for deleting cards.

use std::sync::Arc;

use crate::domain::card::CardError;
use crate::domain::foundation::{CardId, CommandMetadata, OwnedByUser};
use crate::ports::CardRepository;

/// Command to delete a card.
#[derive(Debug, Clone)]
pub struct DeleteCardCommand {
    pub card_id: CardId,
}

/// Result of a successful deletion.
#[derive(Debug, Clone)]
pub struct DeleteCardResult {
    pub card_id: CardId,
}

/// Handler for deleting cards. Removes the card and its update log.
pub struct DeleteCardHandler {
    repository: Arc<dyn CardRepository>,
}

impl DeleteCardHandler {
    pub fn new(repository: Arc<dyn CardRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(
        &self,
        cmd: DeleteCardCommand,
        metadata: CommandMetadata,
    ) -> Result<DeleteCardResult, CardError> {
        metadata.identity.require_seller()?;

        let card = self
            .repository
            .find_by_id(&cmd.card_id)
            .await?
            .ok_or(CardError::NotFound(cmd.card_id))?;

        if !card.is_owner(&metadata.identity.user_id) {
            return Err(CardError::NotFound(cmd.card_id));
        }

        self.repository.delete(&cmd.card_id).await?;

        tracing::info!(card_id = %cmd.card_id, "card deleted");

        Ok(DeleteCardResult {
            card_id: cmd.card_id,
        })
    }
}
