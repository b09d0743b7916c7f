//! UpdateCardHandler - Command handler for editing cards.

use std::sync::Arc;

use crate::domain::card::{Card, CardEdit, CardError, EditOutcome};
use crate::domain::foundation::{CardId, CommandMetadata, OwnedByUser};
use crate::ports::CardRepository;

/// Command to edit a card. All fields are replaced.
#[derive(Debug, Clone)]
pub struct UpdateCardCommand {
    pub card_id: CardId,
    pub edit: CardEdit,
}

/// Result of a successful edit.
#[derive(Debug, Clone)]
pub struct UpdateCardResult {
    pub card: Card,
    pub outcome: EditOutcome,
}

/// Handler for editing cards.
///
/// The edit runs through the publication gate in memory, then the repository
/// applies it with a conditional write keyed on the version observed at
/// load. Two concurrent writers can both pass the gate, but only one
/// conditional write lands; the loser gets a conflict and retries from the
/// fresh state.
pub struct UpdateCardHandler {
    repository: Arc<dyn CardRepository>,
}

impl UpdateCardHandler {
    pub fn new(repository: Arc<dyn CardRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(
        &self,
        cmd: UpdateCardCommand,
        metadata: CommandMetadata,
    ) -> Result<UpdateCardResult, CardError> {
        // 1. Authorize - only approved sellers edit cards
        metadata.identity.require_seller()?;

        // 2. Load
        let mut card = self
            .repository
            .find_by_id(&cmd.card_id)
            .await?
            .ok_or(CardError::NotFound(cmd.card_id))?;

        // 3. Ownership: non-owners cannot learn the card exists
        if !card.is_owner(&metadata.identity.user_id) {
            return Err(CardError::NotFound(cmd.card_id));
        }

        // 4. Gate + mutate in memory
        let outcome = card.apply_edit(cmd.edit)?;

        // 5. Conditional persist, log entry in the same write
        self.repository
            .update(&card, outcome.previous_version, outcome.update_entry.as_ref())
            .await?;

        tracing::info!(
            card_id = %card.id(),
            version = card.version().as_u32(),
            content_changed = outcome.content_changed,
            version_incremented = outcome.version_incremented(),
            "card updated"
        );

        Ok(UpdateCardResult { card, outcome })
    }
}
