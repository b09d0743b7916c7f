//! CreateCardHandler - Command handler for creating cards.

use std::sync::Arc;

use crate::domain::card::{Card, CardError, NewCard};
use crate::domain::foundation::CommandMetadata;
use crate::ports::CardRepository;

/// Command to create a card.
#[derive(Debug, Clone)]
pub struct CreateCardCommand {
    pub card: NewCard,
}

/// Result of successful card creation.
#[derive(Debug, Clone)]
pub struct CreateCardResult {
    pub card: Card,
}

/// Handler for creating cards.
///
/// Creation never writes an update-log entry; the card starts at version 1
/// whether saved as draft or published. Publishing at creation still runs
/// the structural gate.
pub struct CreateCardHandler {
    repository: Arc<dyn CardRepository>,
}

impl CreateCardHandler {
    pub fn new(repository: Arc<dyn CardRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(
        &self,
        cmd: CreateCardCommand,
        metadata: CommandMetadata,
    ) -> Result<CreateCardResult, CardError> {
        // 1. Authorize - only approved sellers create cards
        metadata.identity.require_seller()?;

        // 2. Construct the aggregate (validates fields, gates publication)
        let card = Card::new(metadata.identity.user_id.clone(), cmd.card)?;

        // 3. Persist
        self.repository.save(&card).await?;

        tracing::info!(
            card_id = %card.id(),
            seller_id = %card.seller_id(),
            status = %card.status(),
            "card created"
        );

        Ok(CreateCardResult { card })
    }
}
