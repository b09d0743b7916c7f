//! Update-log entries for published cards.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{CardId, CardUpdateId, Timestamp};

use super::CardVersion;

/// Immutable record of one published content change.
///
/// Created only as a side effect of a version increment; owned by the card;
/// append-only. Entries are never mutated or deleted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardUpdate {
    id: CardUpdateId,
    card_id: CardId,
    version: CardVersion,
    title: String,
    content: String,
    created_at: Timestamp,
}

impl CardUpdate {
    /// Creates the entry for a version increment.
    pub fn for_version(card_id: CardId, version: CardVersion) -> Self {
        Self {
            id: CardUpdateId::new(),
            card_id,
            version,
            title: format!("Version {} Update", version.as_u32()),
            content: "Card content has been updated".to_string(),
            created_at: Timestamp::now(),
        }
    }

    /// Reconstitutes an entry from persistence.
    pub fn reconstitute(
        id: CardUpdateId,
        card_id: CardId,
        version: CardVersion,
        title: String,
        content: String,
        created_at: Timestamp,
    ) -> Self {
        Self {
            id,
            card_id,
            version,
            title,
            content,
            created_at,
        }
    }

    /// Returns the entry ID.
    pub fn id(&self) -> CardUpdateId {
        self.id
    }

    /// Returns the card this entry belongs to.
    pub fn card_id(&self) -> CardId {
        self.card_id
    }

    /// Returns the version this entry was stamped with.
    pub fn version(&self) -> CardVersion {
        self.version
    }

    /// Returns the generated title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the generated body.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Returns when the entry was created.
    pub fn created_at(&self) -> Timestamp {
        self.created_at
    }
}
