//! Card aggregate - a sellable markdown knowledge document.
//!
//! Lifecycle: created as draft or published (version 1, no update-log
//! entries either way), then edited through `apply_edit`, which routes every
//! write through the publication gate. A card is never observably published
//! while missing a mandatory section.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::foundation::{
    CardId, DomainError, ErrorCode, IdentityError, OwnedByUser, Timestamp, UserId,
    ValidationError,
};

use super::gate::{self, PriorState, PublicationError, WriteRequest};
use super::{CardContent, CardStatus, CardType, CardUpdate, CardVersion, LicenseType};

/// Errors raised by card operations, from construction through persistence.
#[derive(Debug, Clone, Error)]
pub enum CardError {
    /// A required field is empty or malformed.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The publication gate rejected the write.
    #[error(transparent)]
    Publication(#[from] PublicationError),

    /// No card with this ID is visible to the caller.
    #[error("Card not found: {0}")]
    NotFound(CardId),

    /// The caller's identity does not permit the operation.
    #[error("{0}")]
    Forbidden(String),

    /// Another write landed between load and store.
    #[error("{0}")]
    Conflict(String),

    /// The persistence layer failed.
    #[error(transparent)]
    Storage(DomainError),
}

impl From<DomainError> for CardError {
    fn from(err: DomainError) -> Self {
        match err.code {
            // A conditional update that misses its row means the card was
            // rewritten or deleted underneath the caller.
            ErrorCode::ConcurrencyConflict | ErrorCode::CardNotFound => {
                CardError::Conflict(err.message)
            }
            ErrorCode::Forbidden => CardError::Forbidden(err.message),
            _ => CardError::Storage(err),
        }
    }
}

impl From<IdentityError> for CardError {
    fn from(err: IdentityError) -> Self {
        CardError::Forbidden(err.to_string())
    }
}

/// Input for creating a card.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewCard {
    pub title: String,
    pub summary: String,
    pub content: String,
    pub category: String,
    pub card_type: CardType,
    pub license: LicenseType,
    pub status: CardStatus,
}

/// Input for editing a card. All fields are replaced on write.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CardEdit {
    pub title: String,
    pub summary: String,
    pub content: String,
    pub category: String,
    pub card_type: CardType,
    pub license: LicenseType,
    pub status: CardStatus,
}

/// Result of a successful edit, carrying what the persistence layer needs
/// for the atomic conditional write.
#[derive(Debug, Clone)]
pub struct EditOutcome {
    /// The version observed before the edit (the optimistic-lock token).
    pub previous_version: CardVersion,
    /// The version after the edit.
    pub version: CardVersion,
    /// Whether the content changed (exact comparison).
    pub content_changed: bool,
    /// The update-log entry to append in the same write, if the increment
    /// rule fired.
    pub update_entry: Option<CardUpdate>,
}

impl EditOutcome {
    /// Returns true if the edit incremented the version.
    pub fn version_incremented(&self) -> bool {
        self.version > self.previous_version
    }
}

/// The Card aggregate root.
#[derive(Debug, Clone)]
pub struct Card {
    id: CardId,
    seller_id: UserId,
    title: String,
    summary: String,
    content: CardContent,
    category: String,
    card_type: CardType,
    license: LicenseType,
    status: CardStatus,
    version: CardVersion,
    created_at: Timestamp,
    updated_at: Timestamp,
}

impl Card {
    // ════════════════════════════════════════════════════════════════════════════════
    // Construction
    // ════════════════════════════════════════════════════════════════════════════════

    /// Creates a new card for a seller.
    ///
    /// Starts at version 1 with no update-log entries, even when created
    /// directly as published; the gate still validates structure in that
    /// case.
    pub fn new(seller_id: UserId, draft: NewCard) -> Result<Self, CardError> {
        Self::validate_fields(&draft.title, &draft.summary, &draft.content, &draft.category)?;

        if draft.status == CardStatus::Published {
            let check = super::structure::validate_structure(&draft.content);
            if !check.valid {
                return Err(PublicationError::MissingSections {
                    missing_sections: check.missing_sections,
                }
                .into());
            }
        }

        let now = Timestamp::now();
        Ok(Self {
            id: CardId::new(),
            seller_id,
            title: draft.title,
            summary: draft.summary,
            content: CardContent::new(draft.content),
            category: draft.category,
            card_type: draft.card_type,
            license: draft.license,
            status: draft.status,
            version: CardVersion::initial(),
            created_at: now,
            updated_at: now,
        })
    }

    /// Reconstitutes a card from persistence.
    #[allow(clippy::too_many_arguments)]
    pub fn reconstitute(
        id: CardId,
        seller_id: UserId,
        title: String,
        summary: String,
        content: CardContent,
        category: String,
        card_type: CardType,
        license: LicenseType,
        status: CardStatus,
        version: CardVersion,
        created_at: Timestamp,
        updated_at: Timestamp,
    ) -> Self {
        Self {
            id,
            seller_id,
            title,
            summary,
            content,
            category,
            card_type,
            license,
            status,
            version,
            created_at,
            updated_at,
        }
    }

    fn validate_fields(
        title: &str,
        summary: &str,
        content: &str,
        category: &str,
    ) -> Result<(), ValidationError> {
        if title.trim().is_empty() {
            return Err(ValidationError::empty_field("title"));
        }
        if summary.trim().is_empty() {
            return Err(ValidationError::empty_field("summary"));
        }
        if content.is_empty() {
            return Err(ValidationError::empty_field("content"));
        }
        if category.trim().is_empty() {
            return Err(ValidationError::empty_field("category"));
        }
        Ok(())
    }

    // ════════════════════════════════════════════════════════════════════════════════
    // Accessors
    // ════════════════════════════════════════════════════════════════════════════════

    /// Returns the card ID.
    pub fn id(&self) -> CardId {
        self.id
    }

    /// Returns the selling user's ID.
    pub fn seller_id(&self) -> &UserId {
        &self.seller_id
    }

    /// Returns the title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the summary.
    pub fn summary(&self) -> &str {
        &self.summary
    }

    /// Returns the markdown content.
    pub fn content(&self) -> &CardContent {
        &self.content
    }

    /// Returns the raw markdown body.
    pub fn raw_content(&self) -> &str {
        self.content.raw()
    }

    /// Returns the category.
    pub fn category(&self) -> &str {
        &self.category
    }

    /// Returns the card type.
    pub fn card_type(&self) -> CardType {
        self.card_type
    }

    /// Returns the license granted on acquisition.
    pub fn license(&self) -> LicenseType {
        self.license
    }

    /// Returns the lifecycle status.
    pub fn status(&self) -> CardStatus {
        self.status
    }

    /// Returns true if the card is visible in the catalog.
    pub fn is_published(&self) -> bool {
        self.status == CardStatus::Published
    }

    /// Returns the current version.
    pub fn version(&self) -> CardVersion {
        self.version
    }

    /// Returns when the card was created.
    pub fn created_at(&self) -> Timestamp {
        self.created_at
    }

    /// Returns when the card was last updated.
    pub fn updated_at(&self) -> Timestamp {
        self.updated_at
    }

    // ════════════════════════════════════════════════════════════════════════════════
    // Mutations
    // ════════════════════════════════════════════════════════════════════════════════

    /// Applies an edit, routing it through the publication gate.
    ///
    /// On rejection nothing is mutated; the caller observes the card exactly
    /// as before. On success the returned outcome carries the previous
    /// version (for the conditional write) and the update-log entry to
    /// append, if any.
    pub fn apply_edit(&mut self, edit: CardEdit) -> Result<EditOutcome, CardError> {
        Self::validate_fields(&edit.title, &edit.summary, &edit.content, &edit.category)?;

        let outcome = gate::evaluate(
            WriteRequest {
                content: &edit.content,
                status: edit.status,
            },
            PriorState {
                content: self.content.raw(),
                version: self.version,
            },
        )?;

        let previous_version = self.version;

        self.title = edit.title;
        self.summary = edit.summary;
        self.content.update(edit.content);
        self.category = edit.category;
        self.card_type = edit.card_type;
        self.license = edit.license;
        self.status = edit.status;
        self.version = outcome.version;
        self.updated_at = Timestamp::now();

        let update_entry = outcome
            .log_entry_required
            .then(|| CardUpdate::for_version(self.id, self.version));

        Ok(EditOutcome {
            previous_version,
            version: self.version,
            content_changed: outcome.content_changed,
            update_entry,
        })
    }
}

impl OwnedByUser for Card {
    fn owner_id(&self) -> &UserId {
        &self.seller_id
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Tests
// ════════════════════════════════════════════════════════════════════════════════

#[cfg(test)]
mod tests {
    use super::*;

    const COMPLETE: &str = "# Problem Definition\nX\n# Target Audience\nY\n# Solution Overview\nZ\n# Contents\nW\n# Usage Notes & Limitations\nV";

    fn seller() -> UserId {
        UserId::new("seller-1").unwrap()
    }

    fn draft_card() -> Card {
        Card::new(
            seller(),
            NewCard {
                title: "Pricing Playbook".to_string(),
                summary: "How to price a SaaS product".to_string(),
                content: "# Rough notes".to_string(),
                category: "pricing".to_string(),
                card_type: CardType::Playbook,
                license: LicenseType::Personal,
                status: CardStatus::Draft,
            },
        )
        .unwrap()
    }

    fn edit(content: &str, status: CardStatus) -> CardEdit {
        CardEdit {
            title: "Pricing Playbook".to_string(),
            summary: "How to price a SaaS product".to_string(),
            content: content.to_string(),
            category: "pricing".to_string(),
            card_type: CardType::Playbook,
            license: LicenseType::Personal,
            status,
        }
    }

    // ───────────────────────────────────────────────────────────────
    // Creation Tests
    // ───────────────────────────────────────────────────────────────

    #[test]
    fn new_card_starts_as_version_one_draft() {
        let card = draft_card();
        assert_eq!(card.version(), CardVersion::initial());
        assert_eq!(card.status(), CardStatus::Draft);
        assert!(!card.is_published());
    }

    #[test]
    fn new_card_rejects_empty_required_fields() {
        let result = Card::new(
            seller(),
            NewCard {
                title: "  ".to_string(),
                summary: "s".to_string(),
                content: "c".to_string(),
                category: "cat".to_string(),
                card_type: CardType::Guide,
                license: LicenseType::Personal,
                status: CardStatus::Draft,
            },
        );
        assert!(matches!(result, Err(CardError::Validation(_))));
    }

    #[test]
    fn card_created_directly_as_published_is_gated() {
        let result = Card::new(
            seller(),
            NewCard {
                title: "t".to_string(),
                summary: "s".to_string(),
                content: "# Not enough".to_string(),
                category: "cat".to_string(),
                card_type: CardType::Guide,
                license: LicenseType::Personal,
                status: CardStatus::Published,
            },
        );
        assert!(matches!(result, Err(CardError::Publication(_))));
    }

    #[test]
    fn valid_card_can_be_created_published_at_version_one() {
        let card = Card::new(
            seller(),
            NewCard {
                title: "t".to_string(),
                summary: "s".to_string(),
                content: COMPLETE.to_string(),
                category: "cat".to_string(),
                card_type: CardType::Guide,
                license: LicenseType::Personal,
                status: CardStatus::Published,
            },
        )
        .unwrap();

        assert!(card.is_published());
        assert_eq!(card.version(), CardVersion::initial());
    }

    // ───────────────────────────────────────────────────────────────
    // Edit Tests
    // ───────────────────────────────────────────────────────────────

    #[test]
    fn publishing_changed_content_increments_and_logs() {
        let mut card = draft_card();

        let outcome = card.apply_edit(edit(COMPLETE, CardStatus::Published)).unwrap();

        assert_eq!(card.version().as_u32(), 2);
        assert!(card.is_published());
        assert!(outcome.version_incremented());
        let entry = outcome.update_entry.unwrap();
        assert_eq!(entry.version(), card.version());
        assert_eq!(entry.card_id(), card.id());
        assert_eq!(entry.title(), "Version 2 Update");
    }

    #[test]
    fn publishing_twice_with_identical_content_is_idempotent() {
        let mut card = draft_card();
        card.apply_edit(edit(COMPLETE, CardStatus::Published)).unwrap();
        let version_after_first = card.version();

        let outcome = card.apply_edit(edit(COMPLETE, CardStatus::Published)).unwrap();

        assert_eq!(card.version(), version_after_first);
        assert!(!outcome.version_incremented());
        assert!(outcome.update_entry.is_none());
    }

    #[test]
    fn draft_edit_changes_content_without_version_bump() {
        let mut card = draft_card();

        let outcome = card
            .apply_edit(edit("# Totally rewritten", CardStatus::Draft))
            .unwrap();

        assert_eq!(card.raw_content(), "# Totally rewritten");
        assert_eq!(card.version(), CardVersion::initial());
        assert!(outcome.content_changed);
        assert!(outcome.update_entry.is_none());
    }

    #[test]
    fn rejected_publish_leaves_card_untouched() {
        let mut card = draft_card();
        let content_before = card.raw_content().to_string();
        let version_before = card.version();
        let status_before = card.status();

        let result = card.apply_edit(edit("# Incomplete", CardStatus::Published));

        assert!(matches!(result, Err(CardError::Publication(_))));
        assert_eq!(card.raw_content(), content_before);
        assert_eq!(card.version(), version_before);
        assert_eq!(card.status(), status_before);
    }

    #[test]
    fn metadata_only_republish_keeps_version() {
        let mut card = draft_card();
        card.apply_edit(edit(COMPLETE, CardStatus::Published)).unwrap();

        let mut metadata_edit = edit(COMPLETE, CardStatus::Published);
        metadata_edit.title = "Renamed Playbook".to_string();
        metadata_edit.category = "sales".to_string();
        let outcome = card.apply_edit(metadata_edit).unwrap();

        assert_eq!(card.title(), "Renamed Playbook");
        assert_eq!(card.category(), "sales");
        assert_eq!(card.version().as_u32(), 2);
        assert!(outcome.update_entry.is_none());
    }

    #[test]
    fn outcome_carries_previous_version_for_conditional_write() {
        let mut card = draft_card();
        let outcome = card.apply_edit(edit(COMPLETE, CardStatus::Published)).unwrap();
        assert_eq!(outcome.previous_version, CardVersion::initial());
        assert_eq!(outcome.version, CardVersion::from_raw(2));
    }

    #[test]
    fn versions_are_non_decreasing_across_edit_sequences() {
        let mut card = draft_card();
        let mut last = card.version();

        let writes = [
            (COMPLETE, CardStatus::Draft),
            (COMPLETE, CardStatus::Published),
            (COMPLETE, CardStatus::Published),
            ("# back to draft", CardStatus::Draft),
            (COMPLETE, CardStatus::Published),
        ];

        for (content, status) in writes {
            if card.apply_edit(edit(content, status)).is_ok() {
                assert!(card.version() >= last);
                last = card.version();
            }
        }
        // The draft edit already stores the full content at v1, so the first
        // publish sees no content change. Only the final publish, whose
        // content differs from the draft detour, increments to v2.
        assert_eq!(card.version().as_u32(), 2);
    }

    // ───────────────────────────────────────────────────────────────
    // Ownership Tests
    // ───────────────────────────────────────────────────────────────

    #[test]
    fn seller_owns_their_card() {
        let card = draft_card();
        assert!(card.is_owner(&seller()));
        assert!(!card.is_owner(&UserId::new("someone-else").unwrap()));
    }
}
