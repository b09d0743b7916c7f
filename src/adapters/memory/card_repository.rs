//! In-memory implementation of CardRepository.
//!
//! Deterministic storage for tests and local development. Provides the same
//! per-card serialization guarantee as the PostgreSQL adapter: the
//! conditional update applies only when the stored version matches the one
//! the caller observed.
//!
//! # Panics
//!
//! Methods may panic if internal locks are poisoned. This is acceptable for
//! test/dev code; production deployments use the PostgreSQL adapter.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;

use crate::domain::card::{Card, CardUpdate, CardVersion};
use crate::domain::foundation::{CardId, DomainError, ErrorCode, UserId};
use crate::ports::{CardRepository, CatalogFilter};

/// In-memory card store.
#[derive(Default)]
pub struct InMemoryCardRepository {
    state: Mutex<State>,
}

#[derive(Default)]
struct State {
    cards: HashMap<CardId, Card>,
    updates: Vec<CardUpdate>,
}

impl InMemoryCardRepository {
    /// Creates an empty repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of stored cards (for test assertions).
    pub fn card_count(&self) -> usize {
        self.state.lock().expect("card store lock poisoned").cards.len()
    }

    /// Returns the number of stored update-log entries (for test assertions).
    pub fn update_count(&self) -> usize {
        self.state
            .lock()
            .expect("card store lock poisoned")
            .updates
            .len()
    }
}

#[async_trait]
impl CardRepository for InMemoryCardRepository {
    async fn save(&self, card: &Card) -> Result<(), DomainError> {
        let mut state = self.state.lock().expect("card store lock poisoned");
        state.cards.insert(card.id(), card.clone());
        Ok(())
    }

    async fn update(
        &self,
        card: &Card,
        expected_version: CardVersion,
        update_entry: Option<&CardUpdate>,
    ) -> Result<(), DomainError> {
        let mut state = self.state.lock().expect("card store lock poisoned");

        let stored = state.cards.get(&card.id()).ok_or_else(|| {
            DomainError::new(ErrorCode::CardNotFound, format!("Card not found: {}", card.id()))
        })?;

        if stored.version() != expected_version {
            return Err(DomainError::new(
                ErrorCode::ConcurrencyConflict,
                format!(
                    "Card {} was modified concurrently: expected {}, found {}",
                    card.id(),
                    expected_version,
                    stored.version()
                ),
            ));
        }

        state.cards.insert(card.id(), card.clone());
        if let Some(entry) = update_entry {
            state.updates.push(entry.clone());
        }
        Ok(())
    }

    async fn find_by_id(&self, id: &CardId) -> Result<Option<Card>, DomainError> {
        let state = self.state.lock().expect("card store lock poisoned");
        Ok(state.cards.get(id).cloned())
    }

    async fn find_by_seller(&self, seller_id: &UserId) -> Result<Vec<Card>, DomainError> {
        let state = self.state.lock().expect("card store lock poisoned");
        let mut cards: Vec<Card> = state
            .cards
            .values()
            .filter(|card| card.seller_id() == seller_id)
            .cloned()
            .collect();
        cards.sort_by(|a, b| b.created_at().cmp(&a.created_at()));
        Ok(cards)
    }

    async fn find_published(&self, filter: &CatalogFilter) -> Result<Vec<Card>, DomainError> {
        let state = self.state.lock().expect("card store lock poisoned");
        let mut cards: Vec<Card> = state
            .cards
            .values()
            .filter(|card| card.is_published())
            .filter(|card| {
                filter
                    .category
                    .as_deref()
                    .map_or(true, |category| card.category() == category)
            })
            .filter(|card| {
                filter
                    .card_type
                    .map_or(true, |card_type| card.card_type() == card_type)
            })
            .cloned()
            .collect();
        cards.sort_by(|a, b| b.created_at().cmp(&a.created_at()));
        Ok(cards)
    }

    async fn list_updates(&self, card_id: &CardId) -> Result<Vec<CardUpdate>, DomainError> {
        let state = self.state.lock().expect("card store lock poisoned");
        let mut entries: Vec<CardUpdate> = state
            .updates
            .iter()
            .filter(|entry| entry.card_id() == *card_id)
            .cloned()
            .collect();
        entries.sort_by(|a, b| b.version().cmp(&a.version()));
        Ok(entries)
    }

    async fn delete(&self, id: &CardId) -> Result<(), DomainError> {
        let mut state = self.state.lock().expect("card store lock poisoned");
        if state.cards.remove(id).is_none() {
            return Err(DomainError::new(
                ErrorCode::CardNotFound,
                format!("Card not found: {}", id),
            ));
        }
        state.updates.retain(|entry| entry.card_id() != *id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::card::{CardEdit, CardStatus, CardType, LicenseType, NewCard};

    const COMPLETE: &str = "# Problem Definition\nX\n# Target Audience\nY\n# Solution Overview\nZ\n# Contents\nW\n# Usage Notes & Limitations\nV";

    fn new_card(seller: &str, category: &str, status: CardStatus) -> Card {
        Card::new(
            UserId::new(seller).unwrap(),
            NewCard {
                title: "Title".to_string(),
                summary: "Summary".to_string(),
                content: COMPLETE.to_string(),
                category: category.to_string(),
                card_type: CardType::Guide,
                license: LicenseType::Personal,
                status,
            },
        )
        .unwrap()
    }

    fn edit_of(card: &Card, content: &str, status: CardStatus) -> CardEdit {
        CardEdit {
            title: card.title().to_string(),
            summary: card.summary().to_string(),
            content: content.to_string(),
            category: card.category().to_string(),
            card_type: card.card_type(),
            license: card.license(),
            status,
        }
    }

    #[tokio::test]
    async fn save_and_find_round_trip() {
        let repo = InMemoryCardRepository::new();
        let card = new_card("seller-1", "pricing", CardStatus::Draft);

        repo.save(&card).await.unwrap();

        let found = repo.find_by_id(&card.id()).await.unwrap().unwrap();
        assert_eq!(found.id(), card.id());
        assert_eq!(found.raw_content(), card.raw_content());
    }

    #[tokio::test]
    async fn conditional_update_applies_fields_and_log_entry() {
        let repo = InMemoryCardRepository::new();
        let mut card = new_card("seller-1", "pricing", CardStatus::Draft);
        repo.save(&card).await.unwrap();

        let outcome = card
            .apply_edit(edit_of(&card, &format!("{}\nmore", COMPLETE), CardStatus::Published))
            .unwrap();
        repo.update(&card, outcome.previous_version, outcome.update_entry.as_ref())
            .await
            .unwrap();

        let stored = repo.find_by_id(&card.id()).await.unwrap().unwrap();
        assert_eq!(stored.version().as_u32(), 2);
        assert_eq!(repo.list_updates(&card.id()).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn stale_version_is_rejected_without_mutation() {
        let repo = InMemoryCardRepository::new();
        let stored = new_card("seller-1", "pricing", CardStatus::Draft);
        repo.save(&stored).await.unwrap();

        // Two writers load the same card; the first one wins.
        let mut first = stored.clone();
        let mut second = stored.clone();

        let outcome = first
            .apply_edit(edit_of(&first, &format!("{}\nA", COMPLETE), CardStatus::Published))
            .unwrap();
        repo.update(&first, outcome.previous_version, outcome.update_entry.as_ref())
            .await
            .unwrap();

        let outcome = second
            .apply_edit(edit_of(&second, &format!("{}\nB", COMPLETE), CardStatus::Published))
            .unwrap();
        let err = repo
            .update(&second, outcome.previous_version, outcome.update_entry.as_ref())
            .await
            .unwrap_err();

        assert_eq!(err.code, ErrorCode::ConcurrencyConflict);
        let kept = repo.find_by_id(&stored.id()).await.unwrap().unwrap();
        assert!(kept.raw_content().ends_with("A"));
        assert_eq!(repo.update_count(), 1);
    }

    #[tokio::test]
    async fn catalog_filters_by_status_category_and_type() {
        let repo = InMemoryCardRepository::new();
        repo.save(&new_card("s1", "pricing", CardStatus::Published))
            .await
            .unwrap();
        repo.save(&new_card("s1", "hiring", CardStatus::Published))
            .await
            .unwrap();
        repo.save(&new_card("s1", "pricing", CardStatus::Draft))
            .await
            .unwrap();

        let all = repo.find_published(&CatalogFilter::default()).await.unwrap();
        assert_eq!(all.len(), 2);

        let pricing = repo
            .find_published(&CatalogFilter {
                category: Some("pricing".to_string()),
                card_type: None,
            })
            .await
            .unwrap();
        assert_eq!(pricing.len(), 1);

        let templates = repo
            .find_published(&CatalogFilter {
                category: None,
                card_type: Some(CardType::Template),
            })
            .await
            .unwrap();
        assert!(templates.is_empty());
    }

    #[tokio::test]
    async fn delete_removes_card_and_its_log() {
        let repo = InMemoryCardRepository::new();
        let mut card = new_card("seller-1", "pricing", CardStatus::Draft);
        repo.save(&card).await.unwrap();

        let outcome = card
            .apply_edit(edit_of(&card, &format!("{}\nX2", COMPLETE), CardStatus::Published))
            .unwrap();
        repo.update(&card, outcome.previous_version, outcome.update_entry.as_ref())
            .await
            .unwrap();

        repo.delete(&card.id()).await.unwrap();
        assert!(repo.find_by_id(&card.id()).await.unwrap().is_none());
        assert_eq!(repo.update_count(), 0);

        let err = repo.delete(&card.id()).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::CardNotFound);
    }
}
