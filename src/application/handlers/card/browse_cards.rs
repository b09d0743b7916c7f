//! BrowseCardsHandler - Query handler for card listings.

use std::sync::Arc;

use crate::domain::card::{Card, CardError};
use crate::domain::foundation::CommandMetadata;
use crate::ports::{CardRepository, CatalogFilter};

/// Which listing to return.
#[derive(Debug, Clone)]
pub enum BrowseScope {
    /// Published cards, optionally filtered. The public catalog.
    Catalog(CatalogFilter),
    /// All of the caller's own cards, drafts included. The seller dashboard.
    Mine,
}

/// Query for a card listing.
#[derive(Debug, Clone)]
pub struct BrowseCardsQuery {
    pub scope: BrowseScope,
}

/// Result of a listing query, newest first.
#[derive(Debug, Clone)]
pub struct BrowseCardsResult {
    pub cards: Vec<Card>,
}

/// Handler for card listings.
pub struct BrowseCardsHandler {
    repository: Arc<dyn CardRepository>,
}

impl BrowseCardsHandler {
    pub fn new(repository: Arc<dyn CardRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(
        &self,
        query: BrowseCardsQuery,
        metadata: CommandMetadata,
    ) -> Result<BrowseCardsResult, CardError> {
        let cards = match query.scope {
            BrowseScope::Catalog(filter) => self.repository.find_published(&filter).await?,
            BrowseScope::Mine => {
                metadata.identity.require_seller()?;
                self.repository
                    .find_by_seller(&metadata.identity.user_id)
                    .await?
            }
        };

        Ok(BrowseCardsResult { cards })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryCardRepository;
    use crate::domain::card::{CardStatus, CardType, LicenseType, NewCard};
    use crate::domain::foundation::{Identity, UserId, UserRole};

    fn metadata_for(user: &str, role: UserRole, approved: bool) -> CommandMetadata {
        CommandMetadata::new(Identity::new(UserId::new(user).unwrap(), role, approved))
    }

    const COMPLETE: &str = "# Problem Definition\nA\n# Target Audience\nB\n# Solution Overview\nC\n# Contents\nD\n# Usage Notes & Limitations\nE";

    async fn seed(repo: &InMemoryCardRepository, seller: &str, category: &str, status: CardStatus) {
        let card = Card::new(
            UserId::new(seller).unwrap(),
            NewCard {
                title: format!("{} card", category),
                summary: "Summary".to_string(),
                content: COMPLETE.to_string(),
                category: category.to_string(),
                card_type: CardType::Guide,
                license: LicenseType::Personal,
                status,
            },
        )
        .unwrap();
        repo.save(&card).await.unwrap();
    }

    #[tokio::test]
    async fn catalog_lists_only_published_cards() {
        let repo = Arc::new(InMemoryCardRepository::new());
        seed(&repo, "s1", "pricing", CardStatus::Published).await;
        seed(&repo, "s1", "pricing", CardStatus::Draft).await;
        seed(&repo, "s2", "hiring", CardStatus::Published).await;

        let handler = BrowseCardsHandler::new(repo);
        let result = handler
            .handle(
                BrowseCardsQuery {
                    scope: BrowseScope::Catalog(CatalogFilter::default()),
                },
                metadata_for("anyone", UserRole::Buyer, false),
            )
            .await
            .unwrap();

        assert_eq!(result.cards.len(), 2);
        assert!(result.cards.iter().all(Card::is_published));
    }

    #[tokio::test]
    async fn catalog_applies_category_filter() {
        let repo = Arc::new(InMemoryCardRepository::new());
        seed(&repo, "s1", "pricing", CardStatus::Published).await;
        seed(&repo, "s2", "hiring", CardStatus::Published).await;

        let handler = BrowseCardsHandler::new(repo);
        let result = handler
            .handle(
                BrowseCardsQuery {
                    scope: BrowseScope::Catalog(CatalogFilter {
                        category: Some("hiring".to_string()),
                        card_type: None,
                    }),
                },
                metadata_for("anyone", UserRole::Buyer, false),
            )
            .await
            .unwrap();

        assert_eq!(result.cards.len(), 1);
        assert_eq!(result.cards[0].category(), "hiring");
    }

    #[tokio::test]
    async fn mine_lists_own_cards_including_drafts() {
        let repo = Arc::new(InMemoryCardRepository::new());
        seed(&repo, "s1", "pricing", CardStatus::Published).await;
        seed(&repo, "s1", "hiring", CardStatus::Draft).await;
        seed(&repo, "s2", "hiring", CardStatus::Published).await;

        let handler = BrowseCardsHandler::new(repo);
        let result = handler
            .handle(
                BrowseCardsQuery {
                    scope: BrowseScope::Mine,
                },
                metadata_for("s1", UserRole::Seller, true),
            )
            .await
            .unwrap();

        assert_eq!(result.cards.len(), 2);
    }

    #[tokio::test]
    async fn mine_requires_approved_seller() {
        let repo = Arc::new(InMemoryCardRepository::new());
        let handler = BrowseCardsHandler::new(repo);

        let result = handler
            .handle(
                BrowseCardsQuery {
                    scope: BrowseScope::Mine,
                },
                metadata_for("buyer", UserRole::Buyer, false),
            )
            .await;

        assert!(matches!(result, Err(CardError::Forbidden(_))));
    }
}
