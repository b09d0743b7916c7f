//! GetCardHandler - Query handler for the card detail view.

use std::sync::Arc;

use crate::domain::card::{table_of_contents, Card, CardError, CardUpdate};
use crate::domain::foundation::{CardId, CommandMetadata, OwnedByUser};
use crate::domain::review::Review;
use crate::ports::{CardRepository, CertificationRepository, PurchaseRepository, ReviewRepository};

/// Query for a single card's detail view.
#[derive(Debug, Clone)]
pub struct GetCardQuery {
    pub card_id: CardId,
}

/// Everything the card detail page shows.
#[derive(Debug, Clone)]
pub struct CardDetail {
    pub card: Card,
    /// Headings of depth 1 through 3, in document order.
    pub table_of_contents: Vec<String>,
    /// Update-log entries, newest first.
    pub updates: Vec<CardUpdate>,
    /// Reviews, newest first.
    pub reviews: Vec<Review>,
    /// Mean star rating across reviews, if any exist.
    pub average_rating: Option<f64>,
    /// Number of admin-verified certification claims.
    pub verified_certifications: u32,
    /// Whether the caller has acquired this card.
    pub owned: bool,
}

/// Handler for the card detail view.
///
/// Draft cards are visible only to their owner and to admins; everyone else
/// gets not-found, same as for a card that never existed.
pub struct GetCardHandler {
    cards: Arc<dyn CardRepository>,
    reviews: Arc<dyn ReviewRepository>,
    certifications: Arc<dyn CertificationRepository>,
    purchases: Arc<dyn PurchaseRepository>,
}

impl GetCardHandler {
    pub fn new(
        cards: Arc<dyn CardRepository>,
        reviews: Arc<dyn ReviewRepository>,
        certifications: Arc<dyn CertificationRepository>,
        purchases: Arc<dyn PurchaseRepository>,
    ) -> Self {
        Self {
            cards,
            reviews,
            certifications,
            purchases,
        }
    }

    pub async fn handle(
        &self,
        query: GetCardQuery,
        metadata: CommandMetadata,
    ) -> Result<CardDetail, CardError> {
        let card = self
            .cards
            .find_by_id(&query.card_id)
            .await?
            .ok_or(CardError::NotFound(query.card_id))?;

        let identity = &metadata.identity;
        if !card.is_published() && !card.is_owner(&identity.user_id) && !identity.is_admin() {
            return Err(CardError::NotFound(query.card_id));
        }

        let updates = self.cards.list_updates(&query.card_id).await?;
        let reviews = self.reviews.find_by_card(&query.card_id).await?;
        let verified_certifications = self
            .certifications
            .count_verified_for_card(&query.card_id)
            .await?;
        let owned = self
            .purchases
            .find_by_user_and_card(&identity.user_id, &query.card_id)
            .await?
            .is_some();

        let average_rating = (!reviews.is_empty()).then(|| {
            let total: u32 = reviews.iter().map(|r| u32::from(r.rating().value())).sum();
            f64::from(total) / reviews.len() as f64
        });

        let toc = table_of_contents(card.raw_content())
            .map(str::to_string)
            .collect();

        Ok(CardDetail {
            table_of_contents: toc,
            updates,
            reviews,
            average_rating,
            verified_certifications,
            owned,
            card,
        })
    }
}
