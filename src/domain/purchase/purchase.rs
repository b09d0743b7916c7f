//! Purchase record - a user's acquisition of a card.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{CardId, PurchaseId, Timestamp, UserId};

/// A user's acquisition of a card.
///
/// Cards are free in this version, so the price is recorded as zero; the
/// field exists so the record keeps its meaning when pricing lands.
/// At most one purchase exists per user and card; acquiring an already-owned
/// card returns the existing record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Purchase {
    id: PurchaseId,
    user_id: UserId,
    card_id: CardId,
    price_cents: i64,
    created_at: Timestamp,
}

impl Purchase {
    /// Creates a free purchase (MVP pricing).
    pub fn free(user_id: UserId, card_id: CardId) -> Self {
        Self {
            id: PurchaseId::new(),
            user_id,
            card_id,
            price_cents: 0,
            created_at: Timestamp::now(),
        }
    }

    /// Reconstitutes a purchase from persistence.
    pub fn reconstitute(
        id: PurchaseId,
        user_id: UserId,
        card_id: CardId,
        price_cents: i64,
        created_at: Timestamp,
    ) -> Self {
        Self {
            id,
            user_id,
            card_id,
            price_cents,
            created_at,
        }
    }

    /// Returns the purchase ID.
    pub fn id(&self) -> PurchaseId {
        self.id
    }

    /// Returns the acquiring user's ID.
    pub fn user_id(&self) -> &UserId {
        &self.user_id
    }

    /// Returns the acquired card's ID.
    pub fn card_id(&self) -> CardId {
        self.card_id
    }

    /// Returns the price paid in cents.
    pub fn price_cents(&self) -> i64 {
        self.price_cents
    }

    /// Returns when the card was acquired.
    pub fn created_at(&self) -> Timestamp {
        self.created_at
    }
}
