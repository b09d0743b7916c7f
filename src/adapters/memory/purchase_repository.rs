//! In-memory implementation of PurchaseRepository.

use async_trait::async_trait;
use std::sync::Mutex;

use crate::domain::foundation::{CardId, DomainError, ErrorCode, UserId};
use crate::domain::purchase::Purchase;
use crate::ports::PurchaseRepository;

/// In-memory purchase store. Enforces the one-purchase-per-user-and-card
/// constraint the PostgreSQL schema enforces with a unique index.
#[derive(Default)]
pub struct InMemoryPurchaseRepository {
    purchases: Mutex<Vec<Purchase>>,
}

impl InMemoryPurchaseRepository {
    /// Creates an empty repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of stored purchases (for test assertions).
    pub fn purchase_count(&self) -> usize {
        self.purchases.lock().expect("purchase store lock poisoned").len()
    }
}

#[async_trait]
impl PurchaseRepository for InMemoryPurchaseRepository {
    async fn save(&self, purchase: &Purchase) -> Result<(), DomainError> {
        let mut purchases = self.purchases.lock().expect("purchase store lock poisoned");
        let duplicate = purchases
            .iter()
            .any(|p| p.user_id() == purchase.user_id() && p.card_id() == purchase.card_id());
        if duplicate {
            return Err(DomainError::new(
                ErrorCode::DatabaseError,
                "Duplicate purchase for user and card",
            ));
        }
        purchases.push(purchase.clone());
        Ok(())
    }

    async fn find_by_user_and_card(
        &self,
        user_id: &UserId,
        card_id: &CardId,
    ) -> Result<Option<Purchase>, DomainError> {
        let purchases = self.purchases.lock().expect("purchase store lock poisoned");
        Ok(purchases
            .iter()
            .find(|p| p.user_id() == user_id && p.card_id() == *card_id)
            .cloned())
    }

    async fn find_by_user(&self, user_id: &UserId) -> Result<Vec<Purchase>, DomainError> {
        let purchases = self.purchases.lock().expect("purchase store lock poisoned");
        let mut owned: Vec<Purchase> = purchases
            .iter()
            .filter(|p| p.user_id() == user_id)
            .cloned()
            .collect();
        owned.sort_by(|a, b| b.created_at().cmp(&a.created_at()));
        Ok(owned)
    }
}
