//! In-memory implementation of CertificationRepository.

use async_trait::async_trait;
use std::sync::Mutex;

use crate::domain::certification::Certification;
use crate::domain::foundation::{CardId, CertificationId, DomainError, ErrorCode, UserId};
use crate::ports::CertificationRepository;

/// In-memory certification store with the one-claim-per-user-and-card
/// constraint.
#[derive(Default)]
pub struct InMemoryCertificationRepository {
    claims: Mutex<Vec<Certification>>,
}

impl InMemoryCertificationRepository {
    /// Creates an empty repository.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CertificationRepository for InMemoryCertificationRepository {
    async fn save(&self, certification: &Certification) -> Result<(), DomainError> {
        let mut claims = self.claims.lock().expect("certification store lock poisoned");
        let duplicate = claims.iter().any(|c| {
            c.user_id() == certification.user_id() && c.card_id() == certification.card_id()
        });
        if duplicate {
            return Err(DomainError::new(
                ErrorCode::DatabaseError,
                "Duplicate certification for user and card",
            ));
        }
        claims.push(certification.clone());
        Ok(())
    }

    async fn update(&self, certification: &Certification) -> Result<(), DomainError> {
        let mut claims = self.claims.lock().expect("certification store lock poisoned");
        let slot = claims
            .iter_mut()
            .find(|c| c.id() == certification.id())
            .ok_or_else(|| {
                DomainError::new(
                    ErrorCode::CertificationNotFound,
                    format!("Certification not found: {}", certification.id()),
                )
            })?;
        *slot = certification.clone();
        Ok(())
    }

    async fn find_by_id(
        &self,
        id: &CertificationId,
    ) -> Result<Option<Certification>, DomainError> {
        let claims = self.claims.lock().expect("certification store lock poisoned");
        Ok(claims.iter().find(|c| c.id() == *id).cloned())
    }

    async fn find_by_user_and_card(
        &self,
        user_id: &UserId,
        card_id: &CardId,
    ) -> Result<Option<Certification>, DomainError> {
        let claims = self.claims.lock().expect("certification store lock poisoned");
        Ok(claims
            .iter()
            .find(|c| c.user_id() == user_id && c.card_id() == *card_id)
            .cloned())
    }

    async fn find_unverified(&self) -> Result<Vec<Certification>, DomainError> {
        let claims = self.claims.lock().expect("certification store lock poisoned");
        let mut pending: Vec<Certification> = claims
            .iter()
            .filter(|c| !c.is_verified())
            .cloned()
            .collect();
        pending.sort_by(|a, b| a.created_at().cmp(&b.created_at()));
        Ok(pending)
    }

    async fn count_verified_for_card(&self, card_id: &CardId) -> Result<u32, DomainError> {
        let claims = self.claims.lock().expect("certification store lock poisoned");
        Ok(claims
            .iter()
            .filter(|c| c.card_id() == *card_id && c.is_verified())
            .count() as u32)
    }

    async fn delete(&self, id: &CertificationId) -> Result<(), DomainError> {
        let mut claims = self.claims.lock().expect("certification store lock poisoned");
        let before = claims.len();
        claims.retain(|c| c.id() != *id);
        if claims.len() == before {
            return Err(DomainError::new(
                ErrorCode::CertificationNotFound,
                format!("Certification not found: {}", id),
            ));
        }
        Ok(())
    }
}
