//! SubmitCertificationHandler - Command handler for certification claims.

use std::sync::Arc;

use crate::domain::certification::{Certification, CertificationError};
use crate::domain::foundation::{CardId, CommandMetadata};
use crate::ports::{CardRepository, CertificationRepository, PurchaseRepository};

/// Command to submit a certification claim.
#[derive(Debug, Clone)]
pub struct SubmitCertificationCommand {
    pub card_id: CardId,
    pub problem_solved: String,
    pub how_used: String,
    pub outcome: String,
    pub proof_links: Vec<String>,
}

/// Result of a successful claim submission.
#[derive(Debug, Clone)]
pub struct SubmitCertificationResult {
    pub certification: Certification,
}

/// Handler for submitting certification claims.
///
/// Same trust gates as reviews: a purchase is required and at most one
/// claim exists per user and card. Claims start unverified.
pub struct SubmitCertificationHandler {
    cards: Arc<dyn CardRepository>,
    purchases: Arc<dyn PurchaseRepository>,
    certifications: Arc<dyn CertificationRepository>,
}

impl SubmitCertificationHandler {
    pub fn new(
        cards: Arc<dyn CardRepository>,
        purchases: Arc<dyn PurchaseRepository>,
        certifications: Arc<dyn CertificationRepository>,
    ) -> Self {
        Self {
            cards,
            purchases,
            certifications,
        }
    }

    pub async fn handle(
        &self,
        cmd: SubmitCertificationCommand,
        metadata: CommandMetadata,
    ) -> Result<SubmitCertificationResult, CertificationError> {
        let user_id = &metadata.identity.user_id;

        if self.cards.find_by_id(&cmd.card_id).await?.is_none() {
            return Err(CertificationError::CardNotFound(cmd.card_id));
        }

        if self
            .purchases
            .find_by_user_and_card(user_id, &cmd.card_id)
            .await?
            .is_none()
        {
            return Err(CertificationError::NotPurchased);
        }

        if self
            .certifications
            .find_by_user_and_card(user_id, &cmd.card_id)
            .await?
            .is_some()
        {
            return Err(CertificationError::AlreadyCertified);
        }

        let certification = Certification::new(
            cmd.card_id,
            user_id.clone(),
            cmd.problem_solved,
            cmd.how_used,
            cmd.outcome,
            cmd.proof_links,
        )?;

        self.certifications.save(&certification).await?;

        tracing::info!(
            certification_id = %certification.id(),
            card_id = %cmd.card_id,
            "certification submitted"
        );

        Ok(SubmitCertificationResult { certification })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::{
        InMemoryCardRepository, InMemoryCertificationRepository, InMemoryPurchaseRepository,
    };
    use crate::domain::card::{Card, CardStatus, CardType, LicenseType, NewCard};
    use crate::domain::foundation::{Identity, UserId, UserRole};
    use crate::domain::purchase::Purchase;

    const COMPLETE: &str = "# Problem Definition\nA\n# Target Audience\nB\n# Solution Overview\nC\n# Contents\nD\n# Usage Notes & Limitations\nE";

    struct Fixture {
        cards: Arc<InMemoryCardRepository>,
        purchases: Arc<InMemoryPurchaseRepository>,
        certifications: Arc<InMemoryCertificationRepository>,
    }

    impl Fixture {
        fn new() -> Self {
            Self {
                cards: Arc::new(InMemoryCardRepository::new()),
                purchases: Arc::new(InMemoryPurchaseRepository::new()),
                certifications: Arc::new(InMemoryCertificationRepository::new()),
            }
        }

        fn handler(&self) -> SubmitCertificationHandler {
            SubmitCertificationHandler::new(
                self.cards.clone(),
                self.purchases.clone(),
                self.certifications.clone(),
            )
        }

        async fn seeded_card(&self) -> Card {
            let card = Card::new(
                UserId::new("seller-1").unwrap(),
                NewCard {
                    title: "Title".to_string(),
                    summary: "Summary".to_string(),
                    content: COMPLETE.to_string(),
                    category: "pricing".to_string(),
                    card_type: CardType::Guide,
                    license: LicenseType::Personal,
                    status: CardStatus::Published,
                },
            )
            .unwrap();
            self.cards.save(&card).await.unwrap();
            card
        }

        async fn purchased_by(&self, user: &str, card: &Card) {
            self.purchases
                .save(&Purchase::free(UserId::new(user).unwrap(), card.id()))
                .await
                .unwrap();
        }
    }

    fn metadata_for(user: &str) -> CommandMetadata {
        CommandMetadata::new(Identity::new(
            UserId::new(user).unwrap(),
            UserRole::Buyer,
            false,
        ))
    }

    fn command(card: &Card) -> SubmitCertificationCommand {
        SubmitCertificationCommand {
            card_id: card.id(),
            problem_solved: "Churn analysis".to_string(),
            how_used: "Applied to Q3 cohort".to_string(),
            outcome: "Churn down 12%".to_string(),
            proof_links: vec!["https://example.com/report".to_string()],
        }
    }

    #[tokio::test]
    async fn purchaser_submits_unverified_claim() {
        let fixture = Fixture::new();
        let card = fixture.seeded_card().await;
        fixture.purchased_by("buyer-1", &card).await;

        let result = fixture
            .handler()
            .handle(command(&card), metadata_for("buyer-1"))
            .await
            .unwrap();

        assert!(!result.certification.is_verified());
    }

    #[tokio::test]
    async fn claim_without_purchase_is_rejected() {
        let fixture = Fixture::new();
        let card = fixture.seeded_card().await;

        let result = fixture
            .handler()
            .handle(command(&card), metadata_for("buyer-1"))
            .await;

        assert!(matches!(result, Err(CertificationError::NotPurchased)));
    }

    #[tokio::test]
    async fn second_claim_is_rejected() {
        let fixture = Fixture::new();
        let card = fixture.seeded_card().await;
        fixture.purchased_by("buyer-1", &card).await;
        let handler = fixture.handler();

        handler
            .handle(command(&card), metadata_for("buyer-1"))
            .await
            .unwrap();
        let second = handler.handle(command(&card), metadata_for("buyer-1")).await;

        assert!(matches!(second, Err(CertificationError::AlreadyCertified)));
    }

    #[tokio::test]
    async fn empty_claim_field_is_rejected() {
        let fixture = Fixture::new();
        let card = fixture.seeded_card().await;
        fixture.purchased_by("buyer-1", &card).await;

        let mut cmd = command(&card);
        cmd.outcome = "  ".to_string();

        let result = fixture.handler().handle(cmd, metadata_for("buyer-1")).await;
        assert!(matches!(result, Err(CertificationError::Validation(_))));
    }
}
