//! Shared HTTP application state.

use std::sync::Arc;

use crate::application::{
    AcquireCardHandler, BrowseCardsHandler, CreateCardHandler, DeleteCardHandler, GetCardHandler,
    ListAcquisitionsHandler, ListPendingSellersHandler, ListUnverifiedCertificationsHandler,
    ModerateCertificationHandler, ModerateSellerHandler, SubmitCertificationHandler,
    SubmitReviewHandler, UpdateCardHandler,
};
use crate::ports::{
    AccountRepository, CardRepository, CertificationRepository, PurchaseRepository,
    ReviewRepository,
};

/// Shared state for all marketplace routes: the five repository ports.
///
/// Handlers are cheap to build, so they are created on demand from the
/// shared ports instead of being stored themselves.
#[derive(Clone)]
pub struct AppState {
    pub cards: Arc<dyn CardRepository>,
    pub purchases: Arc<dyn PurchaseRepository>,
    pub reviews: Arc<dyn ReviewRepository>,
    pub certifications: Arc<dyn CertificationRepository>,
    pub accounts: Arc<dyn AccountRepository>,
}

impl AppState {
    pub fn create_card_handler(&self) -> CreateCardHandler {
        CreateCardHandler::new(self.cards.clone())
    }

    pub fn update_card_handler(&self) -> UpdateCardHandler {
        UpdateCardHandler::new(self.cards.clone())
    }

    pub fn delete_card_handler(&self) -> DeleteCardHandler {
        DeleteCardHandler::new(self.cards.clone())
    }

    pub fn get_card_handler(&self) -> GetCardHandler {
        GetCardHandler::new(
            self.cards.clone(),
            self.reviews.clone(),
            self.certifications.clone(),
            self.purchases.clone(),
        )
    }

    pub fn browse_cards_handler(&self) -> BrowseCardsHandler {
        BrowseCardsHandler::new(self.cards.clone())
    }

    pub fn acquire_card_handler(&self) -> AcquireCardHandler {
        AcquireCardHandler::new(self.cards.clone(), self.purchases.clone())
    }

    pub fn list_acquisitions_handler(&self) -> ListAcquisitionsHandler {
        ListAcquisitionsHandler::new(self.cards.clone(), self.purchases.clone())
    }

    pub fn submit_review_handler(&self) -> SubmitReviewHandler {
        SubmitReviewHandler::new(
            self.cards.clone(),
            self.purchases.clone(),
            self.reviews.clone(),
        )
    }

    pub fn submit_certification_handler(&self) -> SubmitCertificationHandler {
        SubmitCertificationHandler::new(
            self.cards.clone(),
            self.purchases.clone(),
            self.certifications.clone(),
        )
    }

    pub fn moderate_certification_handler(&self) -> ModerateCertificationHandler {
        ModerateCertificationHandler::new(self.certifications.clone())
    }

    pub fn list_unverified_certifications_handler(&self) -> ListUnverifiedCertificationsHandler {
        ListUnverifiedCertificationsHandler::new(self.certifications.clone())
    }

    pub fn moderate_seller_handler(&self) -> ModerateSellerHandler {
        ModerateSellerHandler::new(self.accounts.clone())
    }

    pub fn list_pending_sellers_handler(&self) -> ListPendingSellersHandler {
        ListPendingSellersHandler::new(self.accounts.clone())
    }
}
