//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.

pub mod handlers;

pub use handlers::admin::{
    CertificationDecision, ListPendingSellersHandler, ListPendingSellersQuery,
    ListUnverifiedCertificationsHandler, ListUnverifiedCertificationsQuery,
    ModerateCertificationCommand, ModerateCertificationHandler, ModerateCertificationResult,
    ModerateSellerCommand, ModerateSellerHandler, ModerateSellerResult, SellerDecision,
};
pub use handlers::card::{
    BrowseCardsHandler, BrowseCardsQuery, BrowseCardsResult, BrowseScope, CardDetail,
    CreateCardCommand, CreateCardHandler, CreateCardResult, DeleteCardCommand, DeleteCardHandler,
    DeleteCardResult, GetCardHandler, GetCardQuery, UpdateCardCommand, UpdateCardHandler,
    UpdateCardResult,
};
pub use handlers::certification::{
    SubmitCertificationCommand, SubmitCertificationHandler, SubmitCertificationResult,
};
pub use handlers::purchase::{
    AcquireCardCommand, AcquireCardHandler, AcquireCardResult, AcquisitionEntry,
    ListAcquisitionsHandler, ListAcquisitionsQuery, ListAcquisitionsResult,
};
pub use handlers::review::{SubmitReviewCommand, SubmitReviewHandler, SubmitReviewResult};
