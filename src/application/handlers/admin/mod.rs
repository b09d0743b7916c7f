//! Admin moderation handlers.

mod moderate_certification;
mod moderate_seller;

pub use moderate_certification::{
    CertificationDecision, ListUnverifiedCertificationsHandler,
    ListUnverifiedCertificationsQuery, ModerateCertificationCommand,
    ModerateCertificationHandler, ModerateCertificationResult,
};
pub use moderate_seller::{
    ListPendingSellersHandler, ListPendingSellersQuery, ModerateSellerCommand,
    ModerateSellerHandler, ModerateSellerResult, SellerDecision,
};
