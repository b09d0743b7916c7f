//! Ports - contracts between the application core and the outside world.
//!
//! The persistence service and identity service are external collaborators;
//! these traits are the seams the adapters implement.

mod account_repository;
mod card_repository;
mod certification_repository;
mod purchase_repository;
mod review_repository;

pub use account_repository::AccountRepository;
pub use card_repository::{CardRepository, CatalogFilter};
pub use certification_repository::CertificationRepository;
pub use purchase_repository::PurchaseRepository;
pub use review_repository::ReviewRepository;
