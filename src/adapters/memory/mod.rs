//! In-memory adapters for tests and local development.

mod account_repository;
mod card_repository;
mod certification_repository;
mod purchase_repository;
mod review_repository;

pub use account_repository::InMemoryAccountRepository;
pub use card_repository::InMemoryCardRepository;
pub use certification_repository::InMemoryCertificationRepository;
pub use purchase_repository::InMemoryPurchaseRepository;
pub use review_repository::InMemoryReviewRepository;
