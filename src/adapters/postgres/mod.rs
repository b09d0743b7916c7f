//! PostgreSQL adapters.
//!
//! One repository per aggregate, sharing a `PgPool`. Schema lives in
//! `schema.sql` at the crate root.

mod account_repository;
mod card_repository;
mod certification_repository;
mod purchase_repository;
mod review_repository;

pub use account_repository::PostgresAccountRepository;
pub use card_repository::PostgresCardRepository;
pub use certification_repository::PostgresCertificationRepository;
pub use purchase_repository::PostgresPurchaseRepository;
pub use review_repository::PostgresReviewRepository;
