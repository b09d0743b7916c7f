//! Account repository port.

use async_trait::async_trait;

use crate::domain::account::Account;
use crate::domain::foundation::{DomainError, UserId};

/// Repository port for marketplace account state.
///
/// Account rows are created by the identity sync on first sign-in; this
/// port only reads and mutates the marketplace-owned fields (role, seller
/// approval).
#[async_trait]
pub trait AccountRepository: Send + Sync {
    /// Save a new account.
    ///
    /// # Errors
    ///
    /// - `DatabaseError` on persistence failure
    async fn save(&self, account: &Account) -> Result<(), DomainError>;

    /// Update an existing account.
    ///
    /// # Errors
    ///
    /// - `AccountNotFound` if the account doesn't exist
    /// - `DatabaseError` on persistence failure
    async fn update(&self, account: &Account) -> Result<(), DomainError>;

    /// Find an account by user ID.
    async fn find_by_id(&self, user_id: &UserId) -> Result<Option<Account>, DomainError>;

    /// Find sellers awaiting approval (seller role, flag unset).
    async fn find_pending_sellers(&self) -> Result<Vec<Account>, DomainError>;

    /// Find approved sellers.
    async fn find_approved_sellers(&self) -> Result<Vec<Account>, DomainError>;
}
