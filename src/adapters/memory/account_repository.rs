//! In-memory implementation of AccountRepository.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;

use crate::domain::account::Account;
use crate::domain::foundation::{DomainError, ErrorCode, UserId, UserRole};
use crate::ports::AccountRepository;

/// In-memory account store.
#[derive(Default)]
pub struct InMemoryAccountRepository {
    accounts: Mutex<HashMap<UserId, Account>>,
}

impl InMemoryAccountRepository {
    /// Creates an empty repository.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl AccountRepository for InMemoryAccountRepository {
    async fn save(&self, account: &Account) -> Result<(), DomainError> {
        let mut accounts = self.accounts.lock().expect("account store lock poisoned");
        accounts.insert(account.user_id().clone(), account.clone());
        Ok(())
    }

    async fn update(&self, account: &Account) -> Result<(), DomainError> {
        let mut accounts = self.accounts.lock().expect("account store lock poisoned");
        if !accounts.contains_key(account.user_id()) {
            return Err(DomainError::new(
                ErrorCode::AccountNotFound,
                format!("Account not found: {}", account.user_id()),
            ));
        }
        accounts.insert(account.user_id().clone(), account.clone());
        Ok(())
    }

    async fn find_by_id(&self, user_id: &UserId) -> Result<Option<Account>, DomainError> {
        let accounts = self.accounts.lock().expect("account store lock poisoned");
        Ok(accounts.get(user_id).cloned())
    }

    async fn find_pending_sellers(&self) -> Result<Vec<Account>, DomainError> {
        let accounts = self.accounts.lock().expect("account store lock poisoned");
        let mut pending: Vec<Account> = accounts
            .values()
            .filter(|a| a.role() == UserRole::Seller && !a.is_seller_approved())
            .cloned()
            .collect();
        pending.sort_by(|a, b| a.created_at().cmp(&b.created_at()));
        Ok(pending)
    }

    async fn find_approved_sellers(&self) -> Result<Vec<Account>, DomainError> {
        let accounts = self.accounts.lock().expect("account store lock poisoned");
        let mut approved: Vec<Account> = accounts
            .values()
            .filter(|a| a.role() == UserRole::Seller && a.is_seller_approved())
            .cloned()
            .collect();
        approved.sort_by(|a, b| a.created_at().cmp(&b.created_at()));
        Ok(approved)
    }
}
