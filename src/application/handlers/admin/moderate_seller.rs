//! ModerateSellerHandler - Admin review of seller applications.

use std::sync::Arc;

use crate::domain::account::{Account, AccountError};
use crate::domain::foundation::{CommandMetadata, UserId};
use crate::ports::AccountRepository;

/// Admin decision on a seller application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SellerDecision {
    /// Grant the seller role and the approval flag.
    Approve,
    /// Demote back to buyer and clear the flag.
    Reject,
}

/// Command to moderate a seller application.
#[derive(Debug, Clone)]
pub struct ModerateSellerCommand {
    pub user_id: UserId,
    pub decision: SellerDecision,
}

/// Result of seller moderation.
#[derive(Debug, Clone)]
pub struct ModerateSellerResult {
    pub account: Account,
}

/// Handler for admin moderation of seller applications.
pub struct ModerateSellerHandler {
    accounts: Arc<dyn AccountRepository>,
}

impl ModerateSellerHandler {
    pub fn new(accounts: Arc<dyn AccountRepository>) -> Self {
        Self { accounts }
    }

    pub async fn handle(
        &self,
        cmd: ModerateSellerCommand,
        metadata: CommandMetadata,
    ) -> Result<ModerateSellerResult, AccountError> {
        metadata
            .identity
            .require_admin()
            .map_err(|e| AccountError::Forbidden(e.to_string()))?;

        let mut account = self
            .accounts
            .find_by_id(&cmd.user_id)
            .await?
            .ok_or_else(|| AccountError::NotFound(cmd.user_id.clone()))?;

        match cmd.decision {
            SellerDecision::Approve => account.approve_as_seller(),
            SellerDecision::Reject => account.revoke_seller(),
        }

        self.accounts.update(&account).await?;

        tracing::info!(
            user_id = %account.user_id(),
            approved = account.is_seller_approved(),
            "seller application moderated"
        );

        Ok(ModerateSellerResult { account })
    }
}

/// Query for the seller application queue.
#[derive(Debug, Clone)]
pub struct ListPendingSellersQuery;

/// Handler listing seller applications awaiting review, oldest first.
pub struct ListPendingSellersHandler {
    accounts: Arc<dyn AccountRepository>,
}

impl ListPendingSellersHandler {
    pub fn new(accounts: Arc<dyn AccountRepository>) -> Self {
        Self { accounts }
    }

    pub async fn handle(
        &self,
        _query: ListPendingSellersQuery,
        metadata: CommandMetadata,
    ) -> Result<Vec<Account>, AccountError> {
        metadata
            .identity
            .require_admin()
            .map_err(|e| AccountError::Forbidden(e.to_string()))?;

        Ok(self.accounts.find_pending_sellers().await?)
    }
}
