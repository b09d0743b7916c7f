//! Account aggregate - the marketplace-side view of a user.
//!
//! Authentication lives in the external identity service; this aggregate
//! holds only what the marketplace decides about a user: their role and
//! whether an admin approved them for selling.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{Timestamp, UserId, UserRole};

/// Marketplace account state for one user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Account {
    user_id: UserId,
    role: UserRole,
    seller_approved: bool,
    created_at: Timestamp,
}

impl Account {
    /// Creates a fresh buyer account.
    pub fn new(user_id: UserId) -> Self {
        Self {
            user_id,
            role: UserRole::Buyer,
            seller_approved: false,
            created_at: Timestamp::now(),
        }
    }

    /// Reconstitutes an account from persistence.
    pub fn reconstitute(
        user_id: UserId,
        role: UserRole,
        seller_approved: bool,
        created_at: Timestamp,
    ) -> Self {
        Self {
            user_id,
            role,
            seller_approved,
            created_at,
        }
    }

    /// Admin approval: grants the seller role and the approval flag.
    pub fn approve_as_seller(&mut self) {
        self.role = UserRole::Seller;
        self.seller_approved = true;
    }

    /// Admin rejection: demotes back to buyer and clears the flag.
    pub fn revoke_seller(&mut self) {
        self.role = UserRole::Buyer;
        self.seller_approved = false;
    }

    /// Returns the user ID.
    pub fn user_id(&self) -> &UserId {
        &self.user_id
    }

    /// Returns the account role.
    pub fn role(&self) -> UserRole {
        self.role
    }

    /// Returns true if an admin approved this account for selling.
    pub fn is_seller_approved(&self) -> bool {
        self.seller_approved
    }

    /// Returns when the account was created.
    pub fn created_at(&self) -> Timestamp {
        self.created_at
    }
}
