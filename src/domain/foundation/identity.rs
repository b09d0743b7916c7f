//! Identity types for the domain layer.
//!
//! These types represent an authenticated caller as resolved by the external
//! identity service. They have **no provider dependencies** - any OAuth/OIDC
//! provider can populate them at the HTTP boundary.
//!
//! The identity is an explicit value passed as an argument into every
//! application handler; nothing in the domain reads ambient session state.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::{UserId, UserRole};

/// Authenticated caller with role and seller-approval flag.
///
/// Resolved once per request at the boundary and carried through
/// `CommandMetadata` into the handlers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    /// The unique user identifier from the identity provider.
    pub user_id: UserId,

    /// Role attached to the account.
    pub role: UserRole,

    /// Whether an admin has approved this account for selling.
    pub seller_approved: bool,
}

impl Identity {
    /// Creates a new identity value.
    pub fn new(user_id: UserId, role: UserRole, seller_approved: bool) -> Self {
        Self {
            user_id,
            role,
            seller_approved,
        }
    }

    /// Returns true if this identity carries the admin role.
    pub fn is_admin(&self) -> bool {
        self.role == UserRole::Admin
    }

    /// Returns true if this identity may publish and manage cards.
    ///
    /// Requires the seller role plus explicit admin approval. Admins do not
    /// implicitly sell; selling goes through the same approval flow.
    pub fn can_sell(&self) -> bool {
        self.role == UserRole::Seller && self.seller_approved
    }

    /// Validates that this identity may sell, returning an error otherwise.
    pub fn require_seller(&self) -> Result<(), IdentityError> {
        if self.can_sell() {
            Ok(())
        } else {
            Err(IdentityError::SellerRequired)
        }
    }

    /// Validates that this identity is an admin, returning an error otherwise.
    pub fn require_admin(&self) -> Result<(), IdentityError> {
        if self.is_admin() {
            Ok(())
        } else {
            Err(IdentityError::AdminRequired)
        }
    }
}

/// Authorization errors raised when an identity lacks a required role.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IdentityError {
    /// The caller is not an approved seller.
    #[error("Approved seller account required")]
    SellerRequired,

    /// The caller is not an admin.
    #[error("Admin access required")]
    AdminRequired,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn identity(role: UserRole, approved: bool) -> Identity {
        Identity::new(UserId::new("user-123").unwrap(), role, approved)
    }

    #[test]
    fn approved_seller_can_sell() {
        assert!(identity(UserRole::Seller, true).can_sell());
    }

    #[test]
    fn unapproved_seller_cannot_sell() {
        assert!(!identity(UserRole::Seller, false).can_sell());
    }

    #[test]
    fn buyer_cannot_sell_even_if_flag_set() {
        assert!(!identity(UserRole::Buyer, true).can_sell());
    }

    #[test]
    fn admin_is_not_implicitly_a_seller() {
        let admin = identity(UserRole::Admin, false);
        assert!(admin.is_admin());
        assert!(!admin.can_sell());
    }

    #[test]
    fn require_seller_rejects_buyers() {
        let result = identity(UserRole::Buyer, false).require_seller();
        assert_eq!(result, Err(IdentityError::SellerRequired));
    }

    #[test]
    fn require_admin_accepts_admins_only() {
        assert!(identity(UserRole::Admin, false).require_admin().is_ok());
        assert_eq!(
            identity(UserRole::Seller, true).require_admin(),
            Err(IdentityError::AdminRequired)
        );
    }
}
