//! HTTP DTOs for admin moderation endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::application::{CertificationDecision, SellerDecision};
use crate::domain::account::Account;

/// Request to moderate a certification claim.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModerateCertificationRequest {
    pub certification_id: String,
    pub decision: CertificationDecisionDto,
}

/// Wire form of the certification decision.
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CertificationDecisionDto {
    Verify,
    Reject,
}

impl From<CertificationDecisionDto> for CertificationDecision {
    fn from(dto: CertificationDecisionDto) -> Self {
        match dto {
            CertificationDecisionDto::Verify => CertificationDecision::Verify,
            CertificationDecisionDto::Reject => CertificationDecision::Reject,
        }
    }
}

/// Request to moderate a seller application.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModerateSellerRequest {
    pub user_id: String,
    pub decision: SellerDecisionDto,
}

/// Wire form of the seller decision.
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SellerDecisionDto {
    Approve,
    Reject,
}

impl From<SellerDecisionDto> for SellerDecision {
    fn from(dto: SellerDecisionDto) -> Self {
        match dto {
            SellerDecisionDto::Approve => SellerDecision::Approve,
            SellerDecisionDto::Reject => SellerDecision::Reject,
        }
    }
}

/// An account as shown in the admin queues.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountResponse {
    pub user_id: String,
    pub role: String,
    pub seller_approved: bool,
    pub created_at: DateTime<Utc>,
}

impl From<&Account> for AccountResponse {
    fn from(account: &Account) -> Self {
        Self {
            user_id: account.user_id().to_string(),
            role: account.role().as_str().to_string(),
            seller_approved: account.is_seller_approved(),
            created_at: *account.created_at().as_datetime(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn certification_decision_deserializes_lowercase() {
        let req: ModerateCertificationRequest = serde_json::from_str(
            r#"{"certificationId": "3f9e1c34-5f6f-4a7e-9d2a-111111111111", "decision": "verify"}"#,
        )
        .unwrap();
        assert!(matches!(req.decision, CertificationDecisionDto::Verify));
    }

    #[test]
    fn seller_decision_rejects_unknown_values() {
        let result: Result<ModerateSellerRequest, _> =
            serde_json::from_str(r#"{"userId": "u-1", "decision": "ban"}"#);
        assert!(result.is_err());
    }
}
