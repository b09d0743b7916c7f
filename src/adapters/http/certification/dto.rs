//! HTTP DTOs for certification endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::certification::Certification;

/// Request to submit a certification claim.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitCertificationRequest {
    pub card_id: String,
    pub problem_solved: String,
    pub how_used: String,
    pub outcome: String,
    #[serde(default)]
    pub proof_links: Vec<String>,
}

/// A certification claim as returned by the API.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CertificationResponse {
    pub id: String,
    pub card_id: String,
    pub user_id: String,
    pub problem_solved: String,
    pub how_used: String,
    pub outcome: String,
    pub proof_links: Vec<String>,
    pub verified: bool,
    pub created_at: DateTime<Utc>,
}

impl From<&Certification> for CertificationResponse {
    fn from(certification: &Certification) -> Self {
        Self {
            id: certification.id().to_string(),
            card_id: certification.card_id().to_string(),
            user_id: certification.user_id().to_string(),
            problem_solved: certification.problem_solved().to_string(),
            how_used: certification.how_used().to_string(),
            outcome: certification.outcome().to_string(),
            proof_links: certification.proof_links().to_vec(),
            verified: certification.is_verified(),
            created_at: *certification.created_at().as_datetime(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn submit_certification_request_proof_links_default_empty() {
        let json = r#"{
            "cardId": "3f9e1c34-5f6f-4a7e-9d2a-111111111111",
            "problemSolved": "Pricing a new tier",
            "howUsed": "Followed the playbook end to end",
            "outcome": "Shipped in two weeks"
        }"#;
        let req: SubmitCertificationRequest = serde_json::from_str(json).unwrap();
        assert!(req.proof_links.is_empty());
    }
}
