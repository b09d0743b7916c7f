//! Certification aggregate - a user's claim of successful card usage.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{CardId, CertificationId, Timestamp, UserId, ValidationError};

/// A user-submitted claim of successful card usage, verified by an admin.
///
/// Submitted unverified; an admin either verifies it (the flag flips once,
/// never back) or rejects it (the record is deleted). Proof links are opaque
/// URLs; file storage is out of scope.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Certification {
    id: CertificationId,
    card_id: CardId,
    user_id: UserId,
    problem_solved: String,
    how_used: String,
    outcome: String,
    proof_links: Vec<String>,
    verified: bool,
    created_at: Timestamp,
}

impl Certification {
    /// Creates a new unverified certification claim.
    pub fn new(
        card_id: CardId,
        user_id: UserId,
        problem_solved: impl Into<String>,
        how_used: impl Into<String>,
        outcome: impl Into<String>,
        proof_links: Vec<String>,
    ) -> Result<Self, ValidationError> {
        let problem_solved = problem_solved.into();
        let how_used = how_used.into();
        let outcome = outcome.into();

        if problem_solved.trim().is_empty() {
            return Err(ValidationError::empty_field("problem_solved"));
        }
        if how_used.trim().is_empty() {
            return Err(ValidationError::empty_field("how_used"));
        }
        if outcome.trim().is_empty() {
            return Err(ValidationError::empty_field("outcome"));
        }

        Ok(Self {
            id: CertificationId::new(),
            card_id,
            user_id,
            problem_solved,
            how_used,
            outcome,
            proof_links,
            verified: false,
            created_at: Timestamp::now(),
        })
    }

    /// Reconstitutes a certification from persistence.
    #[allow(clippy::too_many_arguments)]
    pub fn reconstitute(
        id: CertificationId,
        card_id: CardId,
        user_id: UserId,
        problem_solved: String,
        how_used: String,
        outcome: String,
        proof_links: Vec<String>,
        verified: bool,
        created_at: Timestamp,
    ) -> Self {
        Self {
            id,
            card_id,
            user_id,
            problem_solved,
            how_used,
            outcome,
            proof_links,
            verified,
            created_at,
        }
    }

    /// Marks the claim as verified by an admin.
    pub fn verify(&mut self) {
        self.verified = true;
    }

    /// Returns the certification ID.
    pub fn id(&self) -> CertificationId {
        self.id
    }

    /// Returns the certified card's ID.
    pub fn card_id(&self) -> CardId {
        self.card_id
    }

    /// Returns the claimant's user ID.
    pub fn user_id(&self) -> &UserId {
        &self.user_id
    }

    /// Returns what problem the card solved.
    pub fn problem_solved(&self) -> &str {
        &self.problem_solved
    }

    /// Returns how the card was used.
    pub fn how_used(&self) -> &str {
        &self.how_used
    }

    /// Returns the claimed outcome.
    pub fn outcome(&self) -> &str {
        &self.outcome
    }

    /// Returns the proof links (opaque URLs).
    pub fn proof_links(&self) -> &[String] {
        &self.proof_links
    }

    /// Returns true if an admin has verified the claim.
    pub fn is_verified(&self) -> bool {
        self.verified
    }

    /// Returns when the claim was submitted.
    pub fn created_at(&self) -> Timestamp {
        self.created_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn claimant() -> UserId {
        UserId::new("buyer-1").unwrap()
    }

    fn claim() -> Certification {
        Certification::new(
            CardId::new(),
            claimant(),
            "Churn analysis",
            "Applied the playbook to our Q3 cohort",
            "Churn down 12%",
            vec!["https://example.com/report".to_string()],
        )
        .unwrap()
    }

    #[test]
    fn new_certification_starts_unverified() {
        assert!(!claim().is_verified());
    }

    #[test]
    fn verify_flips_the_flag() {
        let mut certification = claim();
        certification.verify();
        assert!(certification.is_verified());
    }

    #[test]
    fn certification_rejects_empty_claim_fields() {
        let result = Certification::new(
            CardId::new(),
            claimant(),
            "",
            "how",
            "outcome",
            Vec::new(),
        );
        assert!(result.is_err());
    }

    #[test]
    fn proof_links_may_be_empty() {
        let certification = Certification::new(
            CardId::new(),
            claimant(),
            "problem",
            "how",
            "outcome",
            Vec::new(),
        )
        .unwrap();
        assert!(certification.proof_links().is_empty());
    }
}
