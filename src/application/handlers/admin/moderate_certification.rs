//! ModerateCertificationHandler - Admin review of certification claims.

use std::sync::Arc;

use crate::domain::certification::{Certification, CertificationError};
use crate::domain::foundation::{CertificationId, CommandMetadata};
use crate::ports::CertificationRepository;

/// Admin decision on a certification claim.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CertificationDecision {
    /// Mark the claim verified.
    Verify,
    /// Delete the claim.
    Reject,
}

/// Command to moderate a certification claim.
#[derive(Debug, Clone)]
pub struct ModerateCertificationCommand {
    pub certification_id: CertificationId,
    pub decision: CertificationDecision,
}

/// Result of moderation.
#[derive(Debug, Clone)]
pub struct ModerateCertificationResult {
    /// The verified claim, or None when it was rejected and deleted.
    pub certification: Option<Certification>,
}

/// Handler for admin moderation of certification claims.
pub struct ModerateCertificationHandler {
    certifications: Arc<dyn CertificationRepository>,
}

impl ModerateCertificationHandler {
    pub fn new(certifications: Arc<dyn CertificationRepository>) -> Self {
        Self { certifications }
    }

    pub async fn handle(
        &self,
        cmd: ModerateCertificationCommand,
        metadata: CommandMetadata,
    ) -> Result<ModerateCertificationResult, CertificationError> {
        metadata
            .identity
            .require_admin()
            .map_err(|e| CertificationError::Forbidden(e.to_string()))?;

        let mut certification = self
            .certifications
            .find_by_id(&cmd.certification_id)
            .await?
            .ok_or(CertificationError::NotFound(cmd.certification_id))?;

        let certification = match cmd.decision {
            CertificationDecision::Verify => {
                certification.verify();
                self.certifications.update(&certification).await?;
                Some(certification)
            }
            CertificationDecision::Reject => {
                self.certifications.delete(&cmd.certification_id).await?;
                None
            }
        };

        tracing::info!(
            certification_id = %cmd.certification_id,
            verified = certification.is_some(),
            "certification moderated"
        );

        Ok(ModerateCertificationResult { certification })
    }
}

/// Query for the admin moderation queue.
#[derive(Debug, Clone)]
pub struct ListUnverifiedCertificationsQuery;

/// Handler listing unverified claims, oldest first.
pub struct ListUnverifiedCertificationsHandler {
    certifications: Arc<dyn CertificationRepository>,
}

impl ListUnverifiedCertificationsHandler {
    pub fn new(certifications: Arc<dyn CertificationRepository>) -> Self {
        Self { certifications }
    }

    pub async fn handle(
        &self,
        _query: ListUnverifiedCertificationsQuery,
        metadata: CommandMetadata,
    ) -> Result<Vec<Certification>, CertificationError> {
        metadata
            .identity
            .require_admin()
            .map_err(|e| CertificationError::Forbidden(e.to_string()))?;

        Ok(self.certifications.find_unverified().await?)
    }
}
