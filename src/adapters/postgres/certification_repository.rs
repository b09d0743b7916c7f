//! PostgreSQL implementation of CertificationRepository.
//!
//! Proof links are stored as a text array; a unique index on
//! (user_id, card_id) backs the one-claim-per-pair constraint.

use async_trait::async_trait;
use sqlx::PgPool;

use crate::domain::certification::Certification;
use crate::domain::foundation::{
    CardId, CertificationId, DomainError, ErrorCode, Timestamp, UserId,
};
use crate::ports::CertificationRepository;

/// PostgreSQL implementation of the CertificationRepository port.
#[derive(Clone)]
pub struct PostgresCertificationRepository {
    pool: PgPool,
}

impl PostgresCertificationRepository {
    /// Creates a new repository instance.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, sqlx::FromRow)]
struct CertificationRow {
    id: uuid::Uuid,
    card_id: uuid::Uuid,
    user_id: String,
    problem_solved: String,
    how_used: String,
    outcome: String,
    proof_links: Vec<String>,
    verified: bool,
    created_at: chrono::DateTime<chrono::Utc>,
}

fn row_to_certification(row: CertificationRow) -> Result<Certification, DomainError> {
    let user_id = UserId::new(&row.user_id).map_err(|e| {
        DomainError::new(ErrorCode::InvalidFormat, format!("Invalid user_id: {}", e))
    })?;

    Ok(Certification::reconstitute(
        CertificationId::from_uuid(row.id),
        CardId::from_uuid(row.card_id),
        user_id,
        row.problem_solved,
        row.how_used,
        row.outcome,
        row.proof_links,
        row.verified,
        Timestamp::from_datetime(row.created_at),
    ))
}

fn db_error(e: sqlx::Error) -> DomainError {
    DomainError::new(ErrorCode::DatabaseError, format!("Database error: {}", e))
}

const CERTIFICATION_COLUMNS: &str =
    "id, card_id, user_id, problem_solved, how_used, outcome, proof_links, verified, created_at";

#[async_trait]
impl CertificationRepository for PostgresCertificationRepository {
    async fn save(&self, certification: &Certification) -> Result<(), DomainError> {
        let result = sqlx::query(
            r#"
            INSERT INTO certifications (
                id, card_id, user_id, problem_solved, how_used, outcome,
                proof_links, verified, created_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            "#,
        )
        .bind(certification.id().as_uuid())
        .bind(certification.card_id().as_uuid())
        .bind(certification.user_id().as_str())
        .bind(certification.problem_solved())
        .bind(certification.how_used())
        .bind(certification.outcome())
        .bind(certification.proof_links())
        .bind(certification.is_verified())
        .bind(certification.created_at().as_datetime())
        .execute(&self.pool)
        .await;

        match result {
            Ok(_) => Ok(()),
            Err(sqlx::Error::Database(db_err)) if db_err.is_unique_violation() => {
                Err(DomainError::new(
                    ErrorCode::DatabaseError,
                    "Duplicate certification for user and card",
                ))
            }
            Err(e) => Err(db_error(e)),
        }
    }

    async fn update(&self, certification: &Certification) -> Result<(), DomainError> {
        let result = sqlx::query(
            r#"
            UPDATE certifications
            SET problem_solved = $1, how_used = $2, outcome = $3,
                proof_links = $4, verified = $5
            WHERE id = $6
            "#,
        )
        .bind(certification.problem_solved())
        .bind(certification.how_used())
        .bind(certification.outcome())
        .bind(certification.proof_links())
        .bind(certification.is_verified())
        .bind(certification.id().as_uuid())
        .execute(&self.pool)
        .await
        .map_err(db_error)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::new(
                ErrorCode::CertificationNotFound,
                format!("Certification not found: {}", certification.id()),
            ));
        }
        Ok(())
    }

    async fn find_by_id(
        &self,
        id: &CertificationId,
    ) -> Result<Option<Certification>, DomainError> {
        let row = sqlx::query_as::<_, CertificationRow>(&format!(
            "SELECT {} FROM certifications WHERE id = $1",
            CERTIFICATION_COLUMNS
        ))
        .bind(id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(db_error)?;

        row.map(row_to_certification).transpose()
    }

    async fn find_by_user_and_card(
        &self,
        user_id: &UserId,
        card_id: &CardId,
    ) -> Result<Option<Certification>, DomainError> {
        let row = sqlx::query_as::<_, CertificationRow>(&format!(
            "SELECT {} FROM certifications WHERE user_id = $1 AND card_id = $2",
            CERTIFICATION_COLUMNS
        ))
        .bind(user_id.as_str())
        .bind(card_id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(db_error)?;

        row.map(row_to_certification).transpose()
    }

    async fn find_unverified(&self) -> Result<Vec<Certification>, DomainError> {
        let rows = sqlx::query_as::<_, CertificationRow>(&format!(
            "SELECT {} FROM certifications WHERE NOT verified ORDER BY created_at ASC",
            CERTIFICATION_COLUMNS
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(db_error)?;

        rows.into_iter().map(row_to_certification).collect()
    }

    async fn count_verified_for_card(&self, card_id: &CardId) -> Result<u32, DomainError> {
        let count = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM certifications WHERE card_id = $1 AND verified",
        )
        .bind(card_id.as_uuid())
        .fetch_one(&self.pool)
        .await
        .map_err(db_error)?;

        Ok(count as u32)
    }

    async fn delete(&self, id: &CertificationId) -> Result<(), DomainError> {
        let result = sqlx::query("DELETE FROM certifications WHERE id = $1")
            .bind(id.as_uuid())
            .execute(&self.pool)
            .await
            .map_err(db_error)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::new(
                ErrorCode::CertificationNotFound,
                format!("Certification not found: {}", id),
            ));
        }
        Ok(())
    }
}
