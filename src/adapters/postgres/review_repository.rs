//! PostgreSQL implementation of ReviewRepository.
//!
//! A unique index on (user_id, card_id) backs the one-review-per-pair
//! constraint.

use async_trait::async_trait;
use sqlx::PgPool;

use crate::domain::foundation::{CardId, DomainError, ErrorCode, ReviewId, Timestamp, UserId};
use crate::domain::review::{Rating, Review};
use crate::ports::ReviewRepository;

/// PostgreSQL implementation of the ReviewRepository port.
#[derive(Clone)]
pub struct PostgresReviewRepository {
    pool: PgPool,
}

impl PostgresReviewRepository {
    /// Creates a new repository instance.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, sqlx::FromRow)]
struct ReviewRow {
    id: uuid::Uuid,
    card_id: uuid::Uuid,
    user_id: String,
    rating: i16,
    title: Option<String>,
    content: String,
    created_at: chrono::DateTime<chrono::Utc>,
}

fn row_to_review(row: ReviewRow) -> Result<Review, DomainError> {
    let user_id = UserId::new(&row.user_id).map_err(|e| {
        DomainError::new(ErrorCode::InvalidFormat, format!("Invalid user_id: {}", e))
    })?;
    let rating = u8::try_from(row.rating)
        .ok()
        .and_then(|v| Rating::try_from_u8(v).ok())
        .ok_or_else(|| {
            DomainError::new(
                ErrorCode::InvalidFormat,
                format!("Invalid stored rating: {}", row.rating),
            )
        })?;

    Ok(Review::reconstitute(
        ReviewId::from_uuid(row.id),
        CardId::from_uuid(row.card_id),
        user_id,
        rating,
        row.title,
        row.content,
        Timestamp::from_datetime(row.created_at),
    ))
}

fn db_error(e: sqlx::Error) -> DomainError {
    DomainError::new(ErrorCode::DatabaseError, format!("Database error: {}", e))
}

#[async_trait]
impl ReviewRepository for PostgresReviewRepository {
    async fn save(&self, review: &Review) -> Result<(), DomainError> {
        let result = sqlx::query(
            r#"
            INSERT INTO reviews (id, card_id, user_id, rating, title, content, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(review.id().as_uuid())
        .bind(review.card_id().as_uuid())
        .bind(review.user_id().as_str())
        .bind(i16::from(review.rating().value()))
        .bind(review.title())
        .bind(review.content())
        .bind(review.created_at().as_datetime())
        .execute(&self.pool)
        .await;

        match result {
            Ok(_) => Ok(()),
            Err(sqlx::Error::Database(db_err)) if db_err.is_unique_violation() => {
                Err(DomainError::new(
                    ErrorCode::DatabaseError,
                    "Duplicate review for user and card",
                ))
            }
            Err(e) => Err(db_error(e)),
        }
    }

    async fn find_by_user_and_card(
        &self,
        user_id: &UserId,
        card_id: &CardId,
    ) -> Result<Option<Review>, DomainError> {
        let row = sqlx::query_as::<_, ReviewRow>(
            r#"
            SELECT id, card_id, user_id, rating, title, content, created_at
            FROM reviews
            WHERE user_id = $1 AND card_id = $2
            "#,
        )
        .bind(user_id.as_str())
        .bind(card_id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(db_error)?;

        row.map(row_to_review).transpose()
    }

    async fn find_by_card(&self, card_id: &CardId) -> Result<Vec<Review>, DomainError> {
        let rows = sqlx::query_as::<_, ReviewRow>(
            r#"
            SELECT id, card_id, user_id, rating, title, content, created_at
            FROM reviews
            WHERE card_id = $1
            ORDER BY created_at DESC
            "#,
        )
        .bind(card_id.as_uuid())
        .fetch_all(&self.pool)
        .await
        .map_err(db_error)?;

        rows.into_iter().map(row_to_review).collect()
    }
}
