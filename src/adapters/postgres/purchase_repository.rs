//! PostgreSQL implementation of PurchaseRepository.
//!
//! A unique index on (user_id, card_id) backs the one-purchase-per-pair
//! constraint.

use async_trait::async_trait;
use sqlx::PgPool;

use crate::domain::foundation::{CardId, DomainError, ErrorCode, PurchaseId, Timestamp, UserId};
use crate::domain::purchase::Purchase;
use crate::ports::PurchaseRepository;

/// PostgreSQL implementation of the PurchaseRepository port.
#[derive(Clone)]
pub struct PostgresPurchaseRepository {
    pool: PgPool,
}

impl PostgresPurchaseRepository {
    /// Creates a new repository instance.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, sqlx::FromRow)]
struct PurchaseRow {
    id: uuid::Uuid,
    user_id: String,
    card_id: uuid::Uuid,
    price_cents: i64,
    created_at: chrono::DateTime<chrono::Utc>,
}

fn row_to_purchase(row: PurchaseRow) -> Result<Purchase, DomainError> {
    let user_id = UserId::new(&row.user_id).map_err(|e| {
        DomainError::new(ErrorCode::InvalidFormat, format!("Invalid user_id: {}", e))
    })?;

    Ok(Purchase::reconstitute(
        PurchaseId::from_uuid(row.id),
        user_id,
        CardId::from_uuid(row.card_id),
        row.price_cents,
        Timestamp::from_datetime(row.created_at),
    ))
}

fn db_error(e: sqlx::Error) -> DomainError {
    DomainError::new(ErrorCode::DatabaseError, format!("Database error: {}", e))
}

#[async_trait]
impl PurchaseRepository for PostgresPurchaseRepository {
    async fn save(&self, purchase: &Purchase) -> Result<(), DomainError> {
        let result = sqlx::query(
            r#"
            INSERT INTO purchases (id, user_id, card_id, price_cents, created_at)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(purchase.id().as_uuid())
        .bind(purchase.user_id().as_str())
        .bind(purchase.card_id().as_uuid())
        .bind(purchase.price_cents())
        .bind(purchase.created_at().as_datetime())
        .execute(&self.pool)
        .await;

        match result {
            Ok(_) => Ok(()),
            Err(sqlx::Error::Database(db_err)) if db_err.is_unique_violation() => {
                Err(DomainError::new(
                    ErrorCode::DatabaseError,
                    "Duplicate purchase for user and card",
                ))
            }
            Err(e) => Err(db_error(e)),
        }
    }

    async fn find_by_user_and_card(
        &self,
        user_id: &UserId,
        card_id: &CardId,
    ) -> Result<Option<Purchase>, DomainError> {
        let row = sqlx::query_as::<_, PurchaseRow>(
            r#"
            SELECT id, user_id, card_id, price_cents, created_at
            FROM purchases
            WHERE user_id = $1 AND card_id = $2
            "#,
        )
        .bind(user_id.as_str())
        .bind(card_id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(db_error)?;

        row.map(row_to_purchase).transpose()
    }

    async fn find_by_user(&self, user_id: &UserId) -> Result<Vec<Purchase>, DomainError> {
        let rows = sqlx::query_as::<_, PurchaseRow>(
            r#"
            SELECT id, user_id, card_id, price_cents, created_at
            FROM purchases
            WHERE user_id = $1
            ORDER BY created_at DESC
            "#,
        )
        .bind(user_id.as_str())
        .fetch_all(&self.pool)
        .await
        .map_err(db_error)?;

        rows.into_iter().map(row_to_purchase).collect()
    }
}
