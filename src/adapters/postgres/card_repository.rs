//! PostgreSQL implementation of CardRepository.
//!
//! Cards and their update log share one schema; `update` commits the card
//! row and the log entry in a single transaction guarded by an optimistic
//! version check, which is what serializes concurrent read-modify-write
//! sequences per card.

use async_trait::async_trait;
use sqlx::PgPool;
use std::str::FromStr;

use crate::domain::card::{
    Card, CardContent, CardStatus, CardType, CardUpdate, CardVersion, LicenseType,
};
use crate::domain::foundation::{
    CardId, CardUpdateId, DomainError, ErrorCode, Timestamp, UserId,
};
use crate::ports::{CardRepository, CatalogFilter};

/// PostgreSQL implementation of the CardRepository port.
#[derive(Clone)]
pub struct PostgresCardRepository {
    pool: PgPool,
}

impl PostgresCardRepository {
    /// Creates a new repository instance.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Internal row type for sqlx query mapping.
#[derive(Debug, sqlx::FromRow)]
struct CardRow {
    id: uuid::Uuid,
    seller_id: String,
    title: String,
    summary: String,
    content: String,
    category: String,
    card_type: String,
    license: String,
    status: String,
    version: i32,
    created_at: chrono::DateTime<chrono::Utc>,
    updated_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Debug, sqlx::FromRow)]
struct CardUpdateRow {
    id: uuid::Uuid,
    card_id: uuid::Uuid,
    version: i32,
    title: String,
    content: String,
    created_at: chrono::DateTime<chrono::Utc>,
}

const CARD_COLUMNS: &str = "id, seller_id, title, summary, content, category, card_type, \
     license, status, version, created_at, updated_at";

/// Maps a database row to the Card aggregate.
fn row_to_card(row: CardRow) -> Result<Card, DomainError> {
    let seller_id = UserId::new(&row.seller_id).map_err(|e| {
        DomainError::new(ErrorCode::InvalidFormat, format!("Invalid seller_id: {}", e))
    })?;
    let card_type = CardType::from_str(&row.card_type)
        .map_err(|e| DomainError::new(ErrorCode::InvalidFormat, e))?;
    let license = LicenseType::from_str(&row.license)
        .map_err(|e| DomainError::new(ErrorCode::InvalidFormat, e))?;
    let status = CardStatus::from_str(&row.status)
        .map_err(|e| DomainError::new(ErrorCode::InvalidFormat, e))?;

    Ok(Card::reconstitute(
        CardId::from_uuid(row.id),
        seller_id,
        row.title,
        row.summary,
        CardContent::new(row.content),
        row.category,
        card_type,
        license,
        status,
        CardVersion::from_raw(row.version as u32),
        Timestamp::from_datetime(row.created_at),
        Timestamp::from_datetime(row.updated_at),
    ))
}

fn row_to_update(row: CardUpdateRow) -> CardUpdate {
    CardUpdate::reconstitute(
        CardUpdateId::from_uuid(row.id),
        CardId::from_uuid(row.card_id),
        CardVersion::from_raw(row.version as u32),
        row.title,
        row.content,
        Timestamp::from_datetime(row.created_at),
    )
}

fn db_error(e: sqlx::Error) -> DomainError {
    DomainError::new(ErrorCode::DatabaseError, format!("Database error: {}", e))
}

#[async_trait]
impl CardRepository for PostgresCardRepository {
    async fn save(&self, card: &Card) -> Result<(), DomainError> {
        sqlx::query(
            r#"
            INSERT INTO cards (
                id, seller_id, title, summary, content, category,
                card_type, license, status, version, created_at, updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
            "#,
        )
        .bind(card.id().as_uuid())
        .bind(card.seller_id().as_str())
        .bind(card.title())
        .bind(card.summary())
        .bind(card.raw_content())
        .bind(card.category())
        .bind(card.card_type().as_str())
        .bind(card.license().as_str())
        .bind(card.status().as_str())
        .bind(card.version().as_u32() as i32)
        .bind(card.created_at().as_datetime())
        .bind(card.updated_at().as_datetime())
        .execute(&self.pool)
        .await
        .map_err(db_error)?;

        Ok(())
    }

    async fn update(
        &self,
        card: &Card,
        expected_version: CardVersion,
        update_entry: Option<&CardUpdate>,
    ) -> Result<(), DomainError> {
        let mut tx = self.pool.begin().await.map_err(db_error)?;

        let result = sqlx::query(
            r#"
            UPDATE cards
            SET title = $1, summary = $2, content = $3, category = $4,
                card_type = $5, license = $6, status = $7, version = $8,
                updated_at = $9
            WHERE id = $10 AND version = $11
            "#,
        )
        .bind(card.title())
        .bind(card.summary())
        .bind(card.raw_content())
        .bind(card.category())
        .bind(card.card_type().as_str())
        .bind(card.license().as_str())
        .bind(card.status().as_str())
        .bind(card.version().as_u32() as i32)
        .bind(card.updated_at().as_datetime())
        .bind(card.id().as_uuid())
        .bind(expected_version.as_u32() as i32)
        .execute(&mut *tx)
        .await
        .map_err(db_error)?;

        if result.rows_affected() == 0 {
            // Distinguish a lost race from a deleted card.
            let exists =
                sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM cards WHERE id = $1)")
                    .bind(card.id().as_uuid())
                    .fetch_one(&mut *tx)
                    .await
                    .map_err(db_error)?;

            return Err(if exists {
                DomainError::new(
                    ErrorCode::ConcurrencyConflict,
                    format!(
                        "Card {} was modified concurrently: expected {}",
                        card.id(),
                        expected_version
                    ),
                )
            } else {
                DomainError::new(
                    ErrorCode::CardNotFound,
                    format!("Card not found: {}", card.id()),
                )
            });
        }

        if let Some(entry) = update_entry {
            sqlx::query(
                r#"
                INSERT INTO card_updates (id, card_id, version, title, content, created_at)
                VALUES ($1, $2, $3, $4, $5, $6)
                "#,
            )
            .bind(entry.id().as_uuid())
            .bind(entry.card_id().as_uuid())
            .bind(entry.version().as_u32() as i32)
            .bind(entry.title())
            .bind(entry.content())
            .bind(entry.created_at().as_datetime())
            .execute(&mut *tx)
            .await
            .map_err(db_error)?;
        }

        tx.commit().await.map_err(db_error)
    }

    async fn find_by_id(&self, id: &CardId) -> Result<Option<Card>, DomainError> {
        let row = sqlx::query_as::<_, CardRow>(&format!(
            "SELECT {} FROM cards WHERE id = $1",
            CARD_COLUMNS
        ))
        .bind(id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(db_error)?;

        row.map(row_to_card).transpose()
    }

    async fn find_by_seller(&self, seller_id: &UserId) -> Result<Vec<Card>, DomainError> {
        let rows = sqlx::query_as::<_, CardRow>(&format!(
            "SELECT {} FROM cards WHERE seller_id = $1 ORDER BY created_at DESC",
            CARD_COLUMNS
        ))
        .bind(seller_id.as_str())
        .fetch_all(&self.pool)
        .await
        .map_err(db_error)?;

        rows.into_iter().map(row_to_card).collect()
    }

    async fn find_published(&self, filter: &CatalogFilter) -> Result<Vec<Card>, DomainError> {
        let rows = sqlx::query_as::<_, CardRow>(&format!(
            r#"
            SELECT {} FROM cards
            WHERE status = 'PUBLISHED'
              AND ($1::text IS NULL OR category = $1)
              AND ($2::text IS NULL OR card_type = $2)
            ORDER BY created_at DESC
            "#,
            CARD_COLUMNS
        ))
        .bind(filter.category.as_deref())
        .bind(filter.card_type.map(|t| t.as_str()))
        .fetch_all(&self.pool)
        .await
        .map_err(db_error)?;

        rows.into_iter().map(row_to_card).collect()
    }

    async fn list_updates(&self, card_id: &CardId) -> Result<Vec<CardUpdate>, DomainError> {
        let rows = sqlx::query_as::<_, CardUpdateRow>(
            r#"
            SELECT id, card_id, version, title, content, created_at
            FROM card_updates
            WHERE card_id = $1
            ORDER BY version DESC
            "#,
        )
        .bind(card_id.as_uuid())
        .fetch_all(&self.pool)
        .await
        .map_err(db_error)?;

        Ok(rows.into_iter().map(row_to_update).collect())
    }

    async fn delete(&self, id: &CardId) -> Result<(), DomainError> {
        let mut tx = self.pool.begin().await.map_err(db_error)?;

        sqlx::query("DELETE FROM card_updates WHERE card_id = $1")
            .bind(id.as_uuid())
            .execute(&mut *tx)
            .await
            .map_err(db_error)?;

        let result = sqlx::query("DELETE FROM cards WHERE id = $1")
            .bind(id.as_uuid())
            .execute(&mut *tx)
            .await
            .map_err(db_error)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::new(
                ErrorCode::CardNotFound,
                format!("Card not found: {}", id),
            ));
        }

        tx.commit().await.map_err(db_error)
    }
}
