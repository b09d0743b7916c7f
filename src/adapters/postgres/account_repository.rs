//! PostgreSQL implementation of AccountRepository.

use async_trait::async_trait;
use sqlx::PgPool;
use std::str::FromStr;

use crate::domain::account::Account;
use crate::domain::foundation::{DomainError, ErrorCode, Timestamp, UserId, UserRole};
use crate::ports::AccountRepository;

/// PostgreSQL implementation of the AccountRepository port.
#[derive(Clone)]
pub struct PostgresAccountRepository {
    pool: PgPool,
}

impl PostgresAccountRepository {
    /// Creates a new repository instance.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, sqlx::FromRow)]
struct AccountRow {
    user_id: String,
    role: String,
    seller_approved: bool,
    created_at: chrono::DateTime<chrono::Utc>,
}

fn row_to_account(row: AccountRow) -> Result<Account, DomainError> {
    let user_id = UserId::new(&row.user_id).map_err(|e| {
        DomainError::new(ErrorCode::InvalidFormat, format!("Invalid user_id: {}", e))
    })?;
    let role =
        UserRole::from_str(&row.role).map_err(|e| DomainError::new(ErrorCode::InvalidFormat, e))?;

    Ok(Account::reconstitute(
        user_id,
        role,
        row.seller_approved,
        Timestamp::from_datetime(row.created_at),
    ))
}

fn db_error(e: sqlx::Error) -> DomainError {
    DomainError::new(ErrorCode::DatabaseError, format!("Database error: {}", e))
}

#[async_trait]
impl AccountRepository for PostgresAccountRepository {
    async fn save(&self, account: &Account) -> Result<(), DomainError> {
        sqlx::query(
            r#"
            INSERT INTO accounts (user_id, role, seller_approved, created_at)
            VALUES ($1, $2, $3, $4)
            "#,
        )
        .bind(account.user_id().as_str())
        .bind(account.role().as_str())
        .bind(account.is_seller_approved())
        .bind(account.created_at().as_datetime())
        .execute(&self.pool)
        .await
        .map_err(db_error)?;

        Ok(())
    }

    async fn update(&self, account: &Account) -> Result<(), DomainError> {
        let result = sqlx::query(
            r#"
            UPDATE accounts
            SET role = $1, seller_approved = $2
            WHERE user_id = $3
            "#,
        )
        .bind(account.role().as_str())
        .bind(account.is_seller_approved())
        .bind(account.user_id().as_str())
        .execute(&self.pool)
        .await
        .map_err(db_error)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::new(
                ErrorCode::AccountNotFound,
                format!("Account not found: {}", account.user_id()),
            ));
        }
        Ok(())
    }

    async fn find_by_id(&self, user_id: &UserId) -> Result<Option<Account>, DomainError> {
        let row = sqlx::query_as::<_, AccountRow>(
            "SELECT user_id, role, seller_approved, created_at FROM accounts WHERE user_id = $1",
        )
        .bind(user_id.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(db_error)?;

        row.map(row_to_account).transpose()
    }

    async fn find_pending_sellers(&self) -> Result<Vec<Account>, DomainError> {
        let rows = sqlx::query_as::<_, AccountRow>(
            r#"
            SELECT user_id, role, seller_approved, created_at
            FROM accounts
            WHERE role = 'SELLER' AND NOT seller_approved
            ORDER BY created_at ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(db_error)?;

        rows.into_iter().map(row_to_account).collect()
    }

    async fn find_approved_sellers(&self) -> Result<Vec<Account>, DomainError> {
        let rows = sqlx::query_as::<_, AccountRow>(
            r#"
            SELECT user_id, role, seller_approved, created_at
            FROM accounts
            WHERE role = 'SELLER' AND seller_approved
            ORDER BY created_at ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(db_error)?;

        rows.into_iter().map(row_to_account).collect()
    }
}
