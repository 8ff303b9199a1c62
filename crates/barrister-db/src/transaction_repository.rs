use barrister_core::error::AppError;
use barrister_core::models::FinancialTransaction;
use barrister_core::store::TransactionStore;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::{PgPool, Pool, Postgres};

/// Repository for the `financial_transactions` ledger.
#[derive(Clone)]
pub struct TransactionRepository {
    pool: Pool<Postgres>,
}

impl TransactionRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

// -- Internal row type for sqlx deserialization --

#[derive(sqlx::FromRow)]
struct TransactionRow {
    id: String,
    kind: String,
    amount: Decimal,
    description: Option<String>,
    category: Option<String>,
    transaction_date: DateTime<Utc>,
    created_by: Option<String>,
    is_confidential: bool,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<TransactionRow> for FinancialTransaction {
    fn from(row: TransactionRow) -> Self {
        FinancialTransaction {
            id: row.id,
            kind: row.kind,
            amount: row.amount,
            description: row.description,
            category: row.category,
            transaction_date: row.transaction_date,
            created_by: row.created_by,
            is_confidential: row.is_confidential,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

impl TransactionStore for TransactionRepository {
    async fn list_transactions(&self) -> Result<Vec<FinancialTransaction>, AppError> {
        let rows = sqlx::query_as::<_, TransactionRow>(
            r#"
            SELECT id, type AS kind, amount, description, category, transaction_date,
                   created_by, is_confidential, created_at, updated_at
            FROM financial_transactions
            ORDER BY created_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn get_transaction(&self, id: &str) -> Result<Option<FinancialTransaction>, AppError> {
        let row = sqlx::query_as::<_, TransactionRow>(
            r#"
            SELECT id, type AS kind, amount, description, category, transaction_date,
                   created_by, is_confidential, created_at, updated_at
            FROM financial_transactions
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(row.map(Into::into))
    }

    async fn insert_transaction(&self, transaction: &FinancialTransaction) -> Result<(), AppError> {
        sqlx::query(
            r#"
            INSERT INTO financial_transactions (
                id, type, amount, description, category, transaction_date,
                created_by, is_confidential, created_at, updated_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            "#,
        )
        .bind(&transaction.id)
        .bind(&transaction.kind)
        .bind(transaction.amount)
        .bind(&transaction.description)
        .bind(&transaction.category)
        .bind(transaction.transaction_date)
        .bind(&transaction.created_by)
        .bind(transaction.is_confidential)
        .bind(transaction.created_at)
        .bind(transaction.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(())
    }

    async fn delete_transaction(&self, id: &str) -> Result<u64, AppError> {
        let result = sqlx::query(r#"DELETE FROM financial_transactions WHERE id = $1"#)
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(result.rows_affected())
    }
}
