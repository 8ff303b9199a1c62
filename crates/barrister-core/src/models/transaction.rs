use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde_json::Value;

use crate::error::AppError;
use crate::validation::{FieldReader, UNBOUNDED};

const TYPE_MAX: usize = 50;
const CATEGORY_MAX: usize = 100;

/// A ledger entry in the `financial_transactions` table.
#[derive(Debug, Clone, PartialEq)]
pub struct FinancialTransaction {
    pub id: String,
    /// Free text, conventionally `income` or `expense`.
    pub kind: String,
    /// Always carries two decimal places.
    pub amount: Decimal,
    pub description: Option<String>,
    pub category: Option<String>,
    pub transaction_date: DateTime<Utc>,
    pub created_by: Option<String>,
    pub is_confidential: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Validated payload for recording a transaction.
#[derive(Debug, Clone, PartialEq)]
pub struct NewTransaction {
    pub kind: String,
    pub amount: Decimal,
    pub description: Option<String>,
    pub category: Option<String>,
    pub transaction_date: Option<DateTime<Utc>>,
    pub created_by: Option<String>,
    pub is_confidential: Option<bool>,
}

impl NewTransaction {
    pub fn from_json(body: &Value) -> Result<Self, AppError> {
        let mut reader = FieldReader::new(body);
        let kind = reader.required_string("type", TYPE_MAX);
        let amount = reader.required_amount("amount");
        let description = reader.optional_string("description", UNBOUNDED);
        let category = reader.optional_string("category", CATEGORY_MAX);
        let transaction_date = reader.optional_datetime("transactionDate");
        let created_by = reader.optional_string("createdBy", UNBOUNDED);
        let is_confidential = reader.optional_bool("isConfidential");
        reader.finish()?;

        Ok(Self {
            kind: kind.unwrap_or_default(),
            amount: amount.unwrap_or_default(),
            description,
            category,
            transaction_date,
            created_by,
            is_confidential,
        })
    }

    /// Stamp the record. `transaction_date` falls back to `now`.
    pub fn into_transaction(self, id: String, now: DateTime<Utc>) -> FinancialTransaction {
        FinancialTransaction {
            id,
            kind: self.kind,
            amount: self.amount,
            description: self.description,
            category: self.category,
            transaction_date: self.transaction_date.unwrap_or(now),
            created_by: self.created_by,
            is_confidential: self.is_confidential.unwrap_or(false),
            created_at: now,
            updated_at: now,
        }
    }
}
