use chrono::Utc;

use crate::error::AppError;
use crate::models::{FinancialTransaction, NewTransaction, new_id};
use crate::store::TransactionStore;

/// Ledger entries. Recorded and deleted, never edited.
pub struct TransactionService<S: TransactionStore> {
    store: S,
}

impl<S: TransactionStore> TransactionService<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub async fn list(&self) -> Result<Vec<FinancialTransaction>, AppError> {
        self.store.list_transactions().await
    }

    pub async fn get(&self, id: &str) -> Result<Option<FinancialTransaction>, AppError> {
        self.store.get_transaction(id).await
    }

    pub async fn create(&self, new: NewTransaction) -> Result<String, AppError> {
        let transaction = new.into_transaction(new_id(), Utc::now());
        self.store.insert_transaction(&transaction).await?;
        tracing::info!(
            id = %transaction.id,
            kind = %transaction.kind,
            amount = %transaction.amount,
            "Transaction recorded"
        );
        Ok(transaction.id)
    }

    pub async fn delete(&self, id: &str) -> Result<(), AppError> {
        let removed = self.store.delete_transaction(id).await?;
        tracing::info!(%id, removed, "Transaction deleted");
        Ok(())
    }
}
