//! Test utilities: an in-memory [`Backend`] with the same semantics as the
//! PostgreSQL repositories.
//!
//! State lives behind `Arc<Mutex<_>>` so clones share the same tables and tests
//! can inspect what handlers wrote.

use std::sync::{Arc, Mutex};

use chrono::{DateTime, Utc};

use crate::error::AppError;
use crate::models::{Case, CasePatch, FinancialTransaction, FirmSettings};
use crate::store::{Backend, CaseStore, SettingsStore, TransactionStore};

#[derive(Default)]
struct Tables {
    cases: Vec<Case>,
    transactions: Vec<FinancialTransaction>,
    settings: Vec<FirmSettings>,
}

/// In-memory store implementing every store trait.
#[derive(Clone, Default)]
pub struct MemoryStore {
    tables: Arc<Mutex<Tables>>,
    /// When set, every operation fails with this database error.
    failure: Option<String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store whose every call fails, for exercising error paths.
    pub fn failing(message: &str) -> Self {
        Self {
            tables: Arc::default(),
            failure: Some(message.to_string()),
        }
    }

    /// Number of settings rows currently stored.
    pub fn settings_rows(&self) -> usize {
        self.tables.lock().unwrap().settings.len()
    }

    fn check(&self) -> Result<(), AppError> {
        match &self.failure {
            Some(message) => Err(AppError::DatabaseError(message.clone())),
            None => Ok(()),
        }
    }
}

/// Newest first; among equal timestamps the later insert wins.
fn newest_first<T: Clone>(rows: &[T], created_at: impl Fn(&T) -> DateTime<Utc>) -> Vec<T> {
    let mut rows: Vec<T> = rows.iter().rev().cloned().collect();
    rows.sort_by(|a, b| created_at(b).cmp(&created_at(a)));
    rows
}

impl CaseStore for MemoryStore {
    async fn list_cases(&self) -> Result<Vec<Case>, AppError> {
        self.check()?;
        let tables = self.tables.lock().unwrap();
        Ok(newest_first(&tables.cases, |c| c.created_at))
    }

    async fn get_case(&self, id: &str) -> Result<Option<Case>, AppError> {
        self.check()?;
        let tables = self.tables.lock().unwrap();
        Ok(tables.cases.iter().find(|c| c.id == id).cloned())
    }

    async fn insert_case(&self, case: &Case) -> Result<(), AppError> {
        self.check()?;
        let mut tables = self.tables.lock().unwrap();
        if tables.cases.iter().any(|c| c.id == case.id) {
            return Err(AppError::DatabaseError(format!(
                "duplicate key value violates unique constraint \"cases_pkey\": {}",
                case.id
            )));
        }
        tables.cases.push(case.clone());
        Ok(())
    }

    async fn update_case(&self, id: &str, patch: &CasePatch) -> Result<Option<Case>, AppError> {
        self.check()?;
        let mut tables = self.tables.lock().unwrap();
        Ok(tables.cases.iter_mut().find(|c| c.id == id).map(|row| {
            *row = row.clone().apply(patch.clone());
            row.clone()
        }))
    }

    async fn delete_case(&self, id: &str) -> Result<u64, AppError> {
        self.check()?;
        let mut tables = self.tables.lock().unwrap();
        let before = tables.cases.len();
        tables.cases.retain(|c| c.id != id);
        Ok((before - tables.cases.len()) as u64)
    }
}

impl TransactionStore for MemoryStore {
    async fn list_transactions(&self) -> Result<Vec<FinancialTransaction>, AppError> {
        self.check()?;
        let tables = self.tables.lock().unwrap();
        Ok(newest_first(&tables.transactions, |t| t.created_at))
    }

    async fn get_transaction(
        &self,
        id: &str,
    ) -> Result<Option<FinancialTransaction>, AppError> {
        self.check()?;
        let tables = self.tables.lock().unwrap();
        Ok(tables.transactions.iter().find(|t| t.id == id).cloned())
    }

    async fn insert_transaction(
        &self,
        transaction: &FinancialTransaction,
    ) -> Result<(), AppError> {
        self.check()?;
        let mut tables = self.tables.lock().unwrap();
        if tables.transactions.iter().any(|t| t.id == transaction.id) {
            return Err(AppError::DatabaseError(format!(
                "duplicate key value violates unique constraint \"financial_transactions_pkey\": {}",
                transaction.id
            )));
        }
        tables.transactions.push(transaction.clone());
        Ok(())
    }

    async fn delete_transaction(&self, id: &str) -> Result<u64, AppError> {
        self.check()?;
        let mut tables = self.tables.lock().unwrap();
        let before = tables.transactions.len();
        tables.transactions.retain(|t| t.id != id);
        Ok((before - tables.transactions.len()) as u64)
    }
}

impl SettingsStore for MemoryStore {
    async fn first_settings(&self) -> Result<Option<FirmSettings>, AppError> {
        self.check()?;
        let tables = self.tables.lock().unwrap();
        Ok(tables.settings.first().cloned())
    }

    async fn insert_settings(
        &self,
        settings: &FirmSettings,
    ) -> Result<Option<FirmSettings>, AppError> {
        self.check()?;
        let mut tables = self.tables.lock().unwrap();
        if !tables.settings.is_empty() {
            return Ok(None);
        }
        tables.settings.push(settings.clone());
        Ok(Some(settings.clone()))
    }

    async fn update_settings(
        &self,
        settings: &FirmSettings,
    ) -> Result<Option<FirmSettings>, AppError> {
        self.check()?;
        let mut tables = self.tables.lock().unwrap();
        Ok(tables
            .settings
            .iter_mut()
            .find(|s| s.id == settings.id)
            .map(|row| {
                *row = settings.clone();
                row.clone()
            }))
    }
}

impl Backend for MemoryStore {
    type Cases = MemoryStore;
    type Transactions = MemoryStore;
    type Settings = MemoryStore;

    fn cases(&self) -> MemoryStore {
        self.clone()
    }

    fn transactions(&self) -> MemoryStore {
        self.clone()
    }

    fn settings(&self) -> MemoryStore {
        self.clone()
    }

    async fn health_check(&self) -> Result<(), AppError> {
        self.check()
    }
}
