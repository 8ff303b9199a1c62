use std::future::Future;

use crate::error::AppError;
use crate::models::{Case, CasePatch, FinancialTransaction, FirmSettings};

/// Persistence for the `cases` table.
pub trait CaseStore: Send + Sync + Clone {
    /// All cases, newest `created_at` first.
    fn list_cases(&self) -> impl Future<Output = Result<Vec<Case>, AppError>> + Send;

    fn get_case(&self, id: &str) -> impl Future<Output = Result<Option<Case>, AppError>> + Send;

    fn insert_case(&self, case: &Case) -> impl Future<Output = Result<(), AppError>> + Send;

    /// Write the fields present in `patch` in a single statement, leaving the
    /// other columns untouched. Returns `None` if no such row exists.
    fn update_case(
        &self,
        id: &str,
        patch: &CasePatch,
    ) -> impl Future<Output = Result<Option<Case>, AppError>> + Send;

    /// Delete by id. Returns the number of rows removed (0 or 1).
    fn delete_case(&self, id: &str) -> impl Future<Output = Result<u64, AppError>> + Send;
}

/// Persistence for the `financial_transactions` table. Rows are never updated.
pub trait TransactionStore: Send + Sync + Clone {
    /// All transactions, newest `created_at` first.
    fn list_transactions(
        &self,
    ) -> impl Future<Output = Result<Vec<FinancialTransaction>, AppError>> + Send;

    fn get_transaction(
        &self,
        id: &str,
    ) -> impl Future<Output = Result<Option<FinancialTransaction>, AppError>> + Send;

    fn insert_transaction(
        &self,
        transaction: &FinancialTransaction,
    ) -> impl Future<Output = Result<(), AppError>> + Send;

    fn delete_transaction(&self, id: &str) -> impl Future<Output = Result<u64, AppError>> + Send;
}

/// Persistence for the singleton `firm_settings` row.
pub trait SettingsStore: Send + Sync + Clone {
    /// The first settings row, if any.
    fn first_settings(
        &self,
    ) -> impl Future<Output = Result<Option<FirmSettings>, AppError>> + Send;

    /// Insert the singleton row and return it as stored.
    ///
    /// Returns `None` without writing when a settings row already exists, so
    /// two racing creators cannot both succeed.
    fn insert_settings(
        &self,
        settings: &FirmSettings,
    ) -> impl Future<Output = Result<Option<FirmSettings>, AppError>> + Send;

    /// Overwrite the stored row with the same id. Returns `None` if it vanished.
    fn update_settings(
        &self,
        settings: &FirmSettings,
    ) -> impl Future<Output = Result<Option<FirmSettings>, AppError>> + Send;
}

/// A complete storage backend: vends one store per table and can report
/// whether it is reachable.
pub trait Backend: Send + Sync + Clone + 'static {
    type Cases: CaseStore;
    type Transactions: TransactionStore;
    type Settings: SettingsStore;

    fn cases(&self) -> Self::Cases;

    fn transactions(&self) -> Self::Transactions;

    fn settings(&self) -> Self::Settings;

    fn health_check(&self) -> impl Future<Output = Result<(), AppError>> + Send;
}
