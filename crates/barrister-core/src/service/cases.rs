use chrono::Utc;

use crate::error::AppError;
use crate::models::{Case, CaseUpdate, NewCase, new_id};
use crate::store::CaseStore;

/// List/get/create/update/delete for legal cases.
pub struct CaseService<S: CaseStore> {
    store: S,
}

impl<S: CaseStore> CaseService<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// All cases, newest first.
    pub async fn list(&self) -> Result<Vec<Case>, AppError> {
        self.store.list_cases().await
    }

    pub async fn get(&self, id: &str) -> Result<Option<Case>, AppError> {
        self.store.get_case(id).await
    }

    /// Store a new case and return its generated id.
    pub async fn create(&self, new: NewCase) -> Result<String, AppError> {
        let case = new.into_case(new_id(), Utc::now());
        self.store.insert_case(&case).await?;
        tracing::info!(id = %case.id, case_number = %case.case_number, "Case created");
        Ok(case.id)
    }

    /// Apply a partial update and return the row as stored afterwards.
    ///
    /// Returns `None` when no case has the given id.
    pub async fn update(&self, update: CaseUpdate) -> Result<Option<Case>, AppError> {
        let updated = self.store.update_case(&update.id, &update.patch).await?;
        match &updated {
            Some(_) => tracing::info!(id = %update.id, "Case updated"),
            None => tracing::debug!(id = %update.id, "Update for unknown case ignored"),
        }
        Ok(updated)
    }

    /// Delete by id. Unknown ids are not an error.
    pub async fn delete(&self, id: &str) -> Result<(), AppError> {
        let removed = self.store.delete_case(id).await?;
        tracing::info!(%id, removed, "Case deleted");
        Ok(())
    }
}
