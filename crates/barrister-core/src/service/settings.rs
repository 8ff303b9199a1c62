use chrono::{DateTime, Utc};

use crate::error::AppError;
use crate::models::{FirmSettings, SettingsPatch, new_id};
use crate::store::SettingsStore;

/// Get-or-create access to the singleton firm settings row.
pub struct SettingsService<S: SettingsStore> {
    store: S,
}

impl<S: SettingsStore> SettingsService<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub async fn get(&self) -> Result<Option<FirmSettings>, AppError> {
        self.store.first_settings().await
    }

    /// Merge `patch` into the existing row, or create the row from defaults.
    ///
    /// If another writer creates the row between our read and our insert, the
    /// insert is refused by the store and the patch is merged into the winner.
    pub async fn upsert(&self, patch: SettingsPatch) -> Result<FirmSettings, AppError> {
        let now = Utc::now();

        if let Some(existing) = self.store.first_settings().await? {
            return self.merge_into(existing, patch, now).await;
        }

        let fresh = FirmSettings::from_defaults(new_id(), patch.clone(), now);
        if let Some(created) = self.store.insert_settings(&fresh).await? {
            tracing::info!(
                id = %created.id,
                firm_name = %created.firm_name,
                "Firm settings created"
            );
            return Ok(created);
        }

        tracing::warn!("Firm settings created concurrently; merging into existing row");
        let existing = self.store.first_settings().await?.ok_or_else(|| {
            AppError::DatabaseError("firm settings insert conflicted but no row exists".into())
        })?;
        self.merge_into(existing, patch, now).await
    }

    async fn merge_into(
        &self,
        existing: FirmSettings,
        patch: SettingsPatch,
        now: DateTime<Utc>,
    ) -> Result<FirmSettings, AppError> {
        let id = existing.id.clone();
        let merged = existing.merge(patch, now);
        let stored = self.store.update_settings(&merged).await?.ok_or_else(|| {
            AppError::DatabaseError(format!("firm settings row {id} disappeared during update"))
        })?;
        tracing::info!(%id, "Firm settings updated");
        Ok(stored)
    }
}
