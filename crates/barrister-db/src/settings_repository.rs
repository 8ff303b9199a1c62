use barrister_core::error::AppError;
use barrister_core::models::FirmSettings;
use barrister_core::store::SettingsStore;
use chrono::{DateTime, Utc};
use sqlx::{PgPool, Pool, Postgres};

/// Repository for the singleton `firm_settings` row.
///
/// The table carries a unique index over a constant, so PostgreSQL itself
/// refuses a second row; `insert_settings` turns that refusal into `None`.
#[derive(Clone)]
pub struct SettingsRepository {
    pool: Pool<Postgres>,
}

impl SettingsRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

// -- Internal row type for sqlx deserialization --

#[derive(sqlx::FromRow)]
struct SettingsRow {
    id: String,
    firm_name: String,
    logo_url: Option<String>,
    logo_type: String,
    logo_text: String,
    primary_color: String,
    secondary_color: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<SettingsRow> for FirmSettings {
    fn from(row: SettingsRow) -> Self {
        FirmSettings {
            id: row.id,
            firm_name: row.firm_name,
            logo_url: row.logo_url,
            logo_type: row.logo_type,
            logo_text: row.logo_text,
            primary_color: row.primary_color,
            secondary_color: row.secondary_color,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

impl SettingsStore for SettingsRepository {
    async fn first_settings(&self) -> Result<Option<FirmSettings>, AppError> {
        let row = sqlx::query_as::<_, SettingsRow>(
            r#"SELECT * FROM firm_settings ORDER BY created_at ASC LIMIT 1"#,
        )
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(row.map(Into::into))
    }

    async fn insert_settings(
        &self,
        settings: &FirmSettings,
    ) -> Result<Option<FirmSettings>, AppError> {
        let row = sqlx::query_as::<_, SettingsRow>(
            r#"
            INSERT INTO firm_settings (
                id, firm_name, logo_url, logo_type, logo_text,
                primary_color, secondary_color, created_at, updated_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            ON CONFLICT DO NOTHING
            RETURNING *
            "#,
        )
        .bind(&settings.id)
        .bind(&settings.firm_name)
        .bind(&settings.logo_url)
        .bind(&settings.logo_type)
        .bind(&settings.logo_text)
        .bind(&settings.primary_color)
        .bind(&settings.secondary_color)
        .bind(settings.created_at)
        .bind(settings.updated_at)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        if row.is_none() {
            tracing::debug!(id = %settings.id, "Settings insert skipped: row already exists");
        }
        Ok(row.map(Into::into))
    }

    async fn update_settings(
        &self,
        settings: &FirmSettings,
    ) -> Result<Option<FirmSettings>, AppError> {
        let row = sqlx::query_as::<_, SettingsRow>(
            r#"
            UPDATE firm_settings
            SET firm_name = $2, logo_url = $3, logo_type = $4, logo_text = $5,
                primary_color = $6, secondary_color = $7, updated_at = $8
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(&settings.id)
        .bind(&settings.firm_name)
        .bind(&settings.logo_url)
        .bind(&settings.logo_type)
        .bind(&settings.logo_text)
        .bind(&settings.primary_color)
        .bind(&settings.secondary_color)
        .bind(settings.updated_at)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(row.map(Into::into))
    }
}
