use barrister_core::AppError;
use barrister_core::store::Backend;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;

use crate::case_repository::CaseRepository;
use crate::config::DatabaseConfig;
use crate::settings_repository::SettingsRepository;
use crate::transaction_repository::TransactionRepository;

/// Central database facade: owns the connection pool, runs migrations,
/// and vends repository instances.
#[derive(Clone)]
pub struct Database {
    pool: PgPool,
}

impl Database {
    /// Connect to PostgreSQL with the given configuration.
    pub async fn connect(config: &DatabaseConfig) -> Result<Self, AppError> {
        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .connect(&config.url)
            .await
            .map_err(|e| AppError::DatabaseError(format!("Failed to connect: {e}")))?;

        Ok(Self { pool })
    }

    /// Create a `Database` from an existing pool (useful for testing).
    pub fn from_pool(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Run all pending migrations.
    pub async fn migrate(&self) -> Result<(), AppError> {
        sqlx::migrate!("../../migrations")
            .run(&self.pool)
            .await
            .map_err(|e| AppError::DatabaseError(format!("Migration failed: {e}")))?;
        Ok(())
    }

    /// Get a [`CaseRepository`] backed by this pool.
    pub fn case_repo(&self) -> CaseRepository {
        CaseRepository::new(self.pool.clone())
    }

    /// Get a [`TransactionRepository`] backed by this pool.
    pub fn transaction_repo(&self) -> TransactionRepository {
        TransactionRepository::new(self.pool.clone())
    }

    /// Get a [`SettingsRepository`] backed by this pool.
    pub fn settings_repo(&self) -> SettingsRepository {
        SettingsRepository::new(self.pool.clone())
    }

    /// Check database connectivity.
    pub async fn health_check(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;
        Ok(())
    }

    /// Get a reference to the underlying pool.
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

impl Backend for Database {
    type Cases = CaseRepository;
    type Transactions = TransactionRepository;
    type Settings = SettingsRepository;

    fn cases(&self) -> CaseRepository {
        self.case_repo()
    }

    fn transactions(&self) -> TransactionRepository {
        self.transaction_repo()
    }

    fn settings(&self) -> SettingsRepository {
        self.settings_repo()
    }

    async fn health_check(&self) -> Result<(), AppError> {
        Database::health_check(self).await
    }
}
