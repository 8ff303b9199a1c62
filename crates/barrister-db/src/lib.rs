pub mod case_repository;
pub mod config;
pub mod database;
pub mod settings_repository;
pub mod transaction_repository;

pub use case_repository::CaseRepository;
pub use config::DatabaseConfig;
pub use database::Database;
pub use settings_repository::SettingsRepository;
pub use transaction_repository::TransactionRepository;
