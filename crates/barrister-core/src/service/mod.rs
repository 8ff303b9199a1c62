//! Per-resource services. Each one is generic over its store trait so the
//! same logic runs against PostgreSQL or the in-memory store.

pub mod cases;
pub mod financial;
pub mod settings;

pub use cases::CaseService;
pub use financial::TransactionService;
pub use settings::SettingsService;
