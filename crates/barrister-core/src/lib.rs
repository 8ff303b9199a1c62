pub mod error;
pub mod models;
pub mod service;
pub mod store;
pub mod validation;

#[cfg(any(test, feature = "testutil"))]
pub mod testutil;

pub use error::{AppError, FieldError};
pub use service::{CaseService, SettingsService, TransactionService};
pub use store::{Backend, CaseStore, SettingsStore, TransactionStore};
