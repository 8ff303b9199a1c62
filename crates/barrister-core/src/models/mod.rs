//! Typed records for the three tables plus their create/patch payloads.

pub mod case;
pub mod settings;
pub mod transaction;

pub use case::{Case, CasePatch, CaseUpdate, NewCase};
pub use settings::{FirmSettings, SettingsPatch};
pub use transaction::{FinancialTransaction, NewTransaction};

/// Generate an opaque, random record identifier.
pub fn new_id() -> String {
    uuid::Uuid::new_v4().to_string()
}
