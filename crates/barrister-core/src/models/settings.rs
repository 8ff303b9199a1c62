use chrono::{DateTime, Utc};
use serde_json::Value;

use crate::error::AppError;
use crate::validation::FieldReader;

pub const DEFAULT_FIRM_NAME: &str = "ALSO & PARTNERS";
pub const DEFAULT_LOGO_TYPE: &str = "text";
pub const DEFAULT_LOGO_TEXT: &str = "A&P";
pub const DEFAULT_PRIMARY_COLOR: &str = "#1e40af";
pub const DEFAULT_SECONDARY_COLOR: &str = "#dc2626";

const FIRM_NAME_MAX: usize = 255;
const LOGO_URL_MAX: usize = 500;
const LOGO_TYPE_MAX: usize = 50;
const LOGO_TEXT_MAX: usize = 10;
const COLOR_MAX: usize = 7;

/// The firm-wide branding row. At most one exists.
#[derive(Debug, Clone, PartialEq)]
pub struct FirmSettings {
    pub id: String,
    pub firm_name: String,
    pub logo_url: Option<String>,
    /// `text` or `image`.
    pub logo_type: String,
    pub logo_text: String,
    pub primary_color: String,
    pub secondary_color: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl FirmSettings {
    /// Build the first settings row, filling gaps in `patch` with defaults.
    pub fn from_defaults(id: String, patch: SettingsPatch, now: DateTime<Utc>) -> Self {
        Self {
            id,
            firm_name: patch
                .firm_name
                .unwrap_or_else(|| DEFAULT_FIRM_NAME.to_string()),
            logo_url: patch.logo_url,
            logo_type: patch
                .logo_type
                .unwrap_or_else(|| DEFAULT_LOGO_TYPE.to_string()),
            logo_text: patch
                .logo_text
                .unwrap_or_else(|| DEFAULT_LOGO_TEXT.to_string()),
            primary_color: patch
                .primary_color
                .unwrap_or_else(|| DEFAULT_PRIMARY_COLOR.to_string()),
            secondary_color: patch
                .secondary_color
                .unwrap_or_else(|| DEFAULT_SECONDARY_COLOR.to_string()),
            created_at: now,
            updated_at: now,
        }
    }

    /// Merge `patch` over this row and bump `updated_at`.
    pub fn merge(self, patch: SettingsPatch, now: DateTime<Utc>) -> Self {
        Self {
            id: self.id,
            firm_name: patch.firm_name.unwrap_or(self.firm_name),
            logo_url: patch.logo_url.or(self.logo_url),
            logo_type: patch.logo_type.unwrap_or(self.logo_type),
            logo_text: patch.logo_text.unwrap_or(self.logo_text),
            primary_color: patch.primary_color.unwrap_or(self.primary_color),
            secondary_color: patch.secondary_color.unwrap_or(self.secondary_color),
            created_at: self.created_at,
            updated_at: now,
        }
    }
}

/// Any subset of the settings fields.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SettingsPatch {
    pub firm_name: Option<String>,
    pub logo_url: Option<String>,
    pub logo_type: Option<String>,
    pub logo_text: Option<String>,
    pub primary_color: Option<String>,
    pub secondary_color: Option<String>,
}

impl SettingsPatch {
    pub fn from_json(body: &Value) -> Result<Self, AppError> {
        let mut reader = FieldReader::new(body);
        let patch = Self {
            firm_name: reader.optional_string("firmName", FIRM_NAME_MAX),
            logo_url: reader.optional_url("logoUrl", LOGO_URL_MAX),
            logo_type: reader.optional_string("logoType", LOGO_TYPE_MAX),
            logo_text: reader.optional_string("logoText", LOGO_TEXT_MAX),
            primary_color: reader.optional_string("primaryColor", COLOR_MAX),
            secondary_color: reader.optional_string("secondaryColor", COLOR_MAX),
        };
        reader.finish()?;
        Ok(patch)
    }
}
