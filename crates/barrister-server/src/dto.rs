use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;

use barrister_core::FieldError;
use barrister_core::models::{Case, FinancialTransaction, FirmSettings};

// ---------------------------------------------------------------------------
// Shared
// ---------------------------------------------------------------------------

/// `?id=` selector used by GET (optional) and DELETE (required).
#[derive(Debug, Default, utoipa::IntoParams)]
#[into_params(parameter_in = Query)]
pub struct IdQuery {
    /// Row id. Empty counts as absent.
    pub id: Option<String>,
}

impl IdQuery {
    /// Read `id` from a raw query string. When the key repeats, the first
    /// occurrence wins.
    pub fn from_raw(query: Option<&str>) -> Self {
        let id = query.and_then(|q| {
            url::form_urlencoded::parse(q.as_bytes())
                .find(|(key, _)| key == "id")
                .map(|(_, value)| value.into_owned())
        });
        Self { id }
    }

    pub fn id(self) -> Option<String> {
        self.id.filter(|id| !id.is_empty())
    }
}

#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct CreatedResponse {
    pub ok: bool,
    pub id: String,
}

impl CreatedResponse {
    pub fn new(id: String) -> Self {
        Self { ok: true, id }
    }
}

#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct OkResponse {
    pub ok: bool,
}

#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

/// One failed field constraint.
#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct Violation {
    pub code: String,
    pub path: Vec<String>,
    pub message: String,
}

impl From<&FieldError> for Violation {
    fn from(err: &FieldError) -> Self {
        Self {
            code: err.code.clone(),
            path: err.path.clone(),
            message: err.message.clone(),
        }
    }
}

#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct ValidationErrorResponse {
    pub error: Vec<Violation>,
}

#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct HealthResponse {
    pub status: &'static str,
    pub database: &'static str,
}

// ---------------------------------------------------------------------------
// Cases
// ---------------------------------------------------------------------------

#[derive(Debug, utoipa::ToSchema)]
#[schema(rename_all = "camelCase")]
pub struct CreateCaseRequest {
    pub case_number: String,
    pub title: String,
    pub client_name: String,
    pub description: Option<String>,
    pub status: Option<String>,
    pub assigned_lawyer_id: Option<String>,
    /// Date-time, date-only string, or epoch milliseconds.
    pub start_date: Option<DateTime<Utc>>,
    pub expected_end_date: Option<DateTime<Utc>>,
    pub actual_end_date: Option<DateTime<Utc>>,
}

#[derive(Debug, utoipa::ToSchema)]
#[schema(rename_all = "camelCase")]
pub struct UpdateCaseRequest {
    pub id: String,
    pub case_number: Option<String>,
    pub title: Option<String>,
    pub client_name: Option<String>,
    pub description: Option<String>,
    pub status: Option<String>,
    pub assigned_lawyer_id: Option<String>,
    pub start_date: Option<DateTime<Utc>>,
    pub expected_end_date: Option<DateTime<Utc>>,
    pub actual_end_date: Option<DateTime<Utc>>,
}

#[derive(Debug, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CaseResponse {
    pub id: String,
    pub case_number: String,
    pub title: String,
    pub description: Option<String>,
    pub status: String,
    pub assigned_lawyer_id: Option<String>,
    pub client_name: String,
    pub start_date: Option<DateTime<Utc>>,
    pub expected_end_date: Option<DateTime<Utc>>,
    pub actual_end_date: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl From<Case> for CaseResponse {
    fn from(case: Case) -> Self {
        Self {
            id: case.id,
            case_number: case.case_number,
            title: case.title,
            description: case.description,
            status: case.status,
            assigned_lawyer_id: case.assigned_lawyer_id,
            client_name: case.client_name,
            start_date: case.start_date,
            expected_end_date: case.expected_end_date,
            actual_end_date: case.actual_end_date,
            created_at: case.created_at,
        }
    }
}

/// `GET /cases` body: every case, or one case (`null` if unknown) when `id` is given.
#[derive(Debug, Serialize, utoipa::ToSchema)]
#[serde(untagged)]
pub enum CaseLookup {
    All(Vec<CaseResponse>),
    One(Option<CaseResponse>),
}

// ---------------------------------------------------------------------------
// Financial transactions
// ---------------------------------------------------------------------------

#[derive(Debug, utoipa::ToSchema)]
#[schema(rename_all = "camelCase")]
pub struct CreateTransactionRequest {
    #[schema(rename = "type")]
    pub kind: String,
    pub amount: f64,
    pub description: Option<String>,
    pub category: Option<String>,
    pub transaction_date: Option<DateTime<Utc>>,
    pub created_by: Option<String>,
    pub is_confidential: Option<bool>,
}

#[derive(Debug, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TransactionResponse {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: String,
    /// Decimal string with two fraction digits.
    pub amount: Decimal,
    pub description: Option<String>,
    pub category: Option<String>,
    pub transaction_date: DateTime<Utc>,
    pub created_by: Option<String>,
    pub is_confidential: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<FinancialTransaction> for TransactionResponse {
    fn from(tx: FinancialTransaction) -> Self {
        Self {
            id: tx.id,
            kind: tx.kind,
            amount: tx.amount,
            description: tx.description,
            category: tx.category,
            transaction_date: tx.transaction_date,
            created_by: tx.created_by,
            is_confidential: tx.is_confidential,
            created_at: tx.created_at,
            updated_at: tx.updated_at,
        }
    }
}

/// `GET /financial` body: every transaction, or one (`null` if unknown) when `id` is given.
#[derive(Debug, Serialize, utoipa::ToSchema)]
#[serde(untagged)]
pub enum TransactionLookup {
    All(Vec<TransactionResponse>),
    One(Option<TransactionResponse>),
}

// ---------------------------------------------------------------------------
// Firm settings
// ---------------------------------------------------------------------------

#[derive(Debug, utoipa::ToSchema)]
#[schema(rename_all = "camelCase")]
pub struct SettingsRequest {
    pub firm_name: Option<String>,
    pub logo_url: Option<String>,
    pub logo_type: Option<String>,
    pub logo_text: Option<String>,
    pub primary_color: Option<String>,
    pub secondary_color: Option<String>,
}

#[derive(Debug, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SettingsResponse {
    pub id: String,
    pub firm_name: String,
    pub logo_url: Option<String>,
    pub logo_type: String,
    pub logo_text: String,
    pub primary_color: String,
    pub secondary_color: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<FirmSettings> for SettingsResponse {
    fn from(settings: FirmSettings) -> Self {
        Self {
            id: settings.id,
            firm_name: settings.firm_name,
            logo_url: settings.logo_url,
            logo_type: settings.logo_type,
            logo_text: settings.logo_text,
            primary_color: settings.primary_color,
            secondary_color: settings.secondary_color,
            created_at: settings.created_at,
            updated_at: settings.updated_at,
        }
    }
}
