use chrono::{DateTime, Utc};
use serde_json::Value;

use crate::error::AppError;
use crate::validation::{FieldReader, UNBOUNDED};

/// Status given to a case created without one.
pub const DEFAULT_CASE_STATUS: &str = "active";

const CASE_NUMBER_MAX: usize = 100;
const TITLE_MAX: usize = 255;
const STATUS_MAX: usize = 50;
const CLIENT_NAME_MAX: usize = 255;

/// A legal case as stored in the `cases` table.
#[derive(Debug, Clone, PartialEq)]
pub struct Case {
    pub id: String,
    pub case_number: String,
    pub title: String,
    pub description: Option<String>,
    pub status: String,
    /// Free reference to a lawyer; not enforced against any other table.
    pub assigned_lawyer_id: Option<String>,
    pub client_name: String,
    pub start_date: Option<DateTime<Utc>>,
    pub expected_end_date: Option<DateTime<Utc>>,
    pub actual_end_date: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl Case {
    /// Return a copy of this case with every field present in `patch` overwritten.
    pub fn apply(self, patch: CasePatch) -> Case {
        Case {
            id: self.id,
            case_number: patch.case_number.unwrap_or(self.case_number),
            title: patch.title.unwrap_or(self.title),
            description: patch.description.or(self.description),
            status: patch.status.unwrap_or(self.status),
            assigned_lawyer_id: patch.assigned_lawyer_id.or(self.assigned_lawyer_id),
            client_name: patch.client_name.unwrap_or(self.client_name),
            start_date: patch.start_date.or(self.start_date),
            expected_end_date: patch.expected_end_date.or(self.expected_end_date),
            actual_end_date: patch.actual_end_date.or(self.actual_end_date),
            created_at: self.created_at,
        }
    }
}

/// Validated payload for creating a case.
#[derive(Debug, Clone, PartialEq)]
pub struct NewCase {
    pub case_number: String,
    pub title: String,
    pub description: Option<String>,
    pub status: Option<String>,
    pub assigned_lawyer_id: Option<String>,
    pub client_name: String,
    pub start_date: Option<DateTime<Utc>>,
    pub expected_end_date: Option<DateTime<Utc>>,
    pub actual_end_date: Option<DateTime<Utc>>,
}

impl NewCase {
    pub fn from_json(body: &Value) -> Result<Self, AppError> {
        let mut reader = FieldReader::new(body);
        let case_number = reader.required_string("caseNumber", CASE_NUMBER_MAX);
        let title = reader.required_string("title", TITLE_MAX);
        let client_name = reader.required_string("clientName", CLIENT_NAME_MAX);
        let optional = read_optional_fields(&mut reader);
        reader.finish()?;

        // Required fields are always present once `finish` has succeeded.
        Ok(Self {
            case_number: case_number.unwrap_or_default(),
            title: title.unwrap_or_default(),
            description: optional.description,
            status: optional.status,
            assigned_lawyer_id: optional.assigned_lawyer_id,
            client_name: client_name.unwrap_or_default(),
            start_date: optional.start_date,
            expected_end_date: optional.expected_end_date,
            actual_end_date: optional.actual_end_date,
        })
    }

    pub fn into_case(self, id: String, created_at: DateTime<Utc>) -> Case {
        Case {
            id,
            case_number: self.case_number,
            title: self.title,
            description: self.description,
            status: self
                .status
                .unwrap_or_else(|| DEFAULT_CASE_STATUS.to_string()),
            assigned_lawyer_id: self.assigned_lawyer_id,
            client_name: self.client_name,
            start_date: self.start_date,
            expected_end_date: self.expected_end_date,
            actual_end_date: self.actual_end_date,
            created_at,
        }
    }
}

/// Partial update for a case. `None` means "leave unchanged".
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CasePatch {
    pub case_number: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub status: Option<String>,
    pub assigned_lawyer_id: Option<String>,
    pub client_name: Option<String>,
    pub start_date: Option<DateTime<Utc>>,
    pub expected_end_date: Option<DateTime<Utc>>,
    pub actual_end_date: Option<DateTime<Utc>>,
}

/// Validated payload for `PUT /cases`: the target id plus the patch.
#[derive(Debug, Clone, PartialEq)]
pub struct CaseUpdate {
    pub id: String,
    pub patch: CasePatch,
}

impl CaseUpdate {
    pub fn from_json(body: &Value) -> Result<Self, AppError> {
        let mut reader = FieldReader::new(body);
        let id = reader.required_string("id", UNBOUNDED);
        let case_number = reader.optional_string("caseNumber", CASE_NUMBER_MAX);
        let title = reader.optional_string("title", TITLE_MAX);
        let client_name = reader.optional_string("clientName", CLIENT_NAME_MAX);
        let optional = read_optional_fields(&mut reader);
        reader.finish()?;

        Ok(Self {
            id: id.unwrap_or_default(),
            patch: CasePatch {
                case_number,
                title,
                description: optional.description,
                status: optional.status,
                assigned_lawyer_id: optional.assigned_lawyer_id,
                client_name,
                start_date: optional.start_date,
                expected_end_date: optional.expected_end_date,
                actual_end_date: optional.actual_end_date,
            },
        })
    }
}

struct OptionalCaseFields {
    description: Option<String>,
    status: Option<String>,
    assigned_lawyer_id: Option<String>,
    start_date: Option<DateTime<Utc>>,
    expected_end_date: Option<DateTime<Utc>>,
    actual_end_date: Option<DateTime<Utc>>,
}

fn read_optional_fields(reader: &mut FieldReader<'_>) -> OptionalCaseFields {
    OptionalCaseFields {
        description: reader.optional_string("description", UNBOUNDED),
        status: reader.optional_string("status", STATUS_MAX),
        assigned_lawyer_id: reader.optional_string("assignedLawyerId", UNBOUNDED),
        start_date: reader.optional_datetime("startDate"),
        expected_end_date: reader.optional_datetime("expectedEndDate"),
        actual_end_date: reader.optional_datetime("actualEndDate"),
    }
}
