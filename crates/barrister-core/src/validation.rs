//! Field-by-field validation of JSON request bodies.
//!
//! A [`FieldReader`] pulls typed values out of a JSON object and records every
//! violation it meets instead of stopping at the first one, so a client gets
//! the complete list in a single 400 response.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use rust_decimal::{Decimal, RoundingStrategy};
use serde_json::{Map, Value};

use crate::error::{AppError, FieldError};

/// Digits allowed before the decimal point in a `NUMERIC(15, 2)` column.
const AMOUNT_INTEGER_DIGITS: u32 = 13;

/// Length limit for `TEXT` columns.
pub const UNBOUNDED: usize = usize::MAX;

pub struct FieldReader<'a> {
    body: Option<&'a Map<String, Value>>,
    errors: Vec<FieldError>,
}

impl<'a> FieldReader<'a> {
    /// Start reading `body`. A non-object body is itself a violation.
    pub fn new(body: &'a Value) -> Self {
        match body {
            Value::Object(map) => Self {
                body: Some(map),
                errors: Vec::new(),
            },
            other => Self {
                body: None,
                errors: vec![FieldError::new(
                    "invalid_type",
                    "",
                    format!("Expected object, received {}", type_name(other)),
                )],
            },
        }
    }

    fn get(&self, field: &str) -> Option<&'a Value> {
        self.body.and_then(|map| map.get(field))
    }

    fn push(&mut self, code: &str, field: &str, message: impl Into<String>) {
        self.errors.push(FieldError::new(code, field, message));
    }

    fn mismatch(&mut self, field: &str, expected: &str, got: &Value) {
        self.push(
            "invalid_type",
            field,
            format!("Expected {expected}, received {}", type_name(got)),
        );
    }

    /// A string that must be present.
    pub fn required_string(&mut self, field: &str, max_len: usize) -> Option<String> {
        if self.body.is_some() && self.get(field).is_none() {
            self.push("invalid_type", field, "Required");
            return None;
        }
        self.optional_string(field, max_len)
    }

    pub fn optional_string(&mut self, field: &str, max_len: usize) -> Option<String> {
        let value = self.get(field)?;
        let Value::String(s) = value else {
            self.mismatch(field, "string", value);
            return None;
        };
        if s.chars().count() > max_len {
            self.push(
                "too_big",
                field,
                format!("String must contain at most {max_len} character(s)"),
            );
            return None;
        }
        Some(s.clone())
    }

    /// An optional string that must parse as an absolute URL.
    pub fn optional_url(&mut self, field: &str, max_len: usize) -> Option<String> {
        let s = self.optional_string(field, max_len)?;
        if url::Url::parse(&s).is_err() {
            self.push("invalid_string", field, "Invalid url");
            return None;
        }
        Some(s)
    }

    pub fn optional_bool(&mut self, field: &str) -> Option<bool> {
        let value = self.get(field)?;
        match value {
            Value::Bool(b) => Some(*b),
            other => {
                self.mismatch(field, "boolean", other);
                None
            }
        }
    }

    /// An optional timestamp, coerced from a date string or epoch milliseconds.
    pub fn optional_datetime(&mut self, field: &str) -> Option<DateTime<Utc>> {
        let value = self.get(field)?;
        let parsed = match value {
            Value::String(s) => parse_datetime(s),
            Value::Number(n) => n
                .as_i64()
                .or_else(|| n.as_f64().filter(|f| f.is_finite()).map(|f| f as i64))
                .and_then(DateTime::<Utc>::from_timestamp_millis),
            other => {
                self.mismatch(field, "date", other);
                return None;
            }
        };
        if parsed.is_none() {
            self.push("invalid_date", field, "Invalid date");
        }
        parsed
    }

    /// A required monetary amount, rounded to two decimal places.
    pub fn required_amount(&mut self, field: &str) -> Option<Decimal> {
        let Some(value) = self.get(field) else {
            if self.body.is_some() {
                self.push("invalid_type", field, "Required");
            }
            return None;
        };
        let Value::Number(n) = value else {
            self.mismatch(field, "number", value);
            return None;
        };
        let amount = parse_amount(&n.to_string());
        if amount.is_none() {
            self.push("too_big", field, "Number must fit NUMERIC(15, 2)");
        }
        amount
    }

    /// Fail with every recorded violation, if any.
    pub fn finish(self) -> Result<(), AppError> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(AppError::Validation(self.errors))
        }
    }
}

/// Parse a date the way clients send them: RFC 3339, a naive
/// timestamp (read as UTC), or a bare date (UTC midnight).
pub fn parse_datetime(input: &str) -> Option<DateTime<Utc>> {
    let input = input.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(input) {
        return Some(dt.with_timezone(&Utc));
    }
    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(input, format) {
            return Some(naive.and_utc());
        }
    }
    NaiveDate::parse_from_str(input, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

/// Parse a JSON number literal into a `NUMERIC(15, 2)` value.
///
/// Rounds half away from zero, as PostgreSQL does when it coerces to the
/// column scale.
pub fn parse_amount(literal: &str) -> Option<Decimal> {
    let raw = literal
        .parse::<Decimal>()
        .ok()
        .or_else(|| Decimal::from_scientific(literal).ok())?;
    let mut amount = raw.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    let limit = Decimal::from(10i64.pow(AMOUNT_INTEGER_DIGITS));
    if amount.abs() >= limit {
        return None;
    }
    amount.rescale(2);
    Some(amount)
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
