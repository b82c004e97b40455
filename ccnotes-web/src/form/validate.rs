//! Field validation helpers
//!
//! Each helper records at most one error per field and returns the normalized
//! value. Input is trimmed first, so whitespace-only input counts as empty.

use ccnotes_common::time::parse_date;
use chrono::NaiveDate;

/// One validation failure on one form field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

/// Validation failures in the order they were found
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(Vec<FieldError>);

impl FieldErrors {
    pub fn add(&mut self, field: &'static str, message: impl Into<String>) {
        if self.get(field).is_none() {
            self.0.push(FieldError {
                field,
                message: message.into(),
            });
        }
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|e| e.field == field)
            .map(|e| e.message.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        self.0.iter()
    }

    /// `Ok(value)` when no errors were recorded
    pub fn into_result<T>(self, value: T) -> Result<T, FieldErrors> {
        if self.is_empty() {
            Ok(value)
        } else {
            Err(self)
        }
    }
}

/// Non-empty text after trimming
pub fn required(errors: &mut FieldErrors, field: &'static str, label: &str, raw: &str) -> String {
    let value = raw.trim();
    if value.is_empty() {
        errors.add(field, format!("The {} field is required.", label));
    }
    value.to_string()
}

/// Empty, or a `YYYY-MM-DD` date
pub fn optional_date(
    errors: &mut FieldErrors,
    field: &'static str,
    label: &str,
    raw: &str,
) -> Option<NaiveDate> {
    let value = raw.trim();
    if value.is_empty() {
        return None;
    }
    let date = parse_date(value);
    if date.is_none() {
        errors.add(
            field,
            format!("The {} field must be a date in YYYY-MM-DD format.", label),
        );
    }
    date
}

/// Empty, or a positive integer id
pub fn optional_id(
    errors: &mut FieldErrors,
    field: &'static str,
    label: &str,
    raw: &str,
) -> Option<i64> {
    let value = raw.trim();
    if value.is_empty() {
        return None;
    }
    match value.parse::<i64>() {
        Ok(id) if id > 0 => Some(id),
        _ => {
            errors.add(field, format!("The {} field must be a valid selection.", label));
            None
        }
    }
}
