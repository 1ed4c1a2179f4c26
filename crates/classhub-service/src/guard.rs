//! Resource mutation guard.
//!
//! Checks run in a fixed order and the first failing stage ends the
//! mutation: required fields, field formats, referenced-entity existence.
//! Only then is the store written. The existence pre-check yields a
//! friendlier error; store constraints remain authoritative.

use std::future::Future;

use serde_json::Value;
use validator::{ValidateEmail, ValidateUrl};

use classhub_core::error::AppError;
use classhub_core::result::AppResult;
use classhub_database::update::parse_float;

/// Collects required fields that are absent, `null`, or blank.
#[derive(Debug, Default)]
pub struct RequiredFields {
    missing: Vec<&'static str>,
}

impl RequiredFields {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take a required text field, recording it as missing when absent or
    /// blank. The returned string is only meaningful once [`check`](Self::check)
    /// has passed.
    pub fn text(&mut self, name: &'static str, value: Option<String>) -> String {
        match value {
            Some(v) if !v.trim().is_empty() => v,
            _ => {
                self.missing.push(name);
                String::new()
            }
        }
    }

    /// Take a required field of any JSON type.
    pub fn value(&mut self, name: &'static str, value: Option<Value>) -> Value {
        match value {
            Some(Value::Null) | None => {
                self.missing.push(name);
                Value::Null
            }
            Some(Value::String(s)) if s.trim().is_empty() => {
                self.missing.push(name);
                Value::Null
            }
            Some(v) => v,
        }
    }

    /// Fail with `MissingFields` naming every missing field in the order
    /// the fields were taken.
    pub fn check(self) -> AppResult<()> {
        if self.missing.is_empty() {
            Ok(())
        } else {
            Err(AppError::missing_fields(self.missing))
        }
    }
}

/// Normalise an optional text field; blank strings become `None`.
pub fn optional_text(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// Require `value` to parse as an absolute URI.
pub fn require_absolute_uri(field: &'static str, value: &str) -> AppResult<()> {
    if value.validate_url() {
        Ok(())
    } else {
        Err(AppError::invalid_format(
            field,
            format!("Field '{field}' must be an absolute URI"),
        ))
    }
}

/// Require `value` to be a well-formed email address.
pub fn require_email(field: &'static str, value: &str) -> AppResult<()> {
    if value.validate_email() {
        Ok(())
    } else {
        Err(AppError::invalid_format(
            field,
            format!("Field '{field}' must be an email address"),
        ))
    }
}

/// Require a finite number or numeric string.
pub fn require_number(field: &'static str, value: &Value) -> AppResult<f64> {
    parse_float(value).ok_or_else(|| {
        AppError::invalid_format(field, format!("Field '{field}' must be a number"))
    })
}

/// Fail with `ReferenceNotFound` unless `exists` resolves to true.
pub async fn require_reference<F>(entity: &str, key: &str, exists: F) -> AppResult<()>
where
    F: Future<Output = AppResult<bool>>,
{
    if exists.await? {
        Ok(())
    } else {
        Err(AppError::reference_not_found(entity, key))
    }
}

/// Turn a zero affected-row count into `NotFound`.
pub fn require_affected(rows: u64, what: &str) -> AppResult<u64> {
    if rows == 0 {
        Err(AppError::not_found(format!("{what} not found")))
    } else {
        Ok(rows)
    }
}
