//! Partial update construction.
//!
//! A [`PartialUpdate`] turns a caller-supplied change set (a JSON object in
//! which only the fields to change are present) into an ordered list of
//! column assignments. Fields absent from the change set are never touched.
//!
//! The rendered statement contains column names and numbered placeholders
//! only; every value travels as a bound parameter.

use serde_json::{Map, Value};

use classhub_core::error::AppError;
use classhub_core::result::AppResult;
use classhub_entity::schema::{EntitySchema, FieldKind, FieldSpec, UpdatePolicy};

/// A value bound to one placeholder of an update statement.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Null,
    Text(String),
    Boolean(bool),
    Float(f64),
    Integer(i64),
    /// Arrays and objects passed through by the accept-any policy.
    Json(Value),
}

impl FieldValue {
    /// Convert a raw JSON value without schema guidance.
    fn from_json(value: &Value) -> Self {
        match value {
            Value::Null => Self::Null,
            Value::Bool(b) => Self::Boolean(*b),
            Value::Number(n) => match n.as_i64() {
                Some(i) => Self::Integer(i),
                None => Self::Float(n.as_f64().unwrap_or_default()),
            },
            Value::String(s) => Self::Text(s.clone()),
            other => Self::Json(other.clone()),
        }
    }

    /// Text content, or `None` for NULL.
    pub fn as_text(&self) -> Option<String> {
        match self {
            Self::Null => None,
            Self::Text(s) => Some(s.clone()),
            Self::Boolean(b) => Some(b.to_string()),
            Self::Float(f) => Some(f.to_string()),
            Self::Integer(i) => Some(i.to_string()),
            Self::Json(v) => Some(v.to_string()),
        }
    }
}

/// One `column = $n` assignment.
#[derive(Debug, Clone, PartialEq)]
pub struct Assignment {
    pub column: String,
    pub value: FieldValue,
}

/// An ordered, non-empty set of column assignments.
#[derive(Debug, Clone, PartialEq)]
pub struct PartialUpdate {
    assignments: Vec<Assignment>,
}

impl PartialUpdate {
    /// Build the assignments for `changes` under the schema's policy.
    ///
    /// Schema fields come first in declaration order; under
    /// [`UpdatePolicy::AcceptAnyField`] unrecognised keys follow in
    /// lexicographic order. Fails with a `NoFields` validation error when
    /// nothing would be assigned.
    pub fn build(schema: &EntitySchema, changes: &Map<String, Value>) -> AppResult<Self> {
        if changes.is_empty() {
            return Err(AppError::no_fields());
        }

        let mut assignments = Vec::with_capacity(changes.len());

        for field in schema.fields {
            if let Some(value) = changes.get(field.name) {
                assignments.push(Assignment {
                    column: field.name.to_string(),
                    value: coerce(field, value)?,
                });
            }
        }

        if schema.update_policy == UpdatePolicy::AcceptAnyField {
            let mut extra: Vec<(&String, &Value)> = changes
                .iter()
                .filter(|(key, _)| schema.field(key).is_none())
                .collect();
            extra.sort_by(|a, b| a.0.cmp(b.0));
            for (key, value) in extra {
                if schema.is_read_only(key) {
                    return Err(AppError::invalid_format(
                        key.as_str(),
                        format!("Field '{key}' cannot be updated"),
                    ));
                }
                assignments.push(Assignment {
                    column: key.clone(),
                    value: FieldValue::from_json(value),
                });
            }
        }

        if assignments.is_empty() {
            return Err(AppError::no_fields());
        }

        Ok(Self { assignments })
    }

    /// Assignments in statement order.
    pub fn assignments(&self) -> &[Assignment] {
        &self.assignments
    }

    /// Values in placeholder order.
    pub fn values(&self) -> Vec<&FieldValue> {
        self.assignments.iter().map(|a| &a.value).collect()
    }

    /// The value assigned to `column`, if it is part of this update.
    pub fn get(&self, column: &str) -> Option<&FieldValue> {
        self.assignments
            .iter()
            .find(|a| a.column == column)
            .map(|a| &a.value)
    }

    /// Render `"col" = $n, ...` starting at placeholder `$first`.
    pub fn set_clause(&self, first: usize) -> String {
        self.assignments
            .iter()
            .enumerate()
            .map(|(i, a)| format!("{} = ${}", quote_ident(&a.column), first + i))
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Full statement; the key is bound after all assignment values.
    pub fn statement(&self, schema: &EntitySchema) -> String {
        format!(
            "UPDATE {} SET {} WHERE {} = ${}",
            quote_ident(schema.table),
            self.set_clause(1),
            quote_ident(schema.key),
            self.assignments.len() + 1
        )
    }
}

/// Quote an identifier for PostgreSQL, doubling embedded quotes.
pub fn quote_ident(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}

fn coerce(field: &FieldSpec, value: &Value) -> AppResult<FieldValue> {
    if value.is_null() {
        return if field.nullable {
            Ok(FieldValue::Null)
        } else {
            Err(AppError::invalid_format(
                field.name,
                format!("Field '{}' cannot be null", field.name),
            ))
        };
    }

    match field.kind {
        FieldKind::Text => match value {
            Value::String(s) if s.is_empty() && field.nullable => Ok(FieldValue::Null),
            Value::String(s) if s.trim().is_empty() && !field.nullable => {
                Err(AppError::invalid_format(
                    field.name,
                    format!("Field '{}' cannot be blank", field.name),
                ))
            }
            Value::String(s) => Ok(FieldValue::Text(s.clone())),
            Value::Number(n) => Ok(FieldValue::Text(n.to_string())),
            Value::Bool(b) => Ok(FieldValue::Text(b.to_string())),
            _ => Err(AppError::invalid_format(
                field.name,
                format!("Field '{}' must be a string", field.name),
            )),
        },
        FieldKind::Boolean => Ok(FieldValue::Boolean(parse_flag(value))),
        FieldKind::Float => parse_float(value)
            .map(FieldValue::Float)
            .ok_or_else(|| {
                AppError::invalid_format(
                    field.name,
                    format!("Field '{}' must be a number", field.name),
                )
            }),
        FieldKind::Integer => parse_integer(value)
            .map(FieldValue::Integer)
            .ok_or_else(|| {
                AppError::invalid_format(
                    field.name,
                    format!("Field '{}' must be an integer", field.name),
                )
            }),
    }
}

/// `true` and `"true"` are true; every other value is false.
pub fn parse_flag(value: &Value) -> bool {
    match value {
        Value::Bool(b) => *b,
        Value::String(s) => s == "true",
        _ => false,
    }
}

/// Accept a JSON number or a numeric string; reject non-finite results.
pub fn parse_float(value: &Value) -> Option<f64> {
    let parsed = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }?;
    parsed.is_finite().then_some(parsed)
}

fn parse_integer(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.trim().parse::<i64>().ok(),
        _ => None,
    }
}
