//! Translation of sqlx failures into application errors.

use classhub_core::error::{AppError, ErrorKind};

/// PostgreSQL SQLSTATE for `unique_violation`.
const UNIQUE_VIOLATION: &str = "23505";
/// PostgreSQL SQLSTATE for `foreign_key_violation`.
const FOREIGN_KEY_VIOLATION: &str = "23503";

/// A referenced row that a write depends on.
#[derive(Debug, Clone, Copy)]
pub struct Reference<'a> {
    /// Entity name reported to the caller (e.g. `course`).
    pub entity: &'a str,
    /// Key value carried by the write.
    pub key: &'a str,
}

fn sqlstate(err: &sqlx::Error) -> Option<String> {
    match err {
        sqlx::Error::Database(db_err) => db_err.code().map(|c| c.into_owned()),
        _ => None,
    }
}

/// Whether `err` is a uniqueness violation.
pub fn is_unique_violation(err: &sqlx::Error) -> bool {
    sqlstate(err).as_deref() == Some(UNIQUE_VIOLATION)
}

/// Whether `err` is a foreign key violation.
pub fn is_foreign_key_violation(err: &sqlx::Error) -> bool {
    sqlstate(err).as_deref() == Some(FOREIGN_KEY_VIOLATION)
}

/// Map a failed insert or update.
///
/// Unique violations become `Conflict` with `conflict_message`; foreign key
/// violations become `ReferenceNotFound` for `reference`; anything else is a
/// `Database` error carrying the original cause.
pub fn map_write_error(
    err: sqlx::Error,
    action: &str,
    conflict_message: &str,
    reference: Option<Reference<'_>>,
) -> AppError {
    if is_unique_violation(&err) {
        return AppError::conflict(conflict_message);
    }
    if let Some(reference) = reference.filter(|_| is_foreign_key_violation(&err)) {
        return AppError::reference_not_found(reference.entity, reference.key);
    }
    AppError::with_source(ErrorKind::Database, format!("Failed to {action}"), err)
}

/// Map a failed read or delete.
pub fn map_read_error(err: sqlx::Error, action: &str) -> AppError {
    AppError::with_source(ErrorKind::Database, format!("Failed to {action}"), err)
}
