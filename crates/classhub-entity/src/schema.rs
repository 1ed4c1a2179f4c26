//! Field descriptors and update policies for partially updatable entities.
//!
//! The partial update builder consults an [`EntitySchema`] to decide which
//! request keys become assignments, in which order, and how each value is
//! coerced before it is bound as a parameter.

use serde::{Deserialize, Serialize};

/// Storage type of an updatable column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Free text.
    Text,
    /// Boolean flag; accepts `true` or the string `"true"`.
    Boolean,
    /// Floating-point number; accepts numbers or numeric strings.
    Float,
    /// Integer.
    Integer,
}

/// One updatable column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    /// Column name.
    pub name: &'static str,
    /// Storage type.
    pub kind: FieldKind,
    /// Whether the column may hold NULL.
    pub nullable: bool,
}

impl FieldSpec {
    /// A NOT NULL column.
    pub const fn required(name: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            kind,
            nullable: false,
        }
    }

    /// A nullable column.
    pub const fn optional(name: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            kind,
            nullable: true,
        }
    }
}

/// How a partial update treats the keys of a change set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UpdatePolicy {
    /// Only schema fields are considered; other keys are ignored. An explicit
    /// `null` (or empty string) on a nullable field is stored as NULL.
    Whitelist,
    /// Every key becomes an assignment. Unknown keys are passed through as
    /// column names and rejected by the store if no such column exists.
    AcceptAnyField,
}

/// Describes the updatable surface of one table.
#[derive(Debug, Clone, Copy)]
pub struct EntitySchema {
    /// Human-readable entity name used in error messages.
    pub entity: &'static str,
    /// Table name.
    pub table: &'static str,
    /// Natural or surrogate key column.
    pub key: &'static str,
    /// Updatable columns in declaration order.
    pub fields: &'static [FieldSpec],
    /// Columns no change set may assign, whatever the policy.
    pub read_only: &'static [&'static str],
    /// Policy applied to change sets.
    pub update_policy: UpdatePolicy,
}

impl EntitySchema {
    /// Look up a field by column name.
    pub fn field(&self, name: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Whether `name` is a column updates must never touch.
    pub fn is_read_only(&self, name: &str) -> bool {
        self.read_only.contains(&name)
    }
}
