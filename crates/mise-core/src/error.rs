use mise_domain::{RecordId, ValueKind};
use thiserror::Error;

/// Failures raised while editing drafts or managing tasks.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CoreError {
    #[error("Invalid field path `{path}`: {reason}")]
    InvalidPath { path: String, reason: String },
    #[error("Unknown field: {0}")]
    UnknownField(String),
    #[error("Field `{path}` holds a {found}, expected a {expected}")]
    FieldKind {
        path: String,
        expected: ValueKind,
        found: ValueKind,
    },
    #[error("Field `{path}` is a {kind}; use the dedicated operation to edit it")]
    NotScalar { path: String, kind: ValueKind },
    #[error("Index {index} out of range for `{path}` ({len} entries)")]
    IndexOutOfRange {
        path: String,
        index: usize,
        len: usize,
    },
    #[error("Field `{0}` is derived and cannot be edited")]
    ReadOnlyField(String),
    #[error("Invalid value for `{path}`: {reason}")]
    InvalidValue { path: String, reason: String },
    #[error("Task not found: {0}")]
    TaskNotFound(RecordId),
}

/// Save-gate failure: one or more required fields are empty.
///
/// `message` is the user-facing text surfaced in the error notice.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ValidationError {
    pub missing: Vec<String>,
    pub message: String,
}

impl ValidationError {
    pub fn new(missing: Vec<String>, message: impl Into<String>) -> Self {
        Self {
            missing,
            message: message.into(),
        }
    }
}
