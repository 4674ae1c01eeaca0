//! Decode failures

use serde_json::Value;
use thiserror::Error;

/// Path used for errors raised on the node being decoded itself
pub const ROOT: &str = "$";

/// Raised when a result tree does not have the shape a record expects
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    #[error("field `{field}`: expected {expected}, found {found}")]
    TypeMismatch {
        field: String,
        expected: &'static str,
        found: &'static str,
    },
    #[error("field `{field}`: {value} does not fit in {target}")]
    OutOfRange {
        field: String,
        value: String,
        target: &'static str,
    },
    #[error("field `{field}`: unknown variant `{tag}`")]
    UnknownVariant { field: String, tag: String },
    #[error("field `{field}`: {reason}")]
    InvalidValue { field: String, reason: String },
}

impl DecodeError {
    pub fn mismatch(field: &str, expected: &'static str, found: &Value) -> Self {
        DecodeError::TypeMismatch {
            field: field.to_string(),
            expected,
            found: kind_of(found),
        }
    }

    pub fn invalid(field: &str, reason: impl Into<String>) -> Self {
        DecodeError::InvalidValue {
            field: field.to_string(),
            reason: reason.into(),
        }
    }

    /// Path of the offending field, e.g. `txs[2].events[0].kind`
    pub fn field(&self) -> &str {
        match self {
            DecodeError::TypeMismatch { field, .. }
            | DecodeError::OutOfRange { field, .. }
            | DecodeError::UnknownVariant { field, .. }
            | DecodeError::InvalidValue { field, .. } => field,
        }
    }

    /// Prefix the field path with the enclosing field or array index
    pub fn within(mut self, parent: &str) -> Self {
        let field = match &mut self {
            DecodeError::TypeMismatch { field, .. }
            | DecodeError::OutOfRange { field, .. }
            | DecodeError::UnknownVariant { field, .. }
            | DecodeError::InvalidValue { field, .. } => field,
        };
        *field = if field == ROOT {
            parent.to_string()
        } else if field.starts_with('[') {
            format!("{parent}{field}")
        } else {
            format!("{parent}.{field}")
        };
        self
    }
}

/// Short name of a node's JSON type, for error messages
pub fn kind_of(node: &Value) -> &'static str {
    match node {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
