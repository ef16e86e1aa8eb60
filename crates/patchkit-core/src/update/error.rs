use crate::value::{Value, ValueTag};
use thiserror::Error as ThisError;

///
/// UpdateError
///
/// Merge-level failures. Structural problems abort before any mutation;
/// `FieldsFailed` is the aggregate signal after a completed pass, with the
/// per-field detail in the updater's classification collections.
///

#[remain::sorted]
#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum UpdateError {
    #[error(
        "{not_found} unmatched and {not_assignable} unassignable of {total} patch fields"
    )]
    FieldsFailed {
        not_found: usize,
        not_assignable: usize,
        total: usize,
    },

    #[error("patch is not a record: {actual}")]
    NotARecord { actual: &'static str },

    #[error("patch is null")]
    NullPatch,
}

///
/// FieldError
///
/// Single-field set failures surfaced by `Record::set_value`. The update
/// engine folds these into the `NotAssignable` classification; they are
/// public because `set_value` is.
///

#[remain::sorted]
#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum FieldError {
    #[error("value with shape {actual} does not fit field `{field}`")]
    KindMismatch { field: String, actual: ValueTag },

    #[error("field `{field}` is not optional and cannot hold null")]
    UnexpectedNull { field: String },

    #[error("record has no field `{field}`")]
    UnknownField { field: String },
}

impl FieldError {
    #[must_use]
    pub fn mismatch(field: &str, value: &Value) -> Self {
        Self::KindMismatch {
            field: field.to_string(),
            actual: value.tag(),
        }
    }

    #[must_use]
    pub fn unexpected_null(field: &str) -> Self {
        Self::UnexpectedNull {
            field: field.to_string(),
        }
    }

    #[must_use]
    pub fn unknown(field: &str) -> Self {
        Self::UnknownField {
            field: field.to_string(),
        }
    }
}
