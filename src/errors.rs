use thiserror::Error;

use crate::models::webhook::FieldType;

/// Errors raised by field lookups.
///
/// Anything short of a failed non-silent lookup (missing optional keys, null
/// values, unmatched option ids) degrades to an absent result instead of an
/// error; webhook producers are trusted but their schemas drift over time.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FieldError {
    #[error("field with label '{label}' and type '{field_type}' not found")]
    FieldNotFound {
        label: String,
        field_type: FieldType,
    },
}

impl FieldError {
    pub(crate) fn not_found(field_type: FieldType, label: &str) -> Self {
        FieldError::FieldNotFound {
            label: label.to_string(),
            field_type,
        }
    }
}
