use std::collections::HashMap;

use serde_json::Value;
use tracing::{debug, warn};

use crate::errors::FieldError;
use crate::models::webhook::{FieldRecord, FieldType, FileMetadata, WebhookDocument};

/// A decoded field value.
///
/// The shape depends on the field type: choice-like fields and checkbox
/// groups resolve to option display texts, file uploads to their metadata
/// list, and everything else passes the raw JSON value through unmodified.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    /// Raw scalar payload (text, number, hidden, email, phone, textarea,
    /// link, date, time).
    Raw(Value),
    /// Option display texts for choice-like fields and checkbox groups.
    Texts(Vec<String>),
    /// File metadata for file-upload fields.
    Files(Vec<FileMetadata>),
}

impl FieldValue {
    /// The value as a string slice, if it is a raw string scalar.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            FieldValue::Raw(value) => value.as_str(),
            _ => None,
        }
    }

    /// The decoded option texts, if this is a choice-like result.
    pub fn as_texts(&self) -> Option<&[String]> {
        match self {
            FieldValue::Texts(texts) => Some(texts),
            _ => None,
        }
    }

    /// The file metadata list, if this is a file-upload result.
    pub fn as_files(&self) -> Option<&[FileMetadata]> {
        match self {
            FieldValue::Files(files) => Some(files),
            _ => None,
        }
    }
}

/// Read-only field lookup over a parsed webhook document.
///
/// The extractor borrows the document for its lifetime and never mutates
/// it, so it is safe to share across threads. Every lookup is a fresh
/// linear scan of the field list; with field counts in the tens, no index
/// is kept.
pub struct FieldExtractor<'a> {
    document: &'a WebhookDocument,
}

impl<'a> FieldExtractor<'a> {
    /// Wrap a parsed webhook document. No validation is performed here;
    /// missing or malformed parts surface as absent results at lookup time.
    pub fn new(document: &'a WebhookDocument) -> Self {
        Self { document }
    }

    /// The form name from the webhook document, if present.
    pub fn form_name(&self) -> Option<&str> {
        self.document.form_name.as_deref()
    }

    /// Get the decoded value of the field with the given type and label.
    ///
    /// Fields are scanned in document order and the first record matching
    /// both type and label wins. If no field matches, `silent = true`
    /// returns `Ok(None)` while `silent = false` returns
    /// [`FieldError::FieldNotFound`].
    ///
    /// `FieldType::Checkboxes` is handled entirely by checkbox aggregation:
    /// the group's selected option texts are collected from its boolean
    /// sub-fields. Note the asymmetry kept for compatibility: when the
    /// checkbox group itself is missing, the lookup fails with
    /// `FieldNotFound` even if `silent` is set.
    pub fn get_field_value(
        &self,
        field_type: FieldType,
        field_label: &str,
        silent: bool,
    ) -> Result<Option<FieldValue>, FieldError> {
        // Checkbox groups are aggregated from their sub-fields and never
        // reach the generic scan.
        if field_type == FieldType::Checkboxes {
            return self.checkbox_values(field_label);
        }

        for field in &self.document.fields {
            if field.field_type == field_type && field.label == field_label {
                return Ok(self.extract_field_value(field));
            }
        }

        if silent {
            debug!(
                "Field with label '{}' and type '{}' not found, silent mode returns absent",
                field_label, field_type
            );
            return Ok(None);
        }
        Err(FieldError::not_found(field_type, field_label))
    }

    // Decode a located field according to its type.
    fn extract_field_value(&self, field: &FieldRecord) -> Option<FieldValue> {
        if field.field_type.is_choice() {
            return self.option_texts(field);
        }
        if field.field_type == FieldType::FileUpload {
            return Some(self.file_info(field));
        }

        // All remaining types pass their raw value through; null counts
        // as absent.
        field
            .value
            .clone()
            .filter(|value| !value.is_null())
            .map(FieldValue::Raw)
    }

    /// Collect the selected option texts of the checkbox group labeled
    /// `main_label`.
    ///
    /// Each option of the group is represented by a separate sub-field
    /// whose key is the group key plus `_` plus the option id, and whose
    /// value is a boolean checked-state. Texts are returned in the order
    /// the checked sub-fields appear in the document; sub-field ids with no
    /// matching option are skipped so option-set drift between schema
    /// versions does not fail the lookup.
    fn checkbox_values(&self, main_label: &str) -> Result<Option<FieldValue>, FieldError> {
        let group = self
            .document
            .fields
            .iter()
            .find(|field| {
                field.field_type == FieldType::Checkboxes && field.label == main_label
            })
            .ok_or_else(|| FieldError::not_found(FieldType::Checkboxes, main_label))?;

        let option_map: HashMap<&str, &str> = group
            .options
            .iter()
            .map(|option| (option.id.as_str(), option.text.as_str()))
            .collect();

        // Match sub-fields to the group by key prefix and keep the checked
        // ones, in document order.
        let prefix = format!("{}_", group.key);
        let mut selected_texts = Vec::new();
        for sub_field in &self.document.fields {
            if !sub_field.key.starts_with(&prefix) {
                continue;
            }
            if sub_field.value != Some(Value::Bool(true)) {
                continue;
            }

            let option_id = sub_field.key.rsplit('_').next().unwrap_or_default();
            match option_map.get(option_id) {
                Some(text) => selected_texts.push((*text).to_string()),
                None => {
                    debug!(
                        "Sub-field '{}' of checkbox group '{}' references unknown option id '{}', skipping",
                        sub_field.key, main_label, option_id
                    );
                }
            }
        }

        if selected_texts.is_empty() {
            // Callers cannot distinguish "nothing checked" from "all
            // selections filtered out"; both are absent.
            return Ok(None);
        }
        Ok(Some(FieldValue::Texts(selected_texts)))
    }

    // Resolve a choice-like field's selected option ids to display texts.
    // Iterates the options list, so the result keeps options-declaration
    // order regardless of the order ids appear in the value.
    fn option_texts(&self, field: &FieldRecord) -> Option<FieldValue> {
        let selected_ids: Vec<&str> = match field.value.as_ref() {
            Some(Value::Array(ids)) => ids.iter().filter_map(Value::as_str).collect(),
            _ => return None,
        };

        let texts: Vec<String> = field
            .options
            .iter()
            .filter(|option| selected_ids.contains(&option.id.as_str()))
            .map(|option| option.text.clone())
            .collect();
        Some(FieldValue::Texts(texts))
    }

    // Extract the file metadata list from a FILE_UPLOAD field.
    fn file_info(&self, field: &FieldRecord) -> FieldValue {
        let files: Vec<FileMetadata> = match field.value.clone() {
            Some(value) if !value.is_null() => {
                serde_json::from_value(value).unwrap_or_else(|e| {
                    warn!(
                        "Could not decode file metadata for field '{}': {}",
                        field.label, e
                    );
                    Vec::new()
                })
            }
            _ => Vec::new(),
        };
        FieldValue::Files(files)
    }
}
