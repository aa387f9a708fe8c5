use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// Field type discriminators used by the Tally webhook payload.
///
/// The wire tags are a closed vocabulary; `Unknown` catches tags introduced
/// by newer form schema versions so a single unrecognized field does not
/// fail deserialization of the whole document. Unknown-typed fields are
/// never matched by a lookup.
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq)]
pub enum FieldType {
    #[serde(rename = "INPUT_TEXT")]
    Text,
    #[serde(rename = "INPUT_NUMBER")]
    Number,
    #[serde(rename = "HIDDEN_FIELDS")]
    Hidden,
    #[serde(rename = "MULTIPLE_CHOICE")]
    MultipleChoice,
    #[serde(rename = "INPUT_EMAIL")]
    Email,
    #[serde(rename = "INPUT_PHONE_NUMBER")]
    PhoneNumber,
    #[serde(rename = "TEXTAREA")]
    Textarea,
    #[serde(rename = "INPUT_LINK")]
    Link,
    #[serde(rename = "CHECKBOXES")]
    Checkboxes,
    #[serde(rename = "DROPDOWN")]
    Dropdown,
    #[serde(rename = "MULTI_SELECT")]
    MultiSelect,
    #[serde(rename = "FILE_UPLOAD")]
    FileUpload,
    #[serde(rename = "INPUT_DATE")]
    Date,
    #[serde(rename = "INPUT_TIME")]
    Time,
    #[serde(other)]
    Unknown,
}

impl FieldType {
    /// The wire-format tag for this field type.
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldType::Text => "INPUT_TEXT",
            FieldType::Number => "INPUT_NUMBER",
            FieldType::Hidden => "HIDDEN_FIELDS",
            FieldType::MultipleChoice => "MULTIPLE_CHOICE",
            FieldType::Email => "INPUT_EMAIL",
            FieldType::PhoneNumber => "INPUT_PHONE_NUMBER",
            FieldType::Textarea => "TEXTAREA",
            FieldType::Link => "INPUT_LINK",
            FieldType::Checkboxes => "CHECKBOXES",
            FieldType::Dropdown => "DROPDOWN",
            FieldType::MultiSelect => "MULTI_SELECT",
            FieldType::FileUpload => "FILE_UPLOAD",
            FieldType::Date => "INPUT_DATE",
            FieldType::Time => "INPUT_TIME",
            FieldType::Unknown => "UNKNOWN",
        }
    }

    /// Choice-like types carry an `options` list and encode their value as
    /// a list of selected option ids.
    pub fn is_choice(&self) -> bool {
        matches!(
            self,
            FieldType::MultipleChoice | FieldType::Dropdown | FieldType::MultiSelect
        )
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One selectable option of a choice-like field.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct FieldOption {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub text: String,
}

/// Metadata for one uploaded file. Passed through as-is, never validated.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct FileMetadata {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub url: String,
    #[serde(rename = "mimeType", default)]
    pub mime_type: String,
    #[serde(default)]
    pub size: u64,
}

/// One submitted field of the webhook payload.
///
/// `value` is type-dependent (scalar, list of option ids, boolean for
/// checkbox sub-fields, list of file metadata, or null), so it stays a raw
/// `serde_json::Value` until a lookup decodes it.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct FieldRecord {
    #[serde(rename = "type")]
    pub field_type: FieldType,
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub key: String,
    #[serde(default)]
    pub value: Option<Value>,
    #[serde(default)]
    pub options: Vec<FieldOption>,
}

/// The root webhook document: an optional form name plus the ordered field
/// list. Missing top-level keys are tolerated; absence surfaces at lookup
/// time instead of failing deserialization.
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct WebhookDocument {
    #[serde(rename = "formName", default)]
    pub form_name: Option<String>,
    #[serde(default)]
    pub fields: Vec<FieldRecord>,
}
