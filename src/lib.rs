//! Tally Webhook Field Extraction
//!
//! This library provides typed extraction of field values from Tally
//! form-submission webhook payloads. It wraps an already-parsed webhook
//! document and resolves fields by type and label, decoding each value
//! according to its field type: raw scalars pass through, choice-like
//! fields resolve option ids to display texts, checkbox groups aggregate
//! their boolean sub-fields, and file uploads yield their metadata list.
//!
//! Receiving the webhook over HTTP and deserializing the JSON body are the
//! caller's concern; this crate starts from a [`WebhookDocument`].
//!
//! # Modules
//!
//! - `models`: serde models for the webhook wire format
//! - `extractor`: `FieldExtractor` lookup and value decoding
//! - `errors`: lookup error type

pub mod errors;
pub mod extractor;
pub mod models;

// Test modules
mod tests;

// Re-export the main API types for ease of use
pub use errors::FieldError;
pub use extractor::{FieldExtractor, FieldValue};
pub use models::webhook::{FieldOption, FieldRecord, FieldType, FileMetadata, WebhookDocument};
