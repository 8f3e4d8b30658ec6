//! Note models and shaping
//!
//! A stored document is a flat, schema-less mapping. Shaping turns it into a
//! [`Note`] with every field present, and form submissions are turned into
//! documents before they reach the store.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;
use thiserror::Error;

/// Flat document as accepted by the store (field name → scalar value)
pub type Document = serde_json::Map<String, Value>;

/// Form field carrying the checkbox state
pub const IMPORTANT_FIELD: &str = "important";

/// Value a browser submits for a checked checkbox
pub const CHECKBOX_ON: &str = "on";

// ============================================================================
// Errors
// ============================================================================

/// Errors raised while shaping documents or coercing form input
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum NoteError {
    /// A stored field exists but holds a value of the wrong type
    #[error("stored field `{field}` is not a {expected}")]
    FieldType {
        field: &'static str,
        expected: &'static str,
    },

    /// The submitted `no` is not an integer
    #[error("`no` must be an integer, got {0:?}")]
    InvalidNumber(String),
}

// ============================================================================
// Stored document
// ============================================================================

/// A document as returned by the store, with its store-assigned identifier
#[derive(Debug, Clone, PartialEq)]
pub struct StoredDocument {
    pub id: String,
    pub fields: Document,
}

impl StoredDocument {
    pub fn new(id: impl Into<String>, fields: Document) -> Self {
        Self {
            id: id.into(),
            fields,
        }
    }
}

// ============================================================================
// Note record
// ============================================================================

/// A note as exposed to the view layer. All five fields are always present.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Note {
    pub id: String,
    pub no: i64,
    pub title: String,
    pub desc: String,
    pub imp: bool,
}

impl Note {
    /// Shape a stored document, defaulting any missing field.
    ///
    /// Missing (or null) fields become `0`, `""`, `""` and `false`. A present
    /// field holding the wrong type is an error rather than a default.
    pub fn from_document(doc: &StoredDocument) -> Result<Self, NoteError> {
        let fields = &doc.fields;

        let no = match present(fields, "no") {
            None => 0,
            Some(v) => v.as_i64().ok_or(NoteError::FieldType {
                field: "no",
                expected: "integer",
            })?,
        };

        Ok(Self {
            id: doc.id.clone(),
            no,
            title: text_field(fields, "title")?,
            desc: text_field(fields, "desc")?,
            imp: match present(fields, "imp") {
                None => false,
                Some(v) => v.as_bool().ok_or(NoteError::FieldType {
                    field: "imp",
                    expected: "boolean",
                })?,
            },
        })
    }
}

/// Shape a batch of stored documents, preserving their order
pub fn notes_from_documents(docs: &[StoredDocument]) -> Result<Vec<Note>, NoteError> {
    docs.iter().map(Note::from_document).collect()
}

fn present<'a>(fields: &'a Document, key: &str) -> Option<&'a Value> {
    fields.get(key).filter(|v| !v.is_null())
}

fn text_field(fields: &Document, key: &'static str) -> Result<String, NoteError> {
    match present(fields, key) {
        None => Ok(String::new()),
        Some(v) => v.as_str().map(str::to_string).ok_or(NoteError::FieldType {
            field: key,
            expected: "string",
        }),
    }
}

// ============================================================================
// Form submission
// ============================================================================

/// Build the document to insert from a submitted form.
///
/// `imp` is true only for `important=on`; the raw `important` field is never
/// stored. `no` is parsed as an integer, an empty value leaves it absent.
/// Every other field is stored as submitted.
pub fn document_from_form(mut form: HashMap<String, String>) -> Result<Document, NoteError> {
    let imp = form.remove(IMPORTANT_FIELD).as_deref() == Some(CHECKBOX_ON);

    let mut doc = Document::new();
    for (key, value) in form {
        if key == "no" {
            let trimmed = value.trim();
            if trimmed.is_empty() {
                continue;
            }
            let no: i64 = trimmed
                .parse()
                .map_err(|_| NoteError::InvalidNumber(value.clone()))?;
            doc.insert(key, Value::from(no));
        } else {
            doc.insert(key, Value::String(value));
        }
    }
    doc.insert("imp".to_string(), Value::Bool(imp));

    Ok(doc)
}
