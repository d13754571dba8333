//! Field value representation
//!
//! Every field holds exactly one [`FieldValue`] variant, fixed by the
//! field's declared kind. A kind/value mismatch cannot be expressed for a
//! well-formed schema, and dynamic access that would mismatch panics.

use serde::{Deserialize, Serialize};

/// A file chosen for upload, held in memory until submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileUpload {
    /// Original file name, forwarded as the multipart part's file name
    pub file_name: String,
    /// MIME type reported for the file (e.g. `application/pdf`)
    pub content_type: String,
    /// Raw file contents
    pub bytes: Vec<u8>,
}

impl FileUpload {
    pub fn new(
        file_name: impl Into<String>,
        content_type: impl Into<String>,
        bytes: Vec<u8>,
    ) -> Self {
        Self {
            file_name: file_name.into(),
            content_type: content_type.into(),
            bytes,
        }
    }
}

/// The concrete value a field holds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum FieldValue {
    /// Single-line and multi-line text, including email/tel/date/url
    /// fields and the effective value of a selection
    Text(String),
    /// Yes/no fields, including gates
    Bool(bool),
    /// Ordered entries of an expanding list
    List(Vec<String>),
    /// A file input; `None` until a file is chosen
    File(Option<FileUpload>),
}

impl FieldValue {
    pub fn text(value: impl Into<String>) -> Self {
        FieldValue::Text(value.into())
    }

    /// The text content, if this is a text-backed value.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            FieldValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            FieldValue::List(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_file(&self) -> Option<&FileUpload> {
        match self {
            FieldValue::File(file) => file.as_ref(),
            _ => None,
        }
    }
}
