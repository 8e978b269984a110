//! Translation table types and bundle loading.
//!
//! A bundle maps language codes to label maps, and each label maps to a
//! [`Translation`]. On disk a bundle is JSON where a plain string sets the
//! element text and an object `{"target": .., "content": ..}` assigns a
//! named property:
//!
//! ```json
//! {
//!   "en": {
//!     "greet": "Hello",
//!     "logo": { "target": "alt", "content": "Logo" }
//!   }
//! }
//! ```

use crate::error::{Error, Result};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::path::Path;
use tracing::debug;

/// Labels of a single language.
pub type LabelMap = BTreeMap<String, Translation>;

/// Language code to label map. Codes are case-sensitive.
pub type TranslationTable = BTreeMap<String, LabelMap>;

/// A single translated value.
///
/// Values that are neither a string nor an object (`null`, numbers, arrays)
/// load as an empty attribute assignment, so they are reported as malformed
/// instead of failing the whole bundle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Translation {
    /// Replaces the element's text content.
    PlainText(String),

    /// Assigns `content` to the element property named `target`.
    AttributeAssignment { target: String, content: String },
}

impl<'de> Deserialize<'de> for Translation {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let translation = match Value::deserialize(deserializer)? {
            Value::String(text) => Translation::PlainText(text),
            Value::Object(fields) => {
                let field = |name: &str| {
                    fields
                        .get(name)
                        .and_then(Value::as_str)
                        .unwrap_or_default()
                        .to_string()
                };
                Translation::AttributeAssignment {
                    target: field("target"),
                    content: field("content"),
                }
            }
            other => {
                debug!("Unrecognized translation value {}", other);
                Translation::AttributeAssignment {
                    target: String::new(),
                    content: String::new(),
                }
            }
        };
        Ok(translation)
    }
}

impl Translation {
    /// Build a structured translation that targets a named property instead
    /// of the text content.
    ///
    /// The target is not checked against real element properties.
    ///
    /// # Example
    /// ```
    /// use i18nt::Translation;
    ///
    /// let alt = Translation::special("Company logo", "alt");
    /// assert!(!alt.is_malformed());
    /// ```
    pub fn special(content: impl Into<String>, target: impl Into<String>) -> Self {
        Translation::AttributeAssignment {
            target: target.into(),
            content: content.into(),
        }
    }

    /// An attribute assignment missing its target or content.
    pub fn is_malformed(&self) -> bool {
        match self {
            Translation::PlainText(_) => false,
            Translation::AttributeAssignment { target, content } => {
                target.is_empty() || content.is_empty()
            }
        }
    }
}

impl From<&str> for Translation {
    fn from(text: &str) -> Self {
        Translation::PlainText(text.to_string())
    }
}

impl From<String> for Translation {
    fn from(text: String) -> Self {
        Translation::PlainText(text)
    }
}

/// Parse a JSON bundle.
pub fn load_table_from_str(json: &str) -> Result<TranslationTable> {
    Ok(serde_json::from_str(json)?)
}

/// Read and parse a JSON bundle from disk.
pub fn load_table_from_path(path: impl AsRef<Path>) -> Result<TranslationTable> {
    let path = path.as_ref();
    let json = std::fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;
    load_table_from_str(&json)
}
