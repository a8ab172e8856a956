//! Artifact collection - the generated code handed to us as JSON
//!
//! Parsing is tolerant: missing lists are empty, and entries without a usable
//! `name` or `content` are kept but never written.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// One generated class (or test class)
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct CodeEntry {
    #[serde(default, deserialize_with = "non_empty_string")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "non_empty_string")]
    pub content: Option<String>,
}

impl CodeEntry {
    pub fn new(name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            content: Some(content.into()),
        }
    }

    /// Name and content, if both are present
    pub fn complete(&self) -> Option<(&str, &str)> {
        match (&self.name, &self.content) {
            (Some(name), Some(content)) => Some((name.as_str(), content.as_str())),
            _ => None,
        }
    }
}

/// The full artifact file: classes, tests and free-form metadata
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ArtifactSet {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub apex: Vec<CodeEntry>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub tests: Vec<CodeEntry>,
    #[serde(default)]
    pub metadata: Option<Value>,
}

impl ArtifactSet {
    /// Parse an artifact document. The top level must be a JSON object.
    pub fn from_json_str(input: &str) -> Result<Self, serde_json::Error> {
        let value: Value = serde_json::from_str(input)?;
        if !value.is_object() {
            return Err(serde_json::Error::custom(
                "artifact file must contain a JSON object",
            ));
        }
        serde_json::from_value(value)
    }

    /// Entries in write order: `apex` first, then `tests`
    pub fn entries(&self) -> impl Iterator<Item = &CodeEntry> {
        self.apex.iter().chain(self.tests.iter())
    }

    /// Metadata to serialize; absent or `null` becomes an empty object
    pub fn metadata_or_empty(&self) -> Value {
        match &self.metadata {
            Some(Value::Null) | None => Value::Object(serde_json::Map::new()),
            Some(other) => other.clone(),
        }
    }
}

// Only non-empty JSON strings count. Numbers and booleans are treated as
// missing, not stringified: `{"name": 42, ...}` does not produce `42.cls`.
fn non_empty_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::String(s)) if !s.is_empty() => Some(s),
        _ => None,
    })
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<CodeEntry>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<CodeEntry>>::deserialize(deserializer)?.unwrap_or_default())
}
