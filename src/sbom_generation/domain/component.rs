use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::borrow::Cow;

/// Component entity describing one software dependency in a scan document
///
/// The scanner's object is stored as-is, so every field (`bom-ref`, `type`,
/// `licenses`, `properties`, ...) is written back unchanged and in its
/// original order. `name`, `version` and `purl` are read through accessors
/// for deduplication; non-string scalars are rendered as JSON text.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Component {
    fields: Map<String, Value>,
}

impl Component {
    pub fn new(name: Option<String>, version: Option<String>, purl: Option<String>) -> Self {
        let mut fields = Map::new();
        for (key, value) in [("name", name), ("version", version), ("purl", purl)] {
            if let Some(value) = value {
                fields.insert(key.to_string(), Value::String(value));
            }
        }
        Self { fields }
    }

    /// Attaches an opaque pass-through field
    pub fn with_field(mut self, key: impl Into<String>, value: Value) -> Self {
        self.fields.insert(key.into(), value);
        self
    }

    pub fn name(&self) -> Option<Cow<'_, str>> {
        self.text("name")
    }

    pub fn version(&self) -> Option<Cow<'_, str>> {
        self.text("version")
    }

    /// Package URL, treating an empty string as absent
    pub fn purl(&self) -> Option<Cow<'_, str>> {
        self.text("purl").filter(|purl| !purl.is_empty())
    }

    pub fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }

    // null counts as absent
    fn text(&self, key: &str) -> Option<Cow<'_, str>> {
        match self.fields.get(key)? {
            Value::Null => None,
            Value::String(text) => Some(Cow::Borrowed(text.as_str())),
            other => Some(Cow::Owned(other.to_string())),
        }
    }
}
