use super::Component;
use serde::de::Error as _;
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};

const COMPONENTS: &str = "components";

/// ScanDocument aggregate representing one scanner result
///
/// The top-level metadata (`bomFormat`, `specVersion`, `serialNumber`,
/// `metadata`, `dependencies`, ...) is opaque and preserved in order.
/// `components` is the only field this tool inspects. It is written back at
/// the position it was read from; a document without it holds an empty list
/// and gets the field appended.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ScanDocument {
    metadata: Map<String, Value>,
    components: Vec<Component>,
    /// Index among the metadata keys at which `components` is written
    components_position: usize,
}

impl ScanDocument {
    pub fn new(metadata: Map<String, Value>, components: Vec<Component>) -> Self {
        let components_position = metadata.len();
        Self {
            metadata,
            components,
            components_position,
        }
    }

    pub fn metadata(&self) -> &Map<String, Value> {
        &self.metadata
    }

    pub fn components(&self) -> &[Component] {
        &self.components
    }

    pub fn component_count(&self) -> usize {
        self.components.len()
    }

    /// Replaces the components, keeping metadata and field layout
    pub fn with_components(mut self, components: Vec<Component>) -> Self {
        self.components = components;
        self
    }

    /// Moves the components out, leaving an empty list in place
    pub fn take_components(&mut self) -> Vec<Component> {
        std::mem::take(&mut self.components)
    }

    pub fn into_components(self) -> Vec<Component> {
        self.components
    }
}

impl Serialize for ScanDocument {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let position = self.components_position.min(self.metadata.len());
        let mut map = serializer.serialize_map(Some(self.metadata.len() + 1))?;
        for (index, (key, value)) in self.metadata.iter().enumerate() {
            if index == position {
                map.serialize_entry(COMPONENTS, &self.components)?;
            }
            map.serialize_entry(key, value)?;
        }
        if position == self.metadata.len() {
            map.serialize_entry(COMPONENTS, &self.components)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for ScanDocument {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let fields = Map::<String, Value>::deserialize(deserializer)?;
        let mut metadata = Map::new();
        let mut components = Vec::new();
        let mut components_position = None;

        for (key, value) in fields {
            if key == COMPONENTS {
                components_position = Some(metadata.len());
                // null is read as an empty list
                if !value.is_null() {
                    components = serde_json::from_value(value).map_err(D::Error::custom)?;
                }
            } else {
                metadata.insert(key, value);
            }
        }

        let components_position = components_position.unwrap_or(metadata.len());
        Ok(Self {
            metadata,
            components,
            components_position,
        })
    }
}
