// Fri Oct 16 2026 - Alex

use crate::reflect::Semantics;
use crate::structure::{FieldLayout, TypeLayout};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct SerializableLayout {
    name: String,
    semantics: Semantics,
    size: usize,
    overhead: usize,
    padding: usize,
    padding_percent: usize,
    fields: Vec<SerializableField>,
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct SerializableField {
    name: String,
    type_name: String,
    offset: usize,
    size: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    nested: Option<Box<SerializableLayout>>,
}

impl SerializableLayout {
    /// Nested layouts are kept only when `recursive` is set.
    pub fn new(layout: &TypeLayout, recursive: bool) -> Self {
        Self {
            name: layout.name(),
            semantics: layout.kind().semantics(),
            size: layout.total_size().as_usize(),
            overhead: layout.overhead().as_usize(),
            padding: layout.padding().as_usize(),
            padding_percent: layout.padding_percent(),
            fields: layout
                .fields()
                .iter()
                .map(|field| SerializableField::new(field, recursive))
                .collect(),
        }
    }
}

impl From<&TypeLayout> for SerializableLayout {
    fn from(layout: &TypeLayout) -> Self {
        Self::new(layout, true)
    }
}

impl SerializableField {
    fn new(field: &FieldLayout, recursive: bool) -> Self {
        let nested = match recursive {
            true => field.nested().map(|nested| Box::new(SerializableLayout::new(nested, true))),
            false => None,
        };

        Self {
            name: field.name().to_string(),
            type_name: field.declared().short_name(),
            offset: field.offset().as_usize(),
            size: field.size().as_usize(),
            nested,
        }
    }
}

impl From<&FieldLayout> for SerializableField {
    fn from(field: &FieldLayout) -> Self {
        Self::new(field, true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Node, Particle};
    use crate::inspector::compute_layout;

    #[test]
    fn test_nested_layout_is_exported() {
        let layout = compute_layout::<Particle>().unwrap();
        let exported = SerializableLayout::from(layout.as_ref());

        assert_eq!(exported.name, "Particle");
        assert_eq!(exported.semantics, Semantics::Value);
        assert_eq!(exported.size, layout.total_size().as_usize());
        assert_eq!(exported.padding, layout.padding().as_usize());
        assert_eq!(exported.padding_percent, layout.padding_percent());
        assert_eq!(exported.fields.len(), 5);

        let offsets: Vec<usize> = exported.fields.iter().map(|f| f.offset).collect();
        assert!(offsets.windows(2).all(|w| w[0] <= w[1]));

        let position = exported.fields.iter().find(|f| f.name == "position").unwrap();
        assert_eq!(position.type_name, "Vec3");
        assert_eq!(position.size, 12);
        assert_eq!(position.nested.as_ref().unwrap().fields.len(), 3);

        let alive = exported.fields.iter().find(|f| f.name == "alive").unwrap();
        assert!(alive.nested.is_none());
    }

    #[test]
    fn test_flat_export_drops_nested() {
        let layout = compute_layout::<Particle>().unwrap();
        let exported = SerializableLayout::new(&layout, false);

        assert_eq!(exported.fields.len(), 5);
        assert!(exported.fields.iter().all(|f| f.nested.is_none()));

        let json = serde_json::to_string(&exported).unwrap();
        assert!(!json.contains("nested"));
    }

    #[test]
    fn test_object_overhead_is_exported() {
        let layout = compute_layout::<Node>().unwrap();
        let exported = SerializableLayout::from(layout.as_ref());

        assert_eq!(exported.semantics, Semantics::Reference);
        assert_eq!(exported.overhead, layout.overhead().as_usize());
        assert!(exported.overhead > 0);
    }

    #[test]
    fn test_json_round_trip_keeps_nesting() {
        let layout = compute_layout::<Particle>().unwrap();
        let exported = SerializableLayout::from(layout.as_ref());

        let json = serde_json::to_string_pretty(&exported).unwrap();
        let parsed: SerializableLayout = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, exported);

        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["semantics"], serde_json::json!(exported.semantics));
        assert!(value["fields"]
            .as_array()
            .unwrap()
            .iter()
            .any(|f| f["nested"]["fields"].as_array().map(Vec::len) == Some(3)));
    }
}
