//! Style references and property maps.
//!
//! A style in a checklist document is either an inline map of visual
//! properties (`{"color": "#fff", "fontWeight": "bold"}`) or a string
//! naming an entry in the document's `namedStyles` table. Property values
//! are CSS-like strings; numbers and booleans are accepted and
//! stringified so documents written by hand stay forgiving.

use std::collections::BTreeMap;
use std::collections::btree_map;

use serde::de::{Deserialize, Deserializer};
use serde::ser::{Serialize, SerializeMap, Serializer};
use serde_json::Value;

// =============================================================================
// StyleMap
// =============================================================================

/// An ordered map of visual property name to property value.
///
/// Keys are kept exactly as written in the document; normalization to
/// kebab-case happens in the style resolver so that one conversion point
/// serves every consumer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StyleMap(BTreeMap<String, String>);

impl StyleMap {
    /// Create an empty style map.
    pub fn new() -> Self {
        Self(BTreeMap::new())
    }

    /// Number of properties.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Check if the map holds no properties.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Look up a property value.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    /// Insert a property, replacing any previous value.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.0.insert(key.into(), value.into());
    }

    /// Iterate over (name, value) pairs in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for StyleMap {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

impl IntoIterator for StyleMap {
    type Item = (String, String);
    type IntoIter = btree_map::IntoIter<String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'de> Deserialize<'de> for StyleMap {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = BTreeMap::<String, Value>::deserialize(deserializer)?;
        let mut map = BTreeMap::new();
        for (key, value) in raw {
            match value {
                Value::String(s) => {
                    map.insert(key, s);
                }
                Value::Number(n) => {
                    map.insert(key, n.to_string());
                }
                Value::Bool(b) => {
                    map.insert(key, b.to_string());
                }
                // Nested structures and nulls carry no usable value
                _ => {}
            }
        }
        Ok(Self(map))
    }
}

impl Serialize for StyleMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (k, v) in &self.0 {
            map.serialize_entry(k, v)?;
        }
        map.end()
    }
}

// =============================================================================
// StyleRef
// =============================================================================

/// A style reference: inline properties or the name of a shared style.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
#[serde(untagged)]
pub enum StyleRef {
    /// Name of an entry in the document's `namedStyles` table.
    Name(String),
    /// Inline property map.
    Inline(StyleMap),
}

impl<'de> Deserialize<'de> for StyleRef {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        // Anything that is neither a name nor a map styles nothing;
        // a bad style slot must not take its element down with it
        let value = Value::deserialize(deserializer)?;
        Ok(match value {
            Value::String(name) => Self::Name(name),
            Value::Object(_) => Self::Inline(
                serde_json::from_value(value).unwrap_or_default(),
            ),
            _ => Self::Inline(StyleMap::new()),
        })
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_style_map_stringifies_scalars() {
        let map: StyleMap =
            serde_json::from_str(r#"{"color": "red", "fontSize": 14, "bold": true}"#).unwrap();
        assert_eq!(map.get("color"), Some("red"));
        assert_eq!(map.get("fontSize"), Some("14"));
        assert_eq!(map.get("bold"), Some("true"));
    }

    #[test]
    fn test_style_map_drops_nested_values() {
        let map: StyleMap =
            serde_json::from_str(r#"{"color": "red", "nested": {"x": 1}, "gone": null}"#).unwrap();
        assert_eq!(map.len(), 1);
        assert_eq!(map.get("color"), Some("red"));
    }

    #[test]
    fn test_style_ref_name() {
        let style: StyleRef = serde_json::from_str(r#""warning""#).unwrap();
        assert_eq!(style, StyleRef::Name("warning".to_string()));
    }

    #[test]
    fn test_style_ref_wrong_type_degrades_to_empty() {
        let style: StyleRef = serde_json::from_str("42").unwrap();
        assert_eq!(style, StyleRef::Inline(StyleMap::new()));

        let style: StyleRef = serde_json::from_str("[1, 2]").unwrap();
        assert_eq!(style, StyleRef::Inline(StyleMap::new()));
    }

    #[test]
    fn test_style_ref_inline() {
        let style: StyleRef = serde_json::from_str(r##"{"color": "#fff"}"##).unwrap();
        match style {
            StyleRef::Inline(map) => assert_eq!(map.get("color"), Some("#fff")),
            StyleRef::Name(_) => panic!("expected inline style"),
        }
    }
}
