//! Resolving style references into concrete property maps.

use std::collections::BTreeMap;

use crate::document::{StyleMap, StyleRef};

use super::cascade::merge_layers;

/// The document's shared named-style table.
pub type NamedStyles = BTreeMap<String, StyleMap>;

/// Convert a property key to its normalized kebab-case form.
///
/// Checklist documents accept both spellings (`backgroundColor` and
/// `background-color`); everything downstream of the resolver sees only
/// the kebab-case form. The conversion is total: every key maps to
/// exactly one output.
///
/// # Examples
///
/// ```
/// use checklist_tui::style::normalize_key;
///
/// assert_eq!(normalize_key("backgroundColor"), "background-color");
/// assert_eq!(normalize_key("color"), "color");
/// assert_eq!(normalize_key("text-align"), "text-align");
/// ```
pub fn normalize_key(key: &str) -> String {
    let mut out = String::with_capacity(key.len() + 2);
    for c in key.chars() {
        if c.is_ascii_uppercase() {
            out.push('-');
            out.push(c.to_ascii_lowercase());
        } else {
            out.push(c);
        }
    }
    out
}

/// Resolve one style reference into a property map.
///
/// An inline map is returned with its keys normalized. A name is looked
/// up in `named`; a missing name logs a warning and resolves to the
/// empty map - style resolution is never fatal.
pub fn resolve(style: &StyleRef, named: &NamedStyles) -> StyleMap {
    match style {
        StyleRef::Inline(map) => normalized(map),
        StyleRef::Name(name) => match named.get(name) {
            Some(map) => normalized(map),
            None => {
                log::warn!("named style \"{name}\" not found");
                StyleMap::new()
            }
        },
    }
}

/// Resolve an ordered list of optional style layers and merge them.
///
/// This is the cascade for one visual target: pass the layers outermost
/// first (type default, then group default, then the instance style);
/// absent layers contribute nothing.
pub fn resolve_layers(layers: &[Option<&StyleRef>], named: &NamedStyles) -> StyleMap {
    merge_layers(
        layers
            .iter()
            .filter_map(|layer| layer.map(|style| resolve(style, named))),
    )
}

fn normalized(map: &StyleMap) -> StyleMap {
    map.iter()
        .map(|(key, value)| (normalize_key(key), value))
        .collect()
}

// =============================================================================
// Tests
// =============================================================================
