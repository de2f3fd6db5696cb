//! The generic layer-merge routine behind every style cascade.

use crate::document::StyleMap;

/// Merge property maps in order; later layers override earlier ones.
///
/// A property absent from a later layer keeps the earlier layer's value.
/// Merging is associative: folding `[a, b, c]` equals folding
/// `[merge([a, b]), c]`, which makes the override order a testable
/// contract rather than an accident of call sites.
pub fn merge_layers(layers: impl IntoIterator<Item = StyleMap>) -> StyleMap {
    let mut merged = StyleMap::new();
    for layer in layers {
        for (key, value) in layer {
            merged.insert(key, value);
        }
    }
    merged
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn map(pairs: &[(&str, &str)]) -> StyleMap {
        pairs.iter().copied().collect()
    }

    #[test]
    fn test_later_layer_overrides() {
        let merged = merge_layers([
            map(&[("color", "white"), ("font-weight", "bold")]),
            map(&[("color", "red")]),
        ]);
        assert_eq!(merged.get("color"), Some("red"));
        assert_eq!(merged.get("font-weight"), Some("bold"));
    }

    #[test]
    fn test_absent_key_keeps_earlier_value() {
        let merged = merge_layers([
            map(&[("color", "white")]),
            map(&[("font-style", "italic")]),
            map(&[("text-align", "right")]),
        ]);
        assert_eq!(merged.get("color"), Some("white"));
        assert_eq!(merged.get("font-style"), Some("italic"));
        assert_eq!(merged.get("text-align"), Some("right"));
    }

    #[test]
    fn test_merge_is_associative() {
        let l1 = map(&[("a", "1"), ("b", "1")]);
        let l2 = map(&[("b", "2"), ("c", "2")]);
        let l3 = map(&[("c", "3")]);

        let all_at_once = merge_layers([l1.clone(), l2.clone(), l3.clone()]);
        let two_then_one = merge_layers([merge_layers([l1, l2]), l3]);
        assert_eq!(all_at_once, two_then_one);

        assert_eq!(all_at_once.get("a"), Some("1"));
        assert_eq!(all_at_once.get("b"), Some("2"));
        assert_eq!(all_at_once.get("c"), Some("3"));
    }

    #[test]
    fn test_empty_layers() {
        let merged = merge_layers(std::iter::empty::<StyleMap>());
        assert!(merged.is_empty());

        let merged = merge_layers([StyleMap::new(), map(&[("color", "red")]), StyleMap::new()]);
        assert_eq!(merged.get("color"), Some("red"));
    }
}
