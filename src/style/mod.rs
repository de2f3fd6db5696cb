//! Style resolution and the layered cascade.
//!
//! Every visual target in a checklist (page title, sequence title, item
//! label, state label, text line) gets its effective style from the same
//! two operations:
//!
//! - [`resolve`] turns one style reference (inline map or named-style
//!   lookup) into a concrete property map with normalized kebab-case keys
//! - [`merge_layers`] folds an ordered list of property maps, later
//!   layers overriding earlier ones key-wise
//!
//! The override order is the whole contract: type-level default, then
//! element/sequence-level default, then the instance's own style. There
//! is exactly one merge routine; no per-field conditional chains.
//!
//! # Example
//!
//! ```
//! use checklist_tui::document::{StyleMap, StyleRef};
//! use checklist_tui::style::resolve;
//! use std::collections::BTreeMap;
//!
//! let mut named = BTreeMap::new();
//! named.insert(
//!     "warn".to_string(),
//!     [("color", "orange")].into_iter().collect::<StyleMap>(),
//! );
//!
//! let style = resolve(&StyleRef::Name("warn".to_string()), &named);
//! assert_eq!(style.get("color"), Some("orange"));
//!
//! // Missing names resolve to the empty map - never an error
//! let missing = resolve(&StyleRef::Name("nope".to_string()), &named);
//! assert!(missing.is_empty());
//! ```

pub mod cascade;
pub mod resolve;

pub use cascade::merge_layers;
pub use resolve::{normalize_key, resolve, resolve_layers, NamedStyles};
