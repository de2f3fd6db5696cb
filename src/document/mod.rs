//! Checklist document model.
//!
//! A checklist is described declaratively as JSON: a title (or one title
//! per page), shared style tables, a flat list of typed elements, and an
//! optional controller mapping. This module owns the serde data model and
//! the single validating entry point, [`Document::from_json`].
//!
//! Parsing is deliberately forgiving: only a structurally invalid
//! top-level document (not an object, `elements` not a list) is rejected.
//! Everything below that level degrades - an unknown element type becomes
//! [`Element::Unknown`], a malformed step collapses to empty strings -
//! so a half-written document still renders.
//!
//! # Example
//!
//! ```
//! use checklist_tui::document::Document;
//!
//! let doc = Document::from_json(r#"{
//!     "title": "Preflight",
//!     "elements": [
//!         {"type": "sequence", "steps": [{"item": "Battery", "state": "ON"}]}
//!     ]
//! }"#).unwrap();
//!
//! assert_eq!(doc.elements.len(), 1);
//! ```

pub mod element;
pub mod model;
pub mod style_map;

pub use element::{Element, ItemStep, SequenceElement, Step, TextElement, TextStep};
pub use model::{ButtonBinding, Controls, Document, DocumentError, Title, TypeDefaults};
pub use style_map::{StyleMap, StyleRef};
