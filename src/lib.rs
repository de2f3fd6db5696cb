//! # checklist-tui
//!
//! Declarative JSON checklist renderer for the terminal.
//!
//! A checklist is data, not code: a JSON document declares titles, named
//! styles, per-type defaults, a flat list of typed elements, and an
//! optional controller mapping. This crate turns that document into a
//! paginated, styled visual tree and drives interactive navigation over
//! it - from the keyboard or from game-controller button presses.
//!
//! ## Architecture
//!
//! The core is a pure pipeline; side effects live at the edges:
//!
//! ```text
//! JSON → Document → paginate → render elements → VisualNode pages
//!                                                     │
//!                keyboard / controller edges → Navigation → terminal adapter
//! ```
//!
//! The visual tree is toolkit-independent: the bundled adapter maps it
//! onto a terminal via crossterm, and tests walk it directly.
//!
//! ## Modules
//!
//! - [`document`] - serde data model, validation boundary
//! - [`style`] - style-reference resolution and the layered cascade
//! - [`visual`] - pagination and element rendering (the pure core)
//! - [`state`] - navigation cursor and completion marks
//! - [`input`] - controller polling, press edges, action mapping
//! - [`renderer`] - terminal lines, columns, interactive screen
//! - [`convert`] - XChecklist import
//! - [`types`] - colors, text attributes, alignment
//!
//! ## Example
//!
//! ```
//! use checklist_tui::{Document, Navigation, render};
//!
//! let doc = Document::from_json(r#"{
//!     "title": "Preflight",
//!     "elements": [{
//!         "type": "sequence",
//!         "title": "POWER",
//!         "steps": [
//!             {"item": "Battery", "state": "ON"},
//!             {"item": "Avionics", "state": "CHECK"}
//!         ]
//!     }]
//! }"#).unwrap();
//!
//! let rendered = render(&doc);
//! let mut nav = Navigation::new(rendered.step_count);
//!
//! assert_eq!(rendered.pages.len(), 1);
//! assert_eq!(nav.current(), Some(0));
//! nav.next();
//! assert_eq!(nav.current(), Some(1));
//! ```

pub mod convert;
pub mod document;
pub mod input;
pub mod renderer;
pub mod state;
pub mod style;
pub mod types;
pub mod visual;

// Re-export the everyday surface
pub use document::{Document, DocumentError};
pub use input::{Actions, DevicePoller, Mapping};
pub use renderer::{render_to_string, Screen};
pub use state::Navigation;
pub use types::{Attr, Rgba, TextAlign};
pub use visual::{render, NodeKind, Rendered, VisualNode};
