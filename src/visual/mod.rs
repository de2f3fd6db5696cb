//! The declarative rendering engine.
//!
//! [`render`] is a pure function from a [`Document`] to a list of page
//! trees: pagination first (explicit break markers), then element
//! rendering with the full style cascade, producing [`VisualNode`] trees
//! that any adapter can map onto its widget system. The pass is
//! synchronous and total - it completes before the caller continues and
//! no input can make it fail.
//!
//! # Example
//!
//! ```
//! use checklist_tui::document::Document;
//! use checklist_tui::visual::{render, NodeKind};
//!
//! let doc = Document::from_json(r#"{
//!     "title": "T",
//!     "elements": [{"type": "sequence", "steps": [{"item": "A", "state": "done"}]}]
//! }"#).unwrap();
//!
//! let rendered = render(&doc);
//! assert_eq!(rendered.pages.len(), 1);
//! assert_eq!(rendered.step_count, 1);
//! ```

pub mod elements;
pub mod node;
pub mod paginate;

pub use elements::{render_elements, DefaultStyles};
pub use node::{NodeKind, VisualNode};
pub use paginate::{paginate, Page};

use crate::document::Document;
use crate::style::resolve_layers;

/// The result of rendering a document.
#[derive(Debug, Clone, PartialEq)]
pub struct Rendered {
    /// One visual tree per page, in document order.
    pub pages: Vec<VisualNode>,
    /// Count of item-steps across all pages (the navigable positions).
    pub step_count: usize,
}

impl Rendered {
    /// The `StepRow` node for a flattened step ordinal, with its page index.
    pub fn find_step(&self, step: usize) -> Option<(usize, &VisualNode)> {
        self.pages.iter().enumerate().find_map(|(page, tree)| {
            tree.walk()
                .find(|n| n.step == Some(step))
                .map(|n| (page, n))
        })
    }
}

/// Render a document into its paginated visual tree.
///
/// Page *i* receives the document title for that page (a single
/// non-array title belongs to page 0 only), the document's `titleStyle`,
/// and its column count. Item-step ordinals are numbered across the
/// whole document so navigation can address any step by one index.
pub fn render(doc: &Document) -> Rendered {
    let mut pages = Vec::new();
    let mut next_step = 0;

    for page in paginate(&doc.elements) {
        let mut children = Vec::new();

        if let Some(title) = doc.title_for_page(page.index).filter(|t| !t.is_empty()) {
            let props = resolve_layers(&[doc.title_style.as_ref()], &doc.named_styles);
            children.push(
                VisualNode::new(NodeKind::PageTitle)
                    .with_props(props)
                    .with_text(title),
            );
        }

        let mut list = VisualNode::new(NodeKind::ElementList).with_children(render_elements(
            page.elements,
            &doc.named_styles,
            &doc.default_style,
            &mut next_step,
        ));
        list.columns = doc.columns();
        children.push(list);

        pages.push(VisualNode::new(NodeKind::Page).with_children(children));
    }

    Rendered {
        pages,
        step_count: next_step,
    }
}

// =============================================================================
// Tests
// =============================================================================
