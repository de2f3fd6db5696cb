//! The toolkit-independent visual tree.
//!
//! Rendering produces a tree of [`VisualNode`] values instead of writing
//! to any particular UI surface. The terminal adapter walks this tree;
//! tests inspect it directly. Nothing in here knows about terminals.

use crate::document::StyleMap;

// =============================================================================
// NodeKind
// =============================================================================

/// What a visual node represents. Mirrors the document structure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    /// One page of the checklist.
    Page,
    /// A page's title line.
    PageTitle,
    /// Column-aware container holding a page's element nodes.
    ElementList,
    /// Container for one sequence element.
    Sequence,
    /// Sequence heading line.
    SequenceTitle,
    /// Plain text line inside a sequence.
    StepText,
    /// One item/state row inside a sequence.
    StepRow,
    /// Left-hand item label of a row.
    StepItem,
    /// Dot fill between item and state labels.
    StepFill,
    /// Right-aligned state label of a row.
    StepState,
    /// Container for a free-standing text element.
    TextBlock,
    /// The text line inside a text element.
    TextContent,
    /// Placeholder for an unrecognized element type.
    Unknown,
}

// =============================================================================
// VisualNode
// =============================================================================

/// One node of the rendered visual tree.
#[derive(Debug, Clone, PartialEq)]
pub struct VisualNode {
    pub kind: NodeKind,
    /// Resolved style properties for this node (kebab-case keys).
    pub props: StyleMap,
    /// Text content, for leaf nodes that carry any.
    pub text: Option<String>,
    pub children: Vec<VisualNode>,
    /// Flattened item-step ordinal; set on `StepRow` nodes only.
    pub step: Option<usize>,
    /// Column count; meaningful on `ElementList` containers, 1 elsewhere.
    pub columns: usize,
}

impl VisualNode {
    /// Create an empty node of the given kind.
    pub fn new(kind: NodeKind) -> Self {
        Self {
            kind,
            props: StyleMap::new(),
            text: None,
            children: Vec::new(),
            step: None,
            columns: 1,
        }
    }

    /// Builder: attach resolved style properties.
    pub fn with_props(mut self, props: StyleMap) -> Self {
        self.props = props;
        self
    }

    /// Builder: attach text content.
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Builder: attach children.
    pub fn with_children(mut self, children: Vec<VisualNode>) -> Self {
        self.children = children;
        self
    }

    /// Depth-first iterator over this node and all descendants.
    pub fn walk(&self) -> impl Iterator<Item = &VisualNode> {
        let mut stack = vec![self];
        std::iter::from_fn(move || {
            let node = stack.pop()?;
            // Push in reverse so children come out in document order
            for child in node.children.iter().rev() {
                stack.push(child);
            }
            Some(node)
        })
    }

    /// All descendant nodes (including self) of the given kind.
    pub fn find_all(&self, kind: NodeKind) -> Vec<&VisualNode> {
        self.walk().filter(|n| n.kind == kind).collect()
    }

    /// Text of this node, or empty when it has none.
    pub fn text_or_empty(&self) -> &str {
        self.text.as_deref().unwrap_or("")
    }
}

// =============================================================================
// Tests
// =============================================================================
