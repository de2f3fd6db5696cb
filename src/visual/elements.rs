//! Rendering typed elements into visual subtrees.
//!
//! Dispatch is an exhaustive match over the element sum type; the
//! unknown arm is a real branch that produces a visible, de-emphasized
//! placeholder. No element - however malformed - can make this pass
//! fail: missing substructure renders as empty strings.

use std::collections::BTreeMap;

use crate::document::{
    Element, SequenceElement, Step, StyleMap, TextElement, TypeDefaults,
};
use crate::style::{merge_layers, resolve_layers, NamedStyles};

use super::node::{NodeKind, VisualNode};

/// Per-element-type default style bundles, keyed by type name.
pub type DefaultStyles = BTreeMap<String, TypeDefaults>;

/// Render a list of elements into visual nodes.
///
/// `next_step` numbers item-step rows with their flattened ordinal; the
/// caller threads it across pages so numbering is global to the
/// document.
pub fn render_elements(
    elements: &[Element],
    named: &NamedStyles,
    defaults: &DefaultStyles,
    next_step: &mut usize,
) -> Vec<VisualNode> {
    let empty_defaults = TypeDefaults::default();
    let mut nodes = Vec::with_capacity(elements.len());

    for element in elements {
        // Page breaks are markers, not content; pagination consumes them
        if matches!(element, Element::PageBreak) {
            continue;
        }

        let type_defaults = defaults
            .get(element.type_name())
            .unwrap_or(&empty_defaults);

        // Container cascade: type default first, the element's own style on top
        let container = resolve_layers(
            &[type_defaults.style.as_ref(), element.style()],
            named,
        );

        let node = match element {
            Element::Sequence(seq) => {
                render_sequence(seq, container, type_defaults, named, next_step)
            }
            Element::Text(text) => render_text(text, container, type_defaults, named),
            Element::Unknown { type_name, .. } => render_unknown(type_name.as_deref(), container),
            Element::PageBreak => unreachable!("filtered above"),
        };

        nodes.push(node);
    }

    nodes
}

fn render_sequence(
    seq: &SequenceElement,
    container: StyleMap,
    type_defaults: &TypeDefaults,
    named: &NamedStyles,
    next_step: &mut usize,
) -> VisualNode {
    let mut children = Vec::with_capacity(seq.steps.len() + 1);

    if let Some(title) = seq.title.as_deref().filter(|t| !t.is_empty()) {
        let title_props = resolve_layers(
            &[
                type_defaults.title_style.as_ref(),
                seq.title_style.as_ref(),
            ],
            named,
        );
        children.push(
            VisualNode::new(NodeKind::SequenceTitle)
                .with_props(title_props)
                .with_text(title),
        );
    }

    for step in &seq.steps {
        match step {
            Step::Text(text) => {
                let props = resolve_layers(
                    &[
                        type_defaults.text_style.as_ref(),
                        seq.text_style.as_ref(),
                        text.text_style.as_ref(),
                    ],
                    named,
                );
                children.push(
                    VisualNode::new(NodeKind::StepText)
                        .with_props(props)
                        .with_text(text.text.clone()),
                );
            }
            Step::Item(item) => {
                let item_props = resolve_layers(
                    &[
                        type_defaults.item_style.as_ref(),
                        seq.item_style.as_ref(),
                        item.item_style.as_ref(),
                    ],
                    named,
                );
                let state_props = resolve_layers(
                    &[
                        type_defaults.state_style.as_ref(),
                        seq.state_style.as_ref(),
                        item.state_style.as_ref(),
                    ],
                    named,
                );

                let mut row = VisualNode::new(NodeKind::StepRow).with_children(vec![
                    VisualNode::new(NodeKind::StepItem)
                        .with_props(item_props)
                        .with_text(item.item.clone()),
                    VisualNode::new(NodeKind::StepFill),
                    VisualNode::new(NodeKind::StepState)
                        .with_props(state_props)
                        .with_text(item.state.clone()),
                ]);
                row.step = Some(*next_step);
                *next_step += 1;
                children.push(row);
            }
        }
    }

    VisualNode::new(NodeKind::Sequence)
        .with_props(container)
        .with_children(children)
}

fn render_text(
    text: &TextElement,
    container: StyleMap,
    type_defaults: &TypeDefaults,
    named: &NamedStyles,
) -> VisualNode {
    let content_props = resolve_layers(
        &[
            type_defaults.text_style.as_ref(),
            text.text_style.as_ref(),
        ],
        named,
    );

    VisualNode::new(NodeKind::TextBlock)
        .with_props(container)
        .with_children(vec![
            VisualNode::new(NodeKind::TextContent)
                .with_props(content_props)
                .with_text(text.text.clone()),
        ])
}

fn render_unknown(type_name: Option<&str>, container: StyleMap) -> VisualNode {
    // De-emphasized on top of whatever the container style says
    let props = merge_layers([
        container,
        [("color", "#999")].into_iter().collect::<StyleMap>(),
    ]);

    VisualNode::new(NodeKind::Unknown)
        .with_props(props)
        .with_text(format!(
            "[Unknown element type: {}]",
            type_name.unwrap_or("undefined")
        ))
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::Document;

    fn render_doc(json: &str) -> Vec<VisualNode> {
        let doc = Document::from_json(json).unwrap();
        let mut next_step = 0;
        render_elements(
            &doc.elements,
            &doc.named_styles,
            &doc.default_style,
            &mut next_step,
        )
    }

    #[test]
    fn test_sequence_with_item_steps() {
        let nodes = render_doc(
            r#"{"elements": [{
                "type": "sequence",
                "title": "ENGINE",
                "steps": [
                    {"item": "Battery", "state": "ON"},
                    {"text": "note"},
                    {"item": "Fuel", "state": "CHECK"}
                ]
            }]}"#,
        );

        assert_eq!(nodes.len(), 1);
        let seq = &nodes[0];
        assert_eq!(seq.kind, NodeKind::Sequence);
        assert_eq!(seq.children.len(), 4); // title + 3 steps

        let rows = seq.find_all(NodeKind::StepRow);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].step, Some(0));
        assert_eq!(rows[1].step, Some(1));

        let items = seq.find_all(NodeKind::StepItem);
        assert_eq!(items[0].text_or_empty(), "Battery");
        assert_eq!(items[1].text_or_empty(), "Fuel");

        let states = seq.find_all(NodeKind::StepState);
        assert_eq!(states[0].text_or_empty(), "ON");
    }

    #[test]
    fn test_sequence_without_steps_renders_empty() {
        let nodes = render_doc(r#"{"elements": [{"type": "sequence"}]}"#);
        assert_eq!(nodes.len(), 1);
        assert!(nodes[0].children.is_empty());
    }

    #[test]
    fn test_item_step_cascade_three_layers() {
        let nodes = render_doc(
            r#"{
                "defaultStyle": {"sequence": {"itemStyle": {"color": "white", "fontWeight": "bold", "fontStyle": "italic"}}},
                "elements": [{
                    "type": "sequence",
                    "itemStyle": {"color": "gray", "fontWeight": "normal"},
                    "steps": [{"item": "A", "state": "", "itemStyle": {"color": "red"}}]
                }]
            }"#,
        );

        let items = nodes[0].find_all(NodeKind::StepItem);
        // Step layer wins, sequence layer next, type default survives where untouched
        assert_eq!(items[0].props.get("color"), Some("red"));
        assert_eq!(items[0].props.get("font-weight"), Some("normal"));
        assert_eq!(items[0].props.get("font-style"), Some("italic"));
    }

    #[test]
    fn test_text_element() {
        let nodes = render_doc(
            r#"{"elements": [{"type": "text", "text": "x", "textStyle": {"color": "cyan"}}]}"#,
        );
        assert_eq!(nodes[0].kind, NodeKind::TextBlock);
        let content = &nodes[0].children[0];
        assert_eq!(content.kind, NodeKind::TextContent);
        assert_eq!(content.text_or_empty(), "x");
        assert_eq!(content.props.get("color"), Some("cyan"));
    }

    #[test]
    fn test_unknown_element_placeholder() {
        let nodes = render_doc(r#"{"elements": [{"type": "foo"}, {"type": "text", "text": "y"}]}"#);

        // The unknown element never aborts rendering of its siblings
        assert_eq!(nodes.len(), 2);
        assert_eq!(nodes[0].kind, NodeKind::Unknown);
        assert!(nodes[0].text_or_empty().contains("foo"));
        assert!(nodes[0].text_or_empty().contains("Unknown element type"));
        // De-emphasized
        assert_eq!(nodes[0].props.get("color"), Some("#999"));
    }

    #[test]
    fn test_unknown_element_without_type() {
        let nodes = render_doc(r#"{"elements": [{"style": {"color": "red"}}]}"#);
        assert!(nodes[0].text_or_empty().contains("undefined"));
    }

    #[test]
    fn test_sequence_title_uses_named_style() {
        let nodes = render_doc(
            r#"{
                "namedStyles": {"header": {"color": "yellow"}},
                "elements": [{"type": "sequence", "title": "T", "titleStyle": "header", "steps": []}]
            }"#,
        );
        let titles = nodes[0].find_all(NodeKind::SequenceTitle);
        assert_eq!(titles[0].props.get("color"), Some("yellow"));
    }

    #[test]
    fn test_missing_named_style_renders_unstyled() {
        let nodes = render_doc(
            r#"{"elements": [{"type": "sequence", "title": "T", "titleStyle": "ghost", "steps": []}]}"#,
        );
        let titles = nodes[0].find_all(NodeKind::SequenceTitle);
        assert!(titles[0].props.is_empty());
    }

    #[test]
    fn test_step_numbering_continues_across_elements() {
        let doc = Document::from_json(
            r#"{"elements": [
                {"type": "sequence", "steps": [{"item": "a", "state": ""}]},
                {"type": "sequence", "steps": [{"item": "b", "state": ""}]}
            ]}"#,
        )
        .unwrap();

        let mut next_step = 0;
        let nodes = render_elements(
            &doc.elements,
            &doc.named_styles,
            &doc.default_style,
            &mut next_step,
        );
        assert_eq!(next_step, 2);
        assert_eq!(nodes[1].find_all(NodeKind::StepRow)[0].step, Some(1));
    }
}
