//! XChecklist to checklist-document conversion.
//!
//! XChecklist is the plain-text checklist format used by X-Plane. The
//! subset that maps onto a checklist document:
//!
//! - `sw_checklist:TITLE` opens a new sequence titled `TITLE`
//! - `sw_itemvoid:::::TEXT:::::` becomes a text step (the wrapping
//!   colons are required; lines without them are ignored)
//! - `sw_item_c:\white\ITEM\grey\, STATE|CMD` becomes an item/state
//!   step: color escapes are stripped, everything after the first `|`
//!   (the command binding) is dropped, and the first comma splits item
//!   from state
//!
//! Anything else - comments, continuation settings, items outside a
//! sequence - is skipped. Conversion never fails; an empty or foreign
//! file just produces a document with no elements.

use crate::document::{Document, Element, ItemStep, SequenceElement, Step, TextStep};

/// Convert XChecklist text into a checklist document.
pub fn convert_clist(input: &str) -> Document {
    let mut sequences: Vec<SequenceElement> = Vec::new();

    for line in input.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        if let Some(title) = line.strip_prefix("sw_checklist:") {
            sequences.push(SequenceElement {
                title: Some(title.trim().to_string()),
                ..Default::default()
            });
        } else if let Some(content) = line.strip_prefix("sw_itemvoid:") {
            if !(content.starts_with(':') && content.ends_with(':')) {
                continue;
            }
            let text = content.trim_matches(':').trim();
            if text.is_empty() {
                continue;
            }
            if let Some(seq) = sequences.last_mut() {
                seq.steps.push(Step::Text(TextStep {
                    text: text.to_string(),
                    text_style: None,
                }));
            }
        } else if let Some(content) = line.strip_prefix("sw_item_c:") {
            let Some(seq) = sequences.last_mut() else {
                continue;
            };

            // Drop the command binding, then the color escapes
            let content = content.split('|').next().unwrap_or("");
            let content = strip_color_escapes(content);

            let (item, state) = match content.split_once(',') {
                Some((item, state)) => (item.trim(), state.trim()),
                None => (content.trim(), ""),
            };

            seq.steps.push(Step::Item(ItemStep {
                item: item.to_string(),
                state: state.to_string(),
                ..Default::default()
            }));
        }
    }

    Document {
        elements: sequences.into_iter().map(Element::Sequence).collect(),
        ..Default::default()
    }
}

/// Convert XChecklist text into pretty-printed document JSON.
pub fn convert_clist_to_json(input: &str) -> String {
    let doc = convert_clist(input);

    let elements: Vec<serde_json::Value> = doc
        .elements
        .iter()
        .map(|element| match element {
            Element::Sequence(seq) => {
                let steps: Vec<serde_json::Value> = seq
                    .steps
                    .iter()
                    .map(|step| match step {
                        Step::Text(text) => serde_json::json!({"text": text.text}),
                        Step::Item(item) => {
                            serde_json::json!({"item": item.item, "state": item.state})
                        }
                    })
                    .collect();
                serde_json::json!({
                    "type": "sequence",
                    "title": seq.title,
                    "steps": steps,
                })
            }
            // convert_clist only emits sequences
            _ => serde_json::Value::Null,
        })
        .collect();

    let document = serde_json::json!({ "elements": elements });
    serde_json::to_string_pretty(&document).unwrap_or_else(|_| "{}".to_string())
}

/// Remove `\word\` color escapes.
fn strip_color_escapes(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut rest = input;

    while let Some(start) = rest.find('\\') {
        let after = &rest[start + 1..];
        // A color escape is a run of letters closed by another backslash
        let letters = after.chars().take_while(|c| c.is_ascii_alphabetic()).count();
        if letters > 0 && after[letters..].starts_with('\\') {
            out.push_str(&rest[..start]);
            rest = &after[letters + 1..];
        } else {
            out.push_str(&rest[..start + 1]);
            rest = after;
        }
    }
    out.push_str(rest);
    out
}

// =============================================================================
// Tests
// =============================================================================
