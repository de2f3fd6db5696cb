//! Typed checklist elements and sequence steps.
//!
//! Elements form a closed sum type so the renderer can match
//! exhaustively; anything the document declares that we do not recognize
//! lands in [`Element::Unknown`] and is rendered as a placeholder rather
//! than rejected. Deserialization of an element never fails - malformed
//! substructure degrades to defaults.

use serde::de::{Deserialize, Deserializer};
use serde_json::Value;

use super::style_map::StyleRef;

// =============================================================================
// Element
// =============================================================================

/// One visually distinct unit of the checklist document.
#[derive(Debug, Clone, PartialEq)]
pub enum Element {
    /// A titled group of steps.
    Sequence(SequenceElement),
    /// A free-standing text block.
    Text(TextElement),
    /// Pure marker: terminates the current page. Carries no content.
    PageBreak,
    /// Any unrecognized `type` tag. Rendered as a visible placeholder.
    Unknown {
        /// The declared type, if the element had one at all.
        type_name: Option<String>,
        /// Container style, still honored so the placeholder can be themed.
        style: Option<StyleRef>,
    },
}

impl Element {
    /// The document-facing type name, used to look up per-type defaults.
    pub fn type_name(&self) -> &str {
        match self {
            Self::Sequence(_) => "sequence",
            Self::Text(_) => "text",
            Self::PageBreak => "page-break",
            Self::Unknown { type_name, .. } => type_name.as_deref().unwrap_or("undefined"),
        }
    }

    /// Container style reference, when the element carries one.
    pub fn style(&self) -> Option<&StyleRef> {
        match self {
            Self::Sequence(seq) => seq.style.as_ref(),
            Self::Text(text) => text.style.as_ref(),
            Self::PageBreak => None,
            Self::Unknown { style, .. } => style.as_ref(),
        }
    }
}

/// A titled group of steps.
#[derive(Debug, Clone, PartialEq, Default, serde::Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SequenceElement {
    #[serde(deserialize_with = "lenient_opt_string")]
    pub title: Option<String>,
    pub title_style: Option<StyleRef>,
    pub style: Option<StyleRef>,
    /// Sequence-level default for item labels (middle cascade layer).
    pub item_style: Option<StyleRef>,
    /// Sequence-level default for state labels (middle cascade layer).
    pub state_style: Option<StyleRef>,
    /// Sequence-level default for text steps (middle cascade layer).
    pub text_style: Option<StyleRef>,
    pub steps: Vec<Step>,
}

/// A free-standing text block.
#[derive(Debug, Clone, PartialEq, Default, serde::Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TextElement {
    #[serde(deserialize_with = "lenient_string")]
    pub text: String,
    pub style: Option<StyleRef>,
    pub text_style: Option<StyleRef>,
}

impl<'de> Deserialize<'de> for Element {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;

        let type_name = value
            .get("type")
            .and_then(Value::as_str)
            .map(str::to_string);

        let element = match type_name.as_deref() {
            Some("sequence") => match serde_json::from_value::<SequenceElement>(value) {
                Ok(seq) => Self::Sequence(seq),
                Err(err) => {
                    log::warn!("malformed sequence element: {err}");
                    Self::Sequence(SequenceElement::default())
                }
            },
            Some("text") => match serde_json::from_value::<TextElement>(value) {
                Ok(text) => Self::Text(text),
                Err(err) => {
                    log::warn!("malformed text element: {err}");
                    Self::Text(TextElement::default())
                }
            },
            Some("page-break") => Self::PageBreak,
            _ => {
                let style = value
                    .get("style")
                    .cloned()
                    .and_then(|s| serde_json::from_value(s).ok());
                Self::Unknown { type_name, style }
            }
        };

        Ok(element)
    }
}

// =============================================================================
// Step
// =============================================================================

/// One entry within a sequence element.
///
/// The two forms are told apart by the presence of a `text` field, the
/// same duck-typing rule checklist documents have always used.
#[derive(Debug, Clone, PartialEq)]
pub enum Step {
    /// A plain line of text inside the sequence.
    Text(TextStep),
    /// An item/state pair, rendered with a dot fill between the two.
    Item(ItemStep),
}

impl<'de> Deserialize<'de> for Step {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;

        let step = if value.get("text").is_some() {
            Self::Text(serde_json::from_value(value).unwrap_or(TextStep {
                text: String::new(),
                text_style: None,
            }))
        } else {
            // Everything else is an item/state pair, missing fields and all
            Self::Item(serde_json::from_value(value).unwrap_or_default())
        };

        Ok(step)
    }
}

/// A plain text line within a sequence.
#[derive(Debug, Clone, PartialEq, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextStep {
    // No `default` here: the field's presence is what makes a text step
    #[serde(deserialize_with = "lenient_string")]
    pub text: String,
    #[serde(default)]
    pub text_style: Option<StyleRef>,
}

/// An item label with a right-aligned state label.
#[derive(Debug, Clone, PartialEq, Default, serde::Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ItemStep {
    #[serde(deserialize_with = "lenient_string")]
    pub item: String,
    #[serde(deserialize_with = "lenient_string")]
    pub state: String,
    pub item_style: Option<StyleRef>,
    pub state_style: Option<StyleRef>,
}

/// Accept any scalar where a string is expected; structures read as "".
fn lenient_string<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => s,
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        _ => String::new(),
    })
}

/// Like [`lenient_string`], but non-stringy values mean "no title".
fn lenient_opt_string<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<String>, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    })
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn element(json: &str) -> Element {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_element_sequence() {
        let el = element(r#"{"type": "sequence", "title": "ENGINE START", "steps": []}"#);
        match el {
            Element::Sequence(seq) => {
                assert_eq!(seq.title.as_deref(), Some("ENGINE START"));
                assert!(seq.steps.is_empty());
            }
            other => panic!("expected sequence, got {other:?}"),
        }
    }

    #[test]
    fn test_element_text() {
        let el = element(r#"{"type": "text", "text": "Remember the fuel"}"#);
        match el {
            Element::Text(text) => assert_eq!(text.text, "Remember the fuel"),
            other => panic!("expected text, got {other:?}"),
        }
    }

    #[test]
    fn test_element_page_break() {
        assert_eq!(element(r#"{"type": "page-break"}"#), Element::PageBreak);
    }

    #[test]
    fn test_element_unknown_type() {
        let el = element(r#"{"type": "foo"}"#);
        match el {
            Element::Unknown { type_name, .. } => {
                assert_eq!(type_name.as_deref(), Some("foo"));
            }
            other => panic!("expected unknown, got {other:?}"),
        }
    }

    #[test]
    fn test_element_missing_type() {
        let el = element(r#"{"text": "no type tag"}"#);
        match el {
            Element::Unknown { ref type_name, .. } => assert!(type_name.is_none()),
            other => panic!("expected unknown, got {other:?}"),
        }
        assert_eq!(el.type_name(), "undefined");
    }

    #[test]
    fn test_element_never_fails_on_garbage() {
        // A bare scalar in the elements list still deserializes
        let el: Element = serde_json::from_str("42").unwrap();
        assert!(matches!(el, Element::Unknown { type_name: None, .. }));
    }

    #[test]
    fn test_step_text_form() {
        let step: Step = serde_json::from_str(r#"{"text": "SECTION 1"}"#).unwrap();
        match step {
            Step::Text(text) => assert_eq!(text.text, "SECTION 1"),
            other => panic!("expected text step, got {other:?}"),
        }
    }

    #[test]
    fn test_step_item_form() {
        let step: Step = serde_json::from_str(r#"{"item": "APU", "state": "STARTED"}"#).unwrap();
        match step {
            Step::Item(item) => {
                assert_eq!(item.item, "APU");
                assert_eq!(item.state, "STARTED");
            }
            other => panic!("expected item step, got {other:?}"),
        }
    }

    #[test]
    fn test_step_empty_object_degrades_to_item() {
        let step: Step = serde_json::from_str("{}").unwrap();
        match step {
            Step::Item(item) => {
                assert_eq!(item.item, "");
                assert_eq!(item.state, "");
            }
            other => panic!("expected item step, got {other:?}"),
        }
    }

    #[test]
    fn test_step_text_presence_wins() {
        // `text` takes priority even when item fields are also present
        let step: Step =
            serde_json::from_str(r#"{"text": "note", "item": "ignored"}"#).unwrap();
        assert!(matches!(step, Step::Text(_)));
    }

    #[test]
    fn test_step_garbage_degrades_to_empty_item() {
        let step: Step = serde_json::from_str("5").unwrap();
        assert_eq!(step, Step::Item(ItemStep::default()));
    }

    #[test]
    fn test_step_numeric_text_stringified() {
        let step: Step = serde_json::from_str(r#"{"text": 42}"#).unwrap();
        match step {
            Step::Text(text) => assert_eq!(text.text, "42"),
            other => panic!("expected text step, got {other:?}"),
        }
    }
}
