//! Top-level document structure, controls mapping, and validation.

use std::collections::BTreeMap;
use std::fmt;

use serde::Deserialize;
use serde_json::Value;

use super::element::Element;
use super::style_map::{StyleMap, StyleRef};

// =============================================================================
// Document
// =============================================================================

/// A complete checklist document.
///
/// Obtained from [`Document::from_json`], which is the only place a
/// checklist can be rejected; everything downstream of it degrades
/// instead of failing.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Document {
    /// Single title (page 0 only) or one title per page.
    #[serde(deserialize_with = "lenient_title")]
    pub title: Option<Title>,
    /// Style applied to every page title.
    pub title_style: Option<StyleRef>,
    /// Shared named styles, referenced by string from any style slot.
    pub named_styles: BTreeMap<String, StyleMap>,
    /// Per-element-type default style bundles, keyed by type name.
    pub default_style: BTreeMap<String, TypeDefaults>,
    /// Column count for the page layout. Values below 1 behave as 1.
    #[serde(deserialize_with = "lenient_columns")]
    pub columns: u32,
    /// The ordered element list.
    pub elements: Vec<Element>,
    /// Optional controller button mapping.
    pub controls: Option<Controls>,
}

impl Document {
    /// Effective column count (always at least 1).
    pub fn columns(&self) -> usize {
        self.columns.max(1) as usize
    }

    /// Parse and validate a JSON checklist document.
    ///
    /// This is the validation boundary: a top-level value that is not an
    /// object, or an `elements` field that is not a list, is rejected
    /// with a descriptive error and rendering is never attempted. All
    /// deeper malformations degrade inside the element deserializers.
    ///
    /// # Errors
    ///
    /// Returns [`DocumentError`] when the input is not valid JSON or the
    /// top-level structure is wrong.
    pub fn from_json(input: &str) -> Result<Self, DocumentError> {
        let value: Value = serde_json::from_str(input).map_err(DocumentError::Json)?;

        let object = value.as_object().ok_or(DocumentError::NotAnObject)?;
        if let Some(elements) = object.get("elements") {
            if !elements.is_array() {
                return Err(DocumentError::ElementsNotAList);
            }
        }

        serde_json::from_value(value).map_err(DocumentError::Json)
    }

    /// Title for page `index`, honoring the single-vs-per-page rule.
    pub fn title_for_page(&self, index: usize) -> Option<&str> {
        self.title.as_ref().and_then(|t| t.for_page(index))
    }
}

fn lenient_columns<'de, D: serde::Deserializer<'de>>(deserializer: D) -> Result<u32, D::Error> {
    // Accepts any JSON number; fractional or negative counts clamp to 1
    let value = Value::deserialize(deserializer)?;
    Ok(value.as_u64().map(|n| n as u32).unwrap_or(1).max(1))
}

fn lenient_title<'de, D: serde::Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<Title>, D::Error> {
    fn stringify(value: Value) -> String {
        match value {
            Value::String(s) => s,
            Value::Number(n) => n.to_string(),
            Value::Bool(b) => b.to_string(),
            _ => String::new(),
        }
    }

    Ok(match Value::deserialize(deserializer)? {
        Value::String(title) => Some(Title::Single(title)),
        Value::Array(titles) => Some(Title::PerPage(
            titles.into_iter().map(stringify).collect(),
        )),
        value @ (Value::Number(_) | Value::Bool(_)) => Some(Title::Single(stringify(value))),
        _ => None,
    })
}

// =============================================================================
// Title
// =============================================================================

/// Document title: a single string or one string per page.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Title {
    /// One title, shown on the first page only.
    Single(String),
    /// Ordered titles, one per page; missing entries leave pages untitled.
    PerPage(Vec<String>),
}

impl Title {
    /// Title for the page at `index`, if any.
    pub fn for_page(&self, index: usize) -> Option<&str> {
        match self {
            Self::Single(title) => (index == 0).then_some(title.as_str()),
            Self::PerPage(titles) => titles.get(index).map(String::as_str),
        }
    }
}

// =============================================================================
// TypeDefaults
// =============================================================================

/// Default style bundle for one element type.
///
/// These are the outermost cascade layer: an element's own styles, and a
/// step's own styles, override them key-wise.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TypeDefaults {
    pub style: Option<StyleRef>,
    pub title_style: Option<StyleRef>,
    pub text_style: Option<StyleRef>,
    pub item_style: Option<StyleRef>,
    pub state_style: Option<StyleRef>,
}

// =============================================================================
// Controls
// =============================================================================

/// Controller button mapping for the three navigation actions.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Controls {
    pub next: Option<ButtonBinding>,
    pub previous: Option<ButtonBinding>,
    pub reset: Option<ButtonBinding>,
}

/// One device-name/button-index pair.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ButtonBinding {
    /// Device identifier as reported by the input backend.
    pub name: String,
    /// Zero-based button index on that device.
    pub button: usize,
}

// =============================================================================
// DocumentError
// =============================================================================

/// Why a document was rejected at the validation boundary.
#[derive(Debug)]
pub enum DocumentError {
    /// The input was not valid JSON at all.
    Json(serde_json::Error),
    /// The top-level JSON value is not an object.
    NotAnObject,
    /// The `elements` field is present but not a list.
    ElementsNotAList,
}

impl fmt::Display for DocumentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Json(err) => write!(f, "invalid JSON: {err}"),
            Self::NotAnObject => write!(f, "checklist document must be a JSON object"),
            Self::ElementsNotAList => write!(f, "\"elements\" must be a list of elements"),
        }
    }
}

impl std::error::Error for DocumentError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Json(err) => Some(err),
            _ => None,
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
