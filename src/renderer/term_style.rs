//! Interpreting resolved style properties for the terminal.
//!
//! The terminal understands a subset of the CSS-like property space a
//! document may use: colors, weight/style/decoration, opacity (as dim),
//! and alignment. Properties outside that subset stay in the visual
//! tree untouched and simply have no terminal effect.

use crate::document::StyleMap;
use crate::types::{Attr, Rgba, TextAlign};

/// Terminal rendering style for one span of text.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TermStyle {
    pub fg: Option<Rgba>,
    pub bg: Option<Rgba>,
    pub attrs: Attr,
    pub align: TextAlign,
}

impl TermStyle {
    /// Interpret a resolved property map.
    ///
    /// Unknown property names and unparseable values are ignored; a bad
    /// color never breaks rendering, it just doesn't color anything.
    pub fn from_props(props: &StyleMap) -> Self {
        let mut style = Self::default();

        for (key, value) in props.iter() {
            match key {
                "color" => {
                    style.fg = parse_color(value);
                }
                "background-color" | "background" => {
                    style.bg = parse_color(value);
                }
                "font-weight" => {
                    if is_bold(value) {
                        style.attrs |= Attr::BOLD;
                    } else {
                        style.attrs -= Attr::BOLD;
                    }
                }
                "font-style" => {
                    if value.eq_ignore_ascii_case("italic") || value.eq_ignore_ascii_case("oblique")
                    {
                        style.attrs |= Attr::ITALIC;
                    }
                }
                "text-decoration" | "text-decoration-line" => {
                    let value = value.to_lowercase();
                    if value.contains("underline") {
                        style.attrs |= Attr::UNDERLINE;
                    }
                    if value.contains("line-through") {
                        style.attrs |= Attr::STRIKETHROUGH;
                    }
                }
                "opacity" => {
                    if value.parse::<f32>().map_or(false, |v| v < 1.0) {
                        style.attrs |= Attr::DIM;
                    }
                }
                "text-align" => {
                    style.align = TextAlign::parse(value);
                }
                _ => {}
            }
        }

        style
    }

    /// Overlay `other` onto this style; set fields of `other` win.
    pub fn merged_with(&self, other: &TermStyle) -> TermStyle {
        TermStyle {
            fg: other.fg.or(self.fg),
            bg: other.bg.or(self.bg),
            attrs: self.attrs | other.attrs,
            align: if other.align == TextAlign::Left {
                self.align
            } else {
                other.align
            },
        }
    }

    /// This style with the given attribute added.
    pub fn with_attr(mut self, attr: Attr) -> Self {
        self.attrs |= attr;
        self
    }
}

fn parse_color(value: &str) -> Option<Rgba> {
    let color = Rgba::parse(value)?;
    // Terminal-default and fully transparent mean "leave it alone"
    if color.is_terminal_default() || color.is_transparent() {
        return None;
    }
    Some(color)
}

fn is_bold(value: &str) -> bool {
    let value = value.trim().to_lowercase();
    match value.as_str() {
        "bold" | "bolder" => true,
        "normal" | "lighter" => false,
        _ => value.parse::<u32>().map_or(false, |weight| weight >= 600),
    }
}

// =============================================================================
// Tests
// =============================================================================
