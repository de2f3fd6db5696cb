//! Terminal adapter - the "blind" output layer.
//!
//! The core render pass produces a toolkit-independent visual tree;
//! this module maps that tree onto a terminal. It knows nothing about
//! documents or cascades - only nodes, styled spans, and lines.
//!
//! - [`text`] - cell-width measurement, wrapping, truncation
//! - [`term_style`] - property map subset the terminal understands
//! - [`layout`] - pages to styled lines (columns, dot fills, gutters)
//! - [`screen`] - interactive fullscreen viewer over crossterm

pub mod layout;
pub mod screen;
pub mod term_style;
pub mod text;

pub use layout::{page_lines, Line, Span};
pub use screen::Screen;
pub use term_style::TermStyle;
pub use text::{string_width, truncate_text, wrap_text};

use crate::state::Navigation;
use crate::visual::Rendered;

/// Render all pages as plain text at the given width.
///
/// Styling is dropped; pages are separated by a ruled line. Useful for
/// piping a checklist to a file or a printer, and for tests.
pub fn render_to_string(rendered: &Rendered, width: usize, nav: Option<&Navigation>) -> String {
    let mut out = String::new();

    for (i, page) in rendered.pages.iter().enumerate() {
        if i > 0 {
            out.push_str(&"─".repeat(width.max(8)));
            out.push('\n');
        }
        for line in page_lines(page, width, nav) {
            out.push_str(line.plain_text().trim_end());
            out.push('\n');
        }
    }

    out
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::Document;
    use crate::visual::render;

    #[test]
    fn test_render_to_string_pages_separated() {
        let doc = Document::from_json(
            r#"{
                "title": ["P1", "P2"],
                "elements": [
                    {"type": "text", "text": "x"},
                    {"type": "page-break"},
                    {"type": "text", "text": "y"}
                ]
            }"#,
        )
        .unwrap();

        let out = render_to_string(&render(&doc), 30, None);
        assert!(out.contains("P1"));
        assert!(out.contains("P2"));
        assert!(out.contains("───"));
        let p1 = out.find('x').unwrap();
        let p2 = out.find('y').unwrap();
        assert!(p1 < p2);
    }
}
