//! Laying visual trees out as styled terminal lines.
//!
//! Pages become flat lists of [`Line`]s: the title first, then the
//! elements distributed over the page's column count. Blocks (one per
//! element) are never split across columns; columns are balanced by
//! height, filled left to right in document order.

use crate::document::StyleMap;
use crate::state::Navigation;
use crate::types::{Attr, Rgba, TextAlign};
use crate::visual::{NodeKind, VisualNode};

use super::term_style::TermStyle;
use super::text::{string_width, truncate_text, wrap_text};

/// Cells between adjacent columns.
const COLUMN_GAP: usize = 2;

/// Step-row gutter: marks the current and completed steps.
const GUTTER_WIDTH: usize = 2;

// =============================================================================
// Span / Line
// =============================================================================

/// A run of text with one terminal style.
#[derive(Debug, Clone, PartialEq)]
pub struct Span {
    pub text: String,
    pub style: TermStyle,
}

impl Span {
    pub fn new(text: impl Into<String>, style: TermStyle) -> Self {
        Self {
            text: text.into(),
            style,
        }
    }

    /// An unstyled run.
    pub fn plain(text: impl Into<String>) -> Self {
        Self::new(text, TermStyle::default())
    }

    pub fn width(&self) -> usize {
        string_width(&self.text)
    }
}

/// One terminal line as an ordered list of spans.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Line {
    pub spans: Vec<Span>,
}

impl Line {
    pub fn new(spans: Vec<Span>) -> Self {
        Self { spans }
    }

    /// An empty line.
    pub fn blank() -> Self {
        Self::default()
    }

    pub fn width(&self) -> usize {
        self.spans.iter().map(Span::width).sum()
    }

    /// The line's text with styling stripped.
    pub fn plain_text(&self) -> String {
        self.spans.iter().map(|s| s.text.as_str()).collect()
    }

    fn push(&mut self, span: Span) {
        if !span.text.is_empty() {
            self.spans.push(span);
        }
    }

    /// Pad with spaces on the right up to `width` cells.
    fn padded_to(mut self, width: usize) -> Self {
        let current = self.width();
        if current < width {
            self.push(Span::plain(" ".repeat(width - current)));
        }
        self
    }
}

// =============================================================================
// Page layout
// =============================================================================

/// Lay one page tree out at the given terminal width.
///
/// When `nav` is provided, step rows get a two-cell gutter marking the
/// current step and completed steps; without it the page renders as a
/// static document.
pub fn page_lines(page: &VisualNode, width: usize, nav: Option<&Navigation>) -> Vec<Line> {
    let width = width.max(8);
    let mut lines = Vec::new();

    for child in &page.children {
        match child.kind {
            NodeKind::PageTitle => {
                let style = title_style(&child.props, Attr::BOLD | Attr::UNDERLINE);
                lines.extend(aligned_lines(child.text_or_empty(), width, style));
                lines.push(Line::blank());
            }
            NodeKind::ElementList => {
                lines.extend(element_list_lines(child, width, nav));
            }
            _ => {}
        }
    }

    // Drop a trailing spacer so pages end on content
    while lines.last().is_some_and(|l| l.spans.is_empty()) {
        lines.pop();
    }
    lines
}

fn element_list_lines(list: &VisualNode, width: usize, nav: Option<&Navigation>) -> Vec<Line> {
    let columns = list.columns.max(1);
    if columns == 1 {
        let mut lines = Vec::new();
        for element in &list.children {
            lines.extend(element_block(element, width, nav));
            lines.push(Line::blank());
        }
        return lines;
    }

    let col_width = width
        .saturating_sub(COLUMN_GAP * (columns - 1))
        .max(8)
        / columns;

    let blocks: Vec<Vec<Line>> = list
        .children
        .iter()
        .map(|element| element_block(element, col_width, nav))
        .collect();

    balance_columns(blocks, columns, col_width)
}

/// Fill columns left to right, aiming for even heights. Blocks are
/// never split; a block that overshoots the target just makes its
/// column a little taller.
fn balance_columns(blocks: Vec<Vec<Line>>, columns: usize, col_width: usize) -> Vec<Line> {
    let total: usize = blocks.iter().map(|b| b.len() + 1).sum();
    let target = total.div_ceil(columns);

    let mut cols: Vec<Vec<Line>> = vec![Vec::new(); columns];
    let mut col = 0;

    for block in blocks {
        if !cols[col].is_empty() && cols[col].len() + block.len() > target && col + 1 < columns {
            col += 1;
        }
        cols[col].extend(block);
        cols[col].push(Line::blank());
    }

    for lines in &mut cols {
        while lines.last().is_some_and(|l| l.spans.is_empty()) {
            lines.pop();
        }
    }

    let height = cols.iter().map(Vec::len).max().unwrap_or(0);
    let mut out = Vec::with_capacity(height);

    for row in 0..height {
        let mut line = Line::blank();
        for (i, column) in cols.iter().enumerate() {
            let cell = column
                .get(row)
                .cloned()
                .unwrap_or_default()
                .padded_to(col_width);
            if i > 0 {
                line.push(Span::plain(" ".repeat(COLUMN_GAP)));
            }
            for span in cell.spans {
                line.push(span);
            }
        }
        out.push(line);
    }

    out
}

// =============================================================================
// Element blocks
// =============================================================================

fn element_block(element: &VisualNode, width: usize, nav: Option<&Navigation>) -> Vec<Line> {
    let container = TermStyle::from_props(&element.props);

    match element.kind {
        NodeKind::Sequence => {
            let mut lines = Vec::new();
            for child in &element.children {
                match child.kind {
                    NodeKind::SequenceTitle => {
                        let style = container
                            .merged_with(&title_style(&child.props, Attr::BOLD));
                        lines.extend(aligned_lines(child.text_or_empty(), width, style));
                    }
                    NodeKind::StepText => {
                        let style =
                            container.merged_with(&TermStyle::from_props(&child.props));
                        lines.extend(aligned_lines(child.text_or_empty(), width, style));
                    }
                    NodeKind::StepRow => {
                        lines.push(step_row_line(child, width, nav, container));
                    }
                    _ => {}
                }
            }
            lines
        }
        NodeKind::TextBlock => {
            let mut lines = Vec::new();
            for child in &element.children {
                if child.kind == NodeKind::TextContent {
                    let style = container.merged_with(&TermStyle::from_props(&child.props));
                    lines.extend(aligned_lines(child.text_or_empty(), width, style));
                }
            }
            lines
        }
        NodeKind::Unknown => {
            let style = TermStyle::from_props(&element.props);
            aligned_lines(element.text_or_empty(), width, style)
        }
        _ => Vec::new(),
    }
}

/// One item/state row: gutter, item label, dot fill, state label.
fn step_row_line(
    row: &VisualNode,
    width: usize,
    nav: Option<&Navigation>,
    container: TermStyle,
) -> Line {
    let find_text = |kind: NodeKind| {
        row.children
            .iter()
            .find(|c| c.kind == kind)
            .map(|c| (c.text_or_empty().to_string(), c.props.clone()))
            .unwrap_or_else(|| (String::new(), StyleMap::new()))
    };

    let (item, item_props) = find_text(NodeKind::StepItem);
    let (state, state_props) = find_text(NodeKind::StepState);

    let mut item_style = container.merged_with(&TermStyle::from_props(&item_props));
    let mut state_style = container.merged_with(&TermStyle::from_props(&state_props));
    let mut fill_style = container.with_attr(Attr::DIM);
    let mut gutter_style = TermStyle::default();

    let (is_current, is_done) = match (nav, row.step) {
        (Some(nav), Some(step)) => (nav.current() == Some(step), nav.is_done(step)),
        _ => (false, false),
    };

    let gutter = if nav.is_none() {
        ""
    } else if is_current {
        gutter_style.attrs |= Attr::BOLD;
        "▸ "
    } else if is_done {
        gutter_style.fg = Some(Rgba::GREEN);
        "✓ "
    } else {
        "  "
    };

    if is_current {
        item_style.attrs |= Attr::INVERSE;
        state_style.attrs |= Attr::INVERSE;
        fill_style.attrs |= Attr::INVERSE;
    }

    let avail = width.saturating_sub(if gutter.is_empty() { 0 } else { GUTTER_WIDTH });
    let state_width = string_width(&state);

    // Keep the state label intact; the item gives way when space runs out
    let mut item = item;
    let mut item_width = string_width(&item);
    if item_width + state_width + 2 > avail {
        item = truncate_text(&item, avail.saturating_sub(state_width + 3).max(1));
        item_width = string_width(&item);
    }

    let fill = avail.saturating_sub(item_width + state_width + 2);

    let mut line = Line::blank();
    line.push(Span::new(gutter, gutter_style));
    line.push(Span::new(item, item_style));
    line.push(Span::new(format!(" {} ", "·".repeat(fill)), fill_style));
    line.push(Span::new(state, state_style));
    line
}

// =============================================================================
// Shared helpers
// =============================================================================

fn title_style(props: &StyleMap, default_attrs: Attr) -> TermStyle {
    TermStyle::default()
        .with_attr(default_attrs)
        .merged_with(&TermStyle::from_props(props))
}

/// Wrap text and honor its `text-align` within the given width.
fn aligned_lines(text: &str, width: usize, style: TermStyle) -> Vec<Line> {
    wrap_text(text, width)
        .into_iter()
        .map(|wrapped| {
            let pad = match style.align {
                TextAlign::Left => 0,
                TextAlign::Center => width.saturating_sub(string_width(&wrapped)) / 2,
                TextAlign::Right => width.saturating_sub(string_width(&wrapped)),
            };
            let mut line = Line::blank();
            line.push(Span::plain(" ".repeat(pad)));
            line.push(Span::new(wrapped, style));
            line
        })
        .collect()
}

// =============================================================================
// Tests
// =============================================================================
