//! Interactive fullscreen checklist viewer.
//!
//! Alternate screen, raw mode, full redraw on every state change. The
//! draw pass is synchronous: the frame is queued in one batch and
//! flushed with a single write, so no partial page is ever visible.
//!
//! Keyboard bindings:
//!
//! | Key                  | Action                          |
//! |----------------------|---------------------------------|
//! | `n`, `j`, Down, Right| next step                       |
//! | `p`, `k`, Up, Left   | previous step                   |
//! | Space, `d`, Enter    | toggle done on the current step |
//! | `r`                  | reset progress                  |
//! | `[`, `]`             | previous / next page            |
//! | `q`, Esc             | quit                            |
//!
//! Controller input arrives indirectly: a [`Mapping`] session mutates
//! the shared [`Navigation`], and the event loop picks the change up on
//! its next tick.
//!
//! [`Mapping`]: crate::input::Mapping

use std::io::{self, Write};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use crossterm::cursor::{Hide, MoveTo, Show};
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use crossterm::style::{
    Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor,
};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, Clear, ClearType, EnterAlternateScreen,
    LeaveAlternateScreen,
};
use crossterm::{execute, queue};

use crate::state::Navigation;
use crate::types::{Attr, Rgba};
use crate::visual::Rendered;

use super::layout::{page_lines, Line};

/// How often the event loop wakes to notice navigation changes made by
/// the controller mapping thread.
const FRAME_POLL: Duration = Duration::from_millis(50);

/// Interactive viewer over a rendered checklist.
pub struct Screen {
    rendered: Rendered,
    nav: Arc<Mutex<Navigation>>,
    page: usize,
    last_cursor: Option<usize>,
}

impl Screen {
    /// Create a viewer. The navigation handle is shared so a controller
    /// mapping session can drive the same state.
    pub fn new(rendered: Rendered, nav: Arc<Mutex<Navigation>>) -> Self {
        Self {
            rendered,
            nav,
            page: 0,
            last_cursor: None,
        }
    }

    /// Run the viewer until the user quits.
    ///
    /// Terminal modes are restored on the way out, also when the event
    /// loop returns an error.
    pub fn run(mut self) -> io::Result<()> {
        let mut stdout = io::stdout();
        enable_raw_mode()?;
        execute!(stdout, EnterAlternateScreen, Hide)?;

        let result = self.event_loop(&mut stdout);

        execute!(stdout, Show, LeaveAlternateScreen)?;
        disable_raw_mode()?;
        result
    }

    fn event_loop(&mut self, w: &mut impl Write) -> io::Result<()> {
        let mut last_frame = None;

        loop {
            self.follow_cursor();

            let frame = self.frame_state();
            if last_frame != Some(frame) {
                self.draw(w)?;
                last_frame = Some(frame);
            }

            if !event::poll(FRAME_POLL)? {
                continue;
            }
            let Event::Key(key) = event::read()? else {
                continue;
            };
            if key.kind != KeyEventKind::Press {
                continue;
            }

            match key.code {
                KeyCode::Char('q') | KeyCode::Esc => return Ok(()),
                KeyCode::Char('n') | KeyCode::Char('j') | KeyCode::Down | KeyCode::Right => {
                    self.nav.lock().unwrap().next();
                }
                KeyCode::Char('p') | KeyCode::Char('k') | KeyCode::Up | KeyCode::Left => {
                    self.nav.lock().unwrap().previous();
                }
                KeyCode::Char('r') => {
                    self.nav.lock().unwrap().reset();
                }
                KeyCode::Char(' ') | KeyCode::Char('d') | KeyCode::Enter => {
                    let mut nav = self.nav.lock().unwrap();
                    if let Some(current) = nav.current() {
                        nav.toggle_done(current);
                    }
                }
                KeyCode::Char(']') => {
                    if self.page + 1 < self.rendered.pages.len() {
                        self.page += 1;
                    }
                }
                KeyCode::Char('[') => {
                    self.page = self.page.saturating_sub(1);
                }
                _ => {}
            }
        }
    }

    /// Snap the visible page to the page holding the cursor, but only
    /// when the cursor actually moved - manual page browsing stays put.
    fn follow_cursor(&mut self) {
        let cursor = self.nav.lock().unwrap().current();
        if cursor != self.last_cursor {
            if let Some((page, _)) = cursor.and_then(|step| self.rendered.find_step(step)) {
                self.page = page;
            }
            self.last_cursor = cursor;
        }
    }

    fn frame_state(&self) -> (usize, Option<usize>, usize) {
        let nav = self.nav.lock().unwrap();
        (self.page, nav.current(), nav.done_count())
    }

    fn draw(&self, w: &mut impl Write) -> io::Result<()> {
        let (term_width, term_height) = crossterm::terminal::size()?;
        let width = term_width.saturating_sub(2).max(8) as usize;

        queue!(w, Clear(ClearType::All), MoveTo(0, 0))?;

        if self.rendered.pages.is_empty() {
            queue!(w, Print("(empty checklist)"))?;
            return w.flush();
        }

        let nav = self.nav.lock().unwrap();
        let lines = page_lines(&self.rendered.pages[self.page], width, Some(&*nav));

        let visible = term_height.saturating_sub(1) as usize;
        for (y, line) in lines.iter().take(visible).enumerate() {
            queue!(w, MoveTo(1, y as u16))?;
            write_line(w, line)?;
        }

        // Status footer
        let status = format!(
            " page {}/{}  done {}/{}  [n]ext [p]rev [space] done [r]eset [q]uit",
            self.page + 1,
            self.rendered.pages.len(),
            nav.done_count(),
            nav.step_count(),
        );
        queue!(
            w,
            MoveTo(0, term_height.saturating_sub(1)),
            SetAttribute(Attribute::Dim),
            Print(super::text::truncate_text(&status, term_width as usize)),
            SetAttribute(Attribute::Reset),
        )?;

        w.flush()
    }
}

// =============================================================================
// Span output
// =============================================================================

/// Write one styled line at the current cursor position.
pub fn write_line(w: &mut impl Write, line: &Line) -> io::Result<()> {
    for span in &line.spans {
        if let Some(fg) = span.style.fg {
            queue!(w, SetForegroundColor(to_crossterm(fg)))?;
        }
        if let Some(bg) = span.style.bg {
            queue!(w, SetBackgroundColor(to_crossterm(bg)))?;
        }
        for attribute in attributes(span.style.attrs) {
            queue!(w, SetAttribute(attribute))?;
        }

        queue!(w, Print(&span.text))?;
        queue!(w, SetAttribute(Attribute::Reset), ResetColor)?;
    }
    Ok(())
}

fn to_crossterm(color: Rgba) -> Color {
    Color::Rgb {
        r: color.r.clamp(0, 255) as u8,
        g: color.g.clamp(0, 255) as u8,
        b: color.b.clamp(0, 255) as u8,
    }
}

fn attributes(attrs: Attr) -> Vec<Attribute> {
    let mut out = Vec::new();
    if attrs.contains(Attr::BOLD) {
        out.push(Attribute::Bold);
    }
    if attrs.contains(Attr::DIM) {
        out.push(Attribute::Dim);
    }
    if attrs.contains(Attr::ITALIC) {
        out.push(Attribute::Italic);
    }
    if attrs.contains(Attr::UNDERLINE) {
        out.push(Attribute::Underlined);
    }
    if attrs.contains(Attr::INVERSE) {
        out.push(Attribute::Reverse);
    }
    if attrs.contains(Attr::STRIKETHROUGH) {
        out.push(Attribute::CrossedOut);
    }
    out
}

// =============================================================================
// Tests
// =============================================================================
