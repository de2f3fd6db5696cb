//! Render Example - document to plain text
//!
//! Parses a checklist document and prints every page as plain text.
//! Pass a path to render your own document:
//!
//! Run with: cargo run --example render [checklist.json]

use checklist_tui::{render, render_to_string, Document};

/// Minimal logger so style warnings (missing named styles and the like)
/// show up on stderr instead of vanishing.
struct StderrLogger;

impl log::Log for StderrLogger {
    fn enabled(&self, metadata: &log::Metadata) -> bool {
        metadata.level() <= log::Level::Warn
    }

    fn log(&self, record: &log::Record) {
        if self.enabled(record.metadata()) {
            eprintln!("[{}] {}", record.level(), record.args());
        }
    }

    fn flush(&self) {}
}

static LOGGER: StderrLogger = StderrLogger;

const SAMPLE: &str = r#"{
    "title": ["C172 PREFLIGHT", "C172 RUNUP"],
    "titleStyle": {"textAlign": "center", "color": "gold"},
    "namedStyles": {
        "section": {"fontWeight": "bold", "color": "cyan"},
        "caution": {"color": "orange"}
    },
    "defaultStyle": {
        "sequence": {"titleStyle": "section"}
    },
    "columns": 1,
    "elements": [
        {
            "type": "sequence",
            "title": "CABIN",
            "steps": [
                {"item": "Pitot cover", "state": "REMOVE"},
                {"item": "Control lock", "state": "REMOVE"},
                {"item": "Master switch", "state": "ON"},
                {"item": "Fuel quantity", "state": "CHECK"},
                {"text": "Fuel selector BOTH for takeoff", "textStyle": "caution"}
            ]
        },
        {"type": "page-break"},
        {
            "type": "sequence",
            "title": "ENGINE RUNUP",
            "steps": [
                {"item": "Brakes", "state": "HOLD"},
                {"item": "Throttle", "state": "1700 RPM"},
                {"item": "Magnetos", "state": "CHECK"},
                {"item": "Throttle", "state": "IDLE"}
            ]
        }
    ]
}"#;

fn main() {
    let _ = log::set_logger(&LOGGER).map(|()| log::set_max_level(log::LevelFilter::Warn));

    let input = match std::env::args().nth(1) {
        Some(path) => std::fs::read_to_string(&path).unwrap_or_else(|err| {
            eprintln!("cannot read {path}: {err}");
            std::process::exit(1);
        }),
        None => SAMPLE.to_string(),
    };

    let doc = match Document::from_json(&input) {
        Ok(doc) => doc,
        Err(err) => {
            eprintln!("invalid checklist: {err}");
            std::process::exit(1);
        }
    };

    let rendered = render(&doc);
    println!(
        "{} page(s), {} item step(s)\n",
        rendered.pages.len(),
        rendered.step_count
    );
    print!("{}", render_to_string(&rendered, 60, None));
}
