//! Viewer Example - interactive checklist with controller support
//!
//! Fullscreen terminal viewer over a checklist document. When the
//! document has a `controls` section and a matching controller is
//! connected (Linux), its buttons drive next/previous/reset alongside
//! the keyboard.
//!
//! Run with: cargo run --example viewer [checklist.json]

use std::sync::{Arc, Mutex};

use checklist_tui::{render, Document, Navigation, Screen};

const SAMPLE: &str = r#"{
    "title": "ENGINE START",
    "titleStyle": {"textAlign": "center"},
    "elements": [
        {
            "type": "sequence",
            "title": "BEFORE START",
            "steps": [
                {"item": "Preflight inspection", "state": "COMPLETE"},
                {"item": "Seats and belts", "state": "ADJUST"},
                {"item": "Circuit breakers", "state": "CHECK IN"},
                {"item": "Beacon", "state": "ON"}
            ]
        },
        {
            "type": "sequence",
            "title": "START",
            "steps": [
                {"item": "Mixture", "state": "RICH"},
                {"item": "Throttle", "state": "OPEN 1/4"},
                {"item": "Propeller area", "state": "CLEAR"},
                {"item": "Ignition", "state": "START"}
            ]
        }
    ],
    "controls": {
        "next": {"name": "Microsoft X-Box One S pad", "button": 0},
        "previous": {"name": "Microsoft X-Box One S pad", "button": 1},
        "reset": {"name": "Microsoft X-Box One S pad", "button": 7}
    }
}"#;

fn main() {
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
    let nav = Arc::new(Mutex::new(Navigation::new(rendered.step_count)));

    // Controller mapping, when the document asks for it. The session
    // stops (and its poll thread joins) when `mapping` drops.
    #[cfg(target_os = "linux")]
    let mut mapping = checklist_tui::Mapping::new();
    #[cfg(target_os = "linux")]
    if let Some(controls) = doc.controls.clone() {
        use checklist_tui::input::evdev::EvdevPoller;
        use checklist_tui::Actions;

        let actions = {
            let next = nav.clone();
            let previous = nav.clone();
            let reset = nav.clone();
            Actions::default()
                .on_next(move || {
                    next.lock().unwrap().next();
                })
                .on_previous(move || {
                    previous.lock().unwrap().previous();
                })
                .on_reset(move || {
                    reset.lock().unwrap().reset();
                })
        };
        mapping.start(EvdevPoller::open(), controls, actions);
    }

    if let Err(err) = Screen::new(rendered, nav).run() {
        eprintln!("viewer error: {err}");
        std::process::exit(1);
    }
}
