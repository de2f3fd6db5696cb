//! XChecklist to checklist-JSON converter.
//!
//! Usage:
//!
//! ```text
//! clist2json <input_file>    # convert a file
//! clist2json                 # convert stdin
//! ```
//!
//! The JSON document is written to stdout.

use std::io::Read;
use std::process::ExitCode;

use checklist_tui::convert::convert_clist_to_json;

fn main() -> ExitCode {
    let mut args = std::env::args().skip(1);

    let input = match args.next() {
        Some(path) => match std::fs::read_to_string(&path) {
            Ok(input) => input,
            Err(err) => {
                eprintln!("clist2json: cannot read {path}: {err}");
                return ExitCode::FAILURE;
            }
        },
        None => {
            let mut input = String::new();
            if let Err(err) = std::io::stdin().read_to_string(&mut input) {
                eprintln!("clist2json: cannot read stdin: {err}");
                return ExitCode::FAILURE;
            }
            input
        }
    };

    println!("{}", convert_clist_to_json(&input));
    ExitCode::SUCCESS
}
