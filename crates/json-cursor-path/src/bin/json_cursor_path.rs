//! `json-cursor-path` — print the path of the JSON value under a cursor.
//!
//! Usage:
//!   json-cursor-path [--unit char|utf16|byte] [--json] <OFFSET|LINE:COLUMN>...
//!
//! The document is read from stdin. Set `RUST_LOG=json_cursor=debug` to see
//! parse and resolution events.

use json_cursor_path::cli::{parse_args, run, USAGE};
use std::io::{self, Read, Write};

fn main() {
    env_logger::init();

    let args = match parse_args(std::env::args().skip(1)) {
        Ok(args) => args,
        Err(e) => {
            eprintln!("{e}");
            eprintln!("{USAGE}");
            std::process::exit(e.exit_code());
        }
    };
    if args.help {
        println!("{USAGE}");
        return;
    }

    // Offsets refer to the raw input, so it is not trimmed.
    let mut buf = String::new();
    if let Err(e) = io::stdin().read_to_string(&mut buf) {
        eprintln!("{e}");
        std::process::exit(1);
    }

    match run(&args, &buf) {
        Ok(out) => {
            let mut stdout = io::stdout().lock();
            if let Err(e) = writeln!(stdout, "{out}") {
                eprintln!("{e}");
                std::process::exit(1);
            }
        }
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(e.exit_code());
        }
    }
}
