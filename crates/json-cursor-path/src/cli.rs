//! `json-cursor-path` command-line logic.
//!
//! The binary in `src/bin/json_cursor_path.rs` only does I/O; argument
//! handling and resolution live here.
//!
//! ```text
//! json-cursor-path [--unit char|utf16|byte] [--json] <OFFSET|LINE:COLUMN>...
//! ```
//!
//! The document is read from stdin. Each position prints one path, in order.

use std::str::FromStr;

use json_cursor_ast::{LineIndex, OffsetUnit, ParseError, ParseOptions, Position};
use serde_json::{json, Value};
use thiserror::Error;

use crate::document::Document;

pub const USAGE: &str =
    "Usage: json-cursor-path [--unit char|utf16|byte] [--json] <OFFSET|LINE:COLUMN>...";

#[derive(Debug, Error)]
pub enum CliError {
    #[error("{0}")]
    Usage(String),
    #[error("No position {0} in the document")]
    Position(Position),
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl CliError {
    /// Process exit status for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Usage(_) | CliError::Position(_) => 2,
            CliError::Parse(_) | CliError::Io(_) => 1,
        }
    }
}

/// A cursor position given on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorPosition {
    Offset(usize),
    /// 1-based.
    LineColumn(Position),
}

impl FromStr for CursorPosition {
    type Err = CliError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || CliError::Usage(format!("Invalid position: {s}"));
        match s.split_once(':') {
            Some((line, column)) => {
                let line = line.parse().map_err(|_| invalid())?;
                let column = column.parse().map_err(|_| invalid())?;
                Ok(CursorPosition::LineColumn(Position { line, column }))
            }
            None => s.parse().map(CursorPosition::Offset).map_err(|_| invalid()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CliArgs {
    pub unit: OffsetUnit,
    pub json: bool,
    pub help: bool,
    pub positions: Vec<CursorPosition>,
}

/// Parse arguments, program name excluded.
pub fn parse_args<I>(args: I) -> Result<CliArgs, CliError>
where
    I: IntoIterator<Item = String>,
{
    let mut parsed = CliArgs::default();
    let mut args = args.into_iter();
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => parsed.help = true,
            "--json" => parsed.json = true,
            "--unit" => {
                let unit = args
                    .next()
                    .ok_or_else(|| CliError::Usage("--unit needs a value".to_string()))?;
                parsed.unit = unit.parse().map_err(CliError::Usage)?;
            }
            _ => {
                if let Some(unit) = arg.strip_prefix("--unit=") {
                    parsed.unit = unit.parse().map_err(CliError::Usage)?;
                } else if arg.starts_with("--") {
                    return Err(CliError::Usage(format!("Unknown option: {arg}")));
                } else {
                    parsed.positions.push(arg.parse()?);
                }
            }
        }
    }
    if parsed.positions.is_empty() && !parsed.help {
        return Err(CliError::Usage("At least one position is required".to_string()));
    }
    Ok(parsed)
}

/// Resolve every requested position in `text`.
///
/// Returns the text to print: one path per line, or a JSON array with
/// `--json`.
pub fn run(args: &CliArgs, text: &str) -> Result<String, CliError> {
    let doc = Document::with_options(text, ParseOptions::with_unit(args.unit));
    if let Some(error) = doc.error() {
        return Err(error.clone().into());
    }

    let index = LineIndex::new(text, args.unit);
    let mut results = Vec::with_capacity(args.positions.len());
    for position in &args.positions {
        let offset = match *position {
            CursorPosition::Offset(offset) => offset,
            CursorPosition::LineColumn(position) => index
                .offset(position)
                .ok_or(CliError::Position(position))?,
        };
        let path = doc.path_at(isize::try_from(offset).unwrap_or(isize::MAX));
        tracing::debug!(target: "json_cursor::cli", offset, %path, "resolved position");
        results.push((offset, path));
    }

    if args.json {
        let entries: Vec<Value> = results
            .into_iter()
            .map(|(offset, path)| json!({"offset": offset, "path": path.to_string()}))
            .collect();
        Ok(serde_json::to_string_pretty(&Value::Array(entries))
            .map_err(|e| CliError::Io(e.into()))?)
    } else {
        let lines: Vec<String> = results.into_iter().map(|(_, path)| path.into()).collect();
        Ok(lines.join("\n"))
    }
}
