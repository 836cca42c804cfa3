//! Parser options.

use std::fmt;
use std::str::FromStr;

use crate::parser::DEFAULT_MAX_DEPTH;

/// The unit source offsets are counted in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum OffsetUnit {
    /// Unicode scalar values (`char`s).
    #[default]
    Char,
    /// UTF-16 code units, the convention of browser text inputs and LSP.
    Utf16,
    /// UTF-8 bytes.
    Byte,
}

impl OffsetUnit {
    /// Width of `ch` in this unit.
    pub fn width(self, ch: char) -> usize {
        match self {
            OffsetUnit::Char => 1,
            OffsetUnit::Utf16 => ch.len_utf16(),
            OffsetUnit::Byte => ch.len_utf8(),
        }
    }

    /// Length of `text` in this unit.
    pub fn measure(self, text: &str) -> usize {
        match self {
            OffsetUnit::Char => text.chars().count(),
            OffsetUnit::Utf16 => text.encode_utf16().count(),
            OffsetUnit::Byte => text.len(),
        }
    }
}

impl fmt::Display for OffsetUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            OffsetUnit::Char => "char",
            OffsetUnit::Utf16 => "utf16",
            OffsetUnit::Byte => "byte",
        };
        f.write_str(name)
    }
}

impl FromStr for OffsetUnit {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "char" | "chars" => Ok(OffsetUnit::Char),
            "utf16" | "utf-16" => Ok(OffsetUnit::Utf16),
            "byte" | "bytes" | "utf8" | "utf-8" => Ok(OffsetUnit::Byte),
            other => Err(format!("unknown offset unit: {other}")),
        }
    }
}

/// Options for [`parse_with_options`](crate::parse_with_options).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseOptions {
    /// Unit of every range in the produced tree and of error positions.
    pub unit: OffsetUnit,
    /// Deepest container nesting accepted before failing with
    /// [`ParseErrorKind::TooDeep`](crate::ParseErrorKind::TooDeep).
    pub max_depth: usize,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            unit: OffsetUnit::default(),
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl ParseOptions {
    pub fn with_unit(unit: OffsetUnit) -> Self {
        Self {
            unit,
            ..Self::default()
        }
    }
}
