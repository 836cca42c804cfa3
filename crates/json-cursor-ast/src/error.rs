//! Parse errors with their source position.

use thiserror::Error;

/// What went wrong while parsing.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseErrorKind {
    #[error("Unexpected end of input")]
    UnexpectedEnd,
    #[error("Unexpected token {0:?}")]
    UnexpectedToken(char),
    #[error("Invalid number")]
    InvalidNumber,
    #[error("Invalid escape sequence")]
    InvalidEscape,
    #[error("Unterminated string")]
    UnterminatedString,
    #[error("Unescaped control character in string")]
    ControlCharacter,
    #[error("Nesting deeper than {0} levels")]
    TooDeep(usize),
}

/// A parse failure and where it happened.
///
/// `offset` is in the unit the parser was configured with; `line` and
/// `column` are 1-based and the column uses the same unit.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("{kind} at {line}:{column}")]
pub struct ParseError {
    pub kind: ParseErrorKind,
    pub offset: usize,
    pub line: usize,
    pub column: usize,
}
