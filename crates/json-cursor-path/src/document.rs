//! A text buffer paired with its parsed tree.
//!
//! The tree is rebuilt wholesale every time the text changes, so ranges
//! always refer to the current text. Cursor queries never re-parse.

use std::fmt;

use json_cursor_ast::{parse_with_options, Node, ParseError, ParseOptions};

use crate::resolve::resolve_path;
use crate::types::{CursorPath, ROOT_MARKER};

/// Readout path shown while the text does not parse.
pub const UNRESOLVED: &str = "—";

#[derive(Debug, Clone, PartialEq)]
enum State {
    /// Whitespace-only text: no document, nothing wrong.
    Blank,
    Parsed(Node),
    Failed(ParseError),
}

/// Text plus the tree parsed from it.
#[derive(Debug, Clone)]
pub struct Document {
    text: String,
    options: ParseOptions,
    state: State,
}

/// What to show for a cursor position: the path, and the parse error if the
/// text is malformed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Readout {
    pub path: String,
    pub error: Option<String>,
}

impl fmt::Display for Readout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.error {
            Some(error) => write!(f, "{} ({error})", self.path),
            None => f.write_str(&self.path),
        }
    }
}

impl Document {
    pub fn new(text: impl Into<String>) -> Self {
        Self::with_options(text, ParseOptions::default())
    }

    pub fn with_options(text: impl Into<String>, options: ParseOptions) -> Self {
        let text = text.into();
        let state = Self::parse(&text, &options);
        Self {
            text,
            options,
            state,
        }
    }

    /// Replace the text and re-parse it.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.state = Self::parse(&self.text, &self.options);
    }

    fn parse(text: &str, options: &ParseOptions) -> State {
        if text.trim().is_empty() {
            tracing::debug!(target: "json_cursor::document", "document is blank");
            return State::Blank;
        }
        match parse_with_options(text, options) {
            Ok(root) => State::Parsed(root),
            Err(error) => {
                tracing::debug!(
                    target: "json_cursor::document",
                    %error,
                    "document does not parse, paths fall back to the root"
                );
                State::Failed(error)
            }
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn options(&self) -> &ParseOptions {
        &self.options
    }

    /// The parsed tree, if the text is a well-formed document.
    pub fn root(&self) -> Option<&Node> {
        match &self.state {
            State::Parsed(root) => Some(root),
            State::Blank | State::Failed(_) => None,
        }
    }

    pub fn error(&self) -> Option<&ParseError> {
        match &self.state {
            State::Failed(error) => Some(error),
            State::Blank | State::Parsed(_) => None,
        }
    }

    pub fn is_blank(&self) -> bool {
        matches!(self.state, State::Blank)
    }

    /// Path under `offset`. `$` whenever there is no tree.
    pub fn path_at(&self, offset: isize) -> CursorPath {
        resolve_path(self.root(), offset)
    }

    /// Display state for a cursor at `offset`.
    ///
    /// Blank text reads `$` with no error. Malformed text reads
    /// [`UNRESOLVED`] with the parser's message.
    pub fn readout(&self, offset: isize) -> Readout {
        match &self.state {
            State::Blank => Readout {
                path: ROOT_MARKER.to_string(),
                error: None,
            },
            State::Parsed(root) => Readout {
                path: resolve_path(Some(root), offset).to_string(),
                error: None,
            },
            State::Failed(error) => Readout {
                path: UNRESOLVED.to_string(),
                error: Some(format!("Error: {error}")),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use json_cursor_ast::OffsetUnit;

    #[test]
    fn test_blank_document() {
        let doc = Document::new(" \n\t");
        assert!(doc.is_blank());
        assert!(doc.root().is_none());
        assert!(doc.error().is_none());
        assert_eq!(doc.path_at(1).to_string(), "$");
        assert_eq!(
            doc.readout(1),
            Readout {
                path: "$".to_string(),
                error: None
            }
        );
    }

    #[test]
    fn test_failed_document() {
        let doc = Document::new("{\"a\": }");
        assert!(doc.root().is_none());
        assert!(doc.error().is_some());
        assert_eq!(doc.path_at(3).to_string(), "$");

        let readout = doc.readout(3);
        assert_eq!(readout.path, UNRESOLVED);
        assert_eq!(
            readout.error.as_deref(),
            Some("Error: Unexpected token '}' at 1:7")
        );
    }

    #[test]
    fn test_edit_reparses() {
        let mut doc = Document::new("[1, 2]");
        assert_eq!(doc.readout(4).path, "$[1]");

        doc.set_text("[1, 2");
        assert!(doc.error().is_some());
        assert_eq!(doc.readout(4).path, UNRESOLVED);

        doc.set_text("{\"k\": [1, 2]}");
        assert_eq!(doc.text(), "{\"k\": [1, 2]}");
        assert!(doc.error().is_none());
        assert_eq!(doc.readout(10).to_string(), "$.k[1]");
    }

    #[test]
    fn test_options_survive_edits() {
        let options = ParseOptions::with_unit(OffsetUnit::Utf16);
        let mut doc = Document::with_options("[\"\u{1f600}\", 1]", options);
        // The emoji takes two UTF-16 units, so `1` sits at 7.
        assert_eq!(doc.path_at(7).to_string(), "$[1]");
        assert_eq!(doc.path_at(6).to_string(), "$");

        doc.set_text("[\"\u{1f600}\", 1, 2]");
        assert_eq!(doc.options().unit, OffsetUnit::Utf16);
        assert_eq!(doc.path_at(10).to_string(), "$[2]");
    }
}
