//! Location-tracking JSON parser.
//!
//! Strict RFC 8259 JSON in, a [`Node`] tree out. Every node records the range
//! of text it came from, measured in the configured [`OffsetUnit`].
//!
//! The scanner walks UTF-8 bytes; ranges are converted to the configured unit
//! through a [`LineIndex`] built once per parse.
//!
//! [`OffsetUnit`]: crate::OffsetUnit

use serde_json::Value;

use crate::error::{ParseError, ParseErrorKind};
use crate::line_index::LineIndex;
use crate::options::ParseOptions;
use crate::range::SourceRange;
use crate::types::*;

/// Maximum container nesting accepted by default.
pub const DEFAULT_MAX_DEPTH: usize = 512;

/// Parse `text` with default options.
///
/// ```
/// use json_cursor_ast::{parse, Node, SourceRange};
///
/// let root = parse(r#"{"a": [1, 2]}"#).unwrap();
/// assert_eq!(root.range(), SourceRange::new(0, 13));
/// let Node::Object(object) = &root else { unreachable!() };
/// assert_eq!(object.children[0].key.value, "a");
/// assert_eq!(object.children[0].value.range(), SourceRange::new(6, 12));
/// ```
pub fn parse(text: &str) -> Result<Node, ParseError> {
    parse_with_options(text, &ParseOptions::default())
}

/// Parse `text`, measuring ranges in `options.unit`.
pub fn parse_with_options(text: &str, options: &ParseOptions) -> Result<Node, ParseError> {
    let mut parser = Parser::new(text, options);
    let result = parser.parse_document();
    match &result {
        Ok(root) => tracing::debug!(
            target: "json_cursor::parse",
            unit = %options.unit,
            len = parser.index.len(),
            kind = ?root.kind(),
            "parsed document"
        ),
        Err(error) => tracing::debug!(
            target: "json_cursor::parse",
            unit = %options.unit,
            offset = error.offset,
            %error,
            "failed to parse document"
        ),
    }
    result
}

struct Parser<'a> {
    text: &'a str,
    data: &'a [u8],
    x: usize,
    index: LineIndex,
    depth: usize,
    max_depth: usize,
}

impl<'a> Parser<'a> {
    fn new(text: &'a str, options: &ParseOptions) -> Self {
        Self {
            text,
            data: text.as_bytes(),
            x: 0,
            index: LineIndex::new(text, options.unit),
            depth: 0,
            max_depth: options.max_depth,
        }
    }

    fn parse_document(&mut self) -> Result<Node, ParseError> {
        let root = self.read_any()?;
        self.skip_whitespace();
        if self.x < self.data.len() {
            return Err(self.unexpected());
        }
        Ok(root)
    }

    fn read_any(&mut self) -> Result<Node, ParseError> {
        self.skip_whitespace();
        match self.data.get(self.x) {
            None => Err(self.error(ParseErrorKind::UnexpectedEnd)),
            Some(b'{') => self.read_obj(),
            Some(b'[') => self.read_arr(),
            Some(b'"') => self.read_str(),
            Some(b't') => self.read_keyword("true", Value::Bool(true)),
            Some(b'f') => self.read_keyword("false", Value::Bool(false)),
            Some(b'n') => self.read_keyword("null", Value::Null),
            Some(b'-' | b'0'..=b'9') => self.read_num(),
            Some(_) => Err(self.unexpected()),
        }
    }

    fn skip_whitespace(&mut self) {
        while let Some(b' ' | b'\t' | b'\n' | b'\r') = self.data.get(self.x) {
            self.x += 1;
        }
    }

    fn read_keyword(&mut self, word: &'static str, value: Value) -> Result<Node, ParseError> {
        let start = self.x;
        for &expected in word.as_bytes() {
            if self.data.get(self.x) != Some(&expected) {
                return Err(self.unexpected());
            }
            self.x += 1;
        }
        Ok(Node::Literal(LiteralNode {
            value,
            raw: word.to_string(),
            range: self.range(start, self.x),
        }))
    }

    fn read_num(&mut self) -> Result<Node, ParseError> {
        let start = self.x;
        if self.data.get(self.x) == Some(&b'-') {
            self.x += 1;
        }
        match self.data.get(self.x) {
            Some(b'0') => self.x += 1,
            Some(b'1'..=b'9') => self.skip_digits(),
            _ => return Err(self.error(ParseErrorKind::InvalidNumber)),
        }
        if self.data.get(self.x) == Some(&b'.') {
            self.x += 1;
            self.expect_digits()?;
        }
        if let Some(b'e' | b'E') = self.data.get(self.x) {
            self.x += 1;
            if let Some(b'+' | b'-') = self.data.get(self.x) {
                self.x += 1;
            }
            self.expect_digits()?;
        }

        let raw = &self.text[start..self.x];
        // Out-of-range exponents are rejected here.
        let value: Value = serde_json::from_str(raw)
            .map_err(|_| self.error_at(start, ParseErrorKind::InvalidNumber))?;
        Ok(Node::Literal(LiteralNode {
            value,
            raw: raw.to_string(),
            range: self.range(start, self.x),
        }))
    }

    fn skip_digits(&mut self) {
        while let Some(b'0'..=b'9') = self.data.get(self.x) {
            self.x += 1;
        }
    }

    fn expect_digits(&mut self) -> Result<(), ParseError> {
        if !matches!(self.data.get(self.x), Some(b'0'..=b'9')) {
            return Err(self.error(ParseErrorKind::InvalidNumber));
        }
        self.skip_digits();
        Ok(())
    }

    fn read_str(&mut self) -> Result<Node, ParseError> {
        let (value, raw, range) = self.read_string_token()?;
        Ok(Node::Literal(LiteralNode {
            value: Value::String(value),
            raw,
            range,
        }))
    }

    /// Read a quoted string starting at `self.x`. Returns the unescaped
    /// value, the raw token and its range.
    fn read_string_token(&mut self) -> Result<(String, String, SourceRange), ParseError> {
        let start = self.x;
        let mut x = start + 1;
        let mut escaped = false;
        loop {
            match self.data.get(x) {
                None => return Err(self.error_at(start, ParseErrorKind::UnterminatedString)),
                Some(b'"') => break,
                Some(b'\\') => {
                    if let Some(&b) = self.data.get(x + 1) {
                        if b < 0x20 {
                            return Err(self.error_at(x + 1, ParseErrorKind::ControlCharacter));
                        }
                    }
                    escaped = true;
                    x += 2;
                }
                Some(&b) if b < 0x20 => {
                    return Err(self.error_at(x, ParseErrorKind::ControlCharacter));
                }
                Some(_) => x += 1,
            }
        }
        let end = x + 1;
        let raw = &self.text[start..end];
        let value = if escaped {
            serde_json::from_str::<String>(raw)
                .map_err(|_| self.error_at(start, ParseErrorKind::InvalidEscape))?
        } else {
            self.text[start + 1..x].to_string()
        };
        self.x = end;
        Ok((value, raw.to_string(), self.range(start, end)))
    }

    fn read_arr(&mut self) -> Result<Node, ParseError> {
        let start = self.x;
        self.enter()?;
        self.x += 1;
        let mut children = Vec::new();
        loop {
            self.skip_whitespace();
            match self.data.get(self.x) {
                None => return Err(self.error(ParseErrorKind::UnexpectedEnd)),
                Some(b']') if children.is_empty() => {
                    self.x += 1;
                    break;
                }
                _ => {}
            }
            children.push(self.read_any()?);
            self.skip_whitespace();
            match self.data.get(self.x) {
                Some(b',') => self.x += 1,
                Some(b']') => {
                    self.x += 1;
                    break;
                }
                _ => return Err(self.unexpected()),
            }
        }
        self.depth -= 1;
        Ok(Node::Array(ArrayNode {
            children,
            range: self.range(start, self.x),
        }))
    }

    fn read_obj(&mut self) -> Result<Node, ParseError> {
        let start = self.x;
        self.enter()?;
        self.x += 1;
        let mut children = Vec::new();
        loop {
            self.skip_whitespace();
            match self.data.get(self.x) {
                None => return Err(self.error(ParseErrorKind::UnexpectedEnd)),
                Some(b'}') if children.is_empty() => {
                    self.x += 1;
                    break;
                }
                Some(b'"') => {}
                _ => return Err(self.unexpected()),
            }
            let key = self.read_key()?;
            self.skip_whitespace();
            if self.data.get(self.x) != Some(&b':') {
                return Err(self.unexpected());
            }
            self.x += 1;
            let value = self.read_any()?;
            let range = SourceRange::new(key.range.start, value.range().end);
            children.push(PropertyNode {
                key,
                value: Box::new(value),
                range,
            });
            self.skip_whitespace();
            match self.data.get(self.x) {
                Some(b',') => self.x += 1,
                Some(b'}') => {
                    self.x += 1;
                    break;
                }
                _ => return Err(self.unexpected()),
            }
        }
        self.depth -= 1;
        Ok(Node::Object(ObjectNode {
            children,
            range: self.range(start, self.x),
        }))
    }

    fn read_key(&mut self) -> Result<Identifier, ParseError> {
        let (value, raw, range) = self.read_string_token()?;
        Ok(Identifier { value, raw, range })
    }

    fn enter(&mut self) -> Result<(), ParseError> {
        self.depth += 1;
        if self.depth > self.max_depth {
            return Err(self.error(ParseErrorKind::TooDeep(self.max_depth)));
        }
        Ok(())
    }

    fn range(&self, start: usize, end: usize) -> SourceRange {
        SourceRange::new(self.index.offset_of_byte(start), self.index.offset_of_byte(end))
    }

    /// `UnexpectedToken` for the char at the cursor, or `UnexpectedEnd`.
    fn unexpected(&self) -> ParseError {
        match self.text[self.x..].chars().next() {
            Some(ch) => self.error(ParseErrorKind::UnexpectedToken(ch)),
            None => self.error(ParseErrorKind::UnexpectedEnd),
        }
    }

    fn error(&self, kind: ParseErrorKind) -> ParseError {
        self.error_at(self.x, kind)
    }

    fn error_at(&self, byte: usize, kind: ParseErrorKind) -> ParseError {
        let offset = self.index.offset_of_byte(byte);
        let position = self.index.position(offset);
        ParseError {
            kind,
            offset,
            line: position.line,
            column: position.column,
        }
    }
}
