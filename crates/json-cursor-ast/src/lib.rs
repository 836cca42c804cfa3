//! JSON syntax tree with source ranges.
//!
//! This crate parses JSON text into a tree of [`Node`]s where every node
//! carries the half-open [`SourceRange`] of the text it was read from. The
//! tree is what `json-cursor-path` walks to turn a cursor offset into a path.
//!
//! # Example
//!
//! ```
//! use json_cursor_ast::{parse, Node, NodeKind, SourceRange};
//!
//! let root = parse(r#"{"name": "x"}"#).unwrap();
//! assert_eq!(root.kind(), NodeKind::Object);
//!
//! let Node::Object(object) = &root else { unreachable!() };
//! let name = &object.children[0];
//! assert_eq!(name.key.value, "name");
//! assert_eq!(name.key.range, SourceRange::new(1, 7));
//! assert_eq!(name.value.range(), SourceRange::new(9, 12));
//! ```

mod range;
pub use range::SourceRange;

mod types;
pub use types::*;

mod ast;
pub use ast::Ast;

mod error;
pub use error::{ParseError, ParseErrorKind};

mod options;
pub use options::{OffsetUnit, ParseOptions};

mod line_index;
pub use line_index::{LineIndex, Position};

mod parser;
pub use parser::{parse, parse_with_options, DEFAULT_MAX_DEPTH};
