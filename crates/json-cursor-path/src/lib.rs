//! Resolve a cursor offset in JSON text to the path of the value under it.
//!
//! Given a tree parsed by [`json_cursor_ast`] and a cursor offset, this crate
//! produces a path such as `$.a[2].b` naming the deepest value that contains
//! the cursor. It is the primitive behind "where am I?" status bars in JSON
//! editors.
//!
//! # Example
//!
//! ```
//! use json_cursor_path::{resolve_path_str, Document};
//!
//! let text = r#"{"a": 1, "b": [true, null]}"#;
//! assert_eq!(resolve_path_str(text, 22).unwrap().to_string(), "$.b[1]");
//!
//! // Between two members: attributed to the member that follows.
//! assert_eq!(resolve_path_str(text, 7).unwrap().to_string(), "$.b");
//!
//! let doc = Document::new(text);
//! assert_eq!(doc.path_at(15).to_string(), "$.b[0]");
//! ```

mod types;
pub use types::{CursorPath, PathSegment, ROOT_MARKER};

mod resolve;
pub use resolve::{resolve_path, resolve_path_str};

mod document;
pub use document::{Document, Readout, UNRESOLVED};

pub mod cli;
