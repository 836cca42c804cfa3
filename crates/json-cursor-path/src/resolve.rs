//! Offset-to-path resolution.
//!
//! The walk is top-down. At each level the children are scanned in source
//! order and the scan stops at the first child that contains the offset, or
//! at the first child that starts after it. Offsets that fall into a gap
//! (delimiters, whitespace) are attributed as follows:
//!
//! - object: a gap before a property's value belongs to that property's key,
//!   so the comma and whitespace between two members resolve to the second;
//! - array: a gap before an element belongs to the array itself;
//! - a trailing gap before the closing delimiter belongs to the container.

use json_cursor_ast::{parse, ArrayNode, Node, ObjectNode, ParseError};

use crate::types::{CursorPath, PathSegment};

/// Resolve `offset` to the path of the deepest value containing it.
///
/// Never fails: with no tree, or an offset outside the root's range
/// (negative offsets included), the result is the root path `$`.
///
/// ```
/// use json_cursor_ast::parse;
/// use json_cursor_path::resolve_path;
///
/// let text = r#"{"a":[1,{"b":2}]}"#;
/// let root = parse(text).unwrap();
/// let at = |needle: &str| text.find(needle).unwrap() as isize;
///
/// assert_eq!(resolve_path(Some(&root), at("2")).to_string(), "$.a[1].b");
/// assert_eq!(resolve_path(Some(&root), at("b")).to_string(), "$.a[1].b");
/// assert_eq!(resolve_path(None, 5).to_string(), "$");
/// ```
pub fn resolve_path(root: Option<&Node>, offset: isize) -> CursorPath {
    let path = root
        .and_then(|root| descend(root, offset, &mut Vec::new()))
        .unwrap_or_default();
    tracing::trace!(target: "json_cursor::resolve", offset, %path, "resolved cursor path");
    path
}

/// Parse `text` and resolve `offset` in it, with offsets counted in chars.
///
/// Blank text has no document and resolves to `$`.
pub fn resolve_path_str(text: &str, offset: isize) -> Result<CursorPath, ParseError> {
    if text.trim().is_empty() {
        return Ok(CursorPath::root());
    }
    let root = parse(text)?;
    Ok(resolve_path(Some(&root), offset))
}

/// `None` when `node` does not contain `offset`; the caller then carries on
/// with the next sibling.
///
/// `trail` holds the segments leading to `node`. It is left as it was on
/// `None`.
fn descend(node: &Node, offset: isize, trail: &mut Vec<PathSegment>) -> Option<CursorPath> {
    if !node.range().contains(offset) {
        return None;
    }
    let found = match node {
        Node::Object(object) => descend_object(object, offset, trail),
        Node::Array(array) => descend_array(array, offset, trail),
        // A property is only reached through its object; alone it is a leaf.
        Node::Property(_) | Node::Literal(_) => snapshot(trail),
    };
    Some(found)
}

fn descend_object(object: &ObjectNode, offset: isize, trail: &mut Vec<PathSegment>) -> CursorPath {
    for property in &object.children {
        trail.push(PathSegment::Key(property.key.value.clone()));
        if property.key.range.contains(offset) {
            return snapshot(trail);
        }
        if let Some(found) = descend(&property.value, offset, trail) {
            return found;
        }
        if property.value.range().starts_after(offset) {
            return snapshot(trail);
        }
        trail.pop();
    }
    snapshot(trail)
}

fn descend_array(array: &ArrayNode, offset: isize, trail: &mut Vec<PathSegment>) -> CursorPath {
    for (index, element) in array.children.iter().enumerate() {
        trail.push(PathSegment::Index(index));
        if let Some(found) = descend(element, offset, trail) {
            return found;
        }
        trail.pop();
        if element.range().starts_after(offset) {
            return snapshot(trail);
        }
    }
    snapshot(trail)
}

fn snapshot(trail: &[PathSegment]) -> CursorPath {
    CursorPath::new(trail.to_vec())
}
