//! Syntax tree node types.
//!
//! Every node carries the [`SourceRange`] of the text it was parsed from.
//! Children are stored in source order, their ranges do not overlap, and each
//! child range lies within its parent's range.

use serde_json::{Map, Value};

use crate::range::SourceRange;

/// A node of the JSON syntax tree.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// `{ ... }`, delimiters included in the range.
    Object(ObjectNode),
    /// `[ ... ]`, delimiters included in the range.
    Array(ArrayNode),
    /// A single `"key": value` member of an object.
    Property(PropertyNode),
    /// A string, number, boolean or null token.
    Literal(LiteralNode),
}

/// Discriminant of [`Node`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Object,
    Array,
    Property,
    Literal,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ObjectNode {
    pub children: Vec<PropertyNode>,
    pub range: SourceRange,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ArrayNode {
    pub children: Vec<Node>,
    pub range: SourceRange,
}

/// An object member. The range spans from the start of the key to the end
/// of the value.
#[derive(Debug, Clone, PartialEq)]
pub struct PropertyNode {
    pub key: Identifier,
    pub value: Box<Node>,
    pub range: SourceRange,
}

/// A property key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identifier {
    /// Unescaped key text.
    pub value: String,
    /// Source token, quotes included.
    pub raw: String,
    pub range: SourceRange,
}

/// A scalar token. `value` is always `Null`, `Bool`, `Number` or `String`.
#[derive(Debug, Clone, PartialEq)]
pub struct LiteralNode {
    pub value: Value,
    pub raw: String,
    pub range: SourceRange,
}

impl Node {
    pub fn range(&self) -> SourceRange {
        match self {
            Node::Object(node) => node.range,
            Node::Array(node) => node.range,
            Node::Property(node) => node.range,
            Node::Literal(node) => node.range,
        }
    }

    pub fn kind(&self) -> NodeKind {
        match self {
            Node::Object(_) => NodeKind::Object,
            Node::Array(_) => NodeKind::Array,
            Node::Property(_) => NodeKind::Property,
            Node::Literal(_) => NodeKind::Literal,
        }
    }

    /// Number of direct children. A property counts its value.
    pub fn children_len(&self) -> usize {
        match self {
            Node::Object(node) => node.children.len(),
            Node::Array(node) => node.children.len(),
            Node::Property(_) => 1,
            Node::Literal(_) => 0,
        }
    }

    /// Drop the source ranges and rebuild the plain JSON value.
    ///
    /// Members keep their source order; for duplicate keys the last one wins.
    /// A bare property converts to a single-member object.
    pub fn to_value(&self) -> Value {
        match self {
            Node::Object(node) => {
                let mut map = Map::with_capacity(node.children.len());
                for property in &node.children {
                    map.insert(property.key.value.clone(), property.value.to_value());
                }
                Value::Object(map)
            }
            Node::Array(node) => Value::Array(node.children.iter().map(Node::to_value).collect()),
            Node::Property(node) => {
                let mut map = Map::with_capacity(1);
                map.insert(node.key.value.clone(), node.value.to_value());
                Value::Object(map)
            }
            Node::Literal(node) => node.value.clone(),
        }
    }
}

impl From<ObjectNode> for Node {
    fn from(node: ObjectNode) -> Self {
        Node::Object(node)
    }
}

impl From<ArrayNode> for Node {
    fn from(node: ArrayNode) -> Self {
        Node::Array(node)
    }
}

impl From<PropertyNode> for Node {
    fn from(node: PropertyNode) -> Self {
        Node::Property(node)
    }
}

impl From<LiteralNode> for Node {
    fn from(node: LiteralNode) -> Self {
        Node::Literal(node)
    }
}
