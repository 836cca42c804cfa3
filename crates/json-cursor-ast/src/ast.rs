//! AST construction helpers.
//!
//! Handy for building trees by hand, e.g. in tests. Nothing here checks the
//! range invariants a parsed tree satisfies.

use serde_json::Value;

use crate::range::SourceRange;
use crate::types::*;

/// Helper functions for constructing syntax tree nodes.
pub struct Ast;

impl Ast {
    /// Create an object node.
    pub fn object(range: impl Into<SourceRange>, children: Vec<PropertyNode>) -> Node {
        Node::Object(ObjectNode {
            children,
            range: range.into(),
        })
    }

    /// Create an array node.
    pub fn array(range: impl Into<SourceRange>, children: Vec<Node>) -> Node {
        Node::Array(ArrayNode {
            children,
            range: range.into(),
        })
    }

    /// Create a property whose range runs from the key start to the value end.
    pub fn property(key: Identifier, value: Node) -> PropertyNode {
        let range = SourceRange::new(key.range.start, value.range().end);
        PropertyNode {
            key,
            value: Box::new(value),
            range,
        }
    }

    /// Create a key. `raw` is the quoted form of `value`.
    pub fn key(value: impl Into<String>, range: impl Into<SourceRange>) -> Identifier {
        let value = value.into();
        Identifier {
            raw: Value::String(value.clone()).to_string(),
            value,
            range: range.into(),
        }
    }

    /// Create a literal node. `raw` is the compact serialization of `value`.
    pub fn literal(value: Value, range: impl Into<SourceRange>) -> Node {
        Node::Literal(LiteralNode {
            raw: value.to_string(),
            value,
            range: range.into(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_ast_construction() {
        // {"a":[1]}
        let node = Ast::object(
            0..9,
            vec![Ast::property(
                Ast::key("a", 1..4),
                Ast::array(5..8, vec![Ast::literal(json!(1), 6..7)]),
            )],
        );

        assert_eq!(node.kind(), NodeKind::Object);
        assert_eq!(node.to_value(), json!({"a": [1]}));
        let Node::Object(object) = &node else {
            panic!("expected object");
        };
        assert_eq!(object.children[0].range, SourceRange::new(1, 8));
        assert_eq!(object.children[0].key.raw, "\"a\"");
    }
}
