use json_cursor_ast::{parse, parse_with_options, Ast, Node, OffsetUnit, ParseOptions, SourceRange};
use json_cursor_path::{resolve_path, resolve_path_str, CursorPath, PathSegment};
use proptest::prelude::*;
use serde_json::{json, Value};

fn resolve_all(text: &str) -> Vec<String> {
    let root = parse(text).unwrap();
    (0..text.chars().count() as isize)
        .map(|offset| resolve_path(Some(&root), offset).to_string())
        .collect()
}

fn arb_json() -> impl Strategy<Value = Value> {
    let leaf = prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i32>().prop_map(Value::from),
        "[a-z \u{e9}]{0,4}".prop_map(Value::String),
    ];
    leaf.prop_recursive(4, 40, 4, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..4).prop_map(Value::Array),
            prop::collection::vec(("[a-z]{1,3}", inner), 0..4)
                .prop_map(|members| Value::Object(members.into_iter().collect())),
        ]
    })
}

/// Every literal and key in the tree with the path that names it.
fn collect_targets(node: &Node, path: &CursorPath, out: &mut Vec<(SourceRange, CursorPath)>) {
    match node {
        Node::Object(object) => {
            for property in &object.children {
                let mut child = path.clone();
                child.push(PathSegment::Key(property.key.value.clone()));
                out.push((property.key.range, child.clone()));
                collect_targets(&property.value, &child, out);
            }
        }
        Node::Array(array) => {
            for (index, element) in array.children.iter().enumerate() {
                let mut child = path.clone();
                child.push(PathSegment::Index(index));
                collect_targets(element, &child, out);
            }
        }
        Node::Property(_) => {}
        Node::Literal(literal) => out.push((literal.range, path.clone())),
    }
}

fn lookup<'a>(value: &'a Value, path: &CursorPath) -> Option<&'a Value> {
    path.segments()
        .iter()
        .try_fold(value, |current, segment| match segment {
            PathSegment::Key(key) => current.as_object()?.get(key),
            PathSegment::Index(index) => current.as_array()?.get(*index),
        })
}

proptest! {
    #[test]
    fn every_offset_resolves_to_an_existing_value(value in arb_json(), pretty in any::<bool>()) {
        let text = if pretty {
            serde_json::to_string_pretty(&value).unwrap()
        } else {
            serde_json::to_string(&value).unwrap()
        };
        let root = parse(&text).unwrap();
        let len = text.chars().count() as isize;
        for offset in -3..len + 3 {
            let path = resolve_path(Some(&root), offset);
            prop_assert!(path.to_string().starts_with('$'));
            prop_assert!(lookup(&value, &path).is_some(), "{} at {}", path, offset);
        }
    }

    #[test]
    fn literals_and_keys_resolve_to_their_own_path(value in arb_json()) {
        let text = serde_json::to_string_pretty(&value).unwrap();
        let root = parse(&text).unwrap();
        let mut targets = Vec::new();
        collect_targets(&root, &CursorPath::root(), &mut targets);
        for (range, expected) in targets {
            for offset in range.start..range.end {
                let path = resolve_path(Some(&root), offset as isize);
                prop_assert_eq!(&path, &expected);
                prop_assert_eq!(path.depth(), expected.depth());
            }
        }
    }
}

#[test]
fn gap_attribution_matrix() {
    // Between two members: the following key.
    let text = r#"{"a": 1, "b": 2}"#;
    assert_eq!(resolve_path_str(text, 7).unwrap().to_string(), "$.b");
    assert_eq!(resolve_path_str(text, 8).unwrap().to_string(), "$.b");

    // Between two elements: the array.
    let text = "[1, 2]";
    assert_eq!(resolve_path_str(text, 2).unwrap().to_string(), "$");
    assert_eq!(resolve_path_str(text, 3).unwrap().to_string(), "$");
}

#[test]
fn empty_containers_matrix() {
    assert_eq!(resolve_all("{}"), vec!["$", "$"]);
    assert_eq!(resolve_all("[]"), vec!["$", "$"]);
    assert_eq!(resolve_all("{ }"), vec!["$", "$", "$"]);
    assert_eq!(resolve_all("[{}]"), vec!["$", "$[0]", "$[0]", "$"]);
}

#[test]
fn key_region_matches_value_region() {
    let text = r#"{"name": "x"}"#;
    let paths = resolve_all(text);
    // Quotes and letters of "name", then the value "x".
    for offset in (1..7).chain(9..12) {
        assert_eq!(paths[offset], "$.name", "offset {offset}");
    }
}

#[test]
fn nested_scenario_matrix() {
    // {"a":[1,{"b":2}]}
    // 0         1
    // 01234567890123456
    let text = r#"{"a":[1,{"b":2}]}"#;
    let paths = resolve_all(text);
    let expected = [
        "$.a",      // {  before the first key
        "$.a",      // "
        "$.a",      // a
        "$.a",      // "
        "$.a",      // :
        "$.a",      // [  the array value itself
        "$.a[0]",   // 1
        "$.a",      // ,  gap before element 1 belongs to the array
        "$.a[1].b", // {  gap before key b
        "$.a[1].b", // "
        "$.a[1].b", // b
        "$.a[1].b", // "
        "$.a[1].b", // :
        "$.a[1].b", // 2
        "$.a[1]",   // }  trailing gap of the inner object
        "$.a",      // ]  trailing gap of the array
        "$",        // }  trailing gap of the root
    ];
    assert_eq!(paths, expected);
}

#[test]
fn out_of_range_offsets_are_root() {
    let text = r#" {"a": 1} "#;
    let root = parse(text).unwrap();
    for offset in [isize::MIN, -1, 0, 9, 10, 1_000, isize::MAX] {
        assert_eq!(resolve_path(Some(&root), offset).to_string(), "$", "{offset}");
    }
    assert_eq!(resolve_path(None, 5).to_string(), "$");
}

#[test]
fn keys_are_rendered_verbatim() {
    let text = r#"{"a.b": {"": {"x y": [0]}}}"#;
    let offset = text.find('0').unwrap() as isize;
    assert_eq!(resolve_path_str(text, offset).unwrap().to_string(), "$.a.b..x y[0]");
}

#[test]
fn escaped_keys_use_unescaped_value() {
    let text = r#"{"a\u0041": 1}"#;
    assert_eq!(resolve_path_str(text, 5).unwrap().to_string(), "$.aA");
    assert_eq!(resolve_path_str(text, 12).unwrap().to_string(), "$.aA");
}

#[test]
fn utf16_offsets() {
    let text = "{\"\u{1f600}\": [1, 2]}";
    let root = parse_with_options(text, &ParseOptions::with_unit(OffsetUnit::Utf16)).unwrap();
    // { " 😀(2 units) " : space [ 1 , space 2 ] }
    assert_eq!(resolve_path(Some(&root), 11).to_string(), "$.\u{1f600}[1]");
    assert_eq!(resolve_path(Some(&root), 8).to_string(), "$.\u{1f600}[0]");
}

#[test]
fn overlapping_siblings_follow_scan_order() {
    // Not something the parser produces: both elements claim offset 2.
    let root = Ast::array(
        0..6,
        vec![Ast::literal(json!(1), 1..3), Ast::literal(json!(2), 2..5)],
    );
    assert_eq!(resolve_path(Some(&root), 2).to_string(), "$[0]");
    assert_eq!(resolve_path(Some(&root), 3).to_string(), "$[1]");
}
