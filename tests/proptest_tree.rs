//! Property-based tests with proptest.
//!
//! Generate random trees, write them out as document text, parse them
//! back and check the tree survives unchanged.

mod common;

use common::{open_tags, to_source};
use proptest::prelude::*;
use tagtree::{ParsedTag, TagProperty, Token, parse_str, tokenize};

// -- Leaf strategies --

/// Plain word: no whitespace and none of `{ } = " \`.
fn word() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9_./:-]{1,12}".prop_map(|s| s)
}

/// Any printable text, including characters that need quoting.
fn text() -> impl Strategy<Value = String> {
    "[ -~\t\n]{0,16}".prop_map(|s| s)
}

fn name() -> impl Strategy<Value = String> {
    prop_oneof![
        3 => word(),
        1 => text(),
    ]
}

fn property() -> impl Strategy<Value = TagProperty> {
    (name(), prop::option::of(name())).prop_map(|(name, value)| TagProperty { name, value })
}

/// Tag at a given depth (limits recursion)
fn tag(depth: u32) -> impl Strategy<Value = ParsedTag> {
    let leaf = (name(), prop::collection::vec(property(), 0..=4)).prop_map(|(name, properties)| {
        ParsedTag {
            name,
            properties,
            children: Vec::new(),
        }
    });

    if depth == 0 {
        leaf.boxed()
    } else {
        let with_children = (
            name(),
            prop::collection::vec(property(), 0..=3),
            prop::collection::vec(tag(depth - 1), 1..=3),
        )
            .prop_map(|(name, properties, children)| ParsedTag {
                name,
                properties,
                children,
            });

        prop_oneof![
            2 => leaf,
            1 => with_children,
        ]
        .boxed()
    }
}

fn forest() -> impl Strategy<Value = Vec<ParsedTag>> {
    prop::collection::vec(tag(3), 1..=4)
}

// -- Property tests --

proptest! {
    /// Writing a tree out and parsing it back gives the same tree.
    #[test]
    fn source_roundtrip(tags in forest()) {
        let source = to_source(&tags);
        let parsed = parse_str(&source).map_err(|e| {
            TestCaseError::fail(std::format!("parse error: {e}\n--- source ---\n{source}"))
        })?;
        prop_assert_eq!(parsed, tags);
    }

    /// Every `{` starts exactly one tag.
    #[test]
    fn node_count_equals_open_tags(tags in forest()) {
        let source = to_source(&tags);
        let nodes: usize = tags.iter().map(ParsedTag::node_count).sum();
        prop_assert_eq!(nodes, open_tags(&source));
    }

    /// Tokenizing is a pure function of the input.
    #[test]
    fn tokenize_is_deterministic(input in "[ -~\n]{0,64}") {
        prop_assert_eq!(tokenize(&input), tokenize(&input));
    }

    /// Arbitrary input never panics; it either parses or errors.
    #[test]
    fn arbitrary_input_never_panics(input in "[{}=\"\\\\a-c \n]{0,48}") {
        let _ = parse_str(&input);
    }

    /// Every value token ends at or after its start.
    #[test]
    fn value_spans_are_ordered(tags in forest()) {
        let source = to_source(&tags);
        let tokens = tokenize(&source).map_err(|e| TestCaseError::fail(e.to_string()))?;
        let spans = tokens.iter().filter_map(|t| match t {
            Token::Value { start, end, content } if !content.is_empty() => Some((*start, *end)),
            _ => None,
        });
        for (start, end) in spans {
            prop_assert!(start <= end);
        }
    }
}
