//! Indented, human-readable dump of a parsed tree.
//!
//! One line per tag, children indented two spaces below their parent,
//! properties listed after the tag name. Values are shown Rust-quoted so
//! whitespace and escapes stay visible. This is a debugging view and is
//! not meant to be read back by the tokenizer.

use std::fmt::Write as _;

use crate::ast::{ParsedTag, TagProperty};

const INDENT: &str = "  ";

/// Render root tags and their subtrees as an outline.
#[must_use]
pub fn outline(tags: &[ParsedTag]) -> String {
    let mut out = String::new();
    let mut stack: Vec<(&ParsedTag, usize)> = tags.iter().rev().map(|tag| (tag, 0)).collect();

    while let Some((tag, depth)) = stack.pop() {
        outline_tag(&mut out, tag, depth);
        stack.extend(tag.children.iter().rev().map(|child| (child, depth + 1)));
    }
    out
}

fn outline_tag(out: &mut String, tag: &ParsedTag, depth: usize) {
    out.push_str(&INDENT.repeat(depth));
    out.push_str(&tag.name);

    for property in &tag.properties {
        out.push(' ');
        outline_property(out, property);
    }
    out.push('\n');
}

fn outline_property(out: &mut String, property: &TagProperty) {
    out.push_str(&property.name);
    if let Some(value) = &property.value {
        let _ = write!(out, "={value:?}");
    }
}
