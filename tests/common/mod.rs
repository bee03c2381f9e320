#![allow(dead_code)]

use tagtree::{ParsedTag, TagProperty, Token, parse_str, tokenize};

/// Write a tree back out as document text. Test-only: values that are
/// not plain words are quoted with `\` escapes.
pub fn to_source(tags: &[ParsedTag]) -> String {
    let mut out = String::new();
    for tag in tags {
        write_tag(&mut out, tag, 0);
    }
    out
}

fn write_tag(out: &mut String, tag: &ParsedTag, depth: usize) {
    out.push_str(&"\t".repeat(depth));
    out.push('{');
    out.push_str(&word(&tag.name));
    for property in &tag.properties {
        out.push(' ');
        write_property(out, property);
    }
    if tag.children.is_empty() {
        out.push_str("}\n");
        return;
    }
    out.push('\n');
    for child in &tag.children {
        write_tag(out, child, depth + 1);
    }
    out.push_str(&"\t".repeat(depth));
    out.push_str("}\n");
}

fn write_property(out: &mut String, property: &TagProperty) {
    out.push_str(&word(&property.name));
    if let Some(value) = &property.value {
        out.push('=');
        out.push_str(&word(value));
    }
}

fn word(text: &str) -> String {
    let plain = !text.is_empty()
        && text
            .chars()
            .all(|c| !c.is_whitespace() && !matches!(c, '{' | '}' | '=' | '"' | '\\'));
    if plain {
        return text.to_string();
    }
    let mut quoted = String::from("\"");
    for c in text.chars() {
        if matches!(c, '"' | '\\') {
            quoted.push('\\');
        }
        quoted.push(c);
    }
    quoted.push('"');
    quoted
}

/// Parse, panicking with the offending input on failure.
pub fn parse_ok(input: &str) -> Vec<ParsedTag> {
    parse_str(input).unwrap_or_else(|e| panic!("failed to parse: {e}\n--- input ---\n{input}"))
}

/// Count of `{` tokens in the stream.
pub fn open_tags(input: &str) -> usize {
    tokenize(input)
        .expect("tokenize")
        .iter()
        .filter(|t| matches!(t, Token::OpenTag { .. }))
        .count()
}
