//! Tokenizer and parser for a small brace-delimited tag language.
//!
//! A document is a sequence of `{name prop=value flag "quoted value"
//! {child ...}}` expressions. Text before the first `{` is a preamble
//! and is ignored. Parsing produces a tree of [`ParsedTag`] nodes.
//!
//! # Quick start
//!
//! ```
//! use tagtree::{parse, tokenize};
//!
//! let tokens = tokenize("notes\n{site name=\"My Site\" {page index}}").unwrap();
//! let tags = parse(&tokens).unwrap();
//!
//! assert_eq!(tags[0].name, "site");
//! assert_eq!(tags[0].value_of("name"), Some("My Site"));
//! assert!(tags[0].children[0].has_property("index"));
//! ```
//!
//! ## Build a tree programmatically
//!
//! ```
//! use tagtree::{ParsedTag, outline};
//!
//! let tree = ParsedTag::new("site")
//!     .with_value("name", "demo")
//!     .with_child(ParsedTag::new("page").with_flag("index"));
//!
//! assert_eq!(outline(&[tree]), "site name=\"demo\"\n  page index\n");
//! ```

#![allow(
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::module_name_repetitions
)]

pub mod ast;
pub mod builder;
#[cfg(feature = "cli")]
pub mod config;
pub mod lexer;
#[cfg(feature = "cli")]
pub mod logging;
pub mod outline;
pub mod parser;
pub mod token;

pub use ast::{ParsedTag, TagProperty};
pub use lexer::{LexError, LexErrorKind, tokenize};
pub use outline::outline;
pub use parser::{ParseError, ParseErrorKind, parse, parse_children, parse_props};
pub use token::{Position, Token};

/// Unified error type covering both lexing and parsing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// A lexer error.
    #[error("{0}")]
    Lex(#[from] LexError),
    /// A parser error.
    #[error("{0}")]
    Parse(#[from] ParseError),
}

impl Error {
    /// Location the error points at, zero-based.
    #[must_use]
    pub const fn position(&self) -> Position {
        match self {
            Self::Lex(e) => e.position,
            Self::Parse(e) => e.position,
        }
    }

    /// The error message without its location.
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            Self::Lex(e) => e.kind.to_string(),
            Self::Parse(e) => e.kind.to_string(),
        }
    }
}

/// Tokenize and parse a document in one step.
pub fn parse_str(input: &str) -> Result<Vec<ParsedTag>, Error> {
    let tokens = tokenize(input)?;
    Ok(parse(&tokens)?)
}
