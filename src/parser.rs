use std::fmt;

use crate::ast::{ParsedTag, TagProperty};
use crate::token::{Position, Token};

/// Classifies a parser error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// A sibling position expected `{`.
    ExpectedOpenTag { found: String },
    /// The token after `{` is not a value, or input ended.
    ExpectedTagName { found: Option<String> },
    /// No `{` or `}` follows the tag name, or the tag is never closed.
    UnterminatedTag { name: String },
    /// `=` with no property name before it.
    DanglingPropertyJoin,
    /// A tag delimiter inside a property run.
    ExpectedProperty { found: String },
    /// `}` at the top level with no tag to close.
    UnmatchedCloseTag,
}

impl fmt::Display for ParseErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ExpectedOpenTag { found } => {
                write!(f, "expected an open tag '{{', got {found}")
            }
            Self::ExpectedTagName { found: None } => {
                write!(f, "expected a tag name")
            }
            Self::ExpectedTagName { found: Some(t) } => {
                write!(f, "expected a tag name, got {t}")
            }
            Self::UnterminatedTag { name } => {
                write!(f, "unable to find a closing tag for '{name}'")
            }
            Self::DanglingPropertyJoin => {
                write!(f, "property join '=' has no property name")
            }
            Self::ExpectedProperty { found } => {
                write!(f, "expected a property, got {found}")
            }
            Self::UnmatchedCloseTag => {
                write!(f, "close tag '}}' has no matching open tag")
            }
        }
    }
}

/// Error produced during parsing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{kind} at {position}")]
pub struct ParseError {
    pub kind: ParseErrorKind,
    pub position: Position,
}

impl ParseError {
    const fn new(kind: ParseErrorKind, position: Position) -> Self {
        Self { kind, position }
    }
}

/// Parse a whole document: every token must belong to a root tag.
///
/// # Errors
///
/// Returns `ParseError` on malformed tags, or `UnmatchedCloseTag` for
/// a `}` left over at the top level.
pub fn parse(tokens: &[Token]) -> Result<Vec<ParsedTag>, ParseError> {
    let mut parser = Parser::new(tokens);
    let roots = parser.children()?;

    if let Some(token) = parser.peek() {
        return Err(ParseError::new(
            ParseErrorKind::UnmatchedCloseTag,
            token.position(),
        ));
    }

    Ok(roots)
}

/// Parse the run of sibling tags at the start of `tokens`.
///
/// Stops without error at the first `}` that does not belong to one of
/// the siblings; anything after it is left unparsed. Use [`parse`] to
/// reject such leftovers.
///
/// # Errors
///
/// Returns `ParseError` on malformed tags.
pub fn parse_children(tokens: &[Token]) -> Result<Vec<ParsedTag>, ParseError> {
    Parser::new(tokens).children()
}

/// Interpret a run of value and `=` tokens as tag properties.
///
/// `a b=c d` gives `a`, `b=c` and `d`, in that order. A trailing
/// `name=` with nothing after it yields the flag `name`.
///
/// # Errors
///
/// Returns `DanglingPropertyJoin` for `=` without a name, and
/// `ExpectedProperty` if a `{` or `}` is in the run.
pub fn parse_props(tokens: &[Token]) -> Result<Vec<TagProperty>, ParseError> {
    let mut properties = Vec::new();
    let mut pending: Option<String> = None;
    let mut joined = false;

    for token in tokens {
        match token {
            Token::Value { content, .. } => match pending.take() {
                Some(name) if joined => {
                    properties.push(TagProperty {
                        name,
                        value: Some(content.clone()),
                    });
                    joined = false;
                }
                Some(name) => {
                    properties.push(TagProperty { name, value: None });
                    pending = Some(content.clone());
                }
                None => {
                    pending = Some(content.clone());
                    joined = false;
                }
            },
            Token::PropertyJoin { position } => {
                if pending.is_none() {
                    return Err(ParseError::new(
                        ParseErrorKind::DanglingPropertyJoin,
                        *position,
                    ));
                }
                joined = true;
            }
            Token::OpenTag { position } | Token::CloseTag { position } => {
                return Err(ParseError::new(
                    ParseErrorKind::ExpectedProperty {
                        found: token.describe(),
                    },
                    *position,
                ));
            }
        }
    }

    if let Some(name) = pending {
        properties.push(TagProperty { name, value: None });
    }

    Ok(properties)
}

struct Parser<'a> {
    tokens: &'a [Token],
    pos: usize,
}

/// A tag whose `{` and properties are consumed but whose `}` is not.
struct PendingTag {
    name: String,
    name_position: Position,
    properties: Vec<TagProperty>,
    children: Vec<ParsedTag>,
}

impl PendingTag {
    fn unterminated(&self) -> ParseError {
        ParseError::new(
            ParseErrorKind::UnterminatedTag {
                name: self.name.clone(),
            },
            self.name_position,
        )
    }

    fn close(self) -> ParsedTag {
        tracing::trace!(tag = %self.name, children = self.children.len(), "parsed tag");
        ParsedTag {
            name: self.name,
            properties: self.properties,
            children: self.children,
        }
    }
}

impl<'a> Parser<'a> {
    const fn new(tokens: &'a [Token]) -> Self {
        Self { tokens, pos: 0 }
    }

    fn peek(&self) -> Option<&'a Token> {
        self.tokens.get(self.pos)
    }

    /// Parse sibling tags until a `}` that none of them owns, or the end
    /// of input. Nesting is tracked on an explicit stack of open tags so
    /// depth is bounded by memory, not by the call stack.
    fn children(&mut self) -> Result<Vec<ParsedTag>, ParseError> {
        let mut roots = Vec::new();
        let mut open: Vec<PendingTag> = Vec::new();

        loop {
            match self.peek() {
                Some(Token::OpenTag { position }) => {
                    self.pos += 1;
                    open.push(self.open_tag(*position)?);
                }
                Some(Token::CloseTag { .. }) => {
                    // A close nobody owns belongs to the caller.
                    let Some(tag) = open.pop() else { break };
                    self.pos += 1;
                    let tag = tag.close();
                    match open.last_mut() {
                        Some(parent) => parent.children.push(tag),
                        None => roots.push(tag),
                    }
                }
                Some(token) => {
                    return Err(ParseError::new(
                        ParseErrorKind::ExpectedOpenTag {
                            found: token.describe(),
                        },
                        token.position(),
                    ));
                }
                None => match open.last() {
                    Some(tag) => return Err(tag.unterminated()),
                    None => break,
                },
            }
        }

        Ok(roots)
    }

    /// Parse a tag name and its property run; the cursor sits just after
    /// the `{` and is left on the `{` or `}` ending the properties.
    fn open_tag(&mut self, open: Position) -> Result<PendingTag, ParseError> {
        let (name, name_position) = match self.peek() {
            Some(Token::Value { content, start, .. }) => (content.clone(), *start),
            Some(token) => {
                return Err(ParseError::new(
                    ParseErrorKind::ExpectedTagName {
                        found: Some(token.describe()),
                    },
                    token.position(),
                ));
            }
            None => {
                return Err(ParseError::new(
                    ParseErrorKind::ExpectedTagName { found: None },
                    open,
                ));
            }
        };
        self.pos += 1;

        let Some(offset) = self.tokens[self.pos..]
            .iter()
            .position(Token::is_tag_delimiter)
        else {
            return Err(ParseError::new(
                ParseErrorKind::UnterminatedTag { name },
                name_position,
            ));
        };
        let delimiter = self.pos + offset;

        let properties = parse_props(&self.tokens[self.pos..delimiter])?;
        self.pos = delimiter;
        tracing::trace!(tag = %name, properties = properties.len(), "parsed tag properties");

        Ok(PendingTag {
            name,
            name_position,
            properties,
            children: Vec::new(),
        })
    }
}
