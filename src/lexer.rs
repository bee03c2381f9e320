use std::fmt;

use crate::token::{Position, Token};

/// Classifies a lexer error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LexErrorKind {
    /// The input contains no `{` at all.
    NoDocumentStart,
    /// Backslash outside of a quoted value.
    UnexpectedEscape,
    /// Double quote in the middle of a bare value.
    UnexpectedQuote,
    /// Input ended while a value was still open.
    UnexpectedEndOfInput,
}

impl fmt::Display for LexErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoDocumentStart => {
                write!(f, "no document start, expected an opening tag '{{'")
            }
            Self::UnexpectedEscape => {
                write!(f, "unexpected escape sequence outside of a quoted value")
            }
            Self::UnexpectedQuote => {
                write!(f, "unexpected quote inside an unquoted value")
            }
            Self::UnexpectedEndOfInput => {
                write!(f, "unexpected end of input inside a value")
            }
        }
    }
}

/// Error produced during lexing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{kind} at {position}")]
pub struct LexError {
    pub kind: LexErrorKind,
    pub position: Position,
}

impl LexError {
    const fn new(kind: LexErrorKind, position: Position) -> Self {
        Self { kind, position }
    }
}

/// Tokenize a document into a flat sequence of tokens.
///
/// Line endings are normalised to `\n` first. Everything before the
/// first `{` is preamble: it produces no tokens but its lines still
/// count towards token positions.
///
/// # Errors
///
/// Returns `LexError` when no `{` exists, on a backslash or quote
/// outside of the places they are allowed, or when the input ends
/// inside a value.
pub fn tokenize(input: &str) -> Result<Vec<Token>, LexError> {
    let normalized = normalize_line_endings(input);
    let (open, body) = locate_document(&normalized)?;
    let tokens = Lexer::new(open).run(body)?;
    tracing::debug!(tokens = tokens.len(), "tokenized document");
    Ok(tokens)
}

fn normalize_line_endings(input: &str) -> String {
    input.replace("\r\n", "\n").replace('\r', "\n")
}

/// Find the first `{`, returning its position and the text after it.
fn locate_document(input: &str) -> Result<(Position, &str), LexError> {
    let Some(offset) = input.find('{') else {
        return Err(LexError::new(
            LexErrorKind::NoDocumentStart,
            Position::default(),
        ));
    };

    let preamble = &input[..offset];
    let line = preamble.matches('\n').count();
    let line_start = preamble.rfind('\n').map_or(0, |i| i + 1);
    let column = preamble[line_start..].chars().count();

    Ok((Position::new(line, column), &input[offset + 1..]))
}

/// Content of a value token that has not been terminated yet.
struct ValueBuilder {
    content: String,
    start: Position,
}

impl ValueBuilder {
    const fn empty(start: Position) -> Self {
        Self {
            content: String::new(),
            start,
        }
    }

    fn seeded(ch: char, start: Position) -> Self {
        Self {
            content: ch.to_string(),
            start,
        }
    }

    fn push(&mut self, ch: char) {
        self.content.push(ch);
    }

    fn finish(self, end: Position) -> Token {
        Token::Value {
            content: self.content,
            start: self.start,
            end,
        }
    }
}

/// Lexer states. Value states own the value being accumulated.
enum State {
    /// Between tokens.
    TokenStart,
    /// Inside a bare word.
    Bare(ValueBuilder),
    /// Inside a double-quoted value.
    Quoted(ValueBuilder),
    /// Right after a backslash inside a double-quoted value.
    Escape(ValueBuilder),
}

struct Lexer {
    tokens: Vec<Token>,
    line: usize,
    column: usize,
    /// Position of the previously consumed character.
    prev: Position,
}

impl Lexer {
    fn new(open: Position) -> Self {
        Self {
            tokens: vec![Token::OpenTag { position: open }],
            line: open.line,
            column: open.column + 1,
            prev: open,
        }
    }

    fn run(mut self, body: &str) -> Result<Vec<Token>, LexError> {
        let mut state = State::TokenStart;

        for ch in body.chars() {
            let at = Position::new(self.line, self.column);
            state = self.step(state, ch, at)?;
            self.advance(ch, at);
        }

        match state {
            State::TokenStart => Ok(self.tokens),
            State::Bare(value) | State::Quoted(value) | State::Escape(value) => Err(
                LexError::new(LexErrorKind::UnexpectedEndOfInput, value.start),
            ),
        }
    }

    fn advance(&mut self, ch: char, at: Position) {
        self.prev = at;
        if ch == '\n' {
            self.line += 1;
            self.column = 0;
        } else {
            self.column += 1;
        }
    }

    fn step(&mut self, state: State, ch: char, at: Position) -> Result<State, LexError> {
        match state {
            State::TokenStart => self.token_start(ch, at),
            State::Bare(value) => self.bare_value(value, ch, at),
            State::Quoted(value) => Ok(self.quoted_value(value, ch)),
            State::Escape(mut value) => {
                value.push(ch);
                Ok(State::Quoted(value))
            }
        }
    }

    fn token_start(&mut self, ch: char, at: Position) -> Result<State, LexError> {
        match ch {
            ' ' | '\t' | '\n' => Ok(State::TokenStart),
            '\\' => Err(LexError::new(LexErrorKind::UnexpectedEscape, at)),
            '"' => Ok(State::Quoted(ValueBuilder::empty(at))),
            _ => match delimiter(ch, at) {
                Some(token) => {
                    self.tokens.push(token);
                    Ok(State::TokenStart)
                }
                None => Ok(State::Bare(ValueBuilder::seeded(ch, at))),
            },
        }
    }

    fn bare_value(
        &mut self,
        mut value: ValueBuilder,
        ch: char,
        at: Position,
    ) -> Result<State, LexError> {
        match ch {
            ' ' | '\t' | '\n' => {
                self.emit(value);
                Ok(State::TokenStart)
            }
            '\\' => Err(LexError::new(LexErrorKind::UnexpectedEscape, at)),
            '"' => Err(LexError::new(LexErrorKind::UnexpectedQuote, at)),
            _ => match delimiter(ch, at) {
                Some(token) => {
                    self.emit(value);
                    self.tokens.push(token);
                    Ok(State::TokenStart)
                }
                None => {
                    value.push(ch);
                    Ok(State::Bare(value))
                }
            },
        }
    }

    fn quoted_value(&mut self, mut value: ValueBuilder, ch: char) -> State {
        match ch {
            '"' => {
                self.emit(value);
                State::TokenStart
            }
            '\\' => State::Escape(value),
            _ => {
                value.push(ch);
                State::Quoted(value)
            }
        }
    }

    /// Close the value: it ends at the character before the terminator.
    fn emit(&mut self, value: ValueBuilder) {
        self.tokens.push(value.finish(self.prev));
    }
}

fn delimiter(ch: char, position: Position) -> Option<Token> {
    match ch {
        '=' => Some(Token::PropertyJoin { position }),
        '{' => Some(Token::OpenTag { position }),
        '}' => Some(Token::CloseTag { position }),
        _ => None,
    }
}
