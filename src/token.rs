use std::fmt;

/// Zero-based source location.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

impl Position {
    #[must_use]
    pub const fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }

    /// The same location counted from one, for display to humans.
    #[must_use]
    pub const fn one_based(self) -> Self {
        Self {
            line: self.line + 1,
            column: self.column + 1,
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// Tokens produced by the lexer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// Opening brace `{`.
    OpenTag { position: Position },
    /// Closing brace `}`.
    CloseTag { position: Position },
    /// Property join `=`.
    PropertyJoin { position: Position },
    /// Bare word or double-quoted string, quotes and escapes removed.
    Value {
        content: String,
        start: Position,
        end: Position,
    },
}

impl Token {
    /// Location of the first character of the token.
    #[must_use]
    pub const fn position(&self) -> Position {
        match self {
            Self::OpenTag { position }
            | Self::CloseTag { position }
            | Self::PropertyJoin { position } => *position,
            Self::Value { start, .. } => *start,
        }
    }

    /// `true` for `{` and `}`.
    #[must_use]
    pub const fn is_tag_delimiter(&self) -> bool {
        matches!(self, Self::OpenTag { .. } | Self::CloseTag { .. })
    }

    /// Short description used in error messages.
    #[must_use]
    pub fn describe(&self) -> String {
        match self {
            Self::OpenTag { .. } => "'{'".to_string(),
            Self::CloseTag { .. } => "'}'".to_string(),
            Self::PropertyJoin { .. } => "'='".to_string(),
            Self::Value { content, .. } => format!("value {content:?}"),
        }
    }
}
