//! Token types produced by the per-language tokenizers.

use std::fmt;

use crate::Location;

/// A lexed token: its kind, its source text and where it starts.
#[derive(Clone, Eq, PartialEq, Hash)]
pub struct Token {
    pub kind: TokenKind,
    pub value: String,
    pub location: Location,
}

impl Token {
    #[inline]
    pub fn new(kind: TokenKind, value: impl Into<String>, location: Location) -> Self {
        Token {
            kind,
            value: value.into(),
            location,
        }
    }

    /// Location just past the token's last character.
    ///
    /// Computed as `column + text length` on the starting line, which is
    /// exact for every single-line token.
    pub fn end_location(&self) -> Location {
        self.location.shifted(self.value.chars().count())
    }

    /// Last line the token's text occupies.
    pub fn last_line(&self) -> u32 {
        let breaks = self.value.matches('\n').count();
        self.location
            .line
            .saturating_add(u32::try_from(breaks).unwrap_or(u32::MAX))
    }

    /// Whether the token counts toward lines of code.
    #[inline]
    pub fn is_significant(&self) -> bool {
        self.kind.is_significant()
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}({:?}) @ {}", self.kind, self.value, self.location)
    }
}

/// Token kinds shared by every supported language.
///
/// The classification is coarse on purpose: scope extraction only needs to
/// tell keywords, names, punctuation and operators apart.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum TokenKind {
    /// Reserved word of the file's language (`def`, `function`, `if`).
    Keyword,
    /// Identifier.
    Name,
    /// Structural punctuation: `( ) { } [ ] ; , .`
    Punctuation,
    /// Operator run such as `=`, `=>`, `:` or `?.`.
    Operator,
    /// String, char or template literal.
    String,
    /// Numeric literal.
    Number,
    /// Line or block comment.
    Comment,
    /// Preprocessor directive line (`#include <stdio.h>`).
    Directive,
    /// Character sequence the tokenizer did not recognise.
    Error,
}

impl TokenKind {
    /// Comments never count as code.
    #[inline]
    pub const fn is_significant(self) -> bool {
        !matches!(self, TokenKind::Comment)
    }

    /// Human-readable name for debug output.
    pub const fn name(self) -> &'static str {
        match self {
            TokenKind::Keyword => "keyword",
            TokenKind::Name => "name",
            TokenKind::Punctuation => "punctuation",
            TokenKind::Operator => "operator",
            TokenKind::String => "string",
            TokenKind::Number => "number",
            TokenKind::Comment => "comment",
            TokenKind::Directive => "directive",
            TokenKind::Error => "error",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
