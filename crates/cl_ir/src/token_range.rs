//! Contiguous slices of a token stream.

use std::fmt;
use std::ops::Range;

use crate::{Location, Token};

/// A contiguous, ordered run of tokens cut from one token stream.
///
/// Holds the borrowed tokens plus the index of the first one in the
/// originating stream, so two ranges from the same stream can be compared
/// by position without looking at locations.
#[derive(Copy, Clone, Eq, PartialEq)]
pub struct TokenRange<'a> {
    tokens: &'a [Token],
    start: usize,
}

impl<'a> TokenRange<'a> {
    /// Cut `span` out of `stream`.
    ///
    /// # Panics
    /// Panics if `span` is not within `stream`. Ranges are only built by
    /// the matcher and block scanner from indices they just walked.
    pub fn new(stream: &'a [Token], span: Range<usize>) -> Self {
        let start = span.start;
        TokenRange {
            tokens: &stream[span],
            start,
        }
    }

    /// Index of the first token in the originating stream.
    #[inline]
    pub fn start(&self) -> usize {
        self.start
    }

    /// Index one past the last token in the originating stream.
    #[inline]
    pub fn end(&self) -> usize {
        self.start + self.tokens.len()
    }

    #[inline]
    pub fn span(&self) -> Range<usize> {
        self.start..self.end()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    #[inline]
    pub fn tokens(&self) -> &'a [Token] {
        self.tokens
    }

    pub fn first(&self) -> Option<&'a Token> {
        self.tokens.first()
    }

    pub fn last(&self) -> Option<&'a Token> {
        self.tokens.last()
    }

    /// Location of the first token.
    pub fn start_location(&self) -> Option<Location> {
        self.first().map(|t| t.location)
    }

    /// Location just past the last token.
    pub fn end_location(&self) -> Option<Location> {
        self.last().map(Token::end_location)
    }

    /// Whether this range ends before `other` begins.
    pub fn precedes(&self, other: &TokenRange<'_>) -> bool {
        self.end() <= other.start
    }

    /// Rebuild the source text covered by the range.
    ///
    /// Gaps between tokens are restored from their locations: spaces on the
    /// same line, newlines plus indentation across lines. Text before the
    /// first token is not included.
    pub fn text(&self) -> String {
        let mut out = String::new();
        let mut cursor: Option<Location> = None;
        for token in self.tokens {
            if let Some(prev) = cursor {
                if token.location.line > prev.line {
                    let breaks = token.location.line - prev.line;
                    out.extend(std::iter::repeat('\n').take(breaks as usize));
                    let indent = token.location.column.saturating_sub(1);
                    out.extend(std::iter::repeat(' ').take(indent as usize));
                } else {
                    let gap = token.location.column.saturating_sub(prev.column);
                    out.extend(std::iter::repeat(' ').take(gap as usize));
                }
            }
            out.push_str(&token.value);
            cursor = Some(Location::new(
                token.last_line(),
                end_column_after(token),
            ));
        }
        out
    }
}

/// Column just past the token's final character on its last line.
fn end_column_after(token: &Token) -> u32 {
    match token.value.rfind('\n') {
        Some(idx) => {
            let tail = token.value[idx + 1..].chars().count();
            u32::try_from(tail).unwrap_or(u32::MAX).saturating_add(1)
        }
        None => token.end_location().column,
    }
}

impl fmt::Debug for TokenRange<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TokenRange[{}..{}] {:?}", self.start, self.end(), self.text())
    }
}
