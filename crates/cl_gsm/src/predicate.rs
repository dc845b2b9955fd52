//! Token predicates: the alphabet of the pattern automata.

use std::fmt;

use cl_ir::{Token, TokenKind};

/// A test applied at a position of a token stream.
///
/// Predicates are the transition labels of the NFA and DFA, so they are
/// compared structurally (`Eq`, `Hash`).
#[derive(Clone, Eq, PartialEq, Hash)]
pub enum Predicate {
    /// Any token whose text equals the string.
    Literal(String),
    /// A keyword token with the given text.
    Keyword(String),
    /// Any identifier token.
    Name,
    /// A punctuation token with the given text.
    Symbol(String),
    /// An operator token with the given text.
    Operator(String),
    /// Matches when any alternative matches.
    Or(Vec<Predicate>),
    /// Succeeds when the inner predicate would match here, consuming nothing.
    Lookahead(Box<Predicate>),
    /// Succeeds when none of the alternatives would match here, consuming
    /// nothing. Guards the skip branch of an optional element.
    NotAhead(Vec<Predicate>),
    /// A depth-counted span from `open` to its matching `close`.
    Balanced { open: String, close: String },
}

impl Predicate {
    /// Single-token test.
    ///
    /// For `Balanced` this only checks that `token` opens the span; use
    /// [`Predicate::step`] to evaluate a predicate against a stream.
    pub fn matches(&self, token: &Token) -> bool {
        match self {
            Predicate::Literal(text) => token.value == *text,
            Predicate::Keyword(word) => token.kind == TokenKind::Keyword && token.value == *word,
            Predicate::Name => token.kind == TokenKind::Name,
            Predicate::Symbol(text) => {
                token.kind == TokenKind::Punctuation && token.value == *text
            }
            Predicate::Operator(text) => token.kind == TokenKind::Operator && token.value == *text,
            Predicate::Or(options) => options.iter().any(|p| p.matches(token)),
            Predicate::Lookahead(inner) => inner.matches(token),
            Predicate::NotAhead(options) => !options.iter().any(|p| p.matches(token)),
            Predicate::Balanced { open, .. } => token.value == *open,
        }
    }

    /// Evaluate at `pos`, returning the position after what was consumed.
    ///
    /// Returns `None` when the predicate fails, including when `pos` is at
    /// the end of the stream.
    pub fn step(&self, tokens: &[Token], pos: usize) -> Option<usize> {
        match self {
            Predicate::Lookahead(inner) => inner.step(tokens, pos).map(|_| pos),
            Predicate::NotAhead(options) => options
                .iter()
                .all(|p| p.step(tokens, pos).is_none())
                .then_some(pos),
            Predicate::Balanced { open, close } => balanced_end(tokens, pos, open, close),
            Predicate::Or(options) => options.iter().find_map(|p| p.step(tokens, pos)),
            _ => {
                let token = tokens.get(pos)?;
                self.matches(token).then_some(pos + 1)
            }
        }
    }
}

/// End (exclusive) of the balanced span opening at `pos`.
///
/// The token at `pos` must be `open`. Nested `open`/`close` pairs are
/// counted; the span ends at the `close` that brings the depth back to
/// zero. Returns `None` if `pos` does not open a span or the stream ends
/// first.
pub fn balanced_end(tokens: &[Token], pos: usize, open: &str, close: &str) -> Option<usize> {
    if tokens.get(pos)?.value != open {
        return None;
    }
    let mut depth = 0usize;
    for (idx, token) in tokens.iter().enumerate().skip(pos) {
        if token.value == open {
            depth += 1;
        } else if token.value == close {
            depth -= 1;
            if depth == 0 {
                return Some(idx + 1);
            }
        }
    }
    None
}

impl fmt::Debug for Predicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Predicate::Literal(text) => write!(f, "{text:?}"),
            Predicate::Keyword(word) => write!(f, "Keyword({word:?})"),
            Predicate::Name => write!(f, "Name()"),
            Predicate::Symbol(text) => write!(f, "Symbol({text:?})"),
            Predicate::Operator(text) => write!(f, "Operator({text:?})"),
            Predicate::Or(options) => write_list(f, "Or", options),
            Predicate::Lookahead(inner) => write!(f, "Lookahead({inner:?})"),
            Predicate::NotAhead(options) => write_list(f, "NotAhead", options),
            Predicate::Balanced { open, close } => write!(f, "Balanced({open:?}, {close:?})"),
        }
    }
}

fn write_list(f: &mut fmt::Formatter<'_>, head: &str, options: &[Predicate]) -> fmt::Result {
    write!(f, "{head}(")?;
    for (i, option) in options.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{option:?}")?;
    }
    f.write_str(")")
}

impl From<&str> for Predicate {
    fn from(text: &str) -> Self {
        Predicate::Literal(text.to_string())
    }
}

pub fn literal(text: &str) -> Predicate {
    Predicate::Literal(text.to_string())
}

pub fn keyword(word: &str) -> Predicate {
    Predicate::Keyword(word.to_string())
}

pub fn name() -> Predicate {
    Predicate::Name
}

pub fn symbol(text: &str) -> Predicate {
    Predicate::Symbol(text.to_string())
}

pub fn operator(text: &str) -> Predicate {
    Predicate::Operator(text.to_string())
}

pub fn or<I, P>(options: I) -> Predicate
where
    I: IntoIterator<Item = P>,
    P: Into<Predicate>,
{
    Predicate::Or(options.into_iter().map(Into::into).collect())
}

pub fn lookahead(inner: impl Into<Predicate>) -> Predicate {
    Predicate::Lookahead(Box::new(inner.into()))
}

pub fn balanced(open: &str, close: &str) -> Predicate {
    Predicate::Balanced {
        open: open.to_string(),
        close: close.to_string(),
    }
}
