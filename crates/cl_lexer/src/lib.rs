//! Tokenizers for the languages codelimit measures.
//!
//! One logos-generated lexer serves every language. Identifier
//! classification (keyword vs. name) and the meaning of `#`, `//` and
//! `/*` depend on the language; everything else is shared.
//!
//! Whitespace is never emitted. Comments are emitted as
//! `TokenKind::Comment` so callers decide what counts as code; see
//! [`filter_significant`].

mod keywords;
mod lex_error;
mod raw_token;

use cl_ir::{Language, Location, Token, TokenKind};
use logos::Logos;

pub use keywords::is_keyword;
pub use lex_error::LexError;

use raw_token::{Dialect, RawToken, Role};

/// Turns source text into tokens.
///
/// The scanner only talks to tokenizers through this trait, which lets
/// tests observe or replace tokenization.
pub trait Tokenizer {
    fn tokenize(&self, language: Language, source: &str) -> Result<Vec<Token>, LexError>;
}

/// The built-in logos tokenizer.
#[derive(Copy, Clone, Debug, Default)]
pub struct LogosTokenizer;

impl Tokenizer for LogosTokenizer {
    fn tokenize(&self, language: Language, source: &str) -> Result<Vec<Token>, LexError> {
        tokenize(language, source)
    }
}

/// Lex `source` as `language`.
pub fn tokenize(language: Language, source: &str) -> Result<Vec<Token>, LexError> {
    if let Some(offset) = source.find('\0') {
        return Err(LexError::BinaryContent { offset });
    }

    let mut result = Vec::new();
    let mut cursor = LineCursor::new(source);
    let mut logos = RawToken::lexer_with_extras(source, dialect_of(language));

    while let Some(token_result) = logos.next() {
        let span = logos.span();
        let slice = logos.slice();
        let location = cursor.advance_to(span.start);

        let kind = match token_result {
            Ok(raw) => classify(raw, slice, language),
            Err(()) => TokenKind::Error,
        };
        result.push(Token::new(kind, slice, location));
    }

    Ok(result)
}

/// Drop tokens that do not count as code.
pub fn filter_significant(mut tokens: Vec<Token>) -> Vec<Token> {
    tokens.retain(Token::is_significant);
    tokens
}

fn dialect_of(language: Language) -> Dialect {
    match language {
        Language::C | Language::Cpp | Language::CSharp => Dialect::Preprocessed,
        Language::Java | Language::JavaScript | Language::TypeScript => Dialect::Curly,
        Language::Python => Dialect::Python,
    }
}

fn classify(raw: RawToken, slice: &str, language: Language) -> TokenKind {
    match raw {
        RawToken::Hash(role) | RawToken::DoubleSlash(role) | RawToken::SlashStar(role) => {
            match role {
                Role::Comment => TokenKind::Comment,
                Role::Directive => TokenKind::Directive,
                Role::Operator => TokenKind::Operator,
            }
        }
        RawToken::TripleString | RawToken::String => TokenKind::String,
        RawToken::Number => TokenKind::Number,
        RawToken::Ident => {
            if is_keyword(language, slice) {
                TokenKind::Keyword
            } else {
                TokenKind::Name
            }
        }
        RawToken::Punctuation => TokenKind::Punctuation,
        RawToken::Operator => TokenKind::Operator,
    }
}

/// Converts monotonically increasing byte offsets to 1-based locations.
struct LineCursor<'a> {
    source: &'a str,
    offset: usize,
    line: u32,
    column: u32,
}

impl<'a> LineCursor<'a> {
    fn new(source: &'a str) -> Self {
        LineCursor {
            source,
            offset: 0,
            line: 1,
            column: 1,
        }
    }

    fn advance_to(&mut self, target: usize) -> Location {
        if target > self.offset {
            for c in self.source[self.offset..target].chars() {
                if c == '\n' {
                    self.line += 1;
                    self.column = 1;
                } else {
                    self.column += 1;
                }
            }
            self.offset = target;
        }
        Location::new(self.line, self.column)
    }
}
