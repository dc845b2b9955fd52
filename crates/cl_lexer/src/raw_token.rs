//! Raw token from logos, shared by every supported language.
//!
//! The few lexical differences between languages are resolved in callbacks
//! that read the `Dialect` stored in the lexer extras:
//! - `#` starts a comment (Python), a preprocessor line (C family) or is a
//!   plain operator (Java, JavaScript, TypeScript)
//! - `//` and `/*` start comments everywhere except Python, where `//` is
//!   floor division

use logos::{Lexer, Logos};

/// Lexical family of the language being tokenized.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub(crate) enum Dialect {
    /// `//` and `/* */` comments, `#` is an operator.
    #[default]
    Curly,
    /// `//` and `/* */` comments, `#` opens a preprocessor directive.
    Preprocessed,
    /// `#` comments, triple-quoted strings.
    Python,
}

/// How a dialect-dependent prefix was read.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub(crate) enum Role {
    Comment,
    Directive,
    Operator,
}

#[derive(Logos, Debug, Clone, Copy, PartialEq)]
#[logos(extras = Dialect)]
#[logos(skip r"[ \t\r\n\x0C]+")]
pub(crate) enum RawToken {
    #[token("#", hash)]
    Hash(Role),

    #[token("//", line_comment)]
    DoubleSlash(Role),

    #[token("/*", block_comment)]
    SlashStar(Role),

    #[token("\"\"\"", triple_double)]
    #[token("'''", triple_single)]
    TripleString,

    #[regex(r#""([^"\\\n]|\\.)*""#)]
    #[regex(r"'([^'\\\n]|\\.)*'")]
    #[regex(r"`([^`\\]|\\(.|\n))*`")]
    String,

    #[regex(r"[0-9][0-9a-zA-Z_]*(\.[0-9a-zA-Z_]+)?")]
    #[regex(r"\.[0-9][0-9a-zA-Z_]*")]
    Number,

    #[regex(r"[\p{L}_$][\p{L}\p{N}_$]*")]
    Ident,

    #[token("(")]
    #[token(")")]
    #[token("{")]
    #[token("}")]
    #[token("[")]
    #[token("]")]
    #[token(";")]
    #[token(",")]
    #[token(".")]
    Punctuation,

    #[regex(r"[+\-*%=<>!&|\^~?:@]+")]
    #[token("/")]
    Operator,
}

/// Consume through the end of the current line (newline excluded).
fn bump_line(lex: &mut Lexer<'_, RawToken>) {
    let rest = lex.remainder();
    let len = rest.find('\n').unwrap_or(rest.len());
    lex.bump(len);
}

/// Consume a preprocessor line, following `\` line continuations.
fn bump_directive(lex: &mut Lexer<'_, RawToken>) {
    let rest = lex.remainder();
    let mut len = 0;
    loop {
        let line_end = rest[len..].find('\n').map_or(rest.len(), |idx| len + idx);
        let line = rest[len..line_end].trim_end_matches('\r');
        if line_end == rest.len() || !line.ends_with('\\') {
            len = line_end;
            break;
        }
        len = line_end + 1;
    }
    lex.bump(len);
}

/// Consume through `delim`, or to end of input when it never appears.
fn bump_past(lex: &mut Lexer<'_, RawToken>, delim: &str) {
    let rest = lex.remainder();
    let len = rest.find(delim).map_or(rest.len(), |idx| idx + delim.len());
    lex.bump(len);
}

fn hash(lex: &mut Lexer<'_, RawToken>) -> Role {
    match lex.extras {
        Dialect::Python => {
            bump_line(lex);
            Role::Comment
        }
        Dialect::Preprocessed => {
            bump_directive(lex);
            Role::Directive
        }
        Dialect::Curly => Role::Operator,
    }
}

fn line_comment(lex: &mut Lexer<'_, RawToken>) -> Role {
    if lex.extras == Dialect::Python {
        return Role::Operator;
    }
    bump_line(lex);
    Role::Comment
}

fn block_comment(lex: &mut Lexer<'_, RawToken>) -> Role {
    if lex.extras == Dialect::Python {
        return Role::Operator;
    }
    bump_past(lex, "*/");
    Role::Comment
}

fn triple_double(lex: &mut Lexer<'_, RawToken>) {
    bump_past(lex, "\"\"\"");
}

fn triple_single(lex: &mut Lexer<'_, RawToken>) {
    bump_past(lex, "'''");
}
