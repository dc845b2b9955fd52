//! Extractors for the supported language families.

use cl_gsm::{balanced, lookahead, name, operator, or, pattern, symbol, Matcher};
use cl_ir::Token;

use crate::extract::{get_blocks, get_headers};
use crate::scope::{Block, Header};
use crate::ScopeExtractor;

/// C, C++, Java and C#.
///
/// Blocks nest, so methods inside classes and functions inside other
/// bodies are scored on their own.
#[derive(Clone, Debug)]
pub struct CFamily {
    header: Matcher,
}

impl CFamily {
    pub fn new() -> Self {
        CFamily {
            header: Matcher::new(pattern![name(), balanced("(", ")"), lookahead(symbol("{"))]),
        }
    }
}

impl Default for CFamily {
    fn default() -> Self {
        Self::new()
    }
}

impl ScopeExtractor for CFamily {
    fn extract_headers<'a>(&self, tokens: &'a [Token]) -> Vec<Header<'a>> {
        get_headers(&self.header, tokens)
    }

    fn extract_blocks<'a>(&self, tokens: &'a [Token], _headers: &[Header<'a>]) -> Vec<Block<'a>> {
        get_blocks(tokens, "{", "}", true)
    }
}

/// JavaScript: a parenthesised group with a name before it and a `{`
/// after it. Only outermost blocks are considered.
#[derive(Clone, Debug)]
pub struct CurlyScript {
    header: Matcher,
}

impl CurlyScript {
    pub fn new() -> Self {
        CurlyScript {
            header: Matcher::new(pattern![name(), balanced("(", ")"), lookahead(symbol("{"))]),
        }
    }
}

impl Default for CurlyScript {
    fn default() -> Self {
        Self::new()
    }
}

impl ScopeExtractor for CurlyScript {
    fn extract_headers<'a>(&self, tokens: &'a [Token]) -> Vec<Header<'a>> {
        get_headers(&self.header, tokens)
    }

    fn extract_blocks<'a>(&self, tokens: &'a [Token], _headers: &[Header<'a>]) -> Vec<Block<'a>> {
        get_blocks(tokens, "{", "}", false)
    }
}

/// TypeScript: like [`CurlyScript`], but a return type annotation
/// (`): T {`) may sit between the parameters and the body.
#[derive(Clone, Debug)]
pub struct Typed {
    header: Matcher,
}

impl Typed {
    pub fn new() -> Self {
        Typed {
            header: Matcher::new(pattern![
                name(),
                balanced("(", ")"),
                lookahead(or([symbol("{"), operator(":")])),
            ]),
        }
    }
}

impl Default for Typed {
    fn default() -> Self {
        Self::new()
    }
}

impl ScopeExtractor for Typed {
    fn extract_headers<'a>(&self, tokens: &'a [Token]) -> Vec<Header<'a>> {
        get_headers(&self.header, tokens)
    }

    fn extract_blocks<'a>(&self, tokens: &'a [Token], _headers: &[Header<'a>]) -> Vec<Block<'a>> {
        get_blocks(tokens, "{", "}", false)
    }
}
