//! Codelimit scope extraction.
//!
//! A scope is a function-like unit: a [`Header`] (the signature, found with
//! a [`cl_gsm::Matcher`]) paired with a [`Block`] (its balanced `{ ... }`
//! body). Extraction is lexical. Nothing here parses, so unusual syntax may
//! yield approximate boundaries or no scope at all.
//!
//! Extractors expect significant tokens only (see
//! `cl_lexer::filter_significant`); comments between a signature and its
//! body would otherwise defeat the header lookahead.

mod extract;
mod languages;
mod registry;
mod scope;

pub use extract::{build_scopes, get_blocks, get_headers};
pub use languages::{CFamily, CurlyScript, Typed};
pub use registry::LanguageRegistry;
pub use scope::{Block, Header, Scope};

use cl_ir::Token;

/// Language-specific discovery of headers and blocks.
pub trait ScopeExtractor {
    fn extract_headers<'a>(&self, tokens: &'a [Token]) -> Vec<Header<'a>>;

    fn extract_blocks<'a>(&self, tokens: &'a [Token], headers: &[Header<'a>]) -> Vec<Block<'a>>;

    /// Headers paired with their bodies. See [`build_scopes`].
    fn extract_scopes<'a>(&self, tokens: &'a [Token]) -> Vec<Scope<'a>> {
        let headers = self.extract_headers(tokens);
        let blocks = self.extract_blocks(tokens, &headers);
        build_scopes(headers, blocks)
    }
}
