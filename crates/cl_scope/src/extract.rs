//! Building blocks shared by the language extractors.

use cl_gsm::Matcher;
use cl_ir::{Token, TokenRange};

use crate::scope::{Block, Header, Scope};

/// Every match of `matcher` as a header.
pub fn get_headers<'a>(matcher: &Matcher, tokens: &'a [Token]) -> Vec<Header<'a>> {
    matcher
        .find_all(tokens)
        .into_iter()
        .map(Header::from_range)
        .collect()
}

/// Balanced `open` ... `close` spans, ordered by where they start.
///
/// With `nested` every pair is reported, so a function body and the
/// blocks inside it all appear. Without it only outermost pairs are.
/// Stray closers and spans left open at end of input are ignored.
pub fn get_blocks<'a>(tokens: &'a [Token], open: &str, close: &str, nested: bool) -> Vec<Block<'a>> {
    let mut blocks = Vec::new();
    let mut open_at = Vec::new();

    for (idx, token) in tokens.iter().enumerate() {
        if token.value == open {
            open_at.push(idx);
        } else if token.value == close {
            let Some(start) = open_at.pop() else {
                continue;
            };
            if nested || open_at.is_empty() {
                blocks.push(Block::new(TokenRange::new(tokens, start..idx + 1)));
            }
        }
    }

    blocks.sort_by_key(Block::start);
    blocks
}

/// Pair headers with blocks by position.
///
/// A header takes the first block not yet taken that starts after the
/// header ends and before the next header starts. Headers without such a
/// block (declarations, interface methods) produce no scope.
pub fn build_scopes<'a>(headers: Vec<Header<'a>>, blocks: Vec<Block<'a>>) -> Vec<Scope<'a>> {
    let mut slots: Vec<Option<Block<'a>>> = blocks.into_iter().map(Some).collect();
    let limits: Vec<Option<usize>> = headers
        .iter()
        .skip(1)
        .map(|next| Some(next.range.start()))
        .chain(std::iter::once(None))
        .collect();

    let mut scopes = Vec::new();
    for (header, limit) in headers.into_iter().zip(limits) {
        let found = slots.iter_mut().find(|slot| {
            slot.as_ref().is_some_and(|block| {
                header.range.precedes(&block.range)
                    && !limit.is_some_and(|limit| block.start() >= limit)
            })
        });
        if let Some(block) = found.and_then(Option::take) {
            scopes.push(Scope { header, block });
        }
    }
    scopes
}

#[cfg(test)]
mod tests;
