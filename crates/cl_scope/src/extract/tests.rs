use cl_ir::{Location, Token, TokenKind, TokenRange};
use pretty_assertions::assert_eq;

use super::*;

/// One token per character, all on line 1.
fn stream(text: &str) -> Vec<Token> {
    text.chars()
        .enumerate()
        .map(|(i, c)| {
            let kind = match c {
                '{' | '}' | '(' | ')' => TokenKind::Punctuation,
                _ => TokenKind::Name,
            };
            let column = u32::try_from(i + 1).unwrap_or(u32::MAX);
            Token::new(kind, c.to_string(), Location::new(1, column))
        })
        .collect()
}

fn spans(blocks: &[Block<'_>]) -> Vec<std::ops::Range<usize>> {
    blocks.iter().map(|b| b.range.span()).collect()
}

fn header(tokens: &[Token], span: std::ops::Range<usize>) -> Header<'_> {
    Header::from_range(TokenRange::new(tokens, span))
}

#[test]
fn nested_blocks_include_inner_pairs() {
    let tokens = stream("{a{b}{c{d}}}");
    let blocks = get_blocks(&tokens, "{", "}", true);
    assert_eq!(spans(&blocks), vec![0..12, 2..5, 5..11, 7..10]);
}

#[test]
fn outer_blocks_only() {
    let tokens = stream("{a{b}}x{c}");
    let blocks = get_blocks(&tokens, "{", "}", false);
    assert_eq!(spans(&blocks), vec![0..6, 7..10]);
}

#[test]
fn unbalanced_delimiters_are_ignored() {
    let tokens = stream("}a{b}{c");
    assert_eq!(spans(&get_blocks(&tokens, "{", "}", true)), vec![2..5]);
    assert_eq!(spans(&get_blocks(&tokens, "{", "}", false)), vec![2..5]);

    // The pair is nested in a block that never closes.
    let tokens = stream("{a{b}");
    assert_eq!(spans(&get_blocks(&tokens, "{", "}", true)), vec![2..5]);
    assert!(get_blocks(&tokens, "{", "}", false).is_empty());
}

#[test]
fn header_name_is_first_identifier() {
    let tokens = vec![
        Token::new(TokenKind::Keyword, "function", Location::new(1, 1)),
        Token::new(TokenKind::Name, "run", Location::new(1, 10)),
        Token::new(TokenKind::Punctuation, "(", Location::new(1, 13)),
    ];
    assert_eq!(header(&tokens, 0..3).name, "run");
    assert_eq!(header(&tokens, 2..3).name, "(");
}

#[test]
fn pairing_takes_next_block_before_next_header() {
    // f() { g() } h() { }
    let tokens = stream("f(){}g(){}h()");
    let headers = vec![header(&tokens, 0..3), header(&tokens, 5..8), header(&tokens, 10..13)];
    let blocks = get_blocks(&tokens, "{", "}", true);

    let scopes = build_scopes(headers, blocks);
    let pairs: Vec<_> = scopes
        .iter()
        .map(|s| (s.name().to_string(), s.block.range.span()))
        .collect();
    assert_eq!(pairs, vec![("f".to_string(), 3..5), ("g".to_string(), 8..10)]);
}

#[test]
fn header_without_body_is_skipped() {
    // d() e(){}  -- `d` is a declaration, the block belongs to `e`
    let tokens = stream("d()e(){}");
    let headers = vec![header(&tokens, 0..3), header(&tokens, 3..6)];
    let blocks = get_blocks(&tokens, "{", "}", true);

    let scopes = build_scopes(headers, blocks);
    assert_eq!(scopes.len(), 1);
    assert_eq!(scopes[0].name(), "e");
}

#[test]
fn enclosing_block_is_not_a_body() {
    // {f(){}}  -- the outer block starts before the header
    let tokens = stream("{f(){}}");
    let headers = vec![header(&tokens, 1..4)];
    let blocks = get_blocks(&tokens, "{", "}", true);

    let scopes = build_scopes(headers, blocks);
    assert_eq!(scopes.len(), 1);
    assert_eq!(scopes[0].block.range.span(), 4..6);
}

#[test]
fn no_headers_no_scopes() {
    let tokens = stream("{a}");
    let blocks = get_blocks(&tokens, "{", "}", true);
    assert!(build_scopes(Vec::new(), blocks).is_empty());
}
