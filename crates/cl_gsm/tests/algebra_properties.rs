//! Property tests for the pattern algebra.
//!
//! Random expressions over a three-letter alphabet are compiled to a DFA
//! and compared against a direct interpretation of the expression tree.
//! Optionals are greedy in both: the skip branch exists only when no first
//! predicate of the operand steps.

#![allow(clippy::unwrap_used, reason = "Tests can panic")]
#![allow(
    clippy::needless_pass_by_value,
    clippy::redundant_closure,
    reason = "Proptest macros generate code with these patterns"
)]

use std::collections::BTreeSet;

use cl_gsm::{optional, union, Expr, Matcher, Predicate};
use cl_ir::{Location, Token, TokenKind};
use proptest::prelude::*;

const ALPHABET: [&str; 3] = ["a", "b", "c"];

fn leaf_strategy() -> impl Strategy<Value = Expr> {
    prop::sample::select(ALPHABET.to_vec()).prop_map(Expr::from)
}

fn expr_strategy() -> impl Strategy<Value = Expr> {
    leaf_strategy().prop_recursive(4, 24, 4, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..4).prop_map(Expr::Seq),
            (inner.clone(), inner.clone()).prop_map(|(a, b)| union(a, b)),
            inner.prop_map(|e| optional(e)),
        ]
    })
}

/// Expressions without optionals, whose language does not depend on the
/// token after the match.
fn regular_strategy() -> impl Strategy<Value = Expr> {
    leaf_strategy().prop_recursive(4, 24, 4, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..4).prop_map(Expr::Seq),
            (inner.clone(), inner).prop_map(|(a, b)| union(a, b)),
        ]
    })
}

/// Whether `expr` can be passed over without consuming a token.
fn nullable(expr: &Expr) -> bool {
    match expr {
        Expr::Atom(_) => false,
        Expr::Seq(items) => items.iter().all(nullable),
        Expr::Union(left, right) => nullable(left) || nullable(right),
        Expr::Optional(_) => true,
    }
}

/// Predicates that can consume the first token of `expr`.
fn first(expr: &Expr, out: &mut Vec<Predicate>) {
    match expr {
        Expr::Atom(predicate) => out.push(predicate.clone()),
        Expr::Seq(items) => {
            for item in items {
                first(item, out);
                if !nullable(item) {
                    break;
                }
            }
        }
        Expr::Union(left, right) => {
            first(left, out);
            first(right, out);
        }
        Expr::Optional(inner) => first(inner, out),
    }
}

fn stream_strategy() -> impl Strategy<Value = Vec<Token>> {
    prop::collection::vec(prop::sample::select(ALPHABET.to_vec()), 0..6).prop_map(|letters| {
        letters
            .into_iter()
            .enumerate()
            .map(|(i, letter)| {
                let column = u32::try_from(i * 2 + 1).unwrap();
                Token::new(TokenKind::Name, letter, Location::new(1, column))
            })
            .collect()
    })
}

/// End positions reachable by reading `expr` from `start`.
fn reference_ends(expr: &Expr, tokens: &[Token], start: usize) -> BTreeSet<usize> {
    match expr {
        Expr::Atom(predicate) => predicate.step(tokens, start).into_iter().collect(),
        Expr::Seq(items) => {
            let mut ends = BTreeSet::from([start]);
            for item in items {
                ends = ends
                    .into_iter()
                    .flat_map(|pos| reference_ends(item, tokens, pos))
                    .collect();
            }
            ends
        }
        Expr::Union(left, right) => {
            let mut ends = reference_ends(left, tokens, start);
            ends.extend(reference_ends(right, tokens, start));
            ends
        }
        Expr::Optional(inner) => {
            let mut ends = reference_ends(inner, tokens, start);
            let mut labels = Vec::new();
            first(inner, &mut labels);
            if labels.iter().all(|p| p.step(tokens, start).is_none()) {
                ends.insert(start);
            }
            ends
        }
    }
}

fn accepts(expr: &Expr, tokens: &[Token]) -> bool {
    Matcher::new(expr.clone()).matches_exactly(tokens)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn dfa_agrees_with_expression(expr in expr_strategy(), tokens in stream_strategy()) {
        let expected = reference_ends(&expr, &tokens, 0).contains(&tokens.len());
        prop_assert_eq!(accepts(&expr, &tokens), expected);
    }

    #[test]
    fn concat_is_language_product(
        a in regular_strategy(),
        b in expr_strategy(),
        tokens in stream_strategy(),
    ) {
        let product = (0..=tokens.len())
            .any(|i| accepts(&a, &tokens[..i]) && accepts(&b, &tokens[i..]));
        prop_assert_eq!(accepts(&Expr::Seq(vec![a, b]), &tokens), product);
    }

    #[test]
    fn union_is_language_union(
        a in expr_strategy(),
        b in expr_strategy(),
        tokens in stream_strategy(),
    ) {
        let either = accepts(&a, &tokens) || accepts(&b, &tokens);
        prop_assert_eq!(accepts(&union(a, b), &tokens), either);
    }

    #[test]
    fn longest_match_is_an_accepting_end(expr in expr_strategy(), tokens in stream_strategy()) {
        let matcher = Matcher::new(expr.clone());
        let longest = matcher.longest_at(&tokens, 0);
        let expected = reference_ends(&expr, &tokens, 0).into_iter().max();
        prop_assert_eq!(longest, expected);
    }

    #[test]
    fn optional_never_skips_a_startable_operand(
        inner in regular_strategy(),
        rest in expr_strategy(),
        tokens in stream_strategy(),
    ) {
        let mut labels = Vec::new();
        first(&inner, &mut labels);
        let startable = labels.iter().any(|p| p.step(&tokens, 0).is_some());
        let greedy = Expr::Seq(vec![optional(inner.clone()), rest.clone()]);
        if startable && !nullable(&inner) {
            prop_assert_eq!(
                accepts(&greedy, &tokens),
                accepts(&Expr::Seq(vec![inner, rest]), &tokens)
            );
        }
    }
}
