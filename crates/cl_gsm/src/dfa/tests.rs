use pretty_assertions::assert_eq;

use super::*;
use crate::nfa::{Fragment, NfaBuilder};
use crate::{balanced, expression_to_nfa, keyword, lookahead, name, optional, pattern, symbol, union};

fn assert_deterministic(dfa: &Dfa) {
    for (idx, state) in dfa.states().iter().enumerate() {
        let labels: Vec<_> = state.transitions.iter().map(|(l, _)| l).collect();
        for (i, label) in labels.iter().enumerate() {
            assert!(
                !labels[..i].contains(label),
                "state {idx} repeats label {label:?}"
            );
        }
    }
}

#[test]
fn single_atom() {
    let dfa = nfa_to_dfa(&expression_to_nfa(&pattern![keyword("def")]));
    assert_eq!(dfa.states().len(), 2);
    assert!(!dfa.is_accepting(dfa.start()));

    let next = dfa.transition(dfa.start(), &keyword("def"));
    assert!(next.is_some_and(|s| dfa.is_accepting(s)));
    assert_eq!(dfa.transition(dfa.start(), &name()), None);
}

#[test]
fn union_with_shared_prefix_merges() {
    // "a b" | "a c": one transition on "a" from the start.
    let dfa = nfa_to_dfa(&expression_to_nfa(&union(
        pattern!["a", "b"],
        pattern!["a", "c"],
    )));
    assert_deterministic(&dfa);

    let start = dfa.state(dfa.start());
    assert_eq!(start.transitions.len(), 1);

    let after_a = dfa.transition(dfa.start(), &Predicate::from("a"));
    let Some(after_a) = after_a else {
        panic!("missing transition on \"a\"");
    };
    assert_eq!(dfa.state(after_a).transitions.len(), 2);
    assert!(dfa
        .transition(after_a, &Predicate::from("b"))
        .is_some_and(|s| dfa.is_accepting(s)));
    assert!(dfa
        .transition(after_a, &Predicate::from("c"))
        .is_some_and(|s| dfa.is_accepting(s)));
}

#[test]
fn optional_prefix_enters_on_keyword_or_guard() {
    let expr = pattern![
        optional("function"),
        name(),
        balanced("(", ")"),
        lookahead("{")
    ];
    let dfa = nfa_to_dfa(&expression_to_nfa(&expr));
    assert_deterministic(&dfa);

    let guard = Predicate::NotAhead(vec![Predicate::from("function")]);
    let labels: Vec<_> = dfa
        .state(dfa.start())
        .transitions
        .iter()
        .map(|(l, _)| l.clone())
        .collect();
    assert_eq!(labels.len(), 2);
    assert!(labels.contains(&Predicate::from("function")));
    assert!(labels.contains(&guard));

    for entry in [Predicate::from("function"), guard] {
        let Some(next) = dfa.transition(dfa.start(), &entry) else {
            panic!("missing transition on {entry:?}");
        };
        assert!(dfa.transition(next, &name()).is_some());
    }
}

#[test]
fn optional_alone_accepts_after_either_branch() {
    let dfa = nfa_to_dfa(&expression_to_nfa(&optional(symbol(";"))));
    assert!(!dfa.is_accepting(dfa.start()));

    let guard = Predicate::NotAhead(vec![symbol(";")]);
    assert!(dfa
        .transition(dfa.start(), &guard)
        .is_some_and(|s| dfa.is_accepting(s)));
    assert!(dfa
        .transition(dfa.start(), &symbol(";"))
        .is_some_and(|s| dfa.is_accepting(s)));
}

#[test]
fn epsilon_cycle_terminates() {
    // start -a-> s1, s1 -eps-> start: accepts a, aa, aaa, ...
    let mut builder = NfaBuilder::default();
    let start = builder.add_state();
    let s1 = builder.add_state();
    builder.add_transition(start, Predicate::from("a"), s1);
    builder.add_epsilon(s1, start);
    let nfa = builder.finish(Fragment {
        start,
        accepting: s1,
    });

    let dfa = nfa_to_dfa(&nfa);
    assert_deterministic(&dfa);
    assert_eq!(dfa.states().len(), 2);

    let Some(looped) = dfa.transition(dfa.start(), &Predicate::from("a")) else {
        panic!("missing transition on \"a\"");
    };
    assert!(dfa.is_accepting(looped));
    assert_eq!(dfa.transition(looped, &Predicate::from("a")), Some(looped));
}
