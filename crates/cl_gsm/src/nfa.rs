//! Thompson NFA over token predicates.
//!
//! States live in an arena owned by the automaton and refer to each other
//! by [`StateId`], so epsilon cycles need no shared ownership.

use std::collections::BTreeSet;

use crate::expr::{postfix, Expr, Op};
use crate::Predicate;

/// Index of a state in its automaton's arena.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct StateId(u32);

impl StateId {
    #[inline]
    pub const fn from_raw(raw: u32) -> Self {
        StateId(raw)
    }

    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

/// An NFA state: labeled transitions plus free epsilon moves.
#[derive(Clone, Debug, Default)]
pub struct State {
    pub transitions: Vec<(Predicate, StateId)>,
    pub epsilon: Vec<StateId>,
}

/// A sub-automaton under construction: entry and exit states in the
/// builder's arena.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Fragment {
    pub start: StateId,
    pub accepting: StateId,
}

/// Arena that fragments are built in.
#[derive(Debug, Default)]
pub struct NfaBuilder {
    states: Vec<State>,
}

impl NfaBuilder {
    pub fn add_state(&mut self) -> StateId {
        let id = u32::try_from(self.states.len())
            .unwrap_or_else(|_| panic!("automaton exceeds {} states", u32::MAX));
        self.states.push(State::default());
        StateId(id)
    }

    pub fn add_transition(&mut self, from: StateId, label: Predicate, to: StateId) {
        self.states[from.index()].transitions.push((label, to));
    }

    pub fn add_epsilon(&mut self, from: StateId, to: StateId) {
        self.states[from.index()].epsilon.push(to);
    }

    /// Labels that can consume the first token of the fragment entered at
    /// `start`.
    ///
    /// Follows epsilon moves and the guard edges of nested optionals, so
    /// `[optional("a"), "b"]` yields both `"a"` and `"b"`.
    pub fn first_labels(&self, start: StateId) -> Vec<Predicate> {
        let mut labels: Vec<Predicate> = Vec::new();
        let mut seen = BTreeSet::new();
        let mut work = vec![start];
        while let Some(id) = work.pop() {
            if !seen.insert(id) {
                continue;
            }
            let state = &self.states[id.index()];
            work.extend(state.epsilon.iter().rev().copied());
            for (label, target) in state.transitions.iter().rev() {
                if matches!(label, Predicate::NotAhead(_)) {
                    work.push(*target);
                } else if !labels.contains(label) {
                    labels.push(label.clone());
                }
            }
        }
        labels
    }

    /// Close the arena around `fragment`.
    pub fn finish(self, fragment: Fragment) -> Nfa {
        Nfa {
            states: self.states,
            start: fragment.start,
            accepting: fragment.accepting,
        }
    }
}

fn pop(stack: &mut Vec<Fragment>, op: &Op) -> Fragment {
    let Some(fragment) = stack.pop() else {
        panic!("malformed pattern: {op:?} applied to an empty automaton stack");
    };
    fragment
}

impl Op {
    /// Pop this op's operands off `stack` and push its result.
    ///
    /// # Panics
    /// Panics when the stack holds fewer automata than the op needs.
    /// Patterns are compile-time constants, so this is a bug in the
    /// pattern, not bad input.
    pub fn apply(&self, builder: &mut NfaBuilder, stack: &mut Vec<Fragment>) {
        let fragment = match self {
            Op::Atom(label) => {
                let start = builder.add_state();
                let accepting = builder.add_state();
                builder.add_transition(start, label.clone(), accepting);
                Fragment { start, accepting }
            }
            Op::Concat => {
                let right = pop(stack, self);
                let left = pop(stack, self);
                builder.add_epsilon(left.accepting, right.start);
                Fragment {
                    start: left.start,
                    accepting: right.accepting,
                }
            }
            Op::Union => {
                let right = pop(stack, self);
                let left = pop(stack, self);
                let start = builder.add_state();
                let accepting = builder.add_state();
                builder.add_epsilon(start, left.start);
                builder.add_epsilon(start, right.start);
                builder.add_epsilon(left.accepting, accepting);
                builder.add_epsilon(right.accepting, accepting);
                Fragment { start, accepting }
            }
            Op::Optional => {
                // Greedy: the skip edge only opens when the operand cannot
                // take its first step.
                let inner = pop(stack, self);
                let guard = Predicate::NotAhead(builder.first_labels(inner.start));
                let start = builder.add_state();
                let accepting = builder.add_state();
                builder.add_epsilon(start, inner.start);
                builder.add_transition(start, guard, accepting);
                builder.add_epsilon(inner.accepting, accepting);
                Fragment { start, accepting }
            }
            Op::Empty => {
                let start = builder.add_state();
                let accepting = builder.add_state();
                builder.add_epsilon(start, accepting);
                Fragment { start, accepting }
            }
        };
        stack.push(fragment);
    }
}

/// A nondeterministic automaton with a single accepting state.
#[derive(Clone, Debug)]
pub struct Nfa {
    states: Vec<State>,
    start: StateId,
    accepting: StateId,
}

impl Nfa {
    #[inline]
    pub fn start(&self) -> StateId {
        self.start
    }

    #[inline]
    pub fn accepting(&self) -> StateId {
        self.accepting
    }

    #[inline]
    pub fn state(&self, id: StateId) -> &State {
        &self.states[id.index()]
    }

    pub fn states(&self) -> &[State] {
        &self.states
    }

    /// States reachable from `seeds` through epsilon moves alone, seeds
    /// included.
    ///
    /// Worklist traversal with a visited set; terminates on epsilon cycles.
    pub fn epsilon_closure(&self, seeds: impl IntoIterator<Item = StateId>) -> BTreeSet<StateId> {
        let mut closure = BTreeSet::new();
        let mut work: Vec<StateId> = seeds.into_iter().collect();
        while let Some(id) = work.pop() {
            if closure.insert(id) {
                work.extend(self.state(id).epsilon.iter().copied());
            }
        }
        closure
    }

    /// Targets of transitions labeled `label` out of `states`.
    pub fn move_on(&self, states: &BTreeSet<StateId>, label: &Predicate) -> BTreeSet<StateId> {
        states
            .iter()
            .flat_map(|&id| self.state(id).transitions.iter())
            .filter(|(l, _)| l == label)
            .map(|&(_, target)| target)
            .collect()
    }

    /// Distinct transition labels out of `states`, in first-seen order.
    pub fn labels_from(&self, states: &BTreeSet<StateId>) -> Vec<Predicate> {
        let mut labels: Vec<Predicate> = Vec::new();
        for &id in states {
            for (label, _) in &self.state(id).transitions {
                if !labels.contains(label) {
                    labels.push(label.clone());
                }
            }
        }
        labels
    }
}

/// Run a postfix program and return the single automaton it leaves.
///
/// # Panics
/// Panics if an op underflows the stack or the program does not reduce to
/// exactly one automaton.
pub fn fold_postfix(program: &[Op]) -> Nfa {
    let mut builder = NfaBuilder::default();
    let mut stack: Vec<Fragment> = Vec::new();
    for op in program {
        op.apply(&mut builder, &mut stack);
    }
    let Some(result) = stack.pop() else {
        panic!("malformed pattern: empty program");
    };
    assert!(
        stack.is_empty(),
        "malformed pattern: {} automata left unconnected",
        stack.len()
    );
    builder.finish(result)
}

/// Compile an expression to an NFA.
pub fn expression_to_nfa(expr: &Expr) -> Nfa {
    fold_postfix(&postfix(expr))
}
