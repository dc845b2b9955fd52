//! Pattern execution over token streams.

use cl_ir::{Token, TokenRange};
use rustc_hash::FxHashSet;

use crate::dfa::{nfa_to_dfa, Dfa};
use crate::expr::Expr;
use crate::nfa::{expression_to_nfa, StateId};

/// A compiled pattern.
///
/// Matching explores `(state, position)` configurations: labels are
/// deterministic per predicate, but different predicates may accept the
/// same token, and `Balanced` consumes a variable number of tokens, so more
/// than one configuration can be live at once.
#[derive(Clone, Debug)]
pub struct Matcher {
    dfa: Dfa,
}

impl Matcher {
    /// Compile `pattern` through NFA and subset construction.
    pub fn new(pattern: impl Into<Expr>) -> Self {
        let pattern = pattern.into();
        let nfa = expression_to_nfa(&pattern);
        let dfa = nfa_to_dfa(&nfa);
        tracing::trace!(
            nfa_states = nfa.states().len(),
            dfa_states = dfa.states().len(),
            "compiled token pattern"
        );
        Matcher { dfa }
    }

    pub fn dfa(&self) -> &Dfa {
        &self.dfa
    }

    /// Every non-overlapping match, leftmost first.
    ///
    /// At each position the longest match wins and scanning resumes right
    /// after it. Optional elements are greedy: once their operand can take
    /// a first step, the branch that skips them is closed. A failed attempt, including one that runs out of tokens,
    /// leaves nothing behind and scanning resumes one token later. Matches
    /// that would consume nothing are not reported.
    pub fn find_all<'a>(&self, tokens: &'a [Token]) -> Vec<TokenRange<'a>> {
        let mut matches = Vec::new();
        let mut pos = 0;
        while pos < tokens.len() {
            match self.longest_at(tokens, pos) {
                Some(end) if end > pos => {
                    matches.push(TokenRange::new(tokens, pos..end));
                    pos = end;
                }
                _ => pos += 1,
            }
        }
        matches
    }

    /// End of the longest match starting at `start`, if any.
    pub fn longest_at(&self, tokens: &[Token], start: usize) -> Option<usize> {
        self.accepting_ends(tokens, start).into_iter().max()
    }

    /// Whether the whole of `tokens` is in the pattern's language.
    pub fn matches_exactly(&self, tokens: &[Token]) -> bool {
        self.accepting_ends(tokens, 0).contains(&tokens.len())
    }

    /// Positions at which some path through the automaton accepts.
    fn accepting_ends(&self, tokens: &[Token], start: usize) -> FxHashSet<usize> {
        let mut ends = FxHashSet::default();
        let mut seen: FxHashSet<(StateId, usize)> = FxHashSet::default();
        let mut work = vec![(self.dfa.start(), start)];

        while let Some((state, pos)) = work.pop() {
            if !seen.insert((state, pos)) {
                continue;
            }
            if self.dfa.is_accepting(state) {
                ends.insert(pos);
            }
            for (label, target) in &self.dfa.state(state).transitions {
                if let Some(next) = label.step(tokens, pos) {
                    work.push((*target, next));
                }
            }
        }

        ends
    }
}
