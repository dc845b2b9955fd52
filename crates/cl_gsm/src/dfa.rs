//! Subset construction.

use std::collections::BTreeSet;

use rustc_hash::{FxHashMap, FxHashSet};

use crate::nfa::{Nfa, StateId};
use crate::Predicate;

/// A DFA state. No epsilon moves; at most one transition per label.
#[derive(Clone, Debug, Default)]
pub struct DfaState {
    pub transitions: Vec<(Predicate, StateId)>,
}

/// A deterministic automaton over predicate labels.
///
/// Determinism is per label: two different labels may still accept the
/// same token (`Name()` and `"foo"`), which the matcher resolves by
/// exploring both.
#[derive(Clone, Debug)]
pub struct Dfa {
    states: Vec<DfaState>,
    start: StateId,
    accepting: FxHashSet<StateId>,
}

impl Dfa {
    #[inline]
    pub fn start(&self) -> StateId {
        self.start
    }

    #[inline]
    pub fn state(&self, id: StateId) -> &DfaState {
        &self.states[id.index()]
    }

    pub fn states(&self) -> &[DfaState] {
        &self.states
    }

    #[inline]
    pub fn is_accepting(&self, id: StateId) -> bool {
        self.accepting.contains(&id)
    }

    pub fn accepting(&self) -> &FxHashSet<StateId> {
        &self.accepting
    }

    /// Target of the transition labeled `label`, if any.
    pub fn transition(&self, from: StateId, label: &Predicate) -> Option<StateId> {
        self.state(from)
            .transitions
            .iter()
            .find(|(l, _)| l == label)
            .map(|&(_, target)| target)
    }

    fn add_state(&mut self) -> StateId {
        let id = u32::try_from(self.states.len())
            .unwrap_or_else(|_| panic!("automaton exceeds {} states", u32::MAX));
        self.states.push(DfaState::default());
        StateId::from_raw(id)
    }
}

/// Canonical identity of an NFA state set: its sorted members.
fn state_set_id(states: &BTreeSet<StateId>) -> Vec<StateId> {
    states.iter().copied().collect()
}

/// Determinize `nfa`.
///
/// Worklist of (DFA state, NFA state set) pairs seeded with the epsilon
/// closure of the NFA start. Sets already processed are skipped by their
/// canonical id, and a DFA state is created at most once per id.
pub fn nfa_to_dfa(nfa: &Nfa) -> Dfa {
    let mut dfa = Dfa {
        states: Vec::new(),
        start: StateId::from_raw(0),
        accepting: FxHashSet::default(),
    };
    let start = dfa.add_state();
    dfa.start = start;

    let start_set = nfa.epsilon_closure([nfa.start()]);
    let mut ids: FxHashMap<Vec<StateId>, StateId> = FxHashMap::default();
    ids.insert(state_set_id(&start_set), start);

    let mut processed: FxHashSet<Vec<StateId>> = FxHashSet::default();
    let mut worklist = vec![(start, start_set)];

    while let Some((state, set)) = worklist.pop() {
        if !processed.insert(state_set_id(&set)) {
            continue;
        }
        if set.contains(&nfa.accepting()) {
            dfa.accepting.insert(state);
        }
        for label in nfa.labels_from(&set) {
            let next = nfa.epsilon_closure(nfa.move_on(&set, &label));
            let next_id = state_set_id(&next);
            let target = match ids.get(&next_id) {
                Some(&existing) => existing,
                None => {
                    let created = dfa.add_state();
                    ids.insert(next_id, created);
                    created
                }
            };
            dfa.states[state.index()].transitions.push((label, target));
            worklist.push((target, next));
        }
    }

    dfa
}

#[cfg(test)]
mod tests;
