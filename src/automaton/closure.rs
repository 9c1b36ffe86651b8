//! ε-closures.

use std::collections::HashMap;
use std::fmt::{Display, Formatter, Result as FmtResult};

use ahash::RandomState;
use itertools::Itertools;

use crate::automaton::{
    nfa::Nfa,
    state::{State, StateSet, Symbol},
};

/// The smallest set that contains `seed` and is closed under ε-moves of `nfa`.
///
/// States in `seed` that `nfa` does not know are kept as they are.
pub fn epsilon_closure(nfa: &Nfa, seed: &StateSet) -> StateSet {
    let epsilon = Symbol::epsilon();
    let mut closure = seed.clone();
    let mut worklist: Vec<&State> = seed.iter().collect();

    while let Some(state) = worklist.pop() {
        for dst in nfa.transitions_of(state, &epsilon) {
            if closure.insert(dst.clone()) {
                worklist.push(dst);
            }
        }
    }

    closure
}

/// The ε-closure of every state of an automaton.
#[derive(Debug, Clone)]
pub struct ClosureTable {
    closures: HashMap<State, StateSet, RandomState>,
}

impl ClosureTable {
    /// Compute the closure of each state of `nfa`.
    pub fn new(nfa: &Nfa) -> Self {
        let mut closures = HashMap::with_capacity_and_hasher(nfa.states().len(), RandomState::new());

        for state in nfa.states() {
            let seed = StateSet::from([state.clone()]);
            closures.insert(state.clone(), epsilon_closure(nfa, &seed));
        }

        Self {
            closures,
        }
    }

    /// The closure of a single state, if the state is known.
    pub fn get(&self, state: &State) -> Option<&StateSet> {
        self.closures.get(state)
    }

    /// The closure of a set of states: the union of the members' closures.
    pub fn closure(&self, seed: &StateSet) -> StateSet {
        let mut closure = StateSet::new();

        for state in seed {
            match self.closures.get(state) {
                Some(states) => closure.extend(states.iter().cloned()),
                None => {
                    closure.insert(state.clone());
                },
            }
        }

        closure
    }
}

impl Display for ClosureTable {
    fn fmt(&self, f: &mut Formatter) -> FmtResult {
        for (state, closure) in self.closures.iter().sorted_by(|a, b| a.0.cmp(b.0)) {
            writeln!(f, "ε-closure({}) = {{{}}}", state, closure.iter().join(", "))?;
        }

        Ok(())
    }
}
