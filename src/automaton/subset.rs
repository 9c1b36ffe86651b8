//! Subset construction.

use std::collections::HashSet;

use ahash::RandomState;

use crate::{
    automaton::{
        dfa::{Dfa, DfaTransitions},
        nfa::Nfa,
        state::{CompositeState, State, StateSet},
    },
    error::AutomatonError,
};

impl Nfa {
    /// Convert this ε-free automaton into a DFA whose states are [`CompositeState`]s.
    ///
    /// The initial composite state is the set of initial states. After
    /// [`Nfa::eliminate_epsilon()`] that set already is the ε-closure of the original
    /// initial state, so `nfa.eliminate_epsilon().determinize()` is the intended entry.
    ///
    /// Only composite states reachable from the initial one are created. A symbol
    /// that leads to the empty set gets no transition; the result is a partial DFA
    /// until [`Dfa::complete()`] adds the dead state.
    pub fn determinize(&self) -> Result<Dfa, AutomatonError> {
        if self.has_epsilon_moves() {
            return Err(AutomatonError::EpsilonTransitions);
        }

        let start = CompositeState::new(self.initial_states().clone());
        let mut known: HashSet<CompositeState, RandomState> = HashSet::default();
        let mut worklist = vec![start.clone()];
        let mut states = StateSet::new();
        let mut finals = StateSet::new();
        let mut transitions = DfaTransitions::new();

        known.insert(start.clone());

        while let Some(current) = worklist.pop() {
            let source = State::Composite(current.clone());

            if current.contains_any(self.final_states()) {
                finals.insert(source.clone());
            }

            for symbol in self.alphabet() {
                let target: CompositeState = current
                    .members()
                    .iter()
                    .flat_map(|q| self.transitions_of(q, symbol).iter().cloned())
                    .collect();

                if target.is_empty() {
                    continue;
                }

                if known.insert(target.clone()) {
                    worklist.push(target.clone());
                }

                transitions
                    .entry(source.clone())
                    .or_default()
                    .insert(symbol.clone(), State::Composite(target));
            }

            states.insert(source);
        }

        Ok(Dfa::from_parts(
            states,
            self.alphabet().clone(),
            transitions,
            State::Composite(start),
            finals,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::automaton::{Acceptor, AutomatonBuilder};

    fn composite(states: &[&str]) -> State {
        State::Composite(states.iter().map(|s| State::from(*s)).collect())
    }

    fn ends_with_ab() -> Nfa {
        AutomatonBuilder::new()
            .states(["0", "1", "2"])
            .transition("0", "a", "0")
            .transition("0", "b", "0")
            .transition("0", "a", "1")
            .transition("1", "b", "2")
            .initial("0")
            .final_state("2")
            .build_nfa()
            .unwrap()
    }

    #[test]
    fn test_subset_construction() {
        let dfa = ends_with_ab().determinize().unwrap();

        assert_eq!(dfa.initial_state(), &composite(&["0"]));
        assert_eq!(dfa.states().len(), 3);
        assert_eq!(dfa.next_state(&composite(&["0"]), &"a".into()), Some(&composite(&["0", "1"])));
        assert_eq!(dfa.next_state(&composite(&["0", "1"]), &"b".into()), Some(&composite(&["0", "2"])));
        assert_eq!(dfa.final_states(), &StateSet::from([composite(&["0", "2"])]));
        assert!(dfa.is_complete());
    }

    #[test]
    fn test_determinization_keeps_language() {
        let nfa = ends_with_ab();
        let dfa = nfa.determinize().unwrap();

        for w in ["", "a", "b", "ab", "aab", "abb", "bab", "abab", "ba"] {
            assert_eq!(nfa.accepts(w).unwrap(), dfa.accepts(w).unwrap(), "word {:?}", w);
        }
    }

    #[test]
    fn test_dead_moves_are_left_out() {
        let nfa = AutomatonBuilder::new()
            .states(["p", "q"])
            .symbol("b")
            .transition("p", "a", "q")
            .initial("p")
            .final_state("q")
            .build_nfa()
            .unwrap();
        let dfa = nfa.determinize().unwrap();

        assert_eq!(dfa.states().len(), 2);
        assert!(dfa.next_state(&composite(&["p"]), &"b".into()).is_none());
        assert!(!dfa.is_complete());
    }

    #[test]
    fn test_requires_epsilon_free() {
        let nfa = AutomatonBuilder::new()
            .states(["p", "q"])
            .transition("p", "ε", "q")
            .initial("p")
            .build_nfa()
            .unwrap();

        assert_eq!(nfa.determinize().unwrap_err(), AutomatonError::EpsilonTransitions);
        assert!(nfa.to_dfa().is_ok());
    }
}
