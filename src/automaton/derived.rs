//! Automata derived from a DFA: completion, complement and reversal.

use crate::{
    automaton::{
        dfa::Dfa,
        nfa::{Nfa, NfaTransitions},
        state::{State, StateSet, Symbol},
    },
    error::AutomatonError,
};

/// Name of the fresh initial state introduced by [`Dfa::reverse()`].
pub const REVERSE_INITIAL: &str = "I_rev";

impl Dfa {
    /// Make the transition table total.
    ///
    /// Every undefined (state, symbol) pair is routed to a non-final trap state that
    /// loops on every symbol. The trap is the empty composite state `∅`, or a fresh
    /// composite if `∅` is already a state. A complete DFA is returned unchanged.
    pub fn complete(&self) -> Dfa {
        if self.is_complete() {
            return self.clone();
        }

        let trap = State::fresh_trap(self.states());
        let mut states = self.states().clone();
        let mut transitions = self.transition_table().clone();

        states.insert(trap.clone());

        for state in &states {
            let row = transitions.entry(state.clone()).or_default();

            for symbol in self.alphabet() {
                row.entry(symbol.clone()).or_insert_with(|| trap.clone());
            }
        }

        Dfa::from_parts(states, self.alphabet().clone(), transitions, self.initial_state().clone(), self.final_states().clone())
    }

    /// Swap final and non-final states.
    ///
    /// The DFA must be complete, see [`Dfa::complete()`]. Every non-final state,
    /// trap included, becomes final so that a word is accepted by exactly one of
    /// the two automata.
    pub fn complement(&self) -> Result<Dfa, AutomatonError> {
        if let Some((state, symbol)) = self.missing_transition() {
            return Err(AutomatonError::IncompleteAutomaton {
                state: state.to_string(),
                symbol: symbol.to_string(),
            });
        }

        let finals: StateSet = self.states().difference(self.final_states()).cloned().collect();

        Ok(Dfa::from_parts(
            self.states().clone(),
            self.alphabet().clone(),
            self.transition_table().clone(),
            self.initial_state().clone(),
            finals,
        ))
    }

    /// Build an ε-NFA for the reverse language.
    ///
    /// Every transition `p -a-> q` becomes `q -a-> p`. A fresh initial state has an
    /// ε-move to each former final state and the former initial state is the only
    /// final state.
    pub fn reverse(&self) -> Nfa {
        let start = State::fresh(REVERSE_INITIAL, self.states());
        let mut transitions = NfaTransitions::new();

        for (src, symbol, dst) in self.transitions() {
            transitions
                .entry(dst.clone())
                .or_default()
                .entry(symbol.clone())
                .or_default()
                .insert(src.clone());
        }

        if !self.final_states().is_empty() {
            transitions
                .entry(start.clone())
                .or_default()
                .insert(Symbol::epsilon(), self.final_states().clone());
        }

        let mut states = self.states().clone();
        states.insert(start.clone());

        Nfa::from_parts(
            states,
            self.alphabet().clone(),
            transitions,
            StateSet::from([start]),
            StateSet::from([self.initial_state().clone()]),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::automaton::{Acceptor, AutomatonBuilder};

    fn ends_in_a() -> Dfa {
        AutomatonBuilder::new()
            .states(["q0", "q1"])
            .transition("q0", "a", "q1")
            .transition("q0", "b", "q0")
            .transition("q1", "a", "q1")
            .transition("q1", "b", "q0")
            .initial("q0")
            .final_state("q1")
            .build_dfa()
            .unwrap()
    }

    fn starts_with_ab() -> Dfa {
        AutomatonBuilder::new()
            .states(["s", "x", "y"])
            .transition("s", "a", "x")
            .transition("x", "b", "y")
            .transition("y", "a", "y")
            .transition("y", "b", "y")
            .initial("s")
            .final_state("y")
            .build_dfa()
            .unwrap()
    }

    #[test]
    fn test_complement_two_states() {
        let dfa = ends_in_a();
        let comp = dfa.complement().unwrap();

        assert!(dfa.accepts("a").unwrap());
        assert!(!dfa.accepts("").unwrap());
        assert!(comp.accepts("").unwrap());
        assert!(comp.accepts("b").unwrap());
        assert!(!comp.accepts("a").unwrap());

        // the source is left intact
        assert!(dfa.accepts("a").unwrap());
    }

    #[test]
    fn test_complement_requires_completeness() {
        let err = starts_with_ab().complement().unwrap_err();
        assert_eq!(
            err,
            AutomatonError::IncompleteAutomaton {
                state: "s".to_string(),
                symbol: "b".to_string(),
            }
        );
    }

    #[test]
    fn test_complete_then_complement() {
        let dfa = starts_with_ab();
        let full = dfa.complete();

        assert!(full.is_complete());
        assert_eq!(full.states().len(), 4);
        assert!(!full.is_final(&State::empty()));

        let comp = full.complement().unwrap();
        for w in ["", "a", "b", "ab", "aba", "ba", "bb", "abba"] {
            assert_ne!(dfa.accepts(w).unwrap(), comp.accepts(w).unwrap(), "word {:?}", w);
        }
        assert!(comp.is_final(&State::empty()));
    }

    #[test]
    fn test_complete_keeps_existing_empty_state() {
        let dfa = AutomatonBuilder::new()
            .states(["p"])
            .state(State::empty())
            .symbol("b")
            .transition("p", "a", State::empty())
            .transition(State::empty(), "a", "p")
            .initial("p")
            .final_state(State::empty())
            .build_dfa()
            .unwrap();
        assert!(dfa.accepts("a").unwrap());

        let full = dfa.complete();
        assert!(full.is_complete());
        assert_eq!(full.states().len(), 3);
        assert!(full.is_final(&State::empty()));
        assert!(full.accepts("a").unwrap());
        assert!(full.accepts("aaa").unwrap());
        assert!(!full.accepts("ab").unwrap());
        assert!(!full.accepts("b").unwrap());
    }

    #[test]
    fn test_reverse() {
        let dfa = starts_with_ab();
        let rev = dfa.reverse();

        assert_eq!(rev.initial_states(), &StateSet::from([State::named(REVERSE_INITIAL)]));
        assert_eq!(rev.final_states(), &StateSet::from([State::named("s")]));
        assert!(rev.has_epsilon_moves());

        for w in ["", "a", "ab", "abb", "aba", "ba", "bba", "abab"] {
            let reversed: String = w.chars().rev().collect();
            assert_eq!(dfa.accepts(w).unwrap(), rev.accepts(&reversed).unwrap(), "word {:?}", w);
        }
    }

    #[test]
    fn test_reverse_fresh_initial() {
        let dfa = AutomatonBuilder::new()
            .states(["I_rev", "q"])
            .transition("I_rev", "a", "q")
            .initial("I_rev")
            .final_state("q")
            .build_dfa()
            .unwrap();
        let rev = dfa.reverse();

        assert_eq!(rev.initial_states(), &StateSet::from([State::named("I_rev'")]));
        assert!(rev.accepts("a").unwrap());
        assert!(!rev.accepts("").unwrap());
    }
}
