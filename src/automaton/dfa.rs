use std::collections::{BTreeMap, BTreeSet};
use std::fmt::{Display, Formatter, Result as FmtResult};

use itertools::Itertools;

use crate::{
    automaton::{
        nfa::{Nfa, NfaTransitions},
        state::{State, StateSet, Symbol},
    },
    error::AutomatonError,
};

/// Transition relation of a deterministic automaton.
pub type DfaTransitions = BTreeMap<State, BTreeMap<Symbol, State>>;

/// A deterministic finite automaton.
///
/// The transition table may be partial; a missing entry is a move into an
/// implicit dead state. [`Dfa::complete()`] makes the dead state explicit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dfa {
    states: StateSet,
    alphabet: BTreeSet<Symbol>,
    transitions: DfaTransitions,
    initial: State,
    finals: StateSet,
}

impl Dfa {
    /// Create a DFA and check that every referenced state and symbol is declared.
    pub fn new(
        states: StateSet,
        alphabet: BTreeSet<Symbol>,
        transitions: DfaTransitions,
        initial: State,
        finals: StateSet,
    ) -> Result<Self, AutomatonError> {
        if alphabet.iter().any(Symbol::is_epsilon) {
            return Err(AutomatonError::EpsilonTransitions);
        }

        if !states.contains(&initial) {
            return Err(AutomatonError::InvalidAutomaton(format!("Initial state {} is not declared", initial)));
        }

        if let Some(state) = finals.iter().find(|s| !states.contains(*s)) {
            return Err(AutomatonError::InvalidAutomaton(format!("Final state {} is not declared", state)));
        }

        for (src, row) in &transitions {
            if !states.contains(src) {
                return Err(AutomatonError::InvalidAutomaton(format!("Source state {} is not declared", src)));
            }

            for (symbol, dst) in row {
                if symbol.is_epsilon() {
                    return Err(AutomatonError::EpsilonTransitions);
                }

                if !alphabet.contains(symbol) {
                    return Err(AutomatonError::InvalidAutomaton(format!("Symbol '{}' of a transition from {} is not in the alphabet", symbol, src)));
                }

                if !states.contains(dst) {
                    return Err(AutomatonError::InvalidAutomaton(format!("Destination state {} is not declared", dst)));
                }
            }
        }

        Ok(Self::from_parts(states, alphabet, transitions, initial, finals))
    }

    pub(crate) fn from_parts(
        states: StateSet,
        alphabet: BTreeSet<Symbol>,
        transitions: DfaTransitions,
        initial: State,
        finals: StateSet,
    ) -> Self {
        Self {
            states,
            alphabet,
            transitions,
            initial,
            finals,
        }
    }

    /// All states.
    pub fn states(&self) -> &StateSet {
        &self.states
    }

    /// The alphabet.
    pub fn alphabet(&self) -> &BTreeSet<Symbol> {
        &self.alphabet
    }

    /// The initial state.
    pub fn initial_state(&self) -> &State {
        &self.initial
    }

    /// The set of final states.
    pub fn final_states(&self) -> &StateSet {
        &self.finals
    }

    /// The full transition table.
    pub fn transition_table(&self) -> &DfaTransitions {
        &self.transitions
    }

    /// The unique destination of `state` on `symbol`, if defined.
    pub fn next_state(&self, state: &State, symbol: &Symbol) -> Option<&State> {
        self.transitions.get(state).and_then(|row| row.get(symbol))
    }

    /// Iterate over all transitions as `(source, symbol, destination)`.
    pub fn transitions(&self) -> impl Iterator<Item = (&State, &Symbol, &State)> + '_ {
        self.transitions
            .iter()
            .flat_map(|(src, row)| row.iter().map(move |(symbol, dst)| (src, symbol, dst)))
    }

    /// Whether `state` is final.
    pub fn is_final(&self, state: &State) -> bool {
        self.finals.contains(state)
    }

    /// The first (state, symbol) pair without a transition, in state order.
    pub fn missing_transition(&self) -> Option<(&State, &Symbol)> {
        self.states
            .iter()
            .cartesian_product(self.alphabet.iter())
            .find(|(state, symbol)| self.next_state(state, symbol).is_none())
    }

    /// Whether every state has a transition on every symbol.
    pub fn is_complete(&self) -> bool {
        self.missing_transition().is_none()
    }

    /// View this DFA as an NFA with singleton destination sets.
    pub fn to_nfa(&self) -> Nfa {
        let mut transitions = NfaTransitions::new();

        for (src, symbol, dst) in self.transitions() {
            transitions
                .entry(src.clone())
                .or_default()
                .insert(symbol.clone(), StateSet::from([dst.clone()]));
        }

        Nfa::from_parts(
            self.states.clone(),
            self.alphabet.clone(),
            transitions,
            StateSet::from([self.initial.clone()]),
            self.finals.clone(),
        )
    }
}

impl Display for Dfa {
    fn fmt(&self, f: &mut Formatter) -> FmtResult {
        writeln!(f, "Q: {}", self.states.iter().join(", "))?;
        writeln!(f, "Σ: {}", self.alphabet.iter().join(", "))?;
        writeln!(f, "Initial: {}", self.initial)?;
        writeln!(f, "Final: {}", self.finals.iter().join(", "))?;
        writeln!(f, "Transitions:")?;

        for (src, symbol, dst) in self.transitions() {
            writeln!(f, "  {} --{}--> {}", src, symbol, dst)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::automaton::AutomatonBuilder;

    #[test]
    fn test_completeness() {
        let partial = AutomatonBuilder::new()
            .states(["q0", "q1"])
            .transition("q0", "a", "q1")
            .transition("q1", "b", "q0")
            .initial("q0")
            .final_state("q1")
            .build_dfa()
            .unwrap();

        assert!(!partial.is_complete());
        assert_eq!(
            partial.missing_transition(),
            Some((&State::named("q0"), &Symbol::new("b")))
        );
    }

    #[test]
    fn test_undeclared_initial() {
        let err = Dfa::new(
            StateSet::from([State::named("p")]),
            BTreeSet::new(),
            DfaTransitions::new(),
            State::named("q"),
            StateSet::new(),
        )
        .unwrap_err();
        assert!(matches!(err, AutomatonError::InvalidAutomaton(_)));
    }

    #[test]
    fn test_to_nfa() {
        let dfa = AutomatonBuilder::new()
            .states(["p", "q"])
            .transition("p", "a", "q")
            .initial("p")
            .final_state("q")
            .build_dfa()
            .unwrap();
        let nfa = dfa.to_nfa();

        assert_eq!(nfa.initial_states(), &StateSet::from([State::named("p")]));
        assert_eq!(nfa.transitions().count(), 1);
        assert!(nfa.is_final(&"q".into()));
    }
}
