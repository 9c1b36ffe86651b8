use std::cell::OnceCell;
use std::collections::{BTreeMap, BTreeSet};
use std::fmt::{Display, Formatter, Result as FmtResult};
use std::path::Path;

use itertools::Itertools;

use crate::{
    automaton::{
        closure::ClosureTable,
        dfa::Dfa,
        state::{State, StateSet, Symbol},
    },
    error::{AutomatonError, ParsingError},
    parser,
};

static NO_STATES: StateSet = BTreeSet::new();

/// Transition relation of a non-deterministic automaton.
/// Every stored destination set is non-empty.
pub type NfaTransitions = BTreeMap<State, BTreeMap<Symbol, StateSet>>;

/// A non-deterministic finite automaton, optionally with ε-moves.
///
/// ε-moves are stored under [`Symbol::epsilon()`]; the alphabet never contains ε.
/// An `Nfa` is immutable once built; every transformation returns a new value.
#[derive(Debug, Clone)]
pub struct Nfa {
    states: StateSet,
    alphabet: BTreeSet<Symbol>,
    transitions: NfaTransitions,
    initial: StateSet,
    finals: StateSet,
    closures: OnceCell<ClosureTable>,
}

impl Nfa {
    /// Create an NFA and check that every referenced state is declared.
    pub fn new(
        states: StateSet,
        alphabet: BTreeSet<Symbol>,
        mut transitions: NfaTransitions,
        initial: StateSet,
        finals: StateSet,
    ) -> Result<Self, AutomatonError> {
        if alphabet.iter().any(Symbol::is_epsilon) {
            return Err(AutomatonError::InvalidAutomaton("ε must not be part of the alphabet".to_string()));
        }

        if initial.is_empty() {
            return Err(AutomatonError::InvalidAutomaton("No initial state".to_string()));
        }

        check_declared(&states, initial.iter(), "Initial")?;
        check_declared(&states, finals.iter(), "Final")?;

        for (src, row) in &transitions {
            check_declared(&states, std::iter::once(src), "Source")?;

            for (symbol, dests) in row {
                if !symbol.is_epsilon() && !alphabet.contains(symbol) {
                    return Err(AutomatonError::InvalidAutomaton(format!("Symbol '{}' of a transition from {} is not in the alphabet", symbol, src)));
                }

                check_declared(&states, dests.iter(), "Destination")?;
            }
        }

        for row in transitions.values_mut() {
            row.retain(|_, dests| !dests.is_empty());
        }
        transitions.retain(|_, row| !row.is_empty());

        Ok(Self::from_parts(states, alphabet, transitions, initial, finals))
    }

    /// Assemble an NFA whose invariants the caller already guarantees.
    pub(crate) fn from_parts(
        states: StateSet,
        alphabet: BTreeSet<Symbol>,
        transitions: NfaTransitions,
        initial: StateSet,
        finals: StateSet,
    ) -> Self {
        Self {
            states,
            alphabet,
            transitions,
            initial,
            finals,
            closures: OnceCell::new(),
        }
    }

    /// All states.
    pub fn states(&self) -> &StateSet {
        &self.states
    }

    /// The alphabet, without ε.
    pub fn alphabet(&self) -> &BTreeSet<Symbol> {
        &self.alphabet
    }

    /// The set of initial states.
    pub fn initial_states(&self) -> &StateSet {
        &self.initial
    }

    /// The set of final states.
    pub fn final_states(&self) -> &StateSet {
        &self.finals
    }

    /// The full transition relation.
    pub fn transition_table(&self) -> &NfaTransitions {
        &self.transitions
    }

    /// Destinations of `state` on `symbol`. Empty if no move is defined.
    pub fn transitions_of(&self, state: &State, symbol: &Symbol) -> &StateSet {
        self.transitions
            .get(state)
            .and_then(|row| row.get(symbol))
            .unwrap_or(&NO_STATES)
    }

    /// Iterate over all transitions as `(source, symbol, destination)`.
    pub fn transitions(&self) -> impl Iterator<Item = (&State, &Symbol, &State)> + '_ {
        self.transitions
            .iter()
            .flat_map(|(src, row)| row.iter().flat_map(move |(symbol, dests)| dests.iter().map(move |dst| (src, symbol, dst))))
    }

    /// Whether `state` is final.
    pub fn is_final(&self, state: &State) -> bool {
        self.finals.contains(state)
    }

    /// Whether any state of `states` is final.
    pub fn contains_final(&self, states: &StateSet) -> bool {
        !self.finals.is_disjoint(states)
    }

    /// Whether at least one ε-move is defined.
    pub fn has_epsilon_moves(&self) -> bool {
        let epsilon = Symbol::epsilon();
        self.transitions.values().any(|row| row.contains_key(&epsilon))
    }

    /// Per-state ε-closures. Computed on first use and kept with the automaton.
    pub fn closures(&self) -> &ClosureTable {
        self.closures.get_or_init(|| ClosureTable::new(self))
    }

    /// The smallest superset of `seed` that is closed under ε-moves.
    pub fn closure(&self, seed: &StateSet) -> StateSet {
        self.closures().closure(seed)
    }

    /// Eliminate ε-moves and run subset construction.
    pub fn to_dfa(&self) -> Result<Dfa, AutomatonError> {
        self.eliminate_epsilon().determinize()
    }
}

fn check_declared<'a, I>(states: &StateSet, iter: I, what: &str) -> Result<(), AutomatonError>
where
    I: Iterator<Item = &'a State>,
{
    for state in iter {
        if !states.contains(state) {
            return Err(AutomatonError::InvalidAutomaton(format!("{} state {} is not declared", what, state)));
        }
    }

    Ok(())
}

impl Display for Nfa {
    fn fmt(&self, f: &mut Formatter) -> FmtResult {
        writeln!(f, "Q: {}", self.states.iter().join(", "))?;
        writeln!(f, "Σ: {}", self.alphabet.iter().join(", "))?;
        writeln!(f, "Initial: {}", self.initial.iter().join(", "))?;
        writeln!(f, "Final: {}", self.finals.iter().join(", "))?;
        writeln!(f, "Transitions:")?;

        for (src, row) in &self.transitions {
            for (symbol, dests) in row {
                writeln!(f, "  {} --{}--> {{{}}}", src, symbol, dests.iter().join(", "))?;
            }
        }

        Ok(())
    }
}

/// Builds an [`Nfa`] or a [`Dfa`] step by step.
///
/// Use it like so:
/// ```
/// use regconv::automaton::AutomatonBuilder;
///
/// let dfa = AutomatonBuilder::new()
///     .states(["q0", "q1"])
///     .transition("q0", "a", "q1")
///     .transition("q0", "b", "q0")
///     .transition("q1", "a", "q1")
///     .transition("q1", "b", "q0")
///     .initial("q0")
///     .final_state("q1")
///     .build_dfa()
///     .unwrap();
/// ```
/// Symbols used in transitions are added to the alphabet. States are not:
/// referencing an undeclared state fails when building.
#[derive(Debug, Default, Clone)]
pub struct AutomatonBuilder {
    states: StateSet,
    alphabet: BTreeSet<Symbol>,
    transitions: Vec<(State, Symbol, State)>,
    initial: StateSet,
    finals: StateSet,
}

impl AutomatonBuilder {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load an automaton in text notation.
    pub fn from_text_file<P: AsRef<Path>>(path: P) -> Result<Self, ParsingError> {
        parser::automaton::parse_file(path.as_ref())
    }

    /// Declare a state.
    pub fn state<S: Into<State>>(mut self, state: S) -> Self {
        self.states.insert(state.into());
        self
    }

    /// Declare several states.
    pub fn states<I, S>(mut self, states: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<State>,
    {
        self.states.extend(states.into_iter().map(Into::into));
        self
    }

    /// Add a symbol to the alphabet. ε is ignored.
    pub fn symbol<S: Into<Symbol>>(mut self, symbol: S) -> Self {
        let symbol = symbol.into();

        if !symbol.is_epsilon() {
            self.alphabet.insert(symbol);
        }

        self
    }

    /// Add the transition `from --symbol--> to`.
    pub fn transition<F, S, T>(mut self, from: F, symbol: S, to: T) -> Self
    where
        F: Into<State>,
        S: Into<Symbol>,
        T: Into<State>,
    {
        let symbol = symbol.into();

        if !symbol.is_epsilon() {
            self.alphabet.insert(symbol.clone());
        }

        self.transitions.push((from.into(), symbol, to.into()));
        self
    }

    /// Add an initial state. An NFA may have several, a DFA exactly one.
    pub fn initial<S: Into<State>>(mut self, state: S) -> Self {
        self.initial.insert(state.into());
        self
    }

    /// Add a final state.
    pub fn final_state<S: Into<State>>(mut self, state: S) -> Self {
        self.finals.insert(state.into());
        self
    }

    /// Build a non-deterministic automaton.
    pub fn build_nfa(self) -> Result<Nfa, AutomatonError> {
        let mut transitions = NfaTransitions::new();

        for (src, symbol, dst) in self.transitions {
            transitions.entry(src).or_default().entry(symbol).or_default().insert(dst);
        }

        Nfa::new(self.states, self.alphabet, transitions, self.initial, self.finals)
    }

    /// Build a deterministic automaton.
    /// Fails if a (state, symbol) pair has two destinations or an ε-move exists.
    pub fn build_dfa(self) -> Result<Dfa, AutomatonError> {
        let mut transitions: BTreeMap<State, BTreeMap<Symbol, State>> = BTreeMap::new();

        for (src, symbol, dst) in self.transitions {
            if symbol.is_epsilon() {
                return Err(AutomatonError::EpsilonTransitions);
            }

            let row = transitions.entry(src.clone()).or_default();

            match row.get(&symbol) {
                Some(existing) if *existing != dst => {
                    return Err(AutomatonError::InvalidAutomaton(format!("{} has more than one transition on '{}'", src, symbol)));
                },
                _ => {
                    row.insert(symbol, dst);
                },
            }
        }

        let mut initial = self.initial.into_iter();

        let start = match (initial.next(), initial.next()) {
            (Some(start), None) => start,
            (None, _) => return Err(AutomatonError::InvalidAutomaton("No initial state".to_string())),
            (Some(_), Some(_)) => return Err(AutomatonError::InvalidAutomaton("A DFA has exactly one initial state".to_string())),
        };

        Dfa::new(self.states, self.alphabet, transitions, start, self.finals)
    }
}

impl From<&str> for Symbol {
    fn from(s: &str) -> Self {
        Symbol::new(s)
    }
}

impl From<char> for Symbol {
    fn from(c: char) -> Self {
        Symbol::new(c.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_text_file() {
        let nfa = AutomatonBuilder::from_text_file("test-data/automata/ab_star_enfa.txt")
            .unwrap()
            .build_nfa()
            .unwrap();
        assert_eq!(nfa.states().len(), 3);
        assert!(nfa.has_epsilon_moves());

        assert!(AutomatonBuilder::from_text_file("test-data/automata/missing.txt").is_err());
    }

    #[test]
    fn test_undeclared_destination() {
        let err = AutomatonBuilder::new()
            .states(["p"])
            .transition("p", "a", "q")
            .initial("p")
            .build_nfa()
            .unwrap_err();
        assert!(matches!(err, AutomatonError::InvalidAutomaton(_)));
    }

    #[test]
    fn test_undeclared_final() {
        let err = AutomatonBuilder::new()
            .states(["p"])
            .initial("p")
            .final_state("x")
            .build_nfa()
            .unwrap_err();
        assert!(matches!(err, AutomatonError::InvalidAutomaton(_)));
    }

    #[test]
    fn test_transitions_of() {
        let nfa = AutomatonBuilder::new()
            .states(["p", "q", "r"])
            .transition("p", "a", "q")
            .transition("p", "a", "r")
            .transition("q", "ε", "r")
            .initial("p")
            .final_state("r")
            .build_nfa()
            .unwrap();

        assert_eq!(nfa.transitions_of(&"p".into(), &"a".into()).len(), 2);
        assert!(nfa.transitions_of(&"r".into(), &"a".into()).is_empty());
        assert!(nfa.has_epsilon_moves());
        assert_eq!(nfa.alphabet().len(), 1);
        assert_eq!(nfa.transitions().count(), 3);
    }

    #[test]
    fn test_dfa_rejects_nondeterminism() {
        let err = AutomatonBuilder::new()
            .states(["p", "q"])
            .transition("p", "a", "q")
            .transition("p", "a", "p")
            .initial("p")
            .build_dfa()
            .unwrap_err();
        assert!(matches!(err, AutomatonError::InvalidAutomaton(_)));

        let err = AutomatonBuilder::new()
            .states(["p", "q"])
            .transition("p", "ε", "q")
            .initial("p")
            .build_dfa()
            .unwrap_err();
        assert_eq!(err, AutomatonError::EpsilonTransitions);
    }
}
