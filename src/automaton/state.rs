use std::collections::BTreeSet;
use std::fmt::{Display, Formatter, Result as FmtResult};

use itertools::Itertools;

/// The reserved symbol of an ε-move.
pub const EPSILON: &str = "ε";

/// An atomic element of an alphabet.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Symbol(String);

impl Symbol {
    /// Create a symbol from its textual content.
    pub fn new<S: Into<String>>(s: S) -> Self {
        Self(s.into())
    }

    /// The symbol of an ε-move.
    pub fn epsilon() -> Self {
        Self(EPSILON.to_string())
    }

    /// Whether this symbol is the reserved ε.
    pub fn is_epsilon(&self) -> bool {
        self.0 == EPSILON
    }

    /// The textual content of the symbol.
    pub fn content(&self) -> &str {
        &self.0
    }

    /// Split a word into symbols, one per character.
    pub fn word(w: &str) -> Vec<Symbol> {
        w.chars().map(|c| Symbol(c.to_string())).collect()
    }
}

impl Display for Symbol {
    fn fmt(&self, f: &mut Formatter) -> FmtResult {
        write!(f, "{}", self.0)
    }
}

/// A set of states. Ordered, so that equality never depends on insertion order.
pub type StateSet = BTreeSet<State>;

/// A state of an automaton.
///
/// States read from a grammar or a file are [`State::Named`]. Subset construction
/// produces [`State::Composite`] states whose identity is the set of their members.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum State {
    /// An opaque name
    Named(String),
    /// A set of states of another automaton
    Composite(CompositeState),
}

impl State {
    /// Create a named state.
    pub fn named<S: Into<String>>(name: S) -> Self {
        State::Named(name.into())
    }

    /// The empty composite state, used as dead/trap state.
    pub fn empty() -> Self {
        State::Composite(CompositeState::default())
    }

    /// Return a named state based on `base` that is not contained in `taken`.
    /// Primes are appended until the name is free.
    pub fn fresh(base: &str, taken: &StateSet) -> Self {
        let mut name = base.to_string();

        while taken.contains(&State::Named(name.clone())) {
            name.push('\'');
        }

        State::Named(name)
    }

    /// Return a trap state that is not contained in `taken`.
    /// This is `∅` if free, else `{∅}`, `{{∅}}` and so on.
    pub fn fresh_trap(taken: &StateSet) -> Self {
        let mut trap = State::empty();

        while taken.contains(&trap) {
            trap = State::Composite(CompositeState::new(StateSet::from([trap])));
        }

        trap
    }
}

impl From<&str> for State {
    fn from(name: &str) -> Self {
        State::named(name)
    }
}

impl From<CompositeState> for State {
    fn from(composite: CompositeState) -> Self {
        State::Composite(composite)
    }
}

impl Display for State {
    fn fmt(&self, f: &mut Formatter) -> FmtResult {
        match self {
            State::Named(name) => write!(f, "{}", name),
            State::Composite(composite) => write!(f, "{}", composite),
        }
    }
}

/// An immutable set of states that can be used as a single state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CompositeState(StateSet);

impl CompositeState {
    /// Create a composite state from its members.
    pub fn new(members: StateSet) -> Self {
        Self(members)
    }

    /// The members of this composite state.
    pub fn members(&self) -> &StateSet {
        &self.0
    }

    /// Whether this is the empty (dead) composite state.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// True iff at least one member is in `finals`.
    pub fn contains_any(&self, finals: &StateSet) -> bool {
        self.0.iter().any(|member| finals.contains(member))
    }
}

impl FromIterator<State> for CompositeState {
    fn from_iter<I: IntoIterator<Item = State>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl Display for CompositeState {
    fn fmt(&self, f: &mut Formatter) -> FmtResult {
        if self.0.is_empty() {
            write!(f, "∅")
        } else {
            write!(f, "{{{}}}", self.0.iter().join(", "))
        }
    }
}
