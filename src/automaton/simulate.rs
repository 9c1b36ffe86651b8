//! Word acceptance for deterministic and non-deterministic machines.

use std::collections::BTreeSet;

use crate::{
    automaton::{
        dfa::Dfa,
        nfa::Nfa,
        state::{StateSet, Symbol},
    },
    error::AutomatonError,
};

/// Something that decides membership of words in its language.
pub trait Acceptor {
    /// The alphabet of the machine.
    fn input_alphabet(&self) -> &BTreeSet<Symbol>;

    /// Run the machine on a word that is known to be over its alphabet.
    fn run(&self, word: &[Symbol]) -> bool;

    /// Whether `word` is in the language.
    /// Fails with [`AutomatonError::InvalidSymbol`] if `word` leaves the alphabet.
    fn accepts_symbols(&self, word: &[Symbol]) -> Result<bool, AutomatonError> {
        if let Some(symbol) = word.iter().find(|s| !self.input_alphabet().contains(*s)) {
            return Err(AutomatonError::InvalidSymbol(symbol.to_string()));
        }

        Ok(self.run(word))
    }

    /// Like [`Acceptor::accepts_symbols()`], reading one symbol per character.
    fn accepts(&self, word: &str) -> Result<bool, AutomatonError> {
        self.accepts_symbols(&Symbol::word(word))
    }
}

impl Acceptor for Dfa {
    fn input_alphabet(&self) -> &BTreeSet<Symbol> {
        self.alphabet()
    }

    fn run(&self, word: &[Symbol]) -> bool {
        let mut current = self.initial_state();

        for symbol in word {
            match self.next_state(current, symbol) {
                Some(next) => current = next,
                None => return false,
            }
        }

        self.is_final(current)
    }
}

impl Acceptor for Nfa {
    fn input_alphabet(&self) -> &BTreeSet<Symbol> {
        self.alphabet()
    }

    fn run(&self, word: &[Symbol]) -> bool {
        let mut active = self.closure(self.initial_states());

        for symbol in word {
            let next: StateSet = active
                .iter()
                .flat_map(|q| self.transitions_of(q, symbol).iter().cloned())
                .collect();

            active = self.closure(&next);

            if active.is_empty() {
                return false;
            }
        }

        self.contains_final(&active)
    }
}
