use std::collections::BTreeSet;

use crate::{
    automaton::{Nfa, NfaTransitions, State, StateSet, Symbol},
    error::GrammarError,
    grammar::{NonTerminal, Rhs, RightLinearGrammar},
};

/// Base name of the accepting state added by the translation.
pub const FINAL_STATE: &str = "qf";

fn state_of(nonterm: &NonTerminal) -> State {
    State::named(nonterm.id())
}

impl RightLinearGrammar {
    /// Translate this grammar into an ε-NFA.
    ///
    /// Non-terminals become states and one fresh accepting state `qf` is added:
    /// `A -> ε` gives `A -ε-> qf`, `A -> a` gives `A -a-> qf` and `A -> aB` gives `A -a-> B`.
    pub fn to_nfa(&self) -> Result<Nfa, GrammarError> {
        self.translate(false)
    }

    /// Translate this grammar directly into an NFA without ε-moves.
    /// `A -> ε` makes `A` final instead of adding an ε-move.
    pub fn to_epsilon_free_nfa(&self) -> Result<Nfa, GrammarError> {
        self.translate(true)
    }

    fn translate(&self, epsilon_free: bool) -> Result<Nfa, GrammarError> {
        self.check()?;

        let mut states: StateSet = self.nonterminals().iter().map(state_of).collect();
        let accept = State::fresh(FINAL_STATE, &states);
        states.insert(accept.clone());

        let alphabet: BTreeSet<Symbol> = self
            .terminals()
            .iter()
            .map(|t| Symbol::new(t.content()))
            .filter(|symbol| !symbol.is_epsilon())
            .collect();
        let mut finals = StateSet::from([accept.clone()]);
        let mut transitions = NfaTransitions::new();

        for rule in self.rules() {
            let src = state_of(rule.lhs());

            let (symbol, dst) = match rule.rhs() {
                Rhs::Epsilon if epsilon_free => {
                    finals.insert(src);
                    continue;
                },
                Rhs::Epsilon => (Symbol::epsilon(), accept.clone()),
                Rhs::Terminal(t) => (Symbol::new(t.content()), accept.clone()),
                Rhs::Step(t, next) => (Symbol::new(t.content()), state_of(next)),
            };

            transitions.entry(src).or_default().entry(symbol).or_default().insert(dst);
        }

        Ok(Nfa::from_parts(
            states,
            alphabet,
            transitions,
            StateSet::from([state_of(self.entrypoint())]),
            finals,
        ))
    }
}
