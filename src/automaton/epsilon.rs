use crate::automaton::{
    nfa::{Nfa, NfaTransitions},
    state::StateSet,
};

impl Nfa {
    /// Rewrite this automaton into an equivalent one without ε-moves.
    ///
    /// Every path `p -ε*-> r -a-> s -ε*-> t` becomes a direct move `p -a-> t`.
    /// Final states stay as they are. The initial set of the result is the
    /// ε-closure of the initial set, so the empty word keeps its verdict.
    pub fn eliminate_epsilon(&self) -> Nfa {
        let closures = self.closures();
        let mut transitions = NfaTransitions::new();

        for p in self.states() {
            let reach = closures.closure(&StateSet::from([p.clone()]));

            for symbol in self.alphabet() {
                let mut target = StateSet::new();

                for r in &reach {
                    for s in self.transitions_of(r, symbol) {
                        target.extend(closures.closure(&StateSet::from([s.clone()])));
                    }
                }

                if !target.is_empty() {
                    transitions.entry(p.clone()).or_default().insert(symbol.clone(), target);
                }
            }
        }

        Nfa::from_parts(
            self.states().clone(),
            self.alphabet().clone(),
            transitions,
            closures.closure(self.initial_states()),
            self.final_states().clone(),
        )
    }
}

#[cfg(test)]
mod tests {
    use crate::automaton::{state::State, Acceptor, AutomatonBuilder};

    fn set(states: &[&str]) -> crate::automaton::StateSet {
        states.iter().map(|s| State::from(*s)).collect()
    }

    fn sample() -> crate::automaton::Nfa {
        // accepts a*b? with ε glue
        AutomatonBuilder::new()
            .states(["s", "a", "b", "f"])
            .transition("s", "ε", "a")
            .transition("a", "a", "a")
            .transition("a", "ε", "b")
            .transition("b", "b", "f")
            .transition("b", "ε", "f")
            .initial("s")
            .final_state("f")
            .build_nfa()
            .unwrap()
    }

    #[test]
    fn test_elimination_table() {
        let nfa = sample().eliminate_epsilon();

        assert!(!nfa.has_epsilon_moves());
        assert_eq!(nfa.transitions_of(&"s".into(), &"a".into()), &set(&["a", "b", "f"]));
        assert_eq!(nfa.transitions_of(&"s".into(), &"b".into()), &set(&["f"]));
        assert!(nfa.transitions_of(&"f".into(), &"a".into()).is_empty());
        assert_eq!(nfa.initial_states(), &set(&["s", "a", "b", "f"]));
        assert_eq!(nfa.final_states(), &set(&["f"]));
    }

    #[test]
    fn test_elimination_keeps_language() {
        let nfa = sample();
        let free = nfa.eliminate_epsilon();

        for w in ["", "a", "aa", "b", "ab", "aab", "ba", "bb", "abb"] {
            assert_eq!(nfa.accepts(w).unwrap(), free.accepts(w).unwrap(), "word {:?}", w);
        }
    }

    #[test]
    fn test_elimination_is_noop_without_epsilon() {
        let nfa = AutomatonBuilder::new()
            .states(["p", "q"])
            .transition("p", "a", "q")
            .initial("p")
            .final_state("q")
            .build_nfa()
            .unwrap();
        let free = nfa.eliminate_epsilon();
        assert_eq!(free.transition_table(), nfa.transition_table());
        assert_eq!(free.initial_states(), nfa.initial_states());
    }
}
