use std::path::Path;

use crate::{
    automaton::{AutomatonBuilder, CompositeState, State, Symbol, EPSILON},
    error::ParsingError,
    parser::{read_file, split_top_level},
};

const EMPTY_SET: &str = "∅";

/// Parse a state name. Braces denote a composite state, `∅` or `{}` the empty one.
pub(crate) fn parse_state(token: &str) -> State {
    let token = token.trim();

    if token == EMPTY_SET {
        return State::empty();
    }

    match token.strip_prefix('{').and_then(|t| t.strip_suffix('}')) {
        Some(inner) => State::from(split_top_level(inner).into_iter().map(parse_state).collect::<CompositeState>()),
        None => State::named(token),
    }
}

fn parse_states(list: &str) -> Vec<State> {
    split_top_level(list).into_iter().map(parse_state).collect()
}

fn strip_keyword<'a>(line: &'a str, keywords: &[&str]) -> Option<&'a str> {
    keywords.iter().find_map(|keyword| line.strip_prefix(keyword)).map(str::trim)
}

fn initial_marker(line: &str) -> Option<&str> {
    let (state, marker) = line.rsplit_once(':')?;

    match marker.trim() {
        "inicial" | "initial" => Some(state.trim()),
        _ => None,
    }
}

fn parse_transition(builder: AutomatonBuilder, line: &str) -> Result<AutomatonBuilder, String> {
    let err = || format!("Malformed transition '{}'. Use: state, symbol -> state", line);

    let (lhs, dst) = line.split_once("->").ok_or_else(err)?;
    let (src, symbol) = lhs.rsplit_once(',').ok_or_else(err)?;
    let (src, symbol, dst) = (src.trim(), symbol.trim(), dst.trim());

    if src.is_empty() || symbol.is_empty() || dst.is_empty() {
        return Err(err());
    }

    Ok(builder.transition(parse_state(src), Symbol::new(symbol), parse_state(dst)))
}

/// Read an automaton in text notation:
/// ```text
/// Q: q0, q1
/// Σ: a, b
/// δ:
///   q0, a -> q1
///   q1, b -> q0
/// q0: inicial
/// F: q1
/// ```
/// Transitions are recognized by their arrow, so the `δ:` header is optional.
pub(crate) fn parse_automaton(source: &str) -> Result<AutomatonBuilder, String> {
    let mut builder = AutomatonBuilder::new();

    for line in source.lines().map(str::trim) {
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        if line.contains("->") {
            builder = parse_transition(builder, line)?;
        } else if let Some(state) = initial_marker(line) {
            builder = builder.initial(parse_state(state));
        } else if let Some(list) = strip_keyword(line, &["Iniciais:", "Initial:", "q0:"]) {
            for state in parse_states(list) {
                builder = builder.initial(state);
            }
        } else if let Some(list) = strip_keyword(line, &["Q:"]) {
            builder = builder.states(parse_states(list));
        } else if let Some(list) = strip_keyword(line, &["Σ:", "∑:", "S:"]) {
            for symbol in list.split(',').map(str::trim).filter(|s| !s.is_empty() && *s != EPSILON) {
                builder = builder.symbol(symbol);
            }
        } else if let Some(list) = strip_keyword(line, &["F:"]) {
            for state in parse_states(list) {
                builder = builder.final_state(state);
            }
        } else if strip_keyword(line, &["δ:", "Δ:"]).is_some() {
            continue;
        } else {
            return Err(format!("Unrecognized line: '{}'", line));
        }
    }

    Ok(builder)
}

pub(crate) fn parse_file(path: &Path) -> Result<AutomatonBuilder, ParsingError> {
    let source = read_file(path)?;
    parse_automaton(&source).map_err(|e| ParsingError::new(path, e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::automaton::{Acceptor, StateSet};

    #[test]
    fn test_parse_state() {
        assert_eq!(parse_state(" q0 "), State::named("q0"));
        assert_eq!(parse_state("∅"), State::empty());
        assert_eq!(parse_state("{}"), State::empty());

        let composite = parse_state("{A, qf}");
        assert_eq!(composite, State::from(CompositeState::new(StateSet::from(["A".into(), "qf".into()]))));
        assert_eq!(composite.to_string(), "{A, qf}");
    }

    #[test]
    fn test_parse_nfa() {
        let nfa = parse_automaton(
            "Q: D, A, qf\nΣ: a, b, ε\nδ:\n  D, a -> A\n  A, b -> D\n  D, ε -> qf\nD: inicial\nF: qf\n",
        )
        .unwrap()
        .build_nfa()
        .unwrap();

        assert_eq!(nfa.alphabet().len(), 2);
        assert!(nfa.has_epsilon_moves());
        assert_eq!(nfa.initial_states(), &StateSet::from(["D".into()]));
        assert!(nfa.accepts("abab").unwrap());
        assert!(!nfa.accepts("aab").unwrap());
    }

    #[test]
    fn test_parse_dfa() {
        let dfa = parse_automaton(
            "Q: {D, qf}, {A}, ∅\n∑: a, b\n{D, qf}, a -> {A}\n{D, qf}, b -> ∅\n{A}, a -> ∅\n{A}, b -> {D, qf}\n∅, a -> ∅\n∅, b -> ∅\n{D, qf}: inicial\nF: {D, qf}\n",
        )
        .unwrap()
        .build_dfa()
        .unwrap();

        assert!(dfa.is_complete());
        assert_eq!(dfa.states().len(), 3);
        assert!(dfa.accepts("ab").unwrap());
        assert!(!dfa.accepts("ba").unwrap());
    }

    #[test]
    fn test_several_initials() {
        let nfa = parse_automaton("Q: p, q\nS: a\nIniciais: p, q\nF: q\np, a -> q\n").unwrap().build_nfa().unwrap();
        assert_eq!(nfa.initial_states().len(), 2);
        assert!(nfa.accepts("").unwrap());
    }

    #[test]
    fn test_malformed() {
        assert!(parse_automaton("Q: p\nhello").is_err());
        assert!(parse_automaton("p a -> q").is_err());
        assert!(parse_automaton(", a -> q").is_err());
    }
}
