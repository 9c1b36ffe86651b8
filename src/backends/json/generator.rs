use serde::ser::Serialize;
use serde_json::{
    json,
    ser::PrettyFormatter,
    Serializer,
    Value,
};
use std::{
    fs::File,
    io::{Result, Write},
    path::Path,
};

use crate::automaton::{Dfa, Nfa, State, StateSet, Symbol};

fn state_list(states: &StateSet) -> Value {
    Value::Array(states.iter().map(|state| Value::String(state.to_string())).collect())
}

fn transition_list<'a, I>(transitions: I) -> Value
where
    I: Iterator<Item = (&'a State, &'a Symbol, &'a State)>,
{
    Value::Array(
        transitions
            .map(|(src, symbol, dst)| {
                json!({
                    "from": src.to_string(),
                    "symbol": symbol.content(),
                    "to": dst.to_string(),
                })
            })
            .collect(),
    )
}

fn alphabet_list<'a, I: Iterator<Item = &'a Symbol>>(alphabet: I) -> Value {
    Value::Array(alphabet.map(|symbol| Value::String(symbol.content().to_string())).collect())
}

/// This is the main struct of the [`json`](crate::backends::json) backend.
/// States are written with their display names, composite states as `{A, B}`.
pub struct JsonGenerator {}

impl JsonGenerator {
    /// Create a new JsonGenerator.
    #[allow(clippy::new_without_default)]
    pub fn new() -> Self {
        Self {}
    }

    /// The JSON document for `nfa`. `initial` is an array.
    pub fn nfa_value(&self, nfa: &Nfa) -> Value {
        json!({
            "states": state_list(nfa.states()),
            "alphabet": alphabet_list(nfa.alphabet().iter()),
            "transitions": transition_list(nfa.transitions()),
            "initial": state_list(nfa.initial_states()),
            "final": state_list(nfa.final_states()),
        })
    }

    /// The JSON document for `dfa`. `initial` is a single state.
    pub fn dfa_value(&self, dfa: &Dfa) -> Value {
        json!({
            "states": state_list(dfa.states()),
            "alphabet": alphabet_list(dfa.alphabet().iter()),
            "transitions": transition_list(dfa.transitions()),
            "initial": dfa.initial_state().to_string(),
            "final": state_list(dfa.final_states()),
        })
    }

    fn write_value<W: Write>(&self, mut stream: W, value: &Value) -> Result<()> {
        let mut buf = Vec::new();
        let formatter = PrettyFormatter::with_indent(b"    ");
        let mut ser = Serializer::with_formatter(&mut buf, formatter);
        value.serialize(&mut ser)?;
        buf.push(b'\n');

        stream.write_all(&buf)?;
        stream.flush()
    }

    /// Write `nfa` to `stream`.
    pub fn write_nfa<W: Write>(&self, stream: W, nfa: &Nfa) -> Result<()> {
        self.write_value(stream, &self.nfa_value(nfa))
    }

    /// Write `dfa` to `stream`.
    pub fn write_dfa<W: Write>(&self, stream: W, dfa: &Dfa) -> Result<()> {
        self.write_value(stream, &self.dfa_value(dfa))
    }

    /// Write `nfa` into the file `path`.
    pub fn generate_nfa<P: AsRef<Path>>(&self, path: P, nfa: &Nfa) -> Result<()> {
        self.write_nfa(File::create(path)?, nfa)
    }

    /// Write `dfa` into the file `path`.
    pub fn generate_dfa<P: AsRef<Path>>(&self, path: P, dfa: &Dfa) -> Result<()> {
        self.write_dfa(File::create(path)?, dfa)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::automaton::AutomatonBuilder;

    fn ab_star() -> Nfa {
        AutomatonBuilder::new()
            .states(["D", "A", "qf"])
            .transition("D", "a", "A")
            .transition("A", "b", "D")
            .transition("D", "ε", "qf")
            .initial("D")
            .final_state("qf")
            .build_nfa()
            .unwrap()
    }

    #[test]
    fn test_nfa_document() {
        let mut buf = Vec::new();
        JsonGenerator::new().write_nfa(&mut buf, &ab_star()).unwrap();
        let text = String::from_utf8(buf).unwrap();

        assert!(text.starts_with("{\n    \"states\": [\n        \"A\",\n"));

        let value: Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["alphabet"], json!(["a", "b"]));
        assert_eq!(value["initial"], json!(["D"]));
        assert_eq!(value["final"], json!(["qf"]));
        assert_eq!(value["transitions"].as_array().unwrap().len(), 3);
        assert_eq!(value["transitions"][2], json!({"from": "D", "symbol": "ε", "to": "qf"}));
    }

    #[test]
    fn test_dfa_document() {
        let dfa = ab_star().eliminate_epsilon().determinize().unwrap();
        let value = JsonGenerator::new().dfa_value(&dfa);

        assert_eq!(value["initial"], json!("{D, qf}"));
        assert_eq!(value["final"], json!(["{D, qf}"]));
        assert_eq!(value["states"].as_array().unwrap().len(), 2);
    }
}
