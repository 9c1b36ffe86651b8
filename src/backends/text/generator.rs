use std::fs::File;
use std::io::{BufWriter, Result, Write};
use std::path::Path;

use itertools::Itertools;

use crate::automaton::{Dfa, Nfa, State, StateSet, Symbol};

/// Indentation of the transition lines unless set with [`TextGenerator::indent()`]
pub const DEFAULT_INDENT: usize = 4;

fn emit_header<W: Write>(out: &mut W, title: Option<&str>, states: &StateSet, alphabet: &[&Symbol]) -> Result<()> {
    if let Some(title) = title {
        writeln!(out, "# {}", title)?;
    }

    writeln!(out, "Q: {}", states.iter().join(", "))?;
    writeln!(out, "Σ: {}", alphabet.iter().join(", "))
}

fn emit_transitions<'a, W, I>(out: &mut W, indent: usize, transitions: I) -> Result<()>
where
    W: Write,
    I: Iterator<Item = (&'a State, &'a Symbol, &'a State)>,
{
    writeln!(out, "δ:")?;

    for (src, symbol, dst) in transitions {
        writeln!(out, "{:indent$}{}, {} -> {}", "", src, symbol, dst, indent = indent)?;
    }

    Ok(())
}

fn emit_footer<W: Write>(out: &mut W, initial: &StateSet, finals: &StateSet) -> Result<()> {
    match initial.iter().exactly_one() {
        Ok(start) => writeln!(out, "{}: inicial", start)?,
        Err(_) => writeln!(out, "Iniciais: {}", initial.iter().join(", "))?,
    }

    writeln!(out, "F: {}", finals.iter().join(", "))
}

/// This is the main struct of the [`text`](crate::backends::text) backend.
/// It writes automata in the notation that the command-line tools read.
pub struct TextGenerator {
    title: Option<String>,
    indent: usize,
}

impl Default for TextGenerator {
    fn default() -> Self {
        Self {
            title: None,
            indent: DEFAULT_INDENT,
        }
    }
}

impl TextGenerator {
    /// Create a new TextGenerator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Emit `title` as a comment in the first line.
    ///
    /// Default: no title
    pub fn title<S: Into<String>>(mut self, title: S) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Indent the lines below `δ:` by `width` spaces.
    ///
    /// Default: [`DEFAULT_INDENT`]
    pub fn indent(mut self, width: usize) -> Self {
        self.indent = width;
        self
    }

    /// Write `nfa` to `stream`. Every destination gets its own transition line.
    pub fn write_nfa<W: Write>(&self, stream: W, nfa: &Nfa) -> Result<()> {
        let mut out = BufWriter::new(stream);

        emit_header(&mut out, self.title.as_deref(), nfa.states(), &nfa.alphabet().iter().collect::<Vec<_>>())?;
        emit_transitions(&mut out, self.indent, nfa.transitions())?;
        emit_footer(&mut out, nfa.initial_states(), nfa.final_states())?;

        out.flush()
    }

    /// Write `dfa` to `stream`.
    pub fn write_dfa<W: Write>(&self, stream: W, dfa: &Dfa) -> Result<()> {
        let mut out = BufWriter::new(stream);

        emit_header(&mut out, self.title.as_deref(), dfa.states(), &dfa.alphabet().iter().collect::<Vec<_>>())?;
        emit_transitions(&mut out, self.indent, dfa.transitions())?;
        emit_footer(&mut out, &StateSet::from([dfa.initial_state().clone()]), dfa.final_states())?;

        out.flush()
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
