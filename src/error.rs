//! Errors returned by the readers, the grammar frontend and the automaton engine.

use std::path::PathBuf;
use thiserror::Error;

/// A file could not be read or does not follow the expected notation.
#[derive(Debug, Error)]
pub struct ParsingError {
    path: PathBuf,
    msg: String,
}

impl ParsingError {
    pub(crate) fn new<P: Into<PathBuf>, S: Into<String>>(path: P, msg: S) -> Self {
        Self {
            path: path.into(),
            msg: msg.into(),
        }
    }

    /// The file that failed to parse.
    pub fn path(&self) -> &std::path::Path {
        &self.path
    }

    /// What went wrong.
    pub fn message(&self) -> &str {
        &self.msg
    }
}

impl std::fmt::Display for ParsingError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "ParsingError in {}: {}", self.path.display(), self.msg)
    }
}

/// Errors in the structure of a right-linear grammar.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GrammarError {
    /// The right-hand side is neither ε, a terminal nor a terminal followed by a non-terminal
    #[error("Production '{lhs} -> {rhs}' is not right-linear")]
    MalformedProduction {
        /// Left-hand side of the offending production
        lhs: String,
        /// Right-hand side as it was written
        rhs: String,
    },

    /// A terminal or non-terminal is used but was not declared
    #[error("The symbol '{0}' is used but never declared")]
    UndeclaredSymbol(String),

    /// The start symbol has no production and is not a declared non-terminal
    #[error("The grammar does not contain the entrypoint: {0}")]
    MissingEntrypoint(String),
}

/// Errors raised by the automaton engine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AutomatonError {
    /// A transition, initial or final state references an undeclared state,
    /// or a deterministic table has more than one destination
    #[error("Invalid automaton: {0}")]
    InvalidAutomaton(String),

    /// Complementation needs a transition for every (state, symbol) pair
    #[error("Automaton is incomplete: no transition from {state} on '{symbol}'")]
    IncompleteAutomaton {
        /// State without the transition
        state: String,
        /// Symbol without the transition
        symbol: String,
    },

    /// A simulated word contains a symbol outside of the alphabet
    #[error("Invalid symbol: '{0}'")]
    InvalidSymbol(String),

    /// The operation needs an ε-free machine
    #[error("The automaton still contains ε-transitions")]
    EpsilonTransitions,
}

/// Umbrella error used by builders and the command-line drivers.
#[derive(Debug, Error)]
pub enum Error {
    /// See [`ParsingError`]
    #[error(transparent)]
    Parsing(#[from] ParsingError),

    /// See [`GrammarError`]
    #[error(transparent)]
    Grammar(#[from] GrammarError),

    /// See [`AutomatonError`]
    #[error(transparent)]
    Automaton(#[from] AutomatonError),
}
