//! This library converts right-linear grammars into finite automata and derives new automata from them.
//!
//! It consists of
//! - __frontend__: Load grammars in text or JSON notation and automata in text notation.
//! - __engine__: ε-closures, ε-elimination, subset construction, completion, complement,
//!   reversal and word simulation, see [`automaton`].
//! - __backend__: Write automata in text or JSON notation, or generate words from a grammar.
//!
//! ## Getting Started
//! The first step always is to load a grammar. To do this use the [`RightLinearGrammar::builder()`](grammar::RightLinearGrammar::builder) method
//! that will give you access to a [`GrammarBuilder`](grammar::GrammarBuilder) like this:
//! ```
//! use regconv::grammar::RightLinearGrammar;
//!
//! let grammar = RightLinearGrammar::builder()
//!     // Load a grammar in text notation
//!     .text_grammar("test-data/grammars/ab_star.txt").unwrap()
//!     .build().unwrap();
//! ```
//! Then, translate it into an automaton and run it through the pipeline:
//! ```
//! # use regconv::grammar::RightLinearGrammar;
//! use regconv::automaton::Acceptor;
//! # let grammar = RightLinearGrammar::builder().text_grammar("test-data/grammars/ab_star.txt").unwrap().build().unwrap();
//!
//! let nfa = grammar.to_nfa().unwrap();
//! let dfa = nfa.eliminate_epsilon().determinize().unwrap().complete();
//! let complement = dfa.complement().unwrap();
//!
//! assert!(dfa.accepts("abab").unwrap());
//! assert!(complement.accepts("ba").unwrap());
//! ```
//! Finally, plug the automaton into one of the provided backends:
//! ```no_run
//! # use regconv::{automaton::AutomatonBuilder, backends};
//! # let dfa = AutomatonBuilder::new().state("q0").initial("q0").build_dfa().unwrap();
//! backends::text::TextGenerator::new().generate_dfa("dfa.txt", &dfa).unwrap();
//! // or
//! backends::json::JsonGenerator::new().generate_dfa("dfa.json", &dfa).unwrap();
//! ```

#![deny(missing_docs)]

pub(crate) mod parser;

pub mod error;
pub mod grammar;
pub mod automaton;
pub mod backends;

#[cfg(test)]
mod tests;
