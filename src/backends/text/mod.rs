//! Write automata in text notation.
//!
//! Use it like so:
//! ```no_run
//! # use regconv::grammar::RightLinearGrammar;
//! # use regconv::backends::text::TextGenerator;
//! // First, load a grammar from disk and translate it
//! let nfa = RightLinearGrammar::builder()
//!     .text_grammar("my-grammar.txt").unwrap()
//!     .build().unwrap()
//!     .to_nfa().unwrap();
//!
//! // Then, write the automaton into nfa.txt
//! TextGenerator::new().generate_nfa("nfa.txt", &nfa).unwrap();
//! ```

mod generator;

pub use generator::{TextGenerator, DEFAULT_INDENT};
