//! Backends consume grammars and automata.
//!
//! - [`text`]: write automata in the text notation the command-line tools read
//! - [`json`]: write automata as JSON documents
//! - [`interpreter`]: generate words from a grammar

pub mod interpreter;
pub mod json;
pub mod text;
