//! This is the frontend that loads right-linear grammars.
//!
//! Use it like so:
//! ```
//! use regconv::grammar::RightLinearGrammar;
//!
//! let grammar = RightLinearGrammar::builder()
//!     // Load a grammar in text notation
//!     .text_grammar("test-data/grammars/ab_star.txt").unwrap()
//!     .build().unwrap();
//!
//! assert!(grammar.generates("abab"));
//! ```
//! You can inspect the grammar contents like this:
//! ```
//! # use regconv::grammar::{RightLinearGrammar, Rhs};
//! # let grammar = RightLinearGrammar::builder().text_grammar("test-data/grammars/ab_star.txt").unwrap().build().unwrap();
//! for rule in grammar.rules() {
//!     // The left-hand-side (lhs) of a rule is a single non-terminal
//!     println!("lhs = {}", rule.lhs().id());
//!
//!     // The right-hand-side (rhs) has one of three shapes
//!     match rule.rhs() {
//!         Rhs::Epsilon => println!("ε"),
//!         Rhs::Terminal(term) => println!("terminal: {}", term.content()),
//!         Rhs::Step(term, next) => println!("{} then {}", term.content(), next.id()),
//!     }
//! }
//! ```
//! Finally, translate it into an automaton with [`RightLinearGrammar::to_nfa()`].

mod builder;
mod rlg;
mod translate;

pub use builder::*;
pub use rlg::*;
pub use translate::*;
