//! The automaton engine: ε-closures, ε-elimination, subset construction,
//! complement, reversal and word simulation.
//!
//! Every operation takes its input by reference and returns a new automaton:
//! ```
//! use regconv::automaton::{Acceptor, AutomatonBuilder};
//!
//! // (ab)* with an ε-move into the accepting state
//! let nfa = AutomatonBuilder::new()
//!     .states(["D", "A", "qf"])
//!     .transition("D", "a", "A")
//!     .transition("A", "b", "D")
//!     .transition("D", "ε", "qf")
//!     .initial("D")
//!     .final_state("qf")
//!     .build_nfa()
//!     .unwrap();
//!
//! let dfa = nfa.eliminate_epsilon().determinize().unwrap();
//! let complement = dfa.complete().complement().unwrap();
//! let reverse = dfa.reverse();
//!
//! assert!(dfa.accepts("abab").unwrap());
//! assert!(complement.accepts("aba").unwrap());
//! assert!(reverse.accepts("ba").unwrap());
//! ```

mod closure;
mod derived;
mod dfa;
mod epsilon;
mod graph;
mod nfa;
mod simulate;
mod state;
mod subset;

pub use closure::{epsilon_closure, ClosureTable};
pub use derived::REVERSE_INITIAL;
pub use dfa::{Dfa, DfaTransitions};
pub use graph::AutomatonGraph;
pub use nfa::{AutomatonBuilder, Nfa, NfaTransitions};
pub use simulate::Acceptor;
pub use state::{CompositeState, State, StateSet, Symbol, EPSILON};
