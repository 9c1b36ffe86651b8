//! Write automata as JSON documents.
//!
//! Use it like so:
//! ```
//! # use regconv::automaton::AutomatonBuilder;
//! # use regconv::backends::json::JsonGenerator;
//! let dfa = AutomatonBuilder::new()
//!     .states(["q0", "q1"])
//!     .transition("q0", "a", "q1")
//!     .initial("q0")
//!     .final_state("q1")
//!     .build_dfa().unwrap();
//!
//! let value = JsonGenerator::new().dfa_value(&dfa);
//! assert_eq!(value["initial"], "q0");
//!
//! // Or write it into a file
//! // JsonGenerator::new().generate_dfa("dfa.json", &dfa).unwrap();
//! ```

mod generator;

pub use generator::JsonGenerator;
