//! Generate words by interpreting the rules of the grammar.
//!
//! Use it like so:
//! ```
//! # use regconv::grammar::RightLinearGrammar;
//! # use regconv::backends::interpreter::GrammarInterpreter;
//! // First, load a grammar from disk
//! let grammar = RightLinearGrammar::builder()
//!     .text_grammar("test-data/grammars/ab_star.txt").unwrap()
//!     .build().unwrap();
//!
//! // Then, generate one word and write it to a specified stream.
//! let mut stream = Vec::new();
//! GrammarInterpreter::new(&grammar).interpret(&mut stream).unwrap();
//! assert!(grammar.generates(std::str::from_utf8(&stream).unwrap()));
//! ```

use std::collections::HashMap;
use std::io::{Error, ErrorKind, Write};

use ahash::RandomState;

use crate::grammar::{NonTerminal, Rhs, RightLinearGrammar};

/// Number of derivation steps after which the interpreter only picks rules
/// that lead to the shortest derivation.
pub const DEFAULT_STEP_BUDGET: usize = 64;

type Distances = HashMap<NonTerminal, usize, RandomState>;

fn rule_distance(rhs: &Rhs, distances: &Distances) -> Option<usize> {
    match rhs {
        Rhs::Epsilon | Rhs::Terminal(_) => Some(0),
        Rhs::Step(_, next) => distances.get(next).copied(),
    }
}

/// The GrammarInterpreter interprets the rules of a grammar to generate words.
pub struct GrammarInterpreter {
    rules: HashMap<NonTerminal, Vec<Rhs>, RandomState>,
    distances: Distances,
    entrypoint: NonTerminal,
    seed: usize,
    budget: usize,
}

impl GrammarInterpreter {
    /// Create a new GrammarInterpreter.
    pub fn new(grammar: &RightLinearGrammar) -> Self {
        let mut rules: HashMap<NonTerminal, Vec<Rhs>, RandomState> = HashMap::default();

        for rule in grammar.rules() {
            rules.entry(rule.lhs().clone()).or_default().push(rule.rhs().clone());
        }

        // Number of steps of the shortest derivation of a terminal word
        let mut distances = Distances::default();

        loop {
            let mut changed = false;

            for (lhs, alternatives) in &rules {
                let best = alternatives.iter().filter_map(|rhs| rule_distance(rhs, &distances)).min();

                if let Some(best) = best {
                    let best = best + 1;

                    if distances.get(lhs).map_or(true, |d| *d > best) {
                        distances.insert(lhs.clone(), best);
                        changed = true;
                    }
                }
            }

            if !changed {
                break;
            }
        }

        Self {
            rules,
            distances,
            entrypoint: grammar.entrypoint().clone(),
            seed: 0xDEADBEEF,
            budget: DEFAULT_STEP_BUDGET,
        }
    }

    /// Seed the RNG of the GrammarInterpreter.
    pub fn seed(&mut self, seed: usize) {
        if seed == 0 {
            self.seed = 0xDEADBEEF;
        } else {
            self.seed = seed;
        }
    }

    /// Set the number of free derivation steps before the interpreter steers towards termination.
    ///
    /// Default: [`DEFAULT_STEP_BUDGET`]
    pub fn step_budget(&mut self, budget: usize) {
        self.budget = budget;
    }

    fn rand(&mut self) -> usize {
        let mut x = self.seed;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.seed = x;
        x
    }

    /// Generate one word and write it to the given output stream `stream`.
    /// Returns the number of bytes written to `stream`.
    ///
    /// Fails with [`ErrorKind::InvalidInput`] if the start symbol derives no word.
    pub fn interpret<S: Write>(&mut self, stream: &mut S) -> std::io::Result<usize> {
        if !self.distances.contains_key(&self.entrypoint) {
            return Err(Error::new(
                ErrorKind::InvalidInput,
                format!("The entrypoint {} does not derive any word", self.entrypoint.id()),
            ));
        }

        let mut generated = 0;
        let mut steps = 0;
        let mut current = self.entrypoint.clone();

        loop {
            steps += 1;

            let candidates: Vec<(Rhs, usize)> = match self.rules.get(&current) {
                Some(alternatives) => alternatives
                    .iter()
                    .filter_map(|rhs| rule_distance(rhs, &self.distances).map(|d| (rhs.clone(), d)))
                    .collect(),
                None => Vec::new(),
            };

            let candidates: Vec<Rhs> = if steps > self.budget {
                let shortest = candidates.iter().map(|(_, d)| *d).min().unwrap_or(0);
                candidates.into_iter().filter(|(_, d)| *d == shortest).map(|(rhs, _)| rhs).collect()
            } else {
                candidates.into_iter().map(|(rhs, _)| rhs).collect()
            };

            if candidates.is_empty() {
                return Err(Error::new(ErrorKind::InvalidInput, format!("{} has no productive rule", current.id())));
            }

            let rand = self.rand();

            match &candidates[rand % candidates.len()] {
                Rhs::Epsilon => break,
                Rhs::Terminal(term) => {
                    stream.write_all(term.content().as_bytes())?;
                    generated += term.content().len();
                    break;
                },
                Rhs::Step(term, next) => {
                    stream.write_all(term.content().as_bytes())?;
                    generated += term.content().len();
                    current = next.clone();
                },
            }
        }

        Ok(generated)
    }
}
