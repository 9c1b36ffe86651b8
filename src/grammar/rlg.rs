use std::collections::{BTreeSet, HashSet};
use std::fmt::{Display, Formatter, Result as FmtResult};

use ahash::RandomState;
use itertools::Itertools;

use crate::{
    automaton::EPSILON,
    error::GrammarError,
    grammar::GrammarBuilder,
};

/// A non-terminal, identified by its name.
#[derive(Debug, Clone, Eq, Hash, PartialEq, PartialOrd, Ord)]
pub struct NonTerminal(String);

impl NonTerminal {
    /// Create a non-terminal with the given name.
    pub fn new<S: Into<String>>(s: S) -> Self {
        Self(s.into())
    }

    /// The name of the non-terminal.
    pub fn id(&self) -> &str {
        &self.0
    }
}

/// A terminal symbol.
#[derive(Debug, Clone, Eq, Hash, PartialEq, PartialOrd, Ord)]
pub struct Terminal(String);

impl Terminal {
    /// Create a terminal with the given content.
    pub fn new<S: Into<String>>(s: S) -> Self {
        Self(s.into())
    }

    /// The content of the terminal.
    pub fn content(&self) -> &str {
        &self.0
    }
}

/// One symbol on the right-hand side of a production as it was read.
#[derive(Debug, Clone, Eq, Hash, PartialEq)]
pub enum GrammarSymbol {
    /// A terminal
    Terminal(Terminal),
    /// A non-terminal
    NonTerminal(NonTerminal),
}

/// A production rule as it was read, before its shape is checked.
#[derive(Debug, Clone, Eq, Hash, PartialEq)]
pub struct ProductionRule {
    lhs: NonTerminal,
    rhs: Vec<GrammarSymbol>,
}

impl ProductionRule {
    /// Create a rule `lhs -> rhs`. An empty `rhs` is the ε-production.
    pub fn new(lhs: NonTerminal, rhs: Vec<GrammarSymbol>) -> Self {
        Self {
            lhs,
            rhs,
        }
    }

    /// Left-hand side of the rule.
    pub fn lhs(&self) -> &NonTerminal {
        &self.lhs
    }

    /// Right-hand side of the rule.
    pub fn rhs(&self) -> &[GrammarSymbol] {
        &self.rhs
    }

    /// Check that the rule is right-linear.
    pub fn to_production(&self) -> Result<Production, GrammarError> {
        let rhs = match self.rhs.as_slice() {
            [] => Rhs::Epsilon,
            [GrammarSymbol::Terminal(t)] if t.content() == EPSILON => Rhs::Epsilon,
            [GrammarSymbol::Terminal(t)] => Rhs::Terminal(t.clone()),
            [GrammarSymbol::Terminal(t), GrammarSymbol::NonTerminal(n)] if t.content() != EPSILON => Rhs::Step(t.clone(), n.clone()),
            _ => {
                return Err(GrammarError::MalformedProduction {
                    lhs: self.lhs.id().to_string(),
                    rhs: self
                        .rhs
                        .iter()
                        .map(|symbol| match symbol {
                            GrammarSymbol::Terminal(t) => t.content(),
                            GrammarSymbol::NonTerminal(n) => n.id(),
                        })
                        .join(" "),
                });
            },
        };

        Ok(Production {
            lhs: self.lhs.clone(),
            rhs,
        })
    }
}

/// The right-hand side of a right-linear production.
#[derive(Debug, Clone, Eq, Hash, PartialEq)]
pub enum Rhs {
    /// `A -> ε`
    Epsilon,
    /// `A -> a`
    Terminal(Terminal),
    /// `A -> aB`
    Step(Terminal, NonTerminal),
}

/// A right-linear production.
#[derive(Debug, Clone, Eq, Hash, PartialEq)]
pub struct Production {
    lhs: NonTerminal,
    rhs: Rhs,
}

impl Production {
    /// Create the production `lhs -> rhs`.
    pub fn new(lhs: NonTerminal, rhs: Rhs) -> Self {
        Self {
            lhs,
            rhs,
        }
    }

    /// Left-hand side of the production.
    pub fn lhs(&self) -> &NonTerminal {
        &self.lhs
    }

    /// Right-hand side of the production.
    pub fn rhs(&self) -> &Rhs {
        &self.rhs
    }
}

impl Display for Production {
    fn fmt(&self, f: &mut Formatter) -> FmtResult {
        match &self.rhs {
            Rhs::Epsilon => write!(f, "{} -> {}", self.lhs.id(), EPSILON),
            Rhs::Terminal(t) => write!(f, "{} -> {}", self.lhs.id(), t.content()),
            Rhs::Step(t, n) => write!(f, "{} -> {}{}", self.lhs.id(), t.content(), n.id()),
        }
    }
}

/// A right-linear grammar.
#[derive(Debug, Clone)]
pub struct RightLinearGrammar {
    nonterminals: BTreeSet<NonTerminal>,
    terminals: BTreeSet<Terminal>,
    rules: Vec<Production>,
    entrypoint: NonTerminal,
}

impl RightLinearGrammar {
    /// Create a grammar from its parts. Use [`RightLinearGrammar::check()`] to validate it.
    pub fn new(
        nonterminals: BTreeSet<NonTerminal>,
        terminals: BTreeSet<Terminal>,
        rules: Vec<Production>,
        entrypoint: NonTerminal,
    ) -> Self {
        Self {
            nonterminals,
            terminals,
            rules,
            entrypoint,
        }
    }

    /// Load a grammar with a [`GrammarBuilder`].
    pub fn builder() -> GrammarBuilder {
        GrammarBuilder::new()
    }

    /// The declared non-terminals.
    pub fn nonterminals(&self) -> &BTreeSet<NonTerminal> {
        &self.nonterminals
    }

    /// The declared terminals.
    pub fn terminals(&self) -> &BTreeSet<Terminal> {
        &self.terminals
    }

    /// The productions in the order they were given.
    pub fn rules(&self) -> &[Production] {
        &self.rules
    }

    /// The start symbol.
    pub fn entrypoint(&self) -> &NonTerminal {
        &self.entrypoint
    }

    /// Check that the start symbol and every used symbol is declared.
    pub fn check(&self) -> Result<(), GrammarError> {
        if !self.nonterminals.contains(&self.entrypoint) {
            return Err(GrammarError::MissingEntrypoint(self.entrypoint.id().to_string()));
        }

        for rule in &self.rules {
            if !self.nonterminals.contains(&rule.lhs) {
                return Err(GrammarError::UndeclaredSymbol(rule.lhs.id().to_string()));
            }

            match &rule.rhs {
                Rhs::Epsilon => {},
                Rhs::Terminal(t) => self.check_terminal(t)?,
                Rhs::Step(t, n) => {
                    self.check_terminal(t)?;

                    if !self.nonterminals.contains(n) {
                        return Err(GrammarError::UndeclaredSymbol(n.id().to_string()));
                    }
                },
            }
        }

        Ok(())
    }

    fn check_terminal(&self, t: &Terminal) -> Result<(), GrammarError> {
        if self.terminals.contains(t) {
            Ok(())
        } else {
            Err(GrammarError::UndeclaredSymbol(t.content().to_string()))
        }
    }

    /// Whether `word` can be derived from the start symbol.
    pub fn generates(&self, word: &str) -> bool {
        let mut visited: HashSet<(&NonTerminal, usize), RandomState> = HashSet::default();
        let mut worklist = vec![(&self.entrypoint, 0)];

        while let Some((nonterm, pos)) = worklist.pop() {
            if !visited.insert((nonterm, pos)) {
                continue;
            }

            let rest = &word[pos..];

            for rule in self.rules.iter().filter(|rule| rule.lhs == *nonterm) {
                match &rule.rhs {
                    Rhs::Epsilon if rest.is_empty() => return true,
                    Rhs::Terminal(t) if rest == t.content() => return true,
                    Rhs::Step(t, next) if rest.starts_with(t.content()) => {
                        worklist.push((next, pos + t.content().len()));
                    },
                    _ => {},
                }
            }
        }

        false
    }
}

impl Display for RightLinearGrammar {
    fn fmt(&self, f: &mut Formatter) -> FmtResult {
        writeln!(f, "N: {}", self.nonterminals.iter().map(NonTerminal::id).join(", "))?;
        writeln!(f, "Σ: {}", self.terminals.iter().map(Terminal::content).join(", "))?;
        writeln!(f, "Entrypoint: {}", self.entrypoint.id())?;
        writeln!(f, "Rules:")?;

        for rule in &self.rules {
            writeln!(f, "  {}", rule)?;
        }

        Ok(())
    }
}
