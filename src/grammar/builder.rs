use std::collections::BTreeSet;
use std::path::Path;

use crate::{
    parser::{json, text},
    grammar::{GrammarSymbol, NonTerminal, ProductionRule, RightLinearGrammar, Terminal},
    error::{ParsingError, GrammarError},
};

/// The start symbol used when neither the grammar file nor the caller names one
pub const DEFAULT_ENTRYPOINT: &str = "S";

/// The GrammarBuilder loads grammars from disk and returns a [`RightLinearGrammar`].
///
/// Use it like so:
/// ```no_run
/// use regconv::grammar::RightLinearGrammar;
///
/// let grammar = RightLinearGrammar::builder()
///     // Load a grammar in text notation
///     .text_grammar("grammar.txt").unwrap()
///     // Or in JSON notation
///     .json_grammar("more-rules.json").unwrap()
///     // Override the start symbol
///     .entrypoint("S")
///     .build().unwrap();
/// ```
/// Rules of all loaded files are joined. Text grammars declare their symbols in
/// their header, JSON grammars declare every left-hand side and every terminal they use.
pub struct GrammarBuilder {
    rules: Vec<ProductionRule>,
    nonterminals: BTreeSet<NonTerminal>,
    terminals: BTreeSet<Terminal>,
    declared_entrypoint: Option<NonTerminal>,
    entrypoint: Option<NonTerminal>,
}

impl GrammarBuilder {
    pub(crate) fn new() -> Self {
        Self {
            rules: Vec::new(),
            nonterminals: BTreeSet::new(),
            terminals: BTreeSet::new(),
            declared_entrypoint: None,
            entrypoint: None,
        }
    }
}

impl GrammarBuilder {
    /// Load a grammar in text notation: a header `G = ({N}, {T}, P, S)` followed by
    /// productions like `A -> aB | b | ε`.
    pub fn text_grammar<P: AsRef<Path>>(mut self, path: P) -> Result<Self, ParsingError> {
        let mut grammar = text::parse_file(path.as_ref())?;

        self.nonterminals.append(&mut grammar.nonterminals);
        self.terminals.append(&mut grammar.terminals);
        self.rules.append(&mut grammar.rules);

        if self.declared_entrypoint.is_none() {
            self.declared_entrypoint = Some(grammar.entrypoint);
        }

        Ok(self)
    }

    /// Load a grammar in JSON notation: `{"<A>": [["a", "<B>"], ["b"], []]}`.
    pub fn json_grammar<P: AsRef<Path>>(mut self, path: P) -> Result<Self, ParsingError> {
        let mut new_rules = json::parse_json(path.as_ref())?;

        for rule in &new_rules {
            self.nonterminals.insert(rule.lhs().clone());

            for symbol in rule.rhs() {
                if let GrammarSymbol::Terminal(term) = symbol {
                    self.terminals.insert(term.clone());
                }
            }
        }

        self.rules.append(&mut new_rules);
        Ok(self)
    }

    /// Set the start symbol, overriding the one of the grammar file.
    pub fn entrypoint<S: Into<String>>(mut self, entrypoint: S) -> Self {
        self.entrypoint = Some(NonTerminal::new(entrypoint));
        self
    }

    /// Check every rule and create a [`RightLinearGrammar`].
    pub fn build(self) -> Result<RightLinearGrammar, GrammarError> {
        let entrypoint = self
            .entrypoint
            .or(self.declared_entrypoint)
            .unwrap_or_else(|| NonTerminal::new(DEFAULT_ENTRYPOINT));

        let rules = self
            .rules
            .iter()
            .map(ProductionRule::to_production)
            .collect::<Result<Vec<_>, _>>()?;

        let grammar = RightLinearGrammar::new(self.nonterminals, self.terminals, rules, entrypoint);
        grammar.check()?;
        Ok(grammar)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_grammar() {
        let grammar = RightLinearGrammar::builder()
            .text_grammar("test-data/grammars/ab_star.txt").unwrap()
            .build()
            .unwrap();

        assert_eq!(grammar.entrypoint(), &NonTerminal::new("D"));
        assert_eq!(grammar.rules().len(), 3);
        assert!(grammar.generates("abab"));
        assert!(!grammar.generates("ba"));
    }

    #[test]
    fn test_json_grammar() {
        let grammar = RightLinearGrammar::builder()
            .json_grammar("test-data/grammars/ab_star.json").unwrap()
            .build()
            .unwrap();

        assert_eq!(grammar.entrypoint(), &NonTerminal::new(DEFAULT_ENTRYPOINT));
        assert_eq!(grammar.terminals().len(), 2);
        assert!(grammar.generates(""));
        assert!(grammar.generates("ab"));
    }

    #[test]
    fn test_entrypoint_override() {
        let grammar = RightLinearGrammar::builder()
            .text_grammar("test-data/grammars/ab_star.txt").unwrap()
            .entrypoint("A")
            .build()
            .unwrap();

        assert!(grammar.generates("b"));
        assert!(!grammar.generates(""));
    }

    #[test]
    fn test_missing_refs() {
        let result = RightLinearGrammar::builder()
            .json_grammar("test-data/grammars/invalid-refs.json").unwrap()
            .build();

        assert_eq!(result.unwrap_err(), GrammarError::UndeclaredSymbol("B".to_string()));
    }

    #[test]
    fn test_not_right_linear() {
        let result = RightLinearGrammar::builder()
            .text_grammar("test-data/grammars/not-linear.txt").unwrap()
            .build();

        assert!(matches!(result, Err(GrammarError::MalformedProduction { .. })));
    }

    #[test]
    fn test_two_symbol_shapes() {
        for path in ["test-data/grammars/two-nonterminals.txt", "test-data/grammars/nonterminal-first.txt"] {
            let result = RightLinearGrammar::builder()
                .text_grammar(path).unwrap()
                .build();

            assert!(matches!(result, Err(GrammarError::MalformedProduction { .. })), "{}: {:?}", path, result.err());
        }
    }

    #[test]
    fn test_missing_file() {
        assert!(RightLinearGrammar::builder().text_grammar("test-data/grammars/nonexistent.txt").is_err());
    }
}
