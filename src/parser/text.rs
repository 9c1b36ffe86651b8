use std::collections::BTreeSet;
use std::path::Path;

use crate::{
    automaton::EPSILON,
    error::ParsingError,
    grammar::{GrammarSymbol, NonTerminal, ProductionRule, Terminal},
    parser::{read_file, split_top_level},
};

/// A grammar in text notation:
/// ```text
/// # Gramática: G = ({D, A}, {a, b}, P, D)
/// D -> aA | ε
/// A -> bD
/// ```
pub(crate) struct TextGrammar {
    pub(crate) nonterminals: BTreeSet<NonTerminal>,
    pub(crate) terminals: BTreeSet<Terminal>,
    pub(crate) entrypoint: NonTerminal,
    pub(crate) rules: Vec<ProductionRule>,
}

fn brace_list(part: &str) -> Option<Vec<&str>> {
    let inner = part.strip_prefix('{')?.strip_suffix('}')?;
    Some(inner.split(',').map(str::trim).filter(|s| !s.is_empty()).collect())
}

fn parse_header(line: &str) -> Result<(BTreeSet<NonTerminal>, BTreeSet<Terminal>, NonTerminal), String> {
    let err = || format!("Unexpected grammar header: '{}'. Use: Gramática: G = ({{non-terminals}}, {{terminals}}, P, start)", line);

    let (open, close) = match (line.find('('), line.rfind(')')) {
        (Some(open), Some(close)) if open < close && line[..open].contains('=') => (open, close),
        _ => return Err(err()),
    };

    let parts = split_top_level(&line[open + 1..close]);

    let [nonterms, terms, _, start] = parts.as_slice() else {
        return Err(err());
    };

    let nonterms = brace_list(nonterms).ok_or_else(err)?;
    let terms = brace_list(terms).ok_or_else(err)?;

    Ok((
        nonterms.into_iter().map(NonTerminal::new).collect(),
        terms.into_iter().filter(|t| *t != EPSILON).map(Terminal::new).collect(),
        NonTerminal::new(*start),
    ))
}

fn classify(token: &str, nonterminals: &BTreeSet<NonTerminal>) -> GrammarSymbol {
    let nonterm = NonTerminal::new(token);

    if nonterminals.contains(&nonterm) {
        GrammarSymbol::NonTerminal(nonterm)
    } else {
        GrammarSymbol::Terminal(Terminal::new(token))
    }
}

/// Split one alternative into symbols.
///
/// Whitespace separates symbols if present. Otherwise the declared sets decide
/// how `aB` is split, with one character per symbol as the fallback.
fn parse_alternative(alt: &str, nonterminals: &BTreeSet<NonTerminal>, terminals: &BTreeSet<Terminal>) -> Vec<GrammarSymbol> {
    if alt == EPSILON {
        return Vec::new();
    }

    let tokens: Vec<&str> = alt.split_whitespace().collect();

    if tokens.len() > 1 {
        return tokens.into_iter().map(|token| classify(token, nonterminals)).collect();
    }

    if terminals.contains(&Terminal::new(alt)) || nonterminals.contains(&NonTerminal::new(alt)) {
        return vec![classify(alt, nonterminals)];
    }

    for (i, _) in alt.char_indices().skip(1) {
        let (term, nonterm) = alt.split_at(i);

        if terminals.contains(&Terminal::new(term)) && nonterminals.contains(&NonTerminal::new(nonterm)) {
            return vec![
                GrammarSymbol::Terminal(Terminal::new(term)),
                GrammarSymbol::NonTerminal(NonTerminal::new(nonterm)),
            ];
        }
    }

    let chars: Vec<String> = alt.chars().map(String::from).collect();

    match chars.as_slice() {
        [term] => vec![GrammarSymbol::Terminal(Terminal::new(term.as_str()))],
        // Anything but a declared terminal in second position is a non-terminal
        [first, second] if !terminals.contains(&Terminal::new(second.as_str())) => vec![
            classify(first, nonterminals),
            GrammarSymbol::NonTerminal(NonTerminal::new(second.as_str())),
        ],
        _ => chars.iter().map(|c| classify(c, nonterminals)).collect(),
    }
}

pub(crate) fn parse_grammar(source: &str) -> Result<TextGrammar, String> {
    let mut lines = source.lines().map(str::trim).filter(|line| !line.is_empty());

    let header = match lines.next() {
        Some(header) => header.trim_start_matches('#').trim(),
        None => return Err("Grammar is empty".to_string()),
    };

    let (nonterminals, terminals, entrypoint) = parse_header(header)?;
    let mut rules = Vec::new();

    for line in lines.filter(|line| !line.starts_with('#')) {
        let (lhs, rhs) = match line.split_once("->").or_else(|| line.split_once('→')) {
            Some(split) => split,
            None => return Err(format!("'{}' is not a production", line)),
        };

        let lhs = lhs.trim();

        if lhs.is_empty() {
            return Err(format!("Production '{}' has no left-hand side", line));
        }

        for alt in rhs.split('|').map(str::trim).filter(|alt| !alt.is_empty()) {
            rules.push(ProductionRule::new(
                NonTerminal::new(lhs),
                parse_alternative(alt, &nonterminals, &terminals),
            ));
        }
    }

    Ok(TextGrammar {
        nonterminals,
        terminals,
        entrypoint,
        rules,
    })
}

pub(crate) fn parse_file(path: &Path) -> Result<TextGrammar, ParsingError> {
    let source = read_file(path)?;
    parse_grammar(&source).map_err(|e| ParsingError::new(path, e))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn t(s: &str) -> GrammarSymbol {
        GrammarSymbol::Terminal(Terminal::new(s))
    }

    fn n(s: &str) -> GrammarSymbol {
        GrammarSymbol::NonTerminal(NonTerminal::new(s))
    }

    #[test]
    fn test_parse_grammar() {
        let grammar = parse_grammar(
            "# Gramática: G = ({D, A}, {a, b}, P, D)\n\nD -> aA | ε\n# comment\nA -> bD\n",
        )
        .unwrap();

        assert_eq!(grammar.entrypoint, NonTerminal::new("D"));
        assert_eq!(grammar.nonterminals.len(), 2);
        assert_eq!(grammar.terminals.len(), 2);
        assert_eq!(grammar.rules.len(), 3);
        assert_eq!(grammar.rules[0].rhs(), &[t("a"), n("A")]);
        assert!(grammar.rules[1].rhs().is_empty());
        assert_eq!(grammar.rules[2].lhs(), &NonTerminal::new("A"));
    }

    #[test]
    fn test_alternatives() {
        let nonterms: BTreeSet<NonTerminal> = ["S", "Rest"].into_iter().map(NonTerminal::new).collect();
        let terms: BTreeSet<Terminal> = ["a", "if"].into_iter().map(Terminal::new).collect();

        assert_eq!(parse_alternative("ifRest", &nonterms, &terms), vec![t("if"), n("Rest")]);
        assert_eq!(parse_alternative("a Rest", &nonterms, &terms), vec![t("a"), n("Rest")]);
        assert_eq!(parse_alternative("if", &nonterms, &terms), vec![t("if")]);
        assert_eq!(parse_alternative("S", &nonterms, &terms), vec![n("S")]);
        assert_eq!(parse_alternative("xY", &nonterms, &terms), vec![t("x"), n("Y")]);
        assert_eq!(parse_alternative("aSS", &nonterms, &terms), vec![t("a"), n("S"), n("S")]);
    }

    #[test]
    fn test_two_character_shapes() {
        let nonterms: BTreeSet<NonTerminal> = ["S", "A", "B"].into_iter().map(NonTerminal::new).collect();
        let terms: BTreeSet<Terminal> = ["a"].into_iter().map(Terminal::new).collect();

        assert_eq!(parse_alternative("AB", &nonterms, &terms), vec![n("A"), n("B")]);
        assert_eq!(parse_alternative("Ba", &nonterms, &terms), vec![n("B"), t("a")]);
        assert_eq!(parse_alternative("aa", &nonterms, &terms), vec![t("a"), t("a")]);
        assert_eq!(parse_alternative("aB", &nonterms, &terms), vec![t("a"), n("B")]);
    }

    #[test]
    fn test_bad_header() {
        assert!(parse_grammar("D -> aA").is_err());
        assert!(parse_grammar("G = (D, {a}, P, D)").is_err());
        assert!(parse_grammar("").is_err());
        assert!(parse_grammar("Grammar: G = ({S}, {a}, P, S)\nS a").is_err());
    }
}
