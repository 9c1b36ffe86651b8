use std::path::Path;
use json_comments::{CommentSettings, StripComments};
use serde_json as json;

use crate::{
    automaton::EPSILON,
    grammar::{GrammarSymbol, NonTerminal, ProductionRule, Terminal},
    error::ParsingError,
    parser::read_file,
};

fn parse_non_terminal(keyword: &str) -> Option<&str> {
    if keyword.len() > 2 && keyword.starts_with('<') && keyword.ends_with('>') {
        Some(&keyword[1..keyword.len() - 1])
    } else {
        None
    }
}

fn parse_terminal(keyword: &str) -> &str {
    if keyword.len() >= 2 && keyword.starts_with('\'') && keyword.ends_with('\'') {
        &keyword[1..keyword.len() - 1]
    } else {
        keyword
    }
}

fn parse_grammar(value: json::Value) -> Result<Vec<ProductionRule>, String> {
    let mut rules = Vec::new();

    let object = match value {
        json::Value::Object(object) => object,
        _ => return Err("Grammar must be specified as an object".to_string()),
    };

    for (key, value) in &object {
        let lhs = match parse_non_terminal(key) {
            Some(lhs) => lhs,
            None => return Err(format!("'{}' is not a valid non-terminal", key)),
        };

        let alternatives = match value {
            json::Value::Array(alternatives) => alternatives,
            _ => return Err(format!("Right-hand-side of '{}' must be an array", key)),
        };

        if alternatives.is_empty() {
            return Err(format!("Invalid production rule '{}': Must not be empty", key));
        }

        for alternative in alternatives {
            let tokens = match alternative {
                json::Value::Array(tokens) => tokens,
                _ => return Err(format!("Right-hand-side of '{}' must be an array of arrays", key)),
            };

            let mut symbols = Vec::new();

            for token in tokens {
                let token = match token.as_str() {
                    Some(token) => token,
                    _ => return Err(format!("Right-hand-side of '{}' must be an array of arrays of strings", key)),
                };

                if token == EPSILON {
                    continue;
                }

                if let Some(nonterm) = parse_non_terminal(token) {
                    symbols.push(GrammarSymbol::NonTerminal(NonTerminal::new(nonterm)));
                } else {
                    symbols.push(GrammarSymbol::Terminal(Terminal::new(parse_terminal(token))));
                }
            }

            rules.push(ProductionRule::new(NonTerminal::new(lhs), symbols));
        }
    }

    Ok(rules)
}

pub(crate) fn parse_json_str(source: &str) -> Result<Vec<ProductionRule>, String> {
    let reader = StripComments::with_settings(CommentSettings::c_style(), source.as_bytes());

    let value: json::Value = match json::from_reader(reader) {
        Ok(value) => value,
        Err(e) => return Err(format!("Invalid JSON syntax: {}", e)),
    };

    parse_grammar(value)
}

pub(crate) fn parse_json(path: &Path) -> Result<Vec<ProductionRule>, ParsingError> {
    let source = read_file(path)?;
    parse_json_str(&source).map_err(|e| ParsingError::new(path, e))
}
