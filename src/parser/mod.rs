pub(crate) mod automaton;
pub(crate) mod json;
pub(crate) mod text;

use std::fs;
use std::path::Path;

use crate::error::ParsingError;

pub(crate) fn read_file(path: &Path) -> Result<String, ParsingError> {
    fs::read_to_string(path).map_err(|e| ParsingError::new(path, format!("Could not read file: {}", e)))
}

/// Split `s` at commas that are not enclosed in braces.
pub(crate) fn split_top_level(s: &str) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut depth = 0usize;
    let mut start = 0;

    for (i, c) in s.char_indices() {
        match c {
            '{' => depth += 1,
            '}' => depth = depth.saturating_sub(1),
            ',' if depth == 0 => {
                parts.push(s[start..i].trim());
                start = i + 1;
            },
            _ => {},
        }
    }

    parts.push(s[start..].trim());
    parts.retain(|part| !part.is_empty());
    parts
}
