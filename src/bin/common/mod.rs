#![allow(dead_code)]

use std::fmt::Display;
use std::path::Path;

use regconv::{
    automaton::{Dfa, Nfa},
    backends::{json::JsonGenerator, text::TextGenerator},
    error::Error,
    grammar::RightLinearGrammar,
};

#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, clap::ValueEnum)]
pub enum GrammarFormat {
    Text,
    Json,
}

impl std::fmt::Display for GrammarFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GrammarFormat::Text => write!(f, "text"),
            GrammarFormat::Json => write!(f, "json"),
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

pub fn load_grammar(path: &str, format: GrammarFormat, entrypoint: Option<String>) -> Result<RightLinearGrammar, Error> {
    let mut builder = RightLinearGrammar::builder();

    match format {
        GrammarFormat::Text => builder = builder.text_grammar(path)?,
        GrammarFormat::Json => builder = builder.json_grammar(path)?,
    }

    if let Some(entrypoint) = entrypoint {
        builder = builder.entrypoint(entrypoint);
    }

    Ok(builder.build()?)
}

pub fn write_nfa<P: AsRef<Path>>(path: P, nfa: &Nfa, format: OutputFormat, title: &str) -> std::io::Result<()> {
    match format {
        OutputFormat::Text => TextGenerator::new().title(title).generate_nfa(path, nfa),
        OutputFormat::Json => JsonGenerator::new().generate_nfa(path, nfa),
    }
}

pub fn write_dfa<P: AsRef<Path>>(path: P, dfa: &Dfa, format: OutputFormat, title: &str) -> std::io::Result<()> {
    match format {
        OutputFormat::Text => TextGenerator::new().title(title).generate_dfa(path, dfa),
        OutputFormat::Json => JsonGenerator::new().generate_dfa(path, dfa),
    }
}

/// Prints the intermediate results unless `--quiet` was given.
pub struct Narrator {
    quiet: bool,
}

impl Narrator {
    pub fn new(quiet: bool) -> Self {
        Self {
            quiet,
        }
    }

    pub fn section<T: Display>(&self, title: &str, content: T) {
        if !self.quiet {
            println!("== {} ==", title);
            println!("{}", content);
        }
    }

    pub fn say<T: Display>(&self, line: T) {
        if !self.quiet {
            println!("{}", line);
        }
    }
}

pub fn exit_on_error<E: Display>(result: Result<(), E>) {
    if let Err(e) = result {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}
