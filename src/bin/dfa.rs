use clap::Parser;

mod common;
use common::{Narrator, OutputFormat};
use regconv::{
    automaton::{Acceptor, AutomatonBuilder},
    error::AutomatonError,
};

/// Complement and reverse a DFA and simulate a word on both results
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(long, value_name = "AUTOMATON")]
    input: String,

    /// Where to write the complement
    #[arg(long)]
    complement: String,

    /// Where to write the reverse
    #[arg(long)]
    reverse: String,

    #[arg(long, default_value_t = OutputFormat::Text)]
    emit: OutputFormat,

    #[arg(short, long, default_value_t = false)]
    quiet: bool,

    /// The word to simulate, one symbol per character
    word: String,
}

fn verdict<A: Acceptor>(name: &str, automaton: &A, word: &str) -> &'static str {
    match automaton.accepts(word) {
        Ok(true) => "ACCEPTED",
        Ok(false) => "REJECTED",
        Err(AutomatonError::InvalidSymbol(symbol)) => {
            eprintln!("{}: '{}' is not part of the alphabet", name, symbol);
            "REJECTED"
        },
        Err(e) => {
            eprintln!("{}: {}", name, e);
            "REJECTED"
        },
    }
}

fn run(args: Args) -> Result<(), Box<dyn std::error::Error>> {
    let narrator = Narrator::new(args.quiet);

    let dfa = AutomatonBuilder::from_text_file(&args.input)?.build_dfa()?;
    narrator.section("DFA", &dfa);

    let dfa = dfa.complete();
    narrator.section("Complete DFA", &dfa);

    let complement = dfa.complement()?;
    narrator.section("Complement", &complement);
    common::write_dfa(&args.complement, &complement, args.emit, &format!("Complement of {}", args.input))?;

    let reverse = dfa.reverse();
    narrator.section("Reverse", &reverse);
    common::write_nfa(&args.reverse, &reverse, args.emit, &format!("Reverse of {}", args.input))?;

    println!("Complement: {}", verdict("complement", &complement, &args.word));
    println!("Reverse: {}", verdict("reverse", &reverse, &args.word));

    Ok(())
}

fn main() {
    common::exit_on_error(run(Args::parse()));
}
