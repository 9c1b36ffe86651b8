use clap::Parser;
use std::io::{stdout, BufWriter, Write};
use regconv::backends::interpreter::GrammarInterpreter;

mod common;
use common::GrammarFormat;

/// Print words generated by a right-linear grammar
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(short, long)]
    grammar: String,

    #[arg(long, default_value_t = GrammarFormat::Text)]
    format: GrammarFormat,

    #[arg(short, long)]
    entrypoint: Option<String>,

    #[arg(short = 'n', long, default_value_t = 1)]
    count: usize,

    #[arg(long, short)]
    seed: Option<usize>,

    /// Derivation steps before the generator steers towards termination
    #[arg(long)]
    budget: Option<usize>,
}

fn run(args: Args) -> Result<(), Box<dyn std::error::Error>> {
    let grammar = common::load_grammar(&args.grammar, args.format, args.entrypoint)?;

    let mut stream = BufWriter::new(stdout());
    let mut interpreter = GrammarInterpreter::new(&grammar);

    if let Some(seed) = args.seed {
        interpreter.seed(seed);
    }

    if let Some(budget) = args.budget {
        interpreter.step_budget(budget);
    }

    for _ in 0..args.count {
        interpreter.interpret(&mut stream)?;
        writeln!(&mut stream)?;
    }

    stream.flush()?;
    Ok(())
}

fn main() {
    common::exit_on_error(run(Args::parse()));
}
