use clap::Parser;

mod common;
use common::{GrammarFormat, OutputFormat, Narrator};

/// Translate a right-linear grammar into a finite automaton
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(long, value_name = "GRAMMAR")]
    grammar: String,

    #[arg(long)]
    output: String,

    #[arg(long, default_value_t = GrammarFormat::Text)]
    format: GrammarFormat,

    #[arg(long, default_value_t = OutputFormat::Text)]
    emit: OutputFormat,

    #[arg(short, long)]
    entrypoint: Option<String>,

    /// Make `A -> ε` final instead of emitting ε-moves
    #[arg(long, default_value_t = false)]
    epsilon_free: bool,

    #[arg(short, long, default_value_t = false)]
    quiet: bool,
}

fn run(args: Args) -> Result<(), Box<dyn std::error::Error>> {
    let narrator = Narrator::new(args.quiet);

    let grammar = common::load_grammar(&args.grammar, args.format, args.entrypoint)?;
    narrator.section("Grammar", &grammar);

    let nfa = if args.epsilon_free {
        grammar.to_epsilon_free_nfa()?
    } else {
        grammar.to_nfa()?
    };
    narrator.section("NFA", &nfa);

    common::write_nfa(&args.output, &nfa, args.emit, &format!("NFA of {}", args.grammar))?;
    narrator.say(format!("Wrote {}", args.output));

    Ok(())
}

fn main() {
    common::exit_on_error(run(Args::parse()));
}
