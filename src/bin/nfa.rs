use clap::Parser;

mod common;
use common::{Narrator, OutputFormat};
use regconv::automaton::AutomatonBuilder;

/// Remove the ε-moves of an NFA and determinize it
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(long, value_name = "AUTOMATON")]
    input: String,

    #[arg(long)]
    output: String,

    #[arg(long, default_value_t = OutputFormat::Text)]
    emit: OutputFormat,

    #[arg(short, long, default_value_t = false)]
    quiet: bool,
}

fn run(args: Args) -> Result<(), Box<dyn std::error::Error>> {
    let narrator = Narrator::new(args.quiet);

    let nfa = AutomatonBuilder::from_text_file(&args.input)?.build_nfa()?;
    narrator.section("ε-NFA", &nfa);
    narrator.section("ε-closures", nfa.closures());

    let epsilon_free = nfa.eliminate_epsilon();
    narrator.section("NFA without ε-moves", &epsilon_free);

    let dfa = epsilon_free.determinize()?;
    narrator.section("DFA", &dfa);

    common::write_dfa(&args.output, &dfa, args.emit, &format!("DFA of {}", args.input))?;
    narrator.say(format!("Wrote {}", args.output));

    Ok(())
}

fn main() {
    common::exit_on_error(run(Args::parse()));
}
