use std::fs::File;
use std::io::stdout;
use std::process::ExitCode;

use clap::Parser;
use clap::Subcommand;
use log::info;
use rand::SeedableRng;
use rand::rngs::StdRng;

use fsa_automata::Symbol;
use fsa_automata::delimited_word;
use fsa_automata::determinize;
use fsa_automata::word;
use fsa_automata::write_dot;
use fsa_grammar::generate_words;
use fsa_grammar::to_grammar;
use fsa_utilities::FsaError;
use fsa_utilities::verbosity::VerbosityFlag;

mod builtin;

use builtin::BuiltinAutomaton;

#[derive(clap::Parser, Debug)]
#[command(name = "fsa", about = "A command line tool for finite automata and regular grammars")]
struct Cli {
    #[command(flatten)]
    verbosity: VerbosityFlag,

    #[command(subcommand)]
    commands: Option<Commands>,
}

/// Defines the subcommands for this tool.
#[derive(Debug, Subcommand)]
enum Commands {
    Info(InfoArgs),
    Determinize(DeterminizeArgs),
    Dot(DotArgs),
    Accepts(AcceptsArgs),
    Grammar(GrammarArgs),
}

#[derive(clap::Args, Debug)]
#[command(about = "Prints information related to the given automaton")]
struct InfoArgs {
    automaton: BuiltinAutomaton,
}

#[derive(clap::Args, Debug)]
#[command(about = "Prints the deterministic automaton obtained by the subset construction")]
struct DeterminizeArgs {
    automaton: BuiltinAutomaton,
}

#[derive(clap::Args, Debug)]
#[command(about = "Writes the automaton in the Graphviz dot format")]
struct DotArgs {
    automaton: BuiltinAutomaton,

    /// The output file, the dot text is written to stdout when omitted.
    output: Option<String>,

    #[arg(long, help = "Apply the subset construction first")]
    determinize: bool,
}

#[derive(clap::Args, Debug)]
#[command(about = "Decides for every given word whether the automaton accepts it")]
struct AcceptsArgs {
    automaton: BuiltinAutomaton,

    words: Vec<String>,

    #[arg(
        long,
        help = "Separates the symbols of a word, by default every character is a symbol"
    )]
    delimiter: Option<char>,
}

#[derive(clap::Args, Debug)]
#[command(about = "Converts the automaton into a right-linear grammar and derives random words")]
struct GrammarArgs {
    automaton: BuiltinAutomaton,

    #[arg(short = 'n', long, default_value_t = 5, help = "The number of words to derive")]
    count: usize,

    #[arg(long, help = "The seed of the random derivations, chosen randomly when omitted")]
    seed: Option<u64>,

    #[arg(long, default_value_t = 1000, help = "The maximum number of steps of a single derivation")]
    max_steps: usize,
}

fn main() -> Result<ExitCode, FsaError> {
    let cli = Cli::parse();

    env_logger::Builder::new()
        .filter_level(cli.verbosity.log_level_filter())
        .parse_default_env()
        .init();

    if let Some(command) = cli.commands {
        match command {
            Commands::Info(args) => {
                let automaton = args.automaton.automaton();
                let grammar = to_grammar(&automaton);

                println!("{automaton}");
                println!("Grammar: {}", grammar.classify());
            }
            Commands::Determinize(args) => {
                let automaton = args.automaton.automaton();
                info!("Applying the subset construction to {} states", automaton.num_of_states());

                println!("{:?}", determinize(&automaton));
            }
            Commands::Dot(args) => {
                let mut automaton = args.automaton.automaton();
                if args.determinize {
                    automaton = determinize(&automaton);
                }

                if let Some(file) = args.output {
                    info!("Writing dot output to {file}");
                    write_dot(&mut File::create(file)?, &automaton)?;
                } else {
                    write_dot(&mut stdout(), &automaton)?;
                }
            }
            Commands::Accepts(args) => {
                let automaton = args.automaton.automaton();

                let mut all_accepted = true;
                for input in &args.words {
                    let symbols: Vec<Symbol> = match args.delimiter {
                        Some(delimiter) => delimited_word(input, delimiter),
                        None => word(input),
                    };

                    let accepted = automaton.accepts(&symbols);
                    all_accepted &= accepted;
                    println!("{input}: {}", if accepted { "accepted" } else { "rejected" });
                }

                if !all_accepted {
                    return Ok(ExitCode::FAILURE);
                }
            }
            Commands::Grammar(args) => {
                let automaton = determinize(&args.automaton.automaton());
                let grammar = to_grammar(&automaton);

                println!("{grammar}");
                println!("{}", grammar.classify());

                let seed = args.seed.unwrap_or_else(rand::random);
                info!("Deriving words with seed {seed}");
                let mut rng = StdRng::seed_from_u64(seed);

                for (index, result) in generate_words(&grammar, &mut rng, args.max_steps)
                    .take(args.count)
                    .enumerate()
                {
                    match result {
                        Ok(derived) => {
                            let text: String = derived.iter().map(Symbol::as_str).collect();
                            let verdict = if automaton.accepts(&derived) { "accepted" } else { "rejected" };
                            println!("Generated string {}: {text} ({verdict})", index + 1);
                        }
                        Err(error) => println!("Generated string {}: {error}", index + 1),
                    }
                }
            }
        }
    }

    Ok(ExitCode::SUCCESS)
}
