use clap::Parser;

use elective::{
    config::Config,
    context::Context,
    structures::{assignment, equation::Equation, scope::Scope},
};

/// Derives a syllogistic conclusion from elective premises.
#[derive(Parser)]
#[command(version, about)]
struct Args {
    /// The symbols in scope, as a string of distinct lowercase letters, first letter most
    /// significant in the enumeration order.
    #[arg(short, long)]
    symbols: String,

    /// A premise in the surface notation `lhs = rhs`; may be given multiple times.
    #[arg(short, long = "premise", required = true)]
    premise: Vec<String>,

    /// A symbol to eliminate from the combined premises; may be given multiple times.
    #[arg(short, long = "eliminate")]
    eliminate: Vec<char>,

    /// Print the forbidden table of the conclusion.
    #[arg(long)]
    table: bool,
}

fn main() {
    env_logger::init();

    let args = Args::parse();

    let mut the_context = Context::from_config(Config::default());

    let scope = match Scope::try_from(args.symbols.as_str()) {
        Ok(scope) => scope,
        Err(e) => {
            println!("c Scope error: {e:?}");
            std::process::exit(1);
        }
    };

    let mut combined: Option<Equation> = None;
    for notation in &args.premise {
        let premise = match the_context.equation(notation, &scope) {
            Ok(premise) => premise,
            Err(e) => {
                println!("c Premise error in {notation:?}: {e:?}");
                std::process::exit(1);
            }
        };
        println!("c Premise: {premise}");

        combined = match combined {
            None => Some(premise),
            Some(so_far) => match the_context.conjoin(so_far, premise) {
                Ok(conjoined) => Some(conjoined),
                Err(e) => {
                    println!("c Conjunction error: {e:?}");
                    std::process::exit(2);
                }
            },
        };
    }

    // At least one premise is required by the argument parser.
    let mut conclusion = match combined {
        Some(equation) => equation,
        None => {
            println!("c No premises given");
            std::process::exit(1);
        }
    };

    for symbol in args.eliminate {
        conclusion = match the_context.eliminate(conclusion, symbol) {
            Ok(narrowed) => narrowed,
            Err(e) => {
                println!("c Elimination error for {symbol:?}: {e:?}");
                std::process::exit(2);
            }
        };
    }

    println!("s {conclusion}");

    if args.table {
        println!("c Scope: {}", conclusion.scope());
        let width = conclusion.scope().len();
        for (index, forbidden) in conclusion.table().iter().enumerate() {
            let bits = assignment::from_index(index, width)
                .iter()
                .map(|value| if *value { '1' } else { '0' })
                .collect::<String>();
            println!("c {bits} {}", u8::from(*forbidden));
        }
    }
}
