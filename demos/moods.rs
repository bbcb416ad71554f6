//! A few syllogistic moods, and one pair of premises which supports no conclusion.

use elective::{
    config::Config,
    context::Context,
    structures::{equation::Equation, scope::Scope},
};

fn main() {
    let moods: [(&str, &[&str], &str); 3] = [
        ("Barbara", &["y = xy", "z = yz"], "all Zs are Xs"),
        ("Celarent", &["xy = 0", "z = yz"], "no Z is X"),
        ("(no conclusion)", &["y = xy", "yz = 0"], "nothing follows about X and Z"),
    ];

    let mut the_context = Context::from_config(Config::default());
    let scope = Scope::try_from("xyz").unwrap();

    for (name, premises, reading) in moods {
        println!("{name}:");

        let mut combined: Option<Equation> = None;
        for notation in premises {
            let premise = the_context.equation(notation, &scope).unwrap();
            println!("  {notation:10} normalizes to {premise}");

            combined = match combined {
                None => Some(premise),
                Some(so_far) => Some(the_context.conjoin(so_far, premise).unwrap()),
            };
        }

        let conclusion = the_context.eliminate(combined.unwrap(), 'y').unwrap();
        println!("  eliminating y: {conclusion} --- {reading}");
        println!();
    }
}
