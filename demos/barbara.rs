//! The Barbara syllogism, end to end.
//!
//! All Ys are Xs, and all Zs are Ys, so all Zs are Xs.

use elective::{config::Config, context::Context, structures::scope::Scope};

fn main() {
    let mut the_context = Context::from_config(Config::default());
    let scope = Scope::try_from("xyz").unwrap();

    println!("All Ys are Xs:  y = xy");
    println!("All Zs are Ys:  z = yz");
    println!();

    let all_y_are_x = the_context.equation("y = xy", &scope).unwrap();
    let all_z_are_y = the_context.equation("z = yz", &scope).unwrap();

    println!("Normalized over {scope}:");
    println!("  {all_y_are_x}");
    println!("  {all_z_are_y}");

    let premises = the_context.conjoin(all_y_are_x, all_z_are_y).unwrap();
    println!("Conjoined:");
    println!("  {premises}");

    let conclusion = the_context.eliminate(premises, 'y').unwrap();
    println!("With the middle term y eliminated:");
    println!("  {conclusion}");
    println!();
    println!("That is: all Zs are Xs.");
}
