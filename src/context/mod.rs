/*!
The context --- through which expressions are read and equations are made and combined.

A context is built from a configuration and holds counters for the operations performed
through it.
No equation state is kept: equations flow through a context by value, with each operation
consuming its inputs and returning a fresh equation.

# Example
```rust
# use elective::config::Config;
# use elective::context::Context;
# use elective::structures::scope::Scope;
let mut the_context = Context::from_config(Config::default());
let scope = Scope::try_from("xyz").unwrap();

let all_y_are_x = the_context.equation("y = xy", &scope).unwrap();
let all_z_are_y = the_context.equation("z = yz", &scope).unwrap();

let premises = the_context.conjoin(all_y_are_x, all_z_are_y).unwrap();
let conclusion = the_context.eliminate(premises, 'y').unwrap();

assert_eq!(conclusion.to_string(), "(1-x)z = 0");
assert_eq!(the_context.counters.eliminations, 1);
```
*/

mod counters;
pub use counters::Counters;

use crate::config::Config;

/// The context for a sequence of operations: a configuration and counters.
pub struct Context {
    /// The configuration of the context.
    pub config: Config,

    /// Counters for the operations performed through the context.
    pub counters: Counters,
}

impl Context {
    /// A context with the given configuration.
    pub fn from_config(config: Config) -> Self {
        Context {
            config,
            counters: Counters::default(),
        }
    }
}
