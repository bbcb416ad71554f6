/*!
Configuration of a context.

All configuration for a context is contained within [Config], and read wherever an operation
consults a limit.
*/

mod config_option;
pub use config_option::ConfigOption;

/// The widest scope any configuration permits.
///
/// Enumeration doubles with each symbol, and a table over 2^24 assignments is the practical
/// ceiling before normalization time and memory are unreasonable.
pub const SYMBOL_LIMIT_MAX: usize = 24;

/// The primary configuration structure.
#[derive(Clone)]
pub struct Config {
    /// The maximum number of symbols a normalization scope may contain.
    ///
    /// [Normalization](crate::procedures::normalize) fails fast with a
    /// [ScopeError](crate::types::err::ScopeError) when the requested scope is wider, rather
    /// than attempting to enumerate an impractical number of assignments.
    pub symbol_limit: ConfigOption<usize>,
}

impl Default for Config {
    /// The default configuration permits scopes well beyond syllogistic use, where three or
    /// four symbols are typical.
    fn default() -> Self {
        Config {
            symbol_limit: ConfigOption {
                name: "symbol_limit",
                min: 0,
                max: SYMBOL_LIMIT_MAX,
                value: 16,
            },
        }
    }
}
