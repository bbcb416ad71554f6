/*!
Miscelanous items related to [logging](log).

Calls to the log macro are made throughout the library.
These are intended to provide useful information for extending the library and/or fixing issues.

Note, no log implementation is provided.
For more details, see [log].
*/

/// Targets to be used within a [log]! macro.
pub mod targets {
    /// Logs related to [the parser](crate::builder)
    pub const PARSER: &str = "parser";

    /// Logs related to [normalization](crate::procedures::normalize)
    pub const NORMALIZATION: &str = "normalization";

    /// Logs related to [conjunction](crate::procedures::conjoin)
    pub const CONJUNCTION: &str = "conjunction";

    /// Logs related to [elimination](crate::procedures::eliminate)
    pub const ELIMINATION: &str = "elimination";
}
