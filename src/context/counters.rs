/// Counts for various things which count, roughly.
#[derive(Clone, Debug, Default)]
pub struct Counters {
    /// A count of every normalization performed through the context.
    pub normalizations: usize,

    /// A count of every conjunction performed through the context.
    pub conjunctions: usize,

    /// A count of every elimination performed through the context.
    pub eliminations: usize,
}
