//! The operations of the calculus, as methods on a context.
//!
//! - [normalize](crate::procedures::normalize) casts an equation between two expressions into
//!   its canonical forbidden table.
//! - [conjoin](crate::procedures::conjoin) merges two equations over a common scope into the
//!   equation asserting both.
//! - [eliminate](crate::procedures::eliminate) projects a symbol out of an equation's scope.
//!
//! For the most part these are methods accessed via a context, and primarily placed here for
//! documentation.

pub mod conjoin;
pub mod eliminate;
pub mod normalize;
