//! A library for deriving syllogistic conclusions from propositional premises encoded as
//! boolean-valued (elective) equations.
//!
//! elective implements the algebra of Boole's *Mathematical Analysis of Logic*: a premise such
//! as "All Ys are Xs" is written as an equation between elective functions (`y = xy`), any
//! such equation is normalized to a complete table of the assignments it forbids, and
//! syllogistic conclusions fall out of two operations on that form --- conjunction of the
//! premises and elimination of the middle term.
//!
//! The engine is deliberately small and purely functional: every operation is a deterministic
//! function of its inputs, and rendered output is exact text, suitable for literal
//! string-equality testing.
//!
//! # Orientation
//!
//! The library is designed around a [context] through which operations are made.
//!
//! - Expressions are written in a minimal notation --- lowercase letters for symbols, `0` and
//!   `1` for constants, `(1-…)` for negation, juxtaposition for product --- and read through
//!   the [builder].
//! - A [scope](structures::scope) lists the symbols an equation is taken over; scopes are
//!   always explicit, never inferred.
//! - [Normalization](procedures::normalize) enumerates every assignment over the scope and
//!   records the forbidden ones in an [equation](structures::equation).
//! - [Conjunction](procedures::conjoin) unions the forbidden tables of two equations, and
//!   [elimination](procedures::eliminate) projects a symbol out by universal quantification.
//!
//! Useful starting points, then, may be:
//! - The [procedures] to inspect the three operations of the calculus.
//! - The [structures] to familiarise yourself with the elements they operate on.
//! - The [configuration](config) for the limit on scope width.
//!
//! # Examples
//!
//! + The Barbara syllogism: all Ys are Xs and all Zs are Ys, so all Zs are Xs.
//!
//! ```rust
//! # use elective::config::Config;
//! # use elective::context::Context;
//! # use elective::structures::scope::Scope;
//! let mut the_context = Context::from_config(Config::default());
//! let scope = Scope::try_from("xyz").unwrap();
//!
//! let all_y_are_x = the_context.equation("y = xy", &scope).unwrap();
//! let all_z_are_y = the_context.equation("z = yz", &scope).unwrap();
//!
//! let premises = the_context.conjoin(all_y_are_x, all_z_are_y).unwrap();
//! let conclusion = the_context.eliminate(premises, 'y').unwrap();
//!
//! assert_eq!(conclusion.to_string(), "(1-x)z = 0");
//! ```
//!
//! + Premises which support no conclusion leave the vacuous equation.
//!
//! ```rust
//! # use elective::config::Config;
//! # use elective::context::Context;
//! # use elective::structures::scope::Scope;
//! let mut the_context = Context::from_config(Config::default());
//! let scope = Scope::try_from("xyz").unwrap();
//!
//! let all_y_are_x = the_context.equation("y = xy", &scope).unwrap();
//! let no_y_is_z = the_context.equation("yz = 0", &scope).unwrap();
//!
//! let premises = the_context.conjoin(all_y_are_x, no_y_is_z).unwrap();
//! let conclusion = the_context.eliminate(premises, 'y').unwrap();
//!
//! assert!(conclusion.is_vacuous());
//! assert_eq!(conclusion.to_string(), "0 = 0");
//! ```
//!
//! # Logs
//!
//! To help diagnose issues (somewhat) detailed calls to [log!](log) are made, and a variety of
//! targets are defined in order to help narrow output to relevant parts of the library.
//! No log implementation is provided; the targets are listed in [misc::log].
//!
//! For example, when used with [env_logger](https://docs.rs/env_logger/latest/env_logger/),
//! logs related to [normalization](procedures::normalize) can be filtered with
//! `RUST_LOG=normalization …`.

pub mod builder;
pub mod procedures;

pub mod config;
pub mod context;
pub mod structures;
pub mod types;

pub mod misc;
