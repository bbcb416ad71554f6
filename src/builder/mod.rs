//! Tools for building expressions and equations from the surface notation.
//!
//! Expressions are parsed by [notation], either through [FromStr] on
//! [Expression](crate::structures::expression::Expression) or through a context.
//! A context additionally accepts the surface form of a whole equation, `lhs = rhs`, and
//! normalizes it in one step:
//!
//! ```rust
//! # use elective::config::Config;
//! # use elective::context::Context;
//! # use elective::structures::scope::Scope;
//! let mut the_context = Context::from_config(Config::default());
//! let scope = Scope::try_from("xy").unwrap();
//!
//! let all_y_are_x = the_context.equation("y = xy", &scope).unwrap();
//!
//! assert_eq!(all_y_are_x.to_string(), "(1-x)y = 0");
//! ```

pub mod notation;

use crate::{
    context::Context,
    structures::{equation::Equation, expression::Expression, scope::Scope},
    types::err::{self, ErrorKind},
};

impl Context {
    /// The expression written in the given notation.
    pub fn expression(&self, notation: &str) -> Result<Expression, ErrorKind> {
        let expression = notation::parse(notation)?;
        Ok(expression)
    }

    /// The normalized equation written in the given notation over the given scope.
    ///
    /// The notation is the surface form `lhs = rhs` --- two expressions joined by a single
    /// `=`, with any whitespace around either side ignored.
    pub fn equation(&mut self, notation: &str, scope: &Scope) -> Result<Equation, ErrorKind> {
        let mut sides = notation.split('=');

        let (lhs, rhs) = match (sides.next(), sides.next(), sides.next()) {
            (Some(lhs), Some(rhs), None) => (lhs.trim(), rhs.trim()),
            _ => return Err(ErrorKind::from(err::ParseError::Relation)),
        };

        let lhs = notation::parse(lhs)?;
        let rhs = notation::parse(rhs)?;

        self.normalize(&lhs, &rhs, scope.clone())
    }
}
