//! Projects a symbol out of an equation's scope, by universal quantification.
//!
//! # Overview
//!
//! Eliminating a symbol asks what an equation claims about the *other* symbols, whatever value
//! the eliminated symbol takes.
//! Each assignment over the narrowed scope has two completions, one for each value of the
//! eliminated symbol, and the narrowed assignment is forbidden exactly when *both* completions
//! are forbidden --- an assignment is ruled out only if no value of the eliminated symbol
//! rescues it.
//!
//! This is universal quantification over the removed symbol: `∀s. f = f[s←0] ∧ f[s←1]`, read
//! on the allowed (rather than forbidden) side of the table.
//!
//! In syllogistic use the eliminated symbol is the middle term --- the class the two premises
//! share, and the conclusion does not mention.

use crate::{
    context::Context,
    misc::log::targets::{self},
    structures::{assignment::{self, Assignment}, equation::Equation, symbol::Symbol},
    types::err::{self, ErrorKind},
};

impl Context {
    /// The equation with the given symbol projected out of the given equation's scope.
    ///
    /// The result is over the remaining symbols, order preserved, with a freshly complete
    /// table: an assignment is forbidden exactly when both of its completions through the
    /// eliminated symbol were.
    ///
    /// ```rust
    /// # use elective::config::Config;
    /// # use elective::context::Context;
    /// # use elective::structures::scope::Scope;
    /// let mut the_context = Context::from_config(Config::default());
    /// let scope = Scope::try_from("xyz").unwrap();
    ///
    /// let all_y_are_x = the_context.equation("y = xy", &scope).unwrap();
    /// let all_z_are_y = the_context.equation("z = yz", &scope).unwrap();
    ///
    /// let premises = the_context.conjoin(all_y_are_x, all_z_are_y).unwrap();
    /// let conclusion = the_context.eliminate(premises, 'y').unwrap();
    ///
    /// assert_eq!(conclusion.scope().to_string(), "xz");
    /// assert_eq!(conclusion.to_string(), "(1-x)z = 0");
    /// ```
    pub fn eliminate(
        &mut self,
        equation: Equation,
        symbol: Symbol,
    ) -> Result<Equation, ErrorKind> {
        let position = match equation.scope().position(symbol) {
            Some(position) => position,
            None => return Err(ErrorKind::from(err::EliminateError::UnknownSymbol(symbol))),
        };

        let narrowed = equation.scope().len() - 1;
        let mut forbidden = Vec::with_capacity(1_usize << narrowed);

        for index in 0..1_usize << narrowed {
            let partial = assignment::from_index(index, narrowed);

            let with_zero = assignment::completion(&partial, position, false);
            let with_one = assignment::completion(&partial, position, true);

            forbidden.push(
                equation.forbids_index(with_zero.as_index())
                    && equation.forbids_index(with_one.as_index()),
            );
        }

        let scope = equation.into_scope().without(position);
        let narrowed_equation = Equation::new(scope, forbidden);
        log::debug!(
            target: targets::ELIMINATION,
            "Eliminated {symbol}: {} of {} assignments forbidden over {}",
            narrowed_equation.forbidden_count(),
            narrowed_equation.table().len(),
            narrowed_equation.scope()
        );
        self.counters.eliminations += 1;

        Ok(narrowed_equation)
    }
}
