//! Merges two equations over a common scope into the equation asserting both.
//!
//! An assignment violates "both premises hold" exactly when it violates either premise, so the
//! forbidden table of the conjunction is the pointwise OR of the forbidden tables --- the union
//! of the excluded cases.
//!
//! Conjunction is commutative, associative, and idempotent, and monotonic: no assignment
//! forbidden by either input is un-forbidden by the result.

use crate::{
    context::Context,
    misc::log::targets::{self},
    structures::equation::Equation,
    types::err::{self, ErrorKind},
};

impl Context {
    /// The equation asserting both given equations.
    ///
    /// The equations must be over the same scope: the same symbols, in the same order.
    ///
    /// ```rust
    /// # use elective::config::Config;
    /// # use elective::context::Context;
    /// # use elective::structures::scope::Scope;
    /// let mut the_context = Context::from_config(Config::default());
    /// let scope = Scope::try_from("xy").unwrap();
    ///
    /// let no_x_is_y = the_context.equation("xy = 0", &scope).unwrap();
    /// let everything_is_x = the_context.equation("x = 1", &scope).unwrap();
    ///
    /// let both = the_context.conjoin(no_x_is_y, everything_is_x).unwrap();
    ///
    /// assert_eq!(both.forbidden_count(), 3);
    /// ```
    pub fn conjoin(&mut self, a: Equation, b: Equation) -> Result<Equation, ErrorKind> {
        if a.scope() != b.scope() {
            return Err(ErrorKind::from(err::CombineError::ScopeMismatch));
        }

        let forbidden = a
            .table()
            .iter()
            .zip(b.table())
            .map(|(of_a, of_b)| *of_a || *of_b)
            .collect();

        let equation = Equation::new(a.into_scope(), forbidden);
        log::trace!(
            target: targets::CONJUNCTION,
            "Conjoined to {} forbidden assignments over {}",
            equation.forbidden_count(),
            equation.scope()
        );
        self.counters.conjunctions += 1;

        Ok(equation)
    }
}
