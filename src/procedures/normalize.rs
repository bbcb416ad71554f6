//! Casts an equation between two expressions into its canonical normalized form.
//!
//! # Overview
//!
//! An equation `lhs = rhs` over a scope of *n* symbols holds on an assignment exactly when the
//! two sides evaluate to the same value, and the equation as a claim is the set of assignments
//! on which it fails.
//! Normalization makes that set explicit by full enumeration: each of the 2^*n* assignments is
//! visited in [enumeration order](crate::structures::assignment), both sides are evaluated
//! under ordinary integer arithmetic, and the assignment is marked forbidden when the
//! difference of the sides is not exactly zero.
//!
//! The result is total by construction --- every assignment has an entry --- which is what
//! makes the representation canonical: any two expression pairs asserting the same claim over
//! the same scope normalize to the same table.
//!
//! Enumeration is exponential in the width of the scope, so the configured
//! [symbol_limit](crate::config::Config) is checked before any table is allocated.

use crate::{
    context::Context,
    misc::log::targets::{self},
    structures::{
        assignment::{self, Bound},
        equation::Equation,
        expression::Expression,
        scope::Scope,
    },
    types::err::{self, ErrorKind},
};

impl Context {
    /// The canonical equation asserting `lhs = rhs` over the given scope.
    ///
    /// Every symbol referenced by either side must be in scope, as each assignment binds the
    /// symbols of the scope alone.
    /// Idle symbols in scope are permitted, and widen the table.
    ///
    /// ```rust
    /// # use elective::config::Config;
    /// # use elective::context::Context;
    /// # use elective::structures::scope::Scope;
    /// let mut the_context = Context::from_config(Config::default());
    ///
    /// let lhs = the_context.expression("x").unwrap();
    /// let rhs = the_context.expression("xy").unwrap();
    ///
    /// let scope = Scope::try_from("xy").unwrap();
    /// let equation = the_context.normalize(&lhs, &rhs, scope).unwrap();
    ///
    /// assert_eq!(equation.to_string(), "x(1-y) = 0");
    /// ```
    pub fn normalize(
        &mut self,
        lhs: &Expression,
        rhs: &Expression,
        scope: Scope,
    ) -> Result<Equation, ErrorKind> {
        let limit = self.config.symbol_limit.value;
        if scope.len() > limit {
            return Err(ErrorKind::from(err::ScopeError::Excessive {
                symbols: scope.len(),
                limit,
            }));
        }

        let width = scope.len();
        let mut forbidden = Vec::with_capacity(1_usize << width);

        for index in 0..1_usize << width {
            let assignment = assignment::from_index(index, width);
            let bound = Bound::new(&scope, &assignment);

            let difference = lhs.evaluate(&bound)? - rhs.evaluate(&bound)?;
            forbidden.push(difference != 0);
        }

        let equation = Equation::new(scope, forbidden);
        log::debug!(
            target: targets::NORMALIZATION,
            "Normalized {lhs} = {rhs} over {}: {} of {} assignments forbidden",
            equation.scope(),
            equation.forbidden_count(),
            equation.table().len()
        );
        self.counters.normalizations += 1;

        Ok(equation)
    }
}
