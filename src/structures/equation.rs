/*!
Elective equations in normalized form.

An equation between two elective functions is represented canonically by its *forbidden table*:
for each of the 2^*n* assignments over the equation's scope, whether the two sides differ on
that assignment.
The table is total by construction --- a dense vector indexed by the
[enumeration order](crate::structures::assignment) of assignments --- so two equations are the
same claim exactly when their scopes and tables are equal.

Equations are created only by [normalization](crate::procedures::normalize), and thereafter
only transformed by [conjunction](crate::procedures::conjoin) and
[elimination](crate::procedures::eliminate), each of which consumes its input and returns a
fresh equation.

```rust
# use elective::config::Config;
# use elective::context::Context;
# use elective::structures::scope::Scope;
let mut the_context = Context::from_config(Config::default());
let scope = Scope::try_from("xy").unwrap();

let lhs = the_context.expression("x").unwrap();
let rhs = the_context.expression("xy").unwrap();

let equation = the_context.normalize(&lhs, &rhs, scope).unwrap();

assert_eq!(equation.to_string(), "x(1-y) = 0");
assert_eq!(equation.forbidden_count(), 1);
```
*/

use crate::structures::{
    assignment::{self, Assignment},
    scope::Scope,
};

/// An equation between elective functions, as a scope and a complete forbidden table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Equation {
    /// The symbols the equation is taken over.
    scope: Scope,

    /// For each assignment index, whether the assignment is forbidden.
    forbidden: Vec<bool>,
}

impl Equation {
    pub(crate) fn new(scope: Scope, forbidden: Vec<bool>) -> Self {
        debug_assert_eq!(forbidden.len(), 1_usize << scope.len());
        Equation { scope, forbidden }
    }

    /// The scope of the equation.
    pub fn scope(&self) -> &Scope {
        &self.scope
    }

    /// The complete forbidden table, in enumeration order.
    ///
    /// The element at each index records whether the assignment with that index is forbidden,
    /// and the length of the table is always 2^*n* for a scope of *n* symbols.
    pub fn table(&self) -> &[bool] {
        &self.forbidden
    }

    /// Whether the given assignment is forbidden, or nothing if the assignment's width differs
    /// from the scope of the equation.
    pub fn forbids(&self, assignment: &impl Assignment) -> Option<bool> {
        if assignment.width() != self.scope.len() {
            return None;
        }
        self.forbidden.get(assignment.as_index()).copied()
    }

    /// A count of the forbidden assignments.
    pub fn forbidden_count(&self) -> usize {
        self.forbidden.iter().filter(|forbidden| **forbidden).count()
    }

    /// Whether the equation forbids nothing, and so renders as `0 = 0`.
    pub fn is_vacuous(&self) -> bool {
        !self.forbidden.iter().any(|forbidden| *forbidden)
    }

    pub(crate) fn forbids_index(&self, index: usize) -> bool {
        self.forbidden[index]
    }

    pub(crate) fn into_scope(self) -> Scope {
        self.scope
    }
}

impl std::fmt::Display for Equation {
    /// The canonical rendering: one term per forbidden assignment in enumeration order, with
    /// the letter of each 1-valued symbol and `(1-…)` around each 0-valued symbol, terms
    /// joined by ` + ` and ` = 0` appended.
    /// An equation which forbids nothing renders as `0 = 0`.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_vacuous() {
            return write!(f, "0 = 0");
        }

        let mut subsequent = false;
        for (index, forbidden) in self.forbidden.iter().enumerate() {
            if !*forbidden {
                continue;
            }
            if subsequent {
                write!(f, " + ")?;
            }
            subsequent = true;

            let assignment = assignment::from_index(index, self.scope.len());
            // A term over no symbols is the empty product.
            if assignment.is_empty() {
                write!(f, "1")?;
            }
            for (symbol, value) in self.scope.symbols().zip(assignment) {
                match value {
                    true => write!(f, "{symbol}")?,
                    false => write!(f, "(1-{symbol})")?,
                }
            }
        }
        write!(f, " = 0")
    }
}
