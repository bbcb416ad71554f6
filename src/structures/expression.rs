/*!
Elective functions --- algebraic combinations of symbols, constants, negation, and product.

The canonical representation of an elective function is an [Expression] tree, with
sub-expressions exclusively owned by their parent node.
Expressions are built by the [parser](crate::builder) or directly by a caller, and are
read-only thereafter.

```rust
# use elective::structures::expression::Expression;
let expression: Expression = "x(1-y)".parse().unwrap();

assert_eq!(expression.to_string(), "x(1-y)");
assert_eq!(expression.size(), 4);
```

# Arithmetic, not connectives

Negation and product are *arithmetic* operations: negation of a value *v* is 1 - *v* and the
product of values is their integer product.
Over values drawn from {0, 1} these coincide with complement and conjunction, and that
coincidence is the whole calculus --- an equation holds exactly when the arithmetic difference
of its sides is zero on every assignment.
Nothing in the expression layer constrains values to {0, 1}; see the notes on
[evaluate](Expression::evaluate).
*/

use crate::{
    structures::{assignment::Bound, symbol::Symbol},
    types::err::{self},
};

/// An elective function over symbols and the constants `0` and `1`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Expression {
    /// A reference to a symbol.
    Symbol(Symbol),

    /// A constant, `0` or `1`.
    Constant(u8),

    /// One minus the value of the inner expression.
    Negation(Box<Expression>),

    /// The product of the values of the inner expressions.
    Product(Box<Expression>, Box<Expression>),
}

impl Expression {
    /// The value of the expression under the given binding.
    ///
    /// Evaluation is ordinary integer arithmetic: negation of *v* is 1 - *v* and product is
    /// multiplication, as exact comparison of results against zero is what
    /// [normalization](crate::procedures::normalize) rests on.
    ///
    /// No range check is made on the computed values.
    /// A binding supplies `0` or `1` for each symbol and {0, 1} is closed under both
    /// operations, so values remain boolean whenever the constants of the expression are.
    /// A caller constructing a [Constant](Expression::Constant) outside {0, 1} takes
    /// responsibility for the arithmetic that follows.
    ///
    /// ```rust
    /// # use elective::structures::assignment::Bound;
    /// # use elective::structures::expression::Expression;
    /// # use elective::structures::scope::Scope;
    /// let scope = Scope::try_from("xy").unwrap();
    /// let expression: Expression = "x(1-y)".parse().unwrap();
    ///
    /// let bound = Bound::new(&scope, &[true, false]);
    /// assert_eq!(expression.evaluate(&bound), Ok(1));
    ///
    /// let bound = Bound::new(&scope, &[true, true]);
    /// assert_eq!(expression.evaluate(&bound), Ok(0));
    /// ```
    pub fn evaluate(&self, binding: &Bound) -> Result<i32, err::EvaluationError> {
        match self {
            Self::Symbol(symbol) => match binding.value_of(*symbol) {
                Some(value) => Ok(i32::from(value)),
                None => Err(err::EvaluationError::UnboundSymbol(*symbol)),
            },

            Self::Constant(value) => Ok(i32::from(*value)),

            Self::Negation(body) => Ok(1 - body.evaluate(binding)?),

            Self::Product(left, right) => {
                Ok(left.evaluate(binding)? * right.evaluate(binding)?)
            }
        }
    }

    /// A count of the nodes in the expression.
    pub fn size(&self) -> usize {
        match self {
            Self::Symbol(_) | Self::Constant(_) => 1,
            Self::Negation(body) => 1 + body.size(),
            Self::Product(left, right) => 1 + left.size() + right.size(),
        }
    }
}

impl std::fmt::Display for Expression {
    /// The unique canonical string of the expression: the letter of a symbol, `0` or `1` for a
    /// constant, `(1-…)` for a negation, and bare juxtaposition for a product.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Symbol(symbol) => write!(f, "{symbol}"),
            Self::Constant(value) => write!(f, "{value}"),
            Self::Negation(body) => write!(f, "(1-{body})"),
            Self::Product(left, right) => write!(f, "{left}{right}"),
        }
    }
}
