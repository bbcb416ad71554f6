/*!
A scope --- the ordered sequence of distinct symbols an equation is taken over.

A scope is always supplied by the caller: the engine never infers which symbols are in play
from the expressions themselves, as an equation over `x` and an equation over `x` and `y` are
different equations even when `y` is idle.

The order of a scope is significant.
It fixes the [enumeration order](crate::structures::assignment) of assignments, and two
equations may be [conjoined](crate::procedures::conjoin) only when their scopes agree on both
symbols and order.

```rust
# use elective::structures::scope::Scope;
let scope = Scope::try_from("xyz").unwrap();

assert_eq!(scope.len(), 3);
assert_eq!(scope.position('y'), Some(1));
assert_eq!(scope.to_string(), "xyz");

assert!(Scope::try_from("xyx").is_err());
```
*/

use crate::{
    structures::symbol::{self, Symbol},
    types::err::{self},
};

/// An ordered sequence of distinct symbols.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Scope {
    symbols: Vec<Symbol>,
}

impl Scope {
    /// A scope over the given symbols, in the given order.
    pub fn new(symbols: Vec<Symbol>) -> Result<Self, err::ScopeError> {
        for (position, symbol) in symbols.iter().enumerate() {
            if symbols[..position].contains(symbol) {
                return Err(err::ScopeError::DuplicateSymbol(*symbol));
            }
        }
        Ok(Scope { symbols })
    }

    /// A count of the symbols in the scope.
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Whether the scope contains no symbols.
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// The position of the given symbol within the scope, if present.
    pub fn position(&self, symbol: Symbol) -> Option<usize> {
        self.symbols.iter().position(|s| *s == symbol)
    }

    /// The symbol at the given position, if any.
    pub fn symbol_at(&self, position: usize) -> Option<Symbol> {
        self.symbols.get(position).copied()
    }

    /// An iterator over the symbols of the scope, in position order.
    pub fn symbols(&self) -> impl Iterator<Item = Symbol> + '_ {
        self.symbols.iter().copied()
    }

    /// The scope with the symbol at the given position removed, order otherwise preserved.
    ///
    /// # Panics
    /// If the position is not within the scope.
    pub fn without(&self, position: usize) -> Scope {
        let mut symbols = self.symbols.clone();
        symbols.remove(position);
        Scope { symbols }
    }
}

impl TryFrom<&str> for Scope {
    type Error = err::ScopeError;

    /// A scope over the letters of the given string, in order.
    fn try_from(letters: &str) -> Result<Self, Self::Error> {
        for character in letters.chars() {
            if !symbol::recognised(character) {
                return Err(err::ScopeError::UnrecognizedSymbol(character));
            }
        }
        Scope::new(letters.chars().collect())
    }
}

impl std::fmt::Display for Scope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for symbol in &self.symbols {
            write!(f, "{symbol}")?;
        }
        Ok(())
    }
}
