/*!
An assignment of (boolean) values to the symbols of a scope.

The canonical representation of an assignment is a vector of booleans, where the element at
each index is the value of the symbol at the same position of the associated
[scope](crate::structures::scope).
The trait is implemented for anything which can be dereferenced to a slice of booleans.

# Enumeration order

Assignments over a scope of width *n* are enumerated by the indices 0..2^*n*, in ascending
order when an assignment is read as an *n*-bit binary number whose most significant bit is the
value of the first symbol of the scope.
[from_index] decodes an index and [as_index](Assignment::as_index) encodes an assignment, and
the two are mutually inverse:

```rust
# use elective::structures::assignment::{self, Assignment};
let assignment = assignment::from_index(5, 3);

assert_eq!(assignment, vec![true, false, true]);
assert_eq!(assignment.as_index(), 5);
```

Each structure holding a complete table over a scope --- notably the forbidden table of an
[equation](crate::structures::equation) --- is indexed by this codec, so totality of the table
is a structural property of a dense vector rather than an invariant of a sparse map.
*/

mod slice_impl;

use crate::structures::{scope::Scope, symbol::Symbol};

/// The canonical representation of an assignment.
#[allow(non_camel_case_types)]
pub type CAssignment = Vec<bool>;

/// An assignment is something which stores a value for each position of some scope.
pub trait Assignment {
    /// Some value of the symbol at the given position, or otherwise nothing.
    fn value_at(&self, position: usize) -> Option<bool>;

    /// A count of the positions in the assignment.
    fn width(&self) -> usize;

    /// The index of the assignment in enumeration order, with the first position read as the
    /// most significant bit.
    fn as_index(&self) -> usize;

    /// An iterator over the values of the assignment, in strict position order.
    fn values(&self) -> impl Iterator<Item = bool>;
}

/// The assignment at the given index of the enumeration over a scope of the given width.
pub fn from_index(index: usize, width: usize) -> CAssignment {
    (0..width)
        .map(|position| (index >> (width - 1 - position)) & 1 == 1)
        .collect()
}

/// The assignment obtained by inserting the given value at the given position, with the values
/// at that position and after shifted one position later.
///
/// Used to complete an assignment over a narrowed scope back to the full scope during
/// [elimination](crate::procedures::eliminate).
pub fn completion(partial: &[bool], position: usize, value: bool) -> CAssignment {
    let mut full = Vec::with_capacity(partial.len() + 1);
    full.extend_from_slice(&partial[..position]);
    full.push(value);
    full.extend_from_slice(&partial[position..]);
    full
}

/// A scope paired with an assignment, giving symbol-keyed access to the assigned values.
///
/// Evaluation of an [expression](crate::structures::expression) reads symbol values through a
/// bound assignment, with each lookup resolved to a fixed position of the underlying slice.
///
/// ```rust
/// # use elective::structures::assignment::Bound;
/// # use elective::structures::scope::Scope;
/// let scope = Scope::try_from("xyz").unwrap();
/// let bound = Bound::new(&scope, &[true, false, true]);
///
/// assert_eq!(bound.value_of('y'), Some(false));
/// assert_eq!(bound.value_of('w'), None);
/// ```
pub struct Bound<'b> {
    scope: &'b Scope,
    values: &'b [bool],
}

impl<'b> Bound<'b> {
    /// Binds the given values to the symbols of the given scope, by position.
    pub fn new(scope: &'b Scope, values: &'b [bool]) -> Self {
        debug_assert_eq!(scope.len(), values.len());
        Bound { scope, values }
    }

    /// Some value of the given symbol, or otherwise nothing.
    pub fn value_of(&self, symbol: Symbol) -> Option<bool> {
        self.scope
            .position(symbol)
            .and_then(|position| self.values.get(position).copied())
    }
}
