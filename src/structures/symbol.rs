/*!
(The representation of) an elective symbol.

Broadly, symbols are things denoting membership in some class, to which assigning a (boolean)
value is of interest --- a value of 1 selects the members of the class, a value of 0 passes
them over.

- The surface representation of a symbol is a single ASCII lowercase letter.
  Examples: `x`, `y`, `v`.
- Internally a symbol is a [char], and equality of symbols is equality of the letters.
  No further structure is assumed, so revising the representation to any character is possible.

Symbols carry no value of their own.
Values are taken from an [assignment](crate::structures::assignment) paired with a
[scope](crate::structures::scope), and a symbol's position in the scope fixes which element of
the assignment is read.

# Notes
- In Boole's presentation these are 'elective symbols', while in later literature the same role
  is played by 'propositional variables'.
*/

/// An elective symbol, aka. a 'class variable'.
pub type Symbol = char;

/// The first letter of the surface alphabet.
pub const SYMBOL_MIN: Symbol = 'a';

/// The last letter of the surface alphabet.
pub const SYMBOL_MAX: Symbol = 'z';

/// Whether the given character belongs to the surface alphabet of symbols.
pub fn recognised(character: char) -> bool {
    (SYMBOL_MIN..=SYMBOL_MAX).contains(&character)
}
