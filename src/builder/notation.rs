//! A recursive-descent parser for the surface notation.
//!
//! The grammar is minimal:
//!
//! ```none
//! expr     := atom | negation | expr expr      juxtaposition, grouped as Product(first, rest)
//! atom     := LETTER | DIGIT01
//! negation := "(1-" expr ")"
//! ```
//!
//! The scan is left to right over the raw text.
//! A `(` must open the literal prefix `(1-`, and its counterpart is located by depth counting;
//! anything else consumes exactly one character as an atom.
//! Whatever remains after one term is parsed as a further expression and joined by product.
//! Partial input is never silently accepted: every deviation is a [ParseError](err::ParseError)
//! carrying the offending character and/or position.

use crate::{
    misc::log::targets::{self},
    structures::{expression::Expression, symbol::{self}},
    types::err::{self},
};

/// The expression written in the given notation.
pub fn parse(notation: &str) -> Result<Expression, err::ParseError> {
    let expression = parse_at(notation, 0)?;
    log::trace!(target: targets::PARSER, "Parsed {} nodes from: {notation}", expression.size());
    Ok(expression)
}

impl std::str::FromStr for Expression {
    type Err = err::ParseError;

    fn from_str(notation: &str) -> Result<Self, Self::Err> {
        parse(notation)
    }
}

/// Parses a slice of the original text, with `base` the absolute position of the slice for
/// error reporting.
fn parse_at(notation: &str, base: usize) -> Result<Expression, err::ParseError> {
    let bytes = notation.as_bytes();

    let (first, consumed) = match bytes.first() {
        None => return Err(err::ParseError::Empty),

        Some(b'(') => {
            if !notation.starts_with("(1-") {
                return Err(err::ParseError::Negation(base));
            }
            let close = match matching_parenthesis(bytes) {
                Some(index) => index,
                None => return Err(err::ParseError::Unbalanced(base)),
            };
            let body = &notation["(1-".len()..close];
            if body.is_empty() {
                return Err(err::ParseError::Empty);
            }
            let inner = parse_at(body, base + "(1-".len())?;
            (Expression::Negation(Box::new(inner)), close + 1)
        }

        Some(b')') => return Err(err::ParseError::Unbalanced(base)),

        Some(b'0') => (Expression::Constant(0), 1),
        Some(b'1') => (Expression::Constant(1), 1),

        Some(letter) if symbol::recognised(*letter as char) => {
            (Expression::Symbol(*letter as char), 1)
        }

        Some(_) => {
            // Report the character rather than its leading byte.
            let character = match notation.chars().next() {
                Some(character) => character,
                None => return Err(err::ParseError::Empty),
            };
            return Err(err::ParseError::Unrecognized(character, base));
        }
    };

    if consumed == bytes.len() {
        Ok(first)
    } else {
        let rest = parse_at(&notation[consumed..], base + consumed)?;
        Ok(Expression::Product(Box::new(first), Box::new(rest)))
    }
}

/// The index of the parenthesis closing the one opening the slice, by depth counting.
///
/// The counter increments on `(`, decrements on `)`, and the matching index is where the
/// counter returns to zero.
fn matching_parenthesis(bytes: &[u8]) -> Option<usize> {
    let mut depth: usize = 0;
    for (index, byte) in bytes.iter().enumerate() {
        match byte {
            b'(' => depth += 1,
            b')' => {
                depth -= 1;
                if depth == 0 {
                    return Some(index);
                }
            }
            _ => {}
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matched_parentheses() {
        assert_eq!(matching_parenthesis("(1-x)".as_bytes()), Some(4));
        assert_eq!(matching_parenthesis("(1-(1-x))y".as_bytes()), Some(8));
        assert_eq!(matching_parenthesis("(1-(1-x)".as_bytes()), None);
    }

    #[test]
    fn products_group_from_the_left_term() {
        let parsed = parse("xyz").unwrap();
        let by_hand = Expression::Product(
            Box::new(Expression::Symbol('x')),
            Box::new(Expression::Product(
                Box::new(Expression::Symbol('y')),
                Box::new(Expression::Symbol('z')),
            )),
        );

        assert_eq!(parsed, by_hand);
    }
}
