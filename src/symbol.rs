use std::fmt::{Debug, Display};
use std::hash::Hash;

/// The lambda (epsilon) token for `char` automata.
pub const LAMBDA: char = 'λ';
/// The lambda token for byte automata.
pub const LAMBDA_BYTE: u8 = 0;
/// The lambda token for string-symbol automata.
pub const LAMBDA_STR: &str = "λ";

/// A transition label. Exactly one value of every symbol type is reserved
/// for lambda moves and is never part of an alphabet.
pub trait Symbol: Clone + Eq + Hash + Debug + Display {
    fn lambda() -> Self;

    #[inline]
    fn is_lambda(&self) -> bool {
        *self == Self::lambda()
    }
}

impl Symbol for char {
    #[inline]
    fn lambda() -> Self {
        LAMBDA
    }
}

impl Symbol for u8 {
    #[inline]
    fn lambda() -> Self {
        LAMBDA_BYTE
    }
}

impl Symbol for &'static str {
    #[inline]
    fn lambda() -> Self {
        LAMBDA_STR
    }
}

impl Symbol for String {
    fn lambda() -> Self {
        LAMBDA_STR.to_owned()
    }

    // no allocation for the comparison
    #[inline]
    fn is_lambda(&self) -> bool {
        self == LAMBDA_STR
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lambda_tokens() {
        assert!('λ'.is_lambda());
        assert!(!'a'.is_lambda());
        assert!(0u8.is_lambda());
        assert!(!b'a'.is_lambda());
        assert!(String::from("λ").is_lambda());
        assert!(!String::from("lambda").is_lambda());
        assert!("λ".is_lambda());
    }
}
