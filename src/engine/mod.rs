pub mod format;
pub mod ops;
pub mod state;

use std::fmt;

pub use ops::{ArithmeticError, BinaryOp, UnaryFn};
pub use state::CalculatorState;

/// A single decimal digit, `0` through `9`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Digit(u8);

impl Digit {
    pub const ALL: [Digit; 10] = [
        Self(0),
        Self(1),
        Self(2),
        Self(3),
        Self(4),
        Self(5),
        Self(6),
        Self(7),
        Self(8),
        Self(9),
    ];

    pub fn new(value: u8) -> Option<Self> {
        (value <= 9).then_some(Self(value))
    }

    pub fn from_char(c: char) -> Option<Self> {
        c.to_digit(10).map(|d| Self(d as u8))
    }

    pub fn value(self) -> u8 {
        self.0
    }

    pub fn as_char(self) -> char {
        char::from(b'0' + self.0)
    }
}

impl fmt::Display for Digit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One discrete user input. Every key maps to exactly one engine command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Digit(Digit),
    Decimal,
    Op(BinaryOp),
    Equals,
    Clear,
    ToggleSign,
    Percent,
    Fn(UnaryFn),
    /// Handled by the keypad; the engine ignores it.
    ToggleScientificMode,
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Digit(d) => write!(f, "{d}"),
            Self::Decimal => f.write_str("."),
            Self::Op(op) => write!(f, "{op}"),
            Self::Equals => f.write_str("="),
            Self::Clear => f.write_str("AC"),
            Self::ToggleSign => f.write_str("±"),
            Self::Percent => f.write_str("%"),
            Self::Fn(function) => write!(f, "{function}"),
            Self::ToggleScientificMode => f.write_str("mode"),
        }
    }
}

/// The outermost boundary of the calculator. The REPL only knows this trait.
pub trait Engine {
    /// Apply one key and return the display text afterwards.
    fn press(&mut self, key: Key) -> &str;

    fn display(&self) -> &str;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digit_bounds() {
        assert!(Digit::new(0).is_some());
        assert!(Digit::new(9).is_some());
        assert!(Digit::new(10).is_none());
    }

    #[test]
    fn digit_from_char() {
        assert_eq!(Digit::from_char('7').map(Digit::value), Some(7));
        assert!(Digit::from_char('a').is_none());
        assert!(Digit::from_char('.').is_none());
    }

    #[test]
    fn digit_as_char() {
        for n in 0..=9 {
            let d = Digit::new(n).unwrap();
            assert_eq!(d.as_char().to_string(), d.to_string());
        }
    }

    #[test]
    fn key_labels() {
        assert_eq!(Key::Op(BinaryOp::Div).to_string(), "÷");
        assert_eq!(Key::Fn(UnaryFn::Sqrt).to_string(), "√");
        assert_eq!(Key::Clear.to_string(), "AC");
    }
}
