//! Basic and scientific key sets.
//!
//! The keypad decides which keys are on offer. Switching modes never
//! touches the calculator state.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::engine::{BinaryOp, Digit, Key, UnaryFn};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    #[default]
    Basic,
    Scientific,
}

#[derive(Debug, Error)]
#[error("unknown mode: {0} (expected basic or scientific)")]
pub struct ParseModeError(String);

impl Mode {
    pub fn toggled(self) -> Self {
        match self {
            Self::Basic => Self::Scientific,
            Self::Scientific => Self::Basic,
        }
    }

    /// Whether this mode offers `key`. Scientific functions are hidden in
    /// basic mode; everything else is always available.
    pub fn allows(self, key: &Key) -> bool {
        match key {
            Key::Fn(_) => self == Self::Scientific,
            _ => true,
        }
    }

    /// Keypad rows for this mode, top to bottom.
    pub fn layout(self) -> Vec<Vec<Key>> {
        let digit = |n: usize| Key::Digit(Digit::ALL[n]);
        let mut rows: Vec<Vec<Key>> = Vec::new();

        if self == Self::Scientific {
            rows.push(UnaryFn::ALL[..6].iter().copied().map(Key::Fn).collect());
            rows.push(UnaryFn::ALL[6..].iter().copied().map(Key::Fn).collect());
        }

        rows.extend([
            vec![Key::Clear, Key::ToggleSign, Key::Percent, Key::Op(BinaryOp::Div)],
            vec![digit(7), digit(8), digit(9), Key::Op(BinaryOp::Mul)],
            vec![digit(4), digit(5), digit(6), Key::Op(BinaryOp::Sub)],
            vec![digit(1), digit(2), digit(3), Key::Op(BinaryOp::Add)],
            vec![digit(0), Key::Decimal, Key::Equals, Key::ToggleScientificMode],
        ]);
        rows
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Basic => f.write_str("basic"),
            Self::Scientific => f.write_str("scientific"),
        }
    }
}

impl FromStr for Mode {
    type Err = ParseModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "basic" => Ok(Self::Basic),
            "scientific" | "sci" => Ok(Self::Scientific),
            other => Err(ParseModeError(other.to_string())),
        }
    }
}
