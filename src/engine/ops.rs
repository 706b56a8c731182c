//! Binary operators and the unary function table.

use std::f64::consts::{E, PI};
use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The only error the engine knows about. It never leaves the engine:
/// the state machine turns it into the `"Error"` display.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ArithmeticError {
    #[error("division by zero")]
    DivisionByZero,
    #[error("{function} is undefined for {value}")]
    Domain { function: UnaryFn, value: f64 },
}

/// A pending infix operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
}

impl BinaryOp {
    pub const ALL: [BinaryOp; 4] = [Self::Add, Self::Sub, Self::Mul, Self::Div];

    /// Evaluate `a op b`. Division by zero is the only detected failure;
    /// overflow simply yields an infinity.
    pub fn apply(self, a: f64, b: f64) -> Result<f64, ArithmeticError> {
        match self {
            Self::Add => Ok(a + b),
            Self::Sub => Ok(a - b),
            Self::Mul => Ok(a * b),
            Self::Div if b == 0.0 => Err(ArithmeticError::DivisionByZero),
            Self::Div => Ok(a / b),
        }
    }

    /// Keypad label.
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "×",
            Self::Div => "÷",
        }
    }
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Scientific-mode functions. Each one acts on the displayed value only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnaryFn {
    Sin,
    Cos,
    Tan,
    Ln,
    Log,
    Sqrt,
    Square,
    Cube,
    Exp,
    Reciprocal,
    Pi,
    E,
}

impl UnaryFn {
    pub const ALL: [UnaryFn; 12] = [
        Self::Sin,
        Self::Cos,
        Self::Tan,
        Self::Ln,
        Self::Log,
        Self::Sqrt,
        Self::Square,
        Self::Cube,
        Self::Exp,
        Self::Reciprocal,
        Self::Pi,
        Self::E,
    ];

    /// Evaluate the function at `value`.
    ///
    /// Out-of-domain inputs (`ln`/`log` of a non-positive number, `√` of a
    /// negative one, `1/x` of zero) and NaN results are reported as
    /// [`ArithmeticError::Domain`]. Trigonometric functions take radians.
    pub fn apply(self, value: f64) -> Result<f64, ArithmeticError> {
        let in_domain = match self {
            Self::Ln | Self::Log => value > 0.0,
            Self::Sqrt => value >= 0.0,
            Self::Reciprocal => value != 0.0,
            _ => true,
        };
        if !in_domain {
            return Err(ArithmeticError::Domain {
                function: self,
                value,
            });
        }

        let result = match self {
            Self::Sin => value.sin(),
            Self::Cos => value.cos(),
            Self::Tan => value.tan(),
            Self::Ln => value.ln(),
            Self::Log => value.log10(),
            Self::Sqrt => value.sqrt(),
            Self::Square => value * value,
            Self::Cube => value * value * value,
            Self::Exp => value.exp(),
            Self::Reciprocal => 1.0 / value,
            Self::Pi => PI,
            Self::E => E,
        };

        if result.is_nan() {
            return Err(ArithmeticError::Domain {
                function: self,
                value,
            });
        }
        Ok(result)
    }

    /// Keypad label.
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Sin => "sin",
            Self::Cos => "cos",
            Self::Tan => "tan",
            Self::Ln => "ln",
            Self::Log => "log",
            Self::Sqrt => "√",
            Self::Square => "x²",
            Self::Cube => "x³",
            Self::Exp => "eˣ",
            Self::Reciprocal => "1/x",
            Self::Pi => "π",
            Self::E => "e",
        }
    }
}

impl fmt::Display for UnaryFn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}
