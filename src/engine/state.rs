use serde::{Deserialize, Serialize};
use tracing::debug;

use super::format::{format_number, parse_number};
use super::ops::{ArithmeticError, BinaryOp, UnaryFn};
use super::{Digit, Engine, Key};
use crate::consts::{ERROR_DISPLAY, INITIAL_DISPLAY};

/// Everything the calculator remembers between key presses.
///
/// Each command mutates the state in place and never fails: arithmetic
/// errors become the `"Error"` display. While that sentinel is showing, only
/// digit entry, decimal entry and [`clear`](Self::clear) have any effect.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculatorState {
    display: String,
    pending_operand: Option<f64>,
    pending_operator: Option<BinaryOp>,
    awaiting_fresh_entry: bool,
}

impl Default for CalculatorState {
    fn default() -> Self {
        Self::new()
    }
}

impl CalculatorState {
    pub fn new() -> Self {
        Self {
            display: INITIAL_DISPLAY.to_string(),
            pending_operand: None,
            pending_operator: None,
            awaiting_fresh_entry: false,
        }
    }

    pub fn display(&self) -> &str {
        &self.display
    }

    pub fn pending_operand(&self) -> Option<f64> {
        self.pending_operand
    }

    pub fn pending_operator(&self) -> Option<BinaryOp> {
        self.pending_operator
    }

    pub fn awaiting_fresh_entry(&self) -> bool {
        self.awaiting_fresh_entry
    }

    pub fn is_error(&self) -> bool {
        self.display == ERROR_DISPLAY
    }

    fn operand(&self) -> f64 {
        parse_number(&self.display)
    }

    /// Show the error sentinel and drop the chain so a stale operator
    /// cannot resume on the next entry.
    fn fail(&mut self, err: ArithmeticError) {
        debug!(%err, "arithmetic error");
        self.display = ERROR_DISPLAY.to_string();
        self.pending_operand = None;
        self.pending_operator = None;
        self.awaiting_fresh_entry = true;
    }

    pub fn enter_digit(&mut self, digit: Digit) {
        if self.is_error() || self.awaiting_fresh_entry {
            self.display = digit.to_string();
            self.awaiting_fresh_entry = false;
        } else if self.display == INITIAL_DISPLAY {
            self.display = digit.to_string();
        } else {
            self.display.push(digit.as_char());
        }
    }

    pub fn enter_decimal(&mut self) {
        if self.is_error() || self.awaiting_fresh_entry {
            self.display = "0.".to_string();
            self.awaiting_fresh_entry = false;
        } else if !self.display.contains('.') {
            self.display.push('.');
        }
    }

    /// Select `op` as the pending operator.
    ///
    /// Mid-chain (an operator is pending and a new operand has been typed)
    /// the pending operation is evaluated first, so `2 + 3 + 4` shows `5`
    /// when the second `+` is pressed. Pressing operators back to back only
    /// replaces the pending operator.
    pub fn apply_binary_operator(&mut self, op: BinaryOp) {
        if self.is_error() {
            return;
        }
        let current = self.operand();

        match (self.pending_operand, self.pending_operator) {
            (Some(lhs), Some(pending)) if !self.awaiting_fresh_entry => {
                match pending.apply(lhs, current) {
                    Ok(result) => {
                        debug!(%lhs, %pending, rhs = %current, %result, "chained");
                        self.pending_operand = Some(result);
                        self.display = format_number(result);
                    }
                    Err(err) => {
                        self.fail(err);
                        return;
                    }
                }
            }
            _ => self.pending_operand = Some(current),
        }

        self.pending_operator = Some(op);
        self.awaiting_fresh_entry = true;
    }

    pub fn apply_equals(&mut self) {
        if self.is_error() {
            return;
        }
        let (Some(lhs), Some(op)) = (self.pending_operand, self.pending_operator) else {
            return;
        };
        let rhs = self.operand();

        match op.apply(lhs, rhs) {
            Ok(result) => {
                debug!(%lhs, %op, %rhs, %result, "equals");
                self.display = format_number(result);
                self.pending_operand = None;
                self.pending_operator = None;
                self.awaiting_fresh_entry = true;
            }
            Err(err) => self.fail(err),
        }
    }

    pub fn toggle_sign(&mut self) {
        if self.is_error() {
            return;
        }
        self.display = format_number(-self.operand());
    }

    pub fn percent(&mut self) {
        if self.is_error() {
            return;
        }
        self.display = format_number(self.operand() / 100.0);
    }

    pub fn clear(&mut self) {
        *self = Self::new();
    }

    /// Apply a scientific function to the displayed value. The result is a
    /// fresh operand: the next digit starts a new number.
    pub fn apply_unary_function(&mut self, function: UnaryFn) {
        if self.is_error() {
            return;
        }
        let value = self.operand();

        match function.apply(value) {
            Ok(result) => {
                debug!(%function, %value, %result, "unary");
                self.display = format_number(result);
                self.awaiting_fresh_entry = true;
            }
            Err(err) => self.fail(err),
        }
    }
}

impl Engine for CalculatorState {
    fn press(&mut self, key: Key) -> &str {
        match key {
            Key::Digit(d) => self.enter_digit(d),
            Key::Decimal => self.enter_decimal(),
            Key::Op(op) => self.apply_binary_operator(op),
            Key::Equals => self.apply_equals(),
            Key::Clear => self.clear(),
            Key::ToggleSign => self.toggle_sign(),
            Key::Percent => self.percent(),
            Key::Fn(function) => self.apply_unary_function(function),
            Key::ToggleScientificMode => {}
        }
        &self.display
    }

    fn display(&self) -> &str {
        &self.display
    }
}
