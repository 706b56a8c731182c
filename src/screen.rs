//! Renders the calculator display for the terminal.

use crate::engine::CalculatorState;
use crate::engine::format::format_number;
use crate::keypad::Mode;

/// Fit `text` into `width` columns, right-aligned. Overlong text keeps its
/// rightmost characters behind a leading ellipsis.
fn fit_right(text: &str, width: usize) -> String {
    let len = text.chars().count();
    if len <= width {
        return format!("{text:>width$}");
    }
    let tail: String = text.chars().skip(len - width + 1).collect();
    format!("…{tail}")
}

/// The status line: mode on the left, pending operation on the right.
fn status_line(state: &CalculatorState, mode: Mode, width: usize) -> String {
    let label = match mode {
        Mode::Basic => "",
        Mode::Scientific => "sci",
    };
    let pending = match (state.pending_operand(), state.pending_operator()) {
        (Some(operand), Some(op)) => format!("{} {op}", format_number(operand)),
        _ => String::new(),
    };
    let room = width.saturating_sub(label.chars().count() + 1);
    if room == 0 {
        return fit_right(label, width);
    }
    format!("{label} {}", fit_right(&pending, room))
}

/// Draw the display box.
pub fn render(state: &CalculatorState, mode: Mode, width: usize) -> String {
    let border = "─".repeat(width + 2);
    format!(
        "┌{border}┐\n│ {} │\n│ {} │\n└{border}┘",
        status_line(state, mode, width),
        fit_right(state.display(), width),
    )
}
