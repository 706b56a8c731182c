//! One calculator session: the engine state plus the keypad mode.

use serde::Serialize;
use thiserror::Error;
use tracing::{debug, info};

use crate::engine::{CalculatorState, Engine, Key};
use crate::input::{self, InputError};
use crate::keypad::Mode;

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("{key} is only available in scientific mode (type 'mode' to switch)")]
    Unavailable { key: Key },
    #[error(transparent)]
    Input(#[from] InputError),
}

/// Serializable view of a session, for `--json` output.
#[derive(Debug, Serialize)]
pub struct Snapshot<'a> {
    pub mode: Mode,
    pub presses: u64,
    #[serde(flatten)]
    pub state: &'a CalculatorState,
}

/// Owns the single calculator state. Input is applied one key at a time,
/// so a session must never be shared between concurrent callers.
#[derive(Debug, Default)]
pub struct Session {
    state: CalculatorState,
    mode: Mode,
    presses: u64,
}

impl Session {
    pub fn new(mode: Mode) -> Self {
        Self {
            state: CalculatorState::new(),
            mode,
            presses: 0,
        }
    }

    pub fn state(&self) -> &CalculatorState {
        &self.state
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Number of keys accepted so far.
    pub fn presses(&self) -> u64 {
        self.presses
    }

    pub fn display(&self) -> &str {
        self.state.display()
    }

    pub fn snapshot(&self) -> Snapshot<'_> {
        Snapshot {
            mode: self.mode,
            presses: self.presses,
            state: &self.state,
        }
    }

    /// Switch between basic and scientific keys. The calculator state is
    /// left exactly as it was.
    pub fn toggle_mode(&mut self) -> Mode {
        self.mode = self.mode.toggled();
        info!(mode = %self.mode, "mode changed");
        self.mode
    }

    /// Apply one key, or reject it if the current mode does not offer it.
    pub fn press(&mut self, key: Key) -> Result<&str, SessionError> {
        if !self.mode.allows(&key) {
            return Err(SessionError::Unavailable { key });
        }
        self.presses += 1;

        if key == Key::ToggleScientificMode {
            self.toggle_mode();
            return Ok(self.state.display());
        }

        let shown = self.state.press(key);
        debug!(%key, display = shown, "key");
        Ok(shown)
    }

    /// Parse and apply a whole line of keys.
    ///
    /// Parsing happens up front, so a typo applies nothing. A key the
    /// current mode does not offer stops the line there; keys before it
    /// stay applied, matching what a physical keypad would do.
    pub fn feed(&mut self, line: &str) -> Result<&str, SessionError> {
        let keys = input::parse_keys(line)?;
        for key in keys {
            self.press(key)?;
        }
        Ok(self.state.display())
    }
}
