//! Project-wide constants.

use std::path::PathBuf;

pub const AUTHOR: &str = env!("CARGO_PKG_AUTHORS");
pub const HOMEPAGE: &str = env!("CARGO_PKG_HOMEPAGE");
pub const REPO: &str = env!("CARGO_PKG_REPOSITORY");

/// Display text of a fresh calculator.
pub const INITIAL_DISPLAY: &str = "0";

/// Display sentinel for division by zero and out-of-domain functions.
pub const ERROR_DISPLAY: &str = "Error";

/// Default width of the rendered display, in columns.
pub const DEFAULT_SCREEN_WIDTH: usize = 24;

/// Narrowest display we will render.
pub const MIN_SCREEN_WIDTH: usize = 8;

/// Default database path: `~/.abacus/abacus.db`.
/// Holds the stored preferences.
pub fn default_db_path() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join(".abacus")
        .join("abacus.db")
}
