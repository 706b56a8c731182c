//! Startup banner and session summary display.

use crate::consts::{AUTHOR, HOMEPAGE, REPO};
use crate::keypad::Mode;

/// Session configuration for display in the startup banner.
pub struct BannerInfo<'a> {
    pub mode: Mode,
    pub width: usize,
    pub config: &'a str,
}

/// Print the startup banner with session info.
pub fn print_banner(info: &BannerInfo) {
    println!(
        r#"
   ╔═══════════════════════════════════════╗
   ║             A B A C U S               ║
   ║     beads on a wire, moved by keys    ║
   ╚═══════════════════════════════════════╝

   version   {}
   by        {}
   home      {}
   repo      {}
   mode      {}
   width     {}
   config    {}

   type keys like `12 + 3 =`, /keys for the keypad, /help for commands
"#,
        env!("CARGO_PKG_VERSION"),
        AUTHOR,
        HOMEPAGE,
        REPO,
        info.mode,
        info.width,
        info.config,
    );
}

/// Summary line for the end of a session.
pub fn session_summary(presses: u64) -> String {
    match presses {
        0 => "goodbye.".to_string(),
        1 => "session: 1 key\ngoodbye.".to_string(),
        n => format!("session: {n} keys\ngoodbye."),
    }
}

/// Print the session summary (key count + farewell).
pub fn print_session_summary(presses: u64) {
    println!("{}", session_summary(presses));
}
