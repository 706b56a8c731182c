use async_trait::async_trait;

use super::{Command, CommandResult, SessionInfo};
use crate::engine::Key;
use crate::input::WORDS;
use crate::keypad::Mode;

pub struct KeysCommand;

/// Keypad grid for `mode`, one row per line.
fn keypad_text(mode: Mode) -> String {
    let mut out = String::new();
    for row in mode.layout() {
        let labels: Vec<String> = row
            .iter()
            .map(|key| format!("{:>5}", key.to_string()))
            .collect();
        out.push_str(&format!("  {}\n", labels.join("")));
    }
    out
}

/// Word spellings accepted in `mode`, grouped by key.
fn spellings_text(mode: Mode) -> String {
    let mut groups: Vec<(Key, Vec<&str>)> = Vec::new();
    for &(word, key) in WORDS.iter().filter(|(_, key)| mode.allows(key)) {
        match groups.iter_mut().find(|(k, _)| *k == key) {
            Some((_, words)) => words.push(word),
            None => groups.push((key, vec![word])),
        }
    }

    let mut out = String::new();
    for (key, words) in groups {
        out.push_str(&format!("  {:<4} {}\n", key.to_string(), words.join(", ")));
    }
    out
}

#[async_trait]
impl Command for KeysCommand {
    fn name(&self) -> &str {
        "/keys"
    }

    fn aliases(&self) -> &[&str] {
        &["/k"]
    }

    fn description(&self) -> &str {
        "show the keypad and the words it accepts"
    }

    async fn execute(&self, info: &SessionInfo<'_>) -> CommandResult {
        println!("  {} keypad:\n", info.mode);
        print!("{}", keypad_text(info.mode));
        println!("\n  also typed as:\n");
        print!("{}", spellings_text(info.mode));
        CommandResult::Handled
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::tests::test_info;

    #[test]
    fn basic_keypad_has_no_functions() {
        let text = keypad_text(Mode::Basic);
        assert!(text.contains("AC"));
        assert!(text.contains("÷"));
        assert!(!text.contains("sin"));
    }

    #[test]
    fn scientific_keypad_has_functions() {
        let text = keypad_text(Mode::Scientific);
        assert!(text.contains("sin"));
        assert!(text.contains("1/x"));
    }

    #[test]
    fn spellings_follow_mode() {
        assert!(!spellings_text(Mode::Basic).contains("sqrt"));
        let sci = spellings_text(Mode::Scientific);
        assert!(sci.contains("sqrt"));
        assert!(sci.contains("pi"));
    }

    #[tokio::test]
    async fn returns_handled() {
        assert!(matches!(
            KeysCommand.execute(&test_info()).await,
            CommandResult::Handled
        ));
    }
}
