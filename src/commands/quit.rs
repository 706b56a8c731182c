use async_trait::async_trait;

use super::{Command, CommandResult, SessionInfo};

/// Ends the REPL. The pending chain is simply dropped; nothing about the
/// calculation is saved.
pub struct QuitCommand;

#[async_trait]
impl Command for QuitCommand {
    fn name(&self) -> &str {
        "/quit"
    }

    // "quit" and "exit" are not key spellings, so they are safe without a slash.
    fn aliases(&self) -> &[&str] {
        &["/q", "/exit", "quit", "exit"]
    }

    fn description(&self) -> &str {
        "leave the calculator (also quit, exit, Ctrl+D)"
    }

    async fn execute(&self, _info: &SessionInfo<'_>) -> CommandResult {
        CommandResult::Quit
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::CommandRegistry;
    use crate::commands::tests::test_info;
    use crate::input::parse_keys;

    #[tokio::test]
    async fn every_trigger_quits() {
        let reg = CommandRegistry::new();
        for trigger in ["/quit", "/q", "/exit", "quit", "EXIT", "  exit  "] {
            assert!(
                matches!(reg.dispatch(trigger, &test_info()).await, CommandResult::Quit),
                "{trigger:?}"
            );
        }
    }

    #[test]
    fn plain_aliases_are_not_keys() {
        for alias in QuitCommand.aliases().iter().filter(|a| !a.starts_with('/')) {
            assert!(parse_keys(alias).is_err(), "{alias} parses as keys");
        }
    }
}
