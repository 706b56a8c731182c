//! Slash commands of the calculator REPL.
//!
//! A line that matches a command trigger is handled here; every other line
//! is typed on the keypad. Commands only read the session. Anything that
//! changes it (the keypad mode) comes back as a [`StateChange`] for the REPL
//! to apply, so the session keeps a single owner.

mod help;
mod keys;
mod mode;
mod quit;
mod state;

use async_trait::async_trait;
use std::sync::Arc;

use crate::engine::CalculatorState;
use crate::keypad::Mode;

/// Read-only view of the running session handed to commands.
pub struct SessionInfo<'a> {
    pub mode: Mode,
    pub state: &'a CalculatorState,
    pub presses: u64,
    pub db_path: &'a str,
}

/// A change to the session the REPL applies after a command returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StateChange {
    /// Switch the keypad to this mode.
    Mode(Mode),
}

pub enum CommandResult {
    /// The line is keys, not a command.
    NotACommand,
    Handled,
    StateChanged(StateChange),
    Quit,
}

#[async_trait]
pub trait Command: Send + Sync {
    /// Primary trigger, e.g. `"/mode"`.
    fn name(&self) -> &str;

    /// Other triggers. Plain words are allowed as long as they are not key
    /// spellings.
    fn aliases(&self) -> &[&str] {
        &[]
    }

    fn description(&self) -> &str;

    /// Left column of `/help`: the name followed by any aliases.
    fn label(&self) -> String {
        match self.aliases() {
            [] => self.name().to_string(),
            aliases => format!("{} ({})", self.name(), aliases.join(", ")),
        }
    }

    async fn execute(&self, info: &SessionInfo<'_>) -> CommandResult;
}

pub struct CommandRegistry {
    commands: Vec<Arc<dyn Command>>,
}

impl CommandRegistry {
    pub fn new() -> Self {
        let commands: Vec<Arc<dyn Command>> = vec![
            Arc::new(help::HelpCommand),
            Arc::new(mode::ModeCommand),
            Arc::new(keys::KeysCommand),
            Arc::new(state::StateCommand),
            Arc::new(quit::QuitCommand),
        ];
        Self { commands }
    }

    pub fn register(&mut self, command: Arc<dyn Command>) {
        self.commands.push(command);
    }

    /// Command whose name or alias is `trigger`, ignoring ASCII case.
    pub fn find(&self, trigger: &str) -> Option<&Arc<dyn Command>> {
        self.commands.iter().find(|command| {
            command.name().eq_ignore_ascii_case(trigger)
                || command
                    .aliases()
                    .iter()
                    .any(|alias| alias.eq_ignore_ascii_case(trigger))
        })
    }

    /// Run the command `input` names. Lines that name no command go back
    /// to the keypad, except unknown `/` lines, which are reported here
    /// rather than parsed as keys.
    pub async fn dispatch(&self, input: &str, info: &SessionInfo<'_>) -> CommandResult {
        let trigger = input.trim();

        match self.find(trigger) {
            Some(command) if command.name() == help::NAME => {
                print!("{}", self.help_text());
                CommandResult::Handled
            }
            Some(command) => command.execute(info).await,
            None if trigger.starts_with('/') => {
                println!("unknown command: {trigger} (/help lists commands)");
                CommandResult::Handled
            }
            None => CommandResult::NotACommand,
        }
    }

    /// Command table for `/help`, followed by a pointer to the keypad.
    pub fn help_text(&self) -> String {
        let rows: Vec<(String, &str)> = self
            .commands
            .iter()
            .map(|command| (command.label(), command.description()))
            .collect();
        let width = rows.iter().map(|(label, _)| label.len()).max().unwrap_or(0);

        let mut out = String::from("commands:\n");
        for (label, description) in &rows {
            out.push_str(&format!("  {label:<width$}  {description}\n"));
        }
        out.push_str("any other line is typed on the keypad, see /keys\n");
        out
    }

    pub fn names(&self) -> Vec<&str> {
        self.commands.iter().map(|command| command.name()).collect()
    }

    /// Every name and alias, in registration order.
    pub fn triggers(&self) -> Vec<&str> {
        self.commands
            .iter()
            .flat_map(|command| {
                std::iter::once(command.name()).chain(command.aliases().iter().copied())
            })
            .collect()
    }
}

impl Default for CommandRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::WORDS;

    static INITIAL: std::sync::LazyLock<CalculatorState> =
        std::sync::LazyLock::new(CalculatorState::new);

    pub(crate) fn test_info() -> SessionInfo<'static> {
        SessionInfo {
            mode: Mode::Basic,
            state: &INITIAL,
            presses: 0,
            db_path: ":memory:",
        }
    }

    #[test]
    fn all_builtins_registered() {
        let reg = CommandRegistry::new();
        let names = reg.names();
        for name in ["/help", "/mode", "/keys", "/state", "/quit"] {
            assert!(names.contains(&name), "missing {name}");
        }
    }

    #[test]
    fn no_duplicate_triggers() {
        let reg = CommandRegistry::new();
        let mut seen: Vec<String> = Vec::new();
        for trigger in reg.triggers() {
            let folded = trigger.to_ascii_lowercase();
            assert!(!seen.contains(&folded), "duplicate trigger: {trigger}");
            seen.push(folded);
        }
    }

    #[test]
    fn triggers_do_not_shadow_keys() {
        let reg = CommandRegistry::new();
        for trigger in reg.triggers() {
            assert!(
                !WORDS.iter().any(|(word, _)| word.eq_ignore_ascii_case(trigger)),
                "{trigger} shadows a key"
            );
        }
    }

    #[test]
    fn help_text_includes_all_commands() {
        let reg = CommandRegistry::new();
        let text = reg.help_text();
        for name in reg.names() {
            assert!(text.contains(name), "help missing: {name}");
        }
        assert!(text.contains("/help (/h, /?)"));
        assert!(text.ends_with("see /keys\n"));
    }

    #[test]
    fn find_ignores_case() {
        let reg = CommandRegistry::new();
        assert_eq!(reg.find("/MODE").map(|c| c.name()), Some("/mode"));
        assert_eq!(reg.find("Quit").map(|c| c.name()), Some("/quit"));
        assert!(reg.find("/nope").is_none());
    }

    #[tokio::test]
    async fn unknown_slash_command_is_handled() {
        let reg = CommandRegistry::new();
        assert!(matches!(
            reg.dispatch("/foobar", &test_info()).await,
            CommandResult::Handled
        ));
    }

    #[tokio::test]
    async fn keys_pass_through() {
        let reg = CommandRegistry::new();
        for line in ["2 + 3 =", "mode", "c", "1/x"] {
            assert!(matches!(
                reg.dispatch(line, &test_info()).await,
                CommandResult::NotACommand
            ));
        }
    }

    #[tokio::test]
    async fn mode_command_dispatches_by_alias() {
        let reg = CommandRegistry::new();
        assert!(matches!(
            reg.dispatch("/m", &test_info()).await,
            CommandResult::StateChanged(StateChange::Mode(Mode::Scientific))
        ));
    }

    #[tokio::test]
    async fn registered_command_works() {
        struct PingCommand;

        #[async_trait]
        impl Command for PingCommand {
            fn name(&self) -> &str {
                "/ping"
            }
            fn description(&self) -> &str {
                "pong"
            }
            async fn execute(&self, _info: &SessionInfo<'_>) -> CommandResult {
                CommandResult::Handled
            }
        }

        let mut reg = CommandRegistry::new();
        reg.register(Arc::new(PingCommand));
        assert!(reg.names().contains(&"/ping"));
        assert!(matches!(
            reg.dispatch("/ping", &test_info()).await,
            CommandResult::Handled
        ));
        assert!(reg.help_text().contains("/ping"));
    }

    #[test]
    fn label_lists_aliases() {
        let reg = CommandRegistry::new();
        assert_eq!(reg.find("/state").map(|c| c.label()), Some("/state".to_string()));
        assert_eq!(
            reg.find("/m").map(|c| c.label()),
            Some("/mode (/m)".to_string())
        );
    }
}
