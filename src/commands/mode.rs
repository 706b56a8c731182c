use async_trait::async_trait;

use super::{Command, CommandResult, SessionInfo, StateChange};

pub struct ModeCommand;

#[async_trait]
impl Command for ModeCommand {
    fn name(&self) -> &str {
        "/mode"
    }

    fn aliases(&self) -> &[&str] {
        &["/m"]
    }

    fn description(&self) -> &str {
        "switch between basic and scientific keys"
    }

    async fn execute(&self, info: &SessionInfo<'_>) -> CommandResult {
        let next = info.mode.toggled();
        println!("  ✓ {} mode", next);
        CommandResult::StateChanged(StateChange::Mode(next))
    }
}
