use async_trait::async_trait;

use super::{Command, CommandResult, SessionInfo};
use crate::engine::format::format_number;

pub struct StateCommand;

#[async_trait]
impl Command for StateCommand {
    fn name(&self) -> &str {
        "/state"
    }

    fn description(&self) -> &str {
        "show the display, pending operation, and mode"
    }

    async fn execute(&self, info: &SessionInfo<'_>) -> CommandResult {
        let state = info.state;
        let operand = state
            .pending_operand()
            .map(format_number)
            .unwrap_or_else(|| "—".to_string());
        let operator = state
            .pending_operator()
            .map(|op| op.to_string())
            .unwrap_or_else(|| "—".to_string());

        println!("  display   {}", state.display());
        println!("  operand   {}", operand);
        println!("  operator  {}", operator);
        println!("  fresh     {}", state.awaiting_fresh_entry());
        println!("  mode      {}", info.mode);
        println!("  keys      {}", info.presses);
        println!("  config    {}", info.db_path);
        CommandResult::Handled
    }
}
