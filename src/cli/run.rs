use super::{
    args::{Arguments, Command},
    commands::{CommandResult, check::check, emit::emit, init::init, list::list},
};
use anyhow::Result;

/// Dispatch to the handler for the parsed command.
pub fn run(Arguments { command }: Arguments) -> Result<CommandResult> {
    match command {
        Some(Command::Emit(cmd)) => emit(cmd),
        Some(Command::Check(cmd)) => check(cmd),
        Some(Command::List(cmd)) => list(cmd),
        Some(Command::Init) => init(),
        None => {
            anyhow::bail!("No command provided. Use --help to see available commands.")
        }
    }
}
