//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `emit`: Collect hints and write reflect-config.json
//! - `check`: Validate hint descriptors without writing anything
//! - `list`: Print the collected hints grouped by trigger
//! - `init`: Initialize hintctl configuration file

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }

    /// Get the verbose flag from the command's common args.
    pub fn verbose(&self) -> bool {
        match &self.command {
            Some(Command::Emit(cmd)) => cmd.common.verbose,
            Some(Command::Check(cmd)) => cmd.common.verbose,
            Some(Command::List(cmd)) => cmd.common.verbose,
            Some(Command::Init) | None => false,
        }
    }
}

/// Common arguments shared by commands that read hints.
#[derive(Debug, Clone, Default, Args)]
pub struct CommonArgs {
    /// Descriptor files, directories or glob patterns (overrides config file)
    pub descriptors: Vec<String>,

    /// Include the bundled Spring Boot reactive web hints
    #[arg(long)]
    pub builtin: bool,

    /// Fail when a trigger is declared more than once
    #[arg(long)]
    pub unique_triggers: bool,

    /// Only keep hints for this trigger (full or simple class name).
    /// Can be specified multiple times: --trigger A --trigger B
    #[arg(long = "trigger", value_name = "NAME")]
    pub triggers: Vec<String>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Args)]
pub struct EmitCommand {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Output file (overrides config file)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

#[derive(Debug, Args)]
pub struct CheckCommand {
    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct ListCommand {
    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Collect hints and atomically write reflect-config.json
    Emit(EmitCommand),
    /// Validate hint descriptors without writing output
    Check(CheckCommand),
    /// List collected hints by trigger
    List(ListCommand),
    /// Initialize a new .hintrc.json configuration file
    Init,
}
