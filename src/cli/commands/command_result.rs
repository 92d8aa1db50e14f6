use std::path::PathBuf;

use crate::access::AccessBits;

#[derive(Debug)]
pub enum CommandSummary {
    Emit(EmitSummary),
    Check(CheckSummary),
    List(ListSummary),
    Init(InitSummary),
}

#[derive(Debug)]
pub struct EmitSummary {
    pub path: PathBuf,
    pub entries: usize,
    pub records: usize,
}

#[derive(Debug)]
pub struct CheckSummary {
    pub sources: usize,
    pub entries: usize,
    pub records: usize,
}

#[derive(Debug)]
pub struct ListSummary {
    pub rows: Vec<ListRow>,
}

/// One hint entry as shown by `list`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListRow {
    pub trigger: String,
    pub access: AccessBits,
    pub type_refs: usize,
    pub type_names: usize,
}

#[derive(Debug)]
pub struct InitSummary {
    pub created: bool,
}

/// A problem found while running a command, tied to where it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Problem {
    /// Descriptor path, `<builtin>`, or another label for the source.
    pub origin: String,
    pub message: String,
}

impl Problem {
    pub fn new(origin: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            origin: origin.into(),
            message: message.into(),
        }
    }
}

/// Result of running hintctl commands
#[derive(Debug)]
pub struct CommandResult {
    pub summary: CommandSummary,
    /// Problems that make the command fail (exit code 1).
    pub problems: Vec<Problem>,
    /// Non-fatal notes, e.g. descriptor sources that matched nothing.
    pub warnings: Vec<String>,
}

impl CommandResult {
    pub fn new(summary: CommandSummary) -> Self {
        Self {
            summary,
            problems: Vec::new(),
            warnings: Vec::new(),
        }
    }

    pub fn with_warnings(mut self, warnings: Vec<String>) -> Self {
        self.warnings = warnings;
        self
    }
}
