use anyhow::{Context, Result};

use super::super::args::EmitCommand;
use super::{
    CommandResult, CommandSummary, EmitSummary,
    helper::{Sources, collect_registry, load_sources, resolve_settings},
};
use crate::emit;

pub fn emit(cmd: EmitCommand) -> Result<CommandResult> {
    let settings = resolve_settings(&cmd.common, cmd.output.as_deref())?;
    let Sources { sources, warnings } = load_sources(&settings, cmd.common.verbose)?;

    let registry = collect_registry(&settings, sources)?;
    let written = emit::write(registry, &settings.output).with_context(|| {
        format!(
            "Failed to emit {}",
            settings.display_path(&settings.output)
        )
    })?;

    let summary = EmitSummary {
        path: settings.display_path(&written.path).into(),
        entries: written.entries,
        records: written.records,
    };
    Ok(CommandResult::new(CommandSummary::Emit(summary)).with_warnings(warnings))
}
