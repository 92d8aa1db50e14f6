use anyhow::Result;

use super::super::args::ListCommand;
use super::{
    CommandResult, CommandSummary, ListRow, ListSummary,
    helper::{Sources, collect_registry, load_sources, resolve_settings},
};

pub fn list(cmd: ListCommand) -> Result<CommandResult> {
    let settings = resolve_settings(&cmd.common, None)?;
    let Sources { sources, warnings } = load_sources(&settings, cmd.common.verbose)?;
    let registry = collect_registry(&settings, sources)?;

    let rows = registry
        .entries()
        .iter()
        .map(|entry| ListRow {
            trigger: entry.trigger().to_string(),
            access: entry.access(),
            type_refs: entry.type_refs().len(),
            type_names: entry.type_names().len(),
        })
        .collect();

    Ok(CommandResult::new(CommandSummary::List(ListSummary { rows })).with_warnings(warnings))
}
