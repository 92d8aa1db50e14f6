use anyhow::Result;

use super::super::args::CheckCommand;
use super::{
    CheckSummary, CommandResult, CommandSummary, Problem,
    helper::{Source, Sources, load_sources, resolve_settings},
};
use crate::{
    collect::{Collector, collect},
    emit::render,
    error::HintResult,
    hint::Declaration,
};

const COMBINED_ORIGIN: &str = "<combined>";

/// Validate every source on its own, then the combined set.
///
/// Unlike `emit`, problems are gathered per source instead of stopping at
/// the first one, and nothing is written.
pub fn check(cmd: CheckCommand) -> Result<CommandResult> {
    let settings = resolve_settings(&cmd.common, None)?;
    let Sources { sources, warnings } = load_sources(&settings, cmd.common.verbose)?;
    let source_count = sources.len();

    let mut problems = Vec::new();
    let mut declarations = Vec::new();
    for Source {
        origin,
        declarations: loaded,
    } in sources
    {
        match loaded.and_then(|decls| validate_source(&decls).map(|_| decls)) {
            Ok(decls) => declarations.extend(decls),
            Err(err) => problems.push(Problem::new(origin, err.to_string())),
        }
    }

    let mut summary = CheckSummary {
        sources: source_count,
        entries: 0,
        records: 0,
    };

    if problems.is_empty() {
        let combined = Collector::new(settings.policy)
            .collect(declarations)
            .and_then(|registry| registry.retain_triggers(&settings.triggers))
            .and_then(|registry| render(&registry).map(|_| registry));
        match combined {
            Ok(registry) => {
                summary.entries = registry.len();
                summary.records = registry.type_count();
            }
            Err(err) => problems.push(Problem::new(COMBINED_ORIGIN, err.to_string())),
        }
    }

    let mut result = CommandResult::new(CommandSummary::Check(summary)).with_warnings(warnings);
    result.problems = problems;
    Ok(result)
}

fn validate_source(declarations: &[Declaration]) -> HintResult<()> {
    let registry = collect(declarations.to_vec())?;
    render(&registry)?;
    Ok(())
}
