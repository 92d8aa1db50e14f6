//! Report formatting and printing utilities.
//!
//! Kept apart from the commands so hintctl can be used as a library.

use std::io::{self, Write};

use colored::Colorize;
use unicode_width::UnicodeWidthStr;

use super::commands::{
    CheckSummary, CommandResult, CommandSummary, EmitSummary, InitSummary, ListRow, ListSummary,
    Problem,
};
use crate::config::CONFIG_FILE_NAME;

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

pub fn print(result: &CommandResult, verbose: bool) {
    print_to(
        result,
        verbose,
        &mut io::stdout().lock(),
        &mut io::stderr().lock(),
    );
}

/// Print a command result to custom writers.
pub fn print_to<O: Write, E: Write>(
    result: &CommandResult,
    verbose: bool,
    out: &mut O,
    err: &mut E,
) {
    if verbose {
        for warning in &result.warnings {
            let _ = writeln!(err, "{} {}", "warning:".bold().yellow(), warning);
        }
    }

    match &result.summary {
        CommandSummary::Emit(summary) => print_emit(summary, out),
        CommandSummary::Check(summary) => print_check(summary, &result.problems, out),
        CommandSummary::List(summary) => print_list(summary, out),
        CommandSummary::Init(summary) => print_init(summary, err, out),
    }
}

fn plural(count: usize, one: &str, many: &str) -> String {
    format!("{} {}", count, if count == 1 { one } else { many })
}

fn print_emit<W: Write>(summary: &EmitSummary, writer: &mut W) {
    let msg = format!(
        "Wrote {} from {} to {}",
        plural(summary.records, "record", "records"),
        plural(summary.entries, "hint", "hints"),
        summary.path.display()
    );
    let _ = writeln!(writer, "{} {}", SUCCESS_MARK.green(), msg.green());
}

fn print_check<W: Write>(summary: &CheckSummary, problems: &[Problem], writer: &mut W) {
    if problems.is_empty() {
        let msg = format!(
            "Checked {}, {}, {} - no problems found",
            plural(summary.sources, "source", "sources"),
            plural(summary.entries, "hint", "hints"),
            plural(summary.records, "record", "records")
        );
        let _ = writeln!(writer, "{} {}", SUCCESS_MARK.green(), msg.green());
        return;
    }

    for problem in problems {
        let _ = writeln!(writer, "{}: {}", "error".bold().red(), problem.message);
        let _ = writeln!(writer, "  {} {}", "-->".blue(), problem.origin);
        let _ = writeln!(writer);
    }

    let msg = format!(
        "Found {} in {}",
        plural(problems.len(), "problem", "problems"),
        plural(summary.sources, "source", "sources")
    );
    let _ = writeln!(writer, "{} {}", FAILURE_MARK.red(), msg.red().bold());
}

fn print_list<W: Write>(summary: &ListSummary, writer: &mut W) {
    if summary.rows.is_empty() {
        let _ = writeln!(writer, "No hints collected");
        return;
    }

    let width = summary
        .rows
        .iter()
        .map(|row| UnicodeWidthStr::width(row.trigger.as_str()))
        .max()
        .unwrap_or(0);

    for row in &summary.rows {
        print_row(row, width, writer);
    }

    let total: usize = summary
        .rows
        .iter()
        .map(|row| row.type_refs + row.type_names)
        .sum();
    let _ = writeln!(
        writer,
        "\n{}, {}",
        plural(summary.rows.len(), "hint", "hints"),
        plural(total, "type", "types")
    );
}

fn print_row<W: Write>(row: &ListRow, width: usize, writer: &mut W) {
    let padding = width - UnicodeWidthStr::width(row.trigger.as_str());
    let _ = writeln!(
        writer,
        "{}{:padding$}  {}  {}",
        row.trigger.bold(),
        "",
        row.access.to_string().cyan(),
        format!(
            "{} resolved, {} by name",
            row.type_refs, row.type_names
        )
        .dimmed(),
        padding = padding
    );
}

fn print_init<E: Write, O: Write>(summary: &InitSummary, err: &mut E, out: &mut O) {
    if summary.created {
        let msg = format!("Created {}", CONFIG_FILE_NAME);
        let _ = writeln!(out, "{} {}", SUCCESS_MARK.green(), msg.green());
    } else {
        let _ = writeln!(err, "Error: {} already exists", CONFIG_FILE_NAME);
    }
}
