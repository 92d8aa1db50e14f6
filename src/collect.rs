//! Collector: validates declarations and builds the [`Registry`].

use std::{collections::HashMap, fs, path::Path};

use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

use crate::{
    access::AccessBits,
    error::{HintError, HintResult},
    hint::{AccessSpec, Declaration, HintEntry, Registry},
};

/// How repeated triggers are treated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TriggerPolicy {
    /// Each declaration becomes its own entry, even for a repeated trigger.
    #[default]
    AllowRepeats,
    /// A trigger may be declared once; repeats fail with `DuplicateTrigger`.
    Unique,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Collector {
    policy: TriggerPolicy,
}

impl Collector {
    pub fn new(policy: TriggerPolicy) -> Self {
        Self { policy }
    }

    /// Validate every declaration and build a registry in input order.
    ///
    /// Fails on the first invalid declaration; nothing is collected then.
    pub fn collect<I>(&self, declarations: I) -> HintResult<Registry>
    where
        I: IntoIterator<Item = Declaration>,
    {
        let mut entries = Vec::new();
        let mut seen: HashMap<String, usize> = HashMap::new();

        for (index, decl) in declarations.into_iter().enumerate() {
            let number = index + 1;
            let entry = validate(decl)?;

            if self.policy == TriggerPolicy::Unique {
                if let Some(&first) = seen.get(entry.trigger()) {
                    return Err(HintError::DuplicateTrigger {
                        trigger: entry.trigger().to_string(),
                        first,
                        second: number,
                    });
                }
                seen.insert(entry.trigger().to_string(), number);
            }

            debug!(
                trigger = entry.trigger(),
                types = entry.type_count(),
                access = %entry.access(),
                "collected hint #{number}"
            );
            entries.push(entry);
        }

        Ok(Registry::from_entries(entries))
    }
}

/// Collect with the default policy (repeated triggers allowed).
pub fn collect<I>(declarations: I) -> HintResult<Registry>
where
    I: IntoIterator<Item = Declaration>,
{
    Collector::default().collect(declarations)
}

fn validate(decl: Declaration) -> HintResult<HintEntry> {
    let Declaration {
        trigger,
        types,
        type_names,
        access,
    } = decl;

    let trigger = trigger.trim().to_string();
    if trigger.is_empty() {
        return Err(HintError::validation("<empty>", "trigger", "must not be empty"));
    }
    if trigger.chars().any(char::is_whitespace) {
        return Err(HintError::validation(
            trigger,
            "trigger",
            "must not contain whitespace",
        ));
    }

    let access = parse_access(&trigger, &access)?;
    Ok(HintEntry::new(trigger, types, type_names, access))
}

fn parse_access(trigger: &str, spec: &AccessSpec) -> HintResult<AccessBits> {
    let bits = match spec {
        AccessSpec::Mask(raw) => AccessBits::from_raw(*raw).map_err(|unknown| {
            HintError::validation(trigger, "access", format!("undefined bits {unknown:#x}"))
        })?,
        AccessSpec::Names(names) => AccessBits::from_names(names).map_err(|name| {
            HintError::validation(trigger, "access", format!("unknown access bit '{name}'"))
        })?,
        AccessSpec::Other(value) => {
            return Err(HintError::validation(trigger, "access", describe_bad_access(value)));
        }
    };

    // reflect-config has no way to grant member access to an unregistered type.
    if !bits.contains(AccessBits::CLASS) {
        return Err(HintError::validation(
            trigger,
            "access",
            format!("mask {bits} does not include CLASS"),
        ));
    }

    Ok(bits)
}

fn describe_bad_access(value: &Value) -> String {
    match value {
        Value::Number(_) => format!("mask must be a non-negative integer, got {value}"),
        Value::String(_) => format!("bit names must be given as a list, got {value}"),
        _ => format!("expected an integer mask or a list of bit names, got {value}"),
    }
}

/// On-disk descriptor: `{ "hints": [ ... ] }`.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct Descriptor {
    #[serde(default)]
    hints: Vec<Declaration>,
}

/// Parse descriptor content. `origin` names the source in error messages.
pub fn parse_descriptor(content: &str, origin: &str) -> HintResult<Vec<Declaration>> {
    let descriptor: Descriptor = serde_json::from_str(content)
        .map_err(|err| HintError::validation(origin, "descriptor", err.to_string()))?;
    Ok(descriptor.hints)
}

/// Read and parse a descriptor file.
pub fn load_descriptor(path: &Path) -> HintResult<Vec<Declaration>> {
    let content = fs::read_to_string(path).map_err(|err| HintError::io(path, err))?;
    let hints = parse_descriptor(&content, &path.display().to_string())?;
    debug!(path = %path.display(), count = hints.len(), "loaded descriptor");
    Ok(hints)
}
