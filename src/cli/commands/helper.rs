//! Settings resolution and hint loading shared by the commands.

use std::{
    env,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result, bail};
use tracing::debug;

use super::super::args::CommonArgs;
use crate::{
    catalog,
    collect::{Collector, TriggerPolicy, load_descriptor},
    config::load_config,
    error::HintResult,
    hint::{Declaration, Registry},
    scan::scan_descriptors,
};

pub const BUILTIN_ORIGIN: &str = "<builtin>";

/// Effective settings: config file values with CLI overrides applied.
#[derive(Debug)]
pub struct Settings {
    pub cwd: PathBuf,
    /// Directory `descriptors` resolve against.
    pub root: PathBuf,
    pub descriptors: Vec<String>,
    /// Descriptors were named on the command line, so each must match.
    pub descriptors_required: bool,
    pub builtin: bool,
    pub policy: TriggerPolicy,
    pub triggers: Vec<String>,
    pub output: PathBuf,
}

impl Settings {
    /// `path` relative to the working directory, for display.
    pub fn display_path(&self, path: &Path) -> String {
        path.strip_prefix(&self.cwd)
            .unwrap_or(path)
            .display()
            .to_string()
    }
}

pub fn resolve_settings(common: &CommonArgs, output: Option<&Path>) -> Result<Settings> {
    let cwd = env::current_dir().context("Failed to determine current directory")?;
    resolve_settings_in(&cwd, common, output)
}

pub fn resolve_settings_in(
    cwd: &Path,
    common: &CommonArgs,
    output: Option<&Path>,
) -> Result<Settings> {
    let loaded = load_config(cwd)?;
    let config = loaded.config;

    let output = match output {
        Some(path) => cwd.join(path),
        None => loaded.root.join(&config.output),
    };

    let descriptors_required = !common.descriptors.is_empty();
    let (root, descriptors) = if descriptors_required {
        (cwd.to_path_buf(), common.descriptors.clone())
    } else {
        (loaded.root.clone(), config.descriptors)
    };

    let triggers = if common.triggers.is_empty() {
        config.triggers
    } else {
        common.triggers.clone()
    };
    if triggers.iter().any(|t| t.trim().is_empty()) {
        bail!("--trigger must not be blank");
    }

    let policy = if common.unique_triggers || config.unique_triggers {
        TriggerPolicy::Unique
    } else {
        TriggerPolicy::AllowRepeats
    };

    debug!(
        config = loaded.from_file,
        root = %root.display(),
        output = %output.display(),
        "resolved settings"
    );

    Ok(Settings {
        cwd: cwd.to_path_buf(),
        root,
        descriptors,
        descriptors_required,
        builtin: common.builtin || config.builtin,
        policy,
        triggers,
        output,
    })
}

/// Declarations from one origin, or the error that prevented loading them.
pub struct Source {
    pub origin: String,
    pub declarations: HintResult<Vec<Declaration>>,
}

pub struct Sources {
    pub sources: Vec<Source>,
    pub warnings: Vec<String>,
}

/// Load the bundled catalog (if enabled) followed by every descriptor file.
pub fn load_sources(settings: &Settings, verbose: bool) -> Result<Sources> {
    let scan = scan_descriptors(&settings.root, &settings.descriptors, verbose)?;

    if settings.descriptors_required && !scan.unmatched.is_empty() {
        bail!("No descriptor found for: {}", scan.unmatched.join(", "));
    }

    let warnings = scan
        .unmatched
        .iter()
        .map(|source| format!("descriptor source '{}' matched no files", source))
        .collect();

    let mut sources = Vec::new();
    if settings.builtin {
        sources.push(Source {
            origin: BUILTIN_ORIGIN.to_string(),
            declarations: Ok(catalog::reactive_web()),
        });
    }
    for path in scan.files {
        sources.push(Source {
            origin: settings.display_path(&path),
            declarations: load_descriptor(&path),
        });
    }

    Ok(Sources { sources, warnings })
}

/// Collect every source into one registry, failing on the first error.
pub fn collect_registry(settings: &Settings, sources: Vec<Source>) -> Result<Registry> {
    let mut declarations = Vec::new();
    for source in sources {
        let loaded = source
            .declarations
            .with_context(|| format!("Failed to load hints from {}", source.origin))?;
        declarations.extend(loaded);
    }

    let registry = Collector::new(settings.policy).collect(declarations)?;
    Ok(registry.retain_triggers(&settings.triggers)?)
}
