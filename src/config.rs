use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Ok, Result, bail};
use glob::Pattern;
use serde::{Deserialize, Serialize};

pub const CONFIG_FILE_NAME: &str = ".hintrc.json";

pub const DEFAULT_OUTPUT: &str = "reflect-config.json";

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Descriptor files, directories or glob patterns.
    #[serde(default = "default_descriptors")]
    pub descriptors: Vec<String>,
    #[serde(default = "default_output")]
    pub output: String,
    /// Include the bundled reactive web hints.
    #[serde(default)]
    pub builtin: bool,
    #[serde(default)]
    pub unique_triggers: bool,
    /// Active triggers; empty means every trigger.
    #[serde(default)]
    pub triggers: Vec<String>,
}

fn default_descriptors() -> Vec<String> {
    vec!["hints".to_string()]
}

fn default_output() -> String {
    DEFAULT_OUTPUT.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            descriptors: default_descriptors(),
            output: default_output(),
            builtin: false,
            unique_triggers: false,
            triggers: Vec::new(),
        }
    }
}

impl Config {
    /// Validate configuration values.
    ///
    /// Returns an error for an empty output path, a blank trigger filter, or
    /// an invalid glob pattern in `descriptors`.
    pub fn validate(&self) -> Result<()> {
        if self.output.trim().is_empty() {
            bail!("'output' must not be empty");
        }

        if self.triggers.iter().any(|t| t.trim().is_empty()) {
            bail!("'triggers' must not contain blank names");
        }

        for pattern in &self.descriptors {
            if pattern.contains('*') || pattern.contains('?') {
                Pattern::new(pattern).with_context(|| {
                    format!("Invalid glob pattern in 'descriptors': \"{}\"", pattern)
                })?;
            }
        }

        Ok(())
    }
}

pub fn default_config_json() -> Result<String> {
    let config = Config::default();
    let json =
        serde_json::to_string_pretty(&config).context("Failed to generate default config.")?;
    Ok(format!("{}\n", json))
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
pub struct ConfigLoadResult {
    pub config: Config,
    /// Directory relative paths in the config resolve against: the config
    /// file's directory, or the start directory when using defaults.
    pub root: PathBuf,
    /// True if config was loaded from a file, false if using defaults.
    pub from_file: bool,
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read config file: {:?}", path))?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?;
            config.validate()?;
            let root = path
                .parent()
                .map(Path::to_path_buf)
                .unwrap_or_else(|| start_dir.to_path_buf());
            Ok(ConfigLoadResult {
                config,
                root,
                from_file: true,
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            root: start_dir.to_path_buf(),
            from_file: false,
        }),
    }
}
