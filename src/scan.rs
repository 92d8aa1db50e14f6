//! Descriptor discovery.
//!
//! Each configured source is one of:
//! - a glob pattern (contains `*` or `?`), expanded relative to the root
//! - a directory, searched recursively for `*.json` files
//! - a plain file path
//!
//! Results are sorted within each source and deduplicated across sources so
//! repeated runs see descriptors in the same order.

use std::{
    collections::HashSet,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use colored::Colorize;
use glob::glob;
use walkdir::WalkDir;

fn is_glob_pattern(pattern: &str) -> bool {
    pattern.contains('*') || pattern.contains('?')
}

fn is_descriptor_file(path: &Path) -> bool {
    path.is_file() && path.extension().and_then(|e| e.to_str()) == Some("json")
}

/// Result of resolving descriptor sources.
#[derive(Debug, Default)]
pub struct ScanResult {
    pub files: Vec<PathBuf>,
    /// Sources that matched nothing.
    pub unmatched: Vec<String>,
}

pub fn scan_descriptors(root: &Path, sources: &[String], verbose: bool) -> Result<ScanResult> {
    let mut result = ScanResult::default();
    let mut seen: HashSet<PathBuf> = HashSet::new();

    for source in sources {
        let base = root.join(source);
        let mut found: Vec<PathBuf> = Vec::new();

        if is_glob_pattern(source) {
            let pattern = base.to_string_lossy();
            let entries = glob(&pattern)
                .with_context(|| format!("Invalid descriptor pattern: \"{}\"", source))?;
            found.extend(entries.flatten().filter(|p| is_descriptor_file(p)));
        } else if base.is_dir() {
            for entry in WalkDir::new(&base) {
                let entry = match entry {
                    Ok(e) => e,
                    Err(e) => {
                        if verbose {
                            eprintln!("{} Cannot access path: {}", "warning:".bold().yellow(), e);
                        }
                        continue;
                    }
                };
                if is_descriptor_file(entry.path()) {
                    found.push(entry.into_path());
                }
            }
        } else if base.exists() {
            found.push(base);
        }

        if found.is_empty() {
            result.unmatched.push(source.clone());
            continue;
        }

        found.sort();
        for path in found {
            if seen.insert(path.clone()) {
                result.files.push(path);
            }
        }
    }

    Ok(result)
}
