//! Emitter: renders a [`Registry`] as GraalVM `reflect-config.json`.
//!
//! The output is a JSON array with one record per type per hint entry:
//!
//! ```json
//! [
//!   {
//!     "name": "org.springframework.http.codec.ClientCodecConfigurer",
//!     "allPublicConstructors": true
//!   }
//! ]
//! ```
//!
//! Records follow registry order, resolved types before name-only types.
//! Types listed under several triggers are emitted once per trigger; the
//! native-image compiler unions the flags.

use std::{
    fs,
    io::Write,
    path::{Path, PathBuf},
    sync::LazyLock,
};

use regex::Regex;
use serde_json::{Map, Value};
use tempfile::NamedTempFile;
use tracing::{debug, info};

use crate::{
    access::{AccessBits, MEMBER_FLAGS},
    error::{HintError, HintResult},
    hint::Registry,
};

/// Dotted JVM binary name, optionally an array type (`java.lang.String[]`).
static BINARY_NAME_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[\p{L}_$][\p{L}\p{N}_$]*(?:\.[\p{L}_$][\p{L}\p{N}_$]*)*(?:\[\])*$").unwrap()
});

/// One record of reflect-config, as read back by [`decode`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReflectRecord {
    pub name: String,
    pub access: AccessBits,
}

/// Result of a successful write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmitSummary {
    pub path: PathBuf,
    pub entries: usize,
    pub records: usize,
}

/// Check that `name` can be written as a reflect-config type name.
///
/// Nested classes must use the binary form `Outer$Inner`. The dotted form
/// `Outer.Inner` is also well-formed here, since the two cannot be told
/// apart without a classpath, but native-image will not resolve it.
///
/// Whitespace gets its own message: it is the usual mistake in
/// hand-written descriptors (a stray space or a pasted newline).
pub fn check_type_name(name: &str) -> Result<(), String> {
    if name.is_empty() {
        return Err("type name is empty".to_string());
    }
    if name.chars().any(char::is_whitespace) {
        return Err("type name contains whitespace".to_string());
    }
    if !BINARY_NAME_REGEX.is_match(name) {
        return Err("not a valid JVM binary name".to_string());
    }
    Ok(())
}

fn to_records(registry: &Registry) -> HintResult<Vec<Value>> {
    let mut records = Vec::with_capacity(registry.type_count());

    for entry in registry {
        let flags = entry.access().json_flags();
        for type_name in entry.all_types() {
            check_type_name(type_name).map_err(|reason| HintError::Serialization {
                trigger: entry.trigger().to_string(),
                type_name: type_name.to_string(),
                reason,
            })?;

            let mut record = Map::new();
            record.insert("name".to_string(), Value::String(type_name.to_string()));
            for flag in &flags {
                record.insert(flag.to_string(), Value::Bool(true));
            }
            records.push(Value::Object(record));
        }
    }

    Ok(records)
}

/// Render the registry to reflect-config text.
///
/// Uses 2-space indentation and a trailing newline. An empty registry
/// renders as `[]`.
pub fn render(registry: &Registry) -> HintResult<String> {
    let records = to_records(registry)?;
    let count = records.len();
    let content = serde_json::to_string_pretty(&Value::Array(records)).map_err(|err| {
        HintError::Serialization {
            trigger: "<registry>".to_string(),
            type_name: String::new(),
            reason: err.to_string(),
        }
    })?;
    debug!(entries = registry.len(), records = count, "rendered reflect-config");
    Ok(format!("{}\n", content))
}

/// Render the registry and atomically replace `path` with the result.
///
/// The content is written to a temporary file next to `path` and renamed
/// into place, so readers see either the old file or the complete new one.
/// On any error the destination is left untouched.
pub fn write(registry: Registry, path: &Path) -> HintResult<EmitSummary> {
    let content = render(&registry)?;

    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    fs::create_dir_all(parent).map_err(|err| HintError::io(parent, err))?;

    let mut temp = NamedTempFile::new_in(parent).map_err(|err| HintError::io(parent, err))?;
    temp.write_all(content.as_bytes())
        .and_then(|_| temp.as_file().sync_all())
        .map_err(|err| HintError::io(temp.path(), err))?;
    temp.persist(path)
        .map_err(|err| HintError::io(path, err.error))?;

    let summary = EmitSummary {
        path: path.to_path_buf(),
        entries: registry.len(),
        records: registry.type_count(),
    };
    info!(
        path = %path.display(),
        entries = summary.entries,
        records = summary.records,
        "wrote reflect-config"
    );
    Ok(summary)
}

/// Parse reflect-config text back into records.
///
/// Only the keys produced by [`render`] are accepted.
pub fn decode(content: &str) -> HintResult<Vec<ReflectRecord>> {
    let invalid = |message: String| HintError::validation("<reflect-config>", "record", message);

    let value: Value =
        serde_json::from_str(content).map_err(|err| invalid(err.to_string()))?;
    let Value::Array(items) = value else {
        return Err(invalid("root must be an array".to_string()));
    };

    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| {
            let Value::Object(map) = item else {
                return Err(invalid(format!("record #{} is not an object", index + 1)));
            };
            let name = match map.get("name") {
                Some(Value::String(name)) => name.clone(),
                _ => return Err(invalid(format!("record #{} has no name", index + 1))),
            };

            let mut keys = Vec::new();
            for (key, flag) in &map {
                if key == "name" {
                    continue;
                }
                match flag {
                    Value::Bool(true) => keys.push(key.as_str()),
                    Value::Bool(false) => {}
                    _ => return Err(invalid(format!("'{name}': {key} must be a boolean"))),
                }
            }
            let access = AccessBits::from_json_flags(keys.iter().copied())
                .ok_or_else(|| invalid(format!("'{name}': unsupported flag")))?;

            Ok(ReflectRecord { name, access })
        })
        .collect()
}

/// Keys a record can carry, in emission order.
pub fn known_keys() -> impl Iterator<Item = &'static str> {
    std::iter::once("name").chain(MEMBER_FLAGS.iter().map(|(_, key)| *key))
}
