//! Error taxonomy for collecting and emitting hints.
//!
//! Every variant is fatal to the current run. Messages name the trigger and
//! the offending field so a bad declaration can be located in its source.

use std::{io, path::PathBuf};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum HintError {
    /// A declaration is malformed (empty trigger, unknown access bits, ...).
    #[error("invalid hint for '{trigger}': {field}: {message}")]
    Validation {
        trigger: String,
        field: &'static str,
        message: String,
    },

    /// Raised only under the unique-trigger policy.
    #[error("trigger '{trigger}' is declared more than once (declarations #{first} and #{second})")]
    DuplicateTrigger {
        trigger: String,
        first: usize,
        second: usize,
    },

    /// A type identifier cannot be represented in reflect-config.
    #[error("cannot encode type '{type_name}' for '{trigger}': {reason}")]
    Serialization {
        trigger: String,
        type_name: String,
        reason: String,
    },

    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl HintError {
    pub(crate) fn validation(
        trigger: impl Into<String>,
        field: &'static str,
        message: impl Into<String>,
    ) -> Self {
        HintError::Validation {
            trigger: trigger.into(),
            field,
            message: message.into(),
        }
    }

    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        HintError::Io {
            path: path.into(),
            source,
        }
    }
}

pub type HintResult<T> = std::result::Result<T, HintError>;
