//! Hint declarations and the collected registry.

use serde::Deserialize;
use serde_json::Value;

use crate::{
    access::AccessBits,
    error::{HintError, HintResult},
};

/// Access as written in a descriptor: a raw mask or a list of bit names.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum AccessSpec {
    Mask(u64),
    Names(Vec<String>),
    /// Anything else; rejected during collection with the trigger named.
    Other(Value),
}

impl From<AccessBits> for AccessSpec {
    fn from(bits: AccessBits) -> Self {
        AccessSpec::Mask(u64::from(bits.bits()))
    }
}

/// A raw, unvalidated hint declaration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Declaration {
    pub trigger: String,
    /// Types known to be present when the trigger is.
    #[serde(default)]
    pub types: Vec<String>,
    /// Types from optional dependencies, referenced by name only.
    #[serde(default)]
    pub type_names: Vec<String>,
    pub access: AccessSpec,
}

impl Declaration {
    pub fn new(trigger: impl Into<String>, access: AccessBits) -> Self {
        Self {
            trigger: trigger.into(),
            types: Vec::new(),
            type_names: Vec::new(),
            access: access.into(),
        }
    }

    pub fn with_types<I, S>(mut self, types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.types.extend(types.into_iter().map(Into::into));
        self
    }

    pub fn with_type_names<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.type_names.extend(names.into_iter().map(Into::into));
        self
    }
}

/// One validated trigger-to-types association.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HintEntry {
    trigger: String,
    type_refs: Vec<String>,
    type_names: Vec<String>,
    access: AccessBits,
}

impl HintEntry {
    pub(crate) fn new(
        trigger: String,
        type_refs: Vec<String>,
        type_names: Vec<String>,
        access: AccessBits,
    ) -> Self {
        Self {
            trigger,
            type_refs,
            type_names,
            access,
        }
    }

    pub fn trigger(&self) -> &str {
        &self.trigger
    }

    pub fn type_refs(&self) -> &[String] {
        &self.type_refs
    }

    pub fn type_names(&self) -> &[String] {
        &self.type_names
    }

    pub fn access(&self) -> AccessBits {
        self.access
    }

    /// Resolved types first, then name-only types, each in declared order.
    pub fn all_types(&self) -> impl Iterator<Item = &str> {
        self.type_refs
            .iter()
            .chain(self.type_names.iter())
            .map(String::as_str)
    }

    pub fn type_count(&self) -> usize {
        self.type_refs.len() + self.type_names.len()
    }

    /// True if `name` is this entry's trigger, by full or simple name.
    ///
    /// The simple name is the last `.` or `$` segment, so `WebFluxAutoConfiguration`
    /// matches `org.springframework.boot.autoconfigure.web.reactive.WebFluxAutoConfiguration`
    /// and `BeanPostProcessorsRegistrar` matches `...Configuration$BeanPostProcessorsRegistrar`.
    pub fn matches_trigger(&self, name: &str) -> bool {
        self.trigger == name || simple_name(&self.trigger) == name
    }
}

fn simple_name(name: &str) -> &str {
    name.rsplit(['.', '$']).next().unwrap_or(name)
}

/// Ordered collection of hint entries, in declaration order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Registry {
    entries: Vec<HintEntry>,
}

impl Registry {
    pub(crate) fn from_entries(entries: Vec<HintEntry>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[HintEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn type_count(&self) -> usize {
        self.entries.iter().map(HintEntry::type_count).sum()
    }

    /// Keep only entries whose trigger matches one of `triggers`.
    ///
    /// An empty filter keeps everything. Every filter name must match at
    /// least one entry; otherwise a `Validation` error names it.
    pub fn retain_triggers<S: AsRef<str>>(self, triggers: &[S]) -> HintResult<Self> {
        if triggers.is_empty() {
            return Ok(self);
        }

        if let Some(unmatched) = triggers
            .iter()
            .map(AsRef::as_ref)
            .find(|t| !self.entries.iter().any(|entry| entry.matches_trigger(t)))
        {
            return Err(HintError::validation(
                unmatched,
                "trigger",
                "filter matches no declared trigger",
            ));
        }

        let entries = self
            .entries
            .into_iter()
            .filter(|entry| triggers.iter().any(|t| entry.matches_trigger(t.as_ref())))
            .collect();
        Ok(Self { entries })
    }
}

impl<'a> IntoIterator for &'a Registry {
    type Item = &'a HintEntry;
    type IntoIter = std::slice::Iter<'a, HintEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
