//! Reflective access bits and their reflect-config encoding.
//!
//! Each bit maps to one capability from GraalVM's `reflect-config.json`
//! schema. `CLASS` has no flag of its own: a record naming the type is what
//! registers it. The remaining bits map one-to-one onto the schema's boolean
//! keys through [`MEMBER_FLAGS`].

use std::fmt;

use bitflags::bitflags;

bitflags! {
    /// Reflective capabilities granted to a set of types.
    #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
    pub struct AccessBits: u32 {
        /// The type itself is registered (`Class.forName` succeeds).
        const CLASS = 1 << 0;
        const DECLARED_CONSTRUCTORS = 1 << 1;
        const PUBLIC_CONSTRUCTORS = 1 << 2;
        const DECLARED_METHODS = 1 << 3;
        const PUBLIC_METHODS = 1 << 4;
        const DECLARED_FIELDS = 1 << 5;
        const PUBLIC_FIELDS = 1 << 6;
    }
}

/// Member bits and the reflect-config key each one sets to `true`.
///
/// Order here is the order flags appear in emitted records.
pub const MEMBER_FLAGS: &[(AccessBits, &str)] = &[
    (AccessBits::DECLARED_CONSTRUCTORS, "allDeclaredConstructors"),
    (AccessBits::PUBLIC_CONSTRUCTORS, "allPublicConstructors"),
    (AccessBits::DECLARED_METHODS, "allDeclaredMethods"),
    (AccessBits::PUBLIC_METHODS, "allPublicMethods"),
    (AccessBits::DECLARED_FIELDS, "allDeclaredFields"),
    (AccessBits::PUBLIC_FIELDS, "allPublicFields"),
];

impl AccessBits {
    /// Build a mask from a raw integer, rejecting undefined bits.
    ///
    /// On failure the undefined bits are returned.
    pub fn from_raw(raw: u64) -> Result<Self, u64> {
        let known = u64::from(Self::all().bits());
        let unknown = raw & !known;
        if unknown != 0 {
            return Err(unknown);
        }
        // Fits: every remaining bit is one of ours.
        Ok(Self::from_bits_retain(raw as u32))
    }

    /// Build a mask from symbolic names such as `"PUBLIC_METHODS"`.
    ///
    /// Names are matched case-insensitively. On failure the first unknown
    /// name is returned.
    pub fn from_names<S: AsRef<str>>(names: &[S]) -> Result<Self, String> {
        let mut bits = Self::empty();
        for name in names {
            let name = name.as_ref().trim();
            match Self::from_name(&name.to_ascii_uppercase()) {
                Some(flag) => bits |= flag,
                None => return Err(name.to_string()),
            }
        }
        Ok(bits)
    }

    /// Names of the bits set in this mask, in declaration order.
    pub fn names(&self) -> Vec<&'static str> {
        self.iter_names().map(|(name, _)| name).collect()
    }

    /// reflect-config keys that are `true` for this mask.
    pub fn json_flags(&self) -> Vec<&'static str> {
        MEMBER_FLAGS
            .iter()
            .filter(|(bit, _)| self.contains(*bit))
            .map(|(_, key)| *key)
            .collect()
    }

    /// Inverse of [`AccessBits::json_flags`] for a registered type.
    ///
    /// Returns `None` if any key is not part of the mapping table.
    pub fn from_json_flags<'a, I>(keys: I) -> Option<Self>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut bits = Self::CLASS;
        for key in keys {
            let (bit, _) = MEMBER_FLAGS.iter().find(|(_, k)| *k == key)?;
            bits |= *bit;
        }
        Some(bits)
    }
}

impl fmt::Display for AccessBits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("NONE");
        }
        f.write_str(&self.names().join("|"))
    }
}
