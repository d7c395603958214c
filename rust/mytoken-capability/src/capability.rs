//! The [`Capability`] identifier type.
//!
//! On the wire a capability is a plain string such as `tokeninfo:history` or
//! `read@settings`. This module parses that string once into a read-only flag
//! and a list of path segments, and formats it back without loss.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::CapabilityError;

/// Prefix marking a capability as granting read access only.
pub const READ_ONLY_PREFIX: &str = "read@";

/// Separator between the segments of a capability path.
pub const SEGMENT_DELIMITER: char = ':';

/// A capability identifier, parsed into its read-only flag and path.
///
/// Construction through [`Capability::new`] (and the `From` conversions) is
/// lenient and never fails: whatever follows the optional `read@` marker is
/// split on `:` as-is. Use [`FromStr`] to reject malformed identifiers.
///
/// Formatting a capability always yields exactly the string it was parsed
/// from.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Capability {
    read_only: bool,
    segments: Vec<String>,
}

impl Capability {
    /// Parse an identifier without validating it.
    pub fn new(identifier: &str) -> Self {
        let (read_only, path) = match identifier.strip_prefix(READ_ONLY_PREFIX) {
            Some(path) => (true, path),
            None => (false, identifier),
        };

        Self {
            read_only,
            segments: path.split(SEGMENT_DELIMITER).map(str::to_owned).collect(),
        }
    }

    /// Returns true if this capability carries the `read@` marker.
    pub fn is_read_only(&self) -> bool {
        self.read_only
    }

    /// The path segments, most general first.
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Number of path segments.
    pub fn depth(&self) -> usize {
        self.segments.len()
    }

    /// The path without the read-only marker, e.g. `settings:grants`.
    pub fn path(&self) -> String {
        self.segments.join(&SEGMENT_DELIMITER.to_string())
    }

    /// The same path, restricted to read access.
    pub fn to_read_only(&self) -> Self {
        Self {
            read_only: true,
            segments: self.segments.clone(),
        }
    }

    /// The same path, with the read-only marker removed.
    pub fn to_full_access(&self) -> Self {
        Self {
            read_only: false,
            segments: self.segments.clone(),
        }
    }

    /// The capability one level up the hierarchy, keeping the read-only
    /// marker. Returns `None` for a single segment path.
    pub fn parent(&self) -> Option<Self> {
        match self.segments.split_last() {
            Some((_, rest)) if !rest.is_empty() => Some(Self {
                read_only: self.read_only,
                segments: rest.to_vec(),
            }),
            _ => None,
        }
    }

    /// Returns true if `parent` already grants everything this capability
    /// grants.
    ///
    /// The parent's path must be a segment-wise prefix of this path, and a
    /// read-only parent never covers a capability with full access. An
    /// identical capability counts as a parent; see
    /// [`Capability::is_strict_child_of`] to exclude it.
    pub fn is_child_of(&self, parent: &Capability) -> bool {
        if parent.read_only && !self.read_only {
            return false;
        }
        if parent.segments.len() > self.segments.len() {
            return false;
        }
        parent
            .segments
            .iter()
            .zip(&self.segments)
            .all(|(parent, own)| parent == own)
    }

    /// Like [`Capability::is_child_of`], but false for an identical
    /// capability.
    pub fn is_strict_child_of(&self, parent: &Capability) -> bool {
        self != parent && self.is_child_of(parent)
    }
}

impl From<&str> for Capability {
    fn from(value: &str) -> Self {
        Capability::new(value)
    }
}

impl From<String> for Capability {
    fn from(value: String) -> Self {
        Capability::new(&value)
    }
}

impl From<&Capability> for String {
    fn from(value: &Capability) -> Self {
        value.to_string()
    }
}

impl From<Capability> for String {
    fn from(value: Capability) -> Self {
        value.to_string()
    }
}

impl FromStr for Capability {
    type Err = CapabilityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let capability = Capability::new(s);

        if capability.segments.iter().all(String::is_empty) {
            return Err(CapabilityError::Empty {
                identifier: s.to_owned(),
            });
        }
        if capability.segments.iter().any(String::is_empty) {
            return Err(CapabilityError::EmptySegment {
                identifier: s.to_owned(),
            });
        }

        Ok(capability)
    }
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.read_only {
            f.write_str(READ_ONLY_PREFIX)?;
        }
        f.write_str(&self.path())
    }
}

impl fmt::Debug for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Capability({self})")
    }
}

impl Serialize for Capability {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Capability {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
