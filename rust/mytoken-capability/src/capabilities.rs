//! Capability sets and the resolver that reduces them to a minimal covering
//! set.

use serde::{Deserialize, Serialize};

use crate::Capability;

/// An ordered list of capabilities, as requested for or granted to a token.
///
/// Duplicates are allowed. Serializes as a JSON array of identifier strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Capabilities(Vec<Capability>);

impl Capabilities {
    /// An empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of entries, duplicates included.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if the set has no entries.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over the entries in order.
    pub fn iter(&self) -> std::slice::Iter<'_, Capability> {
        self.0.iter()
    }

    /// Append a capability.
    pub fn push(&mut self, capability: impl Into<Capability>) {
        self.0.push(capability.into());
    }

    /// The identifier strings, in order.
    pub fn strings(&self) -> Vec<String> {
        self.0.iter().map(String::from).collect()
    }

    /// Returns true if `capability` is granted by this set, i.e. it is equal
    /// to or a child of one of the entries.
    pub fn has(&self, capability: &Capability) -> bool {
        self.0.iter().any(|granted| capability.is_child_of(granted))
    }

    /// Removes every entry that another entry already covers.
    ///
    /// The result keeps the original order. When the same identifier occurs
    /// more than once only its first occurrence is kept.
    pub fn resolve(&self) -> Capabilities {
        let entries = &self.0;
        let mut resolved = Vec::with_capacity(entries.len());

        'candidates: for (index, candidate) in entries.iter().enumerate() {
            for (other_index, other) in entries.iter().enumerate() {
                if other_index == index || !candidate.is_child_of(other) {
                    continue;
                }
                // Of two identical entries only the later one is redundant
                if candidate == other && other_index > index {
                    continue;
                }
                tracing::debug!(
                    capability = %candidate,
                    covered_by = %other,
                    "Dropping redundant capability"
                );
                continue 'candidates;
            }
            resolved.push(candidate.clone());
        }

        Capabilities(resolved)
    }

    /// Restricts `requested` to what `self` grants.
    ///
    /// See [`tighten`].
    pub fn tighten(&self, requested: Option<&Capabilities>) -> Capabilities {
        tighten(self, requested)
    }
}

/// Reduce a list of requested capability identifiers to a minimal covering
/// list.
///
/// An identifier is dropped when another entry of the list covers it: its
/// path starts with the other entry's path (compared segment by segment),
/// and the other entry is not read-only unless this one is too. Repeated
/// identifiers are kept once, at their first position. The order of the
/// remaining identifiers is preserved, and they are returned exactly as
/// given.
///
/// ```rust
/// use mytoken_capability::resolve;
///
/// assert_eq!(resolve(["a", "a:b"]), vec!["a"]);
/// assert_eq!(resolve(["read@a", "a:b"]), vec!["read@a", "a:b"]);
/// ```
pub fn resolve<I, S>(requested: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    requested
        .into_iter()
        .map(|identifier| Capability::new(identifier.as_ref()))
        .collect::<Capabilities>()
        .resolve()
        .strings()
}

/// Restricts a `requested` capability set to what `granted` allows.
///
/// Without a request the granted set is returned as-is. Otherwise every
/// requested capability that `granted` [has](Capabilities::has) is kept, in
/// the requested order.
pub fn tighten(granted: &Capabilities, requested: Option<&Capabilities>) -> Capabilities {
    let Some(requested) = requested else {
        return granted.clone();
    };

    requested
        .iter()
        .filter(|capability| {
            let allowed = granted.has(capability);
            if !allowed {
                tracing::trace!(capability = %capability, "Capability not granted");
            }
            allowed
        })
        .cloned()
        .collect()
}

impl From<Vec<Capability>> for Capabilities {
    fn from(value: Vec<Capability>) -> Self {
        Self(value)
    }
}

impl From<Capabilities> for Vec<Capability> {
    fn from(value: Capabilities) -> Self {
        value.0
    }
}

impl<C> FromIterator<C> for Capabilities
where
    C: Into<Capability>,
{
    fn from_iter<T: IntoIterator<Item = C>>(iter: T) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

impl IntoIterator for Capabilities {
    type Item = Capability;
    type IntoIter = std::vec::IntoIter<Capability>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Capabilities {
    type Item = &'a Capability;
    type IntoIter = std::slice::Iter<'a, Capability>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
