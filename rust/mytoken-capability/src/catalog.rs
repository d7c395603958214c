//! Capabilities known to the mytoken server.
//!
//! The consent screen shows each requested capability with a description and
//! a color that reflects how much power it hands out. Both are looked up
//! here.

use std::fmt;

use serde::Serialize;

use crate::Capability;

/// How powerful a capability is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DangerLevel {
    /// Day to day use.
    Normal,
    /// Exposes information about other tokens.
    Warning,
    /// Changes account state or other tokens.
    Danger,
}

impl DangerLevel {
    /// A sentence describing this level to the user.
    pub fn describe(&self) -> &'static str {
        match self {
            DangerLevel::Normal => "This is a normal capability.",
            DangerLevel::Warning => "This is a powerful capability!",
            DangerLevel::Danger => "This is a very powerful capability!",
        }
    }
}

impl fmt::Display for DangerLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            DangerLevel::Normal => "normal",
            DangerLevel::Warning => "warning",
            DangerLevel::Danger => "danger",
        })
    }
}

/// A capability defined by the mytoken server.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct KnownCapability {
    /// The capability path, without a read-only marker.
    pub name: &'static str,
    /// Human readable description.
    pub description: &'static str,
    /// How powerful the full access variant is.
    pub level: DangerLevel,
}

const CATALOG: &[KnownCapability] = &[
    KnownCapability {
        name: "AT",
        description: "Allows obtaining OpenID Connect Access Tokens.",
        level: DangerLevel::Normal,
    },
    KnownCapability {
        name: "create_mytoken",
        description: "Allows to create a new mytoken.",
        level: DangerLevel::Normal,
    },
    KnownCapability {
        name: "tokeninfo",
        description: "Allows to obtain all information about this token.",
        level: DangerLevel::Normal,
    },
    KnownCapability {
        name: "tokeninfo:introspect",
        description: "Allows to obtain basic information about this token.",
        level: DangerLevel::Normal,
    },
    KnownCapability {
        name: "tokeninfo:history",
        description: "Allows to obtain the event history for this token.",
        level: DangerLevel::Normal,
    },
    KnownCapability {
        name: "tokeninfo:subtokens",
        description: "Allows to list a subtoken-tree for this token.",
        level: DangerLevel::Normal,
    },
    KnownCapability {
        name: "manage_mytokens",
        description: "Allows to manage all mytokens of the user.",
        level: DangerLevel::Warning,
    },
    KnownCapability {
        name: "manage_mytokens:list",
        description: "Allows to list all mytokens.",
        level: DangerLevel::Warning,
    },
    KnownCapability {
        name: "manage_mytokens:revoke",
        description: "Allows to revoke any mytoken of the user.",
        level: DangerLevel::Danger,
    },
    KnownCapability {
        name: "settings",
        description: "Allows to modify user settings.",
        level: DangerLevel::Danger,
    },
    KnownCapability {
        name: "settings:grants",
        description: "Allows to manage grant types.",
        level: DangerLevel::Danger,
    },
    KnownCapability {
        name: "settings:grants:ssh",
        description: "Allows to manage ssh keys.",
        level: DangerLevel::Danger,
    },
];

impl KnownCapability {
    /// Find a catalog entry by its exact name, ignoring ASCII case.
    pub fn lookup(name: &str) -> Option<&'static KnownCapability> {
        CATALOG
            .iter()
            .find(|known| known.name.eq_ignore_ascii_case(name))
    }

    /// Find the catalog entry for `capability`, or for its nearest known
    /// ancestor.
    pub fn for_capability(capability: &Capability) -> Option<&'static KnownCapability> {
        let mut current = Some(capability.to_full_access());
        while let Some(capability) = current {
            if let Some(known) = KnownCapability::lookup(&capability.path()) {
                return Some(known);
            }
            current = capability.parent();
        }
        None
    }

    /// This entry as a [`Capability`].
    pub fn capability(&self) -> Capability {
        Capability::new(self.name)
    }
}

/// All capabilities known to the mytoken server.
pub fn known_capabilities() -> impl Iterator<Item = &'static KnownCapability> {
    CATALOG.iter()
}

/// The description of `capability`, falling back to its nearest known
/// ancestor.
pub fn description_for(capability: &Capability) -> Option<&'static str> {
    KnownCapability::for_capability(capability).map(|known| known.description)
}

/// The danger level of `capability`. Read-only access is capped at
/// [`DangerLevel::Warning`]; unknown capabilities have no level.
pub fn danger_level(capability: &Capability) -> Option<DangerLevel> {
    let level = KnownCapability::for_capability(capability)?.level;
    if capability.is_read_only() {
        Some(level.min(DangerLevel::Warning))
    } else {
        Some(level)
    }
}
