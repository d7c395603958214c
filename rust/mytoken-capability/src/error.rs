/// Errors that can occur when parsing or encoding capabilities.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CapabilityError {
    /// The identifier has no path at all.
    #[error("Capability \"{identifier}\" has an empty path")]
    Empty {
        /// The rejected identifier.
        identifier: String,
    },

    /// One of the `:` separated path segments is empty.
    #[error("Capability \"{identifier}\" contains an empty path segment")]
    EmptySegment {
        /// The rejected identifier.
        identifier: String,
    },

    /// Encoding a capability request failed.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for CapabilityError {
    fn from(value: serde_json::Error) -> Self {
        CapabilityError::Serialization(value.to_string())
    }
}
