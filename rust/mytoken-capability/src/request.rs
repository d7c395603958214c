use serde::{Deserialize, Serialize};

use crate::{Capabilities, Capability, CapabilityError};

/// Name of the capability that allows a token to create subtokens.
pub const CREATE_MYTOKEN: &str = "create_mytoken";

/// The capability fields of a mytoken creation request.
///
/// Serializes to the `capabilities` and `subtoken_capabilities` fields the
/// mytoken server expects. Identifiers are written exactly as they were
/// requested.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CapabilityRequest {
    /// Capabilities of the requested token.
    pub capabilities: Capabilities,
    /// Capabilities of tokens created with the requested token.
    #[serde(default, skip_serializing_if = "Capabilities::is_empty")]
    pub subtoken_capabilities: Capabilities,
}

impl CapabilityRequest {
    /// Build a request from the capabilities selected for a token and for its
    /// subtokens. Both lists are [resolved](Capabilities::resolve).
    ///
    /// Subtoken capabilities are dropped unless the token itself may create
    /// mytokens.
    pub fn new<I, J, S, T>(requested: I, subtoken: J) -> Self
    where
        I: IntoIterator<Item = S>,
        J: IntoIterator<Item = T>,
        S: AsRef<str>,
        T: AsRef<str>,
    {
        let capabilities = requested
            .into_iter()
            .map(|identifier| Capability::new(identifier.as_ref()))
            .collect::<Capabilities>()
            .resolve();

        let subtoken_capabilities = if capabilities.has(&Capability::new(CREATE_MYTOKEN)) {
            subtoken
                .into_iter()
                .map(|identifier| Capability::new(identifier.as_ref()))
                .collect::<Capabilities>()
                .resolve()
        } else {
            Capabilities::new()
        };

        Self {
            capabilities,
            subtoken_capabilities,
        }
    }

    /// Encode as the JSON request body fragment.
    pub fn to_json(&self) -> Result<String, CapabilityError> {
        Ok(serde_json::to_string(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use testresult::TestResult;

    #[test]
    fn it_resolves_both_lists() {
        let request = CapabilityRequest::new(
            ["AT", "create_mytoken", "tokeninfo:history", "tokeninfo"],
            ["AT", "read@AT"],
        );
        assert_eq!(
            request.capabilities.strings(),
            vec!["AT", "create_mytoken", "tokeninfo"]
        );
        assert_eq!(request.subtoken_capabilities.strings(), vec!["AT"]);
    }

    #[test]
    fn it_drops_subtoken_capabilities_without_create_mytoken() {
        let request = CapabilityRequest::new(["AT", "read@create_mytoken"], ["AT"]);
        assert!(request.subtoken_capabilities.is_empty());
    }

    #[test]
    fn it_encodes_the_request_fields() -> TestResult {
        let request = CapabilityRequest::new(["read@settings", "create_mytoken"], ["AT"]);
        assert_eq!(
            request.to_json()?,
            r#"{"capabilities":["read@settings","create_mytoken"],"subtoken_capabilities":["AT"]}"#
        );

        let request = CapabilityRequest::new(["AT"], Vec::<&str>::new());
        assert_eq!(request.to_json()?, r#"{"capabilities":["AT"]}"#);
        Ok(())
    }

    #[test]
    fn it_decodes_a_request_without_subtoken_capabilities() -> TestResult {
        let request: CapabilityRequest =
            serde_json::from_str(r#"{"capabilities":["AT","tokeninfo"]}"#)?;
        assert_eq!(request.capabilities.strings(), vec!["AT", "tokeninfo"]);
        assert!(request.subtoken_capabilities.is_empty());
        Ok(())
    }
}
