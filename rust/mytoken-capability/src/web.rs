//! Web bindings for the `mytoken-capability` crate.
//!
//! Example usage in JavaScript:
//!
//! ```ignore
//! // This is JavaScript code that uses the WASM bindings, not a Rust doctest
//! import { resolveCapabilities, capabilityRequest } from "mytoken-capability";
//!
//! const checked = $('.capability-check:checked').map((_, el) => $(el).val()).get();
//! const capabilities = resolveCapabilities(checked);
//!
//! const body = JSON.parse(capabilityRequest(checked, subtokenChecked));
//! ```

use wasm_bindgen::prelude::*;

use crate::{Capability, CapabilityError, CapabilityRequest, danger_level, description_for};

impl From<CapabilityError> for JsValue {
    fn from(value: CapabilityError) -> Self {
        format!("{value}").into()
    }
}

/// Reduce the requested capabilities to a minimal covering list
#[wasm_bindgen(js_name = "resolveCapabilities")]
pub fn resolve_capabilities(requested: Vec<String>) -> Vec<String> {
    crate::resolve(requested)
}

/// Returns true if `parent` already grants `child`
#[wasm_bindgen(js_name = "isChildCapability")]
pub fn is_child_capability(child: String, parent: String) -> bool {
    Capability::new(&child).is_child_of(&Capability::new(&parent))
}

/// Describe a capability for the consent screen
#[wasm_bindgen(js_name = "describeCapability")]
pub fn describe_capability(name: String) -> Option<String> {
    description_for(&Capability::new(&name)).map(str::to_owned)
}

/// The danger level of a capability (`normal`, `warning` or `danger`)
#[wasm_bindgen(js_name = "capabilityDangerLevel")]
pub fn capability_danger_level(name: String) -> Option<String> {
    danger_level(&Capability::new(&name)).map(|level| level.to_string())
}

/// Build the JSON encoded capability fields of a mytoken request
#[wasm_bindgen(js_name = "capabilityRequest")]
pub fn capability_request(requested: Vec<String>, subtoken: Vec<String>) -> Result<String, JsValue> {
    Ok(CapabilityRequest::new(requested, subtoken).to_json()?)
}
