#![warn(missing_docs)]

//! Capability identifiers and capability sets for mytoken tokens.
//!
//! A mytoken carries a list of capabilities that determine which operations
//! the token may be used for. Capabilities are hierarchical: an identifier is
//! a path of `:` separated segments read from most general to most specific,
//! optionally qualified as read-only with the `read@` prefix.
//!
//! ```text
//! tokeninfo                   → everything below tokeninfo
//!   ├── tokeninfo:introspect
//!   ├── tokeninfo:history
//!   └── tokeninfo:subtokens
//! read@settings               → read access to everything below settings
//! ```
//!
//! # Quick Example
//!
//! ```rust
//! use mytoken_capability::resolve;
//!
//! let resolved = resolve([
//!     "tokeninfo:history",
//!     "read@settings:grants",
//!     "tokeninfo",
//!     "settings",
//!     "read@AT",
//! ]);
//!
//! assert_eq!(resolved, vec!["tokeninfo", "settings", "read@AT"]);
//! ```
//!
//! # Child relation
//!
//! A capability is a *child* of another when the other's path is a
//! segment-wise prefix of its own path, unless the other is read-only and it
//! is not. A full access capability therefore covers the read-only variant of
//! the same path, while a read-only capability never covers a full access
//! one.
//!
//! | Type | Role |
//! |------|------|
//! | [`Capability`] | A parsed identifier (read-only flag + path) |
//! | [`Capabilities`] | An ordered capability set |
//! | [`KnownCapability`] | Catalog entry with description and [`DangerLevel`] |
//! | [`CapabilityRequest`] | The JSON body sent to the mytoken server |

mod error;
pub use error::*;

mod capability;
pub use capability::*;

mod capabilities;
pub use capabilities::*;

mod catalog;
pub use catalog::*;

mod request;
pub use request::*;

#[cfg(all(target_arch = "wasm32", target_os = "unknown"))]
pub mod web;
