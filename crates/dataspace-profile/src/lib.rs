//! Protocol profile dispatch for a multi-protocol dataspace connector.
//!
//! Given the name of a wire protocol, the `dataspace-profile` crate answers
//! three questions: which protocol version and webhook apply, which identity
//! extraction strategy turns a verified claims bag into a participant
//! identifier, and which fixed participant identifier this connector
//! presents.
//!
//! # Architecture
//!
//! - [`ProfileContextRegistry`] holds default-tier and standard-tier
//!   [`DataspaceProfileContext`] declarations. A single standard-tier
//!   registration hides the whole default tier from every later query.
//! - [`IdExtractionDispatch`] resolves an [`IdentityExtractor`] per protocol
//!   and rejects absent or blank identifiers.
//! - [`ParticipantIdResolver`] maps protocols to fixed identifiers with a
//!   constant fallback.
//! - [`CredentialSubjectExtractor`] is the default strategy: the first
//!   credential-subject identifier found in the presented credentials.
//!
//! Components are populated during start-up and read concurrently afterwards.
//! The [`bootstrap`] module builds them from a
//! [`dataspace_profile_config::Config`] and freezes them into shareable
//! [`ProfileServices`].
//!
//! # Example
//!
//! ```rust
//! use dataspace_profile::bootstrap::wire;
//! use dataspace_profile::{ClaimToken, ExtractorCatalog};
//! use dataspace_profile_config::Config;
//!
//! let config = Config::from_toml_str(
//!     r#"
//! [[profiles]]
//! name = "dataspace-protocol-http:2025-1"
//! version = "2025-1"
//! path = "/2025/1"
//! webhook = "https://provider.example/protocol/2025/1"
//! "#,
//! )
//! .expect("valid configuration");
//!
//! let services = wire(&config, &ExtractorCatalog::with_builtins())
//!     .expect("wiring succeeds")
//!     .freeze();
//!
//! let registry = services.registry();
//! assert_eq!(registry.protocol_versions().len(), 1);
//! assert!(services
//!     .dispatch()
//!     .extract_id(&ClaimToken::new(), "dataspace-protocol-http:2025-1")
//!     .is_err());
//! ```

pub mod bootstrap;
pub mod claims;
pub mod dispatch;
pub mod error;
pub mod extractor;
pub mod profile;
pub mod registry;
pub mod resolver;

#[cfg(test)]
mod tests;

pub use self::bootstrap::{BootstrapError, ProfileServices, ProfileWiring};
pub use self::claims::{ClaimToken, ClaimValue, CredentialSubject, VerifiableCredential};
pub use self::dispatch::IdExtractionDispatch;
pub use self::error::ProfileError;
pub use self::extractor::{
    CredentialSubjectExtractor, ExtractorCatalog, IdentityExtractor, SharedExtractor,
};
pub use self::profile::{
    DataspaceProfileContext, ProtocolVersion, ProtocolVersions, ProtocolWebhook,
};
pub use self::registry::ProfileContextRegistry;
pub use self::resolver::ParticipantIdResolver;
