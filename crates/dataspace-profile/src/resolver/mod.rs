//! Static participant identifiers keyed by protocol.
//!
//! [`ParticipantIdResolver`] answers which identifier this connector
//! presents for a protocol, independently of any claims. Protocols without
//! an entry get the fixed default supplied at construction.

use std::collections::HashMap;

use tracing::debug;

/// Tracing target for participant resolution.
const RESOLVER_TARGET: &str = concat!(env!("CARGO_PKG_NAME"), "::resolver");

/// Maps protocol names to fixed participant identifiers.
///
/// # Example
///
/// ```
/// use dataspace_profile::ParticipantIdResolver;
///
/// let mut resolver = ParticipantIdResolver::new("org-default");
/// assert_eq!(resolver.resolve_for("p1"), "org-default");
///
/// resolver.register("p1", "org-1");
/// assert_eq!(resolver.resolve_for("p1"), "org-1");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParticipantIdResolver {
    ids: HashMap<String, String>,
    default_participant_id: String,
}

impl ParticipantIdResolver {
    /// Creates a resolver with the identifier used for unknown protocols.
    #[must_use]
    pub fn new(default_participant_id: impl Into<String>) -> Self {
        Self {
            ids: HashMap::new(),
            default_participant_id: default_participant_id.into(),
        }
    }

    /// Returns the identifier registered for `protocol`, or the default.
    #[must_use]
    pub fn resolve_for(&self, protocol: &str) -> &str {
        self.ids
            .get(protocol)
            .map_or(self.default_participant_id.as_str(), String::as_str)
    }

    /// Registers the identifier for `protocol`; the last write wins.
    pub fn register(&mut self, protocol: impl Into<String>, participant_id: impl Into<String>) {
        let protocol = protocol.into();
        let participant_id = participant_id.into();
        debug!(
            target: RESOLVER_TARGET,
            protocol = protocol.as_str(),
            participant_id = participant_id.as_str(),
            "registering participant id"
        );
        self.ids.insert(protocol, participant_id);
    }

    /// Returns the identifier used for protocols without an entry.
    #[must_use]
    pub const fn default_participant_id(&self) -> &str {
        self.default_participant_id.as_str()
    }
}
