//! Identity extraction capability.
//!
//! An [`IdentityExtractor`] maps a verified [`ClaimToken`] to the
//! participant identifier of the caller. Extractors are shared read-only
//! between the registry and the dispatch, so they are handed around as
//! [`SharedExtractor`] values.
//!
//! The [`ExtractorTable`] holds the per-protocol fallback discipline both
//! components use: a protocol-specific extractor when one is installed,
//! otherwise the one stored under [`DEFAULT_EXTRACTOR_KEY`].

mod catalog;
mod credential;

#[cfg(test)]
mod tests;

use std::collections::HashMap;
use std::sync::Arc;

use crate::claims::ClaimToken;

pub use self::catalog::{CREDENTIAL_SUBJECT_EXTRACTOR, ExtractorCatalog};
pub use self::credential::CredentialSubjectExtractor;

/// Reserved key under which the fallback extractor is stored.
pub const DEFAULT_EXTRACTOR_KEY: &str = "default";

/// Strategy deriving a participant identifier from a claims bag.
///
/// Closures with the matching signature implement the trait, so ad-hoc
/// strategies need no named type.
///
/// # Example
///
/// ```
/// use dataspace_profile::ClaimToken;
/// use dataspace_profile::extractor::IdentityExtractor;
///
/// let fixed = |_: &ClaimToken| Some(String::from("did:web:fixed"));
/// assert_eq!(fixed.extract(&ClaimToken::new()).as_deref(), Some("did:web:fixed"));
/// ```
pub trait IdentityExtractor: Send + Sync {
    /// Returns the participant identifier, or `None` when the claims carry
    /// no identity this strategy recognises.
    fn extract(&self, claims: &ClaimToken) -> Option<String>;
}

impl<F> IdentityExtractor for F
where
    F: Fn(&ClaimToken) -> Option<String> + Send + Sync,
{
    fn extract(&self, claims: &ClaimToken) -> Option<String> {
        self(claims)
    }
}

/// Extractor shared between registries.
pub type SharedExtractor = Arc<dyn IdentityExtractor>;

/// Wraps an extractor for sharing.
#[must_use]
pub fn shared<E>(extractor: E) -> SharedExtractor
where
    E: IdentityExtractor + 'static,
{
    Arc::new(extractor)
}

/// Protocol-keyed extractors with a fallback that always exists.
///
/// The fallback is a constructor argument, so lookups are total.
#[derive(Clone)]
pub struct ExtractorTable {
    fallback: SharedExtractor,
    by_protocol: HashMap<String, SharedExtractor>,
}

impl ExtractorTable {
    /// Creates a table seeded with the fallback extractor.
    #[must_use]
    pub fn new(fallback: SharedExtractor) -> Self {
        Self {
            fallback,
            by_protocol: HashMap::new(),
        }
    }

    /// Installs or replaces the extractor for `protocol`.
    ///
    /// [`DEFAULT_EXTRACTOR_KEY`] addresses the fallback itself.
    pub fn install(&mut self, protocol: impl Into<String>, extractor: SharedExtractor) {
        let protocol = protocol.into();
        if protocol == DEFAULT_EXTRACTOR_KEY {
            self.fallback = extractor;
        } else {
            self.by_protocol.insert(protocol, extractor);
        }
    }

    /// Replaces the fallback extractor.
    pub fn override_default(&mut self, extractor: SharedExtractor) {
        self.fallback = extractor;
    }

    /// Returns the extractor for `protocol`, falling back to the default.
    #[must_use]
    pub fn resolve(&self, protocol: &str) -> &SharedExtractor {
        self.by_protocol.get(protocol).unwrap_or(&self.fallback)
    }

    /// Returns the current fallback extractor.
    #[must_use]
    pub const fn fallback(&self) -> &SharedExtractor {
        &self.fallback
    }

    /// Returns `true` when `protocol` has a dedicated extractor.
    #[must_use]
    pub fn has_dedicated(&self, protocol: &str) -> bool {
        self.by_protocol.contains_key(protocol)
    }
}

impl std::fmt::Debug for ExtractorTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut protocols: Vec<&str> = self.by_protocol.keys().map(String::as_str).collect();
        protocols.sort_unstable();
        f.debug_struct("ExtractorTable")
            .field("dedicated", &protocols)
            .finish_non_exhaustive()
    }
}
