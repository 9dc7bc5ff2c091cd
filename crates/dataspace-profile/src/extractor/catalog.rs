//! Named extractors for configuration-driven wiring.

use std::collections::HashMap;

use crate::error::ProfileError;

use super::{CredentialSubjectExtractor, SharedExtractor, shared};

/// Catalog name of [`CredentialSubjectExtractor`].
pub const CREDENTIAL_SUBJECT_EXTRACTOR: &str = "credential-subject";

/// Extractors addressable by the names used in configuration.
#[derive(Clone, Default)]
pub struct ExtractorCatalog {
    entries: HashMap<String, SharedExtractor>,
}

impl ExtractorCatalog {
    /// Creates an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a catalog holding the built-in extractors.
    #[must_use]
    pub fn with_builtins() -> Self {
        let mut catalog = Self::new();
        catalog.insert(
            CREDENTIAL_SUBJECT_EXTRACTOR,
            shared(CredentialSubjectExtractor::new()),
        );
        catalog
    }

    /// Adds or replaces an extractor.
    pub fn insert(&mut self, name: impl Into<String>, extractor: SharedExtractor) {
        self.entries.insert(name.into(), extractor);
    }

    /// Looks up an extractor by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&SharedExtractor> {
        self.entries.get(name)
    }

    /// Looks up an extractor that configuration requires.
    ///
    /// # Errors
    ///
    /// Returns [`ProfileError::UnknownExtractor`] when nothing is registered
    /// under `name`.
    pub fn require(&self, name: &str) -> Result<SharedExtractor, ProfileError> {
        self.get(name)
            .cloned()
            .ok_or_else(|| ProfileError::UnknownExtractor {
                name: name.to_owned(),
            })
    }

    /// Returns the registered names in sorted order.
    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.entries.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

impl std::fmt::Debug for ExtractorCatalog {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ExtractorCatalog")
            .field("names", &self.names())
            .finish()
    }
}
