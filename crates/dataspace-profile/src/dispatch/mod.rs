//! Protocol-keyed identity extraction with a strict result policy.
//!
//! [`IdExtractionDispatch`] is the standalone path for callers that only
//! need a participant identifier. It resolves extractors with the same
//! fallback rule as the profile registry but keeps its own table, and turns
//! an absent or blank identity into [`ProfileError::ExtractionFailed`].

use tracing::{debug, warn};

use crate::claims::ClaimToken;
use crate::error::ProfileError;
use crate::extractor::{ExtractorTable, SharedExtractor};

/// Tracing target for extraction dispatch.
pub(crate) const DISPATCH_TARGET: &str = concat!(env!("CARGO_PKG_NAME"), "::dispatch");

/// Dispatches identity extraction by protocol name.
///
/// # Example
///
/// ```
/// use dataspace_profile::{ClaimToken, IdExtractionDispatch, ProfileError, extractor};
///
/// let nobody = |_: &ClaimToken| -> Option<String> { None };
/// let mut dispatch = IdExtractionDispatch::new(extractor::shared(nobody));
/// dispatch.register_extraction_function(
///     "dataspace-protocol-http",
///     extractor::shared(|_: &ClaimToken| Some(String::from("did:web:consumer"))),
/// );
///
/// let claims = ClaimToken::new();
/// assert_eq!(
///     dispatch.extract_id(&claims, "dataspace-protocol-http").as_deref(),
///     Ok("did:web:consumer")
/// );
/// assert!(matches!(
///     dispatch.extract_id(&claims, "other"),
///     Err(ProfileError::ExtractionFailed { .. })
/// ));
/// ```
#[derive(Debug, Clone)]
pub struct IdExtractionDispatch {
    extractors: ExtractorTable,
}

impl IdExtractionDispatch {
    /// Creates a dispatch seeded with the fallback extractor.
    ///
    /// The table is independent of any
    /// [`ProfileContextRegistry`](crate::ProfileContextRegistry): overriding
    /// the registry's fallback does not change what this dispatch resolves,
    /// and the reverse holds too.
    #[must_use]
    pub fn new(default_extractor: SharedExtractor) -> Self {
        Self {
            extractors: ExtractorTable::new(default_extractor),
        }
    }

    /// Extracts the participant identifier for `protocol` from `claims`.
    ///
    /// # Errors
    ///
    /// Returns [`ProfileError::ExtractionFailed`] when the resolved extractor
    /// yields no identifier or one made only of whitespace.
    pub fn extract_id(&self, claims: &ClaimToken, protocol: &str) -> Result<String, ProfileError> {
        let dedicated = self.extractors.has_dedicated(protocol);
        match self.extractors.resolve(protocol).extract(claims) {
            Some(id) if !id.trim().is_empty() => {
                debug!(
                    target: DISPATCH_TARGET,
                    protocol,
                    dedicated,
                    "extracted participant id"
                );
                Ok(id)
            }
            _ => {
                warn!(
                    target: DISPATCH_TARGET,
                    protocol,
                    dedicated,
                    "identity extractor produced no participant id"
                );
                Err(ProfileError::ExtractionFailed {
                    protocol: protocol.to_owned(),
                })
            }
        }
    }

    /// Installs or replaces the extractor for `protocol`; the last write wins.
    pub fn register_extraction_function(
        &mut self,
        protocol: impl Into<String>,
        extractor: SharedExtractor,
    ) {
        let protocol = protocol.into();
        debug!(
            target: DISPATCH_TARGET,
            protocol = protocol.as_str(),
            "registering extraction function"
        );
        self.extractors.install(protocol, extractor);
    }

    /// Replaces the fallback extractor.
    pub fn override_default_extraction_function(&mut self, extractor: SharedExtractor) {
        debug!(target: DISPATCH_TARGET, "overriding default extraction function");
        self.extractors.override_default(extractor);
    }
}
