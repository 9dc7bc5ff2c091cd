//! Domain errors raised by profile dispatch.
//!
//! A missing webhook, version, or identity is not an error: lookups return
//! `None` and callers branch on it. The variants here cover the cases where
//! a caller asked for an identity and none could be produced, and where
//! configuration refers to a strategy that does not exist.

use thiserror::Error;

/// Errors arising from profile dispatch operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProfileError {
    /// The resolved extractor produced no usable participant identifier.
    #[error("failed to extract participant id for protocol '{protocol}'")]
    ExtractionFailed {
        /// Protocol the extraction was attempted for.
        protocol: String,
    },

    /// Configuration referred to an extractor that is not in the catalog.
    #[error("identity extractor '{name}' is not registered in the catalog")]
    UnknownExtractor {
        /// Name that was looked up.
        name: String,
    },
}
