//! Errors raised while loading or validating configuration.

use std::sync::Arc;

use camino::Utf8PathBuf;
use thiserror::Error;

/// Errors surfaced by [`Config`](crate::Config) loading and validation.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("failed to read configuration '{path}': {source}")]
    Read {
        /// Path that was read.
        path: Utf8PathBuf,
        /// Underlying I/O error.
        #[source]
        source: Arc<std::io::Error>,
    },

    /// The configuration text is not valid TOML for the schema.
    #[error("failed to parse configuration '{origin}': {source}")]
    Parse {
        /// File path, or `<inline>` for text parsed from memory.
        origin: String,
        /// Underlying TOML error.
        #[source]
        source: Box<toml::de::Error>,
    },

    /// The configuration parsed but violates a semantic rule.
    #[error("invalid configuration: {message}")]
    Invalid {
        /// Description of the violated rule.
        message: String,
    },
}

impl ConfigError {
    pub(crate) fn invalid(message: impl Into<String>) -> Self {
        Self::Invalid {
            message: message.into(),
        }
    }
}
