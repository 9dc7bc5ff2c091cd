//! Configuration for dataspace profile dispatch.
//!
//! The [`Config`] type describes everything the connector wires into the
//! profile registry at start-up: the name of the fallback identity
//! extractor, static participant identifiers, and the default-tier and
//! standard-tier profile declarations. Configuration is written in TOML and
//! validated before use. Log output is left to the host application.
//!
//! ```toml
//! default_extractor = "credential-subject"
//!
//! [participant]
//! default_id = "did:web:provider"
//!
//! [[profiles]]
//! name = "dataspace-protocol-http:2025-1"
//! version = "2025-1"
//! path = "/2025/1"
//! webhook = "https://provider.example/protocol/2025/1"
//! ```

mod defaults;
mod error;
mod participant;
mod profiles;

use std::fs;
use std::sync::Arc;

use camino::Utf8Path;
use serde::{Deserialize, Serialize};

pub use self::defaults::{
    DEFAULT_EXTRACTOR, DEFAULT_PARTICIPANT_ID, DEFAULT_PROTOCOL_BINDING, DEFAULT_PROTOCOL_PATH,
};
pub use self::error::ConfigError;
pub use self::participant::ParticipantSettings;
pub use self::profiles::ProfileSettings;

const INLINE_ORIGIN: &str = "<inline>";

/// Connector-level configuration for profile dispatch.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    default_extractor: String,
    participant: ParticipantSettings,
    default_profiles: Vec<ProfileSettings>,
    profiles: Vec<ProfileSettings>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_extractor: defaults::default_extractor_string(),
            participant: ParticipantSettings::default(),
            default_profiles: Vec::new(),
            profiles: Vec::new(),
        }
    }
}

impl Config {
    /// Parses and validates configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] when the text is not valid TOML for the
    /// schema and [`ConfigError::Invalid`] when validation fails.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        Self::parse(text, INLINE_ORIGIN)
    }

    /// Reads, parses, and validates a TOML configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Read`] when the file cannot be read, otherwise
    /// the errors of [`Config::from_toml_str`].
    pub fn load_from_path(path: &Utf8Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source: Arc::new(source),
        })?;
        Self::parse(&text, path.as_str())
    }

    fn parse(text: &str, origin: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(text).map_err(|source| ConfigError::Parse {
            origin: origin.to_owned(),
            source: Box::new(source),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Checks the semantic rules serde cannot express.
    ///
    /// Profile names, participant identifiers, and extractor names must not
    /// be blank.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] describing the first violation.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.default_extractor.trim().is_empty() {
            return Err(ConfigError::invalid("default_extractor must not be blank"));
        }
        if self.participant.default_id().trim().is_empty() {
            return Err(ConfigError::invalid(
                "participant.default_id must not be blank",
            ));
        }
        for (protocol, id) in self.participant.protocols() {
            if protocol.trim().is_empty() {
                return Err(ConfigError::invalid(
                    "participant protocol names must not be blank",
                ));
            }
            if id.trim().is_empty() {
                return Err(ConfigError::invalid(format!(
                    "participant id for protocol '{protocol}' must not be blank"
                )));
            }
        }
        for profile in self.default_profiles.iter().chain(&self.profiles) {
            validate_profile(profile)?;
        }
        if let Some(profile) = self
            .default_profiles
            .iter()
            .find(|profile| profile.extractor().is_some())
        {
            return Err(ConfigError::invalid(format!(
                "default profile '{}' cannot name an extractor; declare it under profiles",
                profile.name()
            )));
        }
        Ok(())
    }

    /// Name of the identity extractor installed as the fallback.
    #[must_use]
    pub const fn default_extractor(&self) -> &str {
        self.default_extractor.as_str()
    }

    /// Static participant identifiers.
    #[must_use]
    pub const fn participant(&self) -> &ParticipantSettings {
        &self.participant
    }

    /// Default-tier profile declarations, in file order.
    #[must_use]
    pub fn default_profiles(&self) -> &[ProfileSettings] {
        &self.default_profiles
    }

    /// Standard-tier profile declarations, in file order.
    #[must_use]
    pub fn profiles(&self) -> &[ProfileSettings] {
        &self.profiles
    }
}

fn validate_profile(profile: &ProfileSettings) -> Result<(), ConfigError> {
    if profile.name().trim().is_empty() {
        return Err(ConfigError::invalid("profile name must not be blank"));
    }
    if profile.version().trim().is_empty() {
        return Err(ConfigError::invalid(format!(
            "profile '{}' must declare a version",
            profile.name()
        )));
    }
    if profile
        .extractor()
        .is_some_and(|extractor| extractor.trim().is_empty())
    {
        return Err(ConfigError::invalid(format!(
            "profile '{}' names a blank extractor",
            profile.name()
        )));
    }
    Ok(())
}
