//! Start-up wiring of the profile components.
//!
//! Wiring happens in two phases. While *open*, a [`ProfileWiring`] owns the
//! registry, the extraction dispatch, and the participant resolver, and
//! registration goes through `&mut` access, so there is a single writer.
//! [`ProfileWiring::freeze`] ends the phase: the resulting
//! [`ProfileServices`] hands out shared, read-only handles that protocol
//! handlers query concurrently without locking.
//!
//! Components only emit `tracing` events. Installing a subscriber is left to
//! the host process.

use std::sync::Arc;

use thiserror::Error;
use tracing::info;

use dataspace_profile_config::{Config, ConfigError, ProfileSettings};

use crate::dispatch::IdExtractionDispatch;
use crate::error::ProfileError;
use crate::extractor::{ExtractorCatalog, SharedExtractor};
use crate::profile::{DataspaceProfileContext, ProtocolVersion, ProtocolWebhook};
use crate::registry::ProfileContextRegistry;
use crate::resolver::ParticipantIdResolver;

/// Tracing target for start-up wiring.
const BOOTSTRAP_TARGET: &str = concat!(env!("CARGO_PKG_NAME"), "::bootstrap");

/// Errors surfaced during bootstrap.
#[derive(Debug, Error)]
pub enum BootstrapError {
    /// Configuration failed validation.
    #[error("invalid profile configuration: {source}")]
    Config {
        /// Underlying validation error.
        #[source]
        source: ConfigError,
    },
    /// Configuration named an extractor the catalog does not provide.
    #[error("failed to resolve identity extractor: {source}")]
    Extractor {
        /// Underlying lookup error.
        #[source]
        source: ProfileError,
    },
}

/// Profile components during the open, registration-allowed phase.
#[derive(Debug)]
pub struct ProfileWiring {
    registry: ProfileContextRegistry,
    dispatch: IdExtractionDispatch,
    participants: ParticipantIdResolver,
}

impl ProfileWiring {
    /// Creates empty components seeded with one fallback extractor.
    ///
    /// The registry and the dispatch each copy the fallback into their own
    /// table; overriding it later through one leaves the other unchanged.
    #[must_use]
    pub fn new(
        default_extractor: SharedExtractor,
        default_participant_id: impl Into<String>,
    ) -> Self {
        Self {
            registry: ProfileContextRegistry::new(SharedExtractor::clone(&default_extractor)),
            dispatch: IdExtractionDispatch::new(default_extractor),
            participants: ParticipantIdResolver::new(default_participant_id),
        }
    }

    /// Returns the profile registry.
    #[must_use]
    pub const fn registry(&self) -> &ProfileContextRegistry {
        &self.registry
    }

    /// Returns the profile registry for further registration.
    pub const fn registry_mut(&mut self) -> &mut ProfileContextRegistry {
        &mut self.registry
    }

    /// Returns the extraction dispatch.
    #[must_use]
    pub const fn dispatch(&self) -> &IdExtractionDispatch {
        &self.dispatch
    }

    /// Returns the extraction dispatch for further registration.
    pub const fn dispatch_mut(&mut self) -> &mut IdExtractionDispatch {
        &mut self.dispatch
    }

    /// Returns the participant resolver.
    #[must_use]
    pub const fn participants(&self) -> &ParticipantIdResolver {
        &self.participants
    }

    /// Returns the participant resolver for further registration.
    pub const fn participants_mut(&mut self) -> &mut ParticipantIdResolver {
        &mut self.participants
    }

    /// Ends the registration phase.
    #[must_use]
    pub fn freeze(self) -> ProfileServices {
        info!(
            target: BOOTSTRAP_TARGET,
            default_profiles = self.registry.default_profiles().len(),
            standard_profiles = self.registry.standard_profiles().len(),
            "profile registration closed"
        );
        ProfileServices {
            registry: Arc::new(self.registry),
            dispatch: Arc::new(self.dispatch),
            participants: Arc::new(self.participants),
        }
    }
}

/// Read-only profile components shared after start-up.
///
/// Cloning is cheap; every clone reads the same frozen state.
#[derive(Debug, Clone)]
pub struct ProfileServices {
    registry: Arc<ProfileContextRegistry>,
    dispatch: Arc<IdExtractionDispatch>,
    participants: Arc<ParticipantIdResolver>,
}

impl ProfileServices {
    /// Returns the profile registry.
    #[must_use]
    pub fn registry(&self) -> &ProfileContextRegistry {
        &self.registry
    }

    /// Returns the extraction dispatch.
    #[must_use]
    pub fn dispatch(&self) -> &IdExtractionDispatch {
        &self.dispatch
    }

    /// Returns the participant resolver.
    #[must_use]
    pub fn participants(&self) -> &ParticipantIdResolver {
        &self.participants
    }

    /// Returns a shared handle to the registry for injection into
    /// collaborators.
    #[must_use]
    pub fn registry_handle(&self) -> Arc<ProfileContextRegistry> {
        Arc::clone(&self.registry)
    }

    /// Returns a shared handle to the extraction dispatch.
    #[must_use]
    pub fn dispatch_handle(&self) -> Arc<IdExtractionDispatch> {
        Arc::clone(&self.dispatch)
    }

    /// Returns a shared handle to the participant resolver.
    #[must_use]
    pub fn participants_handle(&self) -> Arc<ParticipantIdResolver> {
        Arc::clone(&self.participants)
    }
}

/// Builds open components from configuration.
///
/// Default-tier declarations are registered before standard-tier ones, each
/// in file order. Standard declarations naming an extractor install it in
/// both the registry and the dispatch.
///
/// # Errors
///
/// Returns [`BootstrapError::Config`] when the configuration is invalid and
/// [`BootstrapError::Extractor`] when it names an extractor missing from
/// `catalog`.
pub fn wire(config: &Config, catalog: &ExtractorCatalog) -> Result<ProfileWiring, BootstrapError> {
    config
        .validate()
        .map_err(|source| BootstrapError::Config { source })?;
    let default_extractor = require(catalog, config.default_extractor())?;

    let mut wiring = ProfileWiring::new(default_extractor, config.participant().default_id());

    for settings in config.default_profiles() {
        wiring.registry.register_default(context_from(settings));
    }
    for settings in config.profiles() {
        let context = context_from(settings);
        match settings.extractor() {
            Some(name) => {
                let extractor = require(catalog, name)?;
                wiring.dispatch.register_extraction_function(
                    settings.name(),
                    SharedExtractor::clone(&extractor),
                );
                wiring.registry.register_with_extractor(context, extractor);
            }
            None => wiring.registry.register(context),
        }
    }
    for (protocol, participant_id) in config.participant().protocols() {
        wiring
            .participants
            .register(protocol.as_str(), participant_id.as_str());
    }

    Ok(wiring)
}

fn require(catalog: &ExtractorCatalog, name: &str) -> Result<SharedExtractor, BootstrapError> {
    catalog
        .require(name)
        .map_err(|source| BootstrapError::Extractor { source })
}

fn context_from(settings: &ProfileSettings) -> DataspaceProfileContext {
    DataspaceProfileContext::new(
        settings.name(),
        ProtocolVersion::new(settings.version(), settings.path(), settings.binding()),
        ProtocolWebhook::new(settings.webhook().clone()),
    )
}
