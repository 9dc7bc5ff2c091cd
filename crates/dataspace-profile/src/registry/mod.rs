//! Registry of dataspace profile contexts.
//!
//! The [`ProfileContextRegistry`] keeps two tiers of profile declarations.
//! Default-tier contexts ship with the connector; standard-tier contexts are
//! registered by adopters. As soon as the standard tier holds a single
//! context, every query ignores the default tier. The default-tier entries
//! stay stored but can no longer be reached.
//!
//! The registry also resolves the identity extractor for a protocol, falling
//! back to the extractor installed under
//! [`DEFAULT_EXTRACTOR_KEY`](crate::extractor::DEFAULT_EXTRACTOR_KEY).

use tracing::{debug, info};

use crate::extractor::{ExtractorTable, SharedExtractor};
use crate::profile::{DataspaceProfileContext, ProtocolVersion, ProtocolVersions, ProtocolWebhook};

/// Tracing target for registry operations.
pub(crate) const REGISTRY_TARGET: &str = concat!(env!("CARGO_PKG_NAME"), "::registry");

/// Registry of default-tier and standard-tier profile contexts.
///
/// The active tier is chosen on every read, never cached: the standard tier
/// when it is non-empty, otherwise the default tier.
///
/// # Example
///
/// ```
/// use dataspace_profile::{
///     CredentialSubjectExtractor, DataspaceProfileContext, ProfileContextRegistry,
///     ProtocolVersion, ProtocolWebhook, extractor,
/// };
/// use url::Url;
///
/// let webhook = ProtocolWebhook::new(Url::parse("https://provider.example/dsp").unwrap());
/// let mut registry =
///     ProfileContextRegistry::new(extractor::shared(CredentialSubjectExtractor::new()));
/// registry.register_default(DataspaceProfileContext::new(
///     "dataspace-protocol-http",
///     ProtocolVersion::new("v0.8", "/", "HTTPS"),
///     webhook.clone(),
/// ));
/// assert_eq!(registry.protocol_versions().len(), 1);
///
/// registry.register(DataspaceProfileContext::new(
///     "dataspace-protocol-http:2025-1",
///     ProtocolVersion::new("2025-1", "/2025/1", "HTTPS"),
///     webhook,
/// ));
/// assert!(registry.webhook("dataspace-protocol-http").is_none());
/// ```
#[derive(Debug, Clone)]
pub struct ProfileContextRegistry {
    default_profiles: Vec<DataspaceProfileContext>,
    standard_profiles: Vec<DataspaceProfileContext>,
    extractors: ExtractorTable,
}

impl ProfileContextRegistry {
    /// Creates an empty registry with the given fallback extractor.
    ///
    /// The registry keeps its own extractor table. An
    /// [`IdExtractionDispatch`](crate::IdExtractionDispatch) built from the
    /// same extractor does not see later calls to
    /// [`override_default_extractor`](Self::override_default_extractor) or
    /// [`register_with_extractor`](Self::register_with_extractor).
    #[must_use]
    pub fn new(default_extractor: SharedExtractor) -> Self {
        Self {
            default_profiles: Vec::new(),
            standard_profiles: Vec::new(),
            extractors: ExtractorTable::new(default_extractor),
        }
    }

    /// Appends a default-tier context.
    ///
    /// No de-duplication or validation takes place. The context uses the
    /// fallback extractor.
    pub fn register_default(&mut self, context: DataspaceProfileContext) {
        debug!(
            target: REGISTRY_TARGET,
            protocol = context.name(),
            version = context.protocol_version().version(),
            "registering default profile"
        );
        self.default_profiles.push(context);
    }

    /// Appends a standard-tier context that uses the fallback extractor.
    pub fn register(&mut self, context: DataspaceProfileContext) {
        self.push_standard(context);
    }

    /// Appends a standard-tier context and installs its dedicated extractor.
    ///
    /// An extractor already installed for the same protocol is replaced.
    pub fn register_with_extractor(
        &mut self,
        context: DataspaceProfileContext,
        extractor: SharedExtractor,
    ) {
        self.extractors.install(context.name(), extractor);
        self.push_standard(context);
    }

    /// Replaces the fallback extractor.
    pub fn override_default_extractor(&mut self, extractor: SharedExtractor) {
        debug!(target: REGISTRY_TARGET, "overriding default identity extractor");
        self.extractors.override_default(extractor);
    }

    fn push_standard(&mut self, context: DataspaceProfileContext) {
        if self.standard_profiles.is_empty() && !self.default_profiles.is_empty() {
            info!(
                target: REGISTRY_TARGET,
                protocol = context.name(),
                hidden = self.default_profiles.len(),
                "first standard profile registered, default profiles are now hidden"
            );
        }
        debug!(
            target: REGISTRY_TARGET,
            protocol = context.name(),
            version = context.protocol_version().version(),
            "registering standard profile"
        );
        self.standard_profiles.push(context);
    }

    /// Returns the distinct protocol versions of the active tier.
    ///
    /// Versions are compared by value and kept in first-seen order.
    #[must_use]
    pub fn protocol_versions(&self) -> ProtocolVersions {
        let mut versions: Vec<ProtocolVersion> = Vec::new();
        for context in self.active_profiles() {
            let version = context.protocol_version();
            if !versions.contains(version) {
                versions.push(version.clone());
            }
        }
        ProtocolVersions::new(versions)
    }

    /// Returns the webhook of the first active-tier context named `protocol`.
    #[must_use]
    pub fn webhook(&self, protocol: &str) -> Option<&ProtocolWebhook> {
        self.find_active(protocol)
            .map(DataspaceProfileContext::webhook)
    }

    /// Returns the version of the first active-tier context named `protocol`.
    #[must_use]
    pub fn protocol_version(&self, protocol: &str) -> Option<&ProtocolVersion> {
        self.find_active(protocol)
            .map(DataspaceProfileContext::protocol_version)
    }

    /// Returns the extractor for `protocol`, or the fallback extractor.
    ///
    /// The lookup is live: overriding the fallback affects the next call.
    #[must_use]
    pub fn extractor(&self, protocol: &str) -> SharedExtractor {
        SharedExtractor::clone(self.extractors.resolve(protocol))
    }

    /// Returns the tier queries currently read from.
    #[must_use]
    pub fn active_profiles(&self) -> &[DataspaceProfileContext] {
        if self.standard_profiles.is_empty() {
            &self.default_profiles
        } else {
            &self.standard_profiles
        }
    }

    /// Returns every default-tier context, reachable or not.
    #[must_use]
    pub fn default_profiles(&self) -> &[DataspaceProfileContext] {
        &self.default_profiles
    }

    /// Returns every standard-tier context.
    #[must_use]
    pub fn standard_profiles(&self) -> &[DataspaceProfileContext] {
        &self.standard_profiles
    }

    fn find_active(&self, protocol: &str) -> Option<&DataspaceProfileContext> {
        self.active_profiles()
            .iter()
            .find(|context| context.name() == protocol)
    }
}
