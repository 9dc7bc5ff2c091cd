//! Dataspace profile declarations.
//!
//! A [`DataspaceProfileContext`] ties a wire-protocol name to the protocol
//! version it speaks and the webhook counter-parties call back on. Contexts
//! are immutable once built and are owned by the registry that holds them.

use serde::{Deserialize, Serialize};
use url::Url;

/// Protocol version advertised for a dataspace profile.
///
/// Versions compare by value, so two profiles declaring the same version,
/// path, and binding advertise it once.
///
/// # Example
///
/// ```
/// use dataspace_profile::ProtocolVersion;
///
/// let version = ProtocolVersion::new("2025-1", "/2025/1", "HTTPS");
/// assert_eq!(version.version(), "2025-1");
/// assert_eq!(version, ProtocolVersion::new("2025-1", "/2025/1", "HTTPS"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProtocolVersion {
    version: String,
    path: String,
    binding: String,
}

impl ProtocolVersion {
    /// Creates a protocol version.
    #[must_use]
    pub fn new(
        version: impl Into<String>,
        path: impl Into<String>,
        binding: impl Into<String>,
    ) -> Self {
        Self {
            version: version.into(),
            path: path.into(),
            binding: binding.into(),
        }
    }

    /// Returns the version label.
    #[must_use]
    pub const fn version(&self) -> &str {
        self.version.as_str()
    }

    /// Returns the path segment the version is served under.
    #[must_use]
    pub const fn path(&self) -> &str {
        self.path.as_str()
    }

    /// Returns the transport binding.
    #[must_use]
    pub const fn binding(&self) -> &str {
        self.binding.as_str()
    }
}

impl std::fmt::Display for ProtocolVersion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({} {})", self.version, self.binding, self.path)
    }
}

/// Ordered, de-duplicated list of supported protocol versions.
///
/// Serialises as `{"protocolVersions": [...]}` for capability
/// advertisement.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProtocolVersions {
    protocol_versions: Vec<ProtocolVersion>,
}

impl ProtocolVersions {
    /// Wraps an already de-duplicated list.
    #[must_use]
    pub const fn new(protocol_versions: Vec<ProtocolVersion>) -> Self {
        Self { protocol_versions }
    }

    /// Returns the versions in first-seen order.
    #[must_use]
    pub fn as_slice(&self) -> &[ProtocolVersion] {
        &self.protocol_versions
    }

    /// Returns the number of distinct versions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.protocol_versions.len()
    }

    /// Returns `true` when no version is advertised.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.protocol_versions.is_empty()
    }

    /// Iterates over the versions in first-seen order.
    pub fn iter(&self) -> std::slice::Iter<'_, ProtocolVersion> {
        self.protocol_versions.iter()
    }
}

impl<'a> IntoIterator for &'a ProtocolVersions {
    type Item = &'a ProtocolVersion;
    type IntoIter = std::slice::Iter<'a, ProtocolVersion>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Callback endpoint a counter-party uses to reach this connector.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProtocolWebhook {
    url: Url,
}

impl ProtocolWebhook {
    /// Creates a webhook for the given URL.
    #[must_use]
    pub const fn new(url: Url) -> Self {
        Self { url }
    }

    /// Returns the callback URL.
    #[must_use]
    pub const fn url(&self) -> &Url {
        &self.url
    }
}

/// Declaration of a dataspace profile: protocol name, version, and webhook.
///
/// # Example
///
/// ```
/// use dataspace_profile::{DataspaceProfileContext, ProtocolVersion, ProtocolWebhook};
/// use url::Url;
///
/// let webhook = ProtocolWebhook::new(Url::parse("https://provider.example/dsp").unwrap());
/// let context = DataspaceProfileContext::new(
///     "dataspace-protocol-http",
///     ProtocolVersion::new("v0.8", "/", "HTTPS"),
///     webhook,
/// );
/// assert_eq!(context.name(), "dataspace-protocol-http");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataspaceProfileContext {
    name: String,
    protocol_version: ProtocolVersion,
    webhook: ProtocolWebhook,
}

impl DataspaceProfileContext {
    /// Creates a profile context.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        protocol_version: ProtocolVersion,
        webhook: ProtocolWebhook,
    ) -> Self {
        Self {
            name: name.into(),
            protocol_version,
            webhook,
        }
    }

    /// Returns the protocol name.
    #[must_use]
    pub const fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Returns the protocol version.
    #[must_use]
    pub const fn protocol_version(&self) -> &ProtocolVersion {
        &self.protocol_version
    }

    /// Returns the webhook.
    #[must_use]
    pub const fn webhook(&self) -> &ProtocolWebhook {
        &self.webhook
    }
}
