use serde::{Deserialize, Serialize};
use url::Url;

use crate::defaults::{default_protocol_binding, default_protocol_path};

/// A dataspace profile declaration as written in configuration.
///
/// Entries under `default_profiles` feed the default tier; entries under
/// `profiles` feed the standard tier. Only standard-tier entries may name a
/// dedicated identity extractor.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ProfileSettings {
    name: String,
    version: String,
    #[serde(default = "default_protocol_path")]
    path: String,
    #[serde(default = "default_protocol_binding")]
    binding: String,
    webhook: Url,
    #[serde(default)]
    extractor: Option<String>,
}

impl ProfileSettings {
    /// Protocol name the profile is registered under.
    #[must_use]
    pub const fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Protocol version label.
    #[must_use]
    pub const fn version(&self) -> &str {
        self.version.as_str()
    }

    /// Path segment advertised for the version.
    #[must_use]
    pub const fn path(&self) -> &str {
        self.path.as_str()
    }

    /// Transport binding advertised for the version.
    #[must_use]
    pub const fn binding(&self) -> &str {
        self.binding.as_str()
    }

    /// Callback endpoint counter-parties use for this protocol.
    #[must_use]
    pub const fn webhook(&self) -> &Url {
        &self.webhook
    }

    /// Name of the identity extractor dedicated to this protocol, if any.
    #[must_use]
    pub fn extractor(&self) -> Option<&str> {
        self.extractor.as_deref()
    }
}
