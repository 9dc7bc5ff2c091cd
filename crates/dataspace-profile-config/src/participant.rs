use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::defaults::default_participant_id_string;

/// Static participant identifiers, one per protocol plus a fallback.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ParticipantSettings {
    #[serde(default = "default_participant_id_string")]
    default_id: String,
    #[serde(default)]
    protocols: BTreeMap<String, String>,
}

impl Default for ParticipantSettings {
    fn default() -> Self {
        Self {
            default_id: default_participant_id_string(),
            protocols: BTreeMap::new(),
        }
    }
}

impl ParticipantSettings {
    /// Identifier returned for protocols without a dedicated entry.
    #[must_use]
    pub const fn default_id(&self) -> &str {
        self.default_id.as_str()
    }

    /// Protocol-specific identifiers keyed by protocol name.
    #[must_use]
    pub const fn protocols(&self) -> &BTreeMap<String, String> {
        &self.protocols
    }
}
