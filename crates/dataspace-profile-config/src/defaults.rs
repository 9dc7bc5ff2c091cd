/// Participant identifier used when no protocol-specific one is configured.
pub const DEFAULT_PARTICIPANT_ID: &str = "anonymous";

/// Name of the identity extractor installed as the process-wide fallback.
pub const DEFAULT_EXTRACTOR: &str = "credential-subject";

/// Default path segment advertised for a protocol version.
pub const DEFAULT_PROTOCOL_PATH: &str = "/";

/// Default transport binding advertised for a protocol version.
pub const DEFAULT_PROTOCOL_BINDING: &str = "HTTPS";

pub(crate) fn default_participant_id_string() -> String {
    DEFAULT_PARTICIPANT_ID.to_owned()
}

pub(crate) fn default_extractor_string() -> String {
    DEFAULT_EXTRACTOR.to_owned()
}

pub(crate) fn default_protocol_path() -> String {
    DEFAULT_PROTOCOL_PATH.to_owned()
}

pub(crate) fn default_protocol_binding() -> String {
    DEFAULT_PROTOCOL_BINDING.to_owned()
}
