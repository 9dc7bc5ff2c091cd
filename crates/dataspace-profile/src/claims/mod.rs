//! Claims bag model consumed by identity extractors.
//!
//! A [`ClaimToken`] is produced upstream by the credential verification
//! pipeline and handed to this crate already verified. Claims are keyed by
//! name; values are scalar JSON, verifiable credentials, or lists mixing
//! both. Credentials are carried under [`VERIFIABLE_CREDENTIALS_CLAIM`].

use std::collections::HashMap;

use serde::{Deserialize, Deserializer, Serialize};

/// Well-known claim under which verified credentials are presented.
pub const VERIFIABLE_CREDENTIALS_CLAIM: &str = "vc";

/// Authenticated set of assertions about a caller.
///
/// # Example
///
/// ```
/// use dataspace_profile::claims::{ClaimToken, ClaimValue, CredentialSubject, VerifiableCredential};
///
/// let vc = VerifiableCredential::new(vec![CredentialSubject::with_id("did:web:consumer")]);
/// let token = ClaimToken::new().with_claim("vc", ClaimValue::List(vec![vc.into()]));
/// assert_eq!(token.list_claim("vc").map(<[ClaimValue]>::len), Some(1));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClaimToken {
    claims: HashMap<String, ClaimValue>,
}

impl ClaimToken {
    /// Creates an empty claims bag.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces a claim.
    #[must_use]
    pub fn with_claim(mut self, name: impl Into<String>, value: impl Into<ClaimValue>) -> Self {
        self.claims.insert(name.into(), value.into());
        self
    }

    /// Returns the claim stored under `name`.
    #[must_use]
    pub fn claim(&self, name: &str) -> Option<&ClaimValue> {
        self.claims.get(name)
    }

    /// Returns the entries of a list-valued claim.
    ///
    /// Scalar and credential claims are not lists and yield `None`.
    #[must_use]
    pub fn list_claim(&self, name: &str) -> Option<&[ClaimValue]> {
        match self.claims.get(name)? {
            ClaimValue::List(entries) => Some(entries.as_slice()),
            ClaimValue::Credential(_) | ClaimValue::Json(_) => None,
        }
    }

    /// Returns the number of claims.
    #[must_use]
    pub fn len(&self) -> usize {
        self.claims.len()
    }

    /// Returns `true` when the bag holds no claims.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.claims.is_empty()
    }
}

/// Value of a single claim.
///
/// Deserialisation tries each shape in declaration order, so any object
/// carrying `credentialSubject` is read as a credential.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ClaimValue {
    /// A verifiable credential.
    Credential(VerifiableCredential),
    /// A list of heterogeneous claim values.
    List(Vec<ClaimValue>),
    /// Any other JSON value.
    Json(serde_json::Value),
}

impl ClaimValue {
    /// Returns the credential when this value is one.
    #[must_use]
    pub const fn as_credential(&self) -> Option<&VerifiableCredential> {
        match self {
            Self::Credential(credential) => Some(credential),
            Self::List(_) | Self::Json(_) => None,
        }
    }
}

impl From<VerifiableCredential> for ClaimValue {
    fn from(credential: VerifiableCredential) -> Self {
        Self::Credential(credential)
    }
}

impl From<Vec<ClaimValue>> for ClaimValue {
    fn from(entries: Vec<ClaimValue>) -> Self {
        Self::List(entries)
    }
}

impl From<serde_json::Value> for ClaimValue {
    fn from(value: serde_json::Value) -> Self {
        Self::Json(value)
    }
}

/// A structured claim asserting attributes about one or more subjects.
///
/// JSON field names follow the W3C data model. Both `type` and
/// `credentialSubject` may be a single value or an array.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerifiableCredential {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    id: Option<String>,
    #[serde(
        rename = "type",
        default,
        deserialize_with = "one_or_many",
        skip_serializing_if = "Vec::is_empty"
    )]
    types: Vec<String>,
    #[serde(deserialize_with = "one_or_many")]
    credential_subject: Vec<CredentialSubject>,
}

impl VerifiableCredential {
    /// Creates a credential over the given subjects.
    #[must_use]
    pub const fn new(credential_subject: Vec<CredentialSubject>) -> Self {
        Self {
            id: None,
            types: Vec::new(),
            credential_subject,
        }
    }

    /// Sets the credential identifier.
    #[must_use]
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Sets the credential types.
    #[must_use]
    pub fn with_types(mut self, types: Vec<String>) -> Self {
        self.types = types;
        self
    }

    /// Returns the credential identifier.
    #[must_use]
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    /// Returns the credential types.
    #[must_use]
    pub fn types(&self) -> &[String] {
        &self.types
    }

    /// Returns the subjects in presentation order.
    #[must_use]
    pub fn credential_subject(&self) -> &[CredentialSubject] {
        &self.credential_subject
    }
}

/// Subject of a verifiable credential.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CredentialSubject {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    id: Option<String>,
    #[serde(flatten)]
    claims: serde_json::Map<String, serde_json::Value>,
}

impl CredentialSubject {
    /// Creates a subject carrying an identifier.
    #[must_use]
    pub fn with_id(id: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            claims: serde_json::Map::new(),
        }
    }

    /// Creates a subject without an identifier.
    #[must_use]
    pub fn anonymous() -> Self {
        Self::default()
    }

    /// Adds a subject attribute.
    #[must_use]
    pub fn with_claim(mut self, name: impl Into<String>, value: serde_json::Value) -> Self {
        self.claims.insert(name.into(), value);
        self
    }

    /// Returns the subject identifier.
    #[must_use]
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    /// Returns the attributes other than `id`.
    #[must_use]
    pub const fn claims(&self) -> &serde_json::Map<String, serde_json::Value> {
        &self.claims
    }
}

fn one_or_many<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum OneOrMany<T> {
        One(T),
        Many(Vec<T>),
    }

    Ok(match OneOrMany::deserialize(deserializer)? {
        OneOrMany::One(value) => vec![value],
        OneOrMany::Many(values) => values,
    })
}
