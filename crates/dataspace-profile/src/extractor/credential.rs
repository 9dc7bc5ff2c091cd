//! Default identity extraction from verifiable credentials.

use crate::claims::{ClaimToken, ClaimValue, CredentialSubject, VERIFIABLE_CREDENTIALS_CLAIM};

use super::IdentityExtractor;

/// Extracts the first credential-subject identifier from the claims bag.
///
/// Entries of the credentials claim that are not credentials are skipped.
/// Subjects are visited credential by credential, each in its own order, and
/// the first subject carrying an identifier wins. A missing claim or a bag
/// without any identified subject yields `None`.
///
/// # Example
///
/// ```
/// use dataspace_profile::claims::{ClaimToken, ClaimValue, CredentialSubject, VerifiableCredential};
/// use dataspace_profile::extractor::{CredentialSubjectExtractor, IdentityExtractor};
///
/// let credentials = vec![
///     ClaimValue::from(VerifiableCredential::new(vec![CredentialSubject::anonymous()])),
///     ClaimValue::from(VerifiableCredential::new(vec![CredentialSubject::with_id("did:example:123")])),
/// ];
/// let claims = ClaimToken::new().with_claim("vc", credentials);
///
/// let id = CredentialSubjectExtractor::new().extract(&claims);
/// assert_eq!(id.as_deref(), Some("did:example:123"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CredentialSubjectExtractor {
    claim: String,
}

impl Default for CredentialSubjectExtractor {
    fn default() -> Self {
        Self::with_claim(VERIFIABLE_CREDENTIALS_CLAIM)
    }
}

impl CredentialSubjectExtractor {
    /// Reads credentials from the well-known `vc` claim.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads credentials from a custom claim.
    #[must_use]
    pub fn with_claim(claim: impl Into<String>) -> Self {
        Self {
            claim: claim.into(),
        }
    }

    /// Returns the claim credentials are read from.
    #[must_use]
    pub const fn claim(&self) -> &str {
        self.claim.as_str()
    }
}

impl IdentityExtractor for CredentialSubjectExtractor {
    fn extract(&self, claims: &ClaimToken) -> Option<String> {
        claims
            .list_claim(&self.claim)
            .unwrap_or_default()
            .iter()
            .filter_map(ClaimValue::as_credential)
            .flat_map(|credential| credential.credential_subject())
            .find_map(CredentialSubject::id)
            .map(str::to_owned)
    }
}
