//! Crate-level integration and BDD tests.

use url::Url;

use crate::claims::{ClaimToken, ClaimValue, CredentialSubject, VerifiableCredential};
use crate::extractor::{CredentialSubjectExtractor, shared};
use crate::profile::{DataspaceProfileContext, ProtocolVersion, ProtocolWebhook};
use crate::registry::ProfileContextRegistry;

mod behaviour;

fn membership_claims() -> ClaimToken {
    ClaimToken::new().with_claim(
        "vc",
        vec![
            ClaimValue::from(VerifiableCredential::new(vec![CredentialSubject::anonymous()])),
            ClaimValue::from(
                VerifiableCredential::new(vec![CredentialSubject::with_id("did:example:123")])
                    .with_types(vec![
                        String::from("VerifiableCredential"),
                        String::from("MembershipCredential"),
                    ]),
            ),
        ],
    )
}

#[test]
fn end_to_end_registry_lookup_and_extraction() {
    let mut registry = ProfileContextRegistry::new(shared(CredentialSubjectExtractor::new()));
    let webhook = Url::parse("https://provider.example/protocol").expect("valid url");
    registry.register_default(DataspaceProfileContext::new(
        "dataspace-protocol-http",
        ProtocolVersion::new("v0.8", "/", "HTTPS"),
        ProtocolWebhook::new(webhook),
    ));

    let claims = membership_claims();
    let protocol = "dataspace-protocol-http";
    assert!(registry.webhook(protocol).is_some());
    let id = registry.extractor(protocol).extract(&claims);
    assert_eq!(id.as_deref(), Some("did:example:123"));
}
