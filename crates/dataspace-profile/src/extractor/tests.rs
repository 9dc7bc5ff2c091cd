//! Unit tests for extractors, the fallback table, and the catalog.

use rstest::{fixture, rstest};
use serde_json::json;

use super::*;
use crate::claims::{ClaimValue, CredentialSubject, VerifiableCredential};
use crate::error::ProfileError;

fn fixed(id: &'static str) -> SharedExtractor {
    shared(move |_: &ClaimToken| Some(id.to_owned()))
}

fn claims_with(entries: Vec<ClaimValue>) -> ClaimToken {
    ClaimToken::new().with_claim("vc", entries)
}

fn credential(subjects: Vec<CredentialSubject>) -> ClaimValue {
    VerifiableCredential::new(subjects).into()
}

#[fixture]
fn extractor() -> CredentialSubjectExtractor {
    CredentialSubjectExtractor::new()
}

// ---------------------------------------------------------------------------
// CredentialSubjectExtractor
// ---------------------------------------------------------------------------

#[rstest]
fn skips_subjects_without_id_across_credentials(extractor: CredentialSubjectExtractor) {
    let claims = claims_with(vec![
        credential(vec![CredentialSubject::anonymous()]),
        credential(vec![CredentialSubject::with_id("did:example:123")]),
    ]);
    assert_eq!(extractor.extract(&claims).as_deref(), Some("did:example:123"));
}

#[rstest]
fn first_identified_subject_wins(extractor: CredentialSubjectExtractor) {
    let claims = claims_with(vec![
        credential(vec![
            CredentialSubject::anonymous(),
            CredentialSubject::with_id("did:example:first"),
            CredentialSubject::with_id("did:example:second"),
        ]),
        credential(vec![CredentialSubject::with_id("did:example:third")]),
    ]);
    assert_eq!(
        extractor.extract(&claims).as_deref(),
        Some("did:example:first")
    );
}

#[rstest]
fn ignores_entries_that_are_not_credentials(extractor: CredentialSubjectExtractor) {
    let claims = claims_with(vec![
        ClaimValue::Json(json!({ "id": "did:example:impostor" })),
        ClaimValue::List(vec![credential(vec![CredentialSubject::with_id(
            "did:example:nested",
        )])]),
        credential(vec![CredentialSubject::with_id("did:example:real")]),
    ]);
    assert_eq!(
        extractor.extract(&claims).as_deref(),
        Some("did:example:real")
    );
}

#[rstest]
#[case::missing_claim(ClaimToken::new())]
#[case::scalar_claim(ClaimToken::new().with_claim("vc", json!("opaque")))]
#[case::empty_list(claims_with(Vec::new()))]
#[case::no_subjects(claims_with(vec![credential(Vec::new())]))]
#[case::anonymous_subjects(claims_with(vec![credential(vec![
    CredentialSubject::anonymous(),
    CredentialSubject::anonymous(),
])]))]
fn yields_none_without_identified_subject(
    extractor: CredentialSubjectExtractor,
    #[case] claims: ClaimToken,
) {
    assert_eq!(extractor.extract(&claims), None);
}

#[test]
fn custom_claim_name_is_honoured() {
    let extractor = CredentialSubjectExtractor::with_claim("presentation");
    let claims = ClaimToken::new().with_claim(
        "presentation",
        vec![credential(vec![CredentialSubject::with_id("did:example:9")])],
    );
    assert_eq!(extractor.claim(), "presentation");
    assert_eq!(extractor.extract(&claims).as_deref(), Some("did:example:9"));
    assert_eq!(CredentialSubjectExtractor::new().extract(&claims), None);
}

// ---------------------------------------------------------------------------
// ExtractorTable
// ---------------------------------------------------------------------------

#[test]
fn unregistered_protocol_resolves_to_fallback() {
    let table = ExtractorTable::new(fixed("fallback"));
    let claims = ClaimToken::new();
    assert_eq!(
        table.resolve("unknown").extract(&claims).as_deref(),
        Some("fallback")
    );
    assert!(!table.has_dedicated("unknown"));
}

#[test]
fn dedicated_extractor_takes_precedence() {
    let mut table = ExtractorTable::new(fixed("fallback"));
    table.install("dsp", fixed("dedicated"));
    let claims = ClaimToken::new();
    assert_eq!(
        table.resolve("dsp").extract(&claims).as_deref(),
        Some("dedicated")
    );
    assert!(table.has_dedicated("dsp"));
}

#[test]
fn installing_under_default_key_replaces_fallback() {
    let mut table = ExtractorTable::new(fixed("first"));
    table.install(DEFAULT_EXTRACTOR_KEY, fixed("second"));
    let claims = ClaimToken::new();
    assert_eq!(
        table.resolve("anything").extract(&claims).as_deref(),
        Some("second")
    );
    assert!(!table.has_dedicated(DEFAULT_EXTRACTOR_KEY));
}

#[test]
fn override_default_changes_later_lookups() {
    let mut table = ExtractorTable::new(fixed("before"));
    let claims = ClaimToken::new();
    assert_eq!(
        table.resolve("p").extract(&claims).as_deref(),
        Some("before")
    );
    table.override_default(fixed("after"));
    assert_eq!(table.resolve("p").extract(&claims).as_deref(), Some("after"));
    assert_eq!(table.fallback().extract(&claims).as_deref(), Some("after"));
}

// ---------------------------------------------------------------------------
// ExtractorCatalog
// ---------------------------------------------------------------------------

#[test]
fn builtins_include_credential_subject() {
    let catalog = ExtractorCatalog::with_builtins();
    assert_eq!(catalog.names(), [CREDENTIAL_SUBJECT_EXTRACTOR]);
    assert!(catalog.get(CREDENTIAL_SUBJECT_EXTRACTOR).is_some());
}

#[test]
fn require_reports_unknown_names() {
    let catalog = ExtractorCatalog::new();
    let Err(error) = catalog.require("membership") else {
        panic!("unknown extractor should be rejected");
    };
    assert_eq!(
        error,
        ProfileError::UnknownExtractor {
            name: "membership".into(),
        }
    );
}

#[test]
fn inserted_extractors_are_required_by_name() {
    let mut catalog = ExtractorCatalog::with_builtins();
    catalog.insert("fixed", fixed("did:web:fixed"));
    let extractor = catalog.require("fixed").expect("fixed is registered");
    assert_eq!(
        extractor.extract(&ClaimToken::new()).as_deref(),
        Some("did:web:fixed")
    );
    assert_eq!(catalog.names(), [CREDENTIAL_SUBJECT_EXTRACTOR, "fixed"]);
}
