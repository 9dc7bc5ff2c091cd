//! Behaviour-driven tests for profile dispatch.

use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};
use url::Url;

use crate::claims::ClaimToken;
use crate::dispatch::IdExtractionDispatch;
use crate::error::ProfileError;
use crate::extractor::{DEFAULT_EXTRACTOR_KEY, SharedExtractor, shared};
use crate::profile::{DataspaceProfileContext, ProtocolVersion, ProtocolWebhook};
use crate::registry::ProfileContextRegistry;
use crate::resolver::ParticipantIdResolver;

// ---------------------------------------------------------------------------
// Test world
// ---------------------------------------------------------------------------

struct TestWorld {
    registry: ProfileContextRegistry,
    dispatch: Option<IdExtractionDispatch>,
    resolver: Option<ParticipantIdResolver>,
    versions: Vec<String>,
    extraction: Option<Result<String, ProfileError>>,
}

impl Default for TestWorld {
    fn default() -> Self {
        Self {
            registry: ProfileContextRegistry::new(shared(|_: &ClaimToken| -> Option<String> {
                None
            })),
            dispatch: None,
            resolver: None,
            versions: Vec::new(),
            extraction: None,
        }
    }
}

#[fixture]
fn world() -> TestWorld {
    TestWorld::default()
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn unquote(value: &str) -> String {
    value.trim_matches('"').to_owned()
}

fn returning(value: String) -> SharedExtractor {
    shared(move |_: &ClaimToken| Some(value.clone()))
}

fn context(name: &str, version: &str) -> DataspaceProfileContext {
    let url = Url::parse("https://provider.example")
        .and_then(|base| base.join(name))
        .expect("valid webhook url");
    DataspaceProfileContext::new(
        name,
        ProtocolVersion::new(version, "/", "HTTPS"),
        ProtocolWebhook::new(url),
    )
}

fn resolver(world: &TestWorld) -> &ParticipantIdResolver {
    world.resolver.as_ref().expect("no participant resolver configured")
}

// ---------------------------------------------------------------------------
// Given steps
// ---------------------------------------------------------------------------

#[given("a default profile {name} with version {version}")]
fn given_default_profile(world: &mut TestWorld, name: String, version: String) {
    world
        .registry
        .register_default(context(&unquote(&name), &unquote(&version)));
}

#[given("a standard profile {name} with version {version}")]
fn given_standard_profile(world: &mut TestWorld, name: String, version: String) {
    world
        .registry
        .register(context(&unquote(&name), &unquote(&version)));
}

#[given("a default extractor returning {value}")]
fn given_default_extractor(world: &mut TestWorld, value: String) {
    world
        .registry
        .override_default_extractor(returning(unquote(&value)));
}

#[given("an extraction dispatch using the registry's fallback")]
fn given_dispatch(world: &mut TestWorld) {
    let fallback = world.registry.extractor(DEFAULT_EXTRACTOR_KEY);
    world.dispatch = Some(IdExtractionDispatch::new(fallback));
}

#[given("a participant resolver defaulting to {participant}")]
fn given_resolver(world: &mut TestWorld, participant: String) {
    world.resolver = Some(ParticipantIdResolver::new(unquote(&participant)));
}

#[given("participant {participant} registered for protocol {protocol}")]
fn given_participant(world: &mut TestWorld, participant: String, protocol: String) {
    world
        .resolver
        .as_mut()
        .expect("no participant resolver configured")
        .register(unquote(&protocol), unquote(&participant));
}

// ---------------------------------------------------------------------------
// When steps
// ---------------------------------------------------------------------------

#[when("the protocol versions are queried")]
fn when_versions_queried(world: &mut TestWorld) {
    world.versions = world
        .registry
        .protocol_versions()
        .iter()
        .map(|version| version.version().to_owned())
        .collect();
}

#[when("the default extractor is overridden to return {value}")]
fn when_default_overridden(world: &mut TestWorld, value: String) {
    world
        .registry
        .override_default_extractor(returning(unquote(&value)));
}

#[when("an id is extracted for protocol {protocol}")]
fn when_id_extracted(world: &mut TestWorld, protocol: String) {
    let dispatch = world
        .dispatch
        .as_ref()
        .expect("no extraction dispatch configured");
    world.extraction = Some(dispatch.extract_id(&ClaimToken::new(), &unquote(&protocol)));
}

// ---------------------------------------------------------------------------
// Then steps
// ---------------------------------------------------------------------------

#[then("the advertised versions are {versions}")]
fn then_versions(world: &mut TestWorld, versions: String) {
    let expected: Vec<String> = unquote(&versions)
        .split(',')
        .map(|version| version.trim().to_owned())
        .collect();
    assert_eq!(world.versions, expected);
}

#[then("no webhook is known for {protocol}")]
fn then_no_webhook(world: &mut TestWorld, protocol: String) {
    let name = unquote(&protocol);
    assert!(
        world.registry.webhook(&name).is_none(),
        "expected no webhook for '{name}'"
    );
}

#[then("the extractor for {protocol} returns {value}")]
fn then_extractor_returns(world: &mut TestWorld, protocol: String, value: String) {
    let extracted = world
        .registry
        .extractor(&unquote(&protocol))
        .extract(&ClaimToken::new());
    assert_eq!(extracted, Some(unquote(&value)));
}

#[then("extraction fails for protocol {protocol}")]
fn then_extraction_fails(world: &mut TestWorld, protocol: String) {
    let result = world.extraction.as_ref().expect("no extraction attempted");
    let expected = ProfileError::ExtractionFailed {
        protocol: unquote(&protocol),
    };
    assert_eq!(result.as_ref().err(), Some(&expected));
}

#[then("protocol {protocol} resolves to participant {participant}")]
fn then_resolves(world: &mut TestWorld, protocol: String, participant: String) {
    assert_eq!(
        resolver(world).resolve_for(&unquote(&protocol)),
        unquote(&participant)
    );
}

// ---------------------------------------------------------------------------
// Scenario registration
// ---------------------------------------------------------------------------

#[scenario(
    path = "tests/features/profile_dispatch.feature",
    name = "Default profiles advertise each version once"
)]
fn default_profiles_deduplicate_versions(world: TestWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/profile_dispatch.feature",
    name = "A standard profile hides every default profile"
)]
fn standard_profile_hides_defaults(world: TestWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/profile_dispatch.feature",
    name = "Overriding the default extractor changes later lookups"
)]
fn default_extractor_override_is_live(world: TestWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/profile_dispatch.feature",
    name = "A blank identity fails extraction"
)]
fn blank_identity_fails(world: TestWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/profile_dispatch.feature",
    name = "Static participant ids fall back to the configured default"
)]
fn participant_ids_fall_back(world: TestWorld) {
    let _ = world;
}
