//! End-to-end pipeline tests against a mock upstream.

use async_trait::async_trait;
use serde_json::{Value, json};
use std::collections::{BTreeSet, HashMap};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;
use tessera::{
    AnalyticsClient, AnalyticsEngine, Credentials, FetchErrorCode, KnownPlatform, PlatformId,
    QueryOptions, ResponseStatus, UserProfile, normalize,
};
use tessera_fetch::{ClientError, ClientErrorKind, UpstreamResponse};

/// Mock upstream: platforms listed in `hang` never answer, the rest answer
/// from `payloads` or fail with a transport error.
#[derive(Default)]
struct MockUpstream {
    payloads: HashMap<PlatformId, Value>,
    hang: Vec<PlatformId>,
    calls: AtomicUsize,
}

impl MockUpstream {
    fn answer(mut self, platform: KnownPlatform, payload: Value) -> Self {
        self.payloads.insert(platform.into(), payload);
        self
    }

    fn hang(mut self, platform: KnownPlatform) -> Self {
        self.hang.push(platform.into());
        self
    }
}

#[async_trait]
impl AnalyticsClient for MockUpstream {
    async fn fetch_platform(
        &self,
        platform: &PlatformId,
        _credentials: &Credentials,
        _options: &QueryOptions,
    ) -> Result<UpstreamResponse, ClientError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.hang.contains(platform) {
            std::future::pending::<()>().await;
        }
        match self.payloads.get(platform) {
            Some(payload) => Ok(UpstreamResponse::ok(payload.clone())),
            None => Err(ClientError::new(ClientErrorKind::Transport(
                "connection refused".into(),
            ))),
        }
    }
}

fn instagram_payload() -> Value {
    json!({ "viewsCount": 123212, "likeCount": 116, "commentsCount": 6 })
}

fn creds() -> Credentials {
    Credentials::new("test-key")
}

#[tokio::test(start_paused = true)]
async fn test_timeout_does_not_contaminate_other_platforms() {
    let upstream = MockUpstream::default()
        .hang(KnownPlatform::Facebook)
        .answer(KnownPlatform::Instagram, instagram_payload());
    let engine = AnalyticsEngine::new(upstream).with_timeout(Duration::from_secs(10));

    let response = engine
        .run_names(["facebook", "instagram"], &creds(), &QueryOptions::default())
        .await
        .unwrap();

    assert_eq!(*response.status(), ResponseStatus::Success);
    assert_eq!(response.outcomes().len(), 2);

    let facebook = response
        .outcome(&KnownPlatform::Facebook.into())
        .and_then(|o| o.error())
        .unwrap();
    assert_eq!(*facebook.code(), FetchErrorCode::Timeout);

    let instagram = response
        .outcome(&KnownPlatform::Instagram.into())
        .and_then(|o| o.summary())
        .unwrap();
    assert_eq!(*instagram.total_views(), 123_212);
    assert_eq!(*instagram.total_engagement(), 122);

    assert_eq!(*response.aggregate().total_views(), 123_212);
    assert_eq!(*response.aggregate().platform_count(), 1);
}

#[tokio::test]
async fn test_no_platforms_is_empty_state() {
    let engine = AnalyticsEngine::new(MockUpstream::default());

    let response = engine
        .run(&BTreeSet::new(), &creds(), &QueryOptions::default())
        .await
        .unwrap();

    assert_eq!(engine.fetcher().client().calls.load(Ordering::SeqCst), 0);
    assert_eq!(*response.status(), ResponseStatus::Success);
    assert!(response.outcomes().is_empty());
    assert_eq!(
        response.message().as_deref(),
        Some("No connected social platforms found")
    );
    let aggregate = response.aggregate();
    assert_eq!(*aggregate.platform_count(), 0);
    assert_eq!(*aggregate.total_views(), 0);
    assert_eq!(*aggregate.total_engagement(), 0);
    assert_eq!(*aggregate.engagement_rate(), 0.0);
}

#[tokio::test]
async fn test_unknown_platform_kept_under_synthetic_key() {
    let upstream = MockUpstream::default().answer(KnownPlatform::Instagram, instagram_payload());
    let engine = AnalyticsEngine::new(upstream);

    let response = engine
        .run_names(["myspace", "Instagram"], &creds(), &QueryOptions::default())
        .await
        .unwrap();

    assert_eq!(engine.fetcher().client().calls.load(Ordering::SeqCst), 1);
    let myspace = response
        .outcome(&normalize("myspace"))
        .and_then(|o| o.summary())
        .unwrap();
    assert_eq!(myspace.platform().to_string(), "unknown:myspace");
    assert!(myspace.is_zeroed());
    assert_eq!(*response.aggregate().platform_count(), 2);
    assert_eq!(*response.aggregate().total_views(), 123_212);
}

#[tokio::test]
async fn test_every_platform_failing_is_error_status() {
    let engine = AnalyticsEngine::new(MockUpstream::default());

    let response = engine
        .run_names(["twitter", "linkedin"], &creds(), &QueryOptions::default())
        .await
        .unwrap();

    assert_eq!(*response.status(), ResponseStatus::Error);
    assert_eq!(response.errors().count(), 2);
    assert!(
        response
            .errors()
            .all(|e| *e.code() == FetchErrorCode::Transport)
    );
    assert_eq!(*response.aggregate().platform_count(), 0);
}

#[tokio::test]
async fn test_duplicate_spellings_fetched_once() {
    let upstream = MockUpstream::default().answer(KnownPlatform::Gmb, json!({ "callClicks": 2 }));
    let engine = AnalyticsEngine::new(upstream);

    let response = engine
        .run_names(
            ["GMB", "Google My Business", "google-my-business"],
            &creds(),
            &QueryOptions::default(),
        )
        .await
        .unwrap();

    assert_eq!(engine.fetcher().client().calls.load(Ordering::SeqCst), 1);
    assert_eq!(response.outcomes().len(), 1);
    assert_eq!(*response.aggregate().total_engagement(), 2);
}

#[tokio::test]
async fn test_profile_drives_platform_set() {
    let upstream = MockUpstream::default()
        .answer(KnownPlatform::Instagram, instagram_payload())
        .answer(KnownPlatform::Reddit, json!({ "totalKarma": 40 }));
    let engine = AnalyticsEngine::new(upstream);
    let profile: UserProfile = serde_json::from_value(json!({
        "activeSocialAccounts": ["instagram"],
        "displayNames": [{ "platform": "reddit", "username": "acme" }]
    }))
    .unwrap();

    let response = engine
        .run_for_profile(&profile, &creds(), &QueryOptions::default())
        .await
        .unwrap();

    assert_eq!(response.summaries().count(), 2);
    assert_eq!(*response.aggregate().total_likes(), 156);
}

#[tokio::test]
async fn test_response_serializes_with_stable_field_names() {
    let upstream = MockUpstream::default().answer(KnownPlatform::Instagram, instagram_payload());
    let engine = AnalyticsEngine::new(upstream);

    let response = engine
        .run_names(["instagram", "tiktok"], &creds(), &QueryOptions::default())
        .await
        .unwrap();
    let value = serde_json::to_value(&response).unwrap();

    assert_eq!(value["status"], "success");
    assert_eq!(value["outcomes"]["instagram"]["status"], "success");
    assert_eq!(value["outcomes"]["instagram"]["summary"]["totalViews"], 123212);
    assert_eq!(value["outcomes"]["tiktok"]["status"], "error");
    assert_eq!(value["outcomes"]["tiktok"]["error"]["code"], "transport");
    assert_eq!(value["aggregate"]["platformCount"], 1);
    assert!(value.get("message").is_none());
}

fn config_without_api_key() -> tessera::EngineConfig {
    let mut config = tessera::EngineConfig::default();
    config.upstream.api_key_env = "TESSERA_TEST_UNSET_API_KEY_VAR".to_string();
    config
}

#[tokio::test]
async fn test_configured_run_without_platforms_needs_no_api_key() {
    let config = config_without_api_key();
    let response =
        tessera::run_configured(&config, &BTreeSet::new(), None, &QueryOptions::default())
            .await
            .unwrap();

    assert_eq!(*response.status(), ResponseStatus::Success);
    assert!(response.outcomes().is_empty());
    assert_eq!(*response.aggregate().platform_count(), 0);
    assert!(response.message().is_some());
}

#[tokio::test]
async fn test_configured_run_with_platforms_requires_api_key() {
    let config = config_without_api_key();
    let platforms: BTreeSet<PlatformId> = [normalize("reddit")].into_iter().collect();
    let err = tessera::run_configured(&config, &platforms, None, &QueryOptions::default())
        .await
        .unwrap_err();

    assert!(matches!(err.kind(), tessera::TesseraErrorKind::Config(_)));
}
