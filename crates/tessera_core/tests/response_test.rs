//! Tests for outcomes and response assembly.

use chrono::Utc;
use serde_json::json;
use std::collections::{BTreeMap, BTreeSet};
use tessera_core::{
    AnalyticsResponse, FetchError, FetchErrorCode, FetchOutcome, KnownPlatform, MetricCounts,
    NO_PLATFORMS_MESSAGE, PlatformId, PlatformSummary, ResponseStatus, assemble, assemble_checked,
};
use tessera_error::InvariantErrorKind;

fn success(platform: KnownPlatform, views: u64) -> (PlatformId, FetchOutcome) {
    let counts = MetricCounts {
        views,
        ..Default::default()
    };
    let id = PlatformId::Known(platform);
    (
        id.clone(),
        PlatformSummary::from_counts(id, counts, Utc::now()).into(),
    )
}

fn failure(platform: KnownPlatform) -> (PlatformId, FetchOutcome) {
    let id = PlatformId::Known(platform);
    (
        id.clone(),
        FetchError::new(id, FetchErrorCode::Timeout, "timed out").into(),
    )
}

#[test]
fn test_error_outcome_shape() {
    let (_, outcome) = failure(KnownPlatform::Facebook);
    assert_eq!(
        serde_json::to_value(&outcome).unwrap(),
        json!({
            "status": "error",
            "error": {
                "platform": "facebook",
                "code": "timeout",
                "message": "timed out"
            }
        })
    );
}

#[test]
fn test_code_display_matches_wire_name() {
    let code = FetchErrorCode::InvalidPayload;
    assert_eq!(serde_json::to_value(code).unwrap(), json!(code.to_string()));
}

#[test]
fn test_partial_success_is_success() {
    let outcomes: BTreeMap<_, _> = [
        success(KnownPlatform::Instagram, 123_212),
        failure(KnownPlatform::Facebook),
    ]
    .into_iter()
    .collect();
    let response = assemble(outcomes);
    assert_eq!(*response.status(), ResponseStatus::Success);
    assert_eq!(*response.aggregate().total_views(), 123_212);
    assert_eq!(response.errors().count(), 1);
    assert_eq!(response.summaries().count(), 1);
}

#[test]
fn test_all_failed_is_error() {
    let outcomes: BTreeMap<_, _> = [failure(KnownPlatform::Facebook), failure(KnownPlatform::Reddit)]
        .into_iter()
        .collect();
    let response = assemble(outcomes);
    assert_eq!(*response.status(), ResponseStatus::Error);
    assert_eq!(*response.aggregate().platform_count(), 0);
    assert_eq!(response.outcomes().len(), 2);
}

#[test]
fn test_checked_rejects_missing_platform() {
    let requested = BTreeSet::from([
        PlatformId::Known(KnownPlatform::Facebook),
        PlatformId::Known(KnownPlatform::Instagram),
    ]);
    let outcomes: BTreeMap<_, _> = [success(KnownPlatform::Instagram, 1)].into_iter().collect();
    let err = assemble_checked(&requested, outcomes).unwrap_err();
    assert_eq!(
        *err.kind(),
        InvariantErrorKind::MissingOutcome("facebook".to_string())
    );
}

#[test]
fn test_checked_rejects_no_outcomes() {
    let requested = BTreeSet::from([PlatformId::Known(KnownPlatform::Tiktok)]);
    let err = assemble_checked(&requested, BTreeMap::new()).unwrap_err();
    assert_eq!(*err.kind(), InvariantErrorKind::NoOutcomes(1));
}

#[test]
fn test_checked_rejects_unrequested_outcome() {
    let requested = BTreeSet::from([PlatformId::Known(KnownPlatform::Tiktok)]);
    let outcomes: BTreeMap<_, _> = [
        success(KnownPlatform::Tiktok, 1),
        success(KnownPlatform::Youtube, 1),
    ]
    .into_iter()
    .collect();
    let err = assemble_checked(&requested, outcomes).unwrap_err();
    assert_eq!(
        *err.kind(),
        InvariantErrorKind::UnexpectedOutcome("youtube".to_string())
    );
}

#[test]
fn test_empty_response_shape() {
    let json = serde_json::to_value(AnalyticsResponse::empty()).unwrap();
    assert_eq!(json["status"], "success");
    assert_eq!(json["message"], NO_PLATFORMS_MESSAGE);
    assert_eq!(json["outcomes"], json!({}));
    assert_eq!(json["aggregate"]["totalViews"], 0);
}
