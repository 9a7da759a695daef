//! Integration tests for the substring fallback branch.

use std::time::Duration;

use kyp_llm::{MockCompletionProvider, MockReply};
use kyp_search::{FallbackReason, SearchOutcome, SearchPipeline};

use crate::common::{TestHarness, catalog, ids, peripherals};

fn fallback_reason(outcome: &SearchOutcome) -> FallbackReason {
    match outcome {
        SearchOutcome::LocalFallbackFiltered { reason, .. } => *reason,
        other => unreachable!("expected fallback, got {}", other.label()),
    }
}

#[tokio::test]
async fn test_unavailable_service_falls_back_to_substring() {
    let harness = TestHarness::with_llm(MockCompletionProvider::unavailable());

    let outcome = harness.pipeline.evaluate("rgb", peripherals()).await;

    assert_eq!(fallback_reason(&outcome), FallbackReason::UpstreamUnavailable);
    assert_eq!(ids(outcome.records()), vec!["P002"]);
}

#[tokio::test]
async fn test_non_json_content_falls_back() {
    let harness =
        TestHarness::with_response("Sure! The keywords are: ergonomic, mouse.");

    let outcome = harness.pipeline.evaluate("Ergonomic", peripherals()).await;

    assert_eq!(fallback_reason(&outcome), FallbackReason::KeywordParseError);
    assert_eq!(ids(outcome.records()), vec!["P001"]);
}

#[tokio::test]
async fn test_missing_content_falls_back() {
    let harness = TestHarness::with_llm(MockCompletionProvider::malformed());

    let outcome = harness.pipeline.evaluate("keyboard", catalog()).await;

    assert_eq!(fallback_reason(&outcome), FallbackReason::UpstreamMalformed);
    assert_eq!(ids(outcome.records()), vec!["P002"]);
}

#[tokio::test]
async fn test_fallback_does_not_apply_numeric_thresholds() {
    let harness = TestHarness::with_llm(MockCompletionProvider::unavailable());

    let outcome = harness.pipeline.evaluate("20", catalog()).await;

    assert!(outcome.is_fallback());
    assert!(outcome.records().is_empty());
}

#[tokio::test]
async fn test_fallback_matches_identifier() {
    let harness = TestHarness::with_llm(MockCompletionProvider::unavailable());

    let outcome = harness.pipeline.evaluate("p004", catalog()).await;

    assert_eq!(ids(outcome.records()), vec!["P004"]);
}

#[tokio::test(start_paused = true)]
async fn test_slow_service_times_out_into_fallback() {
    let harness = TestHarness::slow(Duration::from_secs(60), Duration::from_secs(5));

    let outcome = harness.pipeline.evaluate("mouse", catalog()).await;

    assert_eq!(fallback_reason(&outcome), FallbackReason::UpstreamUnavailable);
    assert_eq!(ids(outcome.records()), vec!["P001"]);
    assert_eq!(harness.llm.call_count(), 1);
}

#[tokio::test(start_paused = true)]
async fn test_dropped_search_abandons_completion_call() {
    let harness = TestHarness::slow(Duration::from_secs(60), Duration::from_secs(120));

    let result = tokio::time::timeout(
        Duration::from_secs(1),
        harness.pipeline.evaluate("mouse", catalog()),
    )
    .await;

    assert!(result.is_err());
}

#[tokio::test]
async fn test_recovery_after_transient_failure() {
    let harness = TestHarness::with_llm(MockCompletionProvider::scripted(vec![
        MockReply::Unavailable,
        MockReply::Content(r#"["mouse"]"#.to_string()),
    ]));

    let first = harness.pipeline.evaluate("wireless", catalog()).await;
    let second = harness.pipeline.evaluate("wireless", catalog()).await;

    assert!(first.is_fallback());
    assert_eq!(second.label(), "ai");
    assert_eq!(ids(second.records()), vec!["P001"]);
}

#[tokio::test]
async fn test_local_only_pipeline_uses_fallback() {
    let pipeline = SearchPipeline::local_only();

    let outcome = pipeline.evaluate("USB", catalog()).await;

    assert_eq!(fallback_reason(&outcome), FallbackReason::UpstreamUnavailable);
    assert_eq!(ids(outcome.records()), vec!["P003"]);
}
