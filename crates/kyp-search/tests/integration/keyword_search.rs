//! Integration tests for the keyword branch of the pipeline.

use kyp_search::SearchOutcome;

use crate::common::{TestHarness, catalog, ids, peripherals};

#[tokio::test]
async fn test_numeric_keyword_keeps_only_cheaper_record() {
    let harness = TestHarness::with_response(r#"["20"]"#);

    let outcome = harness
        .pipeline
        .evaluate("something under 20", peripherals())
        .await;

    assert_eq!(outcome.label(), "ai");
    assert_eq!(ids(outcome.records()), vec!["P001"]);
}

#[tokio::test]
async fn test_numeric_keyword_matches_light_but_pricey_record() {
    let harness = TestHarness::with_response(r#"["1"]"#);

    let outcome = harness.pipeline.evaluate("under 1", catalog()).await;

    // P003 costs 45 but weighs 0.3
    assert_eq!(ids(outcome.records()), vec!["P003"]);
}

#[tokio::test]
async fn test_text_and_numeric_keywords_union() {
    let harness = TestHarness::with_response(r#"["monitor", "20"]"#);

    let outcome = harness
        .pipeline
        .evaluate("a monitor or anything under 20", catalog())
        .await;

    assert_eq!(ids(outcome.records()), vec!["P001", "P003", "P004"]);
}

#[tokio::test]
async fn test_keywords_are_reported() {
    let harness = TestHarness::with_response(r#"["rgb", "keyboard"]"#);

    let outcome = harness
        .pipeline
        .evaluate("RGB keyboard", catalog())
        .await;

    match outcome {
        SearchOutcome::AiFiltered { records, keywords } => {
            assert_eq!(keywords.as_strs(), vec!["rgb", "keyboard"]);
            assert_eq!(ids(&records), vec!["P002"]);
        }
        other => unreachable!("expected AI branch, got {}", other.label()),
    }
}

#[tokio::test]
async fn test_query_is_sent_trimmed() {
    let harness = TestHarness::with_response("[]");

    harness.pipeline.evaluate("  hub  ", catalog()).await;

    let requests = harness.llm.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].messages[0].content, "hub");
}

#[tokio::test]
async fn test_no_matches_is_empty_not_fallback() {
    let harness = TestHarness::with_response(r#"["tablet"]"#);

    let outcome = harness.pipeline.evaluate("tablet", catalog()).await;

    assert_eq!(outcome.label(), "ai");
    assert!(outcome.records().is_empty());
}

#[tokio::test]
async fn test_blank_query_returns_everything_without_calling_out() {
    let harness = TestHarness::with_response(r#"["mouse"]"#);

    for raw in ["", "   ", "\n\t"] {
        let outcome = harness.pipeline.evaluate(raw, catalog()).await;
        assert_eq!(outcome, SearchOutcome::Unfiltered(catalog()));
    }
    assert_eq!(harness.llm.call_count(), 0);
}

#[tokio::test]
async fn test_concurrent_searches_are_independent() {
    let harness = TestHarness::with_response(r#"["mouse"]"#);

    let (a, b) = tokio::join!(
        harness.pipeline.evaluate("mouse", catalog()),
        harness.pipeline.evaluate("wireless mouse", peripherals()),
    );

    assert_eq!(ids(a.records()), vec!["P001"]);
    assert_eq!(ids(b.records()), vec!["P001"]);
    assert_eq!(harness.llm.call_count(), 2);
}
