//! Integration tests for searching a record store.

use kyp_core::Record;
use kyp_llm::MockCompletionProvider;
use kyp_search::SearchPipeline;
use kyp_store::{JsonFileStore, MemoryStore, RecordStore};

use crate::common::{TestHarness, catalog, catalog_store, ids};

#[tokio::test]
async fn test_search_reads_snapshot_from_store() {
    let harness = TestHarness::with_response(r#"["aluminium"]"#);
    let store = catalog_store();

    let outcome = harness.pipeline.search("metal hub", &store).await.unwrap();

    assert_eq!(outcome.label(), "ai");
    assert_eq!(ids(outcome.records()), vec!["P003"]);
}

#[tokio::test]
async fn test_search_sees_newly_created_records() {
    let harness = TestHarness::with_llm(MockCompletionProvider::unavailable());
    let store = MemoryStore::new();

    assert!(
        harness
            .pipeline
            .search_records("cable", &store)
            .await
            .unwrap()
            .is_empty()
    );

    store
        .create(Record::new("P010", "HDMI cable").with_price(9.5))
        .await
        .unwrap();

    let records = harness
        .pipeline
        .search_records("cable", &store)
        .await
        .unwrap();
    assert_eq!(ids(&records), vec!["P010"]);
}

#[tokio::test]
async fn test_blank_query_over_store_is_full_catalog() {
    let pipeline = SearchPipeline::local_only();
    let store = catalog_store();

    let records = pipeline.search_records(" ", &store).await.unwrap();

    assert_eq!(records, catalog());
}

#[tokio::test]
async fn test_search_over_json_file_store() {
    let dir = tempfile::tempdir().unwrap();
    let store = JsonFileStore::new(dir.path().join("catalog.json"));
    for record in catalog() {
        store.create(record).await.unwrap();
    }
    let harness = TestHarness::with_response(r#"["ips"]"#);

    let records = harness
        .pipeline
        .search_records("IPS screen", &store)
        .await
        .unwrap();

    assert_eq!(ids(&records), vec!["P004"]);
}

#[tokio::test]
async fn test_corrupt_store_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("catalog.json");
    std::fs::write(&path, "{not json").unwrap();
    let store = JsonFileStore::new(path);

    let err = SearchPipeline::local_only()
        .search("mouse", &store)
        .await
        .unwrap_err();

    assert!(matches!(err, kyp_search::Error::Store(_)));
    assert!(!err.is_recoverable());
}
