//! Common test utilities and harness for KYP search integration tests.

use std::sync::Arc;
use std::time::Duration;

use kyp_core::Record;
use kyp_llm::MockCompletionProvider;
use kyp_search::{CompletionClient, SearchPipeline};
use kyp_store::MemoryStore;

/// Test harness for integration tests.
///
/// Holds the mock provider so tests can assert on the calls it received.
pub struct TestHarness {
    /// Mock completion provider
    pub llm: Arc<MockCompletionProvider>,
    /// Pipeline wired to `llm`
    pub pipeline: SearchPipeline,
}

impl TestHarness {
    /// Creates a harness around a custom mock provider.
    pub fn with_llm(llm: MockCompletionProvider) -> Self {
        let llm = Arc::new(llm);
        let pipeline = SearchPipeline::new(CompletionClient::new(llm.clone()));
        Self { llm, pipeline }
    }

    /// Creates a harness whose provider always returns `content`.
    pub fn with_response(content: &str) -> Self {
        Self::with_llm(MockCompletionProvider::with_response(content))
    }

    /// Creates a harness whose provider answers only after `delay`, with a
    /// client timeout of `timeout`.
    pub fn slow(delay: Duration, timeout: Duration) -> Self {
        let llm = Arc::new(MockCompletionProvider::with_response(r#"["mouse"]"#).with_delay(delay));
        let client = CompletionClient::new(llm.clone()).with_timeout(timeout);
        Self {
            llm,
            pipeline: SearchPipeline::new(client),
        }
    }
}

/// Keyboard and mouse pair used by the substring scenarios.
pub fn peripherals() -> Vec<Record> {
    vec![
        Record::new("P002", "Mechanical Keyboard")
            .with_price(89.99)
            .with_weight(30.0)
            .with_notes("RGB backlight, blue switches"),
        Record::new("P001", "Wireless Mouse")
            .with_price(19.99)
            .with_weight(25.0)
            .with_notes("Ergonomic design"),
    ]
}

/// A slightly larger catalog with varied prices and weights.
pub fn catalog() -> Vec<Record> {
    let mut records = peripherals();
    records.extend([
        Record::new("P003", "USB-C Hub")
            .with_price(45.0)
            .with_weight(0.3)
            .with_notes("4 ports, aluminium"),
        Record::new("P004", "27 inch Monitor")
            .with_price(249.0)
            .with_weight(5200.0)
            .with_notes("IPS panel"),
    ]);
    records
}

/// A memory store seeded with [`catalog`].
pub fn catalog_store() -> MemoryStore {
    MemoryStore::with_records(catalog())
}

/// Product ids of `records`, in order.
pub fn ids(records: &[Record]) -> Vec<&str> {
    records.iter().map(|r| r.product_id.as_str()).collect()
}
