//! Tests for error classification and display.

use std::time::Duration;

use kyp_search::{Error, FallbackReason, Query, extract_keywords};

#[test]
fn test_empty_query_error() {
    let err = Query::parse("  ").unwrap_err();
    assert_eq!(err.to_string(), "Query cannot be empty");
    assert!(!err.is_recoverable());
    assert_eq!(FallbackReason::from_error(&err), None);
}

#[test]
fn test_upstream_status_error() {
    let err = Error::from(kyp_llm::Error::status(503));
    assert!(err.to_string().contains("HTTP 503"));
    assert!(err.is_recoverable());
    assert_eq!(
        FallbackReason::from_error(&err),
        Some(FallbackReason::UpstreamUnavailable)
    );
}

#[test]
fn test_timeout_is_unavailable() {
    let err = Error::from(kyp_llm::Error::timeout(Duration::from_secs(5)));
    assert!(err.to_string().contains("5s"));
    assert_eq!(
        FallbackReason::from_error(&err),
        Some(FallbackReason::UpstreamUnavailable)
    );
}

#[test]
fn test_malformed_error() {
    let err = Error::from(kyp_llm::Error::malformed("no choices"));
    assert!(err.to_string().contains("no choices"));
    assert_eq!(
        FallbackReason::from_error(&err),
        Some(FallbackReason::UpstreamMalformed)
    );
}

#[test]
fn test_keyword_parse_error_keeps_source() {
    let err = extract_keywords("not json").unwrap_err();
    assert!(err.to_string().starts_with("Keyword parse error"));
    assert!(std::error::Error::source(&err).is_some());
    assert_eq!(
        FallbackReason::from_error(&err),
        Some(FallbackReason::KeywordParseError)
    );
}

#[test]
fn test_store_error() {
    let err = Error::from(kyp_store::Error::conflict("P001"));
    assert_eq!(err.to_string(), "Storage error: Record already exists: P001");
    assert!(!err.is_recoverable());
    assert_eq!(FallbackReason::from_error(&err), None);
}

#[test]
fn test_fallback_reason_labels() {
    assert_eq!(FallbackReason::UpstreamUnavailable.to_string(), "upstream_unavailable");
    assert_eq!(FallbackReason::UpstreamMalformed.as_str(), "upstream_malformed");
    assert_eq!(FallbackReason::KeywordParseError.as_str(), "keyword_parse_error");
}

#[test]
fn test_extract_edge_cases() {
    assert!(extract_keywords("").is_err());
    assert!(extract_keywords("   ").is_err());
    assert!(extract_keywords("null").unwrap().is_empty());
    assert_eq!(
        extract_keywords(r#"["  padded  "]"#).unwrap().as_strs(),
        vec!["  padded  "]
    );
}
