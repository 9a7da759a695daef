//! Substring fallback used when keyword extraction is unavailable.

use kyp_core::Record;

use crate::Query;

/// Records whose id, description, or notes contain the query.
///
/// Matching is a case-insensitive substring test against the whole trimmed
/// query, so `"rgb"` finds `"RGB backlight"` but `"rgb mouse"` only finds
/// records containing that exact phrase. Order is preserved.
pub fn fallback_filter(records: &[Record], query: &Query) -> Vec<Record> {
    let needle = query.needle();
    records
        .iter()
        .filter(|record| {
            [&record.product_id, &record.description, &record.notes]
                .iter()
                .any(|field| field.to_lowercase().contains(&needle))
        })
        .cloned()
        .collect()
}
