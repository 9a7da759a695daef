//! Keyword filter over product records.
//!
//! A record matches when any keyword either
//!
//! - occurs, case-insensitively, in its description or notes, or
//! - parses as a number `n` with `price <= n` or `weight <= n`.
//!
//! Keywords are taken verbatim. An empty keyword occurs in every text, and a
//! keyword with surrounding whitespace is never numeric.
//!
//! There is no scoring. Output order is input order.
//!
//! The numeric rule compares one threshold against both price and weight
//! because a bare number in a query does not say which one it means.

use kyp_core::Record;

use crate::{Keyword, KeywordSet};

/// Record field that produced a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchField {
    /// Free-text description.
    Description,
    /// Free-text notes.
    Notes,
    /// Unit price.
    Price,
    /// Weight.
    Weight,
}

/// Why a record was kept.
#[derive(Debug, Clone, PartialEq)]
pub enum MatchReason {
    /// The keyword occurs in a text field.
    Text {
        /// Matching keyword
        keyword: Keyword,
        /// Field containing it
        field: MatchField,
    },
    /// A numeric field is at or below the keyword's value.
    Numeric {
        /// Matching keyword
        keyword: Keyword,
        /// Parsed threshold
        threshold: f64,
        /// Field at or below it
        field: MatchField,
    },
}

impl MatchReason {
    /// The keyword responsible for the match.
    pub fn keyword(&self) -> &Keyword {
        match self {
            MatchReason::Text { keyword, .. } | MatchReason::Numeric { keyword, .. } => keyword,
        }
    }
}

struct Term<'a> {
    keyword: &'a Keyword,
    lowered: String,
    threshold: Option<f64>,
}

/// A keyword predicate prepared for repeated evaluation.
///
/// Lowercasing and number parsing happen once in [`RecordFilter::new`].
pub struct RecordFilter<'a> {
    terms: Vec<Term<'a>>,
}

impl<'a> RecordFilter<'a> {
    /// Prepare a filter for the given keywords.
    pub fn new(keywords: &'a KeywordSet) -> Self {
        let terms = keywords
            .iter()
            .map(|keyword| Term {
                keyword,
                lowered: keyword.as_str().to_lowercase(),
                threshold: keyword.as_number(),
            })
            .collect();
        Self { terms }
    }

    /// First reason the record matches, in keyword order.
    ///
    /// For each keyword the text fields are checked before the numeric ones.
    pub fn explain(&self, record: &Record) -> Option<MatchReason> {
        let description = record.description.to_lowercase();
        let notes = record.notes.to_lowercase();

        self.terms.iter().find_map(|term| {
            let text_field = if description.contains(&term.lowered) {
                Some(MatchField::Description)
            } else if notes.contains(&term.lowered) {
                Some(MatchField::Notes)
            } else {
                None
            };
            if let Some(field) = text_field {
                return Some(MatchReason::Text {
                    keyword: term.keyword.clone(),
                    field,
                });
            }

            let threshold = term.threshold?;
            let numeric_field = if record.price <= threshold {
                MatchField::Price
            } else if record.weight <= threshold {
                MatchField::Weight
            } else {
                return None;
            };
            Some(MatchReason::Numeric {
                keyword: term.keyword.clone(),
                threshold,
                field: numeric_field,
            })
        })
    }

    /// Returns `true` when any keyword matches the record.
    pub fn matches(&self, record: &Record) -> bool {
        self.explain(record).is_some()
    }

    /// Matching records, in input order.
    pub fn apply(&self, records: &[Record]) -> Vec<Record> {
        records
            .iter()
            .filter(|record| self.matches(record))
            .cloned()
            .collect()
    }
}

/// Filter `records` by `keywords`.
///
/// An empty keyword set matches nothing.
pub fn filter_records(records: &[Record], keywords: &KeywordSet) -> Vec<Record> {
    RecordFilter::new(keywords).apply(records)
}
