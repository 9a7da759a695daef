//! Keyword types.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A single search term extracted from a query.
///
/// Keywords are expected to be lowercase, but casing is not enforced here.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Keyword(String);

impl Keyword {
    /// Creates a keyword.
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    /// The keyword text.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The keyword as a finite decimal number, if it is one.
    ///
    /// The text is parsed verbatim, so surrounding whitespace makes it
    /// non-numeric.
    ///
    /// ```
    /// use kyp_search::Keyword;
    ///
    /// assert_eq!(Keyword::new("20").as_number(), Some(20.0));
    /// assert_eq!(Keyword::new("19.99").as_number(), Some(19.99));
    /// assert_eq!(Keyword::new("mouse").as_number(), None);
    /// assert_eq!(Keyword::new("inf").as_number(), None);
    /// assert_eq!(Keyword::new(" 42 ").as_number(), None);
    /// ```
    pub fn as_number(&self) -> Option<f64> {
        self.0
            .parse::<f64>()
            .ok()
            .filter(|n| n.is_finite())
    }
}

impl fmt::Display for Keyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Keyword {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for Keyword {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// Ordered keywords for one query. Duplicates are allowed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KeywordSet(Vec<Keyword>);

impl KeywordSet {
    /// Creates a set from keywords.
    pub fn new(keywords: Vec<Keyword>) -> Self {
        Self(keywords)
    }

    /// Number of keywords.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` when there are no keywords.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates keywords in order.
    pub fn iter(&self) -> std::slice::Iter<'_, Keyword> {
        self.0.iter()
    }

    /// Keyword texts, for logging and responses.
    pub fn as_strs(&self) -> Vec<&str> {
        self.0.iter().map(Keyword::as_str).collect()
    }
}

impl<K: Into<Keyword>> FromIterator<K> for KeywordSet {
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

impl<'a> IntoIterator for &'a KeywordSet {
    type Item = &'a Keyword;
    type IntoIter = std::slice::Iter<'a, Keyword>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl IntoIterator for KeywordSet {
    type Item = Keyword;
    type IntoIter = std::vec::IntoIter<Keyword>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}
