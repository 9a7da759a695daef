//! Validated search query.

use std::fmt;
use std::str::FromStr;

use crate::{Error, Result};

/// A non-blank search query, trimmed of surrounding whitespace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query(String);

impl Query {
    /// Parse a raw query.
    ///
    /// Fails with [`Error::EmptyQuery`] when the input is empty or only
    /// whitespace.
    ///
    /// # Examples
    ///
    /// ```
    /// use kyp_search::Query;
    ///
    /// let query = Query::parse("  RGB keyboard ").unwrap();
    /// assert_eq!(query.as_str(), "RGB keyboard");
    /// assert!(Query::parse("   ").is_err());
    /// ```
    pub fn parse(raw: &str) -> Result<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(Error::EmptyQuery);
        }
        Ok(Self(trimmed.to_string()))
    }

    /// The query text.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Lowercased text used for substring matching.
    pub fn needle(&self) -> String {
        self.0.to_lowercase()
    }
}

impl FromStr for Query {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Query {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
