//! Keyword extraction from completion content.

use crate::{Error, Keyword, KeywordSet, Result};

/// Parse completion content into keywords.
///
/// The content must be a JSON array of strings. A JSON `null` yields an
/// empty set. Entries are kept verbatim, in order, duplicates and blank
/// strings included.
///
/// # Examples
///
/// ```
/// use kyp_search::extract_keywords;
///
/// let keywords = extract_keywords(r#"["rgb", "keyboard"]"#).unwrap();
/// assert_eq!(keywords.as_strs(), vec!["rgb", "keyboard"]);
///
/// assert!(extract_keywords("Sure! Here are your keywords: rgb").is_err());
/// ```
pub fn extract_keywords(raw: &str) -> Result<KeywordSet> {
    let parsed: Option<Vec<String>> =
        serde_json::from_str(raw.trim()).map_err(|source| Error::KeywordParse {
            message: "completion content is not a JSON array of strings".to_string(),
            source,
        })?;

    Ok(parsed
        .unwrap_or_default()
        .into_iter()
        .map(Keyword::new)
        .collect())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::filter_records;
    use kyp_core::Record;

    #[test]
    fn test_extracts_in_order_with_duplicates() {
        let set = extract_keywords(r#"["mouse", "wireless", "mouse"]"#).unwrap();
        assert_eq!(set.as_strs(), vec!["mouse", "wireless", "mouse"]);
    }

    #[test]
    fn test_keeps_casing_verbatim() {
        let set = extract_keywords(r#"["RGB"]"#).unwrap();
        assert_eq!(set.as_strs(), vec!["RGB"]);
    }

    #[test]
    fn test_surrounding_whitespace_is_allowed() {
        let set = extract_keywords("\n  [\"20\"]  \n").unwrap();
        assert_eq!(set.as_strs(), vec!["20"]);
    }

    #[test]
    fn test_null_and_empty_array_are_empty() {
        assert!(extract_keywords("null").unwrap().is_empty());
        assert!(extract_keywords("[]").unwrap().is_empty());
    }

    #[test]
    fn test_blank_entries_are_kept() {
        let set = extract_keywords(r#"["", "  ", "cable"]"#).unwrap();
        assert_eq!(set.as_strs(), vec!["", "  ", "cable"]);
    }

    #[test]
    fn test_empty_entry_matches_every_record() {
        let records = vec![Record::new("P1", "Mouse"), Record::new("P2", "Hub")];
        let set = extract_keywords(r#"["", "zzz"]"#).unwrap();
        assert_eq!(set.len(), 2);
        assert_eq!(filter_records(&records, &set).len(), 2);
    }

    #[test]
    fn test_prose_is_parse_error() {
        let err = extract_keywords("Here are the keywords: mouse, cheap").unwrap_err();
        assert!(matches!(err, Error::KeywordParse { .. }));
    }

    #[test]
    fn test_non_string_elements_are_parse_error() {
        assert!(extract_keywords("[20, \"mouse\"]").is_err());
        assert!(extract_keywords(r#"{"keywords": ["mouse"]}"#).is_err());
    }

    #[test]
    fn test_fenced_json_is_parse_error() {
        assert!(extract_keywords("```json\n[\"mouse\"]\n```").is_err());
    }
}
