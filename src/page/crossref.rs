//! Cross-reference table carried by the invoking script node.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::DecorateError;

/// Where a reference key points and how it is displayed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CrossRefEntry {
    /// Page slug holding the target.
    pub slug: String,
    /// Display word (e.g. `Chapter`).
    pub text: String,
    /// Display number (e.g. `1`, `A.2`).
    pub value: String,
}

/// Reference key → entry, validated once when the page context is built.
#[derive(Debug, Clone, Default)]
pub struct CrossRefTable {
    entries: FxHashMap<String, CrossRefEntry>,
}

impl CrossRefTable {
    /// Deserialize the JSON payload of the `CROSSREF` attribute.
    pub fn from_json(json: &str) -> Result<Self, DecorateError> {
        let entries = serde_json::from_str(json).map_err(DecorateError::MalformedCrossRef)?;
        Ok(Self { entries })
    }

    /// Look up a key; a missing key is an authoring defect in the page.
    pub fn lookup(&self, key: &str) -> Result<&CrossRefEntry, DecorateError> {
        self.entries
            .get(key)
            .ok_or_else(|| DecorateError::UnknownCrossRef {
                key: key.to_string(),
            })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_json_ignores_extra_fields() {
        let table = CrossRefTable::from_json(
            r#"{"s:intro": {"slug": "intro", "toplevel": true, "text": "Chapter", "value": "1"}}"#,
        )
        .unwrap();

        assert_eq!(table.len(), 1);
        assert_eq!(
            table.lookup("s:intro").unwrap(),
            &CrossRefEntry {
                slug: "intro".to_string(),
                text: "Chapter".to_string(),
                value: "1".to_string(),
            }
        );
    }

    #[test]
    fn test_from_json_rejects_bad_shape() {
        // Missing `value`
        let err = CrossRefTable::from_json(r#"{"k": {"slug": "a", "text": "b"}}"#).unwrap_err();
        assert!(matches!(err, DecorateError::MalformedCrossRef(_)));

        // Not JSON at all
        let err = CrossRefTable::from_json("null-ish").unwrap_err();
        assert!(matches!(err, DecorateError::MalformedCrossRef(_)));
    }

    #[test]
    fn test_lookup_missing_key() {
        let table = CrossRefTable::from_json("{}").unwrap();
        assert!(table.is_empty());
        assert!(matches!(
            table.lookup("nope"),
            Err(DecorateError::UnknownCrossRef { key }) if key == "nope"
        ));
    }
}
