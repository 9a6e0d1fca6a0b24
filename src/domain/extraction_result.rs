// ============================================================
// Layer 3 — ExtractionResult
// ============================================================
// The flat field → answer record produced by one run.
//
// A result is always created pre-filled with every declared
// field set to NOT_FOUND, then answers overwrite the sentinel.
// That makes "every field key is present" a property of the
// constructor rather than of the extraction loop.
//
// IndexMap keeps keys in FieldQuery order, so two runs over the
// same input serialise to the same bytes.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::domain::field_query::FieldQuery;

/// Sentinel stored for a field the model could not answer.
pub const NOT_FOUND: &str = "Not found";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExtractionResult {
    fields: IndexMap<String, String>,
}

impl ExtractionResult {
    /// Create a result holding every query's field set to NOT_FOUND.
    pub fn with_fields(queries: &[FieldQuery]) -> Self {
        let fields = queries
            .iter()
            .map(|q| (q.field.to_string(), NOT_FOUND.to_string()))
            .collect();
        Self { fields }
    }

    /// Store an answer for a declared field.
    /// Unknown fields are ignored so the key set never grows.
    pub fn set(&mut self, field: &str, answer: impl Into<String>) -> bool {
        match self.fields.get_mut(field) {
            Some(slot) => {
                *slot = answer.into();
                true
            }
            None => false,
        }
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.fields.get(field).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Field identifiers in output order
    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    /// Number of fields that hold a real answer
    pub fn found_count(&self) -> usize {
        self.fields.values().filter(|v| v.as_str() != NOT_FOUND).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::field_query::{FIELD_COUNT, TENDER_FIELDS};

    #[test]
    fn test_prefilled_with_sentinel() {
        let r = ExtractionResult::with_fields(&TENDER_FIELDS);
        assert_eq!(r.len(), FIELD_COUNT);
        assert_eq!(r.found_count(), 0);
        assert_eq!(r.get("tender_fee"), Some(NOT_FOUND));
    }

    #[test]
    fn test_set_unknown_field_is_ignored() {
        let mut r = ExtractionResult::with_fields(&TENDER_FIELDS);
        assert!(!r.set("not_a_field", "x"));
        assert_eq!(r.len(), FIELD_COUNT);
        assert!(r.get("not_a_field").is_none());
    }

    #[test]
    fn test_serialises_in_query_order() {
        let mut r = ExtractionResult::with_fields(&TENDER_FIELDS);
        r.set("emd", "rs. 90,000/-");
        let json = serde_json::to_string(&r).unwrap();
        let first = json.find("reference_number").unwrap();
        let last = json.find("arbitration_clause").unwrap();
        assert!(first < last);
        assert!(json.contains("\"emd\":\"rs. 90,000/-\""));
    }
}
