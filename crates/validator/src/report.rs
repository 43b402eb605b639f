//! The result of one validation run.

use indexmap::IndexMap;
use serde::ser::{Serialize, SerializeStruct, Serializer};

use crate::foundation::ValidationError;

/// Combined error message per field, in order of each field's first failure.
pub type ErrorMap = IndexMap<String, String>;

/// Verdict and errors of a validation run.
///
/// Serializes as `{"valid": bool, "errors": {field: message}, "failures": [...]}`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    errors: ErrorMap,
    failures: Vec<ValidationError>,
}

impl ValidationReport {
    /// Creates an empty, passing report.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a failure for `error.field`.
    ///
    /// `message` is appended to the field's existing entry with `separator`.
    pub(crate) fn record(&mut self, field: &str, message: String, error: ValidationError, separator: &str) {
        match self.errors.get_mut(field) {
            Some(existing) => {
                existing.push_str(separator);
                existing.push_str(&message);
            }
            None => {
                self.errors.insert(field.to_owned(), message);
            }
        }
        self.failures.push(error);
    }

    /// The verdict: true when no rule failed.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Combined messages keyed by field.
    #[must_use]
    pub fn errors(&self) -> &ErrorMap {
        &self.errors
    }

    /// Combined message for one field.
    #[must_use]
    pub fn error(&self, field: &str) -> Option<&str> {
        self.errors.get(field).map(String::as_str)
    }

    /// Every failure in rule order, with its code, field and parameters.
    #[must_use]
    pub fn failures(&self) -> &[ValidationError] {
        &self.failures
    }

    /// Number of fields with at least one failure.
    #[must_use]
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Returns true when no field failed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Consumes the report, returning the error map.
    #[must_use]
    pub fn into_errors(self) -> ErrorMap {
        self.errors
    }

    /// Converts to a `Result`, with the error map on failure.
    pub fn into_result(self) -> Result<(), ErrorMap> {
        if self.is_valid() {
            Ok(())
        } else {
            Err(self.errors)
        }
    }
}

impl Serialize for ValidationReport {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("ValidationReport", 3)?;
        state.serialize_field("valid", &self.is_valid())?;
        state.serialize_field("errors", &self.errors)?;
        state.serialize_field("failures", &self.failures)?;
        state.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_messages_join_in_order() {
        let mut report = ValidationReport::new();
        report.record("a", "first".into(), ValidationError::required(), " - ");
        report.record("b", "other".into(), ValidationError::required(), " - ");
        report.record("a", "second".into(), ValidationError::required(), " - ");

        assert!(!report.is_valid());
        assert_eq!(report.error("a"), Some("first - second"));
        assert_eq!(report.errors().keys().collect::<Vec<_>>(), ["a", "b"]);
        assert_eq!(report.failures().len(), 3);
    }

    #[test]
    fn test_into_result() {
        assert!(ValidationReport::new().into_result().is_ok());

        let mut report = ValidationReport::new();
        report.record("a", "bad".into(), ValidationError::required(), " - ");
        let errors = report.into_result().unwrap_err();
        assert_eq!(errors["a"], "bad");
    }

    #[test]
    fn test_serialize() {
        let mut report = ValidationReport::new();
        report.record(
            "name",
            "Please enter the value for name".into(),
            ValidationError::required().with_field("name"),
            " - ",
        );

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "valid": false,
                "errors": { "name": "Please enter the value for name" },
                "failures": [{
                    "code": "required",
                    "message": "Please enter the value for {field}",
                    "field": "name"
                }]
            })
        );
    }
}
