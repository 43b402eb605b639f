//! A single registered rule.

use serde::{Deserialize, Serialize};

use super::RuleKind;

/// Binds a field to a check or a transformation.
///
/// A rule is immutable once built; the registry keeps it in registration
/// order.
///
/// ```rust
/// use formcheck_validator::rules::{Rule, RuleKind};
///
/// let rule = Rule::new("age", RuleKind::LessThan)
///     .with_parameter("130")
///     .with_message("Nobody is that old");
///
/// assert_eq!(rule.field(), "age");
/// assert_eq!(rule.parameter(), Some("130"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rule {
    field: String,
    kind: RuleKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    parameter: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    message: Option<String>,
}

impl Rule {
    /// Creates a rule with no parameter and no custom message.
    pub fn new(field: impl Into<String>, kind: RuleKind) -> Self {
        Self {
            field: field.into(),
            kind,
            parameter: None,
            message: None,
        }
    }

    /// Sets the rule parameter (length, bound or pattern).
    #[must_use = "builder methods must be chained or built"]
    pub fn with_parameter(mut self, parameter: impl Into<String>) -> Self {
        self.parameter = Some(parameter.into());
        self
    }

    /// Sets a custom failure message, used instead of the default template.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Field this rule applies to.
    #[must_use]
    pub fn field(&self) -> &str {
        &self.field
    }

    /// Rule kind.
    #[must_use]
    pub fn kind(&self) -> RuleKind {
        self.kind
    }

    /// Parameter, or `None` when absent or empty.
    #[must_use]
    pub fn parameter(&self) -> Option<&str> {
        self.parameter.as_deref().filter(|p| !p.is_empty())
    }

    /// Custom message, or `None` when absent or empty.
    #[must_use]
    pub fn custom_message(&self) -> Option<&str> {
        self.message.as_deref().filter(|m| !m.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_parameter_and_message_read_as_absent() {
        let rule = Rule::new("name", RuleKind::Required)
            .with_parameter("")
            .with_message("");
        assert_eq!(rule.parameter(), None);
        assert_eq!(rule.custom_message(), None);
    }

    #[test]
    fn test_deserialize() {
        let rule: Rule =
            serde_json::from_str(r#"{"field":"zip","kind":"num","message":"Digits only"}"#)
                .unwrap();
        assert_eq!(rule.kind(), RuleKind::Numeric);
        assert_eq!(rule.parameter(), None);
        assert_eq!(rule.custom_message(), Some("Digits only"));
    }
}
