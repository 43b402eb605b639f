//! Ordered rule storage.

use tracing::debug;

use super::checker::Checker;
use super::{ParameterKind, Rule, RuleError, RuleKind};

/// A rule together with its compiled checker.
#[derive(Debug, Clone)]
pub(crate) struct RegisteredRule {
    pub(crate) rule: Rule,
    pub(crate) checker: Checker,
}

/// The ordered sequence of rules a form is validated against.
///
/// Rules are evaluated in the order they were added. Adding a rule parses its
/// parameter and compiles its checker; a rule that cannot be evaluated is
/// refused with a [`RuleError`] and the registry is left unchanged.
///
/// ```rust
/// use formcheck_validator::rules::{RuleKind, RuleRegistry};
///
/// let mut registry = RuleRegistry::new();
/// registry
///     .add("name", RuleKind::Required, None, None)?
///     .add("name", RuleKind::MaxLen, Some("40"), None)?
///     .add_named("email", "email", None, Some("Please fill in Email"))?;
///
/// assert_eq!(registry.len(), 3);
/// assert!(registry.add("age", RuleKind::LessThan, Some("old"), None).is_err());
/// assert_eq!(registry.len(), 3);
/// # Ok::<(), formcheck_validator::rules::RuleError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct RuleRegistry {
    rules: Vec<RegisteredRule>,
}

impl RuleRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a rule.
    ///
    /// `parameter` is the length, numeric bound or pattern, depending on
    /// `kind`. `message` replaces the kind's default message when non-empty.
    pub fn add(
        &mut self,
        field: impl Into<String>,
        kind: RuleKind,
        parameter: Option<&str>,
        message: Option<&str>,
    ) -> Result<&mut Self, RuleError> {
        let mut rule = Rule::new(field, kind);
        if let Some(parameter) = parameter {
            rule = rule.with_parameter(parameter);
        }
        if let Some(message) = message {
            rule = rule.with_message(message);
        }
        self.add_rule(rule)
    }

    /// Appends a rule whose kind is given by name, such as `"req"` or
    /// `"max_len"`.
    pub fn add_named(
        &mut self,
        field: impl Into<String>,
        kind: &str,
        parameter: Option<&str>,
        message: Option<&str>,
    ) -> Result<&mut Self, RuleError> {
        let kind = kind.parse()?;
        self.add(field, kind, parameter, message)
    }

    /// Appends a prebuilt rule.
    pub fn add_rule(&mut self, rule: Rule) -> Result<&mut Self, RuleError> {
        let checker = Checker::compile(rule.kind(), rule.parameter())?;
        if rule.kind().parameter_kind() == ParameterKind::None && rule.parameter().is_some() {
            debug!(
                field = rule.field(),
                kind = %rule.kind(),
                "rule kind takes no parameter, ignoring it"
            );
        }
        debug!(
            field = rule.field(),
            kind = %rule.kind(),
            position = self.rules.len(),
            "registered rule"
        );
        self.rules.push(RegisteredRule { rule, checker });
        Ok(self)
    }

    /// Removes every rule.
    pub fn reset(&mut self) {
        debug!(cleared = self.rules.len(), "cleared rule registry");
        self.rules.clear();
    }

    /// Number of registered rules.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Returns true when no rule is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Iterates over the rules in registration order.
    pub fn rules(&self) -> impl ExactSizeIterator<Item = &Rule> + '_ {
        self.rules.iter().map(|entry| &entry.rule)
    }

    pub(crate) fn entries(&self) -> &[RegisteredRule] {
        &self.rules
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rules_keep_registration_order() {
        let mut registry = RuleRegistry::new();
        registry
            .add("b", RuleKind::Required, None, None)
            .unwrap()
            .add("a", RuleKind::Lowercase, None, None)
            .unwrap()
            .add("b", RuleKind::MinLen, Some("2"), Some("too short"))
            .unwrap();

        let order: Vec<_> = registry.rules().map(|r| (r.field(), r.kind())).collect();
        assert_eq!(
            order,
            [
                ("b", RuleKind::Required),
                ("a", RuleKind::Lowercase),
                ("b", RuleKind::MinLen)
            ]
        );
    }

    #[test]
    fn test_refused_rule_leaves_registry_unchanged() {
        let mut registry = RuleRegistry::new();
        registry.add("name", RuleKind::Required, None, None).unwrap();

        assert!(registry.add("name", RuleKind::MaxLen, None, None).is_err());
        assert!(registry.add_named("name", "bogus", None, None).is_err());
        assert!(registry.add("name", RuleKind::Regex, Some("["), None).is_err());
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_add_named_accepts_short_names() {
        let mut registry = RuleRegistry::new();
        registry.add_named("x", "ucfirst", None, None).unwrap();
        assert_eq!(
            registry.rules().next().map(Rule::kind),
            Some(RuleKind::CapitalizeFirst)
        );
    }

    #[test]
    fn test_reset() {
        let mut registry = RuleRegistry::new();
        registry.add("x", RuleKind::Email, None, None).unwrap();
        registry.reset();
        assert!(registry.is_empty());
        assert_eq!(registry.rules().count(), 0);
    }
}
