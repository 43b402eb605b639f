//! Stateful form validator.
//!
//! [`FormValidator`] bundles a registry, an engine and the report of the last
//! run behind the classic add / validate / get-errors surface.

use crate::engine::{EngineConfig, ValidationEngine};
use crate::report::{ErrorMap, ValidationReport};
use crate::rules::{Rule, RuleError, RuleKind, RuleRegistry};
use crate::values::FieldValues;

/// Rules plus the outcome of the most recent validation.
///
/// ```rust
/// use std::collections::HashMap;
/// use formcheck_validator::form::FormValidator;
///
/// let mut form = FormValidator::new();
/// form.add_named_rule("Name", "req", None, None)?
///     .add_named_rule("Email", "req", None, Some("Please fill in Email"))?
///     .add_named_rule("Email", "email", None, None)?;
///
/// let mut post = HashMap::from([("Name".to_string(), "Ada".to_string())]);
/// assert!(!form.validate_form(&mut post));
/// for (field, message) in form.errors() {
///     println!("{field} : {message}");
/// }
/// assert_eq!(
///     form.errors()["Email"],
///     "Please fill in Email - Please provide a valid email address"
/// );
/// # Ok::<(), formcheck_validator::rules::RuleError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct FormValidator {
    registry: RuleRegistry,
    engine: ValidationEngine,
    last: ValidationReport,
}

impl FormValidator {
    /// Creates a validator with no rules and the default engine.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a validator around an existing registry.
    #[must_use]
    pub fn with_registry(registry: RuleRegistry, config: EngineConfig) -> Self {
        Self {
            registry,
            engine: ValidationEngine::with_config(config),
            last: ValidationReport::new(),
        }
    }

    /// Adds a rule. See [`RuleRegistry::add`].
    pub fn add_rule(
        &mut self,
        field: impl Into<String>,
        kind: RuleKind,
        parameter: Option<&str>,
        message: Option<&str>,
    ) -> Result<&mut Self, RuleError> {
        self.registry.add(field, kind, parameter, message)?;
        Ok(self)
    }

    /// Adds a rule by kind name. See [`RuleRegistry::add_named`].
    pub fn add_named_rule(
        &mut self,
        field: impl Into<String>,
        kind: &str,
        parameter: Option<&str>,
        message: Option<&str>,
    ) -> Result<&mut Self, RuleError> {
        self.registry.add_named(field, kind, parameter, message)?;
        Ok(self)
    }

    /// Adds a prebuilt rule.
    pub fn push_rule(&mut self, rule: Rule) -> Result<&mut Self, RuleError> {
        self.registry.add_rule(rule)?;
        Ok(self)
    }

    /// Validates `values`, replacing the errors of any previous run.
    ///
    /// Returns the verdict; transformations are applied to `values` in place.
    pub fn validate_form<V>(&mut self, values: &mut V) -> bool
    where
        V: FieldValues + ?Sized,
    {
        self.last = self.engine.validate(&self.registry, values);
        self.last.is_valid()
    }

    /// Errors of the last run, keyed by field.
    #[must_use]
    pub fn errors(&self) -> &ErrorMap {
        self.last.errors()
    }

    /// Full report of the last run.
    #[must_use]
    pub fn report(&self) -> &ValidationReport {
        &self.last
    }

    /// Forgets the errors of the last run.
    pub fn reset_errors(&mut self) {
        self.last = ValidationReport::new();
    }

    /// Removes every rule. Errors of the last run are kept.
    pub fn reset_rules(&mut self) {
        self.registry.reset();
    }

    /// The registered rules.
    #[must_use]
    pub fn registry(&self) -> &RuleRegistry {
        &self.registry
    }
}
