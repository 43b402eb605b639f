//! The validation engine.
//!
//! One run is a sequential fold over the registry: each rule reads the live
//! value of its field, failures are merged into a fresh [`ValidationReport`],
//! and transformations write their result back into the caller's map so later
//! rules see it.

use std::borrow::Cow;

use serde::Deserialize;
use tracing::{debug, instrument, trace};

use crate::report::ValidationReport;
use crate::rules::{Outcome, RuleRegistry};
use crate::values::FieldValues;

/// Separator placed between two messages for the same field.
pub const DEFAULT_SEPARATOR: &str = " - ";

// ============================================================================
// CONFIG
// ============================================================================

/// Engine settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Joins multiple messages for the same field.
    pub separator: Cow<'static, str>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            separator: Cow::Borrowed(DEFAULT_SEPARATOR),
        }
    }
}

impl EngineConfig {
    /// Sets the message separator.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_separator(mut self, separator: impl Into<Cow<'static, str>>) -> Self {
        self.separator = separator.into();
        self
    }
}

// ============================================================================
// ENGINE
// ============================================================================

/// Evaluates a [`RuleRegistry`] against submitted values.
///
/// The engine holds no per-run state, so one instance may serve many runs,
/// including concurrent ones on separate value maps.
///
/// ```rust
/// use std::collections::HashMap;
/// use formcheck_validator::engine::ValidationEngine;
/// use formcheck_validator::rules::{RuleKind, RuleRegistry};
///
/// let mut registry = RuleRegistry::new();
/// registry
///     .add("name", RuleKind::TrimWhitespace, None, None)?
///     .add("name", RuleKind::Required, None, None)?
///     .add("zip", RuleKind::Numeric, None, None)?;
///
/// let mut values = HashMap::from([
///     ("name".to_string(), "   ".to_string()),
///     ("zip".to_string(), "12a".to_string()),
/// ]);
/// let report = ValidationEngine::new().validate(&registry, &mut values);
///
/// assert!(!report.is_valid());
/// assert_eq!(values["name"], "");
/// assert_eq!(report.error("name"), Some("Please enter the value for name"));
/// assert_eq!(report.error("zip"), Some("Please provide numeric input for zip"));
/// # Ok::<(), formcheck_validator::rules::RuleError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct ValidationEngine {
    config: EngineConfig,
}

impl ValidationEngine {
    /// Creates an engine with the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an engine with the given configuration.
    #[must_use]
    pub fn with_config(config: EngineConfig) -> Self {
        Self { config }
    }

    /// Returns the engine configuration.
    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Runs every rule in registration order against `values`.
    ///
    /// A field missing from `values` reads as `""` for checks and is left
    /// alone by transformations. A failing rule never stops later rules.
    #[instrument(level = "debug", name = "validate", skip_all, fields(rules = registry.len()))]
    pub fn validate<V>(&self, registry: &RuleRegistry, values: &mut V) -> ValidationReport
    where
        V: FieldValues + ?Sized,
    {
        let mut report = ValidationReport::new();

        for entry in registry.entries() {
            let rule = &entry.rule;
            let field = rule.field();
            let current = values.value(field);

            if current.is_none() && rule.kind().is_transform() {
                trace!(field, kind = %rule.kind(), "field not submitted, transformation skipped");
                continue;
            }

            match entry.checker.run(current.unwrap_or_default()) {
                Outcome::Passed => {}
                Outcome::Transformed(value) => {
                    trace!(field, kind = %rule.kind(), "value transformed");
                    values.replace(field, value);
                }
                Outcome::Failed(error) => {
                    let error = error.with_field(field.to_owned());
                    let message = rule
                        .custom_message()
                        .map_or_else(|| error.render(), str::to_owned);
                    debug!(field, kind = %rule.kind(), code = %error.code, "rule failed");
                    report.record(field, message, error, &self.config.separator);
                }
            }
        }

        debug!(
            valid = report.is_valid(),
            failed_fields = report.len(),
            "validation finished"
        );
        report
    }

    /// Like [`validate`](Self::validate), taking the values by value and
    /// handing them back after transformation.
    pub fn validate_owned<V>(&self, registry: &RuleRegistry, mut values: V) -> (ValidationReport, V)
    where
        V: FieldValues,
    {
        let report = self.validate(registry, &mut values);
        (report, values)
    }
}
