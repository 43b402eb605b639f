//! Declarative rule sets loaded from JSON.
//!
//! ```json
//! {
//!   "separator": " - ",
//!   "rules": [
//!     { "field": "Name",  "rule": "req" },
//!     { "field": "Name",  "rule": "maxlen", "param": 40 },
//!     { "field": "Email", "rule": "email", "message": "Please fill in Email" }
//!   ]
//! }
//! ```

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::engine::EngineConfig;
use crate::form::FormValidator;
use crate::rules::{Rule, RuleError, RuleKind, RuleRegistry};

/// A rule set could not be loaded.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// The document is not valid JSON or does not have the expected shape.
    #[error("invalid rule set: {0}")]
    Parse(#[from] serde_json::Error),

    /// A rule in the set was refused.
    #[error("rule #{index} for field '{field}': {source}")]
    Rule {
        /// Position of the rule in the set.
        index: usize,
        /// Field the rule targets.
        field: String,
        /// Why it was refused.
        #[source]
        source: RuleError,
    },
}

/// A rule parameter, written in JSON as a string or a number.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ParamValue {
    /// `"40"`, `"/^[a-z]+$/"`
    Text(String),
    /// `40`, `2.5`
    Number(serde_json::Number),
}

impl ParamValue {
    fn to_parameter(&self) -> String {
        match self {
            Self::Text(text) => text.clone(),
            Self::Number(number) => number.to_string(),
        }
    }
}

/// One rule of a [`RuleSetConfig`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RuleSpec {
    pub field: String,
    /// Kind name, long or short form.
    pub rule: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub param: Option<ParamValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl RuleSpec {
    fn to_rule(&self) -> Result<Rule, RuleError> {
        let kind: RuleKind = self.rule.parse()?;
        let mut rule = Rule::new(self.field.clone(), kind);
        if let Some(param) = &self.param {
            rule = rule.with_parameter(param.to_parameter());
        }
        if let Some(message) = &self.message {
            rule = rule.with_message(message.clone());
        }
        Ok(rule)
    }
}

/// An ordered rule set plus engine settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RuleSetConfig {
    /// Overrides the message separator.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub separator: Option<String>,
    #[serde(default)]
    pub rules: Vec<RuleSpec>,
}

impl RuleSetConfig {
    /// Parses a rule set from JSON text.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads a rule set from an already parsed JSON value.
    pub fn from_json_value(value: serde_json::Value) -> Result<Self, ConfigError> {
        Ok(serde_json::from_value(value)?)
    }

    /// Engine settings described by this set.
    #[must_use]
    pub fn engine_config(&self) -> EngineConfig {
        match &self.separator {
            Some(separator) => EngineConfig::default().with_separator(separator.clone()),
            None => EngineConfig::default(),
        }
    }

    /// Registers every rule in order.
    ///
    /// Stops at the first refused rule.
    pub fn registry(&self) -> Result<RuleRegistry, ConfigError> {
        let mut registry = RuleRegistry::new();
        for (index, spec) in self.rules.iter().enumerate() {
            spec.to_rule()
                .and_then(|rule| registry.add_rule(rule).map(|_| ()))
                .map_err(|source| ConfigError::Rule {
                    index,
                    field: spec.field.clone(),
                    source,
                })?;
        }
        debug!(rules = registry.len(), "loaded rule set");
        Ok(registry)
    }

    /// Builds a ready-to-use [`FormValidator`].
    pub fn build(&self) -> Result<FormValidator, ConfigError> {
        Ok(FormValidator::with_registry(self.registry()?, self.engine_config()))
    }
}
