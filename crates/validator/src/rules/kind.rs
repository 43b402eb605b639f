//! The closed set of rule kinds.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::RuleError;
use crate::transform::Transform;

/// What a rule does to its field.
///
/// Kinds parse from their snake_case name (`"max_len"`) or from the short
/// form-validator names (`"maxlen"`, `"req"`, `"caps"`, …), ignoring case and
/// surrounding whitespace. They serialize as the snake_case name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum RuleKind {
    /// Value must be non-empty.
    Required,
    /// Value length must not exceed the parameter.
    MaxLen,
    /// Value length must reach the parameter.
    MinLen,
    /// ASCII letters only.
    Alpha,
    /// ASCII letters and digits only.
    Alphanumeric,
    /// ASCII digits only.
    Numeric,
    /// Email-shaped value.
    Email,
    /// Digits only, numerically below the parameter.
    LessThan,
    /// Digits only, numerically above the parameter.
    GreaterThan,
    /// Value matches the parameter pattern.
    Regex,
    /// Rewrites the value to lowercase.
    Lowercase,
    /// Rewrites the value without surrounding whitespace.
    TrimWhitespace,
    /// Rewrites the value to uppercase.
    Uppercase,
    /// Rewrites the value with its first character uppercased.
    CapitalizeFirst,
}

/// What a kind expects in the rule parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParameterKind {
    /// The parameter is ignored.
    None,
    /// A non-negative integer length.
    Length,
    /// A finite number.
    Bound,
    /// A regular expression.
    Pattern,
}

impl RuleKind {
    /// Every kind, in declaration order.
    pub const ALL: [RuleKind; 14] = [
        RuleKind::Required,
        RuleKind::MaxLen,
        RuleKind::MinLen,
        RuleKind::Alpha,
        RuleKind::Alphanumeric,
        RuleKind::Numeric,
        RuleKind::Email,
        RuleKind::LessThan,
        RuleKind::GreaterThan,
        RuleKind::Regex,
        RuleKind::Lowercase,
        RuleKind::TrimWhitespace,
        RuleKind::Uppercase,
        RuleKind::CapitalizeFirst,
    ];

    /// Returns the snake_case name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            RuleKind::Required => "required",
            RuleKind::MaxLen => "max_len",
            RuleKind::MinLen => "min_len",
            RuleKind::Alpha => "alpha",
            RuleKind::Alphanumeric => "alphanumeric",
            RuleKind::Numeric => "numeric",
            RuleKind::Email => "email",
            RuleKind::LessThan => "less_than",
            RuleKind::GreaterThan => "greater_than",
            RuleKind::Regex => "regex",
            RuleKind::Lowercase => "lowercase",
            RuleKind::TrimWhitespace => "trim_whitespace",
            RuleKind::Uppercase => "uppercase",
            RuleKind::CapitalizeFirst => "capitalize_first",
        }
    }

    /// Returns the short form-validator name.
    #[must_use]
    pub const fn short_name(self) -> &'static str {
        match self {
            RuleKind::Required => "req",
            RuleKind::MaxLen => "maxlen",
            RuleKind::MinLen => "minlen",
            RuleKind::Alpha => "alpha",
            RuleKind::Alphanumeric => "alphanum",
            RuleKind::Numeric => "num",
            RuleKind::Email => "email",
            RuleKind::LessThan => "lessthan",
            RuleKind::GreaterThan => "greaterthan",
            RuleKind::Regex => "regex",
            RuleKind::Lowercase => "lower",
            RuleKind::TrimWhitespace => "whitespace",
            RuleKind::Uppercase => "caps",
            RuleKind::CapitalizeFirst => "ucfirst",
        }
    }

    /// Returns the transformation this kind performs, if it is one.
    #[must_use]
    pub const fn transform(self) -> Option<Transform> {
        match self {
            RuleKind::Lowercase => Some(Transform::Lowercase),
            RuleKind::TrimWhitespace => Some(Transform::TrimWhitespace),
            RuleKind::Uppercase => Some(Transform::Uppercase),
            RuleKind::CapitalizeFirst => Some(Transform::CapitalizeFirst),
            _ => None,
        }
    }

    /// Returns true for the four value-rewriting kinds.
    #[must_use]
    pub const fn is_transform(self) -> bool {
        self.transform().is_some()
    }

    /// Returns what this kind expects as its parameter.
    #[must_use]
    pub const fn parameter_kind(self) -> ParameterKind {
        match self {
            RuleKind::MaxLen | RuleKind::MinLen => ParameterKind::Length,
            RuleKind::LessThan | RuleKind::GreaterThan => ParameterKind::Bound,
            RuleKind::Regex => ParameterKind::Pattern,
            _ => ParameterKind::None,
        }
    }
}

impl fmt::Display for RuleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RuleKind {
    type Err = RuleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_ascii_lowercase();
        RuleKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == name || kind.short_name() == name)
            .ok_or_else(|| RuleError::UnknownKind(s.to_owned()))
    }
}

impl TryFrom<String> for RuleKind {
    type Error = RuleError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<RuleKind> for String {
    fn from(kind: RuleKind) -> Self {
        kind.as_str().to_owned()
    }
}
