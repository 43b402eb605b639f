//! Compiled dispatch from a rule kind to its behavior.
//!
//! A [`Checker`] is built once when a rule is registered: parameters are
//! parsed and patterns compiled there, so evaluation never meets a malformed
//! rule.

use crate::foundation::{Validate, ValidationError};
use crate::transform::Transform;
use crate::validators::{
    Alphabetic, Alphanumeric, Email, GreaterThan, LessThan, MatchesRegex, MaxLength, MinLength,
    Numeric, Required,
};

use super::{RuleError, RuleKind};

/// The behavior behind one registered rule.
#[derive(Debug, Clone)]
pub(crate) enum Checker {
    Required(Required),
    MaxLen(MaxLength),
    MinLen(MinLength),
    Alpha(Alphabetic),
    Alphanumeric(Alphanumeric),
    Numeric(Numeric),
    Email(Email),
    LessThan(LessThan),
    GreaterThan(GreaterThan),
    Regex(MatchesRegex),
    Transform(Transform),
}

/// Result of running a checker against one value.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Outcome {
    Passed,
    Transformed(String),
    Failed(ValidationError),
}

impl Checker {
    /// Builds the checker for `kind`, reading `parameter` as the kind expects.
    ///
    /// Parameters given to kinds that take none are ignored.
    pub(crate) fn compile(kind: RuleKind, parameter: Option<&str>) -> Result<Self, RuleError> {
        let checker = match kind {
            RuleKind::Required => Checker::Required(Required),
            RuleKind::MaxLen => Checker::MaxLen(MaxLength::new(parse_length(kind, parameter)?)),
            RuleKind::MinLen => Checker::MinLen(MinLength::new(parse_length(kind, parameter)?)),
            RuleKind::Alpha => Checker::Alpha(Alphabetic),
            RuleKind::Alphanumeric => Checker::Alphanumeric(Alphanumeric),
            RuleKind::Numeric => Checker::Numeric(Numeric),
            RuleKind::Email => Checker::Email(Email),
            RuleKind::LessThan => Checker::LessThan(LessThan::new(parse_bound(kind, parameter)?)),
            RuleKind::GreaterThan => {
                Checker::GreaterThan(GreaterThan::new(parse_bound(kind, parameter)?))
            }
            RuleKind::Regex => {
                let pattern = require(kind, parameter)?;
                let compiled =
                    MatchesRegex::new(pattern).map_err(|source| RuleError::InvalidPattern {
                        pattern: pattern.to_owned(),
                        source,
                    })?;
                Checker::Regex(compiled)
            }
            RuleKind::Lowercase => Checker::Transform(Transform::Lowercase),
            RuleKind::TrimWhitespace => Checker::Transform(Transform::TrimWhitespace),
            RuleKind::Uppercase => Checker::Transform(Transform::Uppercase),
            RuleKind::CapitalizeFirst => Checker::Transform(Transform::CapitalizeFirst),
        };
        Ok(checker)
    }

    /// Runs the checker against `value`.
    pub(crate) fn run(&self, value: &str) -> Outcome {
        if let Checker::Transform(transform) = self {
            return Outcome::Transformed(transform.apply(value));
        }
        match self.predicate().map(|check| check.validate(value)) {
            Some(Err(error)) => Outcome::Failed(error),
            Some(Ok(())) | None => Outcome::Passed,
        }
    }

    fn predicate(&self) -> Option<&dyn Validate<Input = str>> {
        let check: &dyn Validate<Input = str> = match self {
            Checker::Required(v) => v,
            Checker::MaxLen(v) => v,
            Checker::MinLen(v) => v,
            Checker::Alpha(v) => v,
            Checker::Alphanumeric(v) => v,
            Checker::Numeric(v) => v,
            Checker::Email(v) => v,
            Checker::LessThan(v) => v,
            Checker::GreaterThan(v) => v,
            Checker::Regex(v) => v,
            Checker::Transform(_) => return None,
        };
        Some(check)
    }
}

fn require(kind: RuleKind, parameter: Option<&str>) -> Result<&str, RuleError> {
    parameter
        .filter(|p| !p.is_empty())
        .ok_or(RuleError::MissingParameter { kind })
}

fn parse_length(kind: RuleKind, parameter: Option<&str>) -> Result<usize, RuleError> {
    let value = require(kind, parameter)?;
    value
        .trim()
        .parse()
        .map_err(|_| RuleError::invalid_parameter(kind, value, "expected a non-negative integer"))
}

fn parse_bound(kind: RuleKind, parameter: Option<&str>) -> Result<f64, RuleError> {
    let value = require(kind, parameter)?;
    match value.trim().parse::<f64>() {
        Ok(bound) if bound.is_finite() => Ok(bound),
        _ => Err(RuleError::invalid_parameter(
            kind,
            value,
            "expected a finite number",
        )),
    }
}
