//! Configuration errors raised when a rule is registered.
//!
//! These never come out of a validation run. A rule that cannot be evaluated
//! is refused up front instead of failing later with no message.

use std::borrow::Cow;

use super::RuleKind;

/// A rule could not be registered.
#[derive(Debug, Clone, thiserror::Error)]
#[non_exhaustive]
pub enum RuleError {
    /// The rule kind name matches no known kind.
    #[error("unknown rule kind '{0}'")]
    UnknownKind(String),

    /// The kind needs a parameter and none (or an empty one) was given.
    #[error("rule '{kind}' requires a parameter")]
    MissingParameter {
        /// Kind of the refused rule.
        kind: RuleKind,
    },

    /// The parameter could not be read as the kind expects.
    #[error("invalid parameter '{value}' for rule '{kind}': {reason}")]
    InvalidParameter {
        /// Kind of the refused rule.
        kind: RuleKind,
        /// The parameter as given.
        value: String,
        /// What was expected instead.
        reason: Cow<'static, str>,
    },

    /// The regex parameter does not compile.
    #[error("invalid pattern '{pattern}': {source}")]
    InvalidPattern {
        /// The pattern as given.
        pattern: String,
        /// Compiler error.
        #[source]
        source: regex::Error,
    },
}

impl RuleError {
    /// Creates an `InvalidParameter` error.
    pub fn invalid_parameter(
        kind: RuleKind,
        value: impl Into<String>,
        reason: impl Into<Cow<'static, str>>,
    ) -> Self {
        Self::InvalidParameter {
            kind,
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Returns the kind of the refused rule, when it is known.
    #[must_use]
    pub fn kind(&self) -> Option<RuleKind> {
        match self {
            Self::MissingParameter { kind } | Self::InvalidParameter { kind, .. } => Some(*kind),
            Self::InvalidPattern { .. } => Some(RuleKind::Regex),
            Self::UnknownKind(_) => None,
        }
    }
}
