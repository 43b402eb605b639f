//! Error types for rule failures
//!
//! A [`ValidationError`] carries a machine-readable code, a message template,
//! the field it belongs to and the template parameters. Templates use
//! `{name}` placeholders; `{field}` resolves to the field name and every other
//! placeholder resolves to the parameter of the same name.
//!
//! All string fields use `Cow<'static, str>` so the built-in codes and
//! templates never allocate.

use std::borrow::Cow;
use std::fmt;

use serde::Serialize;

// ============================================================================
// MESSAGE TEMPLATES
// ============================================================================

/// Default message templates for the built-in checks.
pub mod templates {
    /// `Required` failed.
    pub const REQUIRED: &str = "Please enter the value for {field}";
    /// `MaxLen` failed.
    pub const MAX_LENGTH: &str = "Maximum length exceeded for {field}.";
    /// `MinLen` failed.
    pub const MIN_LENGTH: &str = "Please enter input with length more than {min} for {field}";
    /// `Alphanumeric` failed.
    pub const ALPHANUMERIC: &str =
        "Please provide an alpha-numeric (letters and numbers only) input for {field}";
    /// `Numeric` failed.
    pub const NUMERIC: &str = "Please provide numeric input for {field}";
    /// `Alpha` failed.
    pub const ALPHABETIC: &str = "Please provide alphabetic input for {field}";
    /// `Email` failed.
    pub const EMAIL: &str = "Please provide a valid email address";
    /// `LessThan` failed.
    pub const LESS_THAN: &str = "Enter a numeric value less than {bound} for {field}";
    /// `GreaterThan` failed.
    pub const GREATER_THAN: &str = "Enter a numeric value greater than {bound} for {field}";
    /// `Regex` failed.
    pub const PATTERN: &str = "Please provide a valid input for {field}";
}

// ============================================================================
// VALIDATION ERROR
// ============================================================================

/// A structured rule failure.
///
/// # Examples
///
/// ```rust
/// use formcheck_validator::foundation::ValidationError;
///
/// let error = ValidationError::new("min_length", "Need more than {min} for {field}")
///     .with_field("username")
///     .with_param("min", "3");
///
/// assert_eq!(error.render(), "Need more than 3 for username");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationError {
    /// Error code for programmatic handling.
    ///
    /// Examples: "required", "max_length", "email"
    pub code: Cow<'static, str>,

    /// Message template in English, with `{name}` placeholders.
    pub message: Cow<'static, str>,

    /// Field the failure belongs to. Set by the engine.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<Cow<'static, str>>,

    /// Template parameters as ordered key-value pairs (typically 0-2).
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub params: Vec<(Cow<'static, str>, Cow<'static, str>)>,
}

impl ValidationError {
    /// Creates a new error with a code and message template.
    pub fn new(code: impl Into<Cow<'static, str>>, message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            field: None,
            params: Vec::new(),
        }
    }

    /// Sets the field this error belongs to.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_field(mut self, field: impl Into<Cow<'static, str>>) -> Self {
        self.field = Some(field.into());
        self
    }

    /// Adds a template parameter.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_param(
        mut self,
        key: impl Into<Cow<'static, str>>,
        value: impl Into<Cow<'static, str>>,
    ) -> Self {
        self.params.push((key.into(), value.into()));
        self
    }

    /// Looks up a parameter value by key.
    #[must_use]
    pub fn param(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| k.as_ref() == key)
            .map(|(_, v)| v.as_ref())
    }

    /// Renders the message template.
    ///
    /// Placeholders with no matching value are left untouched.
    #[must_use]
    pub fn render(&self) -> String {
        let template = self.message.as_ref();
        let mut out = String::with_capacity(template.len() + 16);
        let mut rest = template;

        while let Some(open) = rest.find('{') {
            out.push_str(&rest[..open]);
            let tail = &rest[open + 1..];
            let Some(close) = tail.find('}') else {
                out.push_str(&rest[open..]);
                return out;
            };
            let key = &tail[..close];
            match self.lookup(key) {
                Some(value) => out.push_str(value),
                None => {
                    out.push('{');
                    out.push_str(key);
                    out.push('}');
                }
            }
            rest = &tail[close + 1..];
        }

        out.push_str(rest);
        out
    }

    fn lookup(&self, key: &str) -> Option<&str> {
        if key == "field" {
            self.field.as_deref()
        } else {
            self.param(key)
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.field {
            Some(field) => write!(f, "[{}] {}: {}", field, self.code, self.render()),
            None => write!(f, "{}: {}", self.code, self.render()),
        }
    }
}

impl std::error::Error for ValidationError {}

// ============================================================================
// CONVENIENCE CONSTRUCTORS
// ============================================================================

impl ValidationError {
    /// Creates a "required" error.
    pub fn required() -> Self {
        Self::new("required", templates::REQUIRED)
    }

    /// Creates a "max_length" error.
    pub fn max_length(max: usize, actual: usize) -> Self {
        Self::new("max_length", templates::MAX_LENGTH)
            .with_param("max", max.to_string())
            .with_param("actual", actual.to_string())
    }

    /// Creates a "min_length" error.
    pub fn min_length(min: usize, actual: usize) -> Self {
        Self::new("min_length", templates::MIN_LENGTH)
            .with_param("min", min.to_string())
            .with_param("actual", actual.to_string())
    }

    /// Creates a "less_than" error.
    pub fn less_than(bound: f64) -> Self {
        Self::new("less_than", templates::LESS_THAN).with_param("bound", bound.to_string())
    }

    /// Creates a "greater_than" error.
    pub fn greater_than(bound: f64) -> Self {
        Self::new("greater_than", templates::GREATER_THAN).with_param("bound", bound.to_string())
    }

    /// Creates a "pattern" error.
    pub fn pattern(pattern: impl Into<Cow<'static, str>>) -> Self {
        Self::new("pattern", templates::PATTERN).with_param("pattern", pattern)
    }
}

// ============================================================================
// TESTS
// ============================================================================
