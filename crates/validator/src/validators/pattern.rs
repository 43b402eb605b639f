//! Pattern checks: email shape and caller-supplied regular expressions.

use std::borrow::Cow;
use std::sync::LazyLock;

use crate::foundation::{ValidationError, templates};

static EMAIL_REGEX: LazyLock<regex::Regex> = LazyLock::new(|| {
    regex::Regex::new(r"^[_.0-9a-zA-Z-]+@([0-9a-zA-Z][0-9a-zA-Z-]+\.)+[a-zA-Z]{2,6}$")
        .expect("email pattern is a valid regex")
});

/// Characters accepted as PCRE-style pattern delimiters.
const DELIMITERS: [char; 3] = ['/', '#', '~'];

/// Trailing modifiers that map one-to-one onto inline regex flags.
const FLAGS: &str = "imsxU";

// ============================================================================
// EMAIL
// ============================================================================

crate::validator! {
    /// Validates that a string has the general shape of an email address.
    ///
    /// Local part of word characters, dots and dashes; one or more
    /// dot-terminated domain labels of at least two characters; a top-level
    /// label of 2 to 6 letters. The empty string fails.
    pub Email for str;
    rule(input) { EMAIL_REGEX.is_match(input) }
    error(input) { ValidationError::new("email", templates::EMAIL) }
    fn email();
}

// ============================================================================
// REGEX
// ============================================================================

crate::validator! {
    /// Validates that a string matches a regular expression.
    ///
    /// Patterns written for `preg_match`, such as `/^[a-z]+$/i`, are
    /// unwrapped first (see [`normalize_pattern`]).
    pub MatchesRegex { pattern: regex::Regex } for str;
    rule(self, input) { self.pattern.is_match(input) }
    error(self, input) { ValidationError::pattern(self.pattern.as_str().to_owned()) }
    new(pattern: &str) -> regex::Error {
        Ok(Self {
            pattern: regex::Regex::new(&normalize_pattern(pattern))?,
        })
    }
    fn matches_regex(pattern: &str) -> regex::Error;
}

/// Strips PCRE delimiters and turns trailing modifiers into an inline flag
/// group.
///
/// A pattern qualifies when it starts with `/`, `#` or `~`, contains the same
/// delimiter again later, and everything after the last delimiter is one of
/// `imsxU`. Anything else is returned unchanged.
///
/// ```rust
/// use formcheck_validator::validators::normalize_pattern;
///
/// assert_eq!(normalize_pattern("/^[a-z]+$/i"), "(?i)^[a-z]+$");
/// assert_eq!(normalize_pattern("#\\d+#"), "\\d+");
/// assert_eq!(normalize_pattern("^[A-Z]+$"), "^[A-Z]+$");
/// ```
pub fn normalize_pattern(pattern: &str) -> Cow<'_, str> {
    let Some(delimiter) = pattern.chars().next().filter(|c| DELIMITERS.contains(c)) else {
        return Cow::Borrowed(pattern);
    };
    let rest = &pattern[delimiter.len_utf8()..];
    let Some(close) = rest.rfind(delimiter) else {
        return Cow::Borrowed(pattern);
    };
    let (body, modifiers) = (&rest[..close], &rest[close + delimiter.len_utf8()..]);
    if !modifiers.chars().all(|c| FLAGS.contains(c)) {
        return Cow::Borrowed(pattern);
    }

    let mut flags = String::new();
    for flag in modifiers.chars() {
        if !flags.contains(flag) {
            flags.push(flag);
        }
    }

    if flags.is_empty() {
        Cow::Owned(body.to_owned())
    } else {
        Cow::Owned(format!("(?{flags}){body}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::Validate;
    use rstest::rstest;

    #[rstest]
    #[case("a.b-c@sub.domain.com", true)]
    #[case("user_1@example.org", true)]
    #[case("USER@EXAMPLE.COM", true)]
    #[case("not-an-email", false)]
    #[case("", false)]
    #[case("user@", false)]
    #[case("@example.com", false)]
    #[case("user@a.com", false)]
    #[case("user@example.toolongtld", false)]
    #[case("user+tag@example.com", false)]
    fn test_email(#[case] input: &str, #[case] ok: bool) {
        assert_eq!(email().validate(input).is_ok(), ok);
    }

    #[test]
    fn test_regex() {
        let check = matches_regex("^[A-Z]+$").unwrap();
        assert!(check.validate("ABC").is_ok());
        assert!(check.validate("abc").is_err());
    }

    #[test]
    fn test_regex_with_delimiters_and_flags() {
        let check = matches_regex("/^[a-z]+$/i").unwrap();
        assert!(check.validate("ABC").is_ok());
        assert!(check.validate("AB1").is_err());
    }

    #[test]
    fn test_invalid_regex() {
        assert!(matches_regex("[unclosed").is_err());
    }

    #[rstest]
    #[case("/abc/", "abc")]
    #[case("/abc/ii", "(?i)abc")]
    #[case("~a/b~ms", "(?ms)a/b")]
    #[case("/abc/g", "/abc/g")]
    #[case("/", "/")]
    #[case("/usr/local", "/usr/local")]
    fn test_normalize_pattern(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(normalize_pattern(input), expected);
    }

    #[test]
    fn test_regex_error_carries_pattern() {
        let error = matches_regex("^x$").unwrap().validate("y").unwrap_err();
        assert_eq!(error.code, "pattern");
        assert_eq!(error.param("pattern"), Some("^x$"));
    }
}
