//! String length checks
//!
//! Length is measured in Unicode scalar values (chars), so a multi-byte
//! letter counts once.

use crate::foundation::ValidationError;

// ============================================================================
// REQUIRED
// ============================================================================

crate::validator! {
    /// Validates that a value is present and non-empty.
    ///
    /// A field missing from the value map reaches this check as `""`.
    pub Required for str;
    rule(input) { !input.is_empty() }
    error(input) { ValidationError::required() }
    fn required();
}

// ============================================================================
// MIN LENGTH
// ============================================================================

crate::validator! {
    /// Validates that a string has at least `min` characters.
    #[derive(Copy, PartialEq, Eq, Hash)]
    pub MinLength { min: usize } for str;
    rule(self, input) { input.chars().count() >= self.min }
    error(self, input) { ValidationError::min_length(self.min, input.chars().count()) }
    fn min_length(min: usize);
}

// ============================================================================
// MAX LENGTH
// ============================================================================

crate::validator! {
    /// Validates that a string has at most `max` characters.
    #[derive(Copy, PartialEq, Eq, Hash)]
    pub MaxLength { max: usize } for str;
    rule(self, input) { input.chars().count() <= self.max }
    error(self, input) { ValidationError::max_length(self.max, input.chars().count()) }
    fn max_length(max: usize);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::Validate;
    use rstest::rstest;

    #[rstest]
    #[case("", false)]
    #[case(" ", true)]
    #[case("x", true)]
    fn test_required(#[case] input: &str, #[case] ok: bool) {
        assert_eq!(required().validate(input).is_ok(), ok);
    }

    #[rstest]
    #[case("ab", false)]
    #[case("abc", true)]
    #[case("abcd", true)]
    fn test_min_length(#[case] input: &str, #[case] ok: bool) {
        assert_eq!(min_length(3).validate(input).is_ok(), ok);
    }

    #[rstest]
    #[case("abcde", true)]
    #[case("abcdef", false)]
    #[case("", true)]
    fn test_max_length(#[case] input: &str, #[case] ok: bool) {
        assert_eq!(max_length(5).validate(input).is_ok(), ok);
    }

    #[test]
    fn test_length_counts_chars_not_bytes() {
        assert!(max_length(5).validate("héllo").is_ok());
        assert!(min_length(5).validate("日本語").is_err());
    }

    #[test]
    fn test_min_length_error_params() {
        let error = min_length(3).validate("ab").unwrap_err();
        assert_eq!(error.code, "min_length");
        assert_eq!(error.param("min"), Some("3"));
        assert_eq!(error.param("actual"), Some("2"));
    }
}
