//! Character class checks
//!
//! These only accept ASCII letters and digits. Each one asks "is there a
//! character outside the class?", so the empty string passes all three.

use crate::foundation::{ValidationError, templates};

crate::validator! {
    /// Validates that every character is an ASCII letter or digit.
    pub Alphanumeric for str;
    rule(input) { input.bytes().all(|b| b.is_ascii_alphanumeric()) }
    error(input) { ValidationError::new("alphanumeric", templates::ALPHANUMERIC) }
    fn alphanumeric();
}

crate::validator! {
    /// Validates that every character is an ASCII letter.
    pub Alphabetic for str;
    rule(input) { input.bytes().all(|b| b.is_ascii_alphabetic()) }
    error(input) { ValidationError::new("alphabetic", templates::ALPHABETIC) }
    fn alphabetic();
}

crate::validator! {
    /// Validates that every character is an ASCII digit.
    ///
    /// Signs, decimal points and exponents are rejected.
    pub Numeric for str;
    rule(input) { is_digits(input) }
    error(input) { ValidationError::new("numeric", templates::NUMERIC) }
    fn numeric();
}

/// Returns true when `input` holds nothing but ASCII digits.
#[inline]
pub(crate) fn is_digits(input: &str) -> bool {
    input.bytes().all(|b| b.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::Validate;
    use rstest::rstest;

    #[rstest]
    #[case("hello123", true)]
    #[case("hello_123", false)]
    #[case("hello 123", false)]
    #[case("héllo", false)]
    fn test_alphanumeric(#[case] input: &str, #[case] ok: bool) {
        assert_eq!(alphanumeric().validate(input).is_ok(), ok);
    }

    #[rstest]
    #[case("Hello", true)]
    #[case("hello123", false)]
    #[case("two words", false)]
    fn test_alphabetic(#[case] input: &str, #[case] ok: bool) {
        assert_eq!(alphabetic().validate(input).is_ok(), ok);
    }

    #[rstest]
    #[case("123", true)]
    #[case("12a", false)]
    #[case("-12", false)]
    #[case("1.5", false)]
    #[case("١٢٣", false)]
    fn test_numeric(#[case] input: &str, #[case] ok: bool) {
        assert_eq!(numeric().validate(input).is_ok(), ok);
    }

    #[test]
    fn test_empty_string_passes_character_classes() {
        assert!(alphanumeric().validate("").is_ok());
        assert!(alphabetic().validate("").is_ok());
        assert!(numeric().validate("").is_ok());
    }
}
