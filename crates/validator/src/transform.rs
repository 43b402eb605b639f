//! Value transformations
//!
//! Transformations always succeed. The engine writes their output back into
//! the value map under the same key, so later rules on the same field see
//! the transformed value.

use serde::{Deserialize, Serialize};

/// A rewrite applied to a field value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Transform {
    /// Lowercases every character.
    Lowercase,
    /// Strips leading and trailing whitespace.
    TrimWhitespace,
    /// Uppercases every character.
    Uppercase,
    /// Uppercases the first character and leaves the rest untouched.
    CapitalizeFirst,
}

impl Transform {
    /// Applies the transformation.
    ///
    /// ```rust
    /// use formcheck_validator::transform::Transform;
    ///
    /// assert_eq!(Transform::CapitalizeFirst.apply("hello"), "Hello");
    /// assert_eq!(Transform::TrimWhitespace.apply("  hi  "), "hi");
    /// ```
    #[must_use]
    pub fn apply(self, input: &str) -> String {
        match self {
            Transform::Lowercase => input.to_lowercase(),
            Transform::TrimWhitespace => input.trim().to_owned(),
            Transform::Uppercase => input.to_uppercase(),
            Transform::CapitalizeFirst => capitalize_first(input),
        }
    }
}

fn capitalize_first(input: &str) -> String {
    let mut chars = input.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Transform::Lowercase, "HELLO", "hello")]
    #[case(Transform::TrimWhitespace, "  hi  ", "hi")]
    #[case(Transform::TrimWhitespace, "\t\nhi there\r\n", "hi there")]
    #[case(Transform::Uppercase, "hi", "HI")]
    #[case(Transform::CapitalizeFirst, "hello", "Hello")]
    #[case(Transform::CapitalizeFirst, "hELLO wORLD", "HELLO wORLD")]
    #[case(Transform::CapitalizeFirst, "", "")]
    #[case(Transform::CapitalizeFirst, "élan", "Élan")]
    #[case(Transform::Uppercase, "straße", "STRASSE")]
    fn test_apply(#[case] transform: Transform, #[case] input: &str, #[case] expected: &str) {
        assert_eq!(transform.apply(input), expected);
    }

    #[test]
    fn test_transforms_are_idempotent() {
        for transform in [
            Transform::Lowercase,
            Transform::TrimWhitespace,
            Transform::Uppercase,
            Transform::CapitalizeFirst,
        ] {
            let once = transform.apply("  MiXeD Case  ");
            assert_eq!(transform.apply(&once), once);
        }
    }
}
